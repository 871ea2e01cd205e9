use super::{Command, TransactionId};
use crate::Result;

/// A live database connection, as exposed by the driver.
///
/// Batch execution is synchronous and blocking; each call runs one statement
/// inside one transaction. The connection owns its transaction state and
/// hands out [`TransactionId`] handles for commit/rollback bookkeeping.
pub trait Connection {
    /// Whether the connection is currently open.
    fn is_open(&self) -> bool;

    /// Opens the connection.
    fn open(&mut self) -> Result<()>;

    /// Closes the connection. Closing disposes any transaction that is
    /// still pending, which rolls it back on the server.
    fn close(&mut self);

    /// Begins a new transaction and returns its handle.
    fn begin_transaction(&mut self) -> Result<TransactionId>;

    /// Commits the identified transaction.
    fn commit_transaction(&mut self, id: TransactionId) -> Result<()>;

    /// Rolls back the identified transaction.
    fn rollback_transaction(&mut self, id: TransactionId) -> Result<()>;

    /// Executes a command inside the identified transaction and returns the
    /// affected-row count reported by the database.
    fn execute(&mut self, command: &Command, transaction: TransactionId) -> Result<u64>;
}
