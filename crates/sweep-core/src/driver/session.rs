use super::{Connection, TransactionId};

use std::time::Duration;

/// Store-resolution capabilities of the ORM context.
///
/// The context may wrap the provider-native connection behind its own
/// connection abstraction; this trait is the explicit unwrapping seam. A
/// batch call resolves the native connection and, when one is active, the
/// ambient transaction, then adopts both for the duration of the call.
pub trait Session {
    type Connection: Connection;

    /// The provider-native connection behind the context.
    fn native_connection(&mut self) -> &mut Self::Connection;

    /// The transaction already active on the context, if any. A batch call
    /// never commits or rolls back an ambient transaction.
    fn ambient_transaction(&self) -> Option<TransactionId>;

    /// The configured command timeout, applied to every synthesized command.
    fn command_timeout(&self) -> Option<Duration> {
        None
    }
}
