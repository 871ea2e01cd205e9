use sweep_core::{
    driver::{Command, Connection, TransactionId},
    Result,
};

/// Scoped adoption of the session's connection and transaction.
///
/// The scope opens the connection when it was closed and begins a
/// transaction when none is ambient; it is then responsible for exactly what
/// it created. [`finish`](StoreScope::finish) commits the owned transaction
/// and closes the owned connection; dropping an unfinished scope rolls the
/// owned transaction back instead. An adopted (ambient) transaction is never
/// committed or rolled back here, and an adopted connection is never closed.
pub(crate) struct StoreScope<'a, C: Connection> {
    connection: &'a mut C,
    transaction: TransactionId,
    owns_connection: bool,
    owns_transaction: bool,
    finished: bool,
}

impl<'a, C: Connection> StoreScope<'a, C> {
    pub(crate) fn adopt(
        connection: &'a mut C,
        ambient: Option<TransactionId>,
    ) -> Result<StoreScope<'a, C>> {
        let owns_connection = !connection.is_open();
        if owns_connection {
            connection.open()?;
        }

        let (transaction, owns_transaction) = match ambient {
            Some(id) => (id, false),
            None => match connection.begin_transaction() {
                Ok(id) => (id, true),
                Err(err) => {
                    if owns_connection {
                        connection.close();
                    }
                    return Err(err);
                }
            },
        };

        Ok(StoreScope {
            connection,
            transaction,
            owns_connection,
            owns_transaction,
            finished: false,
        })
    }

    pub(crate) fn execute(&mut self, command: &Command) -> Result<u64> {
        self.connection.execute(command, self.transaction)
    }

    /// Commits and releases what the scope owns. The owned connection is
    /// closed even when the commit fails.
    pub(crate) fn finish(mut self) -> Result<()> {
        self.finished = true;

        let committed = if self.owns_transaction {
            self.connection.commit_transaction(self.transaction)
        } else {
            Ok(())
        };

        if self.owns_connection {
            self.connection.close();
        }

        committed
    }
}

impl<C: Connection> Drop for StoreScope<'_, C> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }

        if self.owns_transaction {
            // Best effort: the error that unwound the scope is the one the
            // caller sees.
            let _ = self.connection.rollback_transaction(self.transaction);
        }

        if self.owns_connection {
            self.connection.close();
        }
    }
}
