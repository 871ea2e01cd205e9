use std::fmt;

/// Handle to a driver-side transaction.
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct TransactionId(pub u64);

impl fmt::Debug for TransactionId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TransactionId({})", self.0)
    }
}
