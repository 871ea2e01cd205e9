use super::{DerivedJoin, Statement};

/// A set-based DELETE over all rows matched by the derived key table.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    /// The target table.
    pub table: String,

    /// The key join carrying the predicate.
    pub join: DerivedJoin,
}

impl From<Delete> for Statement {
    fn from(src: Delete) -> Statement {
        Statement::Delete(src)
    }
}
