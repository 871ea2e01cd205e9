use super::{Assignment, DerivedJoin, Statement};

/// A set-based UPDATE over all rows matched by the derived key table.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// The target table.
    pub table: String,

    /// SET fragments, in update-specification order.
    pub assignments: Vec<Assignment>,

    /// The key join carrying the predicate.
    pub join: DerivedJoin,
}

impl From<Update> for Statement {
    fn from(src: Update) -> Statement {
        Statement::Update(src)
    }
}
