mod assignment;
pub use assignment::{AssignValue, Assignment};

mod delete;
pub use delete::Delete;

mod derived_join;
pub use derived_join::DerivedJoin;

mod update;
pub use update::Update;

use sweep_core::{query::CompiledSelect, schema::EntityMap, Error, Result};

/// A batch statement: a set-based DELETE or UPDATE joined against a derived
/// key table.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Delete(Delete),
    Update(Update),
}

impl Statement {
    /// Builds a batch DELETE from the entity map and the compiled key-only
    /// predicate query.
    pub fn batch_delete(map: &EntityMap, inner: CompiledSelect) -> Result<Statement> {
        Ok(Delete {
            table: map.table.clone(),
            join: DerivedJoin::new(map, inner)?,
        }
        .into())
    }

    /// Builds a batch UPDATE from the entity map, the compiled key-only
    /// predicate query, and the compiled assignment list.
    pub fn batch_update(
        map: &EntityMap,
        inner: CompiledSelect,
        assignments: Vec<Assignment>,
    ) -> Result<Statement> {
        if assignments.is_empty() {
            return Err(Error::invalid_update_spec(format!(
                "update specification for `{}` compiled to zero assignments",
                map.entity
            )));
        }

        Ok(Update {
            table: map.table.clone(),
            assignments,
            join: DerivedJoin::new(map, inner)?,
        }
        .into())
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Statement::Delete(_))
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Statement::Update(_))
    }

    pub fn as_delete(&self) -> Option<&Delete> {
        match self {
            Statement::Delete(delete) => Some(delete),
            _ => None,
        }
    }

    pub fn as_update(&self) -> Option<&Update> {
        match self {
            Statement::Update(update) => Some(update),
            _ => None,
        }
    }
}
