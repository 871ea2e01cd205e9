use sweep_core::{query::CompiledSelect, schema::EntityMap, Error, Result};

/// The `j0`/`j1` join skeleton shared by batch DELETE and UPDATE.
///
/// The database forbids selecting from a table while mutating it in the same
/// statement under an arbitrary predicate. Joining the target (`j0`) against
/// a derived, key-only projection of the same predicate (`j1`) sidesteps
/// that, and keeps the derived table minimal.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedJoin {
    /// The target table, repeated as the `j0` alias source.
    pub table: String,

    /// The compiled inner predicate SELECT, restricted to key columns. Its
    /// parameters are adopted onto the outer command under their own names.
    pub inner: CompiledSelect,

    /// Key column names, in key-map order. One equality conjunct is emitted
    /// per entry.
    pub key_columns: Vec<String>,
}

impl DerivedJoin {
    pub(crate) fn new(map: &EntityMap, mut inner: CompiledSelect) -> Result<DerivedJoin> {
        if map.keys.is_empty() {
            return Err(Error::invalid_entity_map(format!(
                "entity map for `{}` has no key columns",
                map.entity
            )));
        }

        inner.sql = inner.sql.trim().to_string();

        Ok(DerivedJoin {
            table: map.table.clone(),
            inner,
            key_columns: map.key_columns().map(str::to_string).collect(),
        })
    }
}
