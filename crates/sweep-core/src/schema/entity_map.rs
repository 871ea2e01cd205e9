use super::{KeyMap, PropertyMap};

/// Static mapping metadata for one entity type.
///
/// An `EntityMap` is constructed by the mapping-metadata provider and treated
/// as immutable, read-only input for the lifetime of every batch call.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityMap {
    /// Name of the entity type, used in diagnostics.
    pub entity: String,

    /// Name of the table backing the entity.
    ///
    /// Emitted into SQL verbatim, so it may carry schema qualification and
    /// quoting of its own (e.g. `[dbo].[Orders]`).
    pub table: String,

    /// The entity's key columns, in key-declaration order. Composite keys
    /// are supported; the derived-table join emits one equality conjunct per
    /// entry, in this order.
    pub keys: Vec<KeyMap>,

    /// The entity's mapped properties. Entries are scalar columns or complex
    /// groups (owned value objects mapping one property to several columns).
    pub properties: Vec<PropertyMap>,
}

impl EntityMap {
    /// Resolves a property path to its map entry.
    ///
    /// The path resolves directly against the top-level properties, or one
    /// level deep into a complex group via a dotted path
    /// (`"Audit.ModifiedAt"`). Deeper nesting is not supported.
    pub fn property(&self, path: &str) -> Option<&PropertyMap> {
        PropertyMap::resolve(&self.properties, path)
    }

    /// The key property names, in key order. This is the projection handed
    /// to the predicate compiler to build the derived table.
    pub fn key_properties(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.keys.iter().map(|key| key.property.as_str())
    }

    /// The key column names, in key order. These drive the join predicate.
    pub fn key_columns(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.keys.iter().map(|key| key.column.as_str())
    }
}
