/// Maps one key property to its column.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    /// Name of the key property on the entity.
    pub property: String,

    /// Name of the backing column.
    pub column: String,
}
