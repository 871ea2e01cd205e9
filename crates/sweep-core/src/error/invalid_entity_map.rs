use super::Error;

/// Error when entity mapping metadata cannot be used for a batch statement,
/// e.g. a map with no key columns. The derived-table join is keyed on the
/// primary key, so a keyless map has no join to synthesize.
#[derive(Debug)]
pub(super) struct InvalidEntityMap {
    pub(super) message: Box<str>,
}

impl core::fmt::Display for InvalidEntityMap {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid entity map: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid entity map error.
    pub fn invalid_entity_map(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidEntityMap(InvalidEntityMap {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid entity map error.
    pub fn is_invalid_entity_map(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidEntityMap(_))
    }
}
