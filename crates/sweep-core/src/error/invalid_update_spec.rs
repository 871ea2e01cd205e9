use super::Error;

/// Error when an update specification violates the batch contract.
///
/// This occurs when:
/// - The specification is empty
/// - An assignment targets a property that is not present in the entity map
/// - A scalar assignment targets a complex group, or the reverse
///
/// These are caller errors and are reported before any SQL is built or
/// executed.
#[derive(Debug)]
pub(super) struct InvalidUpdateSpec {
    pub(super) message: Box<str>,
}

impl core::fmt::Display for InvalidUpdateSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid update specification: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid update specification error.
    pub fn invalid_update_spec(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidUpdateSpec(InvalidUpdateSpec {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid update specification error.
    pub fn is_invalid_update_spec(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidUpdateSpec(_))
    }
}
