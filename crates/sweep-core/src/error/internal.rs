use super::Error;

/// Error for internal consistency failures.
///
/// These states should be unreachable when the entity map matches the entity
/// type. They are reported as explicit errors rather than assertions so a
/// defect never turns into a panic inside a caller's transaction.
#[derive(Debug)]
pub(super) struct Internal {
    pub(super) message: Box<str>,
}

impl core::fmt::Display for Internal {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "internal error: {}; this is a bug in sweep", self.message)
    }
}

impl Error {
    /// Creates an internal consistency error.
    pub fn internal(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Internal(Internal {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an internal consistency error.
    pub fn is_internal(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Internal(_))
    }
}
