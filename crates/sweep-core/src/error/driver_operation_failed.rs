use super::Error;

/// Error when the underlying database driver fails while executing a batch
/// statement. The driver error is wrapped unmodified and exposed through
/// [`std::error::Error::source`].
#[derive(Debug)]
pub(super) struct DriverOperationFailed {
    pub(super) source: Box<dyn std::error::Error + Send + Sync>,
}

impl core::fmt::Display for DriverOperationFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "driver operation failed: {}", self.source)
    }
}

impl Error {
    /// Creates a driver operation error wrapping the driver's own error.
    pub fn driver_operation_failed(
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Error {
        Error::from(super::ErrorKind::DriverOperationFailed(
            DriverOperationFailed {
                source: source.into(),
            },
        ))
    }

    /// Returns `true` if this error is a driver operation error.
    pub fn is_driver_operation_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DriverOperationFailed(_))
    }
}
