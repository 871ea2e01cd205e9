use super::Error;

/// Error when a correlated assignment expression cannot be processed.
///
/// The predicate compiler renders a correlated selector as a single-column
/// projection with a fixed shape (`SELECT <expr> AS [alias] FROM <source> AS
/// [alias]`). When the rendered SQL does not match that shape, the value
/// expression cannot be recovered and the assignment is rejected.
#[derive(Debug)]
pub(super) struct UnsupportedExpression {
    pub(super) message: Box<str>,
}

impl core::fmt::Display for UnsupportedExpression {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported expression: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported expression error.
    pub fn unsupported_expression(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedExpression(
            UnsupportedExpression {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported expression error.
    pub fn is_unsupported_expression(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedExpression(_))
    }
}
