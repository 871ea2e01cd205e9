mod driver_operation_failed;
mod internal;
mod invalid_entity_map;
mod invalid_update_spec;
mod unsupported_expression;

use driver_operation_failed::DriverOperationFailed;
use internal::Internal;
use invalid_entity_map::InvalidEntityMap;
use invalid_update_spec::InvalidUpdateSpec;
use unsupported_expression::UnsupportedExpression;

/// An error that can occur in sweep.
pub struct Error {
    kind: Box<ErrorKind>,
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    DriverOperationFailed(DriverOperationFailed),
    Internal(Internal),
    InvalidEntityMap(InvalidEntityMap),
    InvalidUpdateSpec(InvalidUpdateSpec),
    UnsupportedExpression(UnsupportedExpression),
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            ErrorKind::DriverOperationFailed(err) => Some(err.source.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self.kind(), f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", &self.kind).finish()
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            DriverOperationFailed(err) => core::fmt::Display::fmt(err, f),
            Internal(err) => core::fmt::Display::fmt(err, f),
            InvalidEntityMap(err) => core::fmt::Display::fmt(err, f),
            InvalidUpdateSpec(err) => core::fmt::Display::fmt(err, f),
            UnsupportedExpression(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind: Box::new(kind),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}
