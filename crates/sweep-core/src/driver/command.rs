use crate::stmt::Param;

use std::time::Duration;

/// A fully materialized statement, ready for the driver.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    /// Statement text. Parameters are referenced as `@name`.
    pub text: String,

    /// The command's parameter set. Names are unique within one command.
    pub params: Vec<Param>,

    /// Command timeout, taken from the session configuration when set.
    pub timeout: Option<Duration>,
}
