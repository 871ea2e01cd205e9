use sweep_core::stmt::{Param, Value};

/// One compiled SET fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// The target column.
    pub column: String,

    /// The assigned value.
    pub value: AssignValue,
}

/// The right-hand side of a compiled SET fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignValue {
    /// An independent expression, already evaluated. Null renders as a
    /// literal `NULL`; anything else materializes one fresh parameter.
    Value(Value),

    /// A correlated fragment recovered from the predicate compiler's
    /// projection, re-aliased onto `j0`. The carried parameters are re-homed
    /// onto the outer statement under fresh names at serialization.
    Expr { text: String, params: Vec<Param> },
}

impl Assignment {
    pub fn value(column: impl Into<String>, value: impl Into<Value>) -> Assignment {
        Assignment {
            column: column.into(),
            value: AssignValue::Value(value.into()),
        }
    }

    pub fn expr(column: impl Into<String>, text: impl Into<String>, params: Vec<Param>) -> Assignment {
        Assignment {
            column: column.into(),
            value: AssignValue::Expr {
                text: text.into(),
                params,
            },
        }
    }
}
