use super::Value;

/// An update value that does not reference the entity being updated.
///
/// Independent expressions are evaluated exactly once, eagerly, on the
/// client before any SQL is built. No runtime code generation is involved:
/// the variant is the evaluator.
pub enum ValueExpr {
    /// A literal written in the update specification.
    Constant(Value),

    /// A value captured from the caller's environment.
    Captured(Value),

    /// A scalar computed at evaluation time.
    Computed(Box<dyn Fn() -> Value + Send + Sync>),
}

impl ValueExpr {
    pub fn constant(value: impl Into<Value>) -> Self {
        Self::Constant(value.into())
    }

    pub fn captured(value: impl Into<Value>) -> Self {
        Self::Captured(value.into())
    }

    pub fn computed(f: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Self::Computed(Box::new(f))
    }

    /// Evaluates the expression to a concrete value.
    pub fn eval(&self) -> Value {
        match self {
            Self::Constant(value) => value.clone(),
            Self::Captured(value) => value.clone(),
            Self::Computed(f) => f(),
        }
    }
}

impl core::fmt::Debug for ValueExpr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Self::Captured(value) => f.debug_tuple("Captured").field(value).finish(),
            Self::Computed(_) => f.debug_tuple("Computed").finish(),
        }
    }
}
