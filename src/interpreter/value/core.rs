use std::rc::Rc;

use crate::{error::RuntimeError, interpreter::value::kind::ValueKind};

/// The canonical `null` value.
pub const NULL: Value = Value::Null;
/// The canonical `true` value.
pub const TRUE: Value = Value::Boolean(true);
/// The canonical `false` value.
pub const FALSE: Value = Value::Boolean(false);

/// Represents a runtime value in the interpreter.
///
/// The value model is a pure data carrier: arithmetic, comparison and
/// truthiness live in the evaluator. `PartialEq` is structural and exists for
/// tests and embedders; the language's own `==` uses
/// [`Value::is_identical`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// The absence of a value, produced by an `if` without a taken branch.
    Null,
    /// A boolean value (`true` or `false`).
    Boolean(bool),
    /// A 64-bit signed integer with wrapping arithmetic.
    Integer(i64),
    /// A value travelling up from a `return` statement. Blocks pass it through
    /// untouched; the program unwraps it.
    ReturnValue(Rc<Self>),
    /// A failed evaluation. Once produced it is never operated on.
    Error(RuntimeError),
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        if value { TRUE } else { FALSE }
    }
}

impl From<RuntimeError> for Value {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

impl Value {
    /// Wraps `value` as an in-flight `return`.
    #[must_use]
    pub fn return_value(value: Self) -> Self {
        Self::ReturnValue(Rc::new(value))
    }

    /// Returns the kind tag of the value.
    ///
    /// # Example
    /// ```
    /// use turtls::interpreter::value::{core::Value, kind::ValueKind};
    ///
    /// assert_eq!(Value::Integer(3).kind(), ValueKind::Integer);
    /// assert_eq!(Value::from(true).kind().to_string(), "BOOLEAN");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::ReturnValue(_) => ValueKind::ReturnValue,
            Self::Error(_) => ValueKind::Error,
        }
    }

    /// Reports whether two values are the same instance.
    ///
    /// `null`, `true` and `false` are canonical, so every occurrence of one of
    /// them is the same instance. A `ReturnValue` is only identical to a copy
    /// of itself. Errors are never identical to anything.
    ///
    /// # Example
    /// ```
    /// use turtls::interpreter::value::core::{FALSE, NULL, TRUE, Value};
    ///
    /// assert!(TRUE.is_identical(&Value::from(true)));
    /// assert!(NULL.is_identical(&Value::Null));
    /// assert!(!TRUE.is_identical(&FALSE));
    ///
    /// let returned = Value::return_value(Value::Integer(1));
    /// assert!(returned.is_identical(&returned.clone()));
    /// assert!(!returned.is_identical(&Value::return_value(Value::Integer(1))));
    /// ```
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::ReturnValue(a), Self::ReturnValue(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Returns `true` if the value is [`Value::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::ReturnValue(inner) => write!(f, "{inner}"),
            Self::Error(error) => write!(f, "ERROR: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn booleans_resolve_to_canonical_instances() {
        assert_eq!(Value::from(true), TRUE);
        assert_eq!(Value::from(false), FALSE);
        assert!(Value::from(1 < 2).is_identical(&TRUE));
    }

    #[test]
    fn values_of_different_kinds_are_never_identical() {
        assert!(!NULL.is_identical(&FALSE));
        assert!(!Value::Integer(0).is_identical(&FALSE));
        assert!(!Value::Integer(1).is_identical(&Value::return_value(Value::Integer(1))));
    }

    #[test]
    fn errors_are_not_identical_to_themselves() {
        let error = Value::from(RuntimeError::MissingValue { line: 1 });
        assert!(!error.is_identical(&error.clone()));
    }

    #[test]
    fn rendering() {
        assert_eq!(NULL.to_string(), "null");
        assert_eq!(TRUE.to_string(), "true");
        assert_eq!(Value::Integer(-42).to_string(), "-42");
        assert_eq!(Value::return_value(Value::Integer(7)).to_string(), "7");
        assert_eq!(Value::from(RuntimeError::IdentifierNotFound { name: "y".into(),
                                                                  line: 1, }).to_string(),
                   "ERROR: identifier not found: y");
    }
}
