use thiserror::Error;

use crate::{
    ast::{InfixOperator, PrefixOperator},
    interpreter::value::kind::ValueKind,
};

/// Represents all errors that can occur during evaluation.
///
/// A `RuntimeError` is the payload of [`Value::Error`]. Its `Display` output is
/// the message users see after `ERROR: `, so it never includes the line
/// number; use [`RuntimeError::line`] to locate the failing node.
///
/// [`Value::Error`]: crate::interpreter::value::core::Value::Error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to read a name that was never bound with `let`.
    #[error("identifier not found: {name}")]
    IdentifierNotFound {
        /// The name of the identifier.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A prefix operator was applied to a value kind it does not support.
    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator {
        /// The prefix operator.
        op:      PrefixOperator,
        /// Kind of the operand.
        operand: ValueKind,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The operands of an infix operator have different kinds.
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        /// Kind of the left operand.
        left:  ValueKind,
        /// The infix operator.
        op:    InfixOperator,
        /// Kind of the right operand.
        right: ValueKind,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The operands share a kind that does not support the infix operator.
    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        /// Kind of the left operand.
        left:  ValueKind,
        /// The infix operator.
        op:    InfixOperator,
        /// Kind of the right operand.
        right: ValueKind,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Attempted `/` or `%` with a zero divisor.
    #[error("division by zero")]
    DivisionByZero {
        /// The operator that was attempted.
        op:   InfixOperator,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted `<<` or `>>` with a negative shift amount.
    #[error("negative shift amount: {amount}")]
    NegativeShiftAmount {
        /// The offending shift amount.
        amount: i64,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A value was required but the sub-expression produced none.
    #[error("expression produced no value")]
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Returns the source line of the node that failed.
    ///
    /// # Example
    /// ```
    /// use turtls::error::RuntimeError;
    ///
    /// let error = RuntimeError::IdentifierNotFound { name: "y".to_string(),
    ///                                                line: 3, };
    ///
    /// assert_eq!(error.line(), 3);
    /// assert_eq!(error.to_string(), "identifier not found: y");
    /// ```
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::IdentifierNotFound { line, .. }
            | Self::UnknownPrefixOperator { line, .. }
            | Self::TypeMismatch { line, .. }
            | Self::UnknownInfixOperator { line, .. }
            | Self::DivisionByZero { line, .. }
            | Self::NegativeShiftAmount { line, .. }
            | Self::MissingValue { line } => *line,
        }
    }
}
