use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::{FALSE, TRUE, Value},
    },
};

impl Evaluator<'_> {
    /// Evaluates a prefix operation on a value.
    ///
    /// Supported operators:
    /// - `Not`: `true` → `false`, `false` → `true`, `null` → `true`, and any
    ///   other value → `false`. Never an error.
    /// - `Negate`: wrapping integer negation.
    /// - `Complement`: bitwise complement of an integer.
    ///
    /// `Negate` and `Complement` on a non-integer produce
    /// `unknown operator: -<KIND>` / `unknown operator: ^<KIND>`.
    ///
    /// # Example
    /// ```
    /// use turtls::{
    ///     ast::PrefixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_prefix(PrefixOperator::Negate, &Value::Integer(5), 1).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Evaluator::eval_prefix(PrefixOperator::Not, &Value::Integer(5), 1).unwrap();
    /// assert_eq!(v, Value::Boolean(false));
    ///
    /// let err = Evaluator::eval_prefix(PrefixOperator::Complement, &Value::Null, 1).unwrap_err();
    /// assert_eq!(err.to_string(), "unknown operator: ^NULL");
    /// ```
    pub fn eval_prefix(op: PrefixOperator, operand: &Value, line: usize) -> EvalResult<Value> {
        match (op, operand) {
            (PrefixOperator::Not, _) => Ok(Self::eval_not(operand)),
            (PrefixOperator::Negate, Value::Integer(n)) => Ok(Value::Integer(n.wrapping_neg())),
            (PrefixOperator::Complement, Value::Integer(n)) => Ok(Value::Integer(!n)),
            (PrefixOperator::Negate | PrefixOperator::Complement, _) => {
                Err(RuntimeError::UnknownPrefixOperator { op,
                                                          operand: operand.kind(),
                                                          line })
            },
        }
    }

    /// Logical negation restricted to the three-way switch on `true`, `false`
    /// and `null`.
    const fn eval_not(operand: &Value) -> Value {
        match operand {
            Value::Boolean(false) | Value::Null => TRUE,
            _ => FALSE,
        }
    }
}
