use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates an infix operation between two values.
    ///
    /// Rules are tried in order:
    /// 1. Two integers go to the integer arithmetic table.
    /// 2. `==` compares instance identity.
    /// 3. `!=` negates that identity.
    /// 4. Operands of different kinds are a type mismatch.
    /// 5. Anything else is an unknown operator for that kind.
    ///
    /// # Example
    /// ```
    /// use turtls::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let sum = Evaluator::eval_infix(InfixOperator::Add, &Value::Integer(3), &Value::Integer(4), 1);
    /// assert_eq!(sum.unwrap(), Value::Integer(7));
    ///
    /// let same = Evaluator::eval_infix(InfixOperator::Equal, &Value::from(true), &Value::from(true), 1);
    /// assert_eq!(same.unwrap(), Value::Boolean(true));
    ///
    /// let err = Evaluator::eval_infix(InfixOperator::Add, &Value::Integer(5), &Value::from(true), 1);
    /// assert_eq!(err.unwrap_err().to_string(), "type mismatch: INTEGER + BOOLEAN");
    /// ```
    pub fn eval_infix(op: InfixOperator,
                      left: &Value,
                      right: &Value,
                      line: usize)
                      -> EvalResult<Value> {
        if let (Value::Integer(a), Value::Integer(b)) = (left, right) {
            return Self::eval_integer_infix(op, *a, *b, line);
        }

        match op {
            InfixOperator::Equal => Ok(Value::from(left.is_identical(right))),
            InfixOperator::NotEqual => Ok(Value::from(!left.is_identical(right))),
            _ if left.kind() != right.kind() => {
                Err(RuntimeError::TypeMismatch { left: left.kind(),
                                                 op,
                                                 right: right.kind(),
                                                 line })
            },
            _ => Err(RuntimeError::UnknownInfixOperator { left: left.kind(),
                                                          op,
                                                          right: right.kind(),
                                                          line }),
        }
    }
}
