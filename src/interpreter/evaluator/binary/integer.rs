use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::{NULL, Value},
    },
};

impl Evaluator<'_> {
    /// Evaluates an infix operation on two integers.
    ///
    /// Arithmetic is fixed-width 64-bit and wraps on overflow, including
    /// `i64::MIN / -1`. `/` truncates toward zero and `%` takes the sign of
    /// the dividend; both fail with `division by zero` for a zero divisor.
    /// Operators without an integer rule (`&^`) yield `null`.
    ///
    /// # Example
    /// ```
    /// use turtls::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_integer_infix(InfixOperator::Add, i64::MAX, 1, 1).unwrap();
    /// assert_eq!(v, Value::Integer(i64::MIN));
    ///
    /// let v = Evaluator::eval_integer_infix(InfixOperator::Div, -7, 2, 1).unwrap();
    /// assert_eq!(v, Value::Integer(-3));
    ///
    /// let err = Evaluator::eval_integer_infix(InfixOperator::Mod, 1, 0, 1).unwrap_err();
    /// assert_eq!(err.to_string(), "division by zero");
    /// ```
    pub fn eval_integer_infix(op: InfixOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
        use InfixOperator::{
            Add, BitAnd, BitClear, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, Less,
            LessEqual, Mod, Mul, NotEqual, Pow, ShiftLeft, ShiftRight, Sub,
        };

        Ok(match op {
            Equal => Value::from(a == b),
            NotEqual => Value::from(a != b),
            Less => Value::from(a < b),
            Greater => Value::from(a > b),
            LessEqual => Value::from(a <= b),
            GreaterEqual => Value::from(a >= b),
            Add => Value::Integer(a.wrapping_add(b)),
            Sub => Value::Integer(a.wrapping_sub(b)),
            Mul => Value::Integer(a.wrapping_mul(b)),
            Div => Value::Integer(a.wrapping_div(nonzero_divisor(op, b, line)?)),
            Mod => Value::Integer(a.wrapping_rem(nonzero_divisor(op, b, line)?)),
            Pow => Value::Integer(Self::eval_integer_pow(a, b)),
            BitAnd => Value::Integer(a & b),
            BitOr => Value::Integer(a | b),
            BitXor => Value::Integer(a ^ b),
            ShiftLeft => Value::Integer(Self::eval_shift_left(a, b, line)?),
            ShiftRight => Value::Integer(Self::eval_shift_right(a, b, line)?),
            BitClear => NULL,
        })
    }
}

/// Returns `divisor` unchanged, or `DivisionByZero` if it is zero.
const fn nonzero_divisor(op: InfixOperator, divisor: i64, line: usize) -> EvalResult<i64> {
    if divisor == 0 {
        Err(RuntimeError::DivisionByZero { op, line })
    } else {
        Ok(divisor)
    }
}
