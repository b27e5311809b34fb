use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator<'_> {
    /// Evaluates `value << amount`.
    ///
    /// Bits shifted past bit 63 are dropped, so an amount of 64 or more
    /// yields `0`.
    ///
    /// # Errors
    /// `NegativeShiftAmount` if `amount < 0`.
    pub fn eval_shift_left(value: i64, amount: i64, line: usize) -> EvalResult<i64> {
        let amount = shift_amount(amount, line)?;
        Ok(value.checked_shl(amount).unwrap_or(0))
    }

    /// Evaluates `value >> amount` as an arithmetic (sign-filling) shift.
    ///
    /// An amount of 64 or more yields `0` for non-negative values and `-1`
    /// for negative ones.
    ///
    /// # Errors
    /// `NegativeShiftAmount` if `amount < 0`.
    ///
    /// # Example
    /// ```
    /// use turtls::interpreter::evaluator::core::Evaluator;
    ///
    /// assert_eq!(Evaluator::eval_shift_right(-16, 2, 1).unwrap(), -4);
    /// assert_eq!(Evaluator::eval_shift_right(-16, 100, 1).unwrap(), -1);
    /// assert!(Evaluator::eval_shift_right(16, -1, 1).is_err());
    /// ```
    pub fn eval_shift_right(value: i64, amount: i64, line: usize) -> EvalResult<i64> {
        let amount = shift_amount(amount, line)?;
        Ok(value.checked_shr(amount)
                .unwrap_or(if value < 0 { -1 } else { 0 }))
    }
}

/// Converts a shift amount to `u32`, clamping huge amounts to `u32::MAX`
/// (they shift every bit out either way).
fn shift_amount(amount: i64, line: usize) -> EvalResult<u32> {
    if amount < 0 {
        return Err(RuntimeError::NegativeShiftAmount { amount, line });
    }
    Ok(u32::try_from(amount).unwrap_or(u32::MAX))
}
