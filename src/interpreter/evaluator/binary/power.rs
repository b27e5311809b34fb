use crate::{
    interpreter::evaluator::core::Evaluator,
    util::num::{f64_to_i64_saturating, i64_to_f64_lossy},
};

impl Evaluator<'_> {
    /// Evaluates `base ** exponent`.
    ///
    /// The power is computed in double precision and truncated back to an
    /// integer, so results beyond 2^53 are approximate, negative exponents
    /// truncate toward zero, and results outside the `i64` range saturate.
    ///
    /// # Example
    /// ```
    /// use turtls::interpreter::evaluator::core::Evaluator;
    ///
    /// assert_eq!(Evaluator::eval_integer_pow(2, 10), 1024);
    /// assert_eq!(Evaluator::eval_integer_pow(2, -1), 0);
    /// assert_eq!(Evaluator::eval_integer_pow(10, 30), i64::MAX);
    /// ```
    #[must_use]
    pub fn eval_integer_pow(base: i64, exponent: i64) -> i64 {
        f64_to_i64_saturating(i64_to_f64_lossy(base).powf(i64_to_f64_lossy(exponent)))
    }
}
