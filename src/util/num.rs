/// Converts an `i64` to the nearest `f64`.
///
/// Exact for magnitudes up to 2^53; larger values are rounded.
///
/// ## Example
/// ```
/// use turtls::util::num::i64_to_f64_lossy;
///
/// assert_eq!(i64_to_f64_lossy(-42), -42.0);
/// assert_eq!(i64_to_f64_lossy(i64::MAX), 9_223_372_036_854_775_807.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64_lossy(value: i64) -> f64 {
    value as f64
}

/// Converts an `f64` to `i64`, truncating toward zero.
///
/// Values outside the `i64` range saturate to `i64::MIN` or `i64::MAX`, and
/// `NaN` becomes `0`.
///
/// ## Example
/// ```
/// use turtls::util::num::f64_to_i64_saturating;
///
/// assert_eq!(f64_to_i64_saturating(2.9), 2);
/// assert_eq!(f64_to_i64_saturating(-0.5), 0);
/// assert_eq!(f64_to_i64_saturating(1e300), i64::MAX);
/// assert_eq!(f64_to_i64_saturating(f64::NEG_INFINITY), i64::MIN);
/// assert_eq!(f64_to_i64_saturating(f64::NAN), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn f64_to_i64_saturating(value: f64) -> i64 {
    value as i64
}
