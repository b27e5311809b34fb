/// Numeric conversion helpers.
///
/// The evaluator works in `i64` but computes powers in `f64`; these helpers
/// make the two lossy directions explicit instead of scattering `as` casts.
pub mod num;
