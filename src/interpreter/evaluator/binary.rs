/// Infix dispatch by operand kinds.
///
/// Routes integer pairs to the arithmetic table and handles `==`/`!=`
/// identity comparison and the type errors for every other pair.
pub mod core;

/// The integer arithmetic table.
///
/// Comparisons, wrapping `+ - *`, checked `/` and `%`, and the bitwise
/// operators.
pub mod integer;

/// Integer exponentiation through `f64`.
pub mod power;

/// `<<` and `>>` with defined behavior for every shift amount.
pub mod shift;
