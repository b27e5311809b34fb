/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include syntax mistakes, unexpected tokens and integer
/// literals that do not fit into 64 bits.
pub mod parse_error;
/// Front-end errors.
///
/// Failures of the file and inline runners that happen outside the evaluator:
/// unreadable files, a wrong file extension, or a parse error.
pub mod run_error;
/// Runtime errors.
///
/// Contains the payload of the `Error` runtime value: unknown identifiers,
/// unsupported operators, type mismatches and division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use run_error::RunError;
pub use runtime_error::RuntimeError;
