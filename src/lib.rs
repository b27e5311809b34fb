//! # turtls
//!
//! turtls is a tree-walking interpreter for TurtlScript, a small expression
//! language with 64-bit integers, booleans, `let` bindings, `if`/`else` and
//! `return`. It tokenizes, parses and evaluates scripts from a file, an
//! inline string or an interactive prompt.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::sync::Once;

use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::{error::ParseError, interpreter::value::core::Value, session::Session};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent source code as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement, expression and operator types for all language
///   constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing, evaluation and the front end.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator,
///   file runner).
/// - Attaches line numbers to syntax and runtime errors.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator, environment and value types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// The interactive read-eval-print loop.
pub mod repl;
/// A persistent evaluation session and the file runner.
pub mod session;
/// General numeric helpers.
pub mod util;

/// File extension required for script files.
pub const SCRIPT_EXTENSION: &str = "turtls";

static TRACING_INIT: Once = Once::new();

/// Installs the global `tracing` subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence when set. Otherwise `verbosity` picks the
/// filter: `0` logs warnings, `1` enables `turtls=debug` and anything higher
/// enables `turtls=trace`. Only the first call has any effect, and an
/// already installed global subscriber is left in place.
pub fn init_tracing(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                                                          EnvFilter::new(match verbosity {
                                                              0 => "warn",
                                                              1 => "turtls=debug",
                                                              _ => "turtls=trace",
                                                          })
                                                      });

        let installed = tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                                        .with_target(true)
                                                                        .with_level(true))
                                                      .with(filter)
                                                      .try_init();

        // An embedder may have installed its own subscriber first; keep it.
        if let Err(error) = installed {
            debug!(%error, "tracing subscriber already installed");
        }
    });
}

/// Evaluates `source` in a fresh session and returns its result.
///
/// `Ok(None)` means the script produced no value, e.g. it was empty or ended
/// in a `let`. Runtime failures are returned as [`Value::Error`], not as
/// `Err`.
///
/// # Errors
/// Returns the first lexing or parsing error.
///
/// # Examples
/// ```
/// use turtls::{evaluate, interpreter::value::core::Value};
///
/// assert_eq!(evaluate("let x = 5; x + 1;").unwrap(), Some(Value::Integer(6)));
/// assert_eq!(evaluate("let x = 5;").unwrap(), None);
///
/// let result = evaluate("5 + true").unwrap().unwrap();
/// assert_eq!(result.to_string(), "ERROR: type mismatch: INTEGER + BOOLEAN");
///
/// assert!(evaluate("let = 5").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Option<Value>, ParseError> {
    Session::new().run(source)
}
