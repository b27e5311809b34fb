/// The environment module holds the bindings of a session.
///
/// A flat, string-keyed map that lives for a whole REPL session or file run
/// and is shared by every evaluation in it.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST against an environment, applies the
/// operator rules, and turns runtime failures into error values at the
/// program boundary.
///
/// # Responsibilities
/// - Evaluates programs, blocks, statements and expressions.
/// - Short-circuits on `return` and on the first error.
/// - Reports runtime errors such as type mismatches or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// tagged with the line it started on. Comments and whitespace are dropped.
///
/// # Responsibilities
/// - Converts the input character stream into `(Token, line)` pairs.
/// - Recognises keywords, identifiers, integer literals and operators.
/// - Reports lexical errors for unknown characters and oversized literals.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per precedence level.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Validates the grammar and reports the first syntax error with its line.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum, the canonical `null`/`true`/`false` values, the
/// kind tags used in error messages and instance identity.
pub mod value;
