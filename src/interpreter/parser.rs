use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{lexer::tokenize, parser::core::parse_program},
};

/// Infix operator parsing.
///
/// Implements the comparison, additive and multiplicative precedence levels,
/// all left associative.
pub mod binary;

/// Block parsing.
///
/// Parses the braced statement lists used by `if` branches.
pub mod block;

/// Core parsing entry points.
///
/// Contains the program and expression entry points and `if` parsing.
pub mod core;

/// Statement parsing.
///
/// Parses `let`, `return` and expression statements.
pub mod statement;

/// Prefix operators, exponentiation and primary expressions.
pub mod unary;

/// Token expectations shared by the other parsing modules.
pub mod utils;

/// Tokenizes and parses `source` into a [`Program`].
///
/// Parsing stops at the first error.
///
/// # Errors
/// Returns the first lexing or parsing error, with its source line.
///
/// # Example
/// ```
/// use turtls::interpreter::parser::parse;
///
/// let program = parse("let x = 5; x + 1;").unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// assert!(parse("let = 5").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source)?;
    let last_line = tokens.last().map_or(1, |(_, line)| *line);

    parse_program(&mut tokens.iter().peekable()).map_err(|error| match error {
        ParseError::UnexpectedEndOfInput { line: 0 } => {
            ParseError::UnexpectedEndOfInput { line: last_line }
        },
        other => other,
    })
}
