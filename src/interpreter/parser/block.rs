use std::iter::Peekable;

use crate::{
    ast::Block,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement, utils::skip_semicolons},
    },
};

/// Parses a block expression delimited by braces.
///
/// A block consists of zero or more statements, optionally separated by
/// semicolons. Parsing continues until a closing `}` token is encountered.
///
/// Grammar: `block := "{" (statement ";"*)* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `depth`: Nesting depth of the block's statements.
/// - `line`: Line number of the opening brace.
///
/// # Errors
/// `ExpectedClosingBrace` if the input ends before `}`.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, depth: usize, line: usize) -> ParseResult<Block>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        skip_semicolons(tokens);

        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens, depth)?),
            None => return Err(ParseError::ExpectedClosingBrace { line }),
        }
    }

    Ok(Block { statements, line })
}
