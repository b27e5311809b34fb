use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_NESTING_DEPTH, ParseResult},
    },
};

/// Consumes any run of `;` tokens.
pub(in crate::interpreter::parser) fn skip_semicolons<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    while let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
    }
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
/// - `line`: Line reported if the input ends here.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              line: usize)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, l)) => Err(ParseError::ExpectedToken { expected: "identifier",
                                                          found:    tok.to_string(),
                                                          line:     *l, }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Consumes `expected` or fails with a description of what was found.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `expected`: The token that must come next.
/// - `description`: How the token is named in the error message.
/// - `line`: Line reported if the input ends here.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          description: &'static str,
                                                          line: usize)
                                                          -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, _)) if tok == expected => Ok(()),
        Some((tok, l)) => Err(ParseError::ExpectedToken { expected: description,
                                                          found:    tok.to_string(),
                                                          line:     *l, }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Enters one more level of nesting.
///
/// Returns the depth for the nested construct, or `NestingTooDeep` once
/// [`MAX_NESTING_DEPTH`] levels are already open.
pub(in crate::interpreter::parser) fn descend(depth: usize, line: usize) -> ParseResult<usize> {
    check_height(depth, 1, line)?;
    Ok(depth + 1)
}

/// Fails with `NestingTooDeep` if a subtree of `height` levels placed at
/// `depth` would reach past [`MAX_NESTING_DEPTH`].
pub(in crate::interpreter::parser) fn check_height(depth: usize,
                                                   height: usize,
                                                   line: usize)
                                                   -> ParseResult<()> {
    if depth + height > MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                line });
    }
    Ok(())
}
