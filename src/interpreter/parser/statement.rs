use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_identifier},
        },
    },
};

/// Parses a single statement.
/// A statement may be one of:
/// - a `let` binding,
/// - a `return` statement,
/// - an expression used as a statement.
///
/// The statement's source line is taken from its first token.
///
/// Grammar:
/// ```text
///     statement := "let" IDENT "=" expression
///                | "return" expression
///                | expression
/// ```
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(statement) = parse_let(tokens, depth)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_return(tokens, depth)? {
        return Ok(statement);
    }

    let current_line = tokens.peek().map_or(0, |(_, l)| *l);
    let expr = parse_expression(tokens, depth)?;

    Ok(Statement::Expression { expr,
                               line: current_line })
}

/// Parses a binding of the form `let <identifier> = <expression>`.
///
/// If the next token is not `let`, this function returns `Ok(None)` and does
/// not consume any input.
///
/// # Errors
/// Returns a `ParseError` if the identifier or `=` is missing, or the
/// expression is malformed.
fn parse_let<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Let, line)) = tokens.peek() else {
        return Ok(None);
    };
    let line = *line;
    tokens.next();

    let name = parse_identifier(tokens, line)?;
    expect_token(tokens, &Token::Assign, "'='", line)?;
    let value = parse_expression(tokens, depth)?;

    Ok(Some(Statement::Let { name, value, line }))
}

/// Parses `return <expression>`.
///
/// If the next token is not `return`, this function returns `Ok(None)` and
/// does not consume any input.
fn parse_return<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Return, line)) = tokens.peek() else {
        return Ok(None);
    };
    let line = *line;
    tokens.next();

    let value = parse_expression(tokens, depth)?;
    Ok(Some(Statement::Return { value, line }))
}
