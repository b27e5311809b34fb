use std::iter::Peekable;

use crate::{
    ast::{Expr, InfixOperator, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression, parse_if},
            utils::descend,
        },
    },
};

/// Parses a prefix expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
/// - `^`  (bitwise complement)
///
/// Prefix operators are right-associative, so an input like `!-x` is parsed
/// as `!( -x )`. Without a prefix operator the function delegates to
/// [`parse_power`], so `-2 ** 2` is `-(2 ** 2)`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "!" | "^") unary
///            | power
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Minus, _)) => PrefixOperator::Negate,
        Some((Token::Bang, _)) => PrefixOperator::Not,
        Some((Token::Caret, _)) => PrefixOperator::Complement,
        _ => return parse_power(tokens, depth),
    };

    let line = tokens.next().map_or(0, |(_, l)| *l);
    let right = parse_unary(tokens, descend(depth, line)?)?;

    Ok(Expr::Prefix { op,
                      right: Box::new(right),
                      line })
}

/// Parses exponentiation.
///
/// The exponent is itself a unary expression, which makes `**` right
/// associative: `2 ** 3 ** 2` parses as `2 ** (3 ** 2)`, and `2 ** -1` is
/// accepted.
///
/// The rule is: `power := primary ("**" unary)?`
pub(crate) fn parse_power<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_primary(tokens, depth)?;

    let Some((Token::DoubleStar, line)) = tokens.peek() else {
        return Ok(base);
    };
    let line = *line;
    tokens.next();

    let exponent = parse_unary(tokens, descend(depth, line)?)?;
    Ok(Expr::Infix { left: Box::new(base),
                     op: InfixOperator::Pow,
                     right: Box::new(exponent),
                     line })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - integer and boolean literals
/// - identifiers
/// - parenthesized expressions
/// - `if` expressions
///
/// Grammar (simplified):
/// ```text
///     primary := INT | "true" | "false" | IDENT
///              | "(" expression ")"
///              | if_expression
/// ```
///
/// # Errors
/// - `Unsupported` for `fn`.
/// - `UnexpectedToken` for any token that cannot start an expression.
/// - `NestingTooDeep` for a group or `if` past the nesting limit.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, line) = tokens.next()
                              .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;
    let line = *line;

    match token {
        Token::Integer(value) => Ok(Expr::Integer { value: *value,
                                                    line }),
        Token::Bool(value) => Ok(Expr::Boolean { value: *value,
                                                 line }),
        Token::Identifier(name) => Ok(Expr::Identifier { name: name.clone(),
                                                         line }),
        Token::LParen => parse_grouping(tokens, descend(depth, line)?, line),
        Token::If => parse_if(tokens, descend(depth, line)?, line),
        Token::Fn => Err(ParseError::Unsupported { feature: "Function literals",
                                                   line }),
        tok => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                 line }),
    }
}

/// Parses the inside of `( ... )` after the opening parenthesis.
///
/// # Errors
/// `ExpectedClosingParen` if the expression is not followed by `)`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens, depth)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((_, l)) => Err(ParseError::ExpectedClosingParen { line: *l }),
        None => Err(ParseError::ExpectedClosingParen { line }),
    }
}
