use std::iter::Peekable;

use crate::{
    ast::{Expr, InfixOperator},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary, utils::check_height},
    },
};

/// Parses relational and equality operators.
///
/// Handles `==`, `!=`, `<`, `>`, `<=` and `>=` at a single, lowest precedence
/// level, left associative.
///
/// The rule is: `comparison := additive (("==" | "!=" | "<" | ">" | "<=" |
/// ">=") additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, depth, parse_additive, is_comparison_op)
}

/// Parses addition-level expressions.
///
/// Handles left-associative binary operators: `+`, `-`, `|` and `^`.
///
/// The rule is: `additive := multiplicative (("+" | "-" | "|" | "^")
/// multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, depth, parse_multiplicative, is_additive_op)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators:
/// `*`, `/`, `%`, `<<`, `>>`, `&` and `&^`.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "%" | "<<" | ">>" |
/// "&" | "&^") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens, depth, parse_unary, is_multiplicative_op)
}

/// Folds `operand (op operand)*` into a left-leaning tree of `Expr::Infix`
/// nodes, accepting only the operators selected by `accepts`.
///
/// Each operator adds a level to the tree, so a long chain fails with
/// `NestingTooDeep` just like deeply nested parentheses.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 depth: usize,
                                 parse_operand: impl Fn(&mut Peekable<I>, usize) -> ParseResult<Expr>,
                                 accepts: fn(InfixOperator) -> bool)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_operand(tokens, depth)?;
    let mut height = None;

    while let Some((token, line)) = tokens.peek() {
        let op = match token_to_infix_operator(token) {
            Some(op) if accepts(op) => op,
            _ => break,
        };

        let line = *line;
        tokens.next(); // consume operator

        let right = parse_operand(tokens, depth)?;
        let tallest = height.unwrap_or_else(|| left.height()).max(right.height());
        check_height(depth, tallest + 1, line)?;
        height = Some(tallest + 1);

        left = Expr::Infix { left: Box::new(left),
                             op,
                             right: Box::new(right),
                             line };
    }

    Ok(left)
}

/// Maps a token to its corresponding infix operator.
///
/// Returns `None` for tokens that never appear between two operands.
///
/// # Example
/// ```
/// use turtls::{
///     ast::InfixOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_infix_operator},
/// };
///
/// assert_eq!(token_to_infix_operator(&Token::AmpersandCaret),
///            Some(InfixOperator::BitClear));
/// assert_eq!(token_to_infix_operator(&Token::Bang), None);
/// ```
#[must_use]
pub const fn token_to_infix_operator(token: &Token) -> Option<InfixOperator> {
    match token {
        Token::Plus => Some(InfixOperator::Add),
        Token::Minus => Some(InfixOperator::Sub),
        Token::Star => Some(InfixOperator::Mul),
        Token::Slash => Some(InfixOperator::Div),
        Token::Percent => Some(InfixOperator::Mod),
        Token::DoubleStar => Some(InfixOperator::Pow),
        Token::Ampersand => Some(InfixOperator::BitAnd),
        Token::Pipe => Some(InfixOperator::BitOr),
        Token::Caret => Some(InfixOperator::BitXor),
        Token::AmpersandCaret => Some(InfixOperator::BitClear),
        Token::ShiftLeft => Some(InfixOperator::ShiftLeft),
        Token::ShiftRight => Some(InfixOperator::ShiftRight),
        Token::Less => Some(InfixOperator::Less),
        Token::Greater => Some(InfixOperator::Greater),
        Token::LessEqual => Some(InfixOperator::LessEqual),
        Token::GreaterEqual => Some(InfixOperator::GreaterEqual),
        Token::EqualEqual => Some(InfixOperator::Equal),
        Token::BangEqual => Some(InfixOperator::NotEqual),
        _ => None,
    }
}

/// Returns `true` for `==`, `!=`, `<`, `>`, `<=` and `>=`.
#[must_use]
pub const fn is_comparison_op(op: InfixOperator) -> bool {
    matches!(op,
             InfixOperator::Less
             | InfixOperator::Greater
             | InfixOperator::LessEqual
             | InfixOperator::GreaterEqual
             | InfixOperator::Equal
             | InfixOperator::NotEqual)
}

/// Returns `true` for `+`, `-`, `|` and `^`.
#[must_use]
pub const fn is_additive_op(op: InfixOperator) -> bool {
    matches!(op,
             InfixOperator::Add
             | InfixOperator::Sub
             | InfixOperator::BitOr
             | InfixOperator::BitXor)
}

/// Returns `true` for `*`, `/`, `%`, `<<`, `>>`, `&` and `&^`.
#[must_use]
pub const fn is_multiplicative_op(op: InfixOperator) -> bool {
    matches!(op,
             InfixOperator::Mul
             | InfixOperator::Div
             | InfixOperator::Mod
             | InfixOperator::ShiftLeft
             | InfixOperator::ShiftRight
             | InfixOperator::BitAnd
             | InfixOperator::BitClear)
}
