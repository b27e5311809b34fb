use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_comparison,
            block::parse_block,
            statement::parse_statement,
            utils::{descend, skip_semicolons},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of expressions and blocks a program may use.
///
/// Parsing and evaluation both recurse once per level, so this bounds their
/// stack use. Parentheses, prefix operators, `**`, `if` and every operator of
/// a left-associative chain each count as one level.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses a whole program.
///
/// Statements may be separated by any number of semicolons; a trailing
/// semicolon is optional.
///
/// Grammar: `program := (statement ";"*)*`
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        skip_semicolons(tokens);
        if tokens.peek().is_none() {
            break;
        }
        statements.push(parse_statement(tokens, 0)?);
    }

    debug!(statements = statements.len(), "parsed program");
    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, comparison, and recursively
/// descends through the precedence hierarchy.
///
/// `depth` is the nesting depth of the expression's position; every parsing
/// function below takes it and passes it on.
///
/// Grammar: `expression := comparison`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_comparison(tokens, depth)
}

/// Parses an `if` expression with optional `else` and chained `else if`.
///
/// Syntax:
/// ```text
///     if (<condition>) { <statements> }
///     else if (<condition>) { <statements> }
///     else { <statements> }
/// ```
/// The parentheses around the condition are ordinary grouping. An `else if`
/// becomes an alternative block holding the nested `if` as its only
/// statement.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `depth`: Nesting depth of the `if` expression.
/// - `line`: Line number of the `if` token.
///
/// # Errors
/// - `ExpectedToken` if a branch does not start with `{`, or `else` is
///   followed by neither `{` nor `if`.
/// - `NestingTooDeep` if an `else if` chain is too long.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>, depth: usize, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_expression(tokens, depth)?;
    let consequence = parse_branch(tokens, depth, line)?;

    let alternative = match tokens.peek() {
        Some((Token::Else, _)) => {
            tokens.next();

            match tokens.peek() {
                Some((Token::If, if_line)) => {
                    let if_line = *if_line;
                    tokens.next();
                    let block_depth = descend(depth, if_line)?;
                    let nested = parse_if(tokens, descend(block_depth, if_line)?, if_line)?;
                    Some(Block { statements: vec![Statement::Expression { expr: nested,
                                                                          line: if_line, }],
                                 line:       if_line, })
                },
                _ => Some(parse_branch(tokens, depth, line)?),
            }
        },
        _ => None,
    };

    Ok(Expr::If { condition: Box::new(condition),
                  consequence,
                  alternative,
                  line })
}

/// Consumes the `{` of an `if` branch and parses the block it opens.
fn parse_branch<'a, I>(tokens: &mut Peekable<I>, depth: usize, line: usize) -> ParseResult<Block>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::LBrace, brace_line)) => {
            parse_block(tokens, descend(depth, *brace_line)?, *brace_line)
        },
        Some((tok, l)) => Err(ParseError::ExpectedToken { expected: "'{'",
                                                          found:    tok.to_string(),
                                                          line:     *l, }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
