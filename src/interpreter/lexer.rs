use logos::Logos;
use tracing::debug;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `let`
    #[token("let")]
    Let,
    /// `return`
    #[token("return")]
    Return,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `fn`, reserved for function literals.
    #[token("fn")]
    Fn,
    /// Identifier tokens such as `x` or `total_sum`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip)]
    Comment,
    /// ```text
    /// /* Multi line comments. */
    /// ```
    ///
    /// A comment left open runs to the end of the input.
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", skip_comment)]
    #[regex(r"/\*([^*]|\*+[^*/])*\**", skip_comment)]
    MultiLineComment,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Star,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `^`
    #[token("^")]
    Caret,
    /// `&^`
    #[token("&^")]
    AmpersandCaret,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,

    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Converts source text into `(Token, line)` pairs.
///
/// Comments and whitespace are dropped. Lines start at 1.
///
/// # Errors
/// - `LiteralTooLarge` for an integer literal outside the `i64` range.
/// - `UnexpectedToken` for any character that starts no token.
///
/// # Example
/// ```
/// use turtls::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("let x = 5;\nx ** 2").unwrap();
///
/// assert_eq!(tokens[0], (Token::Let, 1));
/// assert_eq!(tokens[5], (Token::Identifier("x".to_string()), 2));
/// assert_eq!(tokens[6], (Token::DoubleStar, 2));
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        if let Ok(tok) = token {
            tokens.push((tok, line));
            continue;
        }

        let slice = lexer.slice();
        if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::LiteralTooLarge { line });
        }
        return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                 line });
    }

    debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

impl std::fmt::Display for Token {
    /// Writes the token as it is spelled in source code.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let spelling = match self {
            Self::Integer(n) => return write!(f, "{n}"),
            Self::Bool(b) => return write!(f, "{b}"),
            Self::Identifier(name) => return f.write_str(name),
            Self::Let => "let",
            Self::Return => "return",
            Self::If => "if",
            Self::Else => "else",
            Self::Fn => "fn",
            Self::Comment | Self::MultiLineComment => "comment",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Star => "*",
            Self::DoubleStar => "**",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::Caret => "^",
            Self::AmpersandCaret => "&^",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::NewLine => "newline",
            Self::Ignored => "whitespace",
        };
        f.write_str(spelling)
    }
}

/// Skips a block comment, counting the lines it spans.
fn skip_comment(lex: &mut logos::Lexer<Token>) -> logos::Skip {
    let newlines = lex.slice().chars().filter(|&c| c == '\n').count();
    lex.extras.line += newlines;
    logos::Skip
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit into an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
/// Parses a boolean literal from the current token slice (`true` or `false`).
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|(tok, _)| tok).collect()
    }

    #[test]
    fn two_character_operators_win_over_prefixes() {
        assert_eq!(kinds("** &^ << >> <= >= == !="),
                   vec![Token::DoubleStar,
                        Token::AmpersandCaret,
                        Token::ShiftLeft,
                        Token::ShiftRight,
                        Token::LessEqual,
                        Token::GreaterEqual,
                        Token::EqualEqual,
                        Token::BangEqual]);
    }

    #[test]
    fn keywords_are_not_identifiers() {
        assert_eq!(kinds("let letter return fn iffy if else true"),
                   vec![Token::Let,
                        Token::Identifier("letter".to_string()),
                        Token::Return,
                        Token::Fn,
                        Token::Identifier("iffy".to_string()),
                        Token::If,
                        Token::Else,
                        Token::Bool(true)]);
    }

    #[test]
    fn comments_are_skipped_and_lines_counted() {
        let tokens = tokenize("1 // one\n/* two\n lines **/ 2").unwrap();
        assert_eq!(tokens, vec![(Token::Integer(1), 1), (Token::Integer(2), 3)]);
    }

    #[test]
    fn unterminated_comment_runs_to_end_of_input() {
        assert_eq!(tokenize("1 /* open"), Ok(vec![(Token::Integer(1), 1)]));
        assert_eq!(tokenize("1 /* open\n 2 **").unwrap(), vec![(Token::Integer(1), 1)]);
        assert_eq!(tokenize("/* a */ 3 /* b\n").unwrap(), vec![(Token::Integer(3), 1)]);
    }

    #[test]
    fn tokens_display_as_source_spelling() {
        let spelled: Vec<String> = kinds("let x = a &^ 12 != true")
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(spelled.join(" "), "let x = a &^ 12 != true");
    }

    #[test]
    fn oversized_literal_is_rejected() {
        assert_eq!(tokenize("\n99999999999999999999"),
                   Err(ParseError::LiteralTooLarge { line: 2 }));
        assert_eq!(tokenize("9223372036854775807").unwrap(),
                   vec![(Token::Integer(i64::MAX), 1)]);
    }

    #[test]
    fn unknown_character_is_rejected() {
        assert_eq!(tokenize("1 @ 2"),
                   Err(ParseError::UnexpectedToken { token: "@".to_string(),
                                                     line:  1, }));
    }
}
