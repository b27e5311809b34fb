use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific token was required but something else was found.
    #[error("Error on line {line}: Expected {expected}, found '{found}'.")]
    ExpectedToken {
        /// Human readable description of the required token.
        expected: &'static str,
        /// Source spelling of the token that was found instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error on line {line}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing brace `}` was expected but not found.
    #[error("Error on line {line}: Expected closing brace '}}' but none found.")]
    ExpectedClosingBrace {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal does not fit into a 64-bit signed integer.
    #[error("Error on line {line}: Literal is too large.")]
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The construct is reserved by the language but not implemented.
    #[error("Error on line {line}: {feature} are not supported.")]
    Unsupported {
        /// Name of the unsupported construct.
        feature: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Expressions or blocks are nested deeper than the parser accepts.
    #[error("Error on line {line}: Expression is nested too deeply (limit {limit}).")]
    NestingTooDeep {
        /// The nesting limit that was exceeded.
        limit: usize,
        /// The source line where the limit was crossed.
        line:  usize,
    },
}

impl ParseError {
    /// Returns the source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::ExpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::ExpectedClosingParen { line }
            | Self::ExpectedClosingBrace { line }
            | Self::LiteralTooLarge { line }
            | Self::Unsupported { line, .. }
            | Self::NestingTooDeep { line, .. } => *line,
        }
    }
}
