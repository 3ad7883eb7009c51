#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
///
/// Any of these aborts the current parse. Token kinds are stored by name so
/// the error stays independent of the token type.
pub enum ParseError {
    /// Reached the end of input in the middle of a construct.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A token that cannot begin an expression was found in prefix position.
    NoPrefixRule {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A token with a binding power but no way to continue an expression was
    /// found after a complete operand.
    NoInfixRule {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A required token was missing.
    ExpectedToken {
        /// The accepted token kinds, separated by `/`.
        expected: String,
        /// The token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An assignment operator without an arithmetic counterpart.
    UnknownCompoundOperator {
        /// The operator token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A literal token without a usable literal value.
    InvalidLiteral {
        /// The literal's source text.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl ParseError {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedEndOfInput { line }
            | Self::NoPrefixRule { line, .. }
            | Self::NoInfixRule { line, .. }
            | Self::ExpectedToken { line, .. }
            | Self::UnknownCompoundOperator { line, .. }
            | Self::InvalidLiteral { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::NoPrefixRule { token, line } => write!(f,
                                                         "Error on line {line}: Unrecognized token at the beginning of an expression: {token}."),

            Self::NoInfixRule { token, line } => write!(f,
                                                        "Error on line {line}: Unrecognized token in the middle of an expression: {token}."),

            Self::ExpectedToken { expected,
                                  found,
                                  line, } => {
                write!(f, "Error on line {line}: Expected {expected} but got {found} instead.")
            },

            Self::UnknownCompoundOperator { token, line } => write!(f,
                                                                    "Error on line {line}: Unrecognized compound assignment operator: {token}."),

            Self::InvalidLiteral { lexeme, line } => {
                write!(f, "Error on line {line}: Invalid literal '{lexeme}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
