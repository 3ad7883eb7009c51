#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning source text.
///
/// Scan errors never abort the [`scan`](crate::interpreter::lexer::scan) call
/// itself; they are collected next to the token stream.
pub enum ScanError {
    /// Found a character that does not start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal was still open at the end of input.
    UnterminatedString {
        /// The source line where the string literal started.
        line: usize,
    },
}

impl ScanError {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::UnterminatedString { line } => *line,
        }
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, line } => {
                write!(f, "Error on line {line}: Unexpected character '{character}'.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "Error on line {line}: Unterminated string.")
            },
        }
    }
}

impl std::error::Error for ScanError {}
