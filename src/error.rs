/// Parsing errors.
///
/// Defines all error types that can occur while turning tokens into a syntax
/// tree: unexpected tokens, missing delimiters, unknown operators and
/// premature end of input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unresolved or immutable variables, division by zero, type mismatches and
/// out-of-bounds indexing.
pub mod runtime_error;
/// Scanning errors.
///
/// Defines the recoverable errors reported by the lexer: unexpected
/// characters and unterminated strings.
pub mod scan_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use scan_error::ScanError;

/// Any failure of the scan, parse and evaluate pipeline.
///
/// Returned by [`Session::run`](crate::session::Session::run) so a shell can
/// report the problem and keep going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// One or more scan errors; the source was not parsed.
    Scan(Vec<ScanError>),
    /// The parser stopped at this error.
    Parse(ParseError),
    /// Evaluation stopped at this error.
    Runtime(RuntimeError),
}

impl From<Vec<ScanError>> for Error {
    fn from(errors: Vec<ScanError>) -> Self {
        Self::Scan(errors)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scan(errors) => {
                for (index, error) in errors.iter().enumerate() {
                    if index > 0 {
                        writeln!(f)?;
                    }

                    write!(f, "{error}")?;
                }

                Ok(())
            },
            Self::Parse(error) => write!(f, "{error}"),
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Scan(errors) => errors.first().map(|e| e as &(dyn std::error::Error + 'static)),
            Self::Parse(error) => Some(error),
            Self::Runtime(error) => Some(error),
        }
    }
}
