#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that no enclosing scope declares.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to declare a variable twice in the same scope.
    Redeclaration {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to assign to a variable declared with `imm`.
    ImmutableAssignment {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to assign to a variable that was never declared.
    UndeclaredAssignment {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted modulo by zero.
    ModuloByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Tried to access an array element outside the array.
    IndexOutOfBounds {
        /// The index that was requested.
        index:  i64,
        /// The length of the array.
        length: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// The left side of an assignment is not something that can be assigned.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::Redeclaration { line, .. }
            | Self::ImmutableAssignment { line, .. }
            | Self::UndeclaredAssignment { line, .. }
            | Self::DivisionByZero { line }
            | Self::ModuloByZero { line }
            | Self::TypeError { line, .. }
            | Self::IndexOutOfBounds { line, .. }
            | Self::InvalidAssignmentTarget { line } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => write!(f,
                                                           "Error on line {line}: Cannot resolve variable '{name}' as it does not exist in the current or outer scopes."),
            Self::Redeclaration { name, line } => write!(f,
                                                         "Error on line {line}: Cannot declare variable '{name}' as it is already defined."),
            Self::ImmutableAssignment { name, line } => write!(f,
                                                               "Error on line {line}: Cannot re-assign immutable variable '{name}'."),
            Self::UndeclaredAssignment { name, line } => write!(f,
                                                                "Error on line {line}: Cannot assign to variable '{name}' as it was never declared."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::ModuloByZero { line } => write!(f, "Error on line {line}: Modulo by zero."),
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::IndexOutOfBounds { index,
                                     length,
                                     line, } => write!(f,
                                                       "Error on line {line}: Index {index} is out of bounds for an array of length {length}."),
            Self::InvalidAssignmentTarget { line } => {
                write!(f, "Error on line {line}: Invalid assignment target.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
