use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value an expression can produce, a variable can
/// hold, or an array slot can contain. Values compare structurally: two
/// arrays are equal when their elements are. Arrays own their elements, so a
/// copy never aliases the original.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absence of a value. Produced by declarations without an
    /// initializer and by empty blocks.
    #[default]
    Nil,
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and the
    /// logical `!` operator.
    Boolean(bool),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value.
    String(String),
    /// An ordered array of values.
    Array(Vec<Self>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(v)
    }
}

impl Value {
    /// Returns the name of the value's kind, as used in error messages.
    ///
    /// # Example
    /// ```
    /// use mutex_lang::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Nil.type_name(), "nil");
    /// assert_eq!(Value::Boolean(true).type_name(), "boolean");
    /// assert_eq!(Value::from(vec![1.0.into()]).type_name(), "array");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
        }
    }

    /// Converts the value to an `f64`, or returns an error if not a number.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a number.
    /// - `Err(RuntimeError::TypeError)`: Otherwise.
    pub fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(RuntimeError::TypeError { details: format!("Expected a number, found {}",
                                                                self.type_name()),
                                               line }),
        }
    }

    /// Converts the value to `bool`, or returns an error if not a boolean.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: If the value is a boolean.
    /// - `Err(RuntimeError::TypeError)`: Otherwise.
    pub fn as_bool(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            _ => Err(RuntimeError::TypeError { details: format!("Expected a boolean, found {}",
                                                                self.type_name()),
                                               line }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}
