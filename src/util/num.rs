use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Safely converts an `f64` to `i64` if the value is finite, within range, and
/// not fractional.
///
/// ## Errors
/// Returns `RuntimeError::TypeError` for non-finite, out-of-range, or
/// fractional values.
///
/// # Parameters
/// - `value`: The floating-point value to convert.
/// - `line`: Source code line number for error reporting.
///
/// # Returns
/// - `Ok(i64)`: The converted value if safe.
/// - `Err(RuntimeError::TypeError)`: If conversion is invalid.
///
/// # Example
/// ```
/// use mutex_lang::{error::RuntimeError, util::num::f64_to_i64_checked};
///
/// // Safe conversion
/// assert_eq!(f64_to_i64_checked(1000.0, 1).unwrap(), 1000);
/// assert_eq!(f64_to_i64_checked(-3.0, 1).unwrap(), -3);
///
/// // Fractional value
/// let err = f64_to_i64_checked(1.5, 123).unwrap_err();
/// assert!(matches!(err, RuntimeError::TypeError { line: 123, .. }));
///
/// // Out of range
/// let err = f64_to_i64_checked(1e20, 5).unwrap_err();
/// assert!(matches!(err, RuntimeError::TypeError { line: 5, .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64, line: usize) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::TypeError { details: format!("Cannot use non-finite value {value} as an integer"),
                                             line });
    }
    // i64::MAX rounds up to 2^63 as an f64, so the upper bound is exclusive.
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(RuntimeError::TypeError { details: format!("{value} is too large to be used as an integer"),
                                             line });
    }
    if value.fract() != 0.0 {
        return Err(RuntimeError::TypeError { details: format!("Expected an integral number, found {value}"),
                                             line });
    }
    Ok(value as i64)
}

/// Converts a number into a position inside an array of `length` elements.
///
/// ## Errors
/// Returns `RuntimeError::TypeError` if `value` is not integral and
/// `RuntimeError::IndexOutOfBounds` if it is negative or not below `length`.
///
/// # Parameters
/// - `value`: The requested index.
/// - `length`: The length of the array being indexed.
/// - `line`: Source code line number for error reporting.
///
/// # Example
/// ```
/// use mutex_lang::{error::RuntimeError, util::num::index_checked};
///
/// assert_eq!(index_checked(2.0, 3, 1).unwrap(), 2);
///
/// let err = index_checked(3.0, 3, 7).unwrap_err();
/// assert_eq!(err,
///            RuntimeError::IndexOutOfBounds { index:  3,
///                                             length: 3,
///                                             line:   7, });
///
/// let err = index_checked(-1.0, 3, 7).unwrap_err();
/// assert!(matches!(err, RuntimeError::IndexOutOfBounds { index: -1, .. }));
/// ```
pub fn index_checked(value: f64, length: usize, line: usize) -> EvalResult<usize> {
    let index = f64_to_i64_checked(value, line)?;

    usize::try_from(index).ok()
                          .filter(|i| *i < length)
                          .ok_or(RuntimeError::IndexOutOfBounds { index, length, line })
}
