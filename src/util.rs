/// Numeric conversion helpers.
///
/// This module provides safe functions for turning the language's `f64`
/// numbers into integer indices without silently truncating fractional or
/// out-of-range values.
///
/// All functions return a `Result`, which is `Ok` if the conversion is lossless
/// and valid, or an error if the value is out of range or not an integer.
pub mod num;
