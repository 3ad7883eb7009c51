/// Core evaluation logic.
///
/// Contains the statement and expression dispatch, array construction and
/// indexing, and the shared result type.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, concatenation, ordering and equality between two
/// already evaluated operands.
pub mod binary;

/// Unary and postfix operator evaluation logic.
///
/// Implements arithmetic negation, logical NOT, and the in-place `++` and
/// `--` operators.
pub mod unary;

/// Assignment evaluation.
///
/// Writes to plain variables and to array elements, and resolves assignable
/// places shared with the postfix operators.
pub mod assignment;
