use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a binary operation between two values.
///
/// Supported combinations:
/// - number and number: arithmetic and ordering,
/// - string and string: `+` concatenates, ordering is lexicographic,
/// - array and array: `+` concatenates,
/// - any pair: `==` and `!=` compare structurally; values of different kinds
///   are never equal.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// - `RuntimeError::DivisionByZero` and `RuntimeError::ModuloByZero` for a zero
///   divisor.
/// - `RuntimeError::TypeError` naming the operator and both kinds for any
///   other combination.
///
/// # Example
/// ```
/// use mutex_lang::{
///     ast::BinaryOperator,
///     error::RuntimeError,
///     interpreter::{evaluator::binary::evaluate_binary, value::core::Value},
/// };
///
/// let result = evaluate_binary(BinaryOperator::Mod, &7.0.into(), &2.0.into(), 1);
/// assert_eq!(result.unwrap(), Value::Number(1.0));
///
/// let result = evaluate_binary(BinaryOperator::Add, &"ab".into(), &"c".into(), 1);
/// assert_eq!(result.unwrap(), Value::from("abc"));
///
/// let result = evaluate_binary(BinaryOperator::Sub, &"ab".into(), &1.0.into(), 4);
/// assert!(matches!(result, Err(RuntimeError::TypeError { line: 4, .. })));
/// ```
pub fn evaluate_binary(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    use BinaryOperator::{
        Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Sub,
    };

    match (op, left, right) {
        (Equal, ..) => Ok(Value::Boolean(left == right)),
        (NotEqual, ..) => Ok(Value::Boolean(left != right)),
        (Less | LessEqual | Greater | GreaterEqual, Value::Number(l), Value::Number(r)) => {
            Ok(Value::Boolean(compare(op, l.partial_cmp(r))))
        },
        (Less | LessEqual | Greater | GreaterEqual, Value::String(l), Value::String(r)) => {
            Ok(Value::Boolean(compare(op, Some(l.cmp(r)))))
        },
        (Add | Sub | Mul | Div | Mod, Value::Number(l), Value::Number(r)) => arithmetic(op, *l, *r, line),
        (Add, Value::String(l), Value::String(r)) => Ok(Value::String(format!("{l}{r}"))),
        (Add, Value::Array(l), Value::Array(r)) => Ok(Value::Array(l.iter().chain(r).cloned().collect())),
        _ => Err(mismatch(op, left, right, line)),
    }
}

/// Applies an arithmetic operator to two numbers.
///
/// `%` keeps the sign of the dividend, so `-7 % 2` is `-1`.
fn arithmetic(op: BinaryOperator, left: f64, right: f64, line: usize) -> EvalResult<Value> {
    let result = match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div if right == 0.0 => return Err(RuntimeError::DivisionByZero { line }),
        BinaryOperator::Div => left / right,
        BinaryOperator::Mod if right == 0.0 => return Err(RuntimeError::ModuloByZero { line }),
        BinaryOperator::Mod => left % right,
        _ => return Err(mismatch(op, &Value::Number(left), &Value::Number(right), line)),
    };

    Ok(Value::Number(result))
}

/// Checks an ordering against a relational operator. Unordered operands
/// (`NaN`) satisfy none of them.
fn compare(op: BinaryOperator, ordering: Option<Ordering>) -> bool {
    matches!((op, ordering),
             (BinaryOperator::Less, Some(Ordering::Less))
             | (BinaryOperator::LessEqual, Some(Ordering::Less | Ordering::Equal))
             | (BinaryOperator::Greater, Some(Ordering::Greater))
             | (BinaryOperator::GreaterEqual, Some(Ordering::Greater | Ordering::Equal)))
}

fn mismatch(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("Unsupported operand types for '{op}': {} and {}",
                                               left.type_name(),
                                               right.type_name()),
                              line }
}
