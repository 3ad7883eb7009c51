use crate::{
    ast::{Expr, PostfixOperator, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            assignment::{collect_place, place_mut},
            core::EvalResult,
        },
        value::core::Value,
    },
};

/// Evaluates a unary operator applied to a value.
///
/// Supported operators:
/// - `-`: Negation (numbers only).
/// - `!`: Logical NOT (booleans only).
///
/// # Errors
/// Returns `RuntimeError::TypeError` if the operand has the wrong kind.
///
/// # Example
/// ```
/// use mutex_lang::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::evaluate_unary, value::core::Value},
/// };
///
/// let result = evaluate_unary(UnaryOperator::Not, &Value::Boolean(false), 1);
/// assert_eq!(result.unwrap(), Value::Boolean(true));
///
/// assert!(evaluate_unary(UnaryOperator::Negate, &Value::Nil, 1).is_err());
/// ```
pub fn evaluate_unary(op: UnaryOperator, operand: &Value, line: usize) -> EvalResult<Value> {
    match op {
        UnaryOperator::Negate => Ok(Value::Number(-operand.as_number(line)?)),
        UnaryOperator::Not => Ok(Value::Boolean(!operand.as_bool(line)?)),
    }
}

/// Evaluates a postfix `++` or `--`.
///
/// The operand must name a mutable variable, or an element reached by
/// indexing into one, that holds a number. The stored number is changed by
/// one in place and the value it held before is returned.
///
/// # Errors
/// - `RuntimeError::InvalidAssignmentTarget` if the operand is not a place.
/// - `RuntimeError::ImmutableAssignment` if the variable is immutable.
/// - `RuntimeError::TypeError` if the place does not hold a number.
pub fn evaluate_postfix(op: PostfixOperator,
                        operand: &Expr,
                        env: &Environment,
                        line: usize)
                        -> EvalResult<Value> {
    let (name, path) = collect_place(operand, env, line)?;
    let delta = match op {
        PostfixOperator::Increment => 1.0,
        PostfixOperator::Decrement => -1.0,
    };

    env.update(&name, line, |slot| {
           let place = place_mut(slot, &path, line)?;
           let Value::Number(previous) = *place else {
               return Err(RuntimeError::TypeError { details: format!("Cannot apply '{op}' to {}",
                                                                     place.type_name()),
                                                    line });
           };

           *place = Value::Number(previous + delta);
           Ok(Value::Number(previous))
       })
}
