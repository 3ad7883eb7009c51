use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            assignment::{evaluate_assignment, evaluate_index_assignment},
            binary::evaluate_binary,
            unary::{evaluate_postfix, evaluate_unary},
        },
        value::core::Value,
    },
    util::num::index_checked,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a single statement.
///
/// - A block runs its statements in order, in the same environment, and
///   yields the value of the last one, or `nil` when empty.
/// - An expression statement yields the value of its expression.
/// - A declaration evaluates its initializer (or takes `nil`), binds it in
///   `env`, and yields the bound value.
///
/// # Parameters
/// - `statement`: Statement to evaluate.
/// - `env`: Scope that declarations are added to and names are resolved in.
///
/// # Example
/// ```
/// use mutex_lang::interpreter::{
///     environment::Environment,
///     evaluator::core::evaluate_statement,
///     lexer::scan,
///     parser::core::parse,
///     value::core::Value,
/// };
///
/// let env = Environment::new(None);
/// let program = parse(&scan("var mut x = 2; x = x * 21;").tokens).unwrap();
///
/// assert_eq!(evaluate_statement(&program, &env).unwrap(), Value::Number(42.0));
/// assert_eq!(env.lookup("x", 1).unwrap(), Value::Number(42.0));
/// ```
pub fn evaluate_statement(statement: &Statement, env: &Environment) -> EvalResult<Value> {
    match statement {
        Statement::Block { body, .. } => {
            let mut last = Value::Nil;
            for statement in body {
                last = evaluate_statement(statement, env)?;
            }
            Ok(last)
        },
        Statement::Expression { expression, line } => {
            tracing::trace!(line, "expression statement");
            evaluate_expression(expression, env)
        },
        Statement::VariableDeclaration { identifier,
                                         is_mutable,
                                         value,
                                         line, } => {
            let value = match value {
                Some(expression) => evaluate_expression(expression, env)?,
                None => Value::Nil,
            };
            env.declare(identifier, value.clone(), *is_mutable, *line)?;
            Ok(value)
        },
    }
}

/// Evaluates an expression and returns the resulting value.
///
/// Operands are always evaluated left to right, and every operand is fully
/// evaluated before the operator is applied.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
/// - `env`: Scope that names are resolved in.
pub fn evaluate_expression(expr: &Expr, env: &Environment) -> EvalResult<Value> {
    match expr {
        Expr::Number { value, .. } => Ok(Value::Number(*value)),
        Expr::String { value, .. } => Ok(Value::String(value.clone())),
        Expr::Symbol { name, line } => env.lookup(name, *line),
        Expr::Binary { left,
                       op,
                       right,
                       line, } => {
            let left = evaluate_expression(left, env)?;
            let right = evaluate_expression(right, env)?;
            evaluate_binary(*op, &left, &right, *line)
        },
        Expr::Unary { op, operand, line } => {
            let operand = evaluate_expression(operand, env)?;
            evaluate_unary(*op, &operand, *line)
        },
        Expr::Postfix { op, operand, line } => evaluate_postfix(*op, operand, env, *line),
        Expr::Array { elements, .. } => elements.iter()
                                                .map(|element| evaluate_expression(element, env))
                                                .collect::<EvalResult<Vec<_>>>()
                                                .map(Value::Array),
        Expr::ArrayIndex { object, index, line } => {
            let object = evaluate_expression(object, env)?;
            let index = evaluate_expression(index, env)?;
            index_value(object, &index, *line)
        },
        Expr::ArrayIndexAssignment { object,
                                     index,
                                     new_value,
                                     line, } => evaluate_index_assignment(object, index, new_value, env, *line),
        Expr::Assignment { assignee,
                           new_value,
                           line, } => evaluate_assignment(assignee, new_value, env, *line),
    }
}

/// Reads one element out of an array value.
///
/// # Errors
/// - `RuntimeError::TypeError` if `object` is not an array or `index` is not
///   an integral number.
/// - `RuntimeError::IndexOutOfBounds` if `index` is outside the array.
fn index_value(object: Value, index: &Value, line: usize) -> EvalResult<Value> {
    let Value::Array(mut elements) = object else {
        return Err(RuntimeError::TypeError { details: format!("Cannot index into {}",
                                                              object.type_name()),
                                             line });
    };

    let position = index_checked(index.as_number(line)?, elements.len(), line)?;
    Ok(elements.swap_remove(position))
}
