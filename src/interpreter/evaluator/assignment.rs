use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, evaluate_expression},
        value::core::Value,
    },
    util::num::index_checked,
};

/// Evaluates `name = value`.
///
/// The assignee must be a plain variable. The new value is evaluated first,
/// then stored in the scope that declares the variable.
///
/// # Errors
/// - `RuntimeError::InvalidAssignmentTarget` if the assignee is not a
///   variable.
/// - Any error raised by [`Environment::assign`].
pub fn evaluate_assignment(assignee: &Expr,
                           new_value: &Expr,
                           env: &Environment,
                           line: usize)
                           -> EvalResult<Value> {
    let Expr::Symbol { name, .. } = assignee else {
        return Err(RuntimeError::InvalidAssignmentTarget { line });
    };

    let value = evaluate_expression(new_value, env)?;
    env.assign(name, value.clone(), line)?;

    Ok(value)
}

/// Evaluates `object[index] = value`.
///
/// The indices along the place are evaluated outermost first, then the index
/// being written, then the new value. The element is replaced in place, so
/// every later read through the same variable observes it.
///
/// # Errors
/// - `RuntimeError::InvalidAssignmentTarget` if `object` is not rooted at a
///   variable.
/// - `RuntimeError::ImmutableAssignment` if that variable is immutable.
/// - `RuntimeError::TypeError` if something along the place is not an array
///   or an index is not an integral number.
/// - `RuntimeError::IndexOutOfBounds` if an index falls outside its array.
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
/// let program = parse(&scan("var mut grid = [[1, 2], [3, 4]]; grid[1][0] = 9;").tokens).unwrap();
/// evaluate_statement(&program, &env).unwrap();
///
/// assert_eq!(env.lookup("grid", 1).unwrap().to_string(), "[[1, 2], [9, 4]]");
/// ```
pub fn evaluate_index_assignment(object: &Expr,
                                 index: &Expr,
                                 new_value: &Expr,
                                 env: &Environment,
                                 line: usize)
                                 -> EvalResult<Value> {
    let (name, mut path) = collect_place(object, env, line)?;
    path.push(evaluate_expression(index, env)?.as_number(line)?);

    let value = evaluate_expression(new_value, env)?;
    let stored = value.clone();

    env.update(&name, line, |slot| {
           *place_mut(slot, &path, line)? = stored;
           Ok(())
       })?;

    Ok(value)
}

/// Resolves an assignable expression into the variable it is rooted at and
/// the chain of indices leading from that variable to the place.
///
/// Index expressions are evaluated here, outermost first, so that writing to
/// the place later needs no further evaluation.
///
/// # Errors
/// - `RuntimeError::InvalidAssignmentTarget` if the expression is neither a
///   variable nor an index into one.
/// - `RuntimeError::TypeError` if an index is not a number.
pub fn collect_place(expr: &Expr, env: &Environment, line: usize) -> EvalResult<(String, Vec<f64>)> {
    match expr {
        Expr::Symbol { name, .. } => Ok((name.clone(), Vec::new())),
        Expr::ArrayIndex { object, index, .. } => {
            let (name, mut path) = collect_place(object, env, line)?;
            path.push(evaluate_expression(index, env)?.as_number(line)?);
            Ok((name, path))
        },
        _ => Err(RuntimeError::InvalidAssignmentTarget { line }),
    }
}

/// Walks `path` down from `slot` and returns the element it names.
///
/// # Errors
/// - `RuntimeError::TypeError` if a value along the way is not an array.
/// - `RuntimeError::IndexOutOfBounds` if an index falls outside its array.
pub fn place_mut<'v>(slot: &'v mut Value, path: &[f64], line: usize) -> EvalResult<&'v mut Value> {
    path.iter().try_fold(slot, |current, &position| match current {
                   Value::Array(elements) => {
                       let index = index_checked(position, elements.len(), line)?;
                       Ok(&mut elements[index])
                   },
                   other => Err(RuntimeError::TypeError { details: format!("Cannot index into {}",
                                                                           other.type_name()),
                                                          line }),
               })
}
