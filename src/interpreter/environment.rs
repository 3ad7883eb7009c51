use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    rc::Rc,
};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Names every global scope starts with. They are declared immutable.
pub const GLOBAL_CONSTANTS: &[&str] = &["nil", "true", "false"];

/// A handle to one scope in a chain of lexical scopes.
///
/// Each scope owns its variables, the set of names declared immutable, and a
/// link to its parent. Links only point from child to parent, so the chain
/// never forms a cycle and a child scope is reclaimed as soon as the last
/// handle to it is dropped. Cloning an `Environment` clones the handle, not
/// the scope.
///
/// ## Usage
///
/// ```
/// use mutex_lang::interpreter::{environment::Environment, value::core::Value};
///
/// let global = Environment::new(None);
/// global.declare("x", Value::Number(1.0), true, 1).unwrap();
///
/// let child = Environment::new(Some(&global));
/// child.declare("x", Value::Number(2.0), true, 2).unwrap();
///
/// assert_eq!(child.lookup("x", 3).unwrap(), Value::Number(2.0));
/// drop(child);
/// assert_eq!(global.lookup("x", 4).unwrap(), Value::Number(1.0));
/// ```
#[derive(Debug, Clone)]
pub struct Environment {
    scope: Rc<RefCell<Scope>>,
}

#[derive(Debug, Default)]
struct Scope {
    variables: HashMap<String, Value>,
    immutable: HashSet<String>,
    parent:    Option<Environment>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Environment {
    /// Creates a new scope.
    ///
    /// Without a parent this is a global scope, which starts with `nil`,
    /// `true` and `false` declared as immutable variables. With a parent the
    /// scope starts empty and delegates unknown names to the parent.
    #[must_use]
    pub fn new(parent: Option<&Self>) -> Self {
        let mut scope = Scope { parent: parent.cloned(),
                                ..Scope::default() };

        if parent.is_none() {
            for (name, value) in GLOBAL_CONSTANTS.iter()
                                                 .zip([Value::Nil, Value::Boolean(true), Value::Boolean(false)])
            {
                scope.variables.insert((*name).to_string(), value);
                scope.immutable.insert((*name).to_string());
            }
        }

        Self { scope: Rc::new(RefCell::new(scope)) }
    }

    /// Creates a child scope of `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        Self::new(Some(self))
    }

    /// Returns the parent scope, or `None` for a global scope.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.scope.borrow().parent.clone()
    }

    /// Declares a variable in this scope.
    ///
    /// Shadowing a variable of an enclosing scope is allowed; declaring the
    /// same name twice in one scope is not.
    ///
    /// # Errors
    /// Returns `RuntimeError::Redeclaration` if `name` already exists in this
    /// scope.
    ///
    /// # Example
    /// ```
    /// use mutex_lang::{
    ///     error::RuntimeError,
    ///     interpreter::{environment::Environment, value::core::Value},
    /// };
    ///
    /// let env = Environment::new(None);
    /// env.declare("x", Value::Nil, false, 1).unwrap();
    ///
    /// let err = env.declare("x", Value::Nil, true, 2).unwrap_err();
    /// assert!(matches!(err, RuntimeError::Redeclaration { line: 2, .. }));
    /// ```
    pub fn declare(&self, name: &str, value: Value, is_mutable: bool, line: usize) -> EvalResult<()> {
        let mut scope = self.scope.borrow_mut();

        if scope.variables.contains_key(name) {
            return Err(RuntimeError::Redeclaration { name: name.to_string(),
                                                     line });
        }

        tracing::trace!(name, is_mutable, "declare");
        if !is_mutable {
            scope.immutable.insert(name.to_string());
        }
        scope.variables.insert(name.to_string(), value);

        Ok(())
    }

    /// Re-binds an existing variable in the scope that declares it.
    ///
    /// # Errors
    /// - `RuntimeError::UndeclaredAssignment` if no scope in the chain declares
    ///   `name`.
    /// - `RuntimeError::ImmutableAssignment` if the declaring scope marked
    ///   `name` as immutable.
    ///
    /// # Example
    /// ```
    /// use mutex_lang::{
    ///     error::RuntimeError,
    ///     interpreter::{environment::Environment, value::core::Value},
    /// };
    ///
    /// let env = Environment::new(None);
    /// env.declare("count", Value::Number(0.0), true, 1).unwrap();
    /// env.declare("limit", Value::Number(9.0), false, 1).unwrap();
    ///
    /// env.child().assign("count", Value::Number(1.0), 2).unwrap();
    /// assert_eq!(env.lookup("count", 3).unwrap(), Value::Number(1.0));
    ///
    /// let err = env.assign("limit", Value::Number(10.0), 4).unwrap_err();
    /// assert!(matches!(err, RuntimeError::ImmutableAssignment { .. }));
    /// ```
    pub fn assign(&self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        self.update(name, line, |slot| {
                *slot = value;
                Ok(())
            })
    }

    /// Resolves `name` to the innermost scope that declares it.
    ///
    /// The search starts at `self` and walks outwards through the parents.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` if the global scope is reached
    /// without a match.
    pub fn resolve(&self, name: &str, line: usize) -> EvalResult<Self> {
        let mut current = self.clone();

        loop {
            if current.scope.borrow().variables.contains_key(name) {
                return Ok(current);
            }

            let parent = current.parent();
            match parent {
                Some(parent) => current = parent,
                None => {
                    return Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                               line });
                },
            }
        }
    }

    /// Looks `name` up in this scope only, without consulting any parent.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.scope.borrow().variables.get(name).cloned()
    }

    /// Looks `name` up through the scope chain.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` if no scope declares `name`.
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.resolve(name, line)?
            .get(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Returns `true` if this scope itself declares `name` as mutable.
    #[must_use]
    pub fn is_mutable(&self, name: &str) -> bool {
        let scope = self.scope.borrow();
        scope.variables.contains_key(name) && !scope.immutable.contains(name)
    }

    /// Hands the stored value of a mutable variable to `f` for in-place
    /// modification.
    ///
    /// This is the write path shared by plain assignment, index assignment and
    /// the postfix operators. `f` runs while the owning scope is borrowed, so
    /// it must not access the environment itself.
    ///
    /// # Errors
    /// - `RuntimeError::UndeclaredAssignment` if no scope declares `name`.
    /// - `RuntimeError::ImmutableAssignment` if `name` is immutable.
    /// - Any error returned by `f`.
    pub fn update<T>(&self,
                     name: &str,
                     line: usize,
                     f: impl FnOnce(&mut Value) -> EvalResult<T>)
                     -> EvalResult<T> {
        let owner = self.resolve(name, line)
                        .map_err(|_| RuntimeError::UndeclaredAssignment { name: name.to_string(),
                                                                          line })?;
        let mut scope = owner.scope.borrow_mut();

        if scope.immutable.contains(name) {
            return Err(RuntimeError::ImmutableAssignment { name: name.to_string(),
                                                           line });
        }

        tracing::trace!(name, "update");
        let slot = scope.variables
                        .get_mut(name)
                        .ok_or_else(|| RuntimeError::UndeclaredAssignment { name: name.to_string(),
                                                                            line })?;
        f(slot)
    }
}
