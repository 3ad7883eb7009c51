use crate::{
    ast::Statement,
    error::Error,
    interpreter::{
        environment::Environment,
        evaluator::core::evaluate_statement,
        lexer::scan,
        parser::core::{parse, parse_recovering},
        value::core::Value,
    },
};

/// Stores the state that outlives a single piece of source text.
///
/// A session owns the global environment, so variables declared by one call
/// to [`Session::run`] are visible to the next, and a flag recording whether
/// any run has failed since the flag was last cleared.
///
/// ## Usage
///
/// ```
/// use mutex_lang::{interpreter::value::core::Value, session::Session};
///
/// let mut session = Session::new();
/// session.run("var mut total = 40;").unwrap();
///
/// assert_eq!(session.run("total = total + 2;").unwrap(), Value::Number(42.0));
/// assert!(session.run("missing;").is_err());
/// assert!(session.had_error());
///
/// session.reset_error();
/// assert!(!session.had_error());
/// ```
#[derive(Debug, Default)]
pub struct Session {
    environment: Environment,
    had_error:   bool,
}

impl Session {
    /// Creates a session with a fresh global environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans, parses and evaluates `source` in the session's global
    /// environment.
    ///
    /// Scanning reports every bad character at once; if there were any, the
    /// source is not parsed. Parsing stops at the first error. Declarations
    /// made before a runtime error stay in effect.
    ///
    /// # Returns
    /// The value of the last top-level statement, or `nil` for empty source.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self, source: &str) -> Result<Value, Error> {
        let result = self.execute(source);
        if result.is_err() {
            self.had_error = true;
        }
        result
    }

    /// Like [`Session::run`], but reports every parse error in the source
    /// instead of stopping at the first. Nothing is evaluated unless the
    /// whole source parses.
    ///
    /// # Example
    /// ```
    /// use mutex_lang::session::Session;
    ///
    /// let mut session = Session::new();
    /// let errors = session.run_recovering("1 +; var x; 2;").unwrap_err();
    ///
    /// assert_eq!(errors.len(), 2);
    /// ```
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run_recovering(&mut self, source: &str) -> Result<Value, Vec<Error>> {
        let output = scan(source);
        if !output.is_clean() {
            self.had_error = true;
            return Err(vec![Error::Scan(output.errors)]);
        }

        let (program, errors) = parse_recovering(&output.tokens);
        if !errors.is_empty() {
            self.had_error = true;
            return Err(errors.into_iter().map(Error::Parse).collect());
        }

        self.evaluate(&program).map_err(|error| {
                                   self.had_error = true;
                                   vec![error]
                               })
    }

    /// Returns the global environment.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Returns `true` if any run failed since the session was created or the
    /// flag was last cleared.
    #[must_use]
    pub const fn had_error(&self) -> bool {
        self.had_error
    }

    /// Clears the error flag. Interactive shells call this after every line.
    pub const fn reset_error(&mut self) {
        self.had_error = false;
    }

    /// Discards every variable and clears the error flag.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn execute(&self, source: &str) -> Result<Value, Error> {
        let output = scan(source);
        if !output.is_clean() {
            return Err(Error::Scan(output.errors));
        }

        let program = parse(&output.tokens)?;
        self.evaluate(&program)
    }

    fn evaluate(&self, program: &Statement) -> Result<Value, Error> {
        let value = evaluate_statement(program, &self.environment)?;
        tracing::debug!(kind = value.type_name(), "evaluated program");
        Ok(value)
    }
}
