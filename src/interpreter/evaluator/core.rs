use std::collections::HashMap;

use crate::{
    error::{InterpreterError, ParseError},
    interpreter::{
        cursor::Cursor,
        diagnostics::Diagnostics,
        evaluator::{
            function::core::FunctionDef,
            statement::{StatementKind, classify},
        },
    },
};

/// Result type used by the scanning routines.
///
/// Structural failures bubble up as `ParseError` until a consumption point
/// turns them into a diagnostic plus the sentinel value.
pub type ScanResult<T> = Result<T, ParseError>;

/// The value every failed construct collapses to.
///
/// Failure is never fatal here: a bad statement, an unknown name, or a
/// division by zero reports a diagnostic and takes this value, and evaluation
/// of the line carries on.
pub const SENTINEL: f64 = 0.0;

/// Stores the interpreter state.
///
/// This struct holds everything a line needs to evaluate: the variable table,
/// the table of user-defined functions, and the diagnostic channel the line's
/// soft failures are reported through.
///
/// ## Usage
///
/// An `Interpreter` is created once and fed one line at a time through
/// [`evaluate`](Self::evaluate). Assignments and definitions accumulate in
/// the tables; expression lines read from them. Calling a user-defined
/// function evaluates its body in a [`snapshot`](Self::snapshot) of this
/// state, so bodies observe the caller's tables without ever mutating them.
pub struct Interpreter {
    /// A mapping from variable names to their current values. Populated by
    /// `var` statements.
    pub variables:   HashMap<String, f64>,
    /// A mapping from function names to their [`FunctionDef`] definitions.
    /// Populated by `def` statements.
    pub functions:   HashMap<String, FunctionDef>,
    /// Where this interpreter's soft failures are reported.
    pub diagnostics: Diagnostics,
}

#[allow(clippy::new_without_default)]
impl Interpreter {
    /// Creates an interpreter with empty tables.
    #[must_use]
    pub fn new() -> Self {
        Self { variables:   HashMap::new(),
               functions:   HashMap::new(),
               diagnostics: Diagnostics::new(), }
    }

    /// Evaluates one line of source and returns its value.
    ///
    /// The line's first word picks the statement form: `var` scans an
    /// assignment, `def` scans a function definition, and anything else is an
    /// expression. Previously reported diagnostics are discarded first, so
    /// [`diagnostics`](Self::diagnostics) afterwards holds exactly what this
    /// line produced.
    ///
    /// # Parameters
    /// - `line`: One line of source text, without its newline.
    ///
    /// # Returns
    /// The value of the statement: the assigned value for `var`, `0.0` for
    /// `def`, the computed value for an expression. Failed constructs
    /// contribute [`SENTINEL`].
    ///
    /// # Example
    /// ```
    /// use dyad::interpreter::evaluator::core::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    /// interpreter.evaluate("var x = 2");
    /// assert_eq!(interpreter.evaluate("x * 3 + 1"), 7.0);
    /// ```
    pub fn evaluate(&mut self, line: &str) -> f64 {
        self.diagnostics.clear();
        let mut cursor = Cursor::new(line);
        let outcome = match classify(&cursor) {
            StatementKind::Assignment => self.eval_assignment(&mut cursor),
            StatementKind::Definition => self.eval_definition(&mut cursor),
            StatementKind::Expression => Ok(self.eval_expression(&mut cursor)),
        };
        self.recover(outcome)
    }

    /// Creates an independent interpreter holding deep copies of both tables.
    ///
    /// The copy starts with an empty diagnostic channel. Nothing done with it
    /// is visible to the interpreter it was taken from; this is how function
    /// bodies get their isolated view of the caller's state.
    ///
    /// # Example
    /// ```
    /// use dyad::interpreter::evaluator::core::Interpreter;
    ///
    /// let mut base = Interpreter::new();
    /// base.evaluate("var x = 2");
    ///
    /// let mut nested = base.snapshot();
    /// nested.evaluate("var x = 99");
    ///
    /// assert_eq!(base.evaluate("x"), 2.0);
    /// ```
    #[must_use]
    pub fn snapshot(&self) -> Self {
        Self { variables:   self.variables.clone(),
               functions:   self.functions.clone(),
               diagnostics: Diagnostics::new(), }
    }

    /// Reports `error` and returns [`SENTINEL`].
    pub(crate) fn fail(&mut self, error: impl Into<InterpreterError>) -> f64 {
        self.diagnostics.report(error);
        SENTINEL
    }

    /// Consumes a fallible outcome: a value passes through unchanged, an
    /// error is reported and collapses to [`SENTINEL`].
    pub(crate) fn recover<E>(&mut self, outcome: Result<f64, E>) -> f64
        where E: Into<InterpreterError>
    {
        match outcome {
            Ok(value) => value,
            Err(error) => self.fail(error),
        }
    }
}
