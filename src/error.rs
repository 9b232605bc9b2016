/// Structural errors.
///
/// Defines all error types the scanner can raise while working out the shape
/// of a statement or call: missing `=`, parentheses, commas, braces. Each one
/// is reported as a diagnostic and the offending construct yields the sentinel
/// value instead of aborting the line.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating: unknown
/// variables, unknown functions, and division by zero. These follow the same
/// report-and-continue convention as structural errors.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Either kind of error the interpreter can report.
///
/// The diagnostic channel stores this type so one list captures everything a
/// line produced, in report order.
pub enum InterpreterError {
    /// A structural error from scanning.
    Parse(ParseError),
    /// A runtime error from evaluation.
    Runtime(RuntimeError),
}

impl From<ParseError> for InterpreterError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for InterpreterError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for InterpreterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "{error}"),
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for InterpreterError {}
