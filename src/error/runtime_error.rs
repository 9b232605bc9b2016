#[derive(Debug)]
/// Represents all errors that can occur while evaluating a scanned construct.
pub enum RuntimeError {
    /// Tried to read a variable that has never been assigned.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a name that is neither a builtin nor a stored definition.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => {
                write!(f, "Error: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name } => {
                write!(f, "Error: Unknown function '{name}'.")
            },
            Self::DivisionByZero => write!(f, "Error: Division by zero."),
        }
    }
}

impl std::error::Error for RuntimeError {}
