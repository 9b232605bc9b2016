#[derive(Debug)]
/// Represents all structural errors the scanner can report.
///
/// Each variant names one missing piece of punctuation. Reporting one never
/// stops the interpreter: the surrounding statement or call collapses to the
/// sentinel value and scanning carries on from wherever the cursor stopped.
pub enum ParseError {
    /// An `=` was expected after the target name of a `var` statement.
    ExpectedEquals,
    /// A `(` was expected after the function name of a `def` statement.
    ExpectedParameterParen,
    /// A `,` was expected between the two parameters of a `def` statement.
    ExpectedParameterComma,
    /// A `)` was expected after the parameter list of a `def` statement.
    ExpectedParameterCloseParen,
    /// A `{` was expected before the body of a `def` statement.
    ExpectedOpeningBrace,
    /// The line ended before the `}` closing a function body.
    UnclosedBody,
    /// A `(` was expected after the name of a called function.
    ExpectedCallParen {
        /// The name of the called function.
        name: String,
    },
    /// A `,` was expected between the two arguments of a call.
    ExpectedArgumentComma {
        /// The name of the called function.
        name: String,
    },
    /// A `)` was expected after the arguments of a call.
    ExpectedCallCloseParen {
        /// The name of the called function.
        name: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedEquals => {
                write!(f, "Error: Expected '=' in variable assignment.")
            },
            Self::ExpectedParameterParen => {
                write!(f, "Error: Expected '(' in function definition.")
            },
            Self::ExpectedParameterComma => {
                write!(f, "Error: Expected ',' between parameters.")
            },
            Self::ExpectedParameterCloseParen => {
                write!(f, "Error: Expected ')' in function definition.")
            },
            Self::ExpectedOpeningBrace => {
                write!(f, "Error: Expected '{{' in function definition.")
            },
            Self::UnclosedBody => {
                write!(f, "Error: Expected '}}' to close function definition.")
            },
            Self::ExpectedCallParen { name } => {
                write!(f, "Error: Expected '(' after function name '{name}'.")
            },
            Self::ExpectedArgumentComma { name } => {
                write!(f, "Error: Expected ',' between arguments of '{name}'.")
            },
            Self::ExpectedCallCloseParen { name } => {
                write!(f, "Error: Expected ')' after arguments of '{name}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
