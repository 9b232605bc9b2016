use crate::interpreter::evaluator::core::Interpreter;

/// Lines that end a session. The match is exact: no trimming, no case
/// folding, so `" quit"` and `"Quit"` are ordinary expressions.
const EXIT_COMMANDS: [&str; 2] = ["quit", "exit"];

/// Substring whose presence anywhere in the raw line suppresses display of
/// the line's value. This catches definition lines, and also any expression
/// that happens to contain the four characters `def `.
const DEFINITION_MARKER: &str = "def ";

#[derive(Debug, Clone, Copy, PartialEq)]
/// What a submitted line asked the read-loop to do.
pub enum Outcome {
    /// The line was an exit command; stop reading.
    Exit,
    /// The line was empty; read the next one without evaluating.
    Skipped,
    /// The line was evaluated. `display` is whether the loop should print
    /// `value`.
    Evaluated {
        /// The value the line evaluated to.
        value:   f64,
        /// Whether the value should be shown to the user.
        display: bool,
    },
}

/// One interactive session: an interpreter plus the read-loop protocol.
///
/// The protocol is what both the prompt and script mode speak: exit commands
/// are recognized before anything else, empty lines are skipped (whitespace
/// counts as content), and every other line is evaluated, with display
/// suppressed for lines containing the definition marker `def `.
pub struct Session {
    /// The interpreter state the session accumulates into.
    pub interpreter: Interpreter,
}

#[allow(clippy::new_without_default)]
impl Session {
    /// Creates a session with a fresh interpreter.
    #[must_use]
    pub fn new() -> Self {
        Self { interpreter: Interpreter::new() }
    }

    /// Runs one line through the session protocol.
    ///
    /// # Returns
    /// - [`Outcome::Exit`]: The line was exactly `quit` or `exit`.
    /// - [`Outcome::Skipped`]: The line was the empty string.
    /// - [`Outcome::Evaluated`]: Anything else; carries the value and whether
    ///   to display it.
    ///
    /// # Example
    /// ```
    /// use dyad::session::{Outcome, Session};
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.submit("2 + 2"),
    ///            Outcome::Evaluated { value: 4.0, display: true });
    /// assert_eq!(session.submit(""), Outcome::Skipped);
    /// assert_eq!(session.submit("quit"), Outcome::Exit);
    /// ```
    pub fn submit(&mut self, line: &str) -> Outcome {
        if EXIT_COMMANDS.contains(&line) {
            return Outcome::Exit;
        }
        if line.is_empty() {
            return Outcome::Skipped;
        }

        let value = self.interpreter.evaluate(line);
        Outcome::Evaluated { value,
                             display: !line.contains(DEFINITION_MARKER) }
    }
}
