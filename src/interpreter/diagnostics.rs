use crate::error::InterpreterError;

/// The channel soft failures are reported through.
///
/// Reporting prints one line to stderr immediately and retains the error, in
/// report order, until the interpreter starts its next line. A single line can
/// report several diagnostics: scanning resumes after each failure, so one
/// mistake often cascades.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<InterpreterError>,
}

impl Diagnostics {
    /// Creates an empty channel.
    #[must_use]
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Reports `error`: prints its message to stderr and retains it.
    pub fn report(&mut self, error: impl Into<InterpreterError>) {
        let error = error.into();
        eprintln!("{error}");
        self.entries.push(error);
    }

    /// The errors reported since the last [`clear`](Self::clear), oldest
    /// first.
    #[must_use]
    pub fn entries(&self) -> &[InterpreterError] {
        &self.entries
    }

    /// Whether nothing has been reported since the last clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes and returns every retained error.
    pub fn take(&mut self) -> Vec<InterpreterError> {
        std::mem::take(&mut self.entries)
    }

    /// Discards every retained error.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Moves everything `other` retained onto the end of this channel.
    ///
    /// Used when a nested interpreter finishes a function body: its reports
    /// were already printed, and this keeps them observable from the outer
    /// interpreter too.
    pub fn absorb(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }
}
