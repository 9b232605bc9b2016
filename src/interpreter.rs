/// The cursor module scans characters off one line of source text.
///
/// The cursor is the only view of the input the interpreter ever has: there
/// is no token stream, and every construct is recognized by peeking at and
/// consuming raw characters. All scanning routines leave the cursor where
/// they stopped, which is what lets evaluation continue past a failed
/// construct.
///
/// # Responsibilities
/// - Tracks the current position within the line's characters.
/// - Scans identifiers, numeric literals, and delimited body text.
/// - Probes for statement keywords without consuming anything.
pub mod cursor;
/// The diagnostics module collects the line's soft-failure reports.
///
/// The interpreter never aborts a line: every failure is reported here and
/// the offending construct collapses to the sentinel value. Reports print to
/// stderr as they happen and stay inspectable until the next line starts.
///
/// # Responsibilities
/// - Prints one stderr line per reported error, in report order.
/// - Retains reported errors for inspection by callers and tests.
/// - Merges the reports of nested interpreters into the caller's channel.
pub mod diagnostics;
/// The evaluator module scans statements and computes results.
///
/// Scanning and evaluation are a single pass: the evaluator walks the cursor
/// over the line, recognizes the statement form, and computes `f64` values as
/// it goes. It manages the variable and function tables and reports runtime
/// errors such as division by zero or unknown names.
///
/// # Responsibilities
/// - Classifies each line as assignment, definition, or expression.
/// - Evaluates expressions with left-to-right `+ - * /` arithmetic.
/// - Handles variables, user-defined functions, and the builtin table.
pub mod evaluator;
