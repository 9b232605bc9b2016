/// Core evaluation logic and interpreter state.
///
/// Contains the interpreter itself, the line entry point, snapshotting, and
/// the report-and-continue failure helpers.
pub mod core;

/// Statement scanning.
///
/// Classifies a line as assignment, definition, or expression and executes
/// the `var` and `def` forms.
pub mod statement;

/// Expression scanning and arithmetic.
///
/// Walks expressions, terms, and factors in one pass, computing values as the
/// cursor moves.
pub mod expression;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls and the snapshot
/// isolation of function bodies.
pub mod function;
