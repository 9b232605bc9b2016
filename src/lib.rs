//! # dyad
//!
//! dyad is a tiny interactive expression language written in Rust.
//! It scans and evaluates `f64` arithmetic in a single pass, with variables,
//! built-in functions, and user-defined two-parameter functions. Failures are
//! soft: each one is reported as a diagnostic and the offending construct
//! evaluates to `0.0`, so a session never dies on bad input.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::session::{Outcome, Session};

/// Provides unified error types for scanning and evaluation.
///
/// This module defines all errors the interpreter can report: structural
/// mistakes found while scanning and runtime failures found while evaluating.
/// None of them abort anything; they exist to be carried through the
/// diagnostic channel.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (structural, runtime).
/// - Renders each error as the single stderr line users see.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the scanning and evaluation of source lines.
///
/// This module ties together the character cursor, the single-pass evaluator,
/// the builtin and user-defined function machinery, and the diagnostic
/// channel. There is no lexer and no syntax tree: a line is scanned exactly
/// once and values fall out as the cursor moves.
///
/// # Responsibilities
/// - Coordinates the core components: cursor, evaluator, diagnostics.
/// - Provides the line entry point and interpreter state (variables,
///   functions).
/// - Implements the soft-failure model around the sentinel value.
pub mod interpreter;
/// Implements the read-loop protocol shared by the prompt and script mode.
///
/// This module decides what a submitted line means to the surrounding loop:
/// exit, skip, or evaluate-and-maybe-display. Keeping the protocol out of
/// `main` lets scripts and tests drive a session exactly the way the
/// interactive prompt does.
///
/// # Responsibilities
/// - Recognizes the exact exit commands and the empty-line skip.
/// - Applies the definition-marker rule that suppresses value display.
/// - Owns the interpreter state accumulated across submitted lines.
pub mod session;

/// Runs every line of `source` through a fresh session and returns it.
///
/// Lines are fed through the read-loop protocol: an exit command stops the
/// run early, empty lines are skipped, and when `echo` is set every displayed
/// value is printed to stdout exactly as the interactive prompt would show
/// it. Failures inside a line are soft, so the run always reaches the end of
/// the source (or an exit command) and the session comes back with whatever
/// state accumulated.
///
/// # Examples
/// ```
/// use dyad::run_source;
///
/// let session = run_source("var x = 2\nvar y = x * 20", false);
/// assert_eq!(session.interpreter.variables["y"], 40.0);
///
/// // An exit command stops the run early.
/// let session = run_source("var a = 1\nquit\nvar b = 2", false);
/// assert!(!session.interpreter.variables.contains_key("b"));
/// ```
pub fn run_source(source: &str, echo: bool) -> Session {
    let mut session = Session::new();

    for line in source.lines() {
        match session.submit(line) {
            Outcome::Exit => break,
            Outcome::Skipped => {},
            Outcome::Evaluated { value, display } => {
                if echo && display {
                    println!("{value}");
                }
            },
        }
    }

    session
}
