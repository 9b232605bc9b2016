use dyad::{
    run_source,
    session::{Outcome, Session},
};

#[test]
fn exit_commands_must_match_exactly() {
    let mut session = Session::new();

    assert_eq!(session.submit("quit"), Outcome::Exit);
    assert_eq!(session.submit("exit"), Outcome::Exit);

    // Padding or casing turns the command into an ordinary expression: a
    // read of an undefined variable.
    assert_eq!(session.submit(" quit"),
               Outcome::Evaluated { value: 0.0, display: true });
    assert_eq!(session.submit("Quit"),
               Outcome::Evaluated { value: 0.0, display: true });
    assert_eq!(session.submit("quit "),
               Outcome::Evaluated { value: 0.0, display: true });
}

#[test]
fn empty_lines_skip_but_whitespace_evaluates() {
    let mut session = Session::new();

    assert_eq!(session.submit(""), Outcome::Skipped);

    // A whitespace-only line is not empty, so it is evaluated (to zero).
    assert_eq!(session.submit("   "),
               Outcome::Evaluated { value: 0.0, display: true });
}

#[test]
fn definition_lines_suppress_display() {
    let mut session = Session::new();

    assert_eq!(session.submit("def sq(a,b) { a * a }"),
               Outcome::Evaluated { value: 0.0, display: false });
    assert_eq!(session.submit("var x = 3"),
               Outcome::Evaluated { value: 3.0, display: true });
    assert_eq!(session.submit("sq(x, 0)"),
               Outcome::Evaluated { value: 9.0, display: true });
}

#[test]
fn display_suppression_is_a_substring_probe() {
    let mut session = Session::new();

    // `undef ` contains the marker `def `, so the value is computed but
    // would not be shown.
    assert_eq!(session.submit("undef + 3"),
               Outcome::Evaluated { value: 3.0, display: false });
    assert!(!session.interpreter.diagnostics.is_empty());
}

#[test]
fn sessions_accumulate_state_across_lines() {
    let mut session = Session::new();

    session.submit("var x = 2");
    session.submit("def twice(a,b) { a * 2 }");

    assert_eq!(session.submit("twice(x, 0) + 1"),
               Outcome::Evaluated { value: 5.0, display: true });
}

#[test]
fn run_source_stops_at_an_exit_command() {
    let session = run_source("var a = 1\nquit\nvar b = 2", false);

    assert_eq!(session.interpreter.variables["a"], 1.0);
    assert!(!session.interpreter.variables.contains_key("b"));
}

#[test]
fn run_source_skips_blank_lines_and_keeps_going_past_errors() {
    let session = run_source("var a = ghost\n\nvar b = 3", false);

    // The bad line assigned the sentinel; the run still reached the end.
    assert_eq!(session.interpreter.variables["a"], 0.0);
    assert_eq!(session.interpreter.variables["b"], 3.0);
}
