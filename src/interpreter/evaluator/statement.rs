use crate::{
    error::ParseError,
    interpreter::{
        cursor::Cursor,
        evaluator::{
            core::{Interpreter, ScanResult},
            function::core::FunctionDef,
        },
    },
};

/// Keyword opening a variable assignment.
pub(crate) const ASSIGN_KEYWORD: &str = "var";
/// Keyword opening a function definition.
pub(crate) const DEFINE_KEYWORD: &str = "def";

#[derive(Debug)]
/// The three statement forms a line can take.
pub(crate) enum StatementKind {
    /// `var name = expression`
    Assignment,
    /// `def name(a,b) { body }`
    Definition,
    /// Anything else.
    Expression,
}

/// Picks the statement form by probing the line's leading characters.
///
/// The probe is purely textual: it checks for the keyword bytes plus at least
/// one further character, with no word boundary. A line starting `variable`
/// is therefore scanned as an assignment and a bare `var` line as an
/// expression. Assignment is probed first, definition second.
pub(crate) fn classify(cursor: &Cursor) -> StatementKind {
    if cursor.keyword_ahead(ASSIGN_KEYWORD) {
        StatementKind::Assignment
    } else if cursor.keyword_ahead(DEFINE_KEYWORD) {
        StatementKind::Definition
    } else {
        StatementKind::Expression
    }
}

impl Interpreter {
    /// Scans and executes a `var name = expression` statement.
    ///
    /// The right-hand side is evaluated immediately and the resulting value
    /// is stored under `name`, overwriting any previous binding. Later
    /// changes to whatever the expression read do not affect the stored
    /// value.
    ///
    /// # Errors
    /// [`ParseError::ExpectedEquals`] if no `=` follows the name; nothing is
    /// stored.
    pub(crate) fn eval_assignment(&mut self, cursor: &mut Cursor) -> ScanResult<f64> {
        cursor.skip_whitespace();
        cursor.advance_by(ASSIGN_KEYWORD.len());
        let name = cursor.identifier();
        cursor.skip_whitespace();
        if !cursor.eat('=') {
            return Err(ParseError::ExpectedEquals);
        }
        let value = self.eval_expression(cursor);
        self.variables.insert(name, value);
        Ok(value)
    }

    /// Scans a `def name(a,b) { body }` statement and stores the definition.
    ///
    /// The body text is captured verbatim up to the first `}` and is not
    /// looked at until the function is called, so a definition whose body
    /// mentions not-yet-defined names still succeeds. Redefining a name
    /// replaces the stored definition. A definition evaluates to `0.0`.
    ///
    /// # Errors
    /// One [`ParseError`] naming the first missing piece of punctuation
    /// (`(`, `,`, `)`, `{`, or the closing `}`); nothing is stored.
    pub(crate) fn eval_definition(&mut self, cursor: &mut Cursor) -> ScanResult<f64> {
        cursor.skip_whitespace();
        cursor.advance_by(DEFINE_KEYWORD.len());
        let name = cursor.identifier();

        cursor.skip_whitespace();
        if !cursor.eat('(') {
            return Err(ParseError::ExpectedParameterParen);
        }
        let first_param = cursor.identifier();

        cursor.skip_whitespace();
        if !cursor.eat(',') {
            return Err(ParseError::ExpectedParameterComma);
        }
        let second_param = cursor.identifier();

        cursor.skip_whitespace();
        if !cursor.eat(')') {
            return Err(ParseError::ExpectedParameterCloseParen);
        }

        cursor.skip_whitespace();
        if !cursor.eat('{') {
            return Err(ParseError::ExpectedOpeningBrace);
        }
        let Some(body) = cursor.take_until('}') else {
            return Err(ParseError::UnclosedBody);
        };

        self.functions.insert(name.clone(),
                              FunctionDef { name,
                                            params: [first_param, second_param],
                                            body });
        Ok(0.0)
    }
}
