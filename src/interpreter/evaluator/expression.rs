use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        cursor::Cursor,
        evaluator::core::{Interpreter, ScanResult},
    },
};

impl Interpreter {
    /// Scans and evaluates an expression: terms joined by `+` and `-`,
    /// left to right.
    ///
    /// Scanning stops at the first character that cannot continue the
    /// expression; trailing text is left unconsumed and unreported.
    pub(crate) fn eval_expression(&mut self, cursor: &mut Cursor) -> f64 {
        let mut value = self.eval_term(cursor);
        loop {
            cursor.skip_whitespace();
            match cursor.peek() {
                Some('+') => {
                    cursor.advance();
                    value += self.eval_term(cursor);
                },
                Some('-') => {
                    cursor.advance();
                    value -= self.eval_term(cursor);
                },
                _ => break,
            }
        }
        value
    }

    /// Scans and evaluates a term: factors joined by `*` and `/`, left to
    /// right.
    ///
    /// A zero divisor abandons the whole term: the diagnostic is reported and
    /// the term's value is the sentinel, whatever was already accumulated.
    /// The expression above still applies its pending `+`/`-` to that
    /// sentinel.
    pub(crate) fn eval_term(&mut self, cursor: &mut Cursor) -> f64 {
        let mut value = self.eval_factor(cursor);
        loop {
            cursor.skip_whitespace();
            match cursor.peek() {
                Some('*') => {
                    cursor.advance();
                    value *= self.eval_factor(cursor);
                },
                Some('/') => {
                    cursor.advance();
                    let divisor = self.eval_factor(cursor);
                    if divisor == 0.0 {
                        return self.fail(RuntimeError::DivisionByZero);
                    }
                    value /= divisor;
                },
                _ => break,
            }
        }
        value
    }

    /// Scans and evaluates a factor: a parenthesized expression, a name (a
    /// call when `(` follows, a variable read otherwise), or a numeric
    /// literal.
    ///
    /// A missing `)` after a parenthesized expression is tolerated silently.
    /// An exhausted line scans as `0.0` without a diagnostic. A leading `-`
    /// only ever belongs to a numeric literal, so `-x` scans the literal `-`
    /// followed by no digits and yields `-0.0` without touching `x`.
    pub(crate) fn eval_factor(&mut self, cursor: &mut Cursor) -> f64 {
        cursor.skip_whitespace();
        match cursor.peek() {
            None => 0.0,
            Some('(') => {
                cursor.advance();
                let value = self.eval_expression(cursor);
                cursor.skip_whitespace();
                cursor.eat(')');
                value
            },
            Some(c) if c.is_ascii_alphabetic() => {
                let name = cursor.identifier();
                cursor.skip_whitespace();
                if cursor.peek() == Some('(') {
                    self.eval_call(cursor, &name)
                } else {
                    match self.variables.get(&name).copied() {
                        Some(value) => value,
                        None => self.fail(RuntimeError::UnknownVariable { name }),
                    }
                }
            },
            Some(_) => cursor.number(),
        }
    }

    /// Scans a call's argument list and applies the named function.
    ///
    /// A structurally broken argument list fails the call here; whatever the
    /// argument expressions already consumed stays consumed.
    fn eval_call(&mut self, cursor: &mut Cursor, name: &str) -> f64 {
        match self.call_arguments(cursor, name) {
            Ok((first, second)) => self.apply_function(name, first, second),
            Err(error) => self.fail(error),
        }
    }

    /// Scans `(first, second)`: exactly two comma-separated argument
    /// expressions. Every call site in the language has this shape.
    ///
    /// # Errors
    /// One [`ParseError`] naming the first missing piece of call punctuation.
    fn call_arguments(&mut self, cursor: &mut Cursor, name: &str) -> ScanResult<(f64, f64)> {
        cursor.skip_whitespace();
        if !cursor.eat('(') {
            return Err(ParseError::ExpectedCallParen { name: name.to_string() });
        }
        let first = self.eval_expression(cursor);

        cursor.skip_whitespace();
        if !cursor.eat(',') {
            return Err(ParseError::ExpectedArgumentComma { name: name.to_string() });
        }
        let second = self.eval_expression(cursor);

        cursor.skip_whitespace();
        if !cursor.eat(')') {
            return Err(ParseError::ExpectedCallCloseParen { name: name.to_string() });
        }
        Ok((first, second))
    }
}
