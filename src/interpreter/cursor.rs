/// A character cursor over one line of source text.
///
/// The whole grammar is scanned directly off this cursor: there is no token
/// stream. Every scanning routine leaves the cursor exactly where it stopped,
/// so a failed construct never rewinds and the rest of the line is still
/// reachable by whoever scans next.
#[derive(Debug)]
pub struct Cursor {
    chars: Vec<char>,
    pos:   usize,
}

impl Cursor {
    /// Creates a cursor positioned at the start of `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(),
               pos:   0, }
    }

    /// Returns the character under the cursor without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Consumes the character under the cursor, if any.
    pub fn advance(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
    }

    /// Consumes up to `count` characters.
    pub fn advance_by(&mut self, count: usize) {
        self.pos = usize::min(self.pos + count, self.chars.len());
    }

    /// Whether the cursor has consumed the entire line.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Consumes `expected` if it is the next character.
    ///
    /// # Returns
    /// - `true`: The character matched and was consumed.
    /// - `false`: The next character differs (or the line ended); nothing was
    ///   consumed.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes any run of whitespace under the cursor.
    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Whether `keyword` starts at the first non-whitespace character, with at
    /// least one more character after it.
    ///
    /// The probe never moves the cursor. The strict "more characters follow"
    /// requirement means a line holding nothing but the keyword itself does
    /// not match; it also means no word-boundary check is performed, so
    /// `variable` matches the keyword `var`.
    ///
    /// # Example
    /// ```
    /// use dyad::interpreter::cursor::Cursor;
    ///
    /// assert!(Cursor::new("  var x = 1").keyword_ahead("var"));
    /// assert!(Cursor::new("variable").keyword_ahead("var"));
    /// assert!(!Cursor::new("var").keyword_ahead("var"));
    /// ```
    #[must_use]
    pub fn keyword_ahead(&self, keyword: &str) -> bool {
        let mut start = self.pos;
        while self.chars.get(start).is_some_and(|c| c.is_whitespace()) {
            start += 1;
        }
        let length = keyword.chars().count();
        start + length < self.chars.len()
        && keyword.chars()
                  .enumerate()
                  .all(|(offset, expected)| self.chars[start + offset] == expected)
    }

    /// Scans an identifier: any run of ASCII alphanumerics and underscores,
    /// after skipping leading whitespace.
    ///
    /// An empty string is a legal result; callers treat whatever follows as
    /// the next structural character and fail there if the shape is wrong.
    pub fn identifier(&mut self) -> String {
        self.skip_whitespace();
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                name.push(c);
                self.advance();
            } else {
                break;
            }
        }
        name
    }

    /// Scans a numeric literal: an optional leading `-`, an integer part, and
    /// an optional `.` fraction part.
    ///
    /// The value is built by accumulation while scanning: each integer digit
    /// folds in as `value * 10 + digit`, and each fraction digit adds
    /// `digit * place` with `place` starting at `0.1` and shrinking tenfold
    /// per digit. That accumulation order is part of the numeric contract;
    /// it is not interchangeable with a string-to-float conversion of the
    /// same digits.
    ///
    /// With no digits under the cursor the result is `0.0` and nothing beyond
    /// the optional `-` is consumed.
    ///
    /// # Example
    /// ```
    /// use dyad::interpreter::cursor::Cursor;
    ///
    /// assert_eq!(Cursor::new("42").number(), 42.0);
    /// assert_eq!(Cursor::new("2.5").number(), 2.5);
    /// assert_eq!(Cursor::new("-8").number(), -8.0);
    /// ```
    pub fn number(&mut self) -> f64 {
        let negative = self.eat('-');

        let mut value = 0.0;
        while let Some(digit) = self.peek().and_then(|c| c.to_digit(10)) {
            value = value * 10.0 + f64::from(digit);
            self.advance();
        }

        if self.eat('.') {
            let mut place = 0.1;
            while let Some(digit) = self.peek().and_then(|c| c.to_digit(10)) {
                value += f64::from(digit) * place;
                place *= 0.1;
                self.advance();
            }
        }

        if negative { -value } else { value }
    }

    /// Consumes characters up to and including the next `closing` character.
    ///
    /// # Returns
    /// - `Some(text)`: Everything before `closing`, which was also consumed.
    /// - `None`: The line ended first; the cursor is at the end.
    pub fn take_until(&mut self, closing: char) -> Option<String> {
        let mut collected = String::new();
        while let Some(c) = self.peek() {
            self.advance();
            if c == closing {
                return Some(collected);
            }
            collected.push(c);
        }
        None
    }
}
