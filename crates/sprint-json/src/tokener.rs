//! Character-level scanner over JSON text.
//!
//! The [`Tokener`] hands out one character at a time and can un-read exactly
//! one of them with [`back`](Tokener::back). Everything above it (the object
//! and array grammar in [`parser`](crate::parser)) is written in terms of
//! `next_clean` / `back` / `next_value`.
//!
//! Literals are read leniently: strings may use single quotes, and an unquoted
//! run of characters that is not `true`, `false`, `null`, or a number is kept
//! as a bare string.

use crate::error::{JsonError, Position, Result};
use crate::parser::{self, ParseOptions};
use crate::value::Value;

/// Characters that end an unquoted literal.
const TERMINATORS: &[char] = &[',', ':', ']', '}', '[', '{', '"', '\''];

/// Cursor state saved before each read so `back` can rewind it.
#[derive(Debug, Clone, Copy)]
struct Mark {
    index: usize,
    position: Position,
}

/// A stateful cursor over JSON text with one character of pushback.
#[derive(Debug)]
pub struct Tokener<'a> {
    input: &'a str,
    /// Byte index of the next unread character.
    index: usize,
    /// Position of the next unread character.
    position: Position,
    /// Set by every read, consumed by `back`.
    last: Option<Mark>,
    depth: usize,
    options: ParseOptions,
}

impl<'a> Tokener<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        Self {
            input,
            index: 0,
            position: Position::start(),
            last: None,
            depth: 0,
            options,
        }
    }

    /// Position of the next unread character.
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.index >= self.input.len()
    }

    /// Consume and return the next character, or `None` at end of input.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<char> {
        self.last = Some(Mark {
            index: self.index,
            position: self.position,
        });
        let c = self.input[self.index..].chars().next()?;
        self.index += c.len_utf8();
        self.position.advance(c);
        Some(c)
    }

    /// Skip JSON whitespace and return the next significant character, or
    /// `None` at end of input.
    pub fn next_clean(&mut self) -> Option<char> {
        loop {
            match self.next() {
                Some(' ' | '\t' | '\n' | '\r') => continue,
                other => return other,
            }
        }
    }

    /// Un-read the character returned by the last `next` or `next_clean`.
    ///
    /// Reaching end of input counts as a read, so `back` after a `None` is
    /// allowed and leaves the cursor at the end.
    ///
    /// # Panics
    ///
    /// Panics when called twice without a read in between, or before the
    /// first read. Both are bugs in the caller.
    pub fn back(&mut self) {
        let Some(mark) = self.last.take() else {
            panic!("Tokener::back called without a preceding read");
        };
        self.index = mark.index;
        self.position = mark.position;
    }

    /// Build a `MalformedDocument` error at the current position.
    pub fn syntax_error(&self, message: impl Into<String>) -> JsonError {
        JsonError::malformed(message, self.position)
    }

    /// Read the next value: a nested object or array, a quoted string, or an
    /// unquoted literal.
    pub fn next_value(&mut self) -> Result<Value> {
        let c = self.next_clean();
        match c {
            Some(quote @ ('"' | '\'')) => self.next_string(quote).map(Value::String),
            Some('{') => {
                self.back();
                parser::read_object(self).map(Value::Object)
            }
            Some('[') => {
                self.back();
                parser::read_array(self).map(Value::Array)
            }
            _ => self.next_literal(c),
        }
    }

    /// Read the rest of a string literal whose opening `quote` has already
    /// been consumed, decoding escape sequences.
    pub fn next_string(&mut self, quote: char) -> Result<String> {
        let mut out = String::new();
        loop {
            match self.next() {
                None | Some('\n' | '\r') => {
                    return Err(self.syntax_error("Unterminated string"));
                }
                Some(c) if c < ' ' => {
                    return Err(self.syntax_error(format!(
                        "Control character U+{:04X} in string",
                        c as u32
                    )));
                }
                Some('\\') => out.push(self.next_escape()?),
                Some(c) if c == quote => return Ok(out),
                Some(c) => out.push(c),
            }
        }
    }

    fn next_escape(&mut self) -> Result<char> {
        match self.next() {
            Some('b') => Ok('\u{8}'),
            Some('t') => Ok('\t'),
            Some('n') => Ok('\n'),
            Some('f') => Ok('\u{c}'),
            Some('r') => Ok('\r'),
            Some(c @ ('"' | '\'' | '\\' | '/')) => Ok(c),
            Some('u') => self.next_unicode_escape(),
            Some(other) => Err(self.syntax_error(format!("Illegal escape '\\{other}'"))),
            None => Err(self.syntax_error("Unterminated string")),
        }
    }

    /// Decode the `XXXX` of a `\uXXXX` escape, pairing UTF-16 surrogates.
    fn next_unicode_escape(&mut self) -> Result<char> {
        let unit = self.next_hex4()?;
        let code = match unit {
            0xD800..=0xDBFF => {
                if self.next() != Some('\\') || self.next() != Some('u') {
                    return Err(self.syntax_error("Unpaired surrogate in \\u escape"));
                }
                let low = self.next_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(self.syntax_error("Unpaired surrogate in \\u escape"));
                }
                0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
            }
            0xDC00..=0xDFFF => {
                return Err(self.syntax_error("Unpaired surrogate in \\u escape"));
            }
            _ => unit,
        };
        char::from_u32(code).ok_or_else(|| self.syntax_error("Invalid \\u escape"))
    }

    fn next_hex4(&mut self) -> Result<u32> {
        let mut code = 0u32;
        for _ in 0..4 {
            let digit = self
                .next()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.syntax_error("Illegal \\u escape: expected 4 hex digits"))?;
            code = (code << 4) | digit;
        }
        Ok(code)
    }

    /// Collect an unquoted run starting with `first` and interpret it.
    fn next_literal(&mut self, first: Option<char>) -> Result<Value> {
        let mut literal = String::new();
        let mut c = first;
        while let Some(ch) = c {
            if ch.is_whitespace() || TERMINATORS.contains(&ch) {
                break;
            }
            literal.push(ch);
            c = self.next();
        }
        // The terminator (or end of input) belongs to the caller.
        self.back();

        if literal.is_empty() {
            return Err(self.syntax_error("Missing value"));
        }
        Ok(literal_to_value(literal))
    }

    /// Track entry into an object or array, failing past `max_depth`.
    pub(crate) fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(self.syntax_error("nesting too deep"));
        }
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Interpret an unquoted literal.
///
/// Order: `true`/`false`/`null` (any case), then numbers (a leading digit or
/// `-`), integer when it fits in `i64`, finite double otherwise. Anything
/// else stays a string.
fn literal_to_value(literal: String) -> Value {
    if literal.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if literal.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if literal.eq_ignore_ascii_case("null") {
        return Value::Null;
    }

    let looks_numeric = matches!(literal.chars().next(), Some('0'..='9' | '-'));
    if looks_numeric {
        let is_decimal = literal.contains(['.', 'e', 'E']);
        if !is_decimal {
            if let Ok(n) = literal.parse::<i64>() {
                return Value::Integer(n);
            }
        }
        // Out-of-range integers land here too and become doubles.
        if let Ok(d) = literal.parse::<f64>() {
            if d.is_finite() {
                return Value::Double(d);
            }
        }
    }

    Value::String(literal)
}
