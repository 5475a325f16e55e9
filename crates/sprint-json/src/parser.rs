//! Recursive-descent construction of [`Object`]s and [`Array`]s from text.
//!
//! # Grammar notes
//!
//! - Object pairs are inserted with insert-once semantics: when a key repeats,
//!   the **first** occurrence wins and later ones are dropped silently. This
//!   differs from [`Object::put`], where the last write wins.
//! - A comma directly before the closing `}` or `]` is accepted and ends the
//!   container. Any other trailing content is an error.
//! - Object keys go through [`Tokener::next_value`], so unquoted and
//!   single-quoted keys are accepted. Non-string scalar keys use their JSON
//!   text (`{1:true}` has the key `"1"`); container keys are rejected.
//! - Nesting deeper than [`ParseOptions::max_depth`] fails with
//!   `MalformedDocument("nesting too deep")` instead of exhausting the stack.

use tracing::{debug, trace};

use crate::array::Array;
use crate::error::{JsonError, Position, Result};
use crate::object::Object;
use crate::tokener::Tokener;
use crate::value::Value;
use crate::writer;

/// Default limit on object/array nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest object/array nesting accepted. The root container is depth 1.
    pub max_depth: usize,
}

impl ParseOptions {
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parse a JSON object document.
///
/// The first significant character must be `{`; array- or scalar-rooted
/// documents are rejected here (see [`parse_array`] and [`parse_value`]).
/// Either the whole object is returned or an error; never a partial result.
///
/// ```
/// let obj = sprint_json::parse(r#"{"name": "Alice", "age": 30}"#).unwrap();
/// assert_eq!(obj.get_str("name"), Some("Alice"));
/// assert_eq!(obj.get_int("age"), Some(30));
/// ```
pub fn parse(text: &str) -> Result<Object> {
    parse_with_options(text, &ParseOptions::default())
}

pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<Object> {
    debug!(bytes = text.len(), max_depth = options.max_depth, "parsing JSON object");
    let mut tokener = Tokener::with_options(text, *options);
    let object = read_object(&mut tokener)?;
    expect_end(&mut tokener)?;
    Ok(object)
}

/// Parse an object from raw bytes, such as a response body.
///
/// Invalid UTF-8 is reported as `MalformedDocument` at the first bad byte.
pub fn parse_slice(bytes: &[u8]) -> Result<Object> {
    let text = std::str::from_utf8(bytes).map_err(|err| {
        let valid = &bytes[..err.valid_up_to()];
        // The prefix is valid by construction.
        let prefix = std::str::from_utf8(valid).unwrap_or_default();
        JsonError::malformed("Invalid UTF-8", Position::after(prefix))
    })?;
    parse(text)
}

/// Parse a JSON array document. The first significant character must be `[`.
pub fn parse_array(text: &str) -> Result<Array> {
    parse_array_with_options(text, &ParseOptions::default())
}

pub fn parse_array_with_options(text: &str, options: &ParseOptions) -> Result<Array> {
    debug!(bytes = text.len(), max_depth = options.max_depth, "parsing JSON array");
    let mut tokener = Tokener::with_options(text, *options);
    let array = read_array(&mut tokener)?;
    expect_end(&mut tokener)?;
    Ok(array)
}

/// Parse a document with any root: object, array, or scalar.
pub fn parse_value(text: &str) -> Result<Value> {
    parse_value_with_options(text, &ParseOptions::default())
}

pub fn parse_value_with_options(text: &str, options: &ParseOptions) -> Result<Value> {
    debug!(bytes = text.len(), max_depth = options.max_depth, "parsing JSON value");
    let mut tokener = Tokener::with_options(text, *options);
    let value = tokener.next_value()?;
    expect_end(&mut tokener)?;
    Ok(value)
}

fn expect_end(tokener: &mut Tokener<'_>) -> Result<()> {
    match tokener.next_clean() {
        None => Ok(()),
        Some(c) => {
            tokener.back();
            Err(tokener.syntax_error(format!("Unexpected trailing content '{c}'")))
        }
    }
}

/// Read `{ key : value , ... }` starting at the opening brace.
pub(crate) fn read_object(tokener: &mut Tokener<'_>) -> Result<Object> {
    if tokener.next_clean() != Some('{') {
        return Err(tokener.syntax_error("A JSON object text must begin with '{'"));
    }
    tokener.enter()?;

    let mut object = Object::new();
    loop {
        let key = match tokener.next_clean() {
            None => return Err(tokener.syntax_error("A JSON object text must end with '}'")),
            Some('}') => break,
            Some(_) => {
                tokener.back();
                let key = tokener.next_value()?;
                key_text(tokener, key)?
            }
        };

        if tokener.next_clean() != Some(':') {
            return Err(tokener.syntax_error("Expected a ':' after a key"));
        }
        let value = tokener.next_value()?;
        if object.contains(&key) {
            trace!(key = %key, "duplicate key, keeping first occurrence");
        }
        object.put_once(key, value)?;

        match tokener.next_clean() {
            Some(',') => {
                if tokener.next_clean() == Some('}') {
                    break;
                }
                tokener.back();
            }
            Some('}') => break,
            None => return Err(tokener.syntax_error("A JSON object text must end with '}'")),
            Some(_) => return Err(tokener.syntax_error("Expected a ',' or '}'")),
        }
    }

    tokener.leave();
    Ok(object)
}

/// Read `[ value , ... ]` starting at the opening bracket.
pub(crate) fn read_array(tokener: &mut Tokener<'_>) -> Result<Array> {
    if tokener.next_clean() != Some('[') {
        return Err(tokener.syntax_error("A JSON array text must begin with '['"));
    }
    tokener.enter()?;

    let mut array = Array::new();
    loop {
        match tokener.next_clean() {
            None => return Err(tokener.syntax_error("A JSON array text must end with ']'")),
            Some(']') if array.is_empty() => break,
            Some(_) => tokener.back(),
        }
        array.push(tokener.next_value()?)?;

        match tokener.next_clean() {
            Some(',') => {
                if tokener.next_clean() == Some(']') {
                    break;
                }
                tokener.back();
            }
            Some(']') => break,
            None => return Err(tokener.syntax_error("A JSON array text must end with ']'")),
            Some(_) => return Err(tokener.syntax_error("Expected a ',' or ']'")),
        }
    }

    tokener.leave();
    Ok(array)
}

/// Coerce a parsed key to text. Strings are used verbatim; other scalars use
/// their JSON rendering.
fn key_text(tokener: &Tokener<'_>, key: Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Object(_) | Value::Array(_) => {
            Err(tokener.syntax_error("A JSON object key must be a string"))
        }
        scalar @ (Value::Null | Value::Bool(_) | Value::Integer(_) | Value::Double(_)) => {
            Ok(writer::to_string(&scalar))
        }
    }
}
