//! Value tree → JSON text.
//!
//! Two layouts:
//!
//! - **Compact**: no whitespace at all, `{"a":1,"b":[true,null]}`.
//! - **Indented**: every member on its own line, indented by `width` spaces
//!   per level, one space after each colon:
//!
//! ```text
//! {
//!   "a": 1,
//!   "b": [
//!     true,
//!     null
//!   ]
//! }
//! ```
//!
//! Strings escape only `"`, `\`, and control characters; `/`, `<`, and
//! non-ASCII text pass through untouched. Integers print without a decimal
//! point, doubles in their shortest round-trip form with a `.` or exponent
//! so they read back as doubles.

use std::io;

use tracing::debug;

use crate::array::Array;
use crate::error::Result;
use crate::object::Object;
use crate::value::Value;

/// Indent width used by [`to_string_pretty`].
pub const DEFAULT_INDENT: usize = 2;

/// Writer configuration. `indent: None` selects the compact layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteOptions {
    pub indent: Option<usize>,
}

impl WriteOptions {
    pub fn compact() -> Self {
        Self { indent: None }
    }

    pub fn indented(width: usize) -> Self {
        Self {
            indent: Some(width),
        }
    }
}

/// Render `value` compact (`indented == false`) or indented by
/// `indent_width` spaces per level.
pub fn serialize(value: &Value, indented: bool, indent_width: usize) -> String {
    let options = if indented {
        WriteOptions::indented(indent_width)
    } else {
        WriteOptions::compact()
    };
    debug!(indent = ?options.indent, kind = value.type_name(), "serializing JSON");
    to_string_with_options(value, &options)
}

/// Compact rendering.
pub fn to_string(value: &Value) -> String {
    to_string_with_options(value, &WriteOptions::compact())
}

/// Indented rendering with [`DEFAULT_INDENT`].
pub fn to_string_pretty(value: &Value) -> String {
    to_string_with_options(value, &WriteOptions::indented(DEFAULT_INDENT))
}

pub fn to_string_with_options(value: &Value, options: &WriteOptions) -> String {
    let mut out = String::new();
    write_value(value, options.indent, 0, &mut out);
    out
}

/// Render `value` into a byte sink.
pub fn write_to<W: io::Write>(mut sink: W, value: &Value, options: &WriteOptions) -> Result<()> {
    let text = to_string_with_options(value, options);
    debug!(bytes = text.len(), indent = ?options.indent, "writing JSON to sink");
    sink.write_all(text.as_bytes())?;
    sink.flush()?;
    Ok(())
}

pub(crate) fn object_to_string(object: &Object, options: &WriteOptions) -> String {
    let mut out = String::new();
    write_object(object, options.indent, 0, &mut out);
    out
}

pub(crate) fn array_to_string(array: &Array, options: &WriteOptions) -> String {
    let mut out = String::new();
    write_array(array, options.indent, 0, &mut out);
    out
}

/// Depth-first emit. Recursion depth follows the nesting of `value`.
fn write_value(value: &Value, indent: Option<usize>, depth: usize, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Integer(n) => out.push_str(&n.to_string()),
        Value::Double(d) => write_double(*d, out),
        Value::String(s) => write_string(s, out),
        Value::Object(o) => write_object(o, indent, depth, out),
        Value::Array(a) => write_array(a, indent, depth, out),
    }
}

fn write_object(object: &Object, indent: Option<usize>, depth: usize, out: &mut String) {
    if object.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push('{');
    for (i, (key, value)) in object.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        newline(indent, depth + 1, out);
        write_string(key, out);
        out.push(':');
        if indent.is_some() {
            out.push(' ');
        }
        write_value(value, indent, depth + 1, out);
    }
    newline(indent, depth, out);
    out.push('}');
}

fn write_array(array: &Array, indent: Option<usize>, depth: usize, out: &mut String) {
    if array.is_empty() {
        out.push_str("[]");
        return;
    }
    out.push('[');
    for (i, value) in array.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        newline(indent, depth + 1, out);
        write_value(value, indent, depth + 1, out);
    }
    newline(indent, depth, out);
    out.push(']');
}

/// In indented mode, break the line and indent to `depth`.
fn newline(indent: Option<usize>, depth: usize, out: &mut String) {
    if let Some(width) = indent {
        out.push('\n');
        out.push_str(&" ".repeat(width * depth));
    }
}

/// Doubles use `{:?}`, the shortest form that parses back to the same bits;
/// it always carries a `.` or an exponent (`1.0`, `1e300`).
///
/// Non-finite doubles cannot enter a container; a bare one handed straight to
/// the writer renders as `null`.
fn write_double(d: f64, out: &mut String) {
    if d.is_finite() {
        out.push_str(&format!("{d:?}"));
    } else {
        out.push_str("null");
    }
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < ' ' => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}
