//! Request-body encoding for an HTTP layer.
//!
//! An HTTP client hands this module whatever payload it was given, asks
//! whether it can be sent as JSON, and gets back the bytes plus a content
//! type. Payloads are any `serde::Serialize` type; they are accepted when they
//! serialize to a map or a sequence (an object or array body) and refused
//! otherwise.
//!
//! Generic payloads pass through `serde_json::Value` on the way in, which also
//! gives the conversions between [`Value`] and `serde_json::Value`. Note that
//! `serde_json` turns NaN and infinite floats into `null` during that step.

use serde::Serialize;
use serde_json::Number;
use tracing::{debug, trace};

use crate::array::Array;
use crate::error::{JsonError, Result};
use crate::object::Object;
use crate::value::Value;
use crate::writer::{self, WriteOptions};

/// Content type sent with every [`JsonBody`].
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// An encoded JSON request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonBody {
    text: String,
}

impl JsonBody {
    pub fn content_type(&self) -> &'static str {
        JSON_CONTENT_TYPE
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.text.into_bytes()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&Object> for JsonBody {
    fn from(object: &Object) -> Self {
        Self {
            text: object.to_string(),
        }
    }
}

impl From<&Array> for JsonBody {
    fn from(array: &Array) -> Self {
        Self {
            text: array.to_string(),
        }
    }
}

/// Turns request payloads into [`JsonBody`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRequestSerializer {
    options: WriteOptions,
}

impl JsonRequestSerializer {
    /// A serializer producing compact bodies.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// True when `payload` serializes to a map or a sequence.
    pub fn is_valid_type<T: Serialize + ?Sized>(&self, payload: &T) -> bool {
        matches!(
            serde_json::to_value(payload),
            Ok(serde_json::Value::Object(_) | serde_json::Value::Array(_))
        )
    }

    /// Encode `payload` as a JSON body.
    ///
    /// Returns `Ok(None)` for payloads that are not objects or arrays, and an
    /// error when serde cannot serialize the payload at all (for example a
    /// map with non-string keys).
    pub fn serialize<T: Serialize + ?Sized>(&self, payload: &T) -> Result<Option<JsonBody>> {
        let value = match serde_json::to_value(payload)? {
            tree @ (serde_json::Value::Object(_) | serde_json::Value::Array(_)) => {
                Value::try_from(tree)?
            }
            other => {
                trace!(payload = %other, "payload is not an object or array");
                return Ok(None);
            }
        };
        let text = writer::to_string_with_options(&value, &self.options);
        debug!(bytes = text.len(), kind = value.type_name(), "encoded JSON request body");
        Ok(Some(JsonBody { text }))
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = JsonError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        Ok(match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => number_to_value(&n)?,
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                let mut array = Array::with_capacity(items.len());
                for item in items {
                    array.push(Value::try_from(item)?)?;
                }
                Value::Array(array)
            }
            serde_json::Value::Object(map) => {
                let mut object = Object::new();
                for (key, item) in map {
                    object.put(key, Value::try_from(item)?)?;
                }
                Value::Object(object)
            }
        })
    }
}

/// Integers that fit in `i64` stay integers; everything else becomes a double.
fn number_to_value(n: &Number) -> Result<Value> {
    if let Some(i) = n.as_i64() {
        return Ok(Value::Integer(i));
    }
    match n.as_f64() {
        Some(d) => Value::Double(d).validated(),
        None => Err(JsonError::invalid_type(n)),
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Integer(n) => serde_json::Value::Number((*n).into()),
            Value::Double(d) => {
                Number::from_f64(*d).map_or(serde_json::Value::Null, serde_json::Value::Number)
            }
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Object(o) => serde_json::Value::Object(
                o.iter()
                    .map(|(key, item)| (key.clone(), serde_json::Value::from(item)))
                    .collect(),
            ),
            Value::Array(a) => {
                serde_json::Value::Array(a.iter().map(serde_json::Value::from).collect())
            }
        }
    }
}
