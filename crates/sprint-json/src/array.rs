//! Ordered JSON arrays.

use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeSeq, Serializer};
use tracing::trace;

use crate::error::{JsonError, Result};
use crate::object::Object;
use crate::parser;
use crate::value::Value;
use crate::writer::{self, WriteOptions};

/// An ordered sequence of [`Value`]s. Insertion order is kept exactly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array {
    values: Vec<Value>,
}

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Tolerant construction: elements that are not valid JSON values
    /// (NaN or infinite doubles) are dropped without error.
    ///
    /// Use [`try_from_values`](Self::try_from_values) to fail instead.
    pub fn from_values<V, I>(values: I) -> Self
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        let mut dropped = 0usize;
        let values: Vec<Value> = values
            .into_iter()
            .map(Into::into)
            .filter(|value| {
                let keep = value.is_valid();
                if !keep {
                    dropped += 1;
                }
                keep
            })
            .collect();
        if dropped > 0 {
            trace!(dropped, "skipped invalid array elements");
        }
        Self { values }
    }

    /// Strict construction: the first invalid element fails the whole call.
    pub fn try_from_values<V, I>(values: I) -> Result<Self>
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        let values = values
            .into_iter()
            .map(|value| value.into().validated())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Append `value`. Fails with `InvalidType` for a NaN or infinite double.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<&mut Self> {
        self.values.push(value.into().validated()?);
        Ok(self)
    }

    /// Like [`push`](Self::push), but a `None` or `Value::Null` is skipped.
    pub fn push_if_not_null(&mut self, value: impl Into<Value>) -> Result<&mut Self> {
        match value.into() {
            Value::Null => Ok(self),
            value => self.push(value),
        }
    }

    /// Replace the element at `index`, returning the old one. Fails with
    /// `InvalidType` for an invalid value and returns `Ok(None)` when `index`
    /// is out of bounds.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Result<Option<Value>> {
        let value = value.into().validated()?;
        Ok(self
            .values
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, value)))
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn get_int(&self, index: usize) -> Option<i64> {
        self.get(index).and_then(Value::as_i64)
    }

    pub fn get_bool(&self, index: usize) -> Option<bool> {
        self.get(index).and_then(Value::as_bool)
    }

    pub fn get_str(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(Value::as_str)
    }

    pub fn get_double(&self, index: usize) -> Option<f64> {
        self.get(index).and_then(Value::as_f64)
    }

    pub fn get_object(&self, index: usize) -> Option<&Object> {
        self.get(index).and_then(Value::as_object)
    }

    pub fn get_array(&self, index: usize) -> Option<&Array> {
        self.get(index).and_then(Value::as_array)
    }

    pub fn remove(&mut self, index: usize) -> Option<Value> {
        (index < self.values.len()).then(|| self.values.remove(index))
    }

    /// Empty the array, handing back everything it held.
    pub fn clear(&mut self) -> Vec<Value> {
        std::mem::take(&mut self.values)
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.values.contains(value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    /// Render this array as JSON text.
    pub fn to_json_string(&self, options: &WriteOptions) -> String {
        writer::array_to_string(self, options)
    }
}

/// Collecting is tolerant, like [`Array::from_values`].
impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl FromStr for Array {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse_array(s)
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&writer::array_to_string(self, &WriteOptions::compact()))
    }
}

impl Serialize for Array {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.values.len()))?;
        for value in &self.values {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}
