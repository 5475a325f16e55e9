//! String-keyed JSON objects.
//!
//! Entries live in a `BTreeMap`, so iteration and serialization follow key
//! order and two equal objects always render identically.
//!
//! Mutators return `&mut Self` so calls chain:
//!
//! ```
//! use sprint_json::Object;
//!
//! let mut obj = Object::new();
//! obj.put("a", 1).unwrap().put_once("a", 2).unwrap();
//! assert_eq!(obj.get_int("a"), Some(1));
//! ```
//!
//! An `Object` has no interior locking. Mutation needs `&mut`, so sharing one
//! across threads for writing requires the caller's own synchronization.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::array::Array;
use crate::error::{JsonError, Result};
use crate::parser;
use crate::value::Value;
use crate::writer::{self, WriteOptions};

/// An unordered mapping from unique string keys to [`Value`]s.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    map: BTreeMap<String, Value>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an object from key/value pairs with insert-once semantics: the
    /// first occurrence of a key wins. Fails on the first invalid value.
    pub fn from_pairs<K, V, I>(pairs: I) -> Result<Self>
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut obj = Self::new();
        for (key, value) in pairs {
            obj.put_once(key, value)?;
        }
        Ok(obj)
    }

    /// Copy the named keys out of `source`. Names missing from `source` are
    /// stored as `null`.
    pub fn select(source: &Object, names: &[&str]) -> Self {
        let mut obj = Self::new();
        for name in names {
            let value = source.get(name).cloned().unwrap_or_default();
            obj.map.entry((*name).to_string()).or_insert(value);
        }
        obj
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Store `value` at `key`, replacing whatever was there.
    ///
    /// Fails with `InvalidType` for a NaN or infinite double; the object is
    /// left untouched in that case.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<&mut Self> {
        let value = value.into().validated()?;
        self.map.insert(key.into(), value);
        Ok(self)
    }

    /// Store `value` at `key` only if `key` is absent.
    ///
    /// An existing key is not an error: the object comes back unchanged.
    /// The value is still validated when it would be inserted.
    pub fn put_once(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<&mut Self> {
        match self.map.entry(key.into()) {
            btree_map::Entry::Occupied(_) => {}
            btree_map::Entry::Vacant(slot) => {
                slot.insert(value.into().validated()?);
            }
        }
        Ok(self)
    }

    /// Like [`put`](Self::put), but a `None` or `Value::Null` is skipped.
    pub fn put_if_not_null(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<&mut Self> {
        match value.into() {
            Value::Null => Ok(self),
            value => self.put(key, value),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    /// The stored value, or `default` when the key is missing or null.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        match self.map.get(key) {
            Some(Value::Null) | None => default,
            Some(value) => value,
        }
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    pub fn get_int_or(&self, key: &str, default: i64) -> i64 {
        self.get_int(key).unwrap_or(default)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.get_bool(key).unwrap_or(default)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_str(key).unwrap_or(default)
    }

    pub fn get_double(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    pub fn get_double_or(&self, key: &str, default: f64) -> f64 {
        self.get_double(key).unwrap_or(default)
    }

    pub fn get_object(&self, key: &str) -> Option<&Object> {
        self.get(key).and_then(Value::as_object)
    }

    pub fn get_object_or<'a>(&'a self, key: &str, default: &'a Object) -> &'a Object {
        self.get_object(key).unwrap_or(default)
    }

    pub fn get_array(&self, key: &str) -> Option<&Array> {
        self.get(key).and_then(Value::as_array)
    }

    pub fn get_array_or<'a>(&'a self, key: &str, default: &'a Array) -> &'a Array {
        self.get_array(key).unwrap_or(default)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// True iff `key` is present and holds `null`.
    pub fn is_null(&self, key: &str) -> bool {
        matches!(self.map.get(key), Some(Value::Null))
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.map.remove(key)
    }

    /// Empty the object, handing back everything it held.
    pub fn clear(&mut self) -> BTreeMap<String, Value> {
        std::mem::take(&mut self.map)
    }

    /// A new object holding this object's entries plus those of `other` whose
    /// keys are not already present. On a conflict the left side wins.
    pub fn merge(&self, other: &Object) -> Object {
        let mut merged = self.clone();
        for (key, value) in &other.map {
            merged
                .map
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
        merged
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.map.values()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.map.iter()
    }

    /// Render this object as JSON text.
    ///
    /// The tree is walked depth first; it is acyclic by construction.
    pub fn to_json_string(&self, options: &WriteOptions) -> String {
        writer::object_to_string(self, options)
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl TryFrom<BTreeMap<String, Value>> for Object {
    type Error = JsonError;

    fn try_from(map: BTreeMap<String, Value>) -> Result<Self> {
        Self::from_pairs(map)
    }
}

impl FromStr for Object {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse(s)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&writer::object_to_string(self, &WriteOptions::compact()))
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.map.len()))?;
        for (key, value) in &self.map {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
