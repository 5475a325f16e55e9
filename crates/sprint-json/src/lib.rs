//! # sprint-json
//!
//! A small, strictly typed JSON library: a closed value model, a lenient
//! recursive-descent parser, and a compact or indented writer.
//!
//! Values are one of seven kinds (`null`, boolean, 64-bit integer, finite
//! double, string, object, array). Containers validate every insertion, so a
//! NaN or infinite double is rejected when it is stored rather than when it
//! is written out.
//!
//! ## Quick start
//!
//! ```rust
//! use sprint_json::{parse, serialize, Object, Value};
//!
//! // Text → Object
//! let obj = parse(r#"{"name":"Alice","scores":[95,87,92]}"#).unwrap();
//! assert_eq!(obj.get_str("name"), Some("Alice"));
//!
//! // Builder → text
//! let mut built = Object::new();
//! built.put("name", "Alice").unwrap().put("admin", true).unwrap();
//! let text = serialize(&Value::Object(built), false, 2);
//! assert_eq!(text, r#"{"admin":true,"name":"Alice"}"#);
//! ```
//!
//! ## Modules
//!
//! - [`value`]: the [`Value`] enum and [`is_valid_value`]
//! - [`object`] / [`array`]: validating containers
//! - [`tokener`]: character scanner with one character of pushback
//! - [`parser`]: object/array grammar, entry points, [`ParseOptions`]
//! - [`writer`]: compact/indented rendering, [`WriteOptions`]
//! - [`body`]: request-body encoding and `serde_json` interop
//! - [`error`]: [`JsonError`] and [`Position`]

pub mod array;
pub mod body;
pub mod error;
pub mod object;
pub mod parser;
pub mod tokener;
pub mod value;
pub mod writer;

pub use array::Array;
pub use body::{JsonBody, JsonRequestSerializer, JSON_CONTENT_TYPE};
pub use error::{JsonError, Position, Result};
pub use object::Object;
pub use parser::{
    parse, parse_array, parse_slice, parse_value, parse_value_with_options, parse_with_options,
    ParseOptions,
};
pub use tokener::Tokener;
pub use value::{is_valid_value, Value};
pub use writer::{serialize, to_string, to_string_pretty, write_to, WriteOptions};
