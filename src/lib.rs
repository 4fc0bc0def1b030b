//! json-decode – Composable decoders for untyped JSON
//!
//! This crate turns an already-parsed [`Value`] into verified, typed data:
//! - Small decoders for strings, numbers, booleans and constants
//! - Combinators for objects, arrays, tuples, dictionaries and alternatives
//! - Precise failure locations such as `input.a.b[1]` on every error
//! - Escape hatches that turn failures into defaults or values
//!
//! Decoders are immutable descriptions. Build one once, share it freely, and
//! run it against as many inputs as you like:
//!
//! ```
//! use json_decode::{array, number, object, string};
//! use serde_json::json;
//!
//! let pets = array(object([("name", string().into()), ("age", number().into())]));
//!
//! let error = pets
//!     .run(&json!([{"name": "Rex", "age": 3}, {"name": "Tom", "age": "old"}]))
//!     .unwrap_err();
//! assert_eq!(error.at, "input[1].age");
//! assert_eq!(error.message, "expected a number, got a string");
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod combinators;
pub mod context;
pub mod decoder;
pub mod equality;
pub mod error;
pub mod result;
pub mod value;

// Re-export key types for convenience
pub use combinators::*;
pub use context::{Context, Segment};
pub use decoder::{
    Decoder, Field, Flavor, TupleDecoders, Union2, Union3, Union4, Union5, Union6, Union7,
    Union8, UnionDecoders,
};
pub use error::{DecodeResult, DecoderError, PartialError};
pub use serde_json::{Map, Value};
pub use value::Step;

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
