//! Free-function constructors
//!
//! Every decoder constructor is an associated function of [`Decoder`]. The
//! functions here forward to them so decoders read as a small vocabulary:
//!
//! ```
//! use json_decode::{array, number, object, optional, string};
//! use serde_json::json;
//!
//! let user = object([
//!     ("name", string().into()),
//!     ("age", optional(number()).into()),
//!     ("tags", array(string()).into()),
//! ]);
//! assert!(user.run(&json!({"name": "Ann", "tags": []})).is_ok());
//! ```

use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::decoder::{Decoder, Field, TupleDecoders, UnionDecoders};
use crate::error::DecoderError;
use crate::value::Step;

/// See [`Decoder::string`]
pub fn string() -> Decoder<String> {
    Decoder::string()
}

/// See [`Decoder::number`]
pub fn number() -> Decoder<f64> {
    Decoder::number()
}

/// See [`Decoder::boolean`]
pub fn boolean() -> Decoder<bool> {
    Decoder::boolean()
}

/// See [`Decoder::any_json`]
pub fn any_json() -> Decoder<Value> {
    Decoder::any_json()
}

/// See [`Decoder::unknown_json`]
pub fn unknown_json() -> Decoder<Option<Value>> {
    Decoder::unknown_json()
}

/// See [`Decoder::constant`]
pub fn constant(expected: impl Into<Value>) -> Decoder<Value> {
    Decoder::constant(expected)
}

/// See [`Decoder::constant_true`]
pub fn constant_true() -> Decoder<Value> {
    Decoder::constant_true()
}

/// See [`Decoder::constant_false`]
pub fn constant_false() -> Decoder<Value> {
    Decoder::constant_false()
}

/// See [`Decoder::constant_null`]
pub fn constant_null() -> Decoder<Value> {
    Decoder::constant_null()
}

/// See [`Decoder::object`]
pub fn object<I, K>(fields: I) -> Decoder<Map<String, Value>>
where
    I: IntoIterator<Item = (K, Field)>,
    K: Into<String>,
{
    Decoder::object(fields)
}

/// See [`Decoder::any_object`]
pub fn any_object() -> Decoder<Map<String, Value>> {
    Decoder::any_object()
}

/// See [`Decoder::array`]
pub fn array<A: 'static>(element: Decoder<A>) -> Decoder<Vec<A>> {
    Decoder::array(element)
}

/// See [`Decoder::any_array`]
pub fn any_array() -> Decoder<Vec<Value>> {
    Decoder::any_array()
}

/// See [`Decoder::tuple`]
pub fn tuple<T: TupleDecoders>(decoders: T) -> Decoder<T::Output>
where
    T::Output: 'static,
{
    Decoder::tuple(decoders)
}

/// See [`Decoder::dict`]
pub fn dict<A: 'static>(values: Decoder<A>) -> Decoder<HashMap<String, A>> {
    Decoder::dict(values)
}

/// See [`Decoder::optional`]
pub fn optional<A: 'static>(decoder: Decoder<A>) -> Decoder<Option<A>> {
    Decoder::optional(decoder)
}

/// See [`Decoder::one_of`]
pub fn one_of<A: 'static>(decoders: impl IntoIterator<Item = Decoder<A>>) -> Decoder<A> {
    Decoder::one_of(decoders)
}

/// See [`Decoder::union`]
pub fn union<T: UnionDecoders>(decoders: T) -> Decoder<T::Output>
where
    T::Output: 'static,
{
    Decoder::union(decoders)
}

/// See [`Decoder::intersection`]
pub fn intersection(
    decoders: impl IntoIterator<Item = Decoder<Map<String, Value>>>,
) -> Decoder<Map<String, Value>> {
    Decoder::intersection(decoders)
}

/// See [`Decoder::with_default`]
pub fn with_default<A>(fallback: A, decoder: Decoder<A>) -> Decoder<A>
where
    A: Clone + Send + Sync + 'static,
{
    Decoder::with_default(fallback, decoder)
}

/// See [`Decoder::value_at`]
pub fn value_at<A: 'static>(path: impl IntoIterator<Item = Step>, decoder: Decoder<A>) -> Decoder<A> {
    Decoder::value_at(path, decoder)
}

/// See [`Decoder::succeed`]
pub fn succeed<A>(value: A) -> Decoder<A>
where
    A: Clone + Send + Sync + 'static,
{
    Decoder::succeed(value)
}

/// See [`Decoder::fail`]
pub fn fail<A: 'static>(message: impl Into<String>) -> Decoder<A> {
    Decoder::fail(message)
}

/// See [`Decoder::lazy`]
pub fn lazy<A, F>(thunk: F) -> Decoder<A>
where
    A: 'static,
    F: Fn() -> Decoder<A> + Send + Sync + 'static,
{
    Decoder::lazy(thunk)
}

/// See [`Decoder::result`]
pub fn result<A: 'static>(decoder: Decoder<A>) -> Decoder<Result<A, DecoderError>> {
    Decoder::result(decoder)
}
