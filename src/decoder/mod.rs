//! Decoder engine
//!
//! A [`Decoder<A>`] is an immutable, reusable description of how to turn an
//! untyped [`Value`] into an `A`. Internally it wraps a function from the
//! value under inspection (absent values are `None`) and the current
//! [`Context`] to a [`DecodeResult`]. Combinators build new decoders out of
//! existing ones; nothing is evaluated until one of the run operations is
//! called.
//!
//! Constructors are grouped by concern:
//! - [`primitive`]: strings, numbers, booleans, constants, pass-through
//! - [`structure`]: objects, arrays, tuples, dictionaries
//! - [`alternation`]: optional values, alternatives, paths, recursion, escapes

use futures::future::Ready;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::context::{Context, Root};
use crate::error::{DecodeResult, DecoderError};
use crate::result;

pub mod alternation;
pub mod primitive;
pub mod structure;

pub use alternation::{
    Union2, Union3, Union4, Union5, Union6, Union7, Union8, UnionDecoders,
};
pub use structure::{Field, TupleDecoders};

type DecodeFn<A> = dyn Fn(Option<&Value>, &Context<'_>) -> DecodeResult<A> + Send + Sync;

/// How an object field treats its decoder
///
/// The object combinator pattern-matches on this tag: an absent key whose
/// decoder is `OptionalField` is left out of the result instead of being
/// reported as missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Ordinary decoder
    Plain,
    /// Produced by `optional`; absent object keys are omitted
    OptionalField,
}

/// Composable description of how to decode a [`Value`] into an `A`
pub struct Decoder<A> {
    flavor: Flavor,
    decode: Arc<DecodeFn<A>>,
}

impl<A> Clone for Decoder<A> {
    fn clone(&self) -> Self {
        Self {
            flavor: self.flavor,
            decode: Arc::clone(&self.decode),
        }
    }
}

impl<A> fmt::Debug for Decoder<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("flavor", &self.flavor)
            .finish_non_exhaustive()
    }
}

impl<A: 'static> Decoder<A> {
    pub(crate) fn new<F>(decode: F) -> Self
    where
        F: Fn(Option<&Value>, &Context<'_>) -> DecodeResult<A> + Send + Sync + 'static,
    {
        Self {
            flavor: Flavor::Plain,
            decode: Arc::new(decode),
        }
    }

    pub(crate) fn with_flavor(mut self, flavor: Flavor) -> Self {
        self.flavor = flavor;
        self
    }

    /// The flavor tag of this decoder
    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Run one decode attempt at `ctx`
    pub(crate) fn decode(&self, value: Option<&Value>, ctx: &Context<'_>) -> DecodeResult<A> {
        (self.decode)(value, ctx)
    }

    /// Transform a successful result with `f`; failures pass through
    pub fn map<B, F>(self, f: F) -> Decoder<B>
    where
        B: 'static,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Decoder::new(move |json, ctx| self.decode(json, ctx).map(&f))
    }

    /// Choose the next decoder from the decoded value and run it against the
    /// same input.
    ///
    /// The second decoder sees the original value, not the decoded one, so it
    /// can inspect fields the first decoder ignored. Its errors are located
    /// relative to that original value.
    pub fn and_then<B, F>(self, f: F) -> Decoder<B>
    where
        B: 'static,
        F: Fn(A) -> Decoder<B> + Send + Sync + 'static,
    {
        Decoder::new(move |json, ctx| {
            let value = self.decode(json, ctx)?;
            f(value).decode(json, ctx)
        })
    }

    /// Keep the decoded value only when `predicate` holds, failing with
    /// `message` otherwise
    pub fn ensure<P>(self, predicate: P, message: impl Into<String>) -> Decoder<A>
    where
        P: Fn(&A) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        Decoder::new(move |json, ctx| {
            let value = self.decode(json, ctx)?;
            if predicate(&value) {
                Ok(value)
            } else {
                Err(ctx.fail(message.clone()))
            }
        })
    }

    /// Observe every failure of this decoder as a complete [`DecoderError`].
    /// The failure itself is passed through unchanged.
    pub fn inspect_error<F>(self, f: F) -> Decoder<A>
    where
        F: Fn(&DecoderError) + Send + Sync + 'static,
    {
        let flavor = self.flavor;
        Decoder::new(move |json, ctx| {
            self.decode(json, ctx).map_err(|partial| {
                f(&ctx.complete(partial.clone()));
                partial
            })
        })
        .with_flavor(flavor)
    }

    /// Emit a `debug` event tagged with `label` whenever this decoder fails
    pub fn logged(self, label: impl Into<String>) -> Decoder<A> {
        let label = label.into();
        self.inspect_error(move |error| {
            tracing::debug!(
                decoder = %label,
                at = %error.at,
                message = %error.message,
                "decode failed"
            );
        })
    }

    /// Run the decoder against `json`
    pub fn run(&self, json: &Value) -> Result<A, DecoderError> {
        let root = Root::new(json);
        let ctx = Context::root(&root);
        self.decode(Some(json), &ctx).map_err(|partial| {
            let error = ctx.complete(partial);
            tracing::trace!(at = %error.at, message = %error.message, "decode failed");
            error
        })
    }

    /// Run the decoder and hand the outcome over as a completed future
    pub fn run_promise(&self, json: &Value) -> Ready<Result<A, DecoderError>> {
        result::as_future(self.run(json))
    }

    /// Run the decoder, panicking with the formatted error on failure
    pub fn run_with_exception(&self, json: &Value) -> A {
        result::with_exception(self.run(json).map_err(|error| error.to_string()))
    }
}

impl<A: Serialize + 'static> Decoder<A> {
    /// Erase the decoded value into a [`Value`], keeping the flavor
    pub fn to_json(self) -> Decoder<Value> {
        let flavor = self.flavor;
        Decoder::new(move |json, ctx| {
            let value = self.decode(json, ctx)?;
            serde_json::to_value(value)
                .map_err(|err| ctx.fail(format!("could not serialize decoded value: {}", err)))
        })
        .with_flavor(flavor)
    }

    /// Convert the decoded value into any deserializable type
    pub fn deserialize<T>(self) -> Decoder<T>
    where
        T: DeserializeOwned + 'static,
    {
        Decoder::new(move |json, ctx| {
            let value = self.decode(json, ctx)?;
            serde_json::to_value(value)
                .and_then(serde_json::from_value)
                .map_err(|err| ctx.fail(format!("could not deserialize decoded value: {}", err)))
        })
    }
}
