//! Primitive decoders
//!
//! Kind checks are exact: a numeric string is not a number, `null` is not a
//! missing value.

use serde_json::Value;

use super::Decoder;
use crate::equality::json_equal;
use crate::value::{expected_got, render};

impl Decoder<String> {
    /// Accept strings
    pub fn string() -> Self {
        Decoder::new(|json, ctx| match json {
            Some(Value::String(text)) => Ok(text.clone()),
            other => Err(ctx.fail(expected_got("a string", other))),
        })
    }
}

impl Decoder<f64> {
    /// Accept numbers
    pub fn number() -> Self {
        Decoder::new(|json, ctx| match json.and_then(Value::as_f64) {
            Some(number) => Ok(number),
            None => Err(ctx.fail(expected_got("a number", json))),
        })
    }
}

impl Decoder<bool> {
    /// Accept booleans
    pub fn boolean() -> Self {
        Decoder::new(|json, ctx| match json {
            Some(Value::Bool(flag)) => Ok(*flag),
            other => Err(ctx.fail(expected_got("a boolean", other))),
        })
    }
}

impl Decoder<Value> {
    /// Accept anything and pass it through unvalidated. An absent value
    /// decodes as `null`.
    pub fn any_json() -> Self {
        Decoder::new(|json, _ctx| Ok(json.cloned().unwrap_or(Value::Null)))
    }

    /// Accept only values deep-equal to `expected`
    pub fn constant(expected: impl Into<Value>) -> Self {
        let expected = expected.into();
        let rendered = expected.to_string();
        Decoder::new(move |json, ctx| match json {
            Some(actual) if json_equal(&expected, actual) => Ok(expected.clone()),
            other => Err(ctx.fail(format!("expected {}, got {}", rendered, render(other)))),
        })
    }

    /// `constant(true)`
    pub fn constant_true() -> Self {
        Self::constant(true)
    }

    /// `constant(false)`
    pub fn constant_false() -> Self {
        Self::constant(false)
    }

    /// `constant(null)`
    pub fn constant_null() -> Self {
        Self::constant(Value::Null)
    }
}

impl Decoder<Option<Value>> {
    /// Accept anything, keeping absence visible as `None`
    pub fn unknown_json() -> Self {
        Decoder::new(|json, _ctx| Ok(json.cloned()))
    }
}

impl<A: Clone + Send + Sync + 'static> Decoder<A> {
    /// Ignore the input and always produce `value`
    pub fn succeed(value: A) -> Self {
        Decoder::new(move |_json, _ctx| Ok(value.clone()))
    }
}

impl<A: 'static> Decoder<A> {
    /// Ignore the input and always fail with exactly `message`
    pub fn fail(message: impl Into<String>) -> Self {
        let message = message.into();
        Decoder::new(move |_json, ctx| Err(ctx.fail(message.clone())))
    }
}
