//! Structural decoders: objects, arrays, tuples and dictionaries

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

use super::{Decoder, Flavor};
use crate::context::Context;
use crate::error::DecodeResult;
use crate::value::expected_got;

/// Decoder for one declared field of an [`object`](Decoder::object)
///
/// Built from any decoder whose output serializes to JSON. The decoder's
/// flavor decides how an absent key is treated.
#[derive(Debug, Clone)]
pub struct Field {
    flavor: Flavor,
    decoder: Decoder<Value>,
}

impl Field {
    /// Whether an absent key is omitted rather than reported
    pub fn is_optional(&self) -> bool {
        self.flavor == Flavor::OptionalField
    }
}

impl<A: Serialize + 'static> From<Decoder<A>> for Field {
    fn from(decoder: Decoder<A>) -> Self {
        Field {
            flavor: decoder.flavor(),
            decoder: decoder.to_json(),
        }
    }
}

impl Decoder<Map<String, Value>> {
    /// Decode the declared fields of an object, in declaration order.
    ///
    /// Keys of the input that are not declared are dropped. A declared key
    /// that is absent from the input is reported at the object itself, unless
    /// its decoder is optional, in which case it is left out of the result.
    pub fn object<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Field)>,
        K: Into<String>,
    {
        let fields: Vec<(String, Field)> = fields
            .into_iter()
            .map(|(key, field)| (key.into(), field))
            .collect();

        Decoder::new(move |json, ctx| {
            let Some(Value::Object(map)) = json else {
                return Err(ctx.fail(expected_got("an object", json)));
            };

            let mut decoded = Map::new();
            for (key, field) in &fields {
                let value = map.get(key);
                if field.is_optional() && value.is_none() {
                    continue;
                }
                match field.decoder.decode(value, &ctx.key(key)) {
                    Ok(item) => {
                        decoded.insert(key.clone(), item);
                    }
                    Err(_) if value.is_none() => {
                        return Err(ctx.fail(format!(
                            "the key '{}' is required but was not present",
                            key
                        )));
                    }
                    Err(error) => return Err(error),
                }
            }
            Ok(decoded)
        })
    }

    /// Accept any object, unvalidated
    pub fn any_object() -> Self {
        Decoder::new(|json, ctx| match json {
            Some(Value::Object(map)) => Ok(map.clone()),
            other => Err(ctx.fail(expected_got("an object", other))),
        })
    }
}

impl<A: 'static> Decoder<Vec<A>> {
    /// Decode every element of an array with `element`
    pub fn array(element: Decoder<A>) -> Self {
        Decoder::new(move |json, ctx| {
            let Some(Value::Array(items)) = json else {
                return Err(ctx.fail(expected_got("an array", json)));
            };
            items
                .iter()
                .enumerate()
                .map(|(index, item)| element.decode(Some(item), &ctx.index(index)))
                .collect()
        })
    }
}

impl Decoder<Vec<Value>> {
    /// Accept any array, unvalidated
    pub fn any_array() -> Self {
        Decoder::new(|json, ctx| match json {
            Some(Value::Array(items)) => Ok(items.clone()),
            other => Err(ctx.fail(expected_got("an array", other))),
        })
    }
}

impl<A: 'static> Decoder<HashMap<String, A>> {
    /// Decode every value of an object with `values`, whatever the keys
    pub fn dict(values: Decoder<A>) -> Self {
        Decoder::new(move |json, ctx| {
            let Some(Value::Object(map)) = json else {
                return Err(ctx.fail(expected_got("an object", json)));
            };
            map.iter()
                .map(|(key, item)| {
                    values
                        .decode(Some(item), &ctx.key(key))
                        .map(|decoded| (key.clone(), decoded))
                })
                .collect()
        })
    }
}

/// A fixed-length group of decoders usable with [`tuple`](Decoder::tuple)
///
/// Implemented for Rust tuples of one to eight decoders, producing a tuple of
/// their outputs, and for `Vec<Decoder<A>>`, producing a `Vec<A>`.
pub trait TupleDecoders: Send + Sync + 'static {
    /// Decoded output
    type Output;

    /// Number of positions
    fn arity(&self) -> usize;

    /// Decode `items`, whose length is already known to equal the arity
    fn decode_items(&self, items: &[Value], ctx: &Context<'_>) -> DecodeResult<Self::Output>;
}

macro_rules! tuple_decoders {
    ($(($($name:ident $index:tt),+)),+ $(,)?) => {$(
        impl<$($name: 'static),+> TupleDecoders for ($(Decoder<$name>,)+) {
            type Output = ($($name,)+);

            fn arity(&self) -> usize {
                [$($index),+].len()
            }

            fn decode_items(
                &self,
                items: &[Value],
                ctx: &Context<'_>,
            ) -> DecodeResult<Self::Output> {
                Ok(($(self.$index.decode(items.get($index), &ctx.index($index))?,)+))
            }
        }
    )+};
}

tuple_decoders!(
    (A 0),
    (A 0, B 1),
    (A 0, B 1, C 2),
    (A 0, B 1, C 2, D 3),
    (A 0, B 1, C 2, D 3, E 4),
    (A 0, B 1, C 2, D 3, E 4, F 5),
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6),
    (A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7),
);

impl<A: 'static> TupleDecoders for Vec<Decoder<A>> {
    type Output = Vec<A>;

    fn arity(&self) -> usize {
        self.len()
    }

    fn decode_items(&self, items: &[Value], ctx: &Context<'_>) -> DecodeResult<Self::Output> {
        self.iter()
            .zip(items)
            .enumerate()
            .map(|(index, (decoder, item))| decoder.decode(Some(item), &ctx.index(index)))
            .collect()
    }
}

impl<A: 'static> Decoder<A> {
    /// Decode an array of exactly as many elements as there are decoders,
    /// each position with its own decoder
    pub fn tuple<T>(decoders: T) -> Self
    where
        T: TupleDecoders<Output = A>,
    {
        Decoder::new(move |json, ctx| {
            let arity = decoders.arity();
            let Some(Value::Array(items)) = json else {
                return Err(ctx.fail(expected_got(
                    &format!("a tuple of length {}", arity),
                    json,
                )));
            };
            if items.len() != arity {
                return Err(ctx.fail(format!(
                    "expected a tuple of length {}, got one of length {}",
                    arity,
                    items.len()
                )));
            }
            decoders.decode_items(items, ctx)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::combinators::*;
    use serde_json::{Value, json};

    #[test]
    fn test_object_keeps_declared_fields_only() {
        let decoder = object([("x", number().into())]);
        let decoded = decoder.run(&json!({"x": 5, "y": 6})).unwrap();
        assert_eq!(Value::Object(decoded), json!({"x": 5.0}));
    }

    #[test]
    fn test_object_rejects_non_objects() {
        let decoder = object([("x", number().into())]);
        assert_eq!(
            decoder.run(&json!("x")).unwrap_err().message,
            "expected an object, got a string"
        );
        assert_eq!(
            decoder.run(&json!([])).unwrap_err().message,
            "expected an object, got an array"
        );
    }

    #[test]
    fn test_missing_key_reported_at_parent() {
        let decoder = object([("x", number().into())]);
        let error = decoder.run(&json!({})).unwrap_err();
        assert_eq!(error.at, "input");
        assert_eq!(error.message, "the key 'x' is required but was not present");
    }

    #[test]
    fn test_present_null_is_not_missing() {
        let decoder = object([("x", number().into())]);
        let error = decoder.run(&json!({"x": null})).unwrap_err();
        assert_eq!(error.at, "input.x");
        assert_eq!(error.message, "expected a number, got null");
    }

    #[test]
    fn test_field_decoders_that_accept_absence_still_run() {
        let decoder = object([
            ("a", with_default(0.0, number()).into()),
            ("b", succeed("fixed").into()),
        ]);
        let decoded = decoder.run(&json!({})).unwrap();
        assert_eq!(Value::Object(decoded), json!({"a": 0.0, "b": "fixed"}));
    }

    #[test]
    fn test_nested_field_path() {
        let decoder = object([(
            "hello",
            object([("hey", object([("Howdy!", string().into())]).into())]).into(),
        )]);
        let error = decoder
            .run(&json!({"hello": {"hey": {"Howdy!": {}}}}))
            .unwrap_err();
        assert_eq!(error.at, "input.hello.hey.Howdy!");
        assert_eq!(error.message, "expected a string, got an object");
    }

    #[test]
    fn test_any_object_passes_through() {
        let json = json!({"anything": [1, 2], "goes": null});
        let decoded = any_object().run(&json).unwrap();
        assert_eq!(Value::Object(decoded), json);
        assert_eq!(
            any_object().run(&json!(3)).unwrap_err().message,
            "expected an object, got a number"
        );
    }

    #[test]
    fn test_array_paths() {
        let decoder = array(number());
        assert_eq!(decoder.run(&json!([1, 2, 3])), Ok(vec![1.0, 2.0, 3.0]));
        assert_eq!(decoder.run(&json!([])), Ok(vec![]));

        let error = decoder.run(&json!(["a"])).unwrap_err();
        assert_eq!(error.at, "input[0]");
        assert_eq!(error.message, "expected a number, got a string");

        let nested = array(array(array(number())));
        let error = nested
            .run(&json!([[], [], [[1, 2, 3, false]]]))
            .unwrap_err();
        assert_eq!(error.at, "input[2][0][3]");
        assert_eq!(error.message, "expected a number, got a boolean");
    }

    #[test]
    fn test_array_reports_first_failure() {
        let error = array(string()).run(&json!(["ok", 1, true])).unwrap_err();
        assert_eq!(error.at, "input[1]");
    }

    #[test]
    fn test_any_array_with_successes() {
        let decoder = any_array().map(|items| {
            crate::result::successes(items.iter().map(|item| number().run(item)))
        });
        assert_eq!(
            decoder.run(&json!([1, true, 2, 3, "five", 4, []])),
            Ok(vec![1.0, 2.0, 3.0, 4.0])
        );
        assert_eq!(decoder.run(&json!([false, "hi", {}])), Ok(vec![]));
        assert_eq!(
            decoder.run(&json!(false)).unwrap_err().message,
            "expected an array, got a boolean"
        );
    }

    #[test]
    fn test_tuple_typed() {
        let decoder = tuple((string(), number(), boolean()));
        assert_eq!(
            decoder.run(&json!(["a", 1, true])),
            Ok(("a".to_string(), 1.0, true))
        );

        let error = decoder.run(&json!(["a", "b", true])).unwrap_err();
        assert_eq!(error.at, "input[1]");
        assert_eq!(error.message, "expected a number, got a string");
    }

    #[test]
    fn test_tuple_length_mismatch() {
        let decoder = tuple((number(), number()));
        let error = decoder.run(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(error.at, "input");
        assert_eq!(error.message, "expected a tuple of length 2, got one of length 3");

        let error = decoder.run(&json!({"0": 1})).unwrap_err();
        assert_eq!(error.message, "expected a tuple of length 2, got an object");
    }

    #[test]
    fn test_tuple_from_vec() {
        let decoder = tuple(vec![number(), number().map(|x| x * 10.0)]);
        assert_eq!(decoder.run(&json!([1, 2])), Ok(vec![1.0, 20.0]));
    }

    #[test]
    fn test_dict() {
        let decoder = dict(number());
        assert!(decoder.run(&json!({})).unwrap().is_empty());

        let decoded = decoder.run(&json!({"chocolate": 12, "vanilla": 10})).unwrap();
        assert_eq!(decoded.get("chocolate"), Some(&12.0));
        assert_eq!(decoded.get("vanilla"), Some(&10.0));

        let error = decoder.run(&json!({"oh": "no"})).unwrap_err();
        assert_eq!(error.at, "input.oh");
        assert_eq!(error.message, "expected a number, got a string");

        assert_eq!(
            decoder.run(&json!([])).unwrap_err().message,
            "expected an object, got an array"
        );
    }

    #[test]
    fn test_dict_reports_first_failure_in_input_order() {
        let json: Value = serde_json::from_str(r#"{"z": "bad", "a": "bad"}"#).unwrap();
        let error = dict(number()).run(&json).unwrap_err();
        assert_eq!(error.at, "input.z");
        assert_eq!(error.message, "expected a number, got a string");
    }

    #[test]
    fn test_object_skips_absent_optional_without_running_decoder() {
        let decoder = object([("a", optional(fail::<f64>("never runs")).into())]);
        let decoded = decoder.run(&json!({})).unwrap();
        assert!(decoded.is_empty());

        let error = decoder.run(&json!({"a": 1})).unwrap_err();
        assert_eq!(error.at, "input.a");
        assert_eq!(error.message, "never runs");
    }

    #[test]
    fn test_dict_transforms_values() {
        let decoder = dict(string().map(|text| text + "!"));
        let decoded = decoder.run(&json!({"hey": "there", "yo": "dude"})).unwrap();
        assert_eq!(decoded.get("hey").map(String::as_str), Some("there!"));
        assert_eq!(decoded.get("yo").map(String::as_str), Some("dude!"));
    }
}
