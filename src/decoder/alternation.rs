//! Alternation, paths, recursion and the error-swallowing escapes

use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::OnceLock;

use super::{Decoder, Flavor};
use crate::error::DecoderError;
use crate::value::{Step, expected_got};

impl<A: 'static> Decoder<Option<A>> {
    /// Decode a value that may be absent.
    ///
    /// Absence succeeds with `None` without running `decoder`. Anything
    /// present, `null` included, is handed to `decoder`. Used as an object
    /// field, an absent key is left out of the result.
    pub fn optional(decoder: Decoder<A>) -> Self {
        Decoder::new(move |json, ctx| match json {
            None => Ok(None),
            Some(_) => decoder.decode(json, ctx).map(Some),
        })
        .with_flavor(Flavor::OptionalField)
    }
}

impl<A: 'static> Decoder<A> {
    /// Try each decoder in order against the same value and location,
    /// returning the first success.
    ///
    /// When every alternative fails, the single error lists each attempt's
    /// location and message in the order they were tried.
    pub fn one_of(decoders: impl IntoIterator<Item = Decoder<A>>) -> Self {
        let decoders: Vec<Decoder<A>> = decoders.into_iter().collect();
        Decoder::new(move |json, ctx| {
            let mut errors = Vec::with_capacity(decoders.len());
            for decoder in &decoders {
                match decoder.decode(json, ctx) {
                    Ok(value) => return Ok(value),
                    Err(error) => errors.push(error.located()),
                }
            }
            let listed = if errors.is_empty() {
                "[]".to_string()
            } else {
                format!("[\"{}\"]", errors.join("\", \""))
            };
            Err(ctx.fail(format!(
                "expected a value matching one of the decoders, got the errors {}",
                listed
            )))
        })
    }

    /// Alternatives of different output types, tagged by position.
    /// Behaves exactly like [`one_of`](Decoder::one_of).
    pub fn union<T>(decoders: T) -> Self
    where
        T: UnionDecoders<Output = A>,
    {
        Self::one_of(decoders.into_alternatives())
    }

    /// Decode with `decoder`, substituting `fallback` on any failure.
    ///
    /// This never fails: the error is discarded. A `trace` event records it.
    pub fn with_default(fallback: A, decoder: Decoder<A>) -> Self
    where
        A: Clone + Send + Sync,
    {
        Decoder::new(move |json, ctx| match decoder.decode(json, ctx) {
            Ok(value) => Ok(value),
            Err(error) => {
                tracing::trace!(
                    at = %format_args!("input{}", error.at()),
                    message = %error.message(),
                    "decode failed, using default"
                );
                Ok(fallback.clone())
            }
        })
    }

    /// Walk `path` through the value, then decode what is found there.
    ///
    /// An empty path decodes the value itself. If the final value is absent
    /// and `decoder` rejects it, the failure reads `path does not exist`.
    pub fn value_at(path: impl IntoIterator<Item = Step>, decoder: Decoder<A>) -> Self {
        let path: Vec<Step> = path.into_iter().collect();
        Decoder::new(move |json, ctx| {
            let mut current = json;
            let mut here = ctx.clone();
            for step in &path {
                let Some(value) = current else {
                    return Err(here.fail("path does not exist"));
                };
                current = match (step, value) {
                    (Step::Key(key), Value::Object(map)) => {
                        here = here.key(key);
                        map.get(key)
                    }
                    (Step::Index(index), Value::Array(items)) => {
                        here = here.index(*index);
                        items.get(*index)
                    }
                    (Step::Key(_), other) => {
                        return Err(here.fail(expected_got("an object", Some(other))));
                    }
                    (Step::Index(_), other) => {
                        return Err(here.fail(expected_got("an array", Some(other))));
                    }
                };
            }
            match decoder.decode(current, &here) {
                Err(_) if current.is_none() => Err(here.fail("path does not exist")),
                decoded => decoded,
            }
        })
    }

    /// Build the decoder with `thunk` only when a value is decoded.
    ///
    /// This is how a decoder refers to itself:
    ///
    /// ```
    /// use json_decode::{Decoder, array, lazy, object, string};
    /// use serde_json::{Map, Value, json};
    ///
    /// fn comment() -> Decoder<Map<String, Value>> {
    ///     object([
    ///         ("msg", string().into()),
    ///         ("replies", lazy(|| array(comment())).into()),
    ///     ])
    /// }
    ///
    /// let tree = json!({"msg": "hey", "replies": [{"msg": "hi", "replies": []}]});
    /// assert!(comment().run(&tree).is_ok());
    /// ```
    pub fn lazy<F>(thunk: F) -> Self
    where
        F: Fn() -> Decoder<A> + Send + Sync + 'static,
    {
        let built: OnceLock<Decoder<A>> = OnceLock::new();
        Decoder::new(move |json, ctx| built.get_or_init(&thunk).decode(json, ctx))
    }
}

impl<A: 'static> Decoder<Result<A, DecoderError>> {
    /// Decode with `decoder` and succeed with its outcome either way.
    ///
    /// A failure is delivered as the complete [`DecoderError`] a run would
    /// have returned, and never propagates further.
    pub fn result(decoder: Decoder<A>) -> Self {
        Decoder::new(move |json, ctx| {
            Ok(decoder.decode(json, ctx).map_err(|partial| {
                let error = ctx.complete(partial);
                tracing::trace!(
                    at = %error.at,
                    message = %error.message,
                    "decode failed, kept as value"
                );
                error
            }))
        })
    }
}

impl Decoder<Map<String, Value>> {
    /// Require every decoder to accept the value and merge their objects.
    ///
    /// Decoders run in order and the first failure is returned. When two
    /// decoders produce the same key, the later one wins.
    pub fn intersection(decoders: impl IntoIterator<Item = Decoder<Map<String, Value>>>) -> Self {
        let decoders: Vec<_> = decoders.into_iter().collect();
        Decoder::new(move |json, ctx| {
            let mut merged = Map::new();
            for decoder in &decoders {
                merged.extend(decoder.decode(json, ctx)?);
            }
            Ok(merged)
        })
    }
}

/// A group of two to eight decoders usable with [`union`](Decoder::union)
pub trait UnionDecoders {
    /// Tagged output, one variant per decoder
    type Output;

    /// Each decoder, mapped into its variant, in order
    fn into_alternatives(self) -> Vec<Decoder<Self::Output>>;
}

macro_rules! unions {
    ($($union:ident { $($variant:ident $index:tt),+ }),+ $(,)?) => {$(
        /// Output of a union, tagged by the position of the decoder that matched
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum $union<$($variant),+> {
            $(
                #[allow(missing_docs)]
                $variant($variant),
            )+
        }

        impl<$($variant: 'static),+> UnionDecoders for ($(Decoder<$variant>,)+) {
            type Output = $union<$($variant),+>;

            fn into_alternatives(self) -> Vec<Decoder<Self::Output>> {
                vec![$(self.$index.map($union::$variant)),+]
            }
        }
    )+};
}

unions! {
    Union2 { A 0, B 1 },
    Union3 { A 0, B 1, C 2 },
    Union4 { A 0, B 1, C 2, D 3 },
    Union5 { A 0, B 1, C 2, D 3, E 4 },
    Union6 { A 0, B 1, C 2, D 3, E 4, F 5 },
    Union7 { A 0, B 1, C 2, D 3, E 4, F 5, G 6 },
    Union8 { A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7 },
}
