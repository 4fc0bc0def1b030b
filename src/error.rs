//! Error types for decoding
//!
//! Failures are values everywhere inside the engine. A decode attempt that
//! fails produces a [`PartialError`] carrying only the location suffix and the
//! message; the terminal run operations stamp it with the original input and
//! the `input` prefix to form a complete [`DecoderError`].

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Complete, user-facing description of a failed decode.
///
/// `Display` renders the formatted single-string form:
///
/// ```text
/// Input: {"a":1}
/// Failed at input.a: expected a string, got a number
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Input: {input}\nFailed at {at}: {message}")]
pub struct DecoderError {
    /// The original top-level value handed to the run operation
    pub input: Arc<Value>,
    /// Location of the failure, `input` followed by `.key` / `[index]` segments
    pub at: String,
    /// Human-readable description; never contains the location itself
    pub message: String,
}

impl DecoderError {
    /// Fixed tag carried in the serialized form
    pub const KIND: &'static str = "DecoderError";

    /// Build an error from its parts. `at` is rendered relative to the root
    /// and receives the `input` prefix here.
    pub(crate) fn from_partial(input: Arc<Value>, partial: PartialError) -> Self {
        Self {
            input,
            at: format!("input{}", partial.at),
            message: partial.message,
        }
    }

    /// The fixed kind tag
    pub fn kind(&self) -> &'static str {
        Self::KIND
    }
}

impl Serialize for DecoderError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DecoderError", 4)?;
        state.serialize_field("kind", Self::KIND)?;
        state.serialize_field("input", &self.input)?;
        state.serialize_field("at", &self.at)?;
        state.serialize_field("message", &self.message)?;
        state.end()
    }
}

/// A failure that has not yet been stamped with the original input.
///
/// `at` holds the rendered path segments after the `input` root, so an error
/// at the root has an empty `at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialError {
    pub(crate) at: String,
    pub(crate) message: String,
}

impl PartialError {
    pub(crate) fn new(at: String, message: impl Into<String>) -> Self {
        Self {
            at,
            message: message.into(),
        }
    }

    /// Location suffix relative to `input`
    pub fn at(&self) -> &str {
        &self.at
    }

    /// Failure message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render as it appears inside an aggregated one-of message
    pub(crate) fn located(&self) -> String {
        format!("at input{}: {}", self.at, self.message)
    }
}

/// Result of a single decode attempt inside the engine
pub type DecodeResult<A> = std::result::Result<A, PartialError>;
