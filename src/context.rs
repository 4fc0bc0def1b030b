//! Decoding context
//!
//! A [`Context`] is the immutable "location so far" threaded through every
//! decode attempt. Descending into a field or element builds a new context
//! whose path shares its prefix with the parent, so sibling attempts (the
//! alternatives of a one-of, the fields of an object) never observe each
//! other's segments.

use serde_json::Value;
use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::{DecoderError, PartialError};

/// One step of descent into a structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Object field access, rendered `.key`
    Key(&'a str),
    /// Array element access, rendered `[index]`
    Index(usize),
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => write!(f, ".{}", key),
            Segment::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// Per-run state shared by every context of a single run
pub(crate) struct Root<'a> {
    input: &'a Value,
    shared: OnceCell<Arc<Value>>,
}

impl<'a> Root<'a> {
    pub(crate) fn new(input: &'a Value) -> Self {
        Self {
            input,
            shared: OnceCell::new(),
        }
    }

    /// The input as an owned, shareable value. Cloned at most once per run.
    pub(crate) fn shared_input(&self) -> Arc<Value> {
        self.shared
            .get_or_init(|| Arc::new(self.input.clone()))
            .clone()
    }
}

struct Link<'a> {
    parent: Option<Rc<Link<'a>>>,
    segment: Segment<'a>,
}

/// Location of the value currently being decoded, plus the run's original input
#[derive(Clone)]
pub struct Context<'a> {
    root: &'a Root<'a>,
    path: Option<Rc<Link<'a>>>,
}

impl<'a> Context<'a> {
    pub(crate) fn root(root: &'a Root<'a>) -> Self {
        Self { root, path: None }
    }

    /// The original top-level input of this run
    pub fn input(&self) -> &'a Value {
        self.root.input
    }

    /// Context for the value one segment below this one
    pub fn descend<'b>(&self, segment: Segment<'b>) -> Context<'b>
    where
        'a: 'b,
    {
        Context {
            root: self.root,
            path: Some(Rc::new(Link {
                parent: self.path.clone(),
                segment,
            })),
        }
    }

    /// Context for the field `key` of the current object
    pub fn key<'b>(&self, key: &'b str) -> Context<'b>
    where
        'a: 'b,
    {
        self.descend(Segment::Key(key))
    }

    /// Context for element `index` of the current array
    pub fn index(&self, index: usize) -> Context<'a> {
        self.descend(Segment::Index(index))
    }

    /// Path segments from the root down to this context
    pub fn segments(&self) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();
        let mut link = self.path.as_deref();
        while let Some(current) = link {
            segments.push(current.segment);
            link = current.parent.as_deref();
        }
        segments.reverse();
        segments
    }

    /// Rendered path after the `input` root, e.g. `.a.b[1]`
    pub fn render(&self) -> String {
        self.segments()
            .iter()
            .map(|segment| segment.to_string())
            .collect()
    }

    /// Failure located at this context
    pub fn fail(&self, message: impl Into<String>) -> PartialError {
        PartialError::new(self.render(), message)
    }

    /// Stamp a partial error with this run's input
    pub(crate) fn complete(&self, partial: PartialError) -> DecoderError {
        DecoderError::from_partial(self.root.shared_input(), partial)
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("at", &format!("input{}", self.render()))
            .finish()
    }
}
