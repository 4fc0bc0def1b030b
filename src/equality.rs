//! Deep structural equality
//!
//! Used by the `constant` decoder. Comparison walks both structures in
//! lock-step and records every pair of container identities it enters. When a
//! pair comes around again the branch is treated as equal, so self-referential
//! graphs terminate.

use serde_json::Value;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

/// One level of a structure, with children exposed as handles
#[derive(Debug, Clone, PartialEq)]
pub enum Node<'a, S> {
    /// Null
    Null,
    /// Boolean
    Bool(bool),
    /// Number, compared by value
    Number(f64),
    /// String
    String(Cow<'a, str>),
    /// Ordered elements
    Array(Vec<S>),
    /// Keyed entries; order is irrelevant for equality
    Object(Vec<(Cow<'a, str>, S)>),
}

/// A value graph that can be compared with [`deep_equal`]
pub trait Structure: Sized {
    /// Identity of a container node. Two handles with the same address are the
    /// same node. Leaves may return `None`.
    fn address(&self) -> Option<usize>;

    /// Expose one level of the node
    fn node(&self) -> Node<'_, Self>;
}

impl<'v> Structure for &'v Value {
    fn address(&self) -> Option<usize> {
        match self {
            Value::Array(_) | Value::Object(_) => Some(*self as *const Value as usize),
            _ => None,
        }
    }

    fn node(&self) -> Node<'_, Self> {
        let value: &'v Value = *self;
        match value {
            Value::Null => Node::Null,
            Value::Bool(flag) => Node::Bool(*flag),
            // Non-finite numbers cannot appear in a parsed document.
            Value::Number(num) => Node::Number(num.as_f64().unwrap_or(f64::NAN)),
            Value::String(text) => Node::String(Cow::Borrowed(text.as_str())),
            Value::Array(items) => Node::Array(items.iter().collect()),
            Value::Object(map) => Node::Object(
                map.iter()
                    .map(|(key, item)| (Cow::Borrowed(key.as_str()), item))
                    .collect(),
            ),
        }
    }
}

/// Compare two structures for deep equality
pub fn deep_equal<S: Structure>(a: &S, b: &S) -> bool {
    let mut seen = HashSet::new();
    check(a, b, &mut seen)
}

/// Deep equality over JSON values
pub fn json_equal(a: &Value, b: &Value) -> bool {
    deep_equal(&a, &b)
}

fn check<S: Structure>(a: &S, b: &S, seen: &mut HashSet<(usize, usize)>) -> bool {
    if let (Some(left), Some(right)) = (a.address(), b.address()) {
        if left == right {
            return true;
        }
        if !seen.insert((left, right)) {
            return true;
        }
    }

    match (a.node(), b.node()) {
        (Node::Null, Node::Null) => true,
        (Node::Bool(x), Node::Bool(y)) => x == y,
        (Node::Number(x), Node::Number(y)) => x == y || (x.is_nan() && y.is_nan()),
        (Node::String(x), Node::String(y)) => x == y,
        (Node::Array(xs), Node::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys.iter()).all(|(x, y)| check(x, y, seen))
        }
        (Node::Object(xs), Node::Object(ys)) => {
            if xs.len() != ys.len() {
                return false;
            }
            let lookup: HashMap<&str, &S> = ys.iter().map(|(key, y)| (&**key, y)).collect();
            xs.iter().all(|(key, x)| match lookup.get(&**key) {
                Some(y) => check(x, *y, seen),
                None => false,
            })
        }
        _ => false,
    }
}
