//! Shape classification of JSON nodes.
//!
//! References and traits can be written either as a bare scalar or as an
//! object. The shape is decided once, here, and parsers match on [`Node`]
//! instead of probing the JSON value repeatedly.

use serde_json::{Map, Value};
use std::borrow::Cow;

/// The shape of an input node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<'a> {
    /// No node was supplied (missing property or JSON `null`)
    Absent,
    /// A bare value, carried in its textual form
    Scalar(Cow<'a, str>),
    /// An object with named fields
    Composite(&'a Map<String, Value>),
    /// An array of nodes
    List(&'a [Value]),
}

impl<'a> Node<'a> {
    /// Classify an optional JSON value.
    pub fn classify(value: Option<&'a Value>) -> Node<'a> {
        match value {
            None | Some(Value::Null) => Node::Absent,
            Some(Value::String(s)) => Node::Scalar(Cow::Borrowed(s)),
            Some(Value::Bool(b)) => Node::Scalar(Cow::Owned(b.to_string())),
            Some(Value::Number(n)) => Node::Scalar(Cow::Owned(n.to_string())),
            Some(Value::Object(fields)) => Node::Composite(fields),
            Some(Value::Array(items)) => Node::List(items),
        }
    }

    /// Look up a named field. Anything but a composite has no fields.
    pub fn field(&self, name: &str) -> Node<'a> {
        match self {
            Node::Composite(fields) => Node::classify(fields.get(name)),
            _ => Node::Absent,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Node::Absent)
    }

    /// Short description of the shape, used in messages
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Absent => "nothing",
            Node::Scalar(_) => "a scalar",
            Node::Composite(_) => "an object",
            Node::List(_) => "an array",
        }
    }
}
