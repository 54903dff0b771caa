//! Trait references and their arguments.

use serde_json::Value;

use super::reference::DataTypeReference;

/// A named annotation applied to a reference or exhibited by a definition.
///
/// Example: `"means.identity.brand"` or
/// `{ "traitReference": "is.constrained", "arguments": [{ "name": "maximumLength", "value": 64 }] }`
#[derive(Debug, Clone, PartialEq)]
pub struct TraitReference {
    pub trait_name: String,
    /// True when the trait was written as a bare string
    pub simple_named_reference: bool,
    pub arguments: Vec<Argument>,
}

/// A trait argument, optionally named.
///
/// Written either as the bare value or as
/// `{ "explanation": ..., "name": ..., "value": ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: Option<String>,
    pub explanation: Option<String>,
    pub value: ArgumentValue,
    /// True when the argument was written as an object wrapping `value`
    pub expanded: bool,
}

/// The value carried by a trait argument.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentValue {
    /// Plain constant kept as it appeared in the document
    Json(Value),
    DataTypeReference(Box<DataTypeReference>),
    TraitReference(Box<TraitReference>),
}

impl TraitReference {
    /// A trait written as a bare string
    pub fn simple(name: impl Into<String>) -> Self {
        TraitReference {
            trait_name: name.into(),
            simple_named_reference: true,
            arguments: vec![],
        }
    }

    /// A trait written in expanded form with arguments
    pub fn with_arguments(name: impl Into<String>, arguments: Vec<Argument>) -> Self {
        TraitReference {
            trait_name: name.into(),
            simple_named_reference: false,
            arguments,
        }
    }

    /// Find an argument by name
    pub fn argument(&self, name: &str) -> Option<&ArgumentValue> {
        self.arguments
            .iter()
            .find(|arg| arg.name.as_deref() == Some(name))
            .map(|arg| &arg.value)
    }
}

impl Argument {
    pub fn named(name: impl Into<String>, value: ArgumentValue) -> Self {
        Argument {
            name: Some(name.into()),
            explanation: None,
            value,
            expanded: true,
        }
    }

    pub fn positional(value: ArgumentValue) -> Self {
        Argument {
            name: None,
            explanation: None,
            value,
            expanded: false,
        }
    }
}

impl From<Value> for ArgumentValue {
    fn from(value: Value) -> Self {
        ArgumentValue::Json(value)
    }
}
