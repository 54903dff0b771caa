//! Persistence of trait references.
//!
//! Accepted shapes:
//! - `"means.identity"`
//! - `{ "traitReference": "is.constrained", "arguments": [64, { "name": "minimumLength", "value": 1 }] }`

use serde_json::{Map, Value};

use super::node::Node;
use super::{ToData, utils};
use crate::context::CorpusContext;
use crate::error::{Error, Result};
use crate::model::{Argument, ArgumentValue, TraitReference};

/// Parse one trait node.
pub fn from_data(ctx: &CorpusContext, obj: &Value) -> Result<TraitReference> {
    match Node::classify(Some(obj)) {
        Node::Scalar(name) => Ok(TraitReference::simple(name)),
        Node::Composite(fields) => {
            let trait_name = match Node::classify(fields.get("traitReference")) {
                Node::Scalar(name) => name.into_owned(),
                Node::Absent => {
                    return Err(Error::InvalidTraitNode(
                        "object is missing 'traitReference'".to_string(),
                    ));
                }
                other => {
                    return Err(Error::InvalidTraitNode(format!(
                        "'traitReference' must be a trait name, found {}",
                        other.kind()
                    )));
                }
            };
            let arguments = parse_arguments(ctx, fields)?;
            Ok(TraitReference::with_arguments(trait_name, arguments))
        }
        other => Err(Error::InvalidTraitNode(format!(
            "expected a trait name or object, found {}",
            other.kind()
        ))),
    }
}

fn parse_arguments(ctx: &CorpusContext, fields: &Map<String, Value>) -> Result<Vec<Argument>> {
    match Node::classify(fields.get("arguments")) {
        Node::Absent => Ok(vec![]),
        Node::List(items) => items.iter().map(|item| parse_argument(ctx, item)).collect(),
        other => Err(Error::InvalidTraitNode(format!(
            "'arguments' must be an array, found {}",
            other.kind()
        ))),
    }
}

fn parse_argument(ctx: &CorpusContext, obj: &Value) -> Result<Argument> {
    // `{ "name": ..., "value": ... }` is a named argument; any other value is the argument itself
    if let Value::Object(fields) = obj {
        if let Some(value) = fields.get("value").filter(|v| !v.is_null()) {
            return Ok(Argument {
                name: utils::optional_string(fields, "name")?,
                explanation: utils::optional_string(fields, "explanation")?,
                value: utils::create_constant(ctx, value)?,
                expanded: true,
            });
        }
    }
    Ok(Argument::positional(utils::create_constant(ctx, obj)?))
}

impl ToData for TraitReference {
    fn to_data(&self) -> Value {
        if self.simple_named_reference && self.arguments.is_empty() {
            return Value::String(self.trait_name.clone());
        }
        let mut data = Map::new();
        data.insert(
            "traitReference".to_string(),
            Value::String(self.trait_name.clone()),
        );
        if !self.arguments.is_empty() {
            data.insert(
                "arguments".to_string(),
                Value::Array(self.arguments.iter().map(ToData::to_data).collect()),
            );
        }
        Value::Object(data)
    }
}

impl ToData for Argument {
    fn to_data(&self) -> Value {
        let value = self.value.to_data();
        if !self.expanded && self.name.is_none() && self.explanation.is_none() {
            return value;
        }
        let mut data = Map::new();
        if let Some(explanation) = &self.explanation {
            data.insert("explanation".to_string(), Value::String(explanation.clone()));
        }
        if let Some(name) = &self.name {
            data.insert("name".to_string(), Value::String(name.clone()));
        }
        data.insert("value".to_string(), value);
        Value::Object(data)
    }
}

impl ToData for ArgumentValue {
    fn to_data(&self) -> Value {
        match self {
            ArgumentValue::Json(value) => value.clone(),
            ArgumentValue::DataTypeReference(reference) => reference.to_data(),
            ArgumentValue::TraitReference(reference) => reference.to_data(),
        }
    }
}
