//! Helpers shared by the persistence modules.

use serde_json::{Map, Value};

use super::node::Node;
use super::{data_type_reference, trait_reference};
use crate::context::CorpusContext;
use crate::error::{Error, Result};
use crate::model::{ArgumentValue, TraitReference};

/// Parse an ordered array of trait nodes.
///
/// An absent node yields `None`. Anything other than an array is reported as
/// a warning and also yields `None`. Trait parser errors are returned as is.
pub fn create_trait_reference_list(
    ctx: &CorpusContext,
    node: Node<'_>,
) -> Result<Option<Vec<TraitReference>>> {
    match node {
        Node::Absent => Ok(None),
        Node::List(items) => items
            .iter()
            .map(|item| trait_reference::from_data(ctx, item))
            .collect::<Result<Vec<_>>>()
            .map(Some),
        other => {
            ctx.log_warning(
                "Utils",
                format!("Expected an array of traits, found {}; ignoring it.", other.kind()),
                "create_trait_reference_list",
            );
            Ok(None)
        }
    }
}

/// Interpret a trait argument value.
///
/// Objects carrying `dataTypeReference` or `traitReference` become references,
/// parsed one nesting level deeper. Every other value is kept as a constant.
pub fn create_constant(ctx: &CorpusContext, obj: &Value) -> Result<ArgumentValue> {
    let Value::Object(fields) = obj else {
        return Ok(ArgumentValue::Json(obj.clone()));
    };

    if fields.contains_key("dataTypeReference") {
        let nested = ctx.nested()?;
        if let Some(reference) = data_type_reference::from_data(&nested, Some(obj))? {
            return Ok(ArgumentValue::DataTypeReference(Box::new(reference)));
        }
    } else if fields.contains_key("traitReference") {
        let nested = ctx.nested()?;
        let reference = trait_reference::from_data(&nested, obj)?;
        return Ok(ArgumentValue::TraitReference(Box::new(reference)));
    }
    Ok(ArgumentValue::Json(obj.clone()))
}

/// Read an optional string property.
pub(crate) fn optional_string(obj: &Map<String, Value>, field: &'static str) -> Result<Option<String>> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(Error::InvalidField {
            field,
            expected: "a string",
        }),
    }
}
