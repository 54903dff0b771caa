//! Persistence of data type references.
//!
//! A data type reference is written either as a bare identifier:
//!
//! ```json
//! "int64"
//! ```
//!
//! or in expanded form, with a name or an inline definition and an ordered
//! list of applied traits:
//!
//! ```json
//! { "dataTypeReference": { "dataTypeName": "year", "extendsDataType": "integer" },
//!   "appliedTraits": ["means.calendar.year"] }
//! ```
//!
//! A malformed inline definition does not fail the load: it is reported once
//! through the context and the reference keeps an unset target.

use serde_json::{Map, Value};

use super::node::Node;
use super::object_reference;
use super::{data_type, utils};
use crate::context::CorpusContext;
use crate::error::Result;
use crate::model::{CdmObjectType, DataTypeDefinition, DataTypeReference, ReferenceTarget};

const COMPONENT: &str = "DataTypeReferencePersistence";
const REFERENCE_KEY: &str = "dataTypeReference";

/// Parse a data type reference.
///
/// Returns `Ok(None)` when no node was supplied. Errors raised by the trait
/// parser are returned unchanged.
pub fn from_data(ctx: &CorpusContext, obj: Option<&Value>) -> Result<Option<DataTypeReference>> {
    let node = Node::classify(obj);
    let corpus = ctx.corpus();

    match node {
        Node::Absent => Ok(None),
        Node::Scalar(name) => Ok(Some(corpus.make_ref(
            CdmObjectType::DataTypeRef,
            ReferenceTarget::named(name),
            true,
        ))),
        expanded => {
            let target = resolve_target(ctx, expanded.field(REFERENCE_KEY));
            let applied_traits =
                utils::create_trait_reference_list(ctx, expanded.field("appliedTraits"))?;

            let mut reference = corpus.make_ref(CdmObjectType::DataTypeRef, target, false);
            reference.applied_traits.extend_ordered(applied_traits);
            Ok(Some(reference))
        }
    }
}

/// Serialize a data type reference back to its simple or expanded form.
pub fn to_data(instance: &DataTypeReference) -> Value {
    object_reference::to_data(instance)
}

fn resolve_target(ctx: &CorpusContext, node: Node<'_>) -> ReferenceTarget<DataTypeDefinition> {
    match node {
        Node::Scalar(name) => ReferenceTarget::named(name),
        Node::Composite(fields) => match parse_nested_definition(ctx, fields) {
            Ok(definition) => ReferenceTarget::inline(definition),
            Err(reason) => {
                report_conversion_error(ctx, &reason.to_string());
                ReferenceTarget::Unset
            }
        },
        other => {
            let reason = format!(
                "'{}' must be a name or a data type definition, found {}",
                REFERENCE_KEY,
                other.kind()
            );
            report_conversion_error(ctx, &reason);
            ReferenceTarget::Unset
        }
    }
}

fn parse_nested_definition(
    ctx: &CorpusContext,
    fields: &Map<String, Value>,
) -> Result<DataTypeDefinition> {
    let nested = ctx.nested()?;
    data_type::from_data(&nested, fields)
}

fn report_conversion_error(ctx: &CorpusContext, reason: &str) {
    ctx.log_error(
        COMPONENT,
        format!(
            "There was an error while trying to convert from JSON to DataTypeRef. Reason: '{}'",
            reason
        ),
        "from_data",
    );
}
