//! Persistence of data type definitions.

use serde_json::{Map, Value};

use super::node::Node;
use super::{ToData, data_type_reference, utils};
use crate::context::CorpusContext;
use crate::error::{Error, Result};
use crate::model::{CdmCollection, CdmObjectType, DataTypeDefinition};

/// Parse a data type definition object.
///
/// `dataTypeName` is required. `extendsDataType` is parsed as a data type
/// reference with the given context, so inline definitions inside it nest
/// one level deeper.
pub fn from_data(ctx: &CorpusContext, obj: &Map<String, Value>) -> Result<DataTypeDefinition> {
    let data_type_name = match obj.get("dataTypeName") {
        Some(Value::String(name)) => name.clone(),
        None | Some(Value::Null) => {
            return Err(Error::MissingField {
                object_type: CdmObjectType::DataTypeDef,
                field: "dataTypeName",
            });
        }
        Some(_) => {
            return Err(Error::InvalidField {
                field: "dataTypeName",
                expected: "a string",
            });
        }
    };

    let explanation = utils::optional_string(obj, "explanation")?;
    let extends_data_type = data_type_reference::from_data(ctx, obj.get("extendsDataType"))?;

    let mut exhibits_traits = CdmCollection::new();
    exhibits_traits.extend_ordered(utils::create_trait_reference_list(
        ctx,
        Node::classify(obj.get("exhibitsTraits")),
    )?);

    Ok(DataTypeDefinition {
        data_type_name,
        extends_data_type,
        exhibits_traits,
        explanation,
    })
}

impl ToData for DataTypeDefinition {
    fn to_data(&self) -> Value {
        let mut data = Map::new();
        if let Some(explanation) = &self.explanation {
            data.insert("explanation".to_string(), Value::String(explanation.clone()));
        }
        data.insert(
            "dataTypeName".to_string(),
            Value::String(self.data_type_name.clone()),
        );
        if let Some(extends) = &self.extends_data_type {
            data.insert("extendsDataType".to_string(), extends.to_data());
        }
        if !self.exhibits_traits.is_empty() {
            data.insert(
                "exhibitsTraits".to_string(),
                Value::Array(self.exhibits_traits.iter().map(ToData::to_data).collect()),
            );
        }
        Value::Object(data)
    }
}
