//! Data type definitions.

use super::collection::CdmCollection;
use super::reference::DataTypeReference;
use super::trait_reference::TraitReference;

/// A data type definition.
///
/// Appears at the top level of a data type document or inline in place of a
/// name inside a `dataTypeReference`.
///
/// Example:
/// ```json
/// { "dataTypeName": "currencyCode", "extendsDataType": "string",
///   "exhibitsTraits": ["means.currency.code"] }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DataTypeDefinition {
    pub data_type_name: String,
    pub extends_data_type: Option<DataTypeReference>,
    pub exhibits_traits: CdmCollection<TraitReference>,
    pub explanation: Option<String>,
}

impl DataTypeDefinition {
    /// Create a definition with only a name
    pub fn new(data_type_name: impl Into<String>) -> Self {
        DataTypeDefinition {
            data_type_name: data_type_name.into(),
            extends_data_type: None,
            exhibits_traits: CdmCollection::new(),
            explanation: None,
        }
    }

    /// Names of the data types this definition extends, nearest first.
    ///
    /// Walks inline `extendsDataType` definitions and stops at the first named
    /// target (which needs corpus resolution) or at an unset one.
    pub fn base_chain(&self) -> Vec<&str> {
        let mut chain = vec![];
        let mut current = self.extends_data_type.as_ref();
        while let Some(reference) = current {
            if let Some(name) = reference.named_reference() {
                chain.push(name);
                break;
            }
            match reference.explicit_reference() {
                Some(definition) => {
                    chain.push(definition.data_type_name.as_str());
                    current = definition.extends_data_type.as_ref();
                }
                None => break,
            }
        }
        chain
    }
}
