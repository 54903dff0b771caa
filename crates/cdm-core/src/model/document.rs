//! Documents holding data type definitions.

use serde_json::Value;

use super::data_type::DataTypeDefinition;

/// An import of another document.
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub corpus_path: String,
    pub moniker: Option<String>,
}

/// A definition of another kind (trait, entity, ...), kept as written.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDefinition {
    /// Index in the document's `definitions` array
    pub position: usize,
    pub data: Value,
}

/// A CDM folder document whose definitions are data types.
///
/// Definitions of other kinds are not interpreted but are carried in
/// `other_definitions` so that saving the document keeps them in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataTypeDocument {
    pub json_schema_semantic_version: Option<String>,
    pub imports: Vec<Import>,
    pub definitions: Vec<DataTypeDefinition>,
    pub other_definitions: Vec<RawDefinition>,
}

impl DataTypeDocument {
    /// Find a definition by name
    pub fn definition(&self, name: &str) -> Option<&DataTypeDefinition> {
        self.definitions.iter().find(|d| d.data_type_name == name)
    }
}
