//! Persistence of data type documents.
//!
//! A document is an object with optional `jsonSchemaSemanticVersion`,
//! `imports` and `definitions`. Only data type definitions (objects carrying
//! `dataTypeName`) are interpreted; other definitions are kept as written and
//! saved back at their original position. A data type definition that fails
//! to parse is reported and skipped so the remaining definitions still load.

use serde_json::{Map, Value};

use super::node::Node;
use super::{ToData, data_type, utils};
use crate::context::CorpusContext;
use crate::error::{Error, Result};
use crate::model::{CdmObjectType, DataTypeDocument, Import, RawDefinition};

const COMPONENT: &str = "DocumentPersistence";

/// Parse a document from JSON text.
pub fn from_str(ctx: &CorpusContext, content: &str) -> Result<DataTypeDocument> {
    let value: Value = serde_json::from_str(content)?;
    from_data(ctx, &value)
}

/// Parse a document object.
pub fn from_data(ctx: &CorpusContext, obj: &Value) -> Result<DataTypeDocument> {
    let Value::Object(fields) = obj else {
        return Err(Error::InvalidField {
            field: "document",
            expected: "an object",
        });
    };

    let mut document = DataTypeDocument {
        json_schema_semantic_version: utils::optional_string(fields, "jsonSchemaSemanticVersion")?,
        ..Default::default()
    };

    if let Node::List(items) = Node::classify(fields.get("imports")) {
        for item in items {
            match import_from_data(item) {
                Ok(import) => document.imports.push(import),
                Err(e) => ctx.log_error(COMPONENT, format!("Skipping import: {}", e), "from_data"),
            }
        }
    }

    if let Node::List(items) = Node::classify(fields.get("definitions")) {
        for (index, item) in items.iter().enumerate() {
            let definition = match item {
                Value::Object(definition) if definition.contains_key("dataTypeName") => definition,
                _ => {
                    ctx.log_info(
                        COMPONENT,
                        format!("Definition {} is not a data type definition; keeping it as is.", index),
                        "from_data",
                    );
                    document.other_definitions.push(RawDefinition {
                        position: index,
                        data: item.clone(),
                    });
                    continue;
                }
            };
            match data_type::from_data(ctx, definition) {
                Ok(parsed) => document.definitions.push(parsed),
                Err(e) => ctx.log_error(
                    COMPONENT,
                    format!("Could not load definition {}: {}", index, e),
                    "from_data",
                ),
            }
        }
    }

    Ok(document)
}

fn import_from_data(obj: &Value) -> Result<Import> {
    let Value::Object(fields) = obj else {
        return Err(Error::InvalidField {
            field: "imports",
            expected: "an array of objects",
        });
    };
    let corpus_path = utils::optional_string(fields, "corpusPath")?.ok_or(Error::MissingField {
        object_type: CdmObjectType::Import,
        field: "corpusPath",
    })?;
    Ok(Import {
        corpus_path,
        moniker: utils::optional_string(fields, "moniker")?,
    })
}

impl ToData for Import {
    fn to_data(&self) -> Value {
        let mut data = Map::new();
        data.insert("corpusPath".to_string(), Value::String(self.corpus_path.clone()));
        if let Some(moniker) = &self.moniker {
            data.insert("moniker".to_string(), Value::String(moniker.clone()));
        }
        Value::Object(data)
    }
}

impl ToData for DataTypeDocument {
    fn to_data(&self) -> Value {
        let mut data = Map::new();
        if let Some(version) = &self.json_schema_semantic_version {
            data.insert(
                "jsonSchemaSemanticVersion".to_string(),
                Value::String(version.clone()),
            );
        }
        if !self.imports.is_empty() {
            data.insert(
                "imports".to_string(),
                Value::Array(self.imports.iter().map(ToData::to_data).collect()),
            );
        }
        let mut definitions: Vec<Value> = self.definitions.iter().map(ToData::to_data).collect();
        let mut others: Vec<&RawDefinition> = self.other_definitions.iter().collect();
        others.sort_by_key(|raw| raw.position);
        for raw in others {
            let position = raw.position.min(definitions.len());
            definitions.insert(position, raw.data.clone());
        }
        data.insert("definitions".to_string(), Value::Array(definitions));
        Value::Object(data)
    }
}
