//! Parse Command
//!
//! Loads a data type document and reports what was found.

use super::load_document;
use cdm_core::model::{
    ArgumentValue, DataTypeDefinition, DataTypeReference, ReferenceTarget, TraitReference,
};
use cdm_core::status::{StatusEvent, StatusLevel};
use owo_colors::OwoColorize;
use serde::Serialize;
use starbase::AppResult;
use std::path::PathBuf;

/// Counts of the data type references found in a document
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceStats {
    pub references: usize,
    pub simple: usize,
    pub inline: usize,
    pub unset: usize,
    pub applied_traits: usize,
}

impl ReferenceStats {
    /// Walk every reference reachable from `definitions`
    pub fn collect(definitions: &[DataTypeDefinition]) -> Self {
        let mut stats = ReferenceStats::default();
        for definition in definitions {
            stats.visit_definition(definition);
        }
        stats
    }

    fn visit_definition(&mut self, definition: &DataTypeDefinition) {
        if let Some(extends) = &definition.extends_data_type {
            self.visit_reference(extends);
        }
        for exhibited in &definition.exhibits_traits {
            self.visit_trait(exhibited);
        }
    }

    fn visit_reference(&mut self, reference: &DataTypeReference) {
        self.references += 1;
        if reference.is_simple() {
            self.simple += 1;
        }
        match reference.target() {
            ReferenceTarget::Inline(definition) => {
                self.inline += 1;
                self.visit_definition(definition);
            }
            ReferenceTarget::Unset => self.unset += 1,
            ReferenceTarget::Named(_) => {}
        }
        self.applied_traits += reference.applied_traits().len();
        for applied in reference.applied_traits() {
            self.visit_trait(applied);
        }
    }

    fn visit_trait(&mut self, reference: &TraitReference) {
        for argument in &reference.arguments {
            match &argument.value {
                ArgumentValue::DataTypeReference(r) => self.visit_reference(r),
                ArgumentValue::TraitReference(t) => self.visit_trait(t),
                ArgumentValue::Json(_) => {}
            }
        }
    }
}

/// JSON output for parse command
#[derive(Serialize)]
struct ParseResult {
    success: bool,
    input: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    definitions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<ReferenceStats>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    events: Vec<StatusEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the parse command.
///
/// # Arguments
/// * `input` - Data type document to load
/// * `config` - Optional cdm.toml path
/// * `max_depth` - Overrides the configured nesting limit
/// * `json` - Output result as JSON
pub fn run_parse(
    input: PathBuf,
    config: Option<PathBuf>,
    max_depth: Option<usize>,
    json: bool,
) -> AppResult {
    let input_display = input.display().to_string();
    let loaded = match load_document(&input, config.as_deref(), max_depth) {
        Ok(loaded) => loaded,
        Err(e) => {
            if json {
                let result = ParseResult {
                    success: false,
                    input: input_display,
                    definitions: vec![],
                    stats: None,
                    events: vec![],
                    error: Some(format!("{:#}", e)),
                };
                println!("{}", serde_json::to_string_pretty(&result).unwrap_or_default());
            } else {
                eprintln!("{} {:#}", "error:".red().bold(), e);
            }
            return Ok(Some(1));
        }
    };

    let stats = ReferenceStats::collect(&loaded.document.definitions);
    let definitions: Vec<String> = loaded
        .document
        .definitions
        .iter()
        .map(|d| d.data_type_name.clone())
        .collect();

    if json {
        let result = ParseResult {
            success: true,
            input: input_display,
            definitions,
            stats: Some(stats),
            events: loaded.events,
            error: None,
        };
        println!("{}", serde_json::to_string_pretty(&result).unwrap_or_default());
        return Ok(None);
    }

    println!("{} {}", "Loaded".green().bold(), input_display);
    for name in &definitions {
        println!("  {}", name);
    }
    println!(
        "{} definitions, {} references ({} simple, {} inline, {} unset), {} applied traits",
        definitions.len(),
        stats.references,
        stats.simple,
        stats.inline,
        stats.unset,
        stats.applied_traits
    );
    for event in &loaded.events {
        match event.level {
            StatusLevel::Error => println!("{} {}", "error".red(), event),
            StatusLevel::Warning => println!("{} {}", "warning".yellow(), event),
            _ => println!("{}", event),
        }
    }

    Ok(None)
}
