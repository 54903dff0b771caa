//! Tests for the command implementations behind the CLI.

use cdm::commands::{ReferenceStats, load_config, load_document, roundtrip_document, run_parse};
use cdm_core::status::StatusLevel;
use serde_json::{Value, json};
use std::path::PathBuf;
use tempfile::TempDir;

fn write_document(dir: &TempDir, content: &Value) -> PathBuf {
    let path = dir.path().join("dataTypes.cdm.json");
    std::fs::write(&path, serde_json::to_string_pretty(content).unwrap()).unwrap();
    path
}

fn sample_document() -> Value {
    json!({
        "jsonSchemaSemanticVersion": "1.0.0",
        "definitions": [
            { "dataTypeName": "year", "extendsDataType": "integer" },
            {
                "dataTypeName": "fiscalYear",
                "extendsDataType": {
                    "dataTypeReference": { "dataTypeName": "calendarYear", "extendsDataType": "year" },
                    "appliedTraits": ["means.calendar.fiscal"]
                }
            },
            {
                "dataTypeName": "lost",
                "extendsDataType": { "dataTypeReference": { "explanation": "no name" } }
            }
        ]
    })
}

#[test]
fn test_load_document_collects_events() {
    let dir = TempDir::new().unwrap();
    let input = write_document(&dir, &sample_document());

    let loaded = load_document(&input, None, None).unwrap();

    assert_eq!(loaded.document.definitions.len(), 3);
    assert_eq!(loaded.events.len(), 1);
    assert_eq!(loaded.events[0].level, StatusLevel::Error);
}

#[test]
fn test_reference_stats() {
    let dir = TempDir::new().unwrap();
    let input = write_document(&dir, &sample_document());
    let loaded = load_document(&input, None, None).unwrap();

    let stats = ReferenceStats::collect(&loaded.document.definitions);

    assert_eq!(
        stats,
        ReferenceStats {
            references: 4,
            simple: 2,
            inline: 1,
            unset: 1,
            applied_traits: 1,
        }
    );
}

#[test]
fn test_config_file_limits_depth() {
    let dir = TempDir::new().unwrap();
    let input = write_document(&dir, &sample_document());
    let config = dir.path().join("cdm.toml");
    std::fs::write(&config, "[parse]\nmax_depth = 0\nreport_level = \"error\"\n").unwrap();

    let loaded = load_document(&input, Some(&config), None).unwrap();
    // the inline definition in fiscalYear is now too deep as well
    assert_eq!(loaded.events.len(), 2);

    let loaded = load_document(&input, Some(&config), Some(4)).unwrap();
    assert_eq!(loaded.events.len(), 1);
}

#[test]
fn test_bad_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("cdm.toml");
    std::fs::write(&config, "[parse]\nmax_depth = \"deep\"\n").unwrap();
    assert!(load_config(Some(&config)).is_err());
}

#[test]
fn test_roundtrip_document() {
    let dir = TempDir::new().unwrap();
    let document = json!({
        "jsonSchemaSemanticVersion": "1.0.0",
        "definitions": [
            {
                "dataTypeName": "fiscalYear",
                "extendsDataType": {
                    "dataTypeReference": { "dataTypeName": "calendarYear", "extendsDataType": "year" },
                    "appliedTraits": ["means.calendar.fiscal"]
                }
            }
        ]
    });
    let input = write_document(&dir, &document);

    let output = roundtrip_document(&input, None, None).unwrap();
    let saved: Value = serde_json::from_str(&output.content).unwrap();
    assert_eq!(saved, document);
    assert!(output.events.is_empty());
}

#[test]
fn test_roundtrip_reports_each_event_once() {
    let dir = TempDir::new().unwrap();
    let input = write_document(&dir, &sample_document());

    let output = roundtrip_document(&input, None, None).unwrap();

    assert_eq!(output.events.len(), 1);
    assert_eq!(output.events[0].level, StatusLevel::Error);
    assert_eq!(output.events[0].component, "DataTypeReferencePersistence");
}

#[test]
fn test_roundtrip_keeps_other_definitions() {
    let dir = TempDir::new().unwrap();
    let document = json!({
        "definitions": [
            { "traitName": "means.calendar.fiscal" },
            { "dataTypeName": "year", "extendsDataType": "integer" },
            { "entityName": "Account", "hasAttributes": ["accountId"] }
        ]
    });
    let input = write_document(&dir, &document);

    let output = roundtrip_document(&input, None, None).unwrap();
    let saved: Value = serde_json::from_str(&output.content).unwrap();
    assert_eq!(saved, document);
}

#[test]
fn test_missing_input_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.cdm.json");
    let code = run_parse(missing, None, None, true).unwrap();
    assert_eq!(code, Some(1));
}
