//! Roundtrip Command
//!
//! Loads a data type document and saves it again in normalized form.

use super::load_document;
use anyhow::Context;
use cdm_core::ToData;
use cdm_core::status::StatusEvent;
use owo_colors::OwoColorize;
use starbase::AppResult;
use std::path::{Path, PathBuf};

/// A re-serialized document and the events raised while loading it
#[derive(Debug)]
pub struct RoundtripOutput {
    pub content: String,
    pub events: Vec<StatusEvent>,
}

/// Load `input` and re-serialize it as pretty JSON.
///
/// Data type definitions are normalized; definitions of other kinds are
/// written back unchanged.
pub fn roundtrip_document(
    input: &Path,
    config: Option<&Path>,
    max_depth: Option<usize>,
) -> anyhow::Result<RoundtripOutput> {
    let loaded = load_document(input, config, max_depth)?;
    let content = serde_json::to_string_pretty(&loaded.document.to_data())
        .context("Failed to serialize document")?;
    Ok(RoundtripOutput {
        content,
        events: loaded.events,
    })
}

/// Run the roundtrip command.
///
/// Writes to `output` when given, otherwise to stdout.
pub fn run_roundtrip(
    input: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    max_depth: Option<usize>,
) -> AppResult {
    let RoundtripOutput { content, events } =
        match roundtrip_document(&input, config.as_deref(), max_depth) {
            Ok(output) => output,
            Err(e) => {
                eprintln!("{} {:#}", "error:".red().bold(), e);
                return Ok(Some(1));
            }
        };
    for event in &events {
        eprintln!("{}", event);
    }

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, content) {
                eprintln!("Failed to write output to {:?}: {}", path, e);
                return Ok(Some(1));
            }
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{}", content),
    }

    Ok(None)
}
