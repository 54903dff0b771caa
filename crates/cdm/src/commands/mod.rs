pub mod parse;
pub mod roundtrip;

pub use parse::*;
pub use roundtrip::*;

use anyhow::Context;
use cdm_core::config::CdmConfig;
use cdm_core::context::{Corpus, CorpusContext};
use cdm_core::model::DataTypeDocument;
use cdm_core::persistence::document;
use cdm_core::status::{CollectingSink, StatusEvent};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Config file picked up from the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "cdm.toml";

/// A document together with the status events raised while loading it.
///
/// The events are not logged through `tracing`; each command reports them itself.
#[derive(Debug)]
pub struct LoadedDocument {
    pub document: DataTypeDocument,
    pub events: Vec<StatusEvent>,
}

/// Resolve the configuration: explicit file, else `cdm.toml` if present, else defaults.
pub fn load_config(config: Option<&Path>) -> anyhow::Result<CdmConfig> {
    let path = match config {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.exists().then_some(default)
        }
    };
    match path {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path.display());
            CdmConfig::load(&path)
                .with_context(|| format!("Failed to read configuration {}", path.display()))
        }
        None => Ok(CdmConfig::default()),
    }
}

/// Load a data type document from disk.
pub fn load_document(
    input: &Path,
    config: Option<&Path>,
    max_depth: Option<usize>,
) -> anyhow::Result<LoadedDocument> {
    let mut config = load_config(config)?;
    if let Some(max_depth) = max_depth {
        config.parse.max_depth = max_depth;
    }

    let content = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;

    // events are returned to the command, which prints them once
    let sink = Arc::new(CollectingSink::new());
    let ctx = CorpusContext::new(Corpus::new(config.parse, sink.clone()));
    let document = document::from_str(&ctx, &content)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    tracing::debug!(
        definitions = document.definitions.len(),
        "Loaded {}",
        input.display()
    );

    Ok(LoadedDocument {
        document,
        events: sink.drain(),
    })
}
