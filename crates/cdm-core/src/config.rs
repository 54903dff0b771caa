//! Configuration for document loading.
//!
//! Settings live in the `[parse]` table of a `cdm.toml` file:
//!
//! ```toml
//! [parse]
//! max_depth = 16
//! report_level = "error"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::status::StatusLevel;

/// Root configuration from cdm.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CdmConfig {
    /// Parser settings
    #[serde(default)]
    pub parse: ParseOptions,
}

impl CdmConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// [parse] section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParseOptions {
    /// How many inline definitions may nest inside one another
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Events below this level are dropped before reaching the sink
    #[serde(default = "default_report_level")]
    pub report_level: StatusLevel,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: default_max_depth(),
            report_level: default_report_level(),
        }
    }
}

impl ParseOptions {
    pub fn with_max_depth(max_depth: usize) -> Self {
        ParseOptions {
            max_depth,
            ..Default::default()
        }
    }
}

pub(crate) fn default_max_depth() -> usize {
    32
}

pub(crate) fn default_report_level() -> StatusLevel {
    StatusLevel::Warning
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CdmConfig::from_toml_str("").unwrap();
        assert_eq!(config.parse, ParseOptions::default());
        assert_eq!(config.parse.max_depth, 32);
        assert_eq!(config.parse.report_level, StatusLevel::Warning);
    }

    #[test]
    fn test_parse_section() {
        let config = CdmConfig::from_toml_str(
            r#"
            [parse]
            max_depth = 4
            report_level = "error"
            "#,
        )
        .unwrap();
        assert_eq!(config.parse.max_depth, 4);
        assert_eq!(config.parse.report_level, StatusLevel::Error);
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let result = CdmConfig::from_toml_str("[parse]\nreport_level = \"loud\"\n");
        assert!(matches!(result, Err(crate::error::Error::Toml(_))));
    }
}
