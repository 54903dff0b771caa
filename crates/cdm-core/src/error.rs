//! Error types for CDM persistence
//!
//! Errors raised while converting between JSON documents and the object model.
//! Failures inside a nested data type definition are recovered by the reference
//! parser and surface as status events instead (see [`crate::status`]).

use thiserror::Error;

use crate::model::CdmObjectType;

/// Result type alias for CDM operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CDM persistence operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A required property was missing from an object node
    #[error("{object_type} is missing required property '{field}'")]
    MissingField {
        object_type: CdmObjectType,
        field: &'static str,
    },

    /// A property was present but had the wrong JSON shape
    #[error("property '{field}' must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    /// A trait node could not be interpreted as a trait reference
    #[error("Invalid trait reference: {0}")]
    InvalidTraitNode(String),

    /// Nesting of inline definitions went deeper than the configured limit
    #[error("nesting depth exceeds the limit of {limit}")]
    RecursionLimit { limit: usize },
}
