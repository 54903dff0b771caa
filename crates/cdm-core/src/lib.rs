//! CDM object model and CDM folder persistence.
//!
//! The central operation is loading data type references, which may be
//! written as a bare name or as an object carrying an inline definition and
//! applied traits:
//!
//! ```rust
//! use cdm_core::context::CorpusContext;
//! use cdm_core::persistence::data_type_reference;
//! use serde_json::json;
//!
//! let ctx = CorpusContext::default();
//! let node = json!({ "dataTypeReference": "string", "appliedTraits": ["means.identity"] });
//! let reference = data_type_reference::from_data(&ctx, Some(&node)).unwrap().unwrap();
//! assert_eq!(reference.named_reference(), Some("string"));
//! assert_eq!(data_type_reference::to_data(&reference), node);
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod model;
pub mod persistence;
pub mod status;

pub use config::{CdmConfig, ParseOptions};
pub use context::{Corpus, CorpusContext};
pub use error::{Error, Result};
pub use persistence::ToData;
