//! CDM folder persistence.
//!
//! Converts between JSON documents in the CDM folder format and the object
//! model. Each object kind has a module with a `from_data` parser; the
//! reverse direction goes through [`ToData`].

pub mod data_type;
pub mod data_type_reference;
pub mod document;
pub mod node;
pub mod object_reference;
pub mod trait_reference;
pub mod utils;

pub use node::Node;

use serde_json::Value;

/// Conversion of a model object back into its JSON form.
pub trait ToData {
    fn to_data(&self) -> Value;
}
