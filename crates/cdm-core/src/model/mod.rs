//! CDM object model.
//!
//! Owned, strongly typed objects produced by the persistence layer.

pub mod collection;
pub mod data_type;
pub mod document;
pub mod object_type;
pub mod reference;
pub mod trait_reference;

pub use collection::CdmCollection;
pub use data_type::DataTypeDefinition;
pub use document::{DataTypeDocument, Import, RawDefinition};
pub use object_type::CdmObjectType;
pub use reference::{DataTypeReference, ObjectReference, ReferenceTarget};
pub use trait_reference::{Argument, ArgumentValue, TraitReference};
