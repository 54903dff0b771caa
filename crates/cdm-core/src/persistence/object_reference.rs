//! Serialization shared by every reference kind.

use serde_json::{Map, Value};

use super::ToData;
use crate::model::{ObjectReference, ReferenceTarget};

/// Serialize a reference.
///
/// A simple named reference becomes a bare string. Anything else becomes an
/// object keyed by the kind's reference property, with `appliedTraits` only
/// when there are traits. An unset target omits the reference property.
pub fn to_data<D: ToData>(instance: &ObjectReference<D>) -> Value {
    if instance.is_simple() {
        if let Some(name) = instance.named_reference() {
            return Value::String(name.to_string());
        }
    }

    let mut data = Map::new();
    if let Some(key) = instance.object_type().reference_key() {
        match instance.target() {
            ReferenceTarget::Named(name) => {
                data.insert(key.to_string(), Value::String(name.clone()));
            }
            ReferenceTarget::Inline(definition) => {
                data.insert(key.to_string(), definition.to_data());
            }
            ReferenceTarget::Unset => {}
        }
    }
    if !instance.applied_traits().is_empty() {
        let traits = instance.applied_traits().iter().map(ToData::to_data).collect();
        data.insert("appliedTraits".to_string(), Value::Array(traits));
    }
    Value::Object(data)
}

impl<D: ToData> ToData for ObjectReference<D> {
    fn to_data(&self) -> Value {
        to_data(self)
    }
}
