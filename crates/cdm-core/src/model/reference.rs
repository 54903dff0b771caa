//! Object references.
//!
//! A reference points at another object either by name or by carrying an
//! inline definition of it. References written as bare strings in a document
//! are *simple*; those written as objects are *expanded* and may carry traits.

use super::collection::CdmCollection;
use super::data_type::DataTypeDefinition;
use super::object_type::CdmObjectType;
use super::trait_reference::TraitReference;

/// What a reference points at.
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceTarget<D> {
    /// Reference by identifier, e.g. `"int64"`
    Named(String),
    /// Inline definition owned by the reference
    Inline(Box<D>),
    /// The target could not be parsed; the reference is otherwise valid
    Unset,
}

impl<D> ReferenceTarget<D> {
    pub fn named(name: impl Into<String>) -> Self {
        ReferenceTarget::Named(name.into())
    }

    pub fn inline(definition: D) -> Self {
        ReferenceTarget::Inline(Box::new(definition))
    }

    /// The identifier, if this is a named target
    pub fn as_named(&self) -> Option<&str> {
        match self {
            ReferenceTarget::Named(name) => Some(name),
            _ => None,
        }
    }

    /// The inline definition, if there is one
    pub fn as_inline(&self) -> Option<&D> {
        match self {
            ReferenceTarget::Inline(definition) => Some(definition),
            _ => None,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, ReferenceTarget::Unset)
    }
}

/// A reference to an object of kind `D`.
///
/// Built by [`crate::context::Corpus::make_ref`], which stamps the kind tag.
/// A simple reference never carries applied traits.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectReference<D> {
    pub(crate) object_type: CdmObjectType,
    pub(crate) target: ReferenceTarget<D>,
    pub(crate) simple_named_reference: bool,
    pub(crate) applied_traits: CdmCollection<TraitReference>,
}

/// A reference to a data type, by name or by inline definition.
pub type DataTypeReference = ObjectReference<DataTypeDefinition>;

impl<D> ObjectReference<D> {
    pub fn object_type(&self) -> CdmObjectType {
        self.object_type
    }

    pub fn target(&self) -> &ReferenceTarget<D> {
        &self.target
    }

    /// The referenced identifier, for named targets
    pub fn named_reference(&self) -> Option<&str> {
        self.target.as_named()
    }

    /// The inline definition, for expanded references that carry one
    pub fn explicit_reference(&self) -> Option<&D> {
        self.target.as_inline()
    }

    /// True when the source node was a bare scalar identifier
    pub fn is_simple(&self) -> bool {
        self.simple_named_reference
    }

    pub fn applied_traits(&self) -> &CdmCollection<TraitReference> {
        &self.applied_traits
    }

    /// Traits can only be attached to expanded references; a simple reference
    /// is promoted to the expanded form when traits are added.
    pub fn applied_traits_mut(&mut self) -> &mut CdmCollection<TraitReference> {
        self.simple_named_reference = false;
        &mut self.applied_traits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_accessors() {
        let named: ReferenceTarget<DataTypeDefinition> = ReferenceTarget::named("int64");
        assert_eq!(named.as_named(), Some("int64"));
        assert!(named.as_inline().is_none());
        assert!(ReferenceTarget::<DataTypeDefinition>::Unset.is_unset());
    }

    #[test]
    fn test_adding_traits_promotes_simple_reference() {
        let mut reference = DataTypeReference {
            object_type: CdmObjectType::DataTypeRef,
            target: ReferenceTarget::named("string"),
            simple_named_reference: true,
            applied_traits: CdmCollection::new(),
        };
        reference
            .applied_traits_mut()
            .push(TraitReference::simple("means.identity"));
        assert!(!reference.is_simple());
        assert_eq!(reference.applied_traits().len(), 1);
    }
}
