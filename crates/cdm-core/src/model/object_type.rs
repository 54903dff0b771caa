//! Object kind tags.
//!
//! Every object in the model carries one of these tags. The numeric codes are
//! stable and match the codes used by other CDM object model implementations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a CDM object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum CdmObjectType {
    Error = 1,
    Import = 2,
    ArgumentDef = 3,
    ParameterDef = 4,
    TraitDef = 5,
    TraitRef = 6,
    PurposeDef = 7,
    PurposeRef = 8,
    DataTypeDef = 9,
    DataTypeRef = 10,
    AttributeRef = 11,
    TypeAttributeDef = 12,
    EntityAttributeDef = 13,
    AttributeGroupDef = 14,
    AttributeGroupRef = 15,
    ConstantEntityDef = 16,
    EntityDef = 17,
    EntityRef = 18,
    DocumentDef = 19,
    ManifestDef = 20,
    FolderDef = 21,
    AttributeContextDef = 22,
    AttributeContextRef = 23,
    ManifestDeclarationDef = 24,
    ReferencedEntityDeclarationDef = 25,
    DataPartitionDef = 26,
    DataPartitionPatternDef = 27,
    LocalEntityDeclarationDef = 28,
    AttributeResolutionGuidanceDef = 29,
    E2ERelationshipDef = 30,
}

impl CdmObjectType {
    const ALL: [CdmObjectType; 30] = [
        CdmObjectType::Error,
        CdmObjectType::Import,
        CdmObjectType::ArgumentDef,
        CdmObjectType::ParameterDef,
        CdmObjectType::TraitDef,
        CdmObjectType::TraitRef,
        CdmObjectType::PurposeDef,
        CdmObjectType::PurposeRef,
        CdmObjectType::DataTypeDef,
        CdmObjectType::DataTypeRef,
        CdmObjectType::AttributeRef,
        CdmObjectType::TypeAttributeDef,
        CdmObjectType::EntityAttributeDef,
        CdmObjectType::AttributeGroupDef,
        CdmObjectType::AttributeGroupRef,
        CdmObjectType::ConstantEntityDef,
        CdmObjectType::EntityDef,
        CdmObjectType::EntityRef,
        CdmObjectType::DocumentDef,
        CdmObjectType::ManifestDef,
        CdmObjectType::FolderDef,
        CdmObjectType::AttributeContextDef,
        CdmObjectType::AttributeContextRef,
        CdmObjectType::ManifestDeclarationDef,
        CdmObjectType::ReferencedEntityDeclarationDef,
        CdmObjectType::DataPartitionDef,
        CdmObjectType::DataPartitionPatternDef,
        CdmObjectType::LocalEntityDeclarationDef,
        CdmObjectType::AttributeResolutionGuidanceDef,
        CdmObjectType::E2ERelationshipDef,
    ];

    /// Numeric code of this kind
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Look up a kind by its numeric code
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.code() == code)
    }

    /// Whether this kind is a reference to another object
    pub fn is_reference(self) -> bool {
        self.reference_key().is_some()
    }

    /// JSON property that holds the referenced name or inline definition
    /// in the expanded form of a reference of this kind.
    pub fn reference_key(self) -> Option<&'static str> {
        match self {
            CdmObjectType::TraitRef => Some("traitReference"),
            CdmObjectType::PurposeRef => Some("purposeReference"),
            CdmObjectType::DataTypeRef => Some("dataTypeReference"),
            CdmObjectType::AttributeGroupRef => Some("attributeGroupReference"),
            CdmObjectType::EntityRef => Some("entityReference"),
            CdmObjectType::AttributeContextRef => Some("attributeContextReference"),
            _ => None,
        }
    }
}

impl fmt::Display for CdmObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
