//! Service metadata types

use serde::{Deserialize, Serialize};

/// One field of an entity as described by the service
///
/// Every attribute is optional here because the service owns this shape;
/// the schema translator rejects descriptors with missing attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Field name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Foreign type tag (e.g. "Edm.Int32")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_tag: Option<String>,

    /// Whether the field is part of the entity key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_primary_key: Option<bool>,
}

impl PropertyDescriptor {
    /// Create a fully-populated descriptor
    pub fn new(name: impl Into<String>, type_tag: impl Into<String>, is_primary_key: bool) -> Self {
        Self {
            name: Some(name.into()),
            type_tag: Some(type_tag.into()),
            is_primary_key: Some(is_primary_key),
        }
    }

    /// Create a non-key descriptor
    pub fn field(name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self::new(name, type_tag, false)
    }

    /// Create a key descriptor
    pub fn key(name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self::new(name, type_tag, true)
    }
}

/// Foreign schema of one entity type
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntitySchema {
    /// Ordered property descriptors
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
}

impl EntitySchema {
    /// Create a schema from property descriptors
    pub fn new(properties: Vec<PropertyDescriptor>) -> Self {
        Self { properties }
    }

    /// Check whether a property with this name is declared
    pub fn has_property(&self, name: &str) -> bool {
        self.properties
            .iter()
            .any(|p| p.name.as_deref() == Some(name))
    }
}

/// An extractable entity exposed by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity (set) name, used as the stream name
    pub name: String,

    /// Foreign schema; absent when the service could not describe the entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<EntitySchema>,
}

impl Entity {
    /// Create an entity with a schema
    pub fn new(name: impl Into<String>, properties: Vec<PropertyDescriptor>) -> Self {
        Self {
            name: name.into(),
            schema: Some(EntitySchema::new(properties)),
        }
    }

    /// Create an entity whose metadata container is missing
    pub fn without_schema(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
        }
    }
}
