//! Schema types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JSON Schema type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Null,
}

impl std::fmt::Display for JsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonType::String => write!(f, "string"),
            JsonType::Number => write!(f, "number"),
            JsonType::Integer => write!(f, "integer"),
            JsonType::Boolean => write!(f, "boolean"),
            JsonType::Object => write!(f, "object"),
            JsonType::Null => write!(f, "null"),
        }
    }
}

/// Format hint attached to string fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaFormat {
    #[serde(rename = "date-time")]
    DateTime,
}

/// Schema of a single field
///
/// Fields are always nullable: `type` is `["null", <primary>]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Property type(s), null first
    #[serde(rename = "type")]
    pub json_type: Vec<JsonType>,

    /// Format hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<SchemaFormat>,
}

impl FieldSchema {
    /// Create a nullable field of the given primary type
    pub fn nullable(json_type: JsonType) -> Self {
        Self {
            json_type: vec![JsonType::Null, json_type],
            format: None,
        }
    }

    /// Set format hint
    #[must_use]
    pub fn with_format(mut self, format: SchemaFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Get the primary (non-null) type
    pub fn primary_type(&self) -> Option<JsonType> {
        self.json_type.iter().copied().find(|t| *t != JsonType::Null)
    }

    /// Check if nullable
    pub fn is_nullable(&self) -> bool {
        self.json_type.contains(&JsonType::Null)
    }
}

/// Object schema describing one stream's records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSchema {
    /// Schema type (always "object")
    #[serde(rename = "type")]
    pub json_type: JsonType,

    /// Undeclared fields in a record are a schema violation when false
    #[serde(rename = "additionalProperties")]
    pub additional_properties: bool,

    /// Field schemas by name
    #[serde(default)]
    pub properties: BTreeMap<String, FieldSchema>,
}

impl Default for ObjectSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectSchema {
    /// Create a new strict, empty object schema
    pub fn new() -> Self {
        Self {
            json_type: JsonType::Object,
            additional_properties: false,
            properties: BTreeMap::new(),
        }
    }

    /// Add a property
    pub fn add_property(&mut self, name: &str, property: FieldSchema) {
        self.properties.insert(name.to_string(), property);
    }

    /// Get a property
    pub fn get_property(&self, name: &str) -> Option<&FieldSchema> {
        self.properties.get(name)
    }

    /// Check whether a property is declared
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
