//! Catalog types

use crate::error::Result;
use crate::schema::ObjectSchema;
use crate::types::{Inclusion, ReplicationMethod};
use serde::{Deserialize, Serialize};

// ============================================================================
// Metadata
// ============================================================================

/// Metadata values attached to a breadcrumb
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EntryMetadata {
    /// Field inclusion marker (field-level entries)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inclusion: Option<Inclusion>,

    /// Stream selection flag (stream-level entry)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
}

/// A breadcrumb and the metadata that applies to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataEntry {
    /// `[]` for the stream itself, `["properties", <field>]` for a field
    pub breadcrumb: Vec<String>,
    pub metadata: EntryMetadata,
}

impl MetadataEntry {
    /// Field-level entry marking the field as always extracted
    pub fn automatic_field(name: impl Into<String>) -> Self {
        Self {
            breadcrumb: vec!["properties".to_string(), name.into()],
            metadata: EntryMetadata {
                inclusion: Some(Inclusion::Automatic),
                selected: None,
            },
        }
    }

    /// Stream-level entry marking the stream as selected
    pub fn stream_selected() -> Self {
        Self {
            breadcrumb: Vec::new(),
            metadata: EntryMetadata {
                inclusion: None,
                selected: Some(true),
            },
        }
    }

    /// Check whether this entry applies to the stream itself
    pub fn is_stream_level(&self) -> bool {
        self.breadcrumb.is_empty()
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// One discovered stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Stream identifier (same as the stream name)
    pub tap_stream_id: String,

    /// Stream name (the entity set name)
    pub stream: String,

    /// Primary key fields
    #[serde(default)]
    pub key_properties: Vec<String>,

    /// Record schema
    pub schema: ObjectSchema,

    /// Field and stream metadata
    #[serde(default)]
    pub metadata: Vec<MetadataEntry>,

    /// How the stream is extracted
    pub replication_method: ReplicationMethod,
}

impl CatalogEntry {
    /// Check whether the stream-level metadata marks this stream selected
    pub fn is_selected(&self) -> bool {
        self.metadata
            .iter()
            .any(|m| m.is_stream_level() && m.metadata.selected == Some(true))
    }
}

/// Discovered catalog
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Streams in service order
    pub streams: Vec<CatalogEntry>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a stream by name
    pub fn get_stream(&self, name: &str) -> Option<&CatalogEntry> {
        self.streams.iter().find(|s| s.stream == name)
    }

    /// Stream names in catalog order
    pub fn stream_names(&self) -> Vec<&str> {
        self.streams.iter().map(|s| s.stream.as_str()).collect()
    }

    /// Number of streams
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    /// Check if the catalog has no streams
    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// Convert to JSON value
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Convert to pretty JSON string
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a catalog from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
