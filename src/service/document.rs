//! In-memory service document and file loaders

use super::edmx::parse_csdl;
use super::types::Entity;
use super::Service;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// A service whose entity metadata is fully held in memory
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ServiceDocument {
    /// Entities in service order
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl ServiceDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from entities
    pub fn from_entities(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    /// Append an entity
    #[must_use]
    pub fn with_entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    /// Look up the first entity with this name
    pub fn get_entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }
}

impl Service for ServiceDocument {
    fn entities(&self) -> &[Entity] {
        &self.entities
    }
}

/// Source format of a metadata document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataFormat {
    /// `{ "entities": [...] }` as JSON
    Json,
    /// Same shape as JSON, written in YAML
    Yaml,
    /// OData CSDL (`$metadata`) XML
    Csdl,
}

impl MetadataFormat {
    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "xml" | "edmx" => Some(Self::Csdl),
            _ => None,
        }
    }
}

/// Load a service document from a file, choosing the parser by extension
pub fn load_service<P: AsRef<Path>>(path: P) -> Result<ServiceDocument> {
    let path = path.as_ref();
    let format = MetadataFormat::from_path(path).ok_or_else(|| Error::UnsupportedFormat {
        path: path.display().to_string(),
    })?;

    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    let document = load_service_from_str(&content, format)?;
    debug!(
        path = %path.display(),
        entities = document.entities.len(),
        "loaded service metadata"
    );
    Ok(document)
}

/// Parse a service document from a string in the given format
pub fn load_service_from_str(content: &str, format: MetadataFormat) -> Result<ServiceDocument> {
    match format {
        MetadataFormat::Json => Ok(serde_json::from_str(content)?),
        MetadataFormat::Yaml => Ok(serde_yaml::from_str(content)?),
        MetadataFormat::Csdl => parse_csdl(content),
    }
}
