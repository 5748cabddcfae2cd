//! Service collaborator module
//!
//! The discovery core reads entity metadata from an already-populated
//! service. This module defines that seam and ships an in-memory
//! implementation that can be loaded from files.
//!
//! # Formats
//!
//! - **JSON / YAML**: `{ entities: [{ name, schema: { properties: [...] } }] }`
//! - **CSDL**: the OData `$metadata` document (`.xml` / `.edmx`)

mod document;
mod edmx;
mod types;

pub use document::{load_service, load_service_from_str, MetadataFormat, ServiceDocument};
pub use edmx::parse_csdl;
pub use types::{Entity, EntitySchema, PropertyDescriptor};

/// A source of entity metadata
pub trait Service {
    /// Entities in the service's native, stable order
    ///
    /// Names are expected to be unique but this is not guaranteed.
    fn entities(&self) -> &[Entity];
}

#[cfg(test)]
mod tests;
