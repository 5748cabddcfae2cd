//! Catalog construction from service metadata

use super::policy::{CreatedOnHeuristic, ReplicationPolicy};
use super::selector::EntitySelector;
use super::types::{Catalog, CatalogEntry, MetadataEntry};
use crate::error::{Error, Result};
use crate::schema::translate_entity;
use crate::service::Service;
use std::collections::HashSet;
use tracing::debug;

/// Builds a catalog from a service's entity metadata
#[derive(Debug)]
pub struct CatalogBuilder {
    selector: EntitySelector,
    policy: Box<dyn ReplicationPolicy>,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogBuilder {
    /// Create a builder with the built-in entity lists and `createdon` heuristic
    pub fn new() -> Self {
        Self {
            selector: EntitySelector::default(),
            policy: Box::new(CreatedOnHeuristic::default()),
        }
    }

    /// Use a different entity selector
    #[must_use]
    pub fn with_selector(mut self, selector: EntitySelector) -> Self {
        self.selector = selector;
        self
    }

    /// Use a different replication policy
    #[must_use]
    pub fn with_policy(mut self, policy: impl ReplicationPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// The selector in use
    pub fn selector(&self) -> &EntitySelector {
        &self.selector
    }

    /// Build the catalog
    ///
    /// Streams follow the service's entity order. Any malformed eligible
    /// entity, or an eligible name seen twice, fails the whole call.
    pub fn discover<S: Service + ?Sized>(
        &self,
        service: &S,
        advanced_enabled: bool,
    ) -> Result<Catalog> {
        let eligible = self.selector.select(advanced_enabled);
        let mut seen = HashSet::new();
        let mut catalog = Catalog::new();

        for entity in service.entities() {
            if !eligible.contains(&entity.name) {
                continue;
            }
            if !seen.insert(entity.name.as_str()) {
                return Err(Error::DuplicateEntity {
                    entity: entity.name.clone(),
                });
            }

            let translated = translate_entity(entity)?;
            let replication_method = self.policy.replication_method(&translated.schema);

            let mut metadata = translated.metadata;
            metadata.push(MetadataEntry::stream_selected());

            debug!(
                stream = %entity.name,
                fields = translated.schema.properties.len(),
                %replication_method,
                "discovered stream"
            );

            catalog.streams.push(CatalogEntry {
                tap_stream_id: entity.name.clone(),
                stream: entity.name.clone(),
                key_properties: translated.key_properties,
                schema: translated.schema,
                metadata,
                replication_method,
            });
        }

        Ok(catalog)
    }
}

/// Build a catalog with the default selector and replication policy
pub fn discover<S: Service + ?Sized>(service: &S, advanced_enabled: bool) -> Result<Catalog> {
    CatalogBuilder::new().discover(service, advanced_enabled)
}
