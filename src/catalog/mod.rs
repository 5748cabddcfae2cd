//! Catalog discovery module
//!
//! Turns a service's entity metadata into a catalog of streams.
//!
//! # Flow
//!
//! 1. The [`EntitySelector`] resolves which entity names are eligible
//! 2. Each eligible entity, in service order, is translated to a schema
//! 3. A [`ReplicationPolicy`] picks `INCREMENTAL` or `FULL_TABLE`
//! 4. The stream is appended with a stream-level `selected: true` entry

mod builder;
mod policy;
mod selector;
mod types;

pub use builder::{discover, CatalogBuilder};
pub use policy::{CreatedOnHeuristic, ReplicationPolicy, CREATED_ON_FIELD};
pub use selector::{EntitySelector, ADVANCED_ENTITIES, BASE_ENTITIES};
pub use types::{Catalog, CatalogEntry, EntryMetadata, MetadataEntry};
