//! # tap-dynamics
//!
//! Schema discovery and catalog construction for Microsoft Dynamics 365
//! entity services.
//!
//! ## Features
//!
//! - **Entity Selection**: base entities always, advanced entities behind a flag
//! - **Schema Translation**: EDM primitive types mapped to nullable JSON Schema types
//! - **Key Inference**: primary keys taken from the entity metadata
//! - **Replication Method**: `INCREMENTAL` when a `createdon` field exists
//! - **Metadata Loading**: JSON/YAML service documents or OData CSDL `$metadata`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tap_dynamics::{catalog::discover, service::load_service, Result};
//!
//! fn main() -> Result<()> {
//!     let service = load_service("metadata.xml")?;
//!     let catalog = discover(&service, false)?;
//!     println!("{}", catalog.to_json_pretty()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//!  Service ──entities──▶ CatalogBuilder ──────────────────▶ Catalog
//!                          │        │         │
//!                   EntitySelector  │   ReplicationPolicy
//!                                   ▼
//!                           Schema translator
//!                         (EDM type mapping table)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Service collaborator and metadata loaders
pub mod service;

/// EDM to JSON Schema translation
pub mod schema;

/// Entity selection and catalog construction
pub mod catalog;

/// Tap configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use catalog::{discover, Catalog, CatalogBuilder, CatalogEntry, EntitySelector};
pub use service::{load_service, Service, ServiceDocument};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
