//! Tap configuration
//!
//! The tap reads one JSON (or YAML) config file. Only the keys below affect
//! discovery; anything else in the file (credentials, URLs) is ignored here.
//!
//! ```yaml
//! advanced_features_enabled: true
//! selector:
//!   base_entities: [accounts, contacts]
//!   advanced_entities: [leads]
//! ```

use crate::catalog::{CatalogBuilder, EntitySelector};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Discovery configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapConfig {
    /// Include the advanced entity list
    #[serde(default)]
    pub advanced_features_enabled: bool,

    /// Override the built-in entity lists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<EntitySelector>,
}

impl TapConfig {
    /// Load a config file; YAML for `.yaml`/`.yml`, JSON otherwise
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

        let config = if is_yaml {
            Self::from_yaml_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a config from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a config from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reject entity lists containing blank names
    pub fn validate(&self) -> Result<()> {
        let Some(selector) = &self.selector else {
            return Ok(());
        };

        let lists = [
            ("selector.base_entities", &selector.base_entities),
            ("selector.advanced_entities", &selector.advanced_entities),
        ];
        for (field, names) in lists {
            if names.iter().any(|n| n.trim().is_empty()) {
                return Err(Error::invalid_value(field, "entity names must not be empty"));
            }
        }
        Ok(())
    }

    /// The entity selector this config describes
    pub fn entity_selector(&self) -> EntitySelector {
        self.selector.clone().unwrap_or_default()
    }

    /// A catalog builder using this config's selector
    pub fn catalog_builder(&self) -> CatalogBuilder {
        CatalogBuilder::new().with_selector(self.entity_selector())
    }
}
