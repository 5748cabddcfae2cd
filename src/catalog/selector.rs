//! Entity selection

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::info;

/// Entities always eligible for extraction
pub const BASE_ENTITIES: &[&str] = &[
    "accounts",
    "opportunities",
    "contacts",
    "systemusers",
    "appmodules",
];

/// Entities eligible only when advanced features are enabled
pub const ADVANCED_ENTITIES: &[&str] = &[
    "msevtmgt_events",
    "msevtmgt_eventregistrations",
    "leads",
    "transactioncurrencies",
    "salesorders",
    "msdyncrm_linkedinformsubmissions",
    "activitypointers",
    "businessunits",
    "activityparties",
    "campaigns",
    "mb_marketingautomationactivities",
];

fn default_base() -> Vec<String> {
    BASE_ENTITIES.iter().map(|s| (*s).to_string()).collect()
}

fn default_advanced() -> Vec<String> {
    ADVANCED_ENTITIES.iter().map(|s| (*s).to_string()).collect()
}

/// Decides which entity names are eligible for extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySelector {
    /// Always eligible
    #[serde(default = "default_base")]
    pub base_entities: Vec<String>,

    /// Eligible when advanced features are enabled
    #[serde(default = "default_advanced")]
    pub advanced_entities: Vec<String>,
}

impl Default for EntitySelector {
    fn default() -> Self {
        Self {
            base_entities: default_base(),
            advanced_entities: default_advanced(),
        }
    }
}

impl EntitySelector {
    /// Create a selector from explicit lists
    pub fn new<B, A, S>(base: B, advanced: A) -> Self
    where
        B: IntoIterator<Item = S>,
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base_entities: base.into_iter().map(Into::into).collect(),
            advanced_entities: advanced.into_iter().map(Into::into).collect(),
        }
    }

    /// Eligible entity names for this invocation
    pub fn select(&self, advanced_enabled: bool) -> BTreeSet<String> {
        let mut selected: BTreeSet<String> = self.base_entities.iter().cloned().collect();

        if advanced_enabled {
            info!("advanced features enabled for account");
            selected.extend(self.advanced_entities.iter().cloned());
        }

        selected
    }
}
