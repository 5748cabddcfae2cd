//! Common types used throughout tap-dynamics
//!
//! This module contains shared type definitions
//! used across the schema, catalog and service modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Replication Method
// ============================================================================

/// Strategy the sync engine uses to extract a stream's records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReplicationMethod {
    /// Only fetch records newer than the last bookmark
    Incremental,
    /// Re-extract every record on each run
    #[default]
    FullTable,
}

impl std::fmt::Display for ReplicationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplicationMethod::Incremental => write!(f, "INCREMENTAL"),
            ReplicationMethod::FullTable => write!(f, "FULL_TABLE"),
        }
    }
}

// ============================================================================
// Inclusion
// ============================================================================

/// Field inclusion marker carried in field-level catalog metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inclusion {
    /// Always extracted
    #[default]
    Automatic,
    /// Extracted when selected
    Available,
    /// Never extracted
    Unsupported,
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replication_method_serde() {
        let method: ReplicationMethod = serde_json::from_str("\"INCREMENTAL\"").unwrap();
        assert_eq!(method, ReplicationMethod::Incremental);

        let json = serde_json::to_string(&ReplicationMethod::FullTable).unwrap();
        assert_eq!(json, "\"FULL_TABLE\"");
    }

    #[test]
    fn test_replication_method_display() {
        assert_eq!(ReplicationMethod::Incremental.to_string(), "INCREMENTAL");
        assert_eq!(ReplicationMethod::FullTable.to_string(), "FULL_TABLE");
    }

    #[test]
    fn test_inclusion_serde() {
        let json = serde_json::to_string(&Inclusion::Automatic).unwrap();
        assert_eq!(json, "\"automatic\"");
        assert_eq!(Inclusion::default(), Inclusion::Automatic);
    }

    #[test]
    fn test_option_string_none_if_empty() {
        assert_eq!(
            Some("test".to_string()).none_if_empty(),
            Some("test".to_string())
        );
        assert_eq!(Some(String::new()).none_if_empty(), None);
        assert_eq!(None::<String>.none_if_empty(), None);
        assert_eq!(String::new().none_if_empty(), None);
    }
}
