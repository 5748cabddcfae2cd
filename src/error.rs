//! Error types for tap-dynamics
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for tap-dynamics
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to parse CSDL metadata: {0}")]
    XmlParse(#[from] roxmltree::Error),

    // ============================================================================
    // Metadata Errors
    // ============================================================================
    #[error("Malformed metadata for entity '{entity}': {message}")]
    MalformedMetadata { entity: String, message: String },

    #[error("Entity '{entity}' has no schema metadata")]
    MissingSchema { entity: String },

    #[error("Entity '{entity}' appears more than once in the service")]
    DuplicateEntity { entity: String },

    #[error("Unsupported metadata format: {path}")]
    UnsupportedFormat { path: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a malformed metadata error
    pub fn malformed(entity: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedMetadata {
            entity: entity.into(),
            message: message.into(),
        }
    }

    /// Create a missing schema error
    pub fn missing_schema(entity: impl Into<String>) -> Self {
        Self::MissingSchema {
            entity: entity.into(),
        }
    }

    /// Check if this error means the service metadata itself is unusable
    pub fn is_malformed_metadata(&self) -> bool {
        matches!(
            self,
            Error::MalformedMetadata { .. }
                | Error::MissingSchema { .. }
                | Error::DuplicateEntity { .. }
        )
    }
}

/// Result type alias for tap-dynamics
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::malformed("accounts", "property 2 has no name");
        assert_eq!(
            err.to_string(),
            "Malformed metadata for entity 'accounts': property 2 has no name"
        );

        let err = Error::missing_schema("leads");
        assert_eq!(err.to_string(), "Entity 'leads' has no schema metadata");
    }

    #[test]
    fn test_is_malformed_metadata() {
        assert!(Error::malformed("accounts", "x").is_malformed_metadata());
        assert!(Error::missing_schema("accounts").is_malformed_metadata());
        assert!(Error::DuplicateEntity {
            entity: "accounts".to_string()
        }
        .is_malformed_metadata());

        assert!(!Error::config("test").is_malformed_metadata());
        assert!(!Error::FileNotFound {
            path: "x".to_string()
        }
        .is_malformed_metadata());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
