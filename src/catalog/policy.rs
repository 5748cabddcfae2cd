//! Replication method policies

use crate::schema::ObjectSchema;
use crate::types::ReplicationMethod;

/// Field whose presence marks a stream as incrementally extractable
pub const CREATED_ON_FIELD: &str = "createdon";

/// Decides how a stream is extracted from its translated schema
pub trait ReplicationPolicy: std::fmt::Debug + Send + Sync {
    /// Pick the replication method for a stream
    fn replication_method(&self, schema: &ObjectSchema) -> ReplicationMethod;
}

/// Incremental when the schema declares a creation timestamp field
///
/// This is a heuristic on field names, not a capability declared by the
/// service. The field's type is not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedOnHeuristic {
    field: String,
}

impl Default for CreatedOnHeuristic {
    fn default() -> Self {
        Self::new(CREATED_ON_FIELD)
    }
}

impl CreatedOnHeuristic {
    /// Create a heuristic keyed on a specific field name
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// The field name this heuristic looks for
    pub fn field(&self) -> &str {
        &self.field
    }
}

impl ReplicationPolicy for CreatedOnHeuristic {
    fn replication_method(&self, schema: &ObjectSchema) -> ReplicationMethod {
        if schema.has_property(&self.field) {
            ReplicationMethod::Incremental
        } else {
            ReplicationMethod::FullTable
        }
    }
}
