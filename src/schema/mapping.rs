//! EDM type tag to JSON Schema type mapping
//!
//! The mapping is an ordered table; the first rule listing a tag wins.
//! Tags may be written with or without the `Edm.` namespace. Anything
//! the table does not list falls through to [`DEFAULT_TARGET`].

use super::types::{FieldSchema, JsonType, SchemaFormat};

/// Namespace prefix of the primitive EDM types
pub const EDM_NAMESPACE: &str = "Edm.";

/// Target representation for a foreign type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetType {
    pub json_type: JsonType,
    pub format: Option<SchemaFormat>,
}

impl TargetType {
    const fn plain(json_type: JsonType) -> Self {
        Self {
            json_type,
            format: None,
        }
    }

    /// Build the nullable field schema for this target
    pub fn to_field_schema(self) -> FieldSchema {
        let schema = FieldSchema::nullable(self.json_type);
        match self.format {
            Some(format) => schema.with_format(format),
            None => schema,
        }
    }
}

/// One row of the mapping table
#[derive(Debug, Clone, Copy)]
pub struct TypeRule {
    /// Unqualified EDM type names matched by this rule
    pub tags: &'static [&'static str],
    pub target: TargetType,
}

/// Ordered mapping rules
pub const TYPE_RULES: &[TypeRule] = &[
    TypeRule {
        tags: &["Date", "DateTime", "DateTimeOffset"],
        target: TargetType {
            json_type: JsonType::String,
            format: Some(SchemaFormat::DateTime),
        },
    },
    TypeRule {
        tags: &["Int16", "Int32", "Int64"],
        target: TargetType::plain(JsonType::Integer),
    },
    TypeRule {
        tags: &["Double", "Decimal"],
        target: TargetType::plain(JsonType::Number),
    },
    TypeRule {
        tags: &["Boolean"],
        target: TargetType::plain(JsonType::Boolean),
    },
];

/// Target for tags no rule lists, including future EDM types
pub const DEFAULT_TARGET: TargetType = TargetType::plain(JsonType::String);

/// Map a foreign type tag to its target type
pub fn map_type(type_tag: &str) -> TargetType {
    let name = type_tag.strip_prefix(EDM_NAMESPACE).unwrap_or(type_tag);
    TYPE_RULES
        .iter()
        .find(|rule| rule.tags.iter().any(|tag| *tag == name))
        .map_or(DEFAULT_TARGET, |rule| rule.target)
}
