//! Schema translation module
//!
//! Converts an entity's EDM metadata into a JSON Schema shaped stream schema.
//!
//! # Features
//!
//! - **Declarative Type Mapping**: EDM primitive tags map through an ordered table
//! - **Unconditional Nullability**: every field is `["null", <type>]`
//! - **Strict Objects**: `additionalProperties` is always `false`
//! - **Key Inference**: primary keys are collected in property order

mod mapping;
mod translator;
mod types;

pub use mapping::{map_type, TargetType, TypeRule, DEFAULT_TARGET, EDM_NAMESPACE, TYPE_RULES};
pub use translator::{translate, translate_entity, TranslatedSchema};
pub use types::{FieldSchema, JsonType, ObjectSchema, SchemaFormat};
