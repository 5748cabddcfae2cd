//! Translation of foreign entity metadata into stream schemas

use super::mapping::map_type;
use super::types::ObjectSchema;
use crate::catalog::MetadataEntry;
use crate::error::{Error, Result};
use crate::service::{Entity, EntitySchema, PropertyDescriptor};

/// Everything the catalog needs from one entity's metadata
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslatedSchema {
    /// Strict object schema over all fields
    pub schema: ObjectSchema,
    /// One `inclusion: automatic` entry per field, in property order
    pub metadata: Vec<MetadataEntry>,
    /// Key fields in order of first appearance (duplicates kept)
    pub key_properties: Vec<String>,
}

/// Translate an entity, failing if its metadata container is absent
pub fn translate_entity(entity: &Entity) -> Result<TranslatedSchema> {
    let schema = entity
        .schema
        .as_ref()
        .ok_or_else(|| Error::missing_schema(&entity.name))?;
    translate(&entity.name, schema)
}

/// Translate an entity schema
///
/// Fails on the first property missing its name, type tag or key flag.
pub fn translate(entity_name: &str, entity_schema: &EntitySchema) -> Result<TranslatedSchema> {
    let mut translated = TranslatedSchema::default();

    for (index, property) in entity_schema.properties.iter().enumerate() {
        let (name, type_tag, is_primary_key) = required_attributes(entity_name, index, property)?;

        if is_primary_key {
            translated.key_properties.push(name.to_string());
        }

        translated.metadata.push(MetadataEntry::automatic_field(name));
        translated
            .schema
            .add_property(name, map_type(type_tag).to_field_schema());
    }

    Ok(translated)
}

fn required_attributes<'a>(
    entity_name: &str,
    index: usize,
    property: &'a PropertyDescriptor,
) -> Result<(&'a str, &'a str, bool)> {
    let name = property
        .name
        .as_deref()
        .ok_or_else(|| Error::malformed(entity_name, format!("property {index} has no name")))?;
    let type_tag = property.type_tag.as_deref().ok_or_else(|| {
        Error::malformed(entity_name, format!("property '{name}' has no type"))
    })?;
    let is_primary_key = property.is_primary_key.ok_or_else(|| {
        Error::malformed(
            entity_name,
            format!("property '{name}' has no primary key flag"),
        )
    })?;
    Ok((name, type_tag, is_primary_key))
}
