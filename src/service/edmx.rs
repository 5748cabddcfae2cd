//! OData CSDL (`$metadata`) parsing
//!
//! Entities are the container's entity sets, in document order. Each set's
//! entity type is resolved by qualified name (namespace or alias), and
//! inherited `BaseType` properties come before the type's own properties.

use super::document::ServiceDocument;
use super::types::{Entity, PropertyDescriptor};
use crate::error::Result;
use crate::types::OptionStringExt;
use roxmltree::{Document, Node};
use std::collections::{HashMap, HashSet};

/// An entity type as declared in a CSDL schema
#[derive(Debug, Clone, Default)]
struct EntityTypeDef {
    base_type: Option<String>,
    keys: Option<Vec<String>>,
    properties: Vec<(Option<String>, Option<String>)>,
}

/// Parse a CSDL document into a service document
pub fn parse_csdl(xml: &str) -> Result<ServiceDocument> {
    let doc = Document::parse(xml)?;
    let types = collect_entity_types(&doc);

    let entities = doc
        .descendants()
        .filter(|n| is_element(n, "EntitySet"))
        .filter_map(|set| {
            let name = set.attribute("Name")?;
            let entity = match set.attribute("EntityType") {
                Some(type_name) => resolve_entity(name, type_name, &types),
                None => Entity::without_schema(name),
            };
            Some(entity)
        })
        .collect();

    Ok(ServiceDocument::from_entities(entities))
}

fn is_element(node: &Node<'_, '_>, local_name: &str) -> bool {
    node.is_element() && node.tag_name().name() == local_name
}

/// Index every entity type under its namespace- and alias-qualified names
fn collect_entity_types(doc: &Document<'_>) -> HashMap<String, EntityTypeDef> {
    let mut types = HashMap::new();

    for schema in doc.descendants().filter(|n| is_element(n, "Schema")) {
        let namespace = schema.attribute("Namespace").unwrap_or_default();
        let alias = schema
            .attribute("Alias")
            .map(str::to_string)
            .none_if_empty();

        for entity_type in schema.children().filter(|n| is_element(n, "EntityType")) {
            let Some(type_name) = entity_type.attribute("Name") else {
                continue;
            };
            let def = parse_entity_type(&entity_type);

            if let Some(alias) = &alias {
                types.insert(format!("{alias}.{type_name}"), def.clone());
            }
            types.insert(qualify(namespace, type_name), def);
        }
    }

    types
}

fn qualify(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}.{name}")
    }
}

fn parse_entity_type(node: &Node<'_, '_>) -> EntityTypeDef {
    let keys = node.children().find(|n| is_element(n, "Key")).map(|key| {
        key.children()
            .filter(|n| is_element(n, "PropertyRef"))
            .filter_map(|r| r.attribute("Name").map(str::to_string))
            .collect()
    });

    let properties = node
        .children()
        .filter(|n| is_element(n, "Property"))
        .map(|p| {
            (
                p.attribute("Name").map(str::to_string),
                p.attribute("Type").map(str::to_string),
            )
        })
        .collect();

    EntityTypeDef {
        base_type: node.attribute("BaseType").map(str::to_string),
        keys,
        properties,
    }
}

/// Build an entity from its type and all of the type's ancestors
fn resolve_entity(
    set_name: &str,
    type_name: &str,
    types: &HashMap<String, EntityTypeDef>,
) -> Entity {
    let mut chain = Vec::new();
    let mut visited = HashSet::new();
    let mut current = Some(type_name.to_string());

    while let Some(name) = current {
        if !visited.insert(name.clone()) {
            break;
        }
        let Some(def) = types.get(&name) else {
            break;
        };
        current = def.base_type.clone();
        chain.push(def);
    }

    if chain.is_empty() {
        return Entity::without_schema(set_name);
    }

    // Keys come from the most-derived type that declares them
    let keys: Vec<String> = chain
        .iter()
        .find_map(|def| def.keys.clone())
        .unwrap_or_default();

    let properties = chain
        .iter()
        .rev()
        .copied()
        .flat_map(|def| def.properties.iter())
        .map(|(name, type_tag)| PropertyDescriptor {
            is_primary_key: Some(name.as_ref().is_some_and(|n| keys.contains(n))),
            name: name.clone(),
            type_tag: type_tag.clone(),
        })
        .collect();

    Entity::new(set_name, properties)
}
