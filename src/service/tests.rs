//! Service metadata tests

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::Path;

const CSDL: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<edmx:Edmx Version="4.0" xmlns:edmx="http://docs.oasis-open.org/odata/ns/edmx">
  <edmx:DataServices>
    <Schema Namespace="Microsoft.Dynamics.CRM" Alias="mscrm" xmlns="http://docs.oasis-open.org/odata/ns/edm">
      <EntityType Name="crmbaseentity" Abstract="true" />
      <EntityType Name="principal" BaseType="mscrm.crmbaseentity" Abstract="true">
        <Key>
          <PropertyRef Name="ownerid" />
        </Key>
        <Property Name="ownerid" Type="Edm.Guid" />
      </EntityType>
      <EntityType Name="systemuser" BaseType="mscrm.principal">
        <Property Name="fullname" Type="Edm.String" />
      </EntityType>
      <EntityType Name="account" BaseType="mscrm.crmbaseentity">
        <Key>
          <PropertyRef Name="accountid" />
        </Key>
        <Property Name="accountid" Type="Edm.Guid" />
        <Property Name="name" Type="Edm.String" />
        <Property Name="createdon" Type="Edm.DateTimeOffset" />
      </EntityType>
      <EntityContainer Name="System">
        <EntitySet Name="accounts" EntityType="Microsoft.Dynamics.CRM.account" />
        <EntitySet Name="systemusers" EntityType="mscrm.systemuser" />
        <EntitySet Name="ghosts" EntityType="Microsoft.Dynamics.CRM.ghost" />
      </EntityContainer>
    </Schema>
  </edmx:DataServices>
</edmx:Edmx>"#;

#[test]
fn test_parse_csdl_entity_sets_in_document_order() {
    let doc = parse_csdl(CSDL).unwrap();
    let names: Vec<_> = doc.entities().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["accounts", "systemusers", "ghosts"]);
}

#[test]
fn test_parse_csdl_properties_and_keys() {
    let doc = parse_csdl(CSDL).unwrap();
    let accounts = doc.get_entity("accounts").unwrap();

    assert_eq!(
        accounts.schema.as_ref().unwrap().properties,
        vec![
            PropertyDescriptor::key("accountid", "Edm.Guid"),
            PropertyDescriptor::field("name", "Edm.String"),
            PropertyDescriptor::field("createdon", "Edm.DateTimeOffset"),
        ]
    );
}

#[test]
fn test_parse_csdl_inherits_base_type() {
    let doc = parse_csdl(CSDL).unwrap();
    let users = doc.get_entity("systemusers").unwrap();

    assert_eq!(
        users.schema.as_ref().unwrap().properties,
        vec![
            PropertyDescriptor::key("ownerid", "Edm.Guid"),
            PropertyDescriptor::field("fullname", "Edm.String"),
        ]
    );
}

#[test]
fn test_parse_csdl_unknown_type_has_no_schema() {
    let doc = parse_csdl(CSDL).unwrap();
    let ghosts = doc.get_entity("ghosts").unwrap();
    assert!(ghosts.schema.is_none());
}

#[test]
fn test_parse_csdl_missing_attributes_are_kept_absent() {
    let xml = r#"<Edmx><DataServices>
      <Schema Namespace="ns">
        <EntityType Name="thing">
          <Property Name="nameless_type" />
        </EntityType>
        <EntityContainer Name="c">
          <EntitySet Name="things" EntityType="ns.thing" />
        </EntityContainer>
      </Schema>
    </DataServices></Edmx>"#;

    let doc = parse_csdl(xml).unwrap();
    let prop = &doc.entities()[0].schema.as_ref().unwrap().properties[0];
    assert_eq!(prop.name.as_deref(), Some("nameless_type"));
    assert_eq!(prop.type_tag, None);
    assert_eq!(prop.is_primary_key, Some(false));
}

#[test]
fn test_parse_csdl_base_type_cycle_terminates() {
    let xml = r#"<Edmx><DataServices>
      <Schema Namespace="ns">
        <EntityType Name="a" BaseType="ns.b"><Property Name="x" Type="Edm.String" /></EntityType>
        <EntityType Name="b" BaseType="ns.a"><Property Name="y" Type="Edm.String" /></EntityType>
        <EntityContainer Name="c"><EntitySet Name="as" EntityType="ns.a" /></EntityContainer>
      </Schema>
    </DataServices></Edmx>"#;

    let doc = parse_csdl(xml).unwrap();
    assert_eq!(doc.entities()[0].schema.as_ref().unwrap().properties.len(), 2);
}

#[test]
fn test_parse_csdl_invalid_xml() {
    let err = parse_csdl("<Edmx><unclosed></Edmx>").unwrap_err();
    assert!(matches!(err, Error::XmlParse(_)));
}

#[test]
fn test_load_service_from_yaml_str() {
    let yaml = r"
entities:
  - name: accounts
    schema:
      properties:
        - name: accountid
          type: Edm.Int32
          is_primary_key: true
        - name: createdon
          type: Edm.DateTime
          is_primary_key: false
  - name: leads
";

    let doc = load_service_from_str(yaml, MetadataFormat::Yaml).unwrap();
    assert_eq!(doc.entities.len(), 2);
    assert!(doc.entities[0]
        .schema
        .as_ref()
        .unwrap()
        .has_property("createdon"));
    assert_eq!(doc.entities[1], Entity::without_schema("leads"));
}

#[test]
fn test_load_service_from_json_str_with_missing_flag() {
    let json = r#"{"entities": [{"name": "contacts", "schema": {"properties": [{"name": "contactid", "type": "Edm.Guid"}]}}]}"#;

    let doc = load_service_from_str(json, MetadataFormat::Json).unwrap();
    let prop = &doc.entities[0].schema.as_ref().unwrap().properties[0];
    assert_eq!(prop.is_primary_key, None);
}

#[test]
fn test_metadata_format_from_path() {
    assert_eq!(
        MetadataFormat::from_path(Path::new("svc.json")),
        Some(MetadataFormat::Json)
    );
    assert_eq!(
        MetadataFormat::from_path(Path::new("svc.YML")),
        Some(MetadataFormat::Yaml)
    );
    assert_eq!(
        MetadataFormat::from_path(Path::new("$metadata.edmx")),
        Some(MetadataFormat::Csdl)
    );
    assert_eq!(MetadataFormat::from_path(Path::new("svc.txt")), None);
    assert_eq!(MetadataFormat::from_path(Path::new("svc")), None);
}

#[test]
fn test_load_service_from_file() {
    let mut file = tempfile::Builder::new().suffix(".xml").tempfile().unwrap();
    file.write_all(CSDL.as_bytes()).unwrap();

    let doc = load_service(file.path()).unwrap();
    assert_eq!(doc.entities.len(), 3);
}

#[test]
fn test_load_service_errors() {
    let err = load_service("metadata.csv").unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }));

    let err = load_service("/nonexistent/metadata.json").unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
}

#[test]
fn test_service_document_builder() {
    let doc = ServiceDocument::new()
        .with_entity(Entity::new("accounts", vec![]))
        .with_entity(Entity::new("accounts", vec![]));

    // Duplicates are preserved; the catalog builder decides what to do
    assert_eq!(doc.entities().len(), 2);
}
