//! Tests for the built-in modules

use david_application::ports::registry::find_module;
use david_domain::Error;
use david_domain::ports::{Database, Entity, SocketServer};
use david_domain::value_objects::{ContractId, KeyValues};
use david_providers::modules::{FileBasedDatabase, Person, WebSocketServer};
use serde_json::json;
use std::sync::Arc;

fn key_values(value: serde_json::Value) -> KeyValues {
    serde_json::from_value(value).expect("key values object")
}

#[test]
fn test_socket_server_module_binds_contract() {
    let definition = find_module("david-socket-server")
        .expect("built-in module")
        .build();
    let contract = ContractId::of::<dyn SocketServer>();
    assert_eq!(definition.binding_count(&contract), 1);

    let server = definition
        .singletons()
        .find_map(|d| d.binding_for(&contract))
        .expect("binding")
        .invoke()
        .downcast::<Arc<dyn SocketServer>>()
        .expect("Arc<dyn SocketServer>");
    assert_eq!(server.server_name(), "WebSocketServer");
    assert!(!server.is_listening());
}

#[test]
fn test_web_socket_server_state() {
    let server = WebSocketServer::new();
    server.start();
    assert!(server.is_listening());
    server.stop();
    assert!(!server.is_listening());
}

#[test]
fn test_file_database_assigns_increasing_identities() {
    let database = FileBasedDatabase::new();
    let mut person = Person::default();
    person
        .apply_key_values(&key_values(json!({ "name": "Ada" })))
        .expect("known property");

    let first = database.attach(Box::new(person)).expect("attach");
    let second = database.attach(Box::new(Person::default())).expect("attach");

    assert_eq!(first.identity, 1);
    assert_eq!(second.identity, 2);
    assert_eq!(first.identifier, "DAVID.App.Base.Person");
    assert_eq!(database.attached_count(), 2);
    assert_eq!(database.entry(2), Some(second));
    assert_eq!(
        database.snapshot(1).expect("snapshot")["name"],
        json!("Ada")
    );
}

#[test]
fn test_person_applies_key_values() {
    let mut person = Person::default();
    person
        .apply_key_values(&key_values(json!({
            "name": "Grace",
            "surname": "Hopper",
            "birthdate": "1906-12-09"
        })))
        .expect("valid values");

    assert_eq!(person.name, "Grace");
    assert_eq!(person.surname, "Hopper");
    assert_eq!(
        person.birthdate,
        chrono::NaiveDate::from_ymd_opt(1906, 12, 9)
    );
    assert_eq!(person.to_json().expect("json")["surname"], json!("Hopper"));
}

#[test]
fn test_person_rejects_unknown_or_mistyped_values() {
    let mut person = Person::default();

    let unknown = person
        .apply_key_values(&key_values(json!({ "age": 3 })))
        .expect_err("unknown property");
    assert!(matches!(unknown, Error::InvalidArgument { .. }));

    let mistyped = person
        .apply_key_values(&key_values(json!({ "birthdate": 12 })))
        .expect_err("birthdate must be a date");
    assert!(matches!(mistyped, Error::Json { .. }));
    assert_eq!(person, Person::default());
}

#[test]
fn test_app_base_module_declares_person() {
    let definition = find_module("david-app-base").expect("built-in module").build();
    let declaration = definition
        .find_identifier("DAVID.App.Base.Person")
        .expect("person declared");

    let entity = declaration.construct().expect("constructor");
    assert!(entity.as_any().downcast_ref::<Person>().is_some());
    assert_eq!(definition.singletons().count(), 0);
}

#[test]
fn test_database_module_binds_contract() {
    let definition = find_module("david-file-database")
        .expect("built-in module")
        .build();
    assert_eq!(definition.binding_count(&ContractId::of::<dyn Database>()), 1);
}
