use super::*;
use serde_json::json;

// =============================================================================
// decode_body
// =============================================================================

#[test]
fn empty_body_decodes_to_empty_map() {
    assert!(decode_body("").unwrap().is_empty());
}

#[test]
fn non_json_body_decodes_to_empty_map() {
    assert!(decode_body("OK").unwrap().is_empty());
    assert!(decode_body("<html>busy</html>").unwrap().is_empty());
}

#[test]
fn array_body_decodes_to_empty_map() {
    // only object-opening bodies are parsed
    assert!(decode_body("[1, 2]").unwrap().is_empty());
}

#[test]
fn object_body_decodes_fully() {
    let body = decode_body(r#"{"room":{"id":1}}"#).unwrap();
    assert_eq!(body.get("room"), Some(&json!({"id": 1})));
}

#[test]
fn truncated_object_body_is_a_decode_error() {
    let err = decode_body(r#"{"room":"#).unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

// =============================================================================
// take_key / take_list
// =============================================================================

fn payload(v: Value) -> Payload {
    match v {
        Value::Object(map) => map,
        _ => panic!("test payload must be an object"),
    }
}

#[test]
fn take_key_returns_exactly_the_wrapped_value() {
    let body = payload(json!({"user": {"id": 5, "name": "Joe"}}));
    assert_eq!(take_key(body, "user").unwrap(), json!({"id": 5, "name": "Joe"}));
}

#[test]
fn take_key_missing_wrapper_is_an_error() {
    let err = take_key(Payload::new(), "user").unwrap_err();
    assert!(matches!(err, Error::MissingKey("user")));
}

#[test]
fn take_list_unwraps_an_array() {
    let body = payload(json!({"messages": [{"id": 1}, {"id": 2}]}));
    let items = take_list(body, "messages").unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], json!({"id": 1}));
}

#[test]
fn take_list_rejects_a_non_array_value() {
    let body = payload(json!({"messages": "nope"}));
    assert!(matches!(
        take_list(body, "messages").unwrap_err(),
        Error::Decode(_)
    ));
}

// =============================================================================
// RoomRef
// =============================================================================

#[test]
fn numeric_string_parses_as_id() {
    assert_eq!(RoomRef::parse("42"), RoomRef::Id(42));
}

#[test]
fn non_numeric_string_parses_as_name() {
    assert_eq!(RoomRef::parse("General"), RoomRef::Name("General".into()));
    assert_eq!(RoomRef::parse("12th Floor"), RoomRef::Name("12th Floor".into()));
}

#[test]
fn room_by_id_needs_no_network_call() {
    // nothing listens on this address; resolving an id must not care
    let client = Client::new("http://127.0.0.1:9", "token").unwrap();
    let room = client.room(&RoomRef::Id(42)).unwrap();
    assert_eq!(room.id(), 42);
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let client = Client::new("http://127.0.0.1:9/", "token").unwrap();
    // sanity: handle construction still works against the trimmed URL
    assert_eq!(client.room(&RoomRef::Id(1)).unwrap().id(), 1);
}
