use serialized_types::WireKey;
use std::collections::HashSet;

// ── Construction ─────────────────────────────────────────────────

#[test]
fn named_key_keeps_name() {
    let key = WireKey::new("home_address");
    assert_eq!(key.as_str(), "home_address");
    assert_eq!(key.as_index(), None);
}

#[test]
fn index_key_has_decimal_name() {
    let key = WireKey::from_index(7);
    assert_eq!(key.as_str(), "7");
    assert_eq!(key.as_index(), Some(7));
}

#[test]
fn resolve_prefers_explicit_override() {
    let key = WireKey::resolve(Some("phone_number"), "phone");
    assert_eq!(key.as_str(), "phone_number");
}

#[test]
fn resolve_falls_back_to_field_name() {
    let key = WireKey::resolve(None, "surname");
    assert_eq!(key.as_str(), "surname");
}

#[test]
fn from_conversions() {
    let a: WireKey = "token".into();
    let b: WireKey = String::from("token").into();
    assert_eq!(a, b);
}

// ── Identity ─────────────────────────────────────────────────────

#[test]
fn equality_is_by_name() {
    assert_eq!(WireKey::from_index(3), WireKey::new("3"));
    assert_ne!(WireKey::new("a"), WireKey::new("b"));
}

#[test]
fn hash_is_by_name() {
    let mut set = HashSet::new();
    set.insert(WireKey::from_index(3));
    set.insert(WireKey::new("3"));
    assert_eq!(set.len(), 1);
    assert!(set.contains("3"));
}

#[test]
fn display_is_name() {
    assert_eq!(WireKey::new("full_name").to_string(), "full_name");
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serializes_as_plain_string() {
    let json = serde_json::to_string(&WireKey::new("town")).unwrap();
    assert_eq!(json, "\"town\"");
}

#[test]
fn deserializes_from_plain_string() {
    let key: WireKey = serde_json::from_str("\"town\"").unwrap();
    assert_eq!(key.as_str(), "town");
    assert_eq!(key.as_index(), None);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "must not be empty")]
fn empty_name_is_rejected() {
    let _ = WireKey::new("");
}
