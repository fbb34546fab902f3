mod common;

use common::{Measurements, RequiredUser, User, init_tracing};
use pretty_assertions::assert_eq;
use serde_json::json;
use serialized_model::{Codec, CodecConfig, ModelError, RequiredPolicy};

fn reporting() -> Codec {
    Codec::new(CodecConfig {
        required: RequiredPolicy::Report,
        ..CodecConfig::default()
    })
}

// ── Configuration ────────────────────────────────────────────────

#[test]
fn default_config_rejects_and_is_compact() {
    let config = CodecConfig::default();
    assert_eq!(config.required, RequiredPolicy::Reject);
    assert!(!config.pretty);
    assert_eq!(Codec::default().config(), &config);
}

#[test]
fn config_loads_from_json() {
    let config = CodecConfig::from_json_str(r#"{"required": "report", "pretty": true}"#).unwrap();
    assert_eq!(
        config,
        CodecConfig {
            required: RequiredPolicy::Report,
            pretty: true,
        }
    );
}

#[test]
fn config_fields_are_optional() {
    assert_eq!(CodecConfig::from_json_str("{}").unwrap(), CodecConfig::default());
    let config = CodecConfig::from_json_str(r#"{"pretty": true}"#).unwrap();
    assert_eq!(config.required, RequiredPolicy::Reject);
}

#[test]
fn invalid_config_is_a_config_error() {
    let result = CodecConfig::from_json_str(r#"{"required": "sometimes"}"#);
    assert!(matches!(result, Err(ModelError::Config(_))));
}

#[test]
fn config_serializes_policy_in_snake_case() {
    let value = serde_json::to_value(CodecConfig::default()).unwrap();
    assert_eq!(value, json!({"required": "reject", "pretty": false}));
}

// ── Required policy ──────────────────────────────────────────────

#[test]
fn reject_policy_fails_on_unset_required() {
    init_tracing();
    let result = Codec::default().decode_str::<RequiredUser>(r#"{"full_name": "Foo Bar"}"#);
    match result {
        Err(ModelError::MissingRequired { fields }) => {
            assert_eq!(fields.len(), 1);
            assert_eq!(fields[0].to_string(), "RequiredUser.post");
        }
        other => panic!("expected MissingRequired, got {:?}", other.map(|d| d.report)),
    }
}

#[test]
fn reject_policy_accepts_complete_input() {
    let user = Codec::default()
        .decode_str::<RequiredUser>(r#"{"full_name": "Foo Bar", "town": "Maribor"}"#)
        .unwrap()
        .into_inner();
    assert_eq!(user.name.get().unwrap(), "Foo Bar");
    assert_eq!(user.post.get().unwrap(), "Maribor");
}

#[test]
fn report_policy_returns_value_and_report() {
    let decoded = reporting()
        .decode_str::<RequiredUser>(r#"{"name": "Foo"}"#)
        .unwrap();
    assert!(!decoded.is_complete());
    assert_eq!(decoded.report.unset_required()[0].field, "post");
    assert_eq!(decoded.value.name.get().unwrap(), "Foo");
}

#[test]
fn policy_does_not_affect_optional_types() {
    let user = Codec::default().decode_str::<User>("{}").unwrap().into_inner();
    assert_eq!(user.surname.get().map(String::as_str), Some("No name"));
}

// ── Inputs ───────────────────────────────────────────────────────

#[test]
fn decode_from_slice_and_value() {
    let codec = Codec::default();
    let from_slice = codec
        .decode_slice::<Measurements>(br#"{"age": "18"}"#)
        .unwrap()
        .into_inner();
    assert_eq!(from_slice.age.get(), Some(&18));

    let from_value = codec
        .decode_value::<Measurements>(json!({"height": "180"}))
        .unwrap()
        .into_inner();
    assert_eq!(from_value.height.get(), Some(&180));
}

#[test]
fn non_object_input_is_a_container_error() {
    let codec = reporting();
    assert!(matches!(
        codec.decode_str::<User>("\"just a string\""),
        Err(ModelError::Container(_))
    ));
    assert!(matches!(
        codec.decode_value::<User>(json!(42)),
        Err(ModelError::Container(_))
    ));
    assert!(matches!(
        codec.decode_slice::<User>(b"not json"),
        Err(ModelError::Container(_))
    ));
}

// ── Outputs ──────────────────────────────────────────────────────

#[test]
fn compact_and_pretty_encoding() {
    let mut m = Measurements::default();
    m.age.set(Some(18));

    let compact = Codec::default().encode_string(&m).unwrap();
    assert_eq!(compact, r#"{"age":"18"}"#);

    let pretty = Codec::new(CodecConfig {
        pretty: true,
        ..CodecConfig::default()
    })
    .encode_string(&m)
    .unwrap();
    assert_eq!(pretty, "{\n  \"age\": \"18\"\n}");
}

#[test]
fn encode_vec_matches_string() {
    let codec = Codec::default();
    let mut user = User::default();
    user.token.set(Some("t".into()));
    let bytes = codec.encode_vec(&user).unwrap();
    assert_eq!(bytes, codec.encode_string(&user).unwrap().into_bytes());

    let back = codec.decode_slice::<User>(&bytes).unwrap().into_inner();
    assert_eq!(back.token.get().map(String::as_str), Some("t"));
}

#[test]
fn encoding_unset_required_fails_regardless_of_policy() {
    let user = RequiredUser::default();
    assert!(matches!(
        reporting().encode_string(&user),
        Err(ModelError::Encode { type_name: "RequiredUser", .. })
    ));
}
