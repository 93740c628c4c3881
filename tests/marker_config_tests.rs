use log_markers::{CommonsMarker, MarkerConfig, MarkerError};

#[test]
fn json_without_enabled_falls_back_to_all_markers() {
    let config = MarkerConfig::from_json_str("{}").expect("parse config");
    assert_eq!(config, MarkerConfig::default());
    assert_eq!(config.enabled, CommonsMarker::ALL.to_vec());
}

#[test]
fn json_selection_is_loaded_in_order() {
    let config =
        MarkerConfig::from_json_str(r#"{"enabled": ["RESOURCE"]}"#).expect("parse config");
    assert!(config.allows(CommonsMarker::Resource));
    assert!(!config.allows(CommonsMarker::Method));
}

#[test]
fn json_round_trip_keeps_selection() {
    let config = MarkerConfig::new(vec![CommonsMarker::Resource, CommonsMarker::Method]);
    let json = config.to_json_pretty().expect("serialize config");
    assert!(json.contains("\"RESOURCE\""));

    let restored = MarkerConfig::from_json_str(&json).expect("parse config");
    assert_eq!(restored, config);
}

#[test]
fn json_with_duplicates_is_rejected() {
    let err = MarkerConfig::from_json_str(r#"{"enabled": ["METHOD", "METHOD"]}"#)
        .expect_err("duplicate marker");
    assert!(matches!(err, MarkerError::InvalidConfig(_)));
}

#[test]
fn json_with_unknown_marker_is_rejected() {
    let err = MarkerConfig::from_json_str(r#"{"enabled": ["QUERY"]}"#)
        .expect_err("unknown marker");
    assert!(matches!(err, MarkerError::InvalidConfig(message) if message.contains("QUERY")));
}

#[test]
fn names_are_parsed_leniently() {
    let config = MarkerConfig::from_names(["method", " RESOURCE "]).expect("names");
    assert_eq!(
        config.enabled,
        vec![CommonsMarker::Method, CommonsMarker::Resource]
    );

    let err = MarkerConfig::from_names(["METHOD", "TRACE"]).expect_err("unknown name");
    assert_eq!(err, MarkerError::UnknownMarker("TRACE".to_owned()));
}

#[test]
fn json_and_names_accept_the_same_labels() {
    let from_json =
        MarkerConfig::from_json_str(r#"{"enabled": ["method", " Resource "]}"#).expect("json");
    let from_names = MarkerConfig::from_names(["method", " Resource "]).expect("names");
    assert_eq!(from_json, from_names);
}

#[test]
fn empty_selection_allows_nothing() {
    let config = MarkerConfig::new(Vec::new()).validate().expect("empty config");
    assert!(CommonsMarker::ALL.iter().all(|marker| !config.allows(*marker)));
}
