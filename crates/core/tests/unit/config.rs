//! # Configuration Tests
//!
//! Tests for configuration structures, deserialization, and defaults.

use bpsim_core::config::*;
use pretty_assertions::assert_eq;

#[test]
fn config_defaults() {
    let config = Config::default();
    assert_eq!(config.predictor, PredictorKind::Static);
    assert_eq!(config.counter_width, 2);
    assert_eq!(config.bimodal.table_entries, 4096);
    assert_eq!(config.gshare.history_bits, 12);
    assert_eq!(config.gshare.table_entries, 4096);
    assert_eq!(config.local.history_entries, 1024);
    assert_eq!(config.local.history_bits, 10);
    assert_eq!(config.local.pattern_entries, 1024);
    assert_eq!(config.tournament.choice_entries, 4096);
}

#[test]
fn empty_json_gives_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.predictor, PredictorKind::Static);
    assert_eq!(config.counter_width, 2);
    assert_eq!(config.gshare.table_entries, 4096);
}

#[test]
fn full_json_round_trip() {
    let json = r#"{
        "predictor": "Tournament",
        "counter_width": 3,
        "bimodal": { "table_entries": 512 },
        "gshare": { "history_bits": 10, "table_entries": 1024 },
        "local": {
            "history_entries": 256,
            "history_bits": 8,
            "pattern_entries": 256
        },
        "tournament": { "choice_entries": 1024 }
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.predictor, PredictorKind::Tournament);
    assert_eq!(config.counter_width, 3);
    assert_eq!(config.bimodal.table_entries, 512);
    assert_eq!(config.gshare.history_bits, 10);
    assert_eq!(config.local.pattern_entries, 256);
    assert_eq!(config.tournament.choice_entries, 1024);
}

#[test]
fn partial_json_fills_missing_sections() {
    let json = r#"{ "predictor": "Local", "local": { "history_bits": 6 } }"#;

    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.predictor, PredictorKind::Local);
    assert_eq!(config.local.history_bits, 6);
    // Unspecified fields keep their defaults.
    assert_eq!(config.local.history_entries, 1024);
    assert_eq!(config.gshare.table_entries, 4096);
}

#[test]
fn predictor_kind_accepts_gshare_alias() {
    let config: Config = serde_json::from_str(r#"{ "predictor": "Gshare" }"#).unwrap();
    assert_eq!(config.predictor, PredictorKind::GShare);

    let config: Config = serde_json::from_str(r#"{ "predictor": "GShare" }"#).unwrap();
    assert_eq!(config.predictor, PredictorKind::GShare);
}

#[test]
fn unknown_predictor_kind_rejected() {
    let result: Result<Config, _> = serde_json::from_str(r#"{ "predictor": "Perceptron" }"#);
    assert!(result.is_err());
}
