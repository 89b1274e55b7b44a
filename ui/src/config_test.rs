use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_documented_values() {
    let cfg = WidgetConfig::default();
    assert_eq!(cfg.api_url, "http://127.0.0.1:8000");
    assert_eq!(cfg.position, Position::BottomRight);
    assert_eq!(cfg.theme, Theme::Professional);
    assert!(cfg.minimized);
    assert_eq!(cfg.z_index, 10_000);
    assert!(cfg.auto_init);
    assert!(cfg.avoid_conflicts);
    assert!(cfg.persist_across_pages);
    assert!(cfg.respect_existing_ui);
}

#[test]
fn empty_overrides_yield_defaults() {
    let cfg = WidgetConfig::from_overrides(ConfigOverrides::default()).unwrap();
    assert_eq!(cfg, WidgetConfig::default());
}

// =============================================================
// Merging
// =============================================================

#[test]
fn overrides_replace_only_provided_fields() {
    let overrides = ConfigOverrides {
        api_url: Some("https://x/api".to_owned()),
        minimized: Some(false),
        ..ConfigOverrides::default()
    };
    let cfg = WidgetConfig::from_overrides(overrides).unwrap();
    assert_eq!(cfg.api_url, "https://x/api");
    assert!(!cfg.minimized);
    assert_eq!(cfg.position, Position::BottomRight);
    assert_eq!(cfg.theme, Theme::Professional);
}

#[test]
fn from_json_reads_camel_case_keys() {
    let raw = r#"{"apiUrl":"https://erp.example/bot","position":"bottom-left","theme":"oracle","zIndex":42,"respectExistingUI":false,"somethingElse":1}"#;
    let (overrides, rejected) = ConfigOverrides::from_json(raw).unwrap();
    assert!(rejected.is_empty());
    let cfg = WidgetConfig::from_overrides(overrides).unwrap();
    assert_eq!(cfg.api_url, "https://erp.example/bot");
    assert_eq!(cfg.position, Position::BottomLeft);
    assert_eq!(cfg.theme, Theme::Oracle);
    assert_eq!(cfg.z_index, 42);
    assert!(!cfg.respect_existing_ui);
}

#[test]
fn from_json_drops_unknown_position_only() {
    let (overrides, rejected) = ConfigOverrides::from_json(r#"{"position":"top-left","minimized":false}"#).unwrap();
    assert_eq!(overrides.position, None);
    assert_eq!(overrides.minimized, Some(false));
    assert_eq!(rejected.len(), 1);
    assert!(matches!(&rejected[0], ConfigError::InvalidField { key, .. } if key == "position"));
}

#[test]
fn from_json_keeps_api_url_next_to_unknown_theme() {
    let (overrides, rejected) = ConfigOverrides::from_json(r#"{"apiUrl":"https://erp.example/api","theme":"dark"}"#).unwrap();
    assert_eq!(overrides.api_url.as_deref(), Some("https://erp.example/api"));
    assert_eq!(overrides.theme, None);
    assert_eq!(rejected.len(), 1);
}

#[test]
fn from_json_drops_out_of_range_values() {
    let (overrides, rejected) = ConfigOverrides::from_json(r#"{"apiUrl":"  ","zIndex":-3,"autoInit":"yes"}"#).unwrap();
    assert_eq!(overrides, ConfigOverrides::default());
    assert!(rejected.contains(&ConfigError::EmptyApiUrl));
    assert!(rejected.contains(&ConfigError::NegativeZIndex(-3)));
    assert_eq!(rejected.len(), 3);
}

#[test]
fn from_json_treats_null_as_absent() {
    let (overrides, rejected) = ConfigOverrides::from_json(r#"{"apiUrl":null,"theme":null}"#).unwrap();
    assert_eq!(overrides, ConfigOverrides::default());
    assert!(rejected.is_empty());
}

#[test]
fn from_json_rejects_non_object() {
    assert!(matches!(ConfigOverrides::from_json("[1, 2]"), Err(ConfigError::Malformed(_))));
    assert!(matches!(ConfigOverrides::from_json("not json"), Err(ConfigError::Malformed(_))));
}

#[test]
fn merge_rejects_blank_api_url() {
    let overrides = ConfigOverrides { api_url: Some("   ".to_owned()), ..ConfigOverrides::default() };
    assert_eq!(WidgetConfig::from_overrides(overrides), Err(ConfigError::EmptyApiUrl));
}

#[test]
fn merge_rejects_negative_z_index() {
    let overrides = ConfigOverrides { z_index: Some(-1), ..ConfigOverrides::default() };
    assert_eq!(WidgetConfig::from_overrides(overrides), Err(ConfigError::NegativeZIndex(-1)));
}

// =============================================================
// Derived values
// =============================================================

#[test]
fn chat_endpoint_appends_path_once() {
    let mut cfg = WidgetConfig::default();
    assert_eq!(cfg.chat_endpoint(), "http://127.0.0.1:8000/chat");
    cfg.api_url = "https://x/api/".to_owned();
    assert_eq!(cfg.chat_endpoint(), "https://x/api/chat");
}

#[test]
fn class_names_are_kebab_case() {
    assert_eq!(Position::BottomLeft.class_name(), "bottom-left");
    assert_eq!(Position::BottomRight.class_name(), "bottom-right");
    assert_eq!(Theme::SapFiori.class_name(), "sap-fiori");
    assert_eq!(Theme::Microsoft.class_name(), "microsoft");
}

#[test]
fn serialized_config_uses_host_facing_keys() {
    let json = serde_json::to_value(WidgetConfig::default()).unwrap();
    assert_eq!(json["apiUrl"], "http://127.0.0.1:8000");
    assert_eq!(json["position"], "bottom-right");
    assert_eq!(json["zIndex"], 10_000);
    assert_eq!(json["respectExistingUI"], true);
}
