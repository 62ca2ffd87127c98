use super::*;

#[test]
fn test_empty_json_uses_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings.engine_config(), EngineConfig::default());
}

#[test]
fn test_search_settings_map_onto_engine_config() {
    let settings: Settings = serde_json::from_str(
        r#"{ "search": { "case_sensitive": true, "use_regex": true, "regex_size_limit": 4096 } }"#,
    )
    .unwrap();
    let config = settings.engine_config();
    assert!(config.default_case_sensitive);
    assert!(config.default_use_regex);
    assert_eq!(config.regex_size_limit, 4096);
    assert_eq!(config.dfa_size_limit, EngineConfig::default().dfa_size_limit);
}

#[test]
fn test_default_settings_skip_unset_limits() {
    let json = serde_json::to_string(&Settings::default()).unwrap();
    assert!(!json.contains("regex_size_limit"));
    assert!(json.contains("\"case_sensitive\":false"));
}
