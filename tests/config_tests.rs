// Host-side tests for presets and the config proxy.

use boxsplash_core::{BoxConfig, ConfigError, ConfigProxy, Rgb};
use std::sync::Arc;

#[test]
fn default_presets_match_the_published_table() {
    let proxy = ConfigProxy::default();
    let expected = [
        ("Light", 20, 50.0, 500.0, 0xFF0000),
        ("Medium-light", 40, 30.0, 400.0, 0x00FF00),
        ("Medium", 80, 20.0, 300.0, 0x0000FF),
        ("Heavy-medium", 160, 10.0, 200.0, 0xFF00FF),
        ("Heavy (IE Killer)", 320, 5.0, 200.0, 0x00FFFF),
    ];
    assert_eq!(proxy.len(), expected.len());
    for (config, (label, count, size, focal, color)) in proxy.options().iter().zip(expected) {
        assert_eq!(config.label, label);
        assert_eq!(config.count, count);
        assert_eq!(config.size, size);
        assert_eq!(config.focal_length, focal);
        assert_eq!(config.color, Rgb::from_u32(color));
    }
}

#[test]
fn retrieving_twice_hands_out_the_same_instance() {
    let proxy = ConfigProxy::default();
    let a = proxy.retrieve_config_option(2).unwrap();
    let b = proxy.retrieve_config_option(2).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    let c = proxy.retrieve_config_option(3).unwrap();
    assert!(!Arc::ptr_eq(&a, &c));
}

#[test]
fn out_of_range_index_is_an_error() {
    let proxy = ConfigProxy::default();
    let err = proxy.retrieve_config_option(5).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::UnknownPreset {
            index: 5,
            available: 5
        }
    ));
}

#[test]
fn labels_follow_list_order() {
    let labels = ConfigProxy::default().labels();
    assert_eq!(labels.first().map(String::as_str), Some("Light"));
    assert_eq!(labels.last().map(String::as_str), Some("Heavy (IE Killer)"));
}

#[test]
fn parses_ron_preset_list() {
    let src = r##"[
        (label: "Sparse", count: 4, size: 40.0, focal_length: 300.0, color: "#FFAA00"),
        (label: "Dense", count: 400, size: 3.0, focal_length: 250.0, color: "#0a0b0c"),
    ]"##;
    let proxy = ConfigProxy::from_ron(src).unwrap();
    assert_eq!(proxy.labels(), vec!["Sparse".to_string(), "Dense".to_string()]);
    let dense = proxy.retrieve_config_option(1).unwrap();
    assert_eq!(dense.count, 400);
    assert_eq!(dense.color, Rgb::new(0x0A, 0x0B, 0x0C));
}

#[test]
fn rejects_invalid_presets() {
    let zero_count = r##"[(label: "Empty", count: 0, size: 4.0, focal_length: 300.0, color: "#FFFFFF")]"##;
    assert!(matches!(
        ConfigProxy::from_ron(zero_count),
        Err(ConfigError::Invalid { .. })
    ));

    let bad_focal = BoxConfig::new("Flat", 3, 4.0, 0.0, Rgb::new(1, 2, 3));
    assert!(matches!(
        ConfigProxy::new(vec![bad_focal]),
        Err(ConfigError::Invalid { .. })
    ));

    assert!(matches!(ConfigProxy::new(Vec::new()), Err(ConfigError::Empty)));
    assert!(matches!(ConfigProxy::from_ron("[]"), Err(ConfigError::Empty)));
}

#[test]
fn rejects_malformed_ron_and_colours() {
    assert!(matches!(
        ConfigProxy::from_ron("not ron at all"),
        Err(ConfigError::Parse(_))
    ));
    let bad_colour = r##"[(label: "X", count: 1, size: 4.0, focal_length: 300.0, color: "red")]"##;
    assert!(matches!(
        ConfigProxy::from_ron(bad_colour),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn bundled_preset_file_parses() {
    let proxy = ConfigProxy::from_ron(include_str!("../presets.ron")).unwrap();
    assert_eq!(proxy.len(), 3);
    assert_eq!(proxy.retrieve_config_option(2).unwrap().count, 600);
}
