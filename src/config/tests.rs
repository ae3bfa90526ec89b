// src/config/tests.rs

use super::*;
use test_log::test;

#[test]
fn it_should_default_to_the_stock_theme_and_fifo_location() {
    let config = Config::default();
    assert_eq!(config.colors.background, Rgb::new(0xec, 0xec, 0xe1));
    assert_eq!(config.colors.bar, Rgb::new(0x6d, 0x6d, 0x70));
    assert_eq!(
        config.channel.fifo_path(),
        PathBuf::from("/run/psplash_fifo")
    );
    assert_eq!(config.channel.timeout(), None);
    assert_eq!(
        (config.layout.split_numerator, config.layout.split_denominator),
        (5, 6)
    );
}

#[test]
fn it_should_fill_missing_fields_from_defaults() {
    let config = Config::from_json(
        r##"{ "colors": { "text": "#102030" }, "channel": { "timeout_secs": 30 } }"##,
    )
    .unwrap();
    assert_eq!(config.colors.text, Rgb::new(0x10, 0x20, 0x30));
    assert_eq!(config.colors.background, ColorScheme::default().background);
    assert_eq!(config.channel.timeout(), Some(Duration::from_secs(30)));
    assert_eq!(config.channel.fifo_name, DEFAULT_FIFO_NAME);
    assert_eq!(config.layout, LayoutConfig::default());
}

#[test]
fn it_should_reject_malformed_colors_and_layouts() {
    assert!(Config::from_json(r#"{ "colors": { "bar": "green" } }"#).is_err());
    assert!(Config::from_json(r#"{ "layout": { "split_denominator": 0 } }"#).is_err());
    assert!(Config::from_json(r#"{ "layout": { "split_numerator": 7 } }"#).is_err());
    assert!(Config::from_json(r#"{ "channel": { "fifo_name": "a/b" } }"#).is_err());
}

#[test]
fn it_should_let_the_environment_override_the_fifo_directory() {
    let mut config = Config::default();
    config.apply_env_overrides(Some(PathBuf::from("/tmp/splash")));
    assert_eq!(
        config.channel.fifo_path(),
        PathBuf::from("/tmp/splash/psplash_fifo")
    );

    let mut config = Config::default();
    config.apply_env_overrides(Some(PathBuf::new()));
    assert_eq!(config.channel.run_dir, PathBuf::from(DEFAULT_RUN_DIR));
}

#[test]
fn it_should_round_trip_through_json() {
    let mut config = Config::default();
    config.layout.startup_message = Some("Booting".into());
    let text = serde_json::to_string(&config).unwrap();
    assert_eq!(Config::from_json(&text).unwrap(), config);
}
