use urodyn_cli::config::{OutputFormat, UrodynConfig, load_from, save_to};
use urodyn_engine::Thresholds;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, UrodynConfig::default());
    assert_eq!(config.thresholds, Thresholds::default());
    assert_eq!(config.output_format, OutputFormat::Text);
}

#[test]
fn save_then_load_keeps_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = UrodynConfig {
        thresholds: Thresholds {
            vesical_pressure_epsilon: 0.5,
            confidence_pressure_tolerance: 3.0,
        },
        output_format: OutputFormat::Json,
        json_logs: true,
        ..UrodynConfig::default()
    };
    save_to(&path, &config).unwrap();

    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());
    assert_eq!(load_from(&path).unwrap(), config);
}

#[cfg(unix)]
#[test]
fn saved_config_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    save_to(&path, &UrodynConfig::default()).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn save_stamps_current_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let config = UrodynConfig {
        config_version: 0,
        ..UrodynConfig::default()
    };
    save_to(&path, &config).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["config_version"], 1);
}

#[test]
fn unversioned_config_is_stamped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "thresholds": { "vesical_pressure_epsilon": 1.5 }, "output_format": "json" }"#,
    )
    .unwrap();

    let config = load_from(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.thresholds.vesical_pressure_epsilon, 1.5);
    assert_eq!(config.thresholds.confidence_pressure_tolerance, 5.0);
    assert_eq!(config.output_format, OutputFormat::Json);
    assert!(!config.json_logs);
}

#[test]
fn unknown_keys_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "config_version": 1, "pressure_epsilon": 1.5 }"#).unwrap();

    let config = load_from(&path).unwrap();
    assert_eq!(config.thresholds, Thresholds::default());
}

#[test]
fn v0_config_without_thresholds_gets_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{}").unwrap();

    let config = load_from(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.thresholds, Thresholds::default());
}

#[test]
fn newer_config_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "config_version": 99 }"#).unwrap();

    let err = load_from(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn negative_tolerance_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "config_version": 1, "thresholds": { "vesical_pressure_epsilon": -1.0 } }"#,
    )
    .unwrap();

    assert!(load_from(&path).is_err());

    let bad = UrodynConfig {
        thresholds: Thresholds {
            vesical_pressure_epsilon: -1.0,
            ..Thresholds::default()
        },
        ..UrodynConfig::default()
    };
    assert!(save_to(&path, &bad).is_err());
}
