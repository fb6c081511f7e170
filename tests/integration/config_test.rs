use enginestats::core::config::Config;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.interval_ms, 1000);
    assert!(config.collect_gpu);
    assert_eq!(config.gpu_placeholder, "N/A");
}

#[test]
fn test_config_load_nonexistent_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.json");

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_config_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.json");

    let mut config = Config::default();
    config.set_value("interval_ms", "3000").unwrap();
    config.set_value("gpu_placeholder", "no gpu").unwrap();
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.interval_ms, 3000);
    assert_eq!(loaded.gpu_placeholder, "no gpu");
}

#[test]
fn test_config_corrupt_or_empty_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();

    let empty = temp_dir.path().join("empty.json");
    fs::write(&empty, "").unwrap();
    assert_eq!(Config::load_from(&empty).unwrap(), Config::default());

    let corrupt = temp_dir.path().join("corrupt.json");
    fs::write(&corrupt, "{ not json").unwrap();
    assert_eq!(Config::load_from(&corrupt).unwrap(), Config::default());
}

#[test]
fn test_config_partial_file_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("partial.json");
    fs::write(&path, r#"{ "collect_gpu": false, "alerts": { "cpu_warning": 50.0 } }"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(!config.collect_gpu);
    assert_eq!(config.interval_ms, 1000);
    assert_eq!(config.alerts.cpu_warning, 50.0);
    assert_eq!(config.alerts.cpu_critical, 90.0);
}
