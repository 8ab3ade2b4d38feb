use disk_scheduler::prelude::*;
use std::fs;
use std::path::PathBuf;

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "disk-scheduler-{}-{}.json",
        name,
        std::process::id()
    ));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn default_config() {
    let config = ServerConfig::default();

    assert_eq!(config.bind_addr, "0.0.0.0:3000");
    assert!(config.workers >= 1);
    assert_eq!(config.max_requests, 10_000);
    assert_eq!(config.max_cylinders, 1_000_000);
    assert!(config.enable_metrics);
    assert!(config.validate().is_ok());
}

#[test]
fn builder_overrides() {
    let config = ServerConfig::new()
        .with_bind_addr("127.0.0.1:8080")
        .with_workers(2)
        .with_max_requests(50)
        .with_max_cylinders(5000)
        .with_metrics(false);

    assert_eq!(config.bind_addr, "127.0.0.1:8080");
    assert_eq!(config.workers, 2);
    assert_eq!(config.max_requests, 50);
    assert_eq!(config.max_cylinders, 5000);
    assert!(!config.enable_metrics);
}

#[test]
fn loads_partial_file() {
    let path = temp_config("partial", r#"{"bind_addr":"127.0.0.1:9000","max_requests":64}"#);
    let config = ServerConfig::from_file(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.bind_addr, "127.0.0.1:9000");
    assert_eq!(config.max_requests, 64);
    assert_eq!(config.max_cylinders, 1_000_000);
}

#[test]
fn rejects_invalid_file() {
    let path = temp_config("zero-workers", r#"{"workers":0}"#);
    let result = ServerConfig::from_file(&path);
    fs::remove_file(&path).ok();
    assert!(matches!(result, Err(SchedulerError::Config(_))));

    let path = temp_config("garbage", "not json");
    let result = ServerConfig::from_file(&path);
    fs::remove_file(&path).ok();
    assert!(matches!(result, Err(SchedulerError::Json(_))));
}

#[test]
fn missing_file_is_config_error() {
    let result = ServerConfig::from_file("/nonexistent/disk-scheduler.json");
    assert!(matches!(result, Err(SchedulerError::Config(_))));
}

#[test]
fn config_json_round_trip() {
    let config = ServerConfig::new().with_workers(3);
    let json = serde_json::to_string(&config).unwrap();
    let parsed: ServerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}
