use schemagen_core::logging::config::LoggingConfig;
use schemagen_core::logging::file_writer::FileWriter;
use schemagen_core::logging::formatter::LogFormat;
use std::io::Write;
use tempfile::TempDir;
use tracing_subscriber::fmt::MakeWriter;

#[test]
fn test_file_writer_appends_to_log_file() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs").join("schemagen.log");

    let writer = FileWriter::new(log_path.clone());
    writer.make_writer().write_all(b"first\n").unwrap();
    writer.make_writer().write_all(b"second\n").unwrap();

    let contents = std::fs::read_to_string(&log_path).unwrap();
    assert_eq!(contents, "first\nsecond\n");
}

#[test]
fn test_logging_config_defaults() {
    let config = LoggingConfig::new("debug".to_string(), None, true, LogFormat::Text);
    assert_eq!(config.level, "debug");
    assert!(config.console);
    assert!(config.file.is_none());
}

#[test]
fn test_json_format_produces_json_log_lines() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("schemagen.log");

    // The configured level must win over whatever the harness exports.
    std::env::remove_var("RUST_LOG");
    schemagen_core::logging::init(LoggingConfig::new(
        "info".to_string(),
        Some(log_path.clone()),
        false,
        LogFormat::Json,
    ))
    .unwrap();

    tracing::info!(component = "Module", "generated schema");

    let contents = std::fs::read_to_string(&log_path).unwrap();
    let line = contents.lines().next().expect("no log line written");
    let value: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(value["fields"]["message"], "generated schema");
    assert_eq!(value["fields"]["component"], "Module");
    assert_eq!(value["level"], "INFO");
}
