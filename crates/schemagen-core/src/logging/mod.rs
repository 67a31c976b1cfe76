pub mod config;
pub mod file_writer;
pub mod formatter;

use anyhow::Result;
use config::LoggingConfig;
use formatter::LogFormat;
use std::path::PathBuf;

/// Initialize the logging system with the given configuration.
///
/// Console and file layers are independent; either may be absent. Both
/// follow `config.format`; file output never carries ANSI escapes.
pub fn init(config: LoggingConfig) -> Result<()> {
    use tracing_subscriber::{
        fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let console_layer = config.console.then(|| {
        let layer = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(true);
        match config.format {
            LogFormat::Json => layer.json().boxed(),
            LogFormat::Text => layer.boxed(),
        }
    });

    let file_layer = config.file.as_ref().map(|log_file| {
        let layer = fmt::layer()
            .with_writer(file_writer::FileWriter::new(log_file.clone()))
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_timer(fmt::time::ChronoUtc::rfc_3339());
        match config.format {
            LogFormat::Json => layer.json().boxed(),
            LogFormat::Text => layer.boxed(),
        }
    });

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}

/// Initialize logging with the default configuration.
pub fn init_default() -> Result<()> {
    init(LoggingConfig::default())
}

/// Initialize logging from CLI arguments and environment variables.
pub fn init_from_args(
    log_level: Option<String>,
    log_file: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let level = if verbose {
        "debug".to_string()
    } else {
        log_level
            .unwrap_or_else(|| std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
    };

    let file = log_file.or_else(|| std::env::var("SCHEMAGEN_LOG_FILE").ok().map(PathBuf::from));

    init(LoggingConfig {
        level,
        file,
        console: true,
        format: LogFormat::Text,
    })
}
