use crate::config::LoggingConfig;
use crate::constants::DEFAULT_LOG_DIRECTIVE;
use std::fs;
use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes logging: console on stderr and, when enabled, a daily rolling JSON file.
///
/// Keep the returned guard alive until exit so buffered file logs are flushed.
pub fn init_logging(config: &LoggingConfig, quiet: bool) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

    // stdout carries command output
    let console_layer = (!quiet).then(|| fmt::layer().with_writer(std::io::stderr));

    let dir_error = if config.file_enabled {
        fs::create_dir_all(&config.directory).err()
    } else {
        None
    };

    let (file_layer, guard) = if config.file_enabled && dir_error.is_none() {
        let file_appender = tracing_appender::rolling::daily(&config.directory, &config.file_name);
        let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
        (Some(fmt::layer().json().with_writer(non_blocking_writer)), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    if let Some(e) = dir_error {
        warn!(
            "File logging disabled: cannot create log directory '{}': {}",
            config.directory.display(),
            e
        );
    }

    guard
}
