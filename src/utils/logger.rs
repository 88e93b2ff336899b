use std::error::Error;

use tracing::level_filters::LevelFilter;
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// The filter for `config.level`; `RUST_LOG` directives still apply on top.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from(config.level).into())
        .from_env_lossy()
}

/// Installs the global subscriber. Output goes to stderr so command output
/// on stdout stays clean. Fails if a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn Error + Send + Sync>> {
    // Dependencies such as reqwest still emit through `log`.
    LogTracer::init()?;

    let filter_layer = build_filter(config);
    match config.format {
        LogFormat::Json => {
            // One JSON object per event, fields flattened to the top level
            let subscriber = tracing_subscriber::registry().with(filter_layer).with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            );
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Console => {
            let subscriber = tracing_subscriber::registry()
                .with(filter_layer)
                .with(fmt::layer().pretty().with_writer(std::io::stderr));
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }
    Ok(())
}
