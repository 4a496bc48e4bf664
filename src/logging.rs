#[cfg(feature = "ssr")]
use anyhow::{Context, Result};
#[cfg(feature = "ssr")]
use clap::ValueEnum;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
#[cfg(feature = "ssr")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "ssr")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Single-line human readable output
    #[default]
    Compact,
    /// One JSON object per event
    Json,
}

#[cfg(feature = "ssr")]
pub fn init_logging(format: LogFormat) -> Result<()> {
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = match format {
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_ansi(false)
            .with_target(false)
            .boxed(),
        LogFormat::Json => fmt::layer().json().with_current_span(false).boxed(),
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    Ok(())
}

/// Routes `tracing` events to the browser console. A second call is a no-op.
#[cfg(feature = "hydrate")]
pub fn init_console_logging() {
    use tracing_web::MakeWebConsoleWriter;

    let fmt_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .without_time() // no std::time in wasm32-unknown-unknown
        .with_writer(MakeWebConsoleWriter::new());

    if tracing_subscriber::registry().with(fmt_layer).try_init().is_err() {
        tracing::debug!("console logging already initialized");
    }
}
