pub mod config;
pub mod file_writer;
pub mod formatter;

use anyhow::{Context, Result};
use config::LoggingConfig;
use formatter::LogFormat;
use std::path::PathBuf;
use tracing::Subscriber;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

fn fmt_layer<S, W>(format: LogFormat, writer: W, ansi: bool) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(ansi)
        .with_timer(fmt::time::ChronoUtc::rfc_3339());

    match format {
        LogFormat::Text => layer.boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

/// Initialize logging system with the given configuration
///
/// Console output goes to stderr so that stdout stays free for command output.
pub fn init(config: LoggingConfig) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

    // `config.level` already reflects RUST_LOG when no flag overrode it
    let env_filter = EnvFilter::try_new(&config.level)
        .with_context(|| format!("Invalid log level: {}", config.level))?;

    let console_layer = config
        .console
        .then(|| fmt_layer(config.format, std::io::stderr, true));

    let file_layer = match &config.file {
        Some(log_file) => {
            let file_writer = file_writer::FileWriter::open(log_file.clone())?;
            Some(fmt_layer(config.format, file_writer, false))
        }
        None => None,
    };

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install global tracing subscriber")?;

    Ok(())
}

/// Initialize logging with default configuration (RUST_LOG, then `info`)
pub fn init_default() -> Result<()> {
    init(LoggingConfig::default())
}

/// Initialize logging from environment variables and CLI arguments
///
/// CLI arguments win over the environment; `verbose` forces `debug`.
pub fn init_from_args(
    log_level: Option<String>,
    log_file: Option<PathBuf>,
    log_format: Option<LogFormat>,
    verbose: bool,
) -> Result<()> {
    let level = if verbose {
        "debug".to_string()
    } else {
        log_level
            .unwrap_or_else(|| std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
    };

    let file = log_file.or_else(|| std::env::var(config::LOG_FILE_ENV).ok().map(PathBuf::from));

    let format = log_format.unwrap_or_else(config::format_from_env);

    init(LoggingConfig::new(level, file, true, format))
}
