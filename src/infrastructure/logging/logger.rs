//! Global tracing subscriber setup.

use super::config::{LogConfig, LogFormat};
use super::rotation::RotatingFileWriter;
use anyhow::{Context, Result};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Process-wide logger handle
///
/// Holds the background writer guard; dropping it flushes pending file
/// output. Keep it alive for as long as the process logs.
pub struct LoggerImpl {
    log_file: Option<PathBuf>,
    _guard: Option<WorkerGuard>,
}

impl LoggerImpl {
    /// Install the global subscriber described by `config`
    ///
    /// # Errors
    /// Returns an error if the level is invalid, the log file cannot be
    /// opened, or a global subscriber is already installed.
    pub fn init(config: &LogConfig) -> Result<Self> {
        let env_filter = build_filter(config)?;

        let (file_layer, guard) = match config.log_file {
            Some(ref path) => {
                let writer =
                    RotatingFileWriter::open(path, config.max_file_size, config.backup_count)
                        .with_context(|| format!("Failed to open log file {}", path.display()))?;
                let (non_blocking, guard) = tracing_appender::non_blocking(writer);

                // File output is always JSON, one object per line
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true);
                (Some(layer), Some(guard))
            }
            None => (None, None),
        };

        let stdout_json = (config.enable_stdout && config.format == LogFormat::Json).then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true)
                .with_writer(io::stdout)
                .with_current_span(true)
                .with_span_list(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
        });

        let stdout_pretty = (config.enable_stdout && config.format == LogFormat::Pretty).then(|| {
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_writer(io::stdout)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::CLOSE)
        });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(file_layer)
            .with(stdout_json)
            .with(stdout_pretty)
            .try_init()
            .context("Failed to install global tracing subscriber")?;

        tracing::info!(
            level = %config.level,
            format = ?config.format,
            log_file = ?config.log_file,
            max_file_size = config.max_file_size,
            backup_count = config.backup_count,
            "logger initialized"
        );

        Ok(Self {
            log_file: config.log_file.clone(),
            _guard: guard,
        })
    }

    /// Live log file, if file output is enabled
    pub fn log_file(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }
}

/// Level filter plus a `warn` cap for each quiet third-party target
///
/// `RUST_LOG` directives are honored on top of the configured level. A
/// quiet target that `RUST_LOG` already names keeps the user's level.
fn build_filter(config: &LogConfig) -> Result<EnvFilter> {
    let default_level = parse_log_level(&config.level)?;
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();

    let mut filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .parse_lossy(&env_directives);

    for target in config
        .quiet_targets
        .iter()
        .filter(|target| !names_target(&env_directives, target))
    {
        let directive = format!("{target}=warn")
            .parse::<Directive>()
            .with_context(|| format!("Invalid quiet target: {target}"))?;
        filter = filter.add_directive(directive);
    }

    Ok(filter)
}

/// Whether any comma-separated directive applies to `target` or a submodule
fn names_target(directives: &str, target: &str) -> bool {
    directives.split(',').any(|directive| {
        let name = directive
            .split(['=', '['])
            .next()
            .unwrap_or_default()
            .trim();
        name == target || name.starts_with(&format!("{target}::"))
    })
}

/// Parse log level string to Level
fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!("Invalid log level: {level}"),
    }
}
