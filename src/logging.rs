//! Structured logging for TrainMeter
//!
//! Logs always go to stderr so rendered summaries on stdout stay clean.
//! An optional log file receives JSON lines, rotated daily when enabled.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: LogLevel,

    /// Output format (pretty, json, compact)
    pub format: LogFormat,

    /// Log file path (None for stderr only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,

    /// Rotate the log file daily
    pub rotation: bool,

    /// Include span information
    pub include_spans: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            format: LogFormat::Compact,
            file_path: None,
            rotation: false,
            include_spans: false,
        }
    }
}

/// Log level enum, ordered from least to most verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter(&self) -> String {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
        .to_string()
    }

    /// Apply repeated `-v` flags on top of `base`; flags never make logging quieter
    pub fn from_verbosity(verbose: u8, base: LogLevel) -> LogLevel {
        let requested = match verbose {
            0 => LogLevel::Error,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        };
        base.max(requested)
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format with colors (for development)
    Pretty,
    /// JSON format (for structured logging)
    Json,
    /// Compact format
    Compact,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

/// Initialize the logging system
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("trainmeter={}", config.level.to_filter()))
    });

    let stderr_layer = match config.format {
        LogFormat::Pretty => fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_line_number(true)
            .with_span_events(if config.include_spans {
                FmtSpan::ENTER | FmtSpan::CLOSE
            } else {
                FmtSpan::NONE
            })
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_current_span(config.include_spans)
            .with_span_list(config.include_spans)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed(),
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer);

    if let Some(file_path) = &config.file_path {
        let directory = file_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(directory)?;

        if config.rotation {
            let file_appender = tracing_appender::rolling::daily(
                directory,
                file_path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("trainmeter.log"),
            );

            let file_layer = fmt::layer()
                .json()
                .with_writer(file_appender)
                .with_target(true)
                .with_current_span(config.include_spans)
                .with_span_list(config.include_spans);

            subscriber.with(file_layer).try_init()?;
        } else {
            let file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file_path)?;

            let file_layer = fmt::layer()
                .json()
                .with_writer(file)
                .with_target(true)
                .with_current_span(config.include_spans)
                .with_span_list(config.include_spans);

            subscriber.with(file_layer).try_init()?;
        }
    } else {
        subscriber.try_init()?;
    }

    tracing::info!(
        level = ?config.level,
        format = ?config.format,
        file = ?config.file_path,
        "Logging initialized"
    );

    Ok(())
}
