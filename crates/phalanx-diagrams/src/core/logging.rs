//! Logging infrastructure for diagram generation
//!
//! Structured logging uses the `tracing` crate; this module installs a
//! `tracing-subscriber` registry with a configurable level and format.
//!
//! # Usage
//!
//! ```rust,no_run
//! use phalanx_diagrams::core::logging::init_logging;
//!
//! // Initialize with default settings
//! init_logging(None, None).unwrap();
//! ```
//!
//! # Log Formats
//!
//! - `compact`: Single-line format, good for production
//! - `pretty`: Multi-line format with colors, good for development
//! - `json`: JSON format, good for log aggregation systems
//!
//! # Environment Variables
//!
//! - `PHALANX_DIAGRAMS_LOG_LEVEL`: Set log level (trace|debug|info|warn|error|off)
//! - `PHALANX_DIAGRAMS_LOG_FORMAT`: Set log format (compact|pretty|json)
//! - `RUST_LOG`: Standard `tracing-subscriber` filter, takes precedence for
//!   per-module filtering
//!
//! ```bash
//! # Show Graphviz invocations at debug level
//! RUST_LOG="info,phalanx_diagrams::graph::graphviz=debug" phalanx-diagrams render
//! ```

use std::str::FromStr;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Environment variable selecting the log level
pub const LOG_LEVEL_ENV: &str = "PHALANX_DIAGRAMS_LOG_LEVEL";

/// Environment variable selecting the log format
pub const LOG_FORMAT_ENV: &str = "PHALANX_DIAGRAMS_LOG_FORMAT";

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line format
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

/// Initialize the tracing subscriber with the given log level and format
///
/// * `level` - log level or filter directive. If None, uses
///   `PHALANX_DIAGRAMS_LOG_LEVEL`, then `RUST_LOG`, then `warn`.
/// * `format` - compact|pretty|json. If None, uses
///   `PHALANX_DIAGRAMS_LOG_FORMAT`, then `compact`.
///
/// Returns an error for an unknown format or if a global subscriber is
/// already installed.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = level
        .map(|s| s.to_string())
        .or_else(|| std::env::var(LOG_LEVEL_ENV).ok())
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "warn".to_string());

    let log_format = format
        .map(|s| s.to_string())
        .or_else(|| std::env::var(LOG_FORMAT_ENV).ok())
        .unwrap_or_else(|| "compact".to_string());

    let filter = if log_level == "off" {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&log_level))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let format =
        LogFormat::from_str(&log_format).map_err(|e| format!("Invalid log format: {}", e))?;

    Registry::default()
        .with(format_layer(format))
        .with(filter)
        .try_init()?;

    Ok(())
}

/// Formatting layer for `format`, writing to stderr
///
/// Stdout is reserved for DOT and outline output. `pretty` and `json` add targets, source locations and span events.
pub fn format_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    let detailed = format != LogFormat::Compact;
    let span_events = if detailed {
        FmtSpan::ACTIVE
    } else {
        FmtSpan::NONE
    };

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_target(detailed)
        .with_file(detailed)
        .with_line_number(detailed)
        .with_span_events(span_events);

    match format {
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Pretty => layer.pretty().boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
        assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("JSON").unwrap(), LogFormat::Json);
        assert!(LogFormat::from_str("invalid").is_err());
    }

    #[test]
    fn test_every_format_layer_accepts_events() {
        for format in [LogFormat::Compact, LogFormat::Pretty, LogFormat::Json] {
            let subscriber = Registry::default().with(format_layer(format));
            tracing::subscriber::with_default(subscriber, || {
                let span = tracing::info_span!("render_diagram", title = "Starting point");
                let _enter = span.enter();
                tracing::info!(nodes = 9, "Diagram built");
            });
        }
    }
}
