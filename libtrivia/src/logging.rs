//! Logging setup shared by trivia binaries
//!
//! The TUI owns stdout and stderr while it runs, so logs only make sense
//! when written to a file. Supports:
//! - Text, JSON, and pretty-printed output
//! - Environment variable configuration
//! - Per-module log level filtering through `RUST_LOG`
//!
//! # Examples
//!
//! ```no_run
//! use libtrivia::logging::{LoggingConfig, LogFormat};
//! use std::path::PathBuf;
//!
//! let config = LoggingConfig::new(LogFormat::Json, "info".to_string(), false)
//!     .with_file(PathBuf::from("/tmp/trivia.log"));
//! config.init().expect("log file should open");
//! ```

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output
    Text,
    /// Machine-parseable JSON (one JSON object per line)
    Json,
    /// Pretty-printed multi-line output
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
    pub verbose: bool,
    /// Destination file; logging stays off without one
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Create a new logging configuration
    ///
    /// # Arguments
    ///
    /// * `format` - Log output format (text, json, or pretty)
    /// * `level` - Minimum log level (error, warn, info, debug, trace)
    /// * `verbose` - If true, defaults to debug level
    pub fn new(format: LogFormat, level: String, verbose: bool) -> Self {
        Self {
            format,
            level,
            verbose,
            file: None,
        }
    }

    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }

    fn filter(&self) -> EnvFilter {
        let default_level = if self.verbose { "debug" } else { self.level.as_str() };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    }

    /// Initialize logging with the configured settings
    ///
    /// Returns `Ok(false)` when no file is configured and nothing was
    /// installed. Call once at the start of the program.
    ///
    /// # Errors
    ///
    /// Fails if the log file can't be opened.
    pub fn init(&self) -> std::io::Result<bool> {
        let path = match &self.file {
            Some(path) => path,
            None => return Ok(false),
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let writer = Mutex::new(file);
        let filter = self.filter();

        // try_init: a second call (tests, embedding) keeps the first subscriber
        let installed = match self.format {
            LogFormat::Json => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_current_span(true)
                .with_span_list(true)
                .flatten_event(true)
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .try_init()
                .is_ok(),
            LogFormat::Pretty => tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .try_init()
                .is_ok(),
            LogFormat::Text => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_level(true)
                .try_init()
                .is_ok(),
        };

        Ok(installed)
    }
}

impl Default for LoggingConfig {
    /// Settings from `TRIVIA_LOG_FORMAT`, `TRIVIA_LOG_LEVEL` and
    /// `TRIVIA_LOG_FILE`, falling back to text at info level with no file.
    fn default() -> Self {
        let format = std::env::var("TRIVIA_LOG_FORMAT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(LogFormat::Text);

        let level = std::env::var("TRIVIA_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let file = std::env::var("TRIVIA_LOG_FILE")
            .ok()
            .map(|p| PathBuf::from(shellexpand::tilde(&p).to_string()));

        Self {
            format,
            level,
            verbose: false,
            file,
        }
    }
}
