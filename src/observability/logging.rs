//! Logging configuration and redaction helpers.
//!
//! The client emits `tracing` events; applications that do not install their
//! own subscriber can call [`LoggingConfig::init`].

use regex::Regex;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log level enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl From<LogLevel> for tracing::level_filters::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::level_filters::LevelFilter::TRACE,
            LogLevel::Debug => tracing::level_filters::LevelFilter::DEBUG,
            LogLevel::Info => tracing::level_filters::LevelFilter::INFO,
            LogLevel::Warn => tracing::level_filters::LevelFilter::WARN,
            LogLevel::Error => tracing::level_filters::LevelFilter::ERROR,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
    /// Single-line output.
    Compact,
}

/// Subscriber configuration.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Minimum level.
    pub level: LogLevel,
    /// Output format.
    pub format: LogFormat,
    /// Whether to print the event target.
    pub include_target: bool,
}

impl LoggingConfig {
    /// Creates a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the level.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets the format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets whether targets are printed.
    pub fn with_target(mut self, include: bool) -> Self {
        self.include_target = include;
        self
    }

    /// Installs a global subscriber. `RUST_LOG` directives are honored.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn init(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let filter = EnvFilter::from_default_env().add_directive(
            tracing::level_filters::LevelFilter::from(self.level).into(),
        );

        match self.format {
            LogFormat::Pretty => tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(self.include_target))
                .try_init()?,
            LogFormat::Json => tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json())
                .try_init()?,
            LogFormat::Compact => tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().compact().with_target(self.include_target))
                .try_init()?,
        }

        Ok(())
    }
}

/// Field names whose values never reach the logs.
pub const SENSITIVE_FIELDS: &[&str] = &[
    "client_secret",
    "access_token",
    "authorization",
    "password",
];

fn sensitive_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        SENSITIVE_FIELDS
            .iter()
            .flat_map(|field| {
                [
                    format!(r#"(?i)("{}"\s*:\s*)"[^"]*""#, field),
                    format!(r#"(?i)(\b{}=)[^&\s]*"#, field),
                ]
            })
            .filter_map(|pattern| Regex::new(&pattern).ok())
            .collect()
    })
}

/// Replaces values of [`SENSITIVE_FIELDS`] in JSON or form-encoded text.
pub fn redact_sensitive(input: &str) -> String {
    sensitive_patterns()
        .iter()
        .fold(input.to_string(), |acc, re| {
            re.replace_all(&acc, |caps: &regex::Captures<'_>| {
                let prefix = &caps[1];
                if prefix.ends_with('=') {
                    format!("{}[REDACTED]", prefix)
                } else {
                    format!("{}\"[REDACTED]\"", prefix)
                }
            })
            .into_owned()
        })
}

/// Truncates `input` to at most `max` bytes on a char boundary.
pub fn truncate_body(input: &str, max: usize) -> &str {
    if input.len() <= max {
        return input;
    }
    let mut end = max;
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    &input[..end]
}
