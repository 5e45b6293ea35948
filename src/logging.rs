// ABOUTME: Logging configuration and structured logging setup for the recipe recommender
// ABOUTME: Configures log levels, formatters, and noise reduction for the HTTP stack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration. Logs are written to stderr so that recipe
//! output on stdout stays machine-readable.

use std::env;
use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::{Environment, LogLevel};

/// Service name reported in startup logs
pub const SERVICE_NAME: &str = "smartchef";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the `smartchef` targets
    pub level: LogLevel,
    /// Whether `level` was chosen explicitly rather than defaulted
    pub level_explicit: bool,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include span open/close events
    pub include_spans: bool,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for interactive terminal use
    Compact,
}

impl LogFormat {
    /// Parse from string with fallback to `Compact`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            level_explicit: false,
            format: LogFormat::Compact,
            include_location: false,
            include_spans: false,
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::Development,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let is_production = environment.is_production();

        let explicit_level = env::var("SMARTCHEF_LOG_LEVEL").ok();
        let level = explicit_level
            .as_deref()
            .map_or(LogLevel::Warn, LogLevel::from_str_or_default);

        let format = env::var("LOG_FORMAT").map_or(
            if is_production {
                LogFormat::Json
            } else {
                LogFormat::Compact
            },
            |s| LogFormat::from_str_or_default(&s),
        );

        Self {
            level,
            level_explicit: explicit_level.is_some(),
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Raise the level to debug, as requested by `--verbose`
    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.level = LogLevel::Debug;
            self.level_explicit = true;
        }
        self
    }

    /// Directives layered over the base filter
    ///
    /// Noise reduction for the HTTP stack is always applied. The `smartchef`
    /// targets get `level` only when `RUST_LOG` is unset or the level was
    /// chosen explicitly, so `RUST_LOG=smartchef=trace` is not overridden by
    /// the default.
    fn directives(&self, rust_log_set: bool) -> Vec<String> {
        let mut directives = vec![
            "hyper=warn".to_owned(),
            "hyper_util=warn".to_owned(),
            "reqwest=warn".to_owned(),
        ];
        if !rust_log_set || self.level_explicit {
            directives.push(format!("smartchef={}", self.level));
            directives.push(format!("smartchef_core={}", self.level));
        }
        directives
    }

    fn env_filter(&self) -> EnvFilter {
        let rust_log = env::var("RUST_LOG").ok();
        let base = rust_log
            .as_deref()
            .map_or_else(|| EnvFilter::new("warn"), EnvFilter::new);

        self.directives(rust_log.is_some())
            .iter()
            .fold(base, |filter, directive| {
                filter.add_directive(
                    directive
                        .parse()
                        .unwrap_or_else(|_| tracing::Level::WARN.into()),
                )
            })
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events)
                    .json();
                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .pretty()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events);
                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE);
                registry.with(compact_layer).try_init()?;
            }
        }

        info!(
            service.name = SERVICE_NAME,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "SmartChef starting up"
        );

        Ok(())
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
