//! `crepe.toml` configuration and tracing setup.

use std::path::{Path, PathBuf};
use std::sync::Once;

use crepe_build_model::SourceInputs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrepeConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Build outputs to classify, for integrations without a project model of their own.
    ///
    /// Relative paths are resolved against the directory holding the config file.
    #[serde(default)]
    pub inputs: Option<SourceInputs>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Either a plain level (`info`, `debug`, ...) or an `EnvFilter` directive string.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,

    /// Emit logs as JSON lines.
    #[serde(default)]
    pub json: bool,
}

/// Parent target of every event crepe emits (`crepe.source_files`, `crepe.maven`, ...).
pub const CREPE_TARGET: &str = "crepe";

/// Level applied to everything outside [`CREPE_TARGET`] when `level` is a plain level.
const OTHER_TARGETS_LEVEL: &str = "warn";

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_owned()
    }

    fn plain_level(level: &str) -> Option<&'static str> {
        match level.to_ascii_lowercase().as_str() {
            "trace" => Some("trace"),
            "debug" => Some("debug"),
            "info" => Some("info"),
            "warn" | "warning" => Some("warn"),
            "error" => Some("error"),
            "off" => Some("off"),
            _ => None,
        }
    }

    /// `EnvFilter` directives for the configured `level`.
    ///
    /// A plain level applies to crepe's own targets only (`info` becomes
    /// `warn,crepe=info`); anything else is passed through as a directive string.
    pub fn directives(&self) -> String {
        let level = self.level.trim();
        let level = if level.is_empty() { "info" } else { level };

        match Self::plain_level(level) {
            Some(level) => format!("{OTHER_TARGETS_LEVEL},{CREPE_TARGET}={level}"),
            None => level.to_owned(),
        }
    }

    /// The effective filter: [`Self::directives`] with `RUST_LOG` appended, so the
    /// environment wins on conflicting targets.
    ///
    /// Invalid directives fall back to the configured ones, then to `crepe=info`.
    pub fn env_filter(&self) -> tracing_subscriber::EnvFilter {
        use tracing_subscriber::EnvFilter;

        let directives = self.directives();
        let merged = std::env::var("RUST_LOG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(|value| format!("{directives},{}", value.trim()));

        merged
            .and_then(|merged| EnvFilter::try_new(merged).ok())
            .or_else(|| EnvFilter::try_new(&directives).ok())
            .unwrap_or_else(|| EnvFilter::new(format!("{CREPE_TARGET}=info")))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            json: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse toml config: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        // Keep the message only; the default `Display` embeds a snippet of the input.
        ConfigError::Toml(err.message().trim().to_owned())
    }
}

impl CrepeConfig {
    /// Load a config file from TOML, resolving `[inputs]` paths against its directory.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::load_from_str(&text)?;
        if let (Some(inputs), Some(dir)) = (config.inputs.as_mut(), path.parent()) {
            inputs.rebase(dir);
        }
        Ok(config)
    }

    /// Load a config from a TOML string. Relative paths are kept as written.
    pub fn load_from_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber, writing to stderr.
///
/// Only the first call in a process has an effect. If another subscriber was already
/// installed (for example by an embedding build tool), it is left in place.
pub fn init_tracing(config: &LoggingConfig) {
    TRACING_INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(config.env_filter());
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true);

        let installed = if config.json {
            registry.with(layer.json()).try_init()
        } else {
            registry.with(layer).try_init()
        };

        if installed.is_ok() {
            tracing::debug!(
                target: "crepe.config",
                filter = %config.level,
                json = config.json,
                "tracing initialized"
            );
        }
    });
}
