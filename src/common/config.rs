//! Configuration for region-dist
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `REGION_DIST_*` environment variables. Command-line flags are applied on
//! top by the binary.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::error::{Error, Result};

/// Config file looked up when none is given explicitly
pub const DEFAULT_CONFIG_FILE: &str = "region-dist.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "REGION_DIST";

/// Global configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// PD endpoint(s), comma separated
    pub pd_url: String,

    /// HTTP request timeout
    pub request_timeout_secs: u64,

    /// Colorize terminal cells
    pub color: bool,

    /// Default export serialization
    pub export_format: ExportFormat,

    /// Directory export files are written to
    pub output_dir: PathBuf,

    /// Logging level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pd_url: "http://127.0.0.1:2379".to_string(),
            request_timeout_secs: 10,
            color: true,
            export_format: ExportFormat::Csv,
            output_dir: PathBuf::from("."),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl Config {
    /// Load configuration from `path` (or [`DEFAULT_CONFIG_FILE`]) and the
    /// environment. A missing file is not an error.
    ///
    /// Values are not validated here; call [`validate`](Self::validate) once
    /// command-line overrides have been applied.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        tracing::debug!("Loading config from {}", path.display());

        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.pd_url.trim().is_empty() {
            return Err(Error::InvalidConfig("pd_url cannot be empty".into()));
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::InvalidConfig(
                "request_timeout_secs must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Resolve an export destination: explicit paths win, otherwise
    /// `<output_dir>/<stem>.<ext>`.
    pub fn export_path(&self, explicit: Option<&Path>, stem: &str, format: ExportFormat) -> PathBuf {
        match explicit {
            Some(p) => p.to_path_buf(),
            None => self
                .output_dir
                .join(format!("{}.{}", stem, format.extension())),
        }
    }
}
