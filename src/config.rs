//! Configuration management for letterdesk.
//!
//! Configuration is an explicitly constructed value passed to whatever needs
//! it. Sources, lowest priority first:
//! 1. built-in defaults
//! 2. a config file (`--config`, or a `letterdesk.*` file discovered by
//!    `prefer` in its standard locations)
//! 3. `LETTERDESK_*` environment variables

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::extraction::DateOrder;
use crate::ocr::DEFAULT_DPI;

pub const ENV_OCR_LANGUAGE: &str = "LETTERDESK_OCR_LANGUAGE";
pub const ENV_DATE_ORDER: &str = "LETTERDESK_DATE_ORDER";
pub const ENV_PDF_DPI: &str = "LETTERDESK_PDF_DPI";

/// Name `prefer` searches for (`letterdesk.toml`, `letterdesk.yaml`, ...).
const CONFIG_NAME: &str = "letterdesk";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Text recognition settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrSettings {
    /// Tesseract language code (e.g. "eng", "fra", "eng+swa").
    pub language: String,
    /// Resolution used to rasterize PDF pages.
    pub pdf_dpi: u32,
}

impl Default for OcrSettings {
    fn default() -> Self {
        Self {
            language: "eng".to_string(),
            pdf_dpi: DEFAULT_DPI,
        }
    }
}

/// Field extraction settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    /// Reading of ambiguous numeric dates like `12/08/2025`.
    pub date_order: DateOrder,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ocr: OcrSettings,
    pub extraction: ExtractionSettings,
    /// File this config was loaded from, if any.
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a specific file path.
    /// The format is picked from the extension; unknown extensions are read as JSON.
    pub async fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let mut config = Self::parse(&contents, path)?;
        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
        let parse_error = |message: String| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        };

        match ext {
            "toml" => toml::from_str(contents).map_err(|e| parse_error(e.to_string())),
            "yaml" | "yml" => serde_yaml::from_str(contents).map_err(|e| parse_error(e.to_string())),
            _ => serde_json::from_str(contents).map_err(|e| parse_error(e.to_string())),
        }
    }

    /// Apply `LETTERDESK_*` overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|var| std::env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        if let Some(language) = lookup(ENV_OCR_LANGUAGE) {
            self.ocr.language = language.trim().to_string();
        }
        if let Some(value) = lookup(ENV_DATE_ORDER) {
            self.extraction.date_order =
                DateOrder::from_str(&value).ok_or(ConfigError::InvalidEnv {
                    var: ENV_DATE_ORDER,
                    value,
                })?;
        }
        if let Some(value) = lookup(ENV_PDF_DPI) {
            self.ocr.pdf_dpi = value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|dpi| *dpi > 0)
                .ok_or(ConfigError::InvalidEnv {
                    var: ENV_PDF_DPI,
                    value,
                })?;
        }
        Ok(self)
    }
}

/// Options for loading configuration.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides auto-discovery).
    pub config_path: Option<PathBuf>,
}

/// Ask `prefer` for the letterdesk config file in its standard locations.
///
/// Only the discovered path is used; the file itself is parsed with serde
/// so the format follows the extension.
pub async fn discover_config_path() -> Option<PathBuf> {
    match prefer::load(CONFIG_NAME).await {
        Ok(pref_config) => pref_config.source_path().map(|p| p.to_path_buf()),
        Err(e) => {
            tracing::debug!("No config file discovered: {}", e);
            None
        }
    }
}

/// Expand `~` in a user-supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(raw.as_ref()).as_ref())
}

/// Load configuration from the file named in `options`, or the first one
/// discovered, then apply environment overrides.
///
/// An explicit path that can't be read is an error; a missing discovered file
/// just means defaults.
pub async fn load_config(options: &LoadOptions) -> Result<Config, ConfigError> {
    let config = match options.config_path {
        Some(ref path) => Config::load_from_path(&expand_path(path)).await?,
        None => match discover_config_path().await {
            Some(path) => {
                tracing::debug!("Found config file: {}", path.display());
                Config::load_from_path(&path).await?
            }
            None => {
                tracing::debug!("No config file found, using defaults");
                Config::default()
            }
        },
    };

    config.with_env_overrides()
}
