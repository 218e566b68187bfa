//! Configuration loading and typed config structures for the message board.
//!
//! The configuration lives in `msgboard-config.yaml`. Every field has a
//! default, so an empty file (or no file at all) yields a working server.
//!
//! Environment variables override YAML values:
//! - `MSGBOARD_HOST` overrides `server.host`
//! - `MSGBOARD_PORT` overrides `server.port`
//! - `MSGBOARD_ASSETS_DIR` overrides `assets.dir`
//! - `MSGBOARD_ENCODING` overrides `board.encoding`

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::encode::Encoding;
use crate::ring::DEFAULT_CAPACITY;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value was syntactically valid but not acceptable.
    #[error("invalid config value: {0}")]
    Invalid(String),
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level message board configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BoardConfig {
    /// Listen address.
    #[serde(default)]
    pub server: ServerConfig,

    /// Static asset locations.
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Message log settings.
    #[serde(default)]
    pub board: BoardSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BoardConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if an environment override is malformed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string and apply env overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config = Self::parse_yaml(yaml)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string without consulting the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yml maps an empty document to unit, not to an empty map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply `MSGBOARD_*` environment variable overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `MSGBOARD_PORT` or
    /// `MSGBOARD_ENCODING` cannot be parsed.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("MSGBOARD_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("MSGBOARD_PORT") {
            self.server.port = val
                .parse()
                .map_err(|e| ConfigError::Invalid(format!("MSGBOARD_PORT={val}: {e}")))?;
        }
        if let Ok(val) = std::env::var("MSGBOARD_ASSETS_DIR") {
            self.assets.dir = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("MSGBOARD_ENCODING") {
            self.board.encoding = val.parse()?;
        }
        Ok(())
    }
}

/// Listen address for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    #[serde(default = "default_host")]
    pub host: String,

    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Where the cached static assets are read from at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetsConfig {
    /// Directory containing the asset files.
    #[serde(default = "default_assets_dir")]
    pub dir: PathBuf,

    /// File served at `/`.
    #[serde(default = "default_index")]
    pub index: String,

    /// File served at `/style1.css`.
    #[serde(default = "default_style")]
    pub style: String,

    /// File served at `/favicon.ico`.
    #[serde(default = "default_favicon")]
    pub favicon: String,
}

impl AssetsConfig {
    /// Full path of the index page.
    pub fn index_path(&self) -> PathBuf {
        self.dir.join(&self.index)
    }

    /// Full path of the stylesheet.
    pub fn style_path(&self) -> PathBuf {
        self.dir.join(&self.style)
    }

    /// Full path of the favicon.
    pub fn favicon_path(&self) -> PathBuf {
        self.dir.join(&self.favicon)
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: default_assets_dir(),
            index: default_index(),
            style: default_style(),
            favicon: default_favicon(),
        }
    }
}

/// Message log settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoardSettings {
    /// Number of ring slots; one is kept free, so `capacity - 1` messages
    /// are live at most.
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// How snapshot fields are written.
    #[serde(default)]
    pub encoding: Encoding,

    /// Append a handful of demo messages at startup.
    #[serde(default)]
    pub seed_demo_messages: bool,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            encoding: Encoding::default(),
            seed_demo_messages: false,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8080
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}

fn default_index() -> String {
    "index.html".to_owned()
}

fn default_style() -> String {
    "style1.css".to_owned()
}

fn default_favicon() -> String {
    "favicon.ico".to_owned()
}

const fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_log_level() -> String {
    "info".to_owned()
}
