//! Tarsier Configuration System
//!
//! Provides configuration for the Tarsier standard library:
//! - Project configuration (tarsier.toml)
//! - Environment variable overrides (TARSIER_*)
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded and merged in the following order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Project config (./tarsier.toml, searched upwards)
//! 3. Environment variables (TARSIER_*)
//!
//! # Example
//!
//! ```no_run
//! use tarsier_config::ConfigLoader;
//! use std::path::Path;
//!
//! let loader = ConfigLoader::new();
//! let config = loader.load_from_directory(Path::new(".")).unwrap();
//! println!("overflow: {}", config.overflow());
//! ```

pub mod loader;
pub mod project;

use std::path::PathBuf;
use thiserror::Error;

/// Name of the project configuration file
pub const CONFIG_FILE_NAME: &str = "tarsier.toml";

/// Helpers installed as globals when the config does not name any
pub const DEFAULT_PRELUDE: &[&str] = &["map", "reduce", "sum"];

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax in {file}: {error}")]
    TomlParseError {
        file: PathBuf,
        error: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

// Re-export main types
pub use loader::{Config, ConfigLoader};
pub use project::{OverflowMode, ProjectConfig, StdlibConfig};
