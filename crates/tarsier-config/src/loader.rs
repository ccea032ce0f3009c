//! Configuration Loader
//!
//! Handles loading and merging configuration from multiple sources with proper precedence.

use crate::project::{OverflowMode, ProjectConfig};
use crate::{ConfigResult, CONFIG_FILE_NAME, DEFAULT_PRELUDE};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding `[stdlib] overflow`
pub const ENV_OVERFLOW: &str = "TARSIER_OVERFLOW";

/// Configuration loader
///
/// Loads configuration from multiple sources and merges them with proper precedence:
/// 1. Defaults - lowest priority
/// 2. Project config (./tarsier.toml) - overrides defaults
/// 3. Environment variables (TARSIER_*) - overrides project
#[derive(Debug, Default)]
pub struct ConfigLoader {}

/// Merged configuration result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Project configuration
    pub project: ProjectConfig,

    /// Project root directory (where tarsier.toml was found)
    pub project_root: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {}
    }

    /// Load configuration starting from the given directory
    ///
    /// Walks up the directory tree to find tarsier.toml. A missing file is not
    /// an error: defaults are used instead.
    pub fn load_from_directory(&self, start_dir: &Path) -> ConfigResult<Config> {
        let (project_root, project_config) = self.find_project_config(start_dir)?;
        let project_config = self.apply_env_overrides(project_config)?;

        debug!(
            root = ?project_root,
            overflow = ?project_config.overflow(),
            "loaded tarsier configuration"
        );

        Ok(Config {
            project: project_config,
            project_root,
        })
    }

    /// Load configuration from a specific project config file
    pub fn load_from_file(&self, config_path: &Path) -> ConfigResult<Config> {
        let project_config = ProjectConfig::load_from_file(config_path)?;
        let project_config = self.apply_env_overrides(project_config)?;

        debug!(path = %config_path.display(), "loaded tarsier configuration");

        Ok(Config {
            project: project_config,
            project_root: config_path.parent().map(|p| p.to_path_buf()),
        })
    }

    /// Find project configuration by walking up directory tree
    fn find_project_config(
        &self,
        start_dir: &Path,
    ) -> ConfigResult<(Option<PathBuf>, ProjectConfig)> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);

            if config_path.is_file() {
                let project_config = ProjectConfig::load_from_file(&config_path)?;
                return Ok((Some(current), project_config));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Ok((None, ProjectConfig::default())),
            }
        }
    }

    /// Apply environment variable overrides to project config
    ///
    /// Environment variables follow the pattern: TARSIER_<KEY>
    /// Example: TARSIER_OVERFLOW=wrapping
    fn apply_env_overrides(&self, mut config: ProjectConfig) -> ConfigResult<ProjectConfig> {
        if let Ok(overflow) = env::var(ENV_OVERFLOW) {
            let mode: OverflowMode = overflow.parse()?;
            config.stdlib.get_or_insert_with(Default::default).overflow = Some(mode);
        }

        Ok(config)
    }
}

impl Config {
    /// Effective overflow mode (env > project > default)
    pub fn overflow(&self) -> OverflowMode {
        self.project.overflow().unwrap_or_default()
    }

    /// Effective prelude (project > default)
    pub fn prelude(&self) -> Vec<&str> {
        match self.project.prelude() {
            Some(names) => names.iter().map(String::as_str).collect(),
            None => DEFAULT_PRELUDE.to_vec(),
        }
    }

    /// Get the project root directory
    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }
}
