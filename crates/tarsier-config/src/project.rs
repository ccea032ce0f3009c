//! Project Configuration (tarsier.toml)
//!
//! Handles project-level configuration stored in `tarsier.toml` at the project root.

use crate::{ConfigError, ConfigResult, DEFAULT_PRELUDE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Project configuration from tarsier.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Standard library configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdlib: Option<StdlibConfig>,
}

/// `[stdlib]` section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct StdlibConfig {
    /// Helpers to install as globals (default: all of them)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prelude: Option<Vec<String>>,

    /// Integer overflow behavior of `+` (default: checked)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<OverflowMode>,
}

/// What integer `+` does when the result does not fit in 64 bits
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverflowMode {
    /// Report an integer overflow error. The host language itself wraps.
    #[default]
    Checked,
    /// Two's complement wrap-around
    Wrapping,
}

impl FromStr for OverflowMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "checked" => Ok(OverflowMode::Checked),
            "wrapping" => Ok(OverflowMode::Wrapping),
            other => Err(ConfigError::InvalidValue {
                field: "overflow".to_string(),
                reason: format!("expected \"checked\" or \"wrapping\", got \"{}\"", other),
            }),
        }
    }
}

impl fmt::Display for OverflowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowMode::Checked => write!(f, "checked"),
            OverflowMode::Wrapping => write!(f, "wrapping"),
        }
    }
}

impl ProjectConfig {
    /// Load project configuration from a file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::IoError(e)
            }
        })?;
        let config = Self::parse(&content).map_err(|e| match e {
            ConfigError::TomlParseError { error, .. } => ConfigError::TomlParseError {
                file: path.to_path_buf(),
                error,
            },
            other => other,
        })?;
        Ok(config)
    }

    /// Parse project configuration from TOML text and validate it
    pub fn parse(content: &str) -> ConfigResult<Self> {
        let config: ProjectConfig =
            toml::from_str(content).map_err(|error| ConfigError::TomlParseError {
                file: Path::new(crate::CONFIG_FILE_NAME).to_path_buf(),
                error,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(prelude) = self.stdlib.as_ref().and_then(|s| s.prelude.as_ref()) {
            for name in prelude {
                if !DEFAULT_PRELUDE.contains(&name.as_str()) {
                    return Err(ConfigError::ValidationError(format!(
                        "unknown prelude function '{}' (available: {})",
                        name,
                        DEFAULT_PRELUDE.join(", ")
                    )));
                }
            }
        }
        Ok(())
    }

    /// Configured overflow mode, if any
    pub fn overflow(&self) -> Option<OverflowMode> {
        self.stdlib.as_ref().and_then(|s| s.overflow)
    }

    /// Configured prelude, if any
    pub fn prelude(&self) -> Option<&[String]> {
        self.stdlib.as_ref().and_then(|s| s.prelude.as_deref())
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_empty_config_is_default() {
        let config = ProjectConfig::parse("").unwrap();
        assert_eq!(config, ProjectConfig::default());
        assert_eq!(config.overflow(), None);
        assert_eq!(config.prelude(), None);
    }

    #[test]
    fn test_parse_stdlib_section() {
        let config = ProjectConfig::parse(
            r#"
            [stdlib]
            prelude = ["map", "sum"]
            overflow = "wrapping"
            "#,
        )
        .unwrap();

        assert_eq!(config.overflow(), Some(OverflowMode::Wrapping));
        assert_eq!(
            config.prelude(),
            Some(&["map".to_string(), "sum".to_string()][..])
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ProjectConfig::parse("[stdlib]\nstrict = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParseError { .. }));
    }

    #[test]
    fn test_unknown_overflow_mode_rejected() {
        let err = ProjectConfig::parse("[stdlib]\noverflow = \"saturating\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParseError { .. }));
    }

    #[test]
    fn test_unknown_prelude_function_rejected() {
        let err = ProjectConfig::parse("[stdlib]\nprelude = [\"filter\"]\n").unwrap_err();
        insta::assert_snapshot!(
            err.to_string(),
            @"Invalid configuration: unknown prelude function 'filter' (available: map, reduce, sum)"
        );
    }

    #[rstest]
    #[case("checked", OverflowMode::Checked)]
    #[case("wrapping", OverflowMode::Wrapping)]
    #[case(" Wrapping ", OverflowMode::Wrapping)]
    #[case("CHECKED", OverflowMode::Checked)]
    fn test_overflow_mode_from_str(#[case] input: &str, #[case] expected: OverflowMode) {
        assert_eq!(input.parse::<OverflowMode>().unwrap(), expected);
    }

    #[rstest]
    #[case("nope")]
    #[case("")]
    #[case("saturating")]
    fn test_overflow_mode_from_str_rejects(#[case] input: &str) {
        assert!(input.parse::<OverflowMode>().is_err());
    }

    #[test]
    fn test_toml_roundtrip_keeps_stdlib_section() {
        let config = ProjectConfig {
            stdlib: Some(StdlibConfig {
                prelude: Some(vec!["reduce".to_string()]),
                overflow: Some(OverflowMode::Checked),
            }),
        };
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("[stdlib]"));
        assert_eq!(ProjectConfig::parse(&text).unwrap(), config);
    }
}
