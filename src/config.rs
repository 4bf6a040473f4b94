use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{CiSemverError, Result};

/// Name of the project-local configuration file
pub const CONFIG_FILE_NAME: &str = "cisemver.toml";

/// Represents the complete configuration for ci-semver.
///
/// Contains the environment variable names used to resolve inputs,
/// versioning defaults and the build version publish command.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub environment: EnvironmentConfig,

    #[serde(default)]
    pub versioning: VersioningConfig,

    #[serde(default)]
    pub publish: PublishConfig,
}

fn default_version_var() -> String {
    "APPVEYOR_BUILD_VERSION".to_string()
}

fn default_branch_var() -> String {
    "APPVEYOR_REPO_BRANCH".to_string()
}

/// Environment variables consulted when an input is not given explicitly.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EnvironmentConfig {
    #[serde(default = "default_version_var")]
    pub version_var: String,

    #[serde(default = "default_branch_var")]
    pub branch_var: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        EnvironmentConfig {
            version_var: default_version_var(),
            branch_var: default_branch_var(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersioningConfig {
    #[serde(default = "default_true")]
    pub include_build_metadata: bool,
}

impl Default for VersioningConfig {
    fn default() -> Self {
        VersioningConfig {
            include_build_metadata: true,
        }
    }
}

fn default_publish_program() -> String {
    "appveyor".to_string()
}

fn default_publish_args() -> Vec<String> {
    vec![
        "UpdateBuild".to_string(),
        "-Version".to_string(),
        "{version}".to_string(),
    ]
}

/// Command used to record the derived version as the build's display version.
///
/// `{version}` in any argument is replaced with the derived version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PublishConfig {
    #[serde(default = "default_publish_program")]
    pub program: String,

    #[serde(default = "default_publish_args")]
    pub args: Vec<String>,
}

impl Default for PublishConfig {
    fn default() -> Self {
        PublishConfig {
            program: default_publish_program(),
            args: default_publish_args(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `cisemver.toml` in current directory
/// 3. `.cisemver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses configuration from a TOML string
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(config_str).map_err(|e| CiSemverError::config(e.to_string()))?;

    if config.publish.program.trim().is_empty() {
        return Err(CiSemverError::config("publish.program must not be empty"));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.environment.version_var, "APPVEYOR_BUILD_VERSION");
        assert_eq!(config.environment.branch_var, "APPVEYOR_REPO_BRANCH");
        assert!(config.versioning.include_build_metadata);
        assert_eq!(config.publish.program, "appveyor");
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_partial_section() {
        let config = parse_config("[environment]\nbranch_var = \"BRANCH\"\n").unwrap();
        assert_eq!(config.environment.branch_var, "BRANCH");
        assert_eq!(config.environment.version_var, "APPVEYOR_BUILD_VERSION");
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = parse_config("[versioning\n").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_parse_empty_publish_program() {
        assert!(parse_config("[publish]\nprogram = \"\"\n").is_err());
    }
}
