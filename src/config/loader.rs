// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{CclintError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::default::default_config;
use super::schema::LintConfig;

/// Configuration file names to search for, in order of priority.
pub const CONFIG_FILES: &[&str] = &[".commitlintrc.toml", ".commitlintrc.json", "commitlint.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if let Some(found) = find_in_dir(&current) {
            return Some(found);
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        if let Some(found) = find_in_dir(&home) {
            return Some(found);
        }
    }

    // XDG config directory
    let user_config = dirs::config_dir()?.join("cclint").join("config.toml");
    user_config.exists().then_some(user_config)
}

fn find_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load configuration from the default locations.
///
/// Falls back to the shipped configuration when no file is found.
pub fn load_config() -> Result<LintConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(default_config())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<LintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CclintError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CclintError::Config(ConfigError::ParseError {
            message: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;

    let mut config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => parse_config(&content)?,
        Some("json") => parse_config_json(&content)?,
        _ => {
            return Err(CclintError::Config(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }))
        }
    };

    config.source = Some(path.to_path_buf());
    Ok(config)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<LintConfig> {
    toml::from_str(content).map_err(|e| {
        CclintError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

/// Parse configuration from a JSON string.
pub fn parse_config_json(content: &str) -> Result<LintConfig> {
    serde_json::from_str(content).map_err(|e| {
        CclintError::Config(ConfigError::ParseError {
            message: format!("Failed to parse JSON: {}", e),
        })
    })
}
