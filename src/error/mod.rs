// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for cclint.
//!
//! Lint findings are not errors: a commit message that breaks a rule produces
//! a [`crate::rules::ValidationResult`]. The types here cover the things that
//! stop a lint run from happening at all (bad configuration, unreadable input)
//! and the final "this message was rejected" outcome reported by the CLI.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::RuleSeverity;

/// The main error type for cclint operations.
#[derive(Error, Debug)]
pub enum CclintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Commit message errors
    #[error("Commit error: {0}")]
    Commit(#[from] CommitError),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Unsupported configuration format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Invalid rule severity {value} (expected 0, 1 or 2)")]
    InvalidSeverity { value: u8 },

    #[error("Unknown preset: '{name}'")]
    UnknownPreset { name: String },

    #[error("Configuration extends itself through '{path}'")]
    ExtendsCycle { path: PathBuf },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Commit message errors.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Empty commit message")]
    EmptyMessage,

    #[error("Failed to read commit message from {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },
}

/// Validation outcomes surfaced as errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid commit type: '{commit_type}' ({severity})")]
    InvalidCommitType {
        commit_type: String,
        severity: RuleSeverity,
    },

    #[error("Commit message rejected: {errors} errors, {warnings} warnings")]
    Rejected { errors: usize, warnings: usize },
}

/// Result type alias for cclint operations.
pub type Result<T> = std::result::Result<T, CclintError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CclintError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/.commitlintrc.toml"),
        };
        assert!(err.to_string().contains("/path/to/.commitlintrc.toml"));
    }

    #[test]
    fn test_invalid_commit_type_display() {
        let err = ValidationError::InvalidCommitType {
            commit_type: "hotfix".to_string(),
            severity: RuleSeverity::Error,
        };
        assert_eq!(err.to_string(), "Invalid commit type: 'hotfix' (error)");
    }

    #[test]
    fn test_cclint_error_from_config_error() {
        let config_err = ConfigError::UnknownPreset {
            name: "@acme/config".to_string(),
        };
        let err: CclintError = config_err.into();
        assert!(err.to_string().starts_with("Configuration error:"));
        assert!(err.to_string().contains("@acme/config"));
    }

    #[test]
    fn test_result_ext_context() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk on fire",
        ));
        let err = res.context("reading stdin").unwrap_err();
        assert_eq!(err.to_string(), "reading stdin: disk on fire");
    }
}
