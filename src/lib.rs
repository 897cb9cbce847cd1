// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cclint - Conventional commit message linter
//!
//! Lints commit messages against a commitlint-style configuration: a list of
//! presets to inherit from plus local rule overrides.
//!
//! # Features
//!
//! - **Type validation**: exact, case-sensitive check of the commit type
//!   against the configured allowed types
//! - **Preset inheritance**: `@commitlint/config-conventional` built in,
//!   local files can be extended too
//! - **Rule engine**: header, subject, body and footer rules with
//!   error/warning severities
//! - **Hook friendly**: reads `.git/COMMIT_EDITMSG` and strips git comments
//!
//! # Example
//!
//! ```no_run
//! use cclint::config::{resolve_config, LintConfig};
//! use cclint::rules::RuleEngine;
//!
//! let config = resolve_config(&LintConfig::load().unwrap()).unwrap();
//! let engine = RuleEngine::new(config);
//!
//! let result = engine.lint("feat(parser): accept trailing commas").unwrap();
//! assert!(result.is_valid());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod rules;

// Re-exports for convenience
pub use config::LintConfig;
pub use error::{CclintError, Result};
pub use rules::{TypeValidator, ValidationVerdict};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cclint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// `git describe` output at compile time (if available).
    pub const GIT_DESCRIBE: Option<&str> = option_env!("VERGEN_GIT_DESCRIBE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_DESCRIBE, GIT_SHA) {
            (Some(describe), _) if describe != VERSION => format!("{} ({})", VERSION, describe),
            (_, Some(sha)) => format!("{} ({})", VERSION, &sha[..7.min(sha.len())]),
            _ => VERSION.to_string(),
        }
    }
}
