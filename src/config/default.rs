// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The configuration shipped with cclint.
//!
//! Used when no configuration file is found, and written out by `cclint init`.

use indexmap::IndexMap;

use super::presets::CONVENTIONAL;
use super::schema::{Applicability, LintConfig, RuleConfig, RuleOption, RuleSeverity};

/// Commit types allowed by the shipped configuration, in display order.
pub const DEFAULT_TYPES: &[&str] = &[
    "build",
    "chore",
    "ci",
    "cosmetics",
    "docs",
    "feat",
    "fix",
    "perf",
    "refactor",
    "revert",
    "style",
    "test",
    "wip",
];

/// Get the default configuration: the conventional preset with an extended
/// `type-enum`.
pub fn default_config() -> LintConfig {
    let type_enum = RuleConfig::new(RuleSeverity::Error, Applicability::Always).with_options(
        RuleOption::List(DEFAULT_TYPES.iter().map(|t| t.to_string()).collect()),
    );

    let mut rules = IndexMap::new();
    rules.insert("type-enum".to_string(), type_enum);

    LintConfig {
        extends: vec![CONVENTIONAL.to_string()],
        rules,
        ..LintConfig::default()
    }
}

/// Render the default configuration as a TOML document.
pub fn example_config() -> &'static str {
    r#"# cclint configuration
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Presets to inherit rules from. Local rules below replace preset rules with
# the same name.
extends = ["@commitlint/config-conventional"]

# Skip merge, revert and fixup! commits.
default_ignores = true

# Each rule is [severity, applicability, options]:
#   severity      0 = disabled, 1 = warning, 2 = error
#   applicability "always" or "never"
[rules]
type-enum = [
    2,
    "always",
    [
        "build",
        "chore",
        "ci",
        "cosmetics",
        "docs",
        "feat",
        "fix",
        "perf",
        "refactor",
        "revert",
        "style",
        "test",
        "wip",
    ],
]
"#
}

/// Render the default configuration as a JSON document.
pub fn example_config_json() -> crate::error::Result<String> {
    use crate::error::ResultExt;

    serde_json::to_string_pretty(&default_config()).context("Failed to render configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.extends, vec![CONVENTIONAL]);
        assert_eq!(config.rules.len(), 1);

        let type_enum = &config.rules["type-enum"];
        assert_eq!(type_enum.severity, RuleSeverity::Error);
        assert_eq!(type_enum.applicability, Applicability::Always);
        assert_eq!(type_enum.options.as_ref().and_then(|o| o.as_list()).unwrap().len(), 13);
    }

    #[test]
    fn test_example_config_matches_default() {
        let parsed: LintConfig = toml::from_str(example_config()).expect("Example config should parse");
        assert_eq!(parsed, default_config());
    }

    #[test]
    fn test_example_json_matches_default() {
        let json = example_config_json().unwrap();
        let parsed: LintConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, default_config());
        assert!(json.contains("\"type-enum\""));
    }
}
