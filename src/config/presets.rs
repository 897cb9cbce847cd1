// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in rule presets that a configuration can `extends`.

use indexmap::IndexMap;

use super::schema::{Applicability, RuleConfig, RuleOption, RuleSeverity};

/// Identifier of the conventional-commits preset.
pub const CONVENTIONAL: &str = "@commitlint/config-conventional";

/// Short aliases accepted in `extends`.
const ALIASES: &[(&str, &str)] = &[
    ("conventional", CONVENTIONAL),
    ("config-conventional", CONVENTIONAL),
];

/// Types allowed by the conventional preset.
pub const CONVENTIONAL_TYPES: &[&str] = &[
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

/// Resolve a preset identifier to its full rule table.
///
/// Returns `None` for identifiers that are not built in.
pub fn resolve_preset(name: &str) -> Option<IndexMap<String, RuleConfig>> {
    let canonical = ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, target)| *target)
        .unwrap_or(name);

    match canonical {
        CONVENTIONAL => Some(conventional_rules()),
        _ => None,
    }
}

fn list(items: &[&str]) -> RuleOption {
    RuleOption::List(items.iter().map(|s| s.to_string()).collect())
}

fn conventional_rules() -> IndexMap<String, RuleConfig> {
    use Applicability::{Always, Never};
    use RuleSeverity::{Error, Warning};

    let rules = [
        ("body-leading-blank", RuleConfig::new(Warning, Always)),
        (
            "body-max-line-length",
            RuleConfig::new(Error, Always).with_options(RuleOption::Number(100)),
        ),
        ("footer-leading-blank", RuleConfig::new(Warning, Always)),
        (
            "footer-max-line-length",
            RuleConfig::new(Error, Always).with_options(RuleOption::Number(100)),
        ),
        (
            "header-max-length",
            RuleConfig::new(Error, Always).with_options(RuleOption::Number(100)),
        ),
        ("header-trim", RuleConfig::new(Error, Always)),
        (
            "subject-case",
            RuleConfig::new(Error, Never).with_options(list(&[
                "sentence-case",
                "start-case",
                "pascal-case",
                "upper-case",
            ])),
        ),
        ("subject-empty", RuleConfig::new(Error, Never)),
        (
            "subject-full-stop",
            RuleConfig::new(Error, Never).with_options(RuleOption::Text(".".to_string())),
        ),
        (
            "type-case",
            RuleConfig::new(Error, Always).with_options(RuleOption::Text("lower-case".to_string())),
        ),
        ("type-empty", RuleConfig::new(Error, Never)),
        (
            "type-enum",
            RuleConfig::new(Error, Always).with_options(list(CONVENTIONAL_TYPES)),
        ),
    ];

    rules
        .into_iter()
        .map(|(name, rule)| (name.to_string(), rule))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_conventional() {
        let rules = resolve_preset(CONVENTIONAL).unwrap();
        assert_eq!(rules.len(), 12);
        assert_eq!(rules["type-enum"].severity, RuleSeverity::Error);
        assert_eq!(rules["body-leading-blank"].severity, RuleSeverity::Warning);
        assert_eq!(rules["subject-empty"].applicability, Applicability::Never);
    }

    #[test]
    fn test_resolve_alias() {
        assert_eq!(resolve_preset("conventional"), resolve_preset(CONVENTIONAL));
    }

    #[test]
    fn test_resolve_unknown() {
        assert!(resolve_preset("@commitlint/config-angular").is_none());
    }

    #[test]
    fn test_conventional_types_exclude_project_additions() {
        assert!(!CONVENTIONAL_TYPES.contains(&"wip"));
        assert!(!CONVENTIONAL_TYPES.contains(&"cosmetics"));
    }
}
