// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::CommitMessage;
use crate::config::{ResolvedConfig, RuleConfig};
use crate::error::Result;

use super::builtin::{builtin_rule, Rule};
use super::ignore::is_ignored;
use super::types::TypeValidator;
use super::validator::{ValidationIssue, ValidationResult};

/// A rule together with the configuration it runs with.
#[derive(Debug)]
struct ConfiguredRule {
    rule: Box<dyn Rule>,
    config: RuleConfig,
}

/// Rule engine for validating commit messages.
///
/// Built once from a resolved configuration; validation borrows the engine
/// immutably, so one engine can check any number of messages.
#[derive(Debug)]
pub struct RuleEngine {
    rules: Vec<ConfiguredRule>,
    type_validator: Option<TypeValidator>,
    default_ignores: bool,
}

impl RuleEngine {
    /// Create a new rule engine with the given configuration.
    pub fn new(config: ResolvedConfig) -> Self {
        let mut rules = Vec::new();

        for (name, rule_config) in config.enabled_rules() {
            match builtin_rule(name, rule_config) {
                Some(rule) => rules.push(ConfiguredRule {
                    rule,
                    config: rule_config.clone(),
                }),
                None => tracing::debug!(rule = name, "Unsupported rule, skipping"),
            }
        }

        tracing::debug!(rules = rules.len(), "Rule engine ready");

        Self {
            rules,
            type_validator: TypeValidator::from_config(&config),
            default_ignores: config.default_ignores,
        }
    }

    /// Add a custom rule to the engine.
    pub fn add_rule(&mut self, rule: Box<dyn Rule>, config: RuleConfig) {
        self.rules.push(ConfiguredRule { rule, config });
    }

    /// The validator for the commit type, if `type-enum` is enabled.
    pub fn type_validator(&self) -> Option<&TypeValidator> {
        self.type_validator.as_ref()
    }

    /// Names of the rules the engine will evaluate, in order.
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.rule.name())
    }

    /// Validate a parsed commit message.
    pub fn validate(&self, message: &CommitMessage) -> ValidationResult {
        let mut result = ValidationResult::new(message.raw.clone());

        for configured in &self.rules {
            if let Some(text) = configured.rule.check(message, &configured.config) {
                result.push(ValidationIssue {
                    rule: configured.rule.name().to_string(),
                    message: text,
                    level: configured.config.severity,
                    line: Some(issue_line(configured.rule.name(), message)),
                });
            }
        }

        result
    }

    /// Parse and validate a raw commit message.
    pub fn lint(&self, message: &str) -> Result<ValidationResult> {
        let parsed = CommitMessage::parse(message)?;

        if self.default_ignores && is_ignored(&parsed.header) {
            tracing::debug!("Message matches a default ignore pattern");
            return Ok(ValidationResult::ignored(parsed.raw));
        }

        Ok(self.validate(&parsed))
    }
}

/// First line of the part of the message a rule is about.
fn issue_line(rule: &str, message: &CommitMessage) -> usize {
    let first_line_of = |needle: Option<&str>| {
        needle
            .and_then(|n| n.lines().next())
            .and_then(|first| message.raw.lines().position(|line| line == first))
            .map_or(1, |i| i + 1)
    };

    if rule.starts_with("body-") {
        first_line_of(message.body.as_deref())
    } else if rule.starts_with("footer-") {
        first_line_of(message.footer.as_deref())
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        default_config, parse_config, resolve_config, Applicability, RuleOption, RuleSeverity,
    };

    fn default_engine() -> RuleEngine {
        RuleEngine::new(resolve_config(&default_config()).unwrap())
    }

    fn engine_for(toml: &str) -> RuleEngine {
        RuleEngine::new(resolve_config(&parse_config(toml).unwrap()).unwrap())
    }

    #[test]
    fn test_rule_engine_validate() {
        let result = default_engine().lint("feat(core): add new feature").unwrap();
        assert!(result.is_valid(), "{:?}", result.errors);
        assert_eq!(result.issue_count(), 0);
    }

    #[test]
    fn test_project_types_are_accepted() {
        let engine = default_engine();
        for header in ["wip: half done", "cosmetics: tidy imports", "perf: cache lookups"] {
            assert!(engine.lint(header).unwrap().is_valid(), "{}", header);
        }
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result = default_engine().lint("hotfix: patch prod").unwrap();
        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].rule, "type-enum");
        assert_eq!(result.errors[0].level, RuleSeverity::Error);
    }

    #[test]
    fn test_wrong_case_type() {
        let result = default_engine().lint("Fix: handle empty input").unwrap();
        let rules: Vec<_> = result.errors.iter().map(|e| e.rule.as_str()).collect();
        assert!(rules.contains(&"type-enum"));
        assert!(rules.contains(&"type-case"));
    }

    #[test]
    fn test_non_conventional_header() {
        let result = default_engine().lint("update stuff").unwrap();
        let rules: Vec<_> = result.errors.iter().map(|e| e.rule.as_str()).collect();
        assert_eq!(rules, vec!["subject-empty", "type-empty"]);
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let result = default_engine().lint("fix: typo\nno blank line").unwrap();
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].rule, "body-leading-blank");
        assert_eq!(result.warnings[0].line, Some(2));
    }

    #[test]
    fn test_default_ignores() {
        let engine = default_engine();
        let result = engine.lint("Merge branch 'main' into dev").unwrap();
        assert!(result.ignored);
        assert!(result.is_valid());

        let engine = engine_for("extends = [\"conventional\"]\ndefault_ignores = false\n");
        let result = engine.lint("Merge branch 'main' into dev").unwrap();
        assert!(!result.ignored);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_default_ignores_skip_git_comments() {
        let result = default_engine()
            .lint("# Please enter the commit message\nMerge branch 'main' into dev\n")
            .unwrap();
        assert!(result.ignored);
        assert_eq!(result.input, "Merge branch 'main' into dev");
    }

    #[test]
    fn test_footer_without_leading_blank_warns() {
        let result = default_engine()
            .lint("feat: add api\n\nExplain the change.\nBREAKING CHANGE: drops v1")
            .unwrap();
        assert!(result.is_valid(), "{:?}", result.errors);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].rule, "footer-leading-blank");
        assert_eq!(result.warnings[0].line, Some(4));
    }

    #[test]
    fn test_disabled_type_enum() {
        let engine = engine_for("extends = [\"conventional\"]\n[rules]\ntype-enum = [0]\n");
        assert!(engine.type_validator().is_none());
        assert!(engine.rule_names().all(|name| name != "type-enum"));
        assert!(engine.lint("hotfix: patch prod").unwrap().is_valid());
    }

    #[test]
    fn test_type_enum_as_warning() {
        let engine = engine_for("[rules]\ntype-enum = [1, \"always\", [\"feat\"]]\n");
        let result = engine.lint("fix: x").unwrap();
        assert!(result.is_valid());
        assert_eq!(result.warnings[0].rule, "type-enum");
    }

    #[test]
    fn test_unknown_rules_are_skipped() {
        let engine = engine_for("[rules]\nsigned-off-by = [2, \"always\", \"Signed-off-by:\"]\n");
        assert_eq!(engine.rule_names().count(), 0);
        assert!(engine.lint("anything at all").unwrap().is_valid());
    }

    #[test]
    fn test_add_rule() {
        let mut engine = engine_for("");
        let config = RuleConfig::new(RuleSeverity::Error, Applicability::Always)
            .with_options(RuleOption::List(vec!["api".to_string()]));
        engine.add_rule(builtin_rule("scope-enum", &config).unwrap(), config);

        assert!(!engine.lint("feat(db): x").unwrap().is_valid());
        assert!(engine.lint("feat(api): x").unwrap().is_valid());
    }

    #[test]
    fn test_empty_message_is_an_error() {
        assert!(default_engine().lint("  \n\n").is_err());
    }
}
