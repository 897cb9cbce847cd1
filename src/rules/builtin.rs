// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.
//!
//! Each rule states a condition for the `always` form of the rule; a rule
//! configured with `never` fails when the condition holds. Rules about a part
//! of the message that is absent pass, except the `*-empty` rules which exist
//! to catch exactly that.

use crate::commit::CommitMessage;
use crate::config::{Applicability, RuleConfig, RuleOption};

use super::case::Case;
use super::types::{TypeValidator, ValidationVerdict, TYPE_ENUM};

/// Trait for rules.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Check the commit message and return a failure message if the rule does
    /// not hold.
    fn check(&self, message: &CommitMessage, config: &RuleConfig) -> Option<String>;

    /// Get the rule name.
    fn name(&self) -> &str;
}

/// Names of every built-in rule.
pub const BUILTIN_RULES: &[&str] = &[
    "body-empty",
    "body-leading-blank",
    "body-max-line-length",
    "footer-empty",
    "footer-leading-blank",
    "footer-max-line-length",
    "header-max-length",
    "header-min-length",
    "header-trim",
    "scope-case",
    "scope-empty",
    "scope-enum",
    "subject-case",
    "subject-empty",
    "subject-full-stop",
    "subject-max-length",
    "type-case",
    "type-empty",
    TYPE_ENUM,
];

/// Look up a built-in rule by name.
///
/// `type-enum` is built from its configuration because it carries a
/// [`TypeValidator`]; it returns `None` when the entry has no type list.
pub fn builtin_rule(name: &str, config: &RuleConfig) -> Option<Box<dyn Rule>> {
    let rule: Box<dyn Rule> = match name {
        "body-empty" => Box::new(Empty::new(name, Part::Body)),
        "footer-empty" => Box::new(Empty::new(name, Part::Footer)),
        "scope-empty" => Box::new(Empty::new(name, Part::Scope)),
        "subject-empty" => Box::new(Empty::new(name, Part::Subject)),
        "type-empty" => Box::new(Empty::new(name, Part::Type)),
        "body-leading-blank" => Box::new(LeadingBlank::new(name, Part::Body)),
        "footer-leading-blank" => Box::new(LeadingBlank::new(name, Part::Footer)),
        "body-max-line-length" => Box::new(MaxLineLength::new(name, Part::Body)),
        "footer-max-line-length" => Box::new(MaxLineLength::new(name, Part::Footer)),
        "header-max-length" => Box::new(Length::max(name, Part::Header)),
        "header-min-length" => Box::new(Length::min(name, Part::Header)),
        "subject-max-length" => Box::new(Length::max(name, Part::Subject)),
        "scope-case" => Box::new(CaseRule::new(name, Part::Scope)),
        "subject-case" => Box::new(CaseRule::new(name, Part::Subject)),
        "type-case" => Box::new(CaseRule::new(name, Part::Type)),
        "header-trim" => Box::new(HeaderTrim),
        "scope-enum" => Box::new(ScopeEnum),
        "subject-full-stop" => Box::new(SubjectFullStop),
        TYPE_ENUM => Box::new(TypeEnum {
            validator: TypeValidator::from_rule(config)?,
        }),
        _ => return None,
    };
    Some(rule)
}

/// A part of the commit message a rule looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Header,
    Type,
    Scope,
    Subject,
    Body,
    Footer,
}

impl Part {
    fn label(self) -> &'static str {
        match self {
            Part::Header => "header",
            Part::Type => "type",
            Part::Scope => "scope",
            Part::Subject => "subject",
            Part::Body => "body",
            Part::Footer => "footer",
        }
    }

    fn get(self, message: &CommitMessage) -> Option<&str> {
        match self {
            Part::Header => Some(message.header.as_str()),
            Part::Type => message.commit_type.as_deref(),
            Part::Scope => message.scope.as_deref(),
            Part::Subject => message.subject.as_deref(),
            Part::Body => message.body.as_deref(),
            Part::Footer => message.footer.as_deref(),
        }
    }
}

fn must(applicability: Applicability) -> &'static str {
    match applicability {
        Applicability::Always => "must",
        Applicability::Never => "must not",
    }
}

/// `*-empty`: the part must (not) be empty.
#[derive(Debug)]
struct Empty {
    name: String,
    part: Part,
}

impl Empty {
    fn new(name: &str, part: Part) -> Self {
        Self {
            name: name.to_string(),
            part,
        }
    }
}

impl Rule for Empty {
    fn check(&self, message: &CommitMessage, config: &RuleConfig) -> Option<String> {
        let empty = self.part.get(message).map_or(true, |s| s.trim().is_empty());

        if config.applicability.holds(empty) {
            None
        } else {
            Some(match config.applicability {
                Applicability::Always => format!("{} must be empty", self.part.label()),
                Applicability::Never => format!("{} may not be empty", self.part.label()),
            })
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// `*-leading-blank`: the part must (not) be preceded by a blank line.
#[derive(Debug)]
struct LeadingBlank {
    name: String,
    part: Part,
}

impl LeadingBlank {
    fn new(name: &str, part: Part) -> Self {
        Self {
            name: name.to_string(),
            part,
        }
    }
}

impl Rule for LeadingBlank {
    fn check(&self, message: &CommitMessage, config: &RuleConfig) -> Option<String> {
        let blank = match self.part {
            Part::Footer => message.footer_leading_blank,
            _ => message.body_leading_blank,
        };

        // Only meaningful when something follows the header.
        let present = match self.part {
            Part::Footer => message.footer.is_some(),
            _ => message.body.is_some() || message.footer.is_some(),
        };

        if !present || config.applicability.holds(blank) {
            None
        } else {
            Some(format!(
                "{} {} have leading blank line",
                self.part.label(),
                must(config.applicability)
            ))
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// `*-max-line-length`: no line of the part may exceed the limit.
#[derive(Debug)]
struct MaxLineLength {
    name: String,
    part: Part,
}

impl MaxLineLength {
    fn new(name: &str, part: Part) -> Self {
        Self {
            name: name.to_string(),
            part,
        }
    }
}

impl Rule for MaxLineLength {
    fn check(&self, message: &CommitMessage, config: &RuleConfig) -> Option<String> {
        let max = config.options.as_ref()?.as_number()?;
        let text = self.part.get(message)?;

        let longest = text.lines().map(|line| line.chars().count()).max()?;
        if longest > max {
            Some(format!(
                "{}'s lines must not be longer than {} characters",
                self.part.label(),
                max
            ))
        } else {
            None
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// `*-max-length` / `*-min-length` on a single-line part.
#[derive(Debug)]
struct Length {
    name: String,
    part: Part,
    is_max: bool,
}

impl Length {
    fn max(name: &str, part: Part) -> Self {
        Self {
            name: name.to_string(),
            part,
            is_max: true,
        }
    }

    fn min(name: &str, part: Part) -> Self {
        Self {
            name: name.to_string(),
            part,
            is_max: false,
        }
    }
}

impl Rule for Length {
    fn check(&self, message: &CommitMessage, config: &RuleConfig) -> Option<String> {
        let limit = config.options.as_ref()?.as_number()?;
        let len = self.part.get(message)?.chars().count();

        let (fails, bound) = if self.is_max {
            (len > limit, "longer")
        } else {
            (len < limit, "shorter")
        };

        fails.then(|| {
            format!(
                "{} must not be {} than {} characters, current length is {}",
                self.part.label(),
                bound,
                limit,
                len
            )
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// `*-case`: the part must (not) be in one of the listed cases.
#[derive(Debug)]
struct CaseRule {
    name: String,
    part: Part,
}

impl CaseRule {
    fn new(name: &str, part: Part) -> Self {
        Self {
            name: name.to_string(),
            part,
        }
    }
}

impl Rule for CaseRule {
    fn check(&self, message: &CommitMessage, config: &RuleConfig) -> Option<String> {
        let text = self.part.get(message)?;
        // Digits and punctuation have no case.
        if !text.chars().any(char::is_alphabetic) {
            return None;
        }

        let names = config.options.as_ref().and_then(RuleOption::as_list)?;
        let cases: Vec<Case> = names.iter().filter_map(|name| name.parse().ok()).collect();

        let matches_any = cases.iter().any(|case| case.matches(text));
        if config.applicability.holds(matches_any) {
            None
        } else {
            Some(format!(
                "{} {} be {}",
                self.part.label(),
                must(config.applicability),
                names.join(", ")
            ))
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// `header-trim`: the header must not start or end with whitespace.
#[derive(Debug)]
struct HeaderTrim;

impl Rule for HeaderTrim {
    fn check(&self, message: &CommitMessage, _config: &RuleConfig) -> Option<String> {
        let header = &message.header;
        match (header.starts_with(char::is_whitespace), header.ends_with(char::is_whitespace)) {
            (false, false) => None,
            (true, true) => Some("header must not be surrounded by whitespace".to_string()),
            (true, false) => Some("header must not start with whitespace".to_string()),
            (false, true) => Some("header must not end with whitespace".to_string()),
        }
    }

    fn name(&self) -> &str {
        "header-trim"
    }
}

/// `scope-enum`: every scope must (not) be one of the listed values.
///
/// Multiple scopes may be separated with `/`, `\` or `,`.
#[derive(Debug)]
struct ScopeEnum;

impl Rule for ScopeEnum {
    fn check(&self, message: &CommitMessage, config: &RuleConfig) -> Option<String> {
        let scope = message.scope.as_deref()?;
        let allowed = config.options.as_ref().and_then(RuleOption::as_list)?;

        let passes = scope
            .split(['/', '\\', ','])
            .map(str::trim)
            .all(|s| config.applicability.holds(allowed.contains(&s)));

        if passes {
            None
        } else {
            Some(format!(
                "scope {} be one of [{}]",
                must(config.applicability),
                allowed.join(", ")
            ))
        }
    }

    fn name(&self) -> &str {
        "scope-enum"
    }
}

/// `subject-full-stop`: the subject must (not) end with the given character.
#[derive(Debug)]
struct SubjectFullStop;

impl Rule for SubjectFullStop {
    fn check(&self, message: &CommitMessage, config: &RuleConfig) -> Option<String> {
        let subject = message.subject.as_deref()?;
        let stop = config
            .options
            .as_ref()
            .and_then(RuleOption::as_text)
            .unwrap_or(".");

        if config.applicability.holds(subject.ends_with(stop)) {
            None
        } else {
            Some(match config.applicability {
                Applicability::Always => format!("subject must end with '{}'", stop),
                Applicability::Never => format!("subject may not end with '{}'", stop),
            })
        }
    }

    fn name(&self) -> &str {
        "subject-full-stop"
    }
}

/// `type-enum`: delegates to the [`TypeValidator`].
#[derive(Debug)]
struct TypeEnum {
    validator: TypeValidator,
}

impl Rule for TypeEnum {
    fn check(&self, message: &CommitMessage, _config: &RuleConfig) -> Option<String> {
        // A missing type is type-empty's business.
        let commit_type = message.commit_type.as_deref()?;

        match self.validator.validate(commit_type) {
            ValidationVerdict::Valid => None,
            ValidationVerdict::Invalid { offending_value, .. } => Some(format!(
                "type {} be one of {}, found '{}'",
                must(self.validator.applicability()),
                self.validator.allowed_types(),
                offending_value
            )),
        }
    }

    fn name(&self) -> &str {
        TYPE_ENUM
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{presets, RuleSeverity};

    fn conventional(name: &str) -> RuleConfig {
        presets::resolve_preset(presets::CONVENTIONAL).unwrap()[name].clone()
    }

    fn check(name: &str, raw: &str) -> Option<String> {
        let config = conventional(name);
        let rule = builtin_rule(name, &config).unwrap();
        rule.check(&CommitMessage::parse(raw).unwrap(), &config)
    }

    #[test]
    fn test_every_builtin_name_resolves() {
        let config = RuleConfig::new(RuleSeverity::Error, Applicability::Always)
            .with_options(RuleOption::List(vec!["feat".to_string()]));
        for name in BUILTIN_RULES {
            let rule = builtin_rule(name, &config).unwrap();
            assert_eq!(rule.name(), *name);
        }
        assert!(builtin_rule("no-such-rule", &config).is_none());
    }

    #[test]
    fn test_type_enum() {
        assert!(check("type-enum", "feat: add thing").is_none());
        let issue = check("type-enum", "hotfix: patch prod").unwrap();
        assert!(issue.contains("'hotfix'"));
        // Missing type is left to type-empty.
        assert!(check("type-enum", "no type here").is_none());
    }

    #[test]
    fn test_type_empty() {
        assert!(check("type-empty", "feat: add thing").is_none());
        assert_eq!(
            check("type-empty", "no type here").as_deref(),
            Some("type may not be empty")
        );
    }

    #[test]
    fn test_type_case() {
        assert!(check("type-case", "feat: add thing").is_none());
        assert!(check("type-case", "Feat: add thing").is_some());
    }

    #[test]
    fn test_subject_case() {
        assert!(check("subject-case", "feat: add thing").is_none());
        assert!(check("subject-case", "feat: add API support").is_none());
        assert!(check("subject-case", "feat: Add thing").is_some());
        assert!(check("subject-case", "feat: ADD THING").is_some());
        assert!(check("subject-case", "feat: 1.2.3").is_none());
    }

    #[test]
    fn test_subject_full_stop() {
        assert!(check("subject-full-stop", "fix: typo").is_none());
        assert_eq!(
            check("subject-full-stop", "fix: typo.").as_deref(),
            Some("subject may not end with '.'")
        );
    }

    #[test]
    fn test_header_max_length() {
        let long = format!("feat: {}", "a".repeat(100));
        let issue = check("header-max-length", &long).unwrap();
        assert!(issue.contains("current length is 106"));
        assert!(check("header-max-length", "feat: short").is_none());
    }

    #[test]
    fn test_header_trim() {
        assert!(check("header-trim", "feat: add thing").is_none());
        assert!(check("header-trim", "feat: add thing ").is_some());
    }

    #[test]
    fn test_body_leading_blank() {
        assert!(check("body-leading-blank", "fix: x\n\nbody").is_none());
        assert!(check("body-leading-blank", "fix: x\nbody").is_some());
        assert!(check("body-leading-blank", "fix: x").is_none());
    }

    #[test]
    fn test_footer_leading_blank() {
        assert!(check("footer-leading-blank", "fix: x\n\nbody\n\nRefs #1").is_none());
        assert!(check("footer-leading-blank", "fix: x\n\nRefs #1").is_none());
        assert!(check("footer-leading-blank", "fix: x\n\nbody\nRefs #1").is_some());
    }

    #[test]
    fn test_body_max_line_length() {
        let raw = format!("fix: x\n\n{}", "b".repeat(101));
        assert!(check("body-max-line-length", &raw).is_some());
        assert!(check("body-max-line-length", "fix: x\n\nshort body").is_none());
    }

    #[test]
    fn test_scope_enum() {
        let config = RuleConfig::new(RuleSeverity::Error, Applicability::Always).with_options(
            RuleOption::List(vec!["core".to_string(), "cli".to_string()]),
        );
        let rule = builtin_rule("scope-enum", &config).unwrap();

        let ok = CommitMessage::parse("feat(core/cli): x").unwrap();
        assert!(rule.check(&ok, &config).is_none());

        let bad = CommitMessage::parse("feat(core, api): x").unwrap();
        assert!(rule.check(&bad, &config).is_some());

        let none = CommitMessage::parse("feat: x").unwrap();
        assert!(rule.check(&none, &config).is_none());
    }

    #[test]
    fn test_scope_empty_always() {
        let config = RuleConfig::new(RuleSeverity::Error, Applicability::Always);
        let rule = builtin_rule("scope-empty", &config).unwrap();

        let scoped = CommitMessage::parse("feat(core): x").unwrap();
        assert_eq!(rule.check(&scoped, &config).as_deref(), Some("scope must be empty"));
    }

    #[test]
    fn test_header_min_length() {
        let config = RuleConfig::new(RuleSeverity::Error, Applicability::Always)
            .with_options(RuleOption::Number(20));
        let rule = builtin_rule("header-min-length", &config).unwrap();

        let short = CommitMessage::parse("fix: x").unwrap();
        let issue = rule.check(&short, &config).unwrap();
        assert!(issue.contains("shorter than 20"));
    }
}
