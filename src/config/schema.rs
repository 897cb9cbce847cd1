// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! The on-disk shape follows commitlint: an `extends` list of presets and a
//! `rules` table mapping rule names to `[severity, applicability, options]`.

use indexmap::IndexMap;
use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

use crate::error::ConfigError;

/// The main configuration structure, as read from a single file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Presets to inherit rules from, applied in order.
    pub extends: Vec<String>,

    /// Local rule overrides.
    pub rules: IndexMap<String, RuleConfig>,

    /// Skip merge, revert and fixup commits.
    #[serde(alias = "defaultIgnores")]
    pub default_ignores: bool,

    /// File this configuration was loaded from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            extends: Vec::new(),
            rules: IndexMap::new(),
            default_ignores: true,
            source: None,
        }
    }
}

impl LintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// How strictly a rule failure is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RuleSeverity {
    /// The rule is not evaluated.
    Disabled,
    /// Reported, does not reject the message.
    Warning,
    /// Reported, rejects the message.
    Error,
}

impl RuleSeverity {
    /// Numeric level used in configuration files.
    pub fn level(self) -> u8 {
        match self {
            RuleSeverity::Disabled => 0,
            RuleSeverity::Warning => 1,
            RuleSeverity::Error => 2,
        }
    }
}

impl TryFrom<u8> for RuleSeverity {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, ConfigError> {
        match value {
            0 => Ok(RuleSeverity::Disabled),
            1 => Ok(RuleSeverity::Warning),
            2 => Ok(RuleSeverity::Error),
            _ => Err(ConfigError::InvalidSeverity { value }),
        }
    }
}

impl From<RuleSeverity> for u8 {
    fn from(severity: RuleSeverity) -> Self {
        severity.level()
    }
}

impl fmt::Display for RuleSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleSeverity::Disabled => "disabled",
            RuleSeverity::Warning => "warning",
            RuleSeverity::Error => "error",
        };
        f.write_str(name)
    }
}

/// Whether a rule's condition must hold or must not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    #[default]
    Always,
    Never,
}

impl Applicability {
    /// Turn the raw condition into a pass/fail answer.
    pub fn holds(self, condition: bool) -> bool {
        match self {
            Applicability::Always => condition,
            Applicability::Never => !condition,
        }
    }
}

impl fmt::Display for Applicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Applicability::Always => f.write_str("always"),
            Applicability::Never => f.write_str("never"),
        }
    }
}

/// The third element of a rule tuple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleOption {
    Number(u64),
    Text(String),
    List(Vec<String>),
}

impl RuleOption {
    /// The option as a number, if it is one.
    pub fn as_number(&self) -> Option<usize> {
        match self {
            RuleOption::Number(n) => usize::try_from(*n).ok(),
            _ => None,
        }
    }

    /// The option as a list of strings. A single string is a one-item list.
    pub fn as_list(&self) -> Option<Vec<&str>> {
        match self {
            RuleOption::List(items) => Some(items.iter().map(String::as_str).collect()),
            RuleOption::Text(text) => Some(vec![text.as_str()]),
            RuleOption::Number(_) => None,
        }
    }

    /// The option as a single string, if it is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RuleOption::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for RuleOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleOption::Number(n) => write!(f, "{}", n),
            RuleOption::Text(text) => write!(f, "{}", text),
            RuleOption::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

/// A single rule entry: `[severity, applicability, options]`.
///
/// Applicability and options may be omitted; applicability then defaults to
/// `always`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConfig {
    pub severity: RuleSeverity,
    pub applicability: Applicability,
    pub options: Option<RuleOption>,
}

impl RuleConfig {
    /// Create a rule entry.
    pub fn new(severity: RuleSeverity, applicability: Applicability) -> Self {
        Self {
            severity,
            applicability,
            options: None,
        }
    }

    /// Attach options to the rule entry.
    pub fn with_options(mut self, options: RuleOption) -> Self {
        self.options = Some(options);
        self
    }

    /// Whether the rule is evaluated at all.
    pub fn is_enabled(&self) -> bool {
        self.severity != RuleSeverity::Disabled
    }
}

impl Serialize for RuleConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.options.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.severity)?;
        seq.serialize_element(&self.applicability)?;
        if let Some(ref options) = self.options {
            seq.serialize_element(options)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for RuleConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(RuleConfigVisitor)
    }
}

struct RuleConfigVisitor;

impl<'de> Visitor<'de> for RuleConfigVisitor {
    type Value = RuleConfig;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a rule tuple [severity, applicability, options]")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RuleConfig, A::Error> {
        let severity = seq
            .next_element::<RuleSeverity>()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let applicability = seq.next_element::<Applicability>()?.unwrap_or_default();
        let options = seq.next_element::<RuleOption>()?;

        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(4, &self));
        }

        Ok(RuleConfig {
            severity,
            applicability,
            options,
        })
    }
}
