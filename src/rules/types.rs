// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit type validation.
//!
//! [`TypeValidator`] checks one extracted type token against the configured
//! set of allowed types. It does no parsing, no normalisation, and no I/O;
//! a rejected token is an ordinary [`ValidationVerdict`], not an error.

use indexmap::IndexSet;
use std::fmt;

use crate::config::{Applicability, ResolvedConfig, RuleConfig, RuleOption, RuleSeverity};
use crate::error::ValidationError;

/// Name of the rule that configures the allowed types.
pub const TYPE_ENUM: &str = "type-enum";

/// The set of commit types a message may use.
///
/// Iteration follows insertion order; membership is a hash lookup and is
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AllowedTypeSet {
    types: IndexSet<String>,
}

impl AllowedTypeSet {
    /// Build the set from a list of tags. Duplicates keep their first position.
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact membership test.
    pub fn contains(&self, token: &str) -> bool {
        self.types.contains(token)
    }

    /// Tags in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for AllowedTypeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for AllowedTypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().collect::<Vec<_>>().join(", "))
    }
}

/// Outcome of validating a single type token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationVerdict {
    Valid,
    Invalid {
        offending_value: String,
        severity: RuleSeverity,
    },
}

impl ValidationVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationVerdict::Valid)
    }

    /// Convert the verdict for callers that propagate with `?`.
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self {
            ValidationVerdict::Valid => Ok(()),
            ValidationVerdict::Invalid {
                offending_value,
                severity,
            } => Err(ValidationError::InvalidCommitType {
                commit_type: offending_value,
                severity,
            }),
        }
    }
}

/// Classifies type tokens against an [`AllowedTypeSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeValidator {
    allowed: AllowedTypeSet,
    severity: RuleSeverity,
    applicability: Applicability,
}

impl TypeValidator {
    /// A validator that requires membership and reports failures as errors.
    pub fn new(allowed: AllowedTypeSet) -> Self {
        Self {
            allowed,
            severity: RuleSeverity::Error,
            applicability: Applicability::Always,
        }
    }

    /// Build a validator from a `type-enum` rule entry.
    ///
    /// Returns `None` when the entry does not carry a list of types.
    pub fn from_rule(rule: &RuleConfig) -> Option<Self> {
        let types = match rule.options {
            Some(RuleOption::List(ref types)) => types,
            _ => return None,
        };

        Some(Self {
            allowed: AllowedTypeSet::new(types.iter().cloned()),
            severity: rule.severity,
            applicability: rule.applicability,
        })
    }

    /// Build the validator for a resolved configuration, if `type-enum` is
    /// enabled in it.
    pub fn from_config(config: &ResolvedConfig) -> Option<Self> {
        config
            .rule(TYPE_ENUM)
            .filter(|rule| rule.is_enabled())
            .and_then(Self::from_rule)
    }

    pub fn allowed_types(&self) -> &AllowedTypeSet {
        &self.allowed
    }

    pub fn severity(&self) -> RuleSeverity {
        self.severity
    }

    pub fn applicability(&self) -> Applicability {
        self.applicability
    }

    /// Classify a single type token.
    pub fn validate(&self, type_token: &str) -> ValidationVerdict {
        if self.applicability.holds(self.allowed.contains(type_token)) {
            ValidationVerdict::Valid
        } else {
            ValidationVerdict::Invalid {
                offending_value: type_token.to_string(),
                severity: self.severity,
            }
        }
    }
}
