// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Letter-case styles used by the `*-case` rules.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// A letter-case style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    Lower,
    Upper,
    Camel,
    Kebab,
    Pascal,
    Sentence,
    Snake,
    Start,
}

impl Case {
    /// Configuration name of the case.
    pub fn as_str(&self) -> &'static str {
        match self {
            Case::Lower => "lower-case",
            Case::Upper => "upper-case",
            Case::Camel => "camel-case",
            Case::Kebab => "kebab-case",
            Case::Pascal => "pascal-case",
            Case::Sentence => "sentence-case",
            Case::Snake => "snake-case",
            Case::Start => "start-case",
        }
    }

    /// Check whether `text` is written in this case.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Case::Lower => text == text.to_lowercase(),
            Case::Upper => text == text.to_uppercase(),
            Case::Camel => !has_separator(text, &['-', '_']) && starts_with(text, char::is_lowercase),
            Case::Pascal => !has_separator(text, &['-', '_']) && starts_with(text, char::is_uppercase),
            Case::Kebab => text == text.to_lowercase() && !has_separator(text, &['_']),
            Case::Snake => text == text.to_lowercase() && !has_separator(text, &['-']),
            Case::Sentence => {
                let mut chars = text.chars();
                match chars.next() {
                    Some(first) if first.is_uppercase() => {
                        let rest = chars.as_str();
                        rest == rest.to_lowercase()
                    }
                    _ => false,
                }
            }
            Case::Start => text
                .split_whitespace()
                .all(|word| !starts_with(word, char::is_lowercase)),
        }
    }
}

fn has_separator(text: &str, separators: &[char]) -> bool {
    text.chars()
        .any(|c| c.is_whitespace() || separators.contains(&c))
}

fn starts_with(text: &str, pred: fn(char) -> bool) -> bool {
    text.chars().next().is_some_and(pred)
}

impl FromStr for Case {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lower-case" | "lowercase" => Ok(Case::Lower),
            "upper-case" | "uppercase" => Ok(Case::Upper),
            "camel-case" => Ok(Case::Camel),
            "kebab-case" => Ok(Case::Kebab),
            "pascal-case" => Ok(Case::Pascal),
            "sentence-case" | "sentencecase" => Ok(Case::Sentence),
            "snake-case" => Ok(Case::Snake),
            "start-case" => Ok(Case::Start),
            _ => Err(ConfigError::InvalidValue {
                key: "case".to_string(),
                message: format!("unknown case '{}'", s),
            }),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
