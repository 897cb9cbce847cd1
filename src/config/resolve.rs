// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Preset resolution and rule merging.
//!
//! Resolution happens once, when the configuration is loaded: every entry in
//! `extends` is turned into a full rule table, the tables are overlaid in
//! order, and the local `rules` go on top. A later entry with the same rule
//! name replaces the earlier one outright.

use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{CclintError, ConfigError, Result};
use crate::rules::Case;

use super::loader::load_config_from;
use super::presets::resolve_preset;
use super::schema::{LintConfig, RuleConfig, RuleOption};

/// A configuration with every preset folded in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    /// Skip merge, revert and fixup commits.
    pub default_ignores: bool,

    /// The effective rule table.
    pub rules: IndexMap<String, RuleConfig>,
}

impl ResolvedConfig {
    /// Look up the effective entry for a rule.
    pub fn rule(&self, name: &str) -> Option<&RuleConfig> {
        self.rules.get(name)
    }

    /// Rules that are not disabled, in table order.
    pub fn enabled_rules(&self) -> impl Iterator<Item = (&str, &RuleConfig)> {
        self.rules
            .iter()
            .filter(|(_, rule)| rule.is_enabled())
            .map(|(name, rule)| (name.as_str(), rule))
    }
}

/// Resolve a loaded configuration into its effective rule table.
pub fn resolve_config(config: &LintConfig) -> Result<ResolvedConfig> {
    let mut stack = Vec::new();
    if let Some(ref source) = config.source {
        stack.push(canonical(source));
    }

    let rules = resolve_rules(config, &mut stack)?;
    validate_rules(&rules)?;

    tracing::debug!(rules = rules.len(), "Resolved configuration");

    Ok(ResolvedConfig {
        default_ignores: config.default_ignores,
        rules,
    })
}

/// Overlay `overlay` on top of `base`, entry by entry.
pub fn merge_rules(base: &mut IndexMap<String, RuleConfig>, overlay: IndexMap<String, RuleConfig>) {
    for (name, rule) in overlay {
        if base.contains_key(&name) {
            tracing::trace!(rule = %name, "Overriding inherited rule");
        }
        base.insert(name, rule);
    }
}

fn resolve_rules(
    config: &LintConfig,
    stack: &mut Vec<PathBuf>,
) -> Result<IndexMap<String, RuleConfig>> {
    let base_dir = config
        .source
        .as_deref()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut rules = IndexMap::new();

    for name in &config.extends {
        let inherited = if is_path_reference(name) {
            let path = base_dir.join(name);
            let key = canonical(&path);
            if stack.contains(&key) {
                return Err(CclintError::Config(ConfigError::ExtendsCycle { path }));
            }

            tracing::debug!("Extending configuration file {:?}", path);
            let parent = load_config_from(&path)?;

            stack.push(key);
            let resolved = resolve_rules(&parent, stack);
            stack.pop();
            resolved?
        } else {
            tracing::debug!("Extending preset {}", name);
            resolve_preset(name).ok_or_else(|| {
                CclintError::Config(ConfigError::UnknownPreset { name: name.clone() })
            })?
        };

        merge_rules(&mut rules, inherited);
    }

    merge_rules(&mut rules, config.rules.clone());
    Ok(rules)
}

fn is_path_reference(name: &str) -> bool {
    name.starts_with("./") || name.starts_with("../") || Path::new(name).is_absolute()
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Check that every enabled rule carries options of the right shape.
fn validate_rules(rules: &IndexMap<String, RuleConfig>) -> Result<()> {
    for (name, rule) in rules.iter().filter(|(_, rule)| rule.is_enabled()) {
        let options = rule.options.as_ref();

        let problem = if name.ends_with("-enum") {
            match options {
                Some(RuleOption::List(_)) => None,
                _ => Some("expected a list of values".to_string()),
            }
        } else if name.ends_with("-length") {
            match options.and_then(RuleOption::as_number) {
                Some(_) => None,
                None => Some("expected a number".to_string()),
            }
        } else if name.ends_with("-case") {
            match options.and_then(RuleOption::as_list) {
                Some(cases) => cases
                    .iter()
                    .find(|case| case.parse::<Case>().is_err())
                    .map(|case| format!("unknown case '{}'", case)),
                None => Some("expected a case name or a list of case names".to_string()),
            }
        } else if name == "subject-full-stop" {
            match options {
                None | Some(RuleOption::Text(_)) => None,
                _ => Some("expected a string".to_string()),
            }
        } else {
            None
        };

        if let Some(message) = problem {
            return Err(CclintError::Config(ConfigError::InvalidValue {
                key: format!("rules.{}", name),
                message,
            }));
        }
    }

    Ok(())
}
