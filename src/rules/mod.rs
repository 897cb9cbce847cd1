// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! [`TypeValidator`] is the core check: it classifies a commit type token
//! against the configured set. The engine runs it alongside the rest of the
//! rule table inherited from presets.

mod builtin;
mod case;
mod engine;
mod ignore;
mod types;
mod validator;

pub use builtin::{builtin_rule, Rule, BUILTIN_RULES};
pub use case::Case;
pub use engine::RuleEngine;
pub use ignore::is_ignored;
pub use types::{AllowedTypeSet, TypeValidator, ValidationVerdict, TYPE_ENUM};
pub use validator::{ValidationIssue, ValidationResult};
