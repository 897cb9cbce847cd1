// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cclint.
//!
//! This module handles loading configuration files, resolving the presets they
//! extend, and merging everything into one effective rule table.

pub mod default;
mod loader;
pub mod presets;
mod resolve;
mod schema;

pub use default::{default_config, DEFAULT_TYPES};
pub use loader::{
    find_config_file, find_config_file_from, load_config, load_config_from, parse_config,
    parse_config_json, CONFIG_FILES,
};
pub use resolve::{merge_rules, resolve_config, ResolvedConfig};
pub use schema::*;
