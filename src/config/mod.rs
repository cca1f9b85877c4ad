// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for clint.
//!
//! This module handles loading, parsing, merging and validating
//! configuration. Configuration is read once at startup; a broken
//! configuration is reported before any commit message is linted.

pub mod default;
mod loader;
mod schema;

pub use loader::{find_config_file, find_config_file_from, load_config, merge_tables, parse_config};
pub use schema::*;
