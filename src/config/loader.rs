// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and merging.

use crate::error::{ClintError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::schema::ClintConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["clint.toml", ".clint.toml", ".config/clint.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }
    }

    user_config_file()
}

/// The per-user configuration file, if present.
fn user_config_file() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("clint").join("config.toml");
    path.is_file().then_some(path)
}

/// Load configuration from the default locations.
///
/// A project file found by [`find_config_file`] is layered over the
/// per-user file when both exist.
pub fn load_config() -> Result<ClintConfig> {
    let user = user_config_file();
    match (find_config_file(), user) {
        (Some(project), Some(user)) if project != user => {
            tracing::debug!("Layering {:?} over {:?}", project, user);
            let merged = merge_tables(read_table(&user)?, read_table(&project)?);
            config_from_table(merged)
        }
        (Some(path), _) => load_config_from(&path),
        (None, _) => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(ClintConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<ClintConfig> {
    config_from_table(read_table(path)?)
}

/// Parse configuration from a TOML string.
///
/// The parsed configuration is validated before it is returned.
pub fn parse_config(content: &str) -> Result<ClintConfig> {
    config_from_table(parse_table(content)?)
}

fn read_table(path: &Path) -> Result<toml::Table> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(ClintError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ClintError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_table(&content)
}

fn parse_table(content: &str) -> Result<toml::Table> {
    toml::from_str(content).map_err(|e| {
        ClintError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}

fn config_from_table(table: toml::Table) -> Result<ClintConfig> {
    let config: ClintConfig = toml::Value::Table(table).try_into().map_err(|e| {
        ClintError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;
    config.validate()?;
    Ok(config)
}

/// Keys whose lists are concatenated on merge instead of replaced.
const ADDITIVE_KEYS: &[&str] = &["rules.verbs.extra", "ignore.contains", "ignore.patterns"];

/// Merge two configuration tables, with the overlay taking precedence.
///
/// Only keys the overlay actually sets replace the base, so a project file
/// can restore a built-in default that a per-user file changed. Tables are
/// merged key by key; lists of additions (extra verbs, ignore substrings and
/// patterns) are concatenated without duplicates.
pub fn merge_tables(base: toml::Table, overlay: toml::Table) -> toml::Table {
    merge_at("", base, overlay)
}

fn merge_at(prefix: &str, mut base: toml::Table, overlay: toml::Table) -> toml::Table {
    for (key, value) in overlay {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        let merged = match (base.remove(&key), value) {
            (Some(toml::Value::Table(old)), toml::Value::Table(new)) => {
                toml::Value::Table(merge_at(&path, old, new))
            }
            (Some(toml::Value::Array(mut old)), toml::Value::Array(new))
                if ADDITIVE_KEYS.contains(&path.as_str()) =>
            {
                for item in new {
                    if !old.contains(&item) {
                        old.push(item);
                    }
                }
                toml::Value::Array(old)
            }
            (_, new) => new,
        };
        base.insert(key, merged);
    }
    base
}
