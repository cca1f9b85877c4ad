// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from clint.toml.

use crate::error::{ConfigError, Result};
use crate::rules::{CaseStyle, RuleKind};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The main configuration structure for clint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClintConfig {
    /// Rule configuration.
    pub rules: RulesConfig,

    /// Ignore policy configuration.
    pub ignore: IgnoreConfig,

    /// Output configuration.
    pub ui: UiConfig,
}

impl ClintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Reject option values that would make evaluation meaningless.
    ///
    /// Called once at startup; a configuration that passes here never
    /// produces an error during evaluation.
    pub fn validate(&self) -> Result<()> {
        if self.rules.header_max_length == 0 {
            return Err(invalid("rules.header_max_length", "must be greater than zero"));
        }
        if self.rules.body_max_line_length == 0 {
            return Err(invalid(
                "rules.body_max_line_length",
                "must be greater than zero",
            ));
        }

        for verb in &self.rules.verbs.extra {
            if verb.trim().is_empty() || verb.split_whitespace().count() != 1 {
                return Err(invalid(
                    "rules.verbs.extra",
                    &format!("'{}' must be a single word", verb),
                ));
            }
        }

        if self.rules.verbs.replace_defaults && self.rules.verbs.extra.is_empty() {
            return Err(invalid(
                "rules.verbs.replace_defaults",
                "replacing the default verbs requires a non-empty 'extra' list",
            ));
        }

        for pattern in &self.ignore.patterns {
            Regex::new(pattern).map_err(|e| {
                invalid(
                    "ignore.patterns",
                    &format!("'{}' is not a valid regex: {}", pattern, e),
                )
            })?;
        }

        Ok(())
    }
}

fn invalid(key: &str, message: &str) -> crate::error::ClintError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    }
    .into()
}

/// Rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Maximum number of characters in the header line.
    pub header_max_length: usize,

    /// Maximum number of characters in any body line.
    pub body_max_line_length: usize,

    /// Case styles checked by `description-case`.
    pub disallowed_cases: Vec<CaseStyle>,

    /// Present-imperative verb allowlist settings.
    pub verbs: VerbsConfig,

    /// Per-rule severity and `when` overrides.
    pub levels: BTreeMap<RuleKind, RuleOverride>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            header_max_length: 72,
            body_max_line_length: 72,
            disallowed_cases: vec![
                CaseStyle::SentenceCase,
                CaseStyle::StartCase,
                CaseStyle::PascalCase,
                CaseStyle::UpperCase,
            ],
            verbs: VerbsConfig::default(),
            levels: BTreeMap::new(),
        }
    }
}

impl RulesConfig {
    /// Effective setting for a rule: its built-in default with any
    /// configured override applied on top.
    pub fn setting_for(&self, kind: RuleKind) -> RuleSetting {
        let mut setting = kind.default_setting();
        if let Some(over) = self.levels.get(&kind) {
            if let Some(severity) = over.severity {
                setting.severity = severity;
            }
            if let Some(when) = over.when {
                setting.when = when;
            }
        }
        setting
    }
}

/// Allowlist configuration for `description-tense`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VerbsConfig {
    /// Verbs accepted in addition to the built-in list.
    pub extra: Vec<String>,

    /// Use only `extra`, dropping the built-in list.
    pub replace_defaults: bool,
}

/// A partial rule setting as written in configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RuleOverride {
    pub severity: Option<Severity>,
    pub when: Option<When>,
}

/// Fully resolved setting for one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSetting {
    pub severity: Severity,
    pub when: When,
}

impl RuleSetting {
    pub const fn new(severity: Severity, when: When) -> Self {
        Self { severity, when }
    }

    pub fn is_enabled(&self) -> bool {
        self.severity != Severity::Off
    }
}

/// How a rule failure affects the overall result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The rule is not evaluated.
    Off,
    /// Failures are reported but do not fail the message.
    Warning,
    /// Failures fail the message.
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a rule's condition must hold (`always`) or must not (`never`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum When {
    Always,
    Never,
}

impl When {
    /// Turn the raw condition of a rule into pass/fail.
    pub fn apply(&self, condition: bool) -> bool {
        match self {
            When::Always => condition,
            When::Never => !condition,
        }
    }

    /// "must" or "must not", for rule messages.
    pub fn must(&self) -> &'static str {
        match self {
            When::Always => "must",
            When::Never => "must not",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            When::Always => "always",
            When::Never => "never",
        }
    }
}

impl std::fmt::Display for When {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ignore policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IgnoreConfig {
    /// Include the built-in merge/revert/fixup/version-bump predicates.
    pub defaults: bool,

    /// Literal substrings; a message containing any of them is skipped.
    pub contains: Vec<String>,

    /// Regular expressions tested against the whole message.
    pub patterns: Vec<String>,
}

impl Default for IgnoreConfig {
    fn default() -> Self {
        Self {
            defaults: true,
            contains: Vec::new(),
            patterns: Vec::new(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors in text output.
    pub color: bool,

    /// Whether to print passing rules in text output.
    pub show_passed: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_passed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClintConfig::default();
        assert_eq!(config.rules.header_max_length, 72);
        assert_eq!(config.rules.body_max_line_length, 72);
        assert_eq!(config.rules.disallowed_cases.len(), 4);
        assert!(config.ignore.defaults);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_header_length_rejected() {
        let mut config = ClintConfig::default();
        config.rules.header_max_length = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("rules.header_max_length"));
    }

    #[test]
    fn test_zero_body_length_rejected() {
        let mut config = ClintConfig::default();
        config.rules.body_max_line_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_ignore_pattern_rejected() {
        let mut config = ClintConfig::default();
        config.ignore.patterns = vec!["^(unclosed".to_string()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ignore.patterns"));
    }

    #[test]
    fn test_multi_word_verb_rejected() {
        let mut config = ClintConfig::default();
        config.rules.verbs.extra = vec!["set up".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_replace_defaults_needs_extra() {
        let mut config = ClintConfig::default();
        config.rules.verbs.replace_defaults = true;
        assert!(config.validate().is_err());

        config.rules.verbs.extra = vec!["add".to_string()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_setting_for_applies_override() {
        let mut config = RulesConfig::default();
        assert_eq!(
            config.setting_for(RuleKind::DescriptionCase),
            RuleSetting::new(Severity::Error, When::Never)
        );

        config.levels.insert(
            RuleKind::DescriptionCase,
            RuleOverride {
                severity: Some(Severity::Warning),
                when: None,
            },
        );
        assert_eq!(
            config.setting_for(RuleKind::DescriptionCase),
            RuleSetting::new(Severity::Warning, When::Never)
        );
    }

    #[test]
    fn test_when_apply() {
        assert!(When::Always.apply(true));
        assert!(!When::Always.apply(false));
        assert!(When::Never.apply(false));
        assert!(!When::Never.apply(true));
    }

    #[test]
    fn test_config_serialization() {
        let config = ClintConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("header_max_length"));
        assert!(toml_str.contains("sentence-case"));
    }
}
