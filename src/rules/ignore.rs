// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Ignore policy: messages that are exempt from every rule.

use crate::commit::CommitMessage;
use crate::config::IgnoreConfig;
use crate::error::{ConfigError, Result};
use regex::Regex;

/// Built-in patterns for messages written by tools rather than people.
const DEFAULT_PATTERNS: &[&str] = &[
    // Merges made by git or a forge
    r"^Merge (pull request|branch|remote-tracking branch|tag) ",
    r"^Merged .+ (in|into) .+",
    r"^Automatic merge",
    r"^Auto-merged .+ into .+",
    // git revert
    r#"^Revert ""#,
    // git commit --fixup / --squash
    r"^(fixup|squash|amend)! ",
    // Version bumps
    r"(?i)^bump \S+ (from \S+ )?to v?\d+(\.\d+)*\S*[ \t]*(\n|$)",
    r"^v?\d+\.\d+\.\d+(-[\w.]+)?\s*$",
];

/// A single ignore test against the raw message text.
#[derive(Debug, Clone)]
pub enum IgnorePredicate {
    /// The message contains this literal substring.
    Contains(String),
    /// The message matches this regular expression.
    Pattern(Regex),
}

impl IgnorePredicate {
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            IgnorePredicate::Contains(needle) => raw.contains(needle.as_str()),
            IgnorePredicate::Pattern(regex) => regex.is_match(raw),
        }
    }

    /// Human-readable form, for logs.
    pub fn describe(&self) -> String {
        match self {
            IgnorePredicate::Contains(needle) => format!("contains '{}'", needle),
            IgnorePredicate::Pattern(regex) => format!("matches /{}/", regex.as_str()),
        }
    }
}

/// An ordered list of ignore predicates.
#[derive(Debug, Clone, Default)]
pub struct IgnorePolicy {
    predicates: Vec<IgnorePredicate>,
}

impl IgnorePolicy {
    /// A policy that ignores nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in predicates only.
    pub fn defaults() -> Self {
        let predicates = DEFAULT_PATTERNS
            .iter()
            .filter_map(|p| Regex::new(p).ok())
            .map(IgnorePredicate::Pattern)
            .collect();
        Self { predicates }
    }

    /// Build the policy described by configuration.
    pub fn from_config(config: &IgnoreConfig) -> Result<Self> {
        let mut policy = if config.defaults {
            Self::defaults()
        } else {
            Self::new()
        };

        for needle in &config.contains {
            policy.push(IgnorePredicate::Contains(needle.clone()));
        }
        for pattern in &config.patterns {
            let regex = Regex::new(pattern).map_err(|e| ConfigError::InvalidValue {
                key: "ignore.patterns".to_string(),
                message: format!("'{}' is not a valid regex: {}", pattern, e),
            })?;
            policy.push(IgnorePredicate::Pattern(regex));
        }

        Ok(policy)
    }

    /// Append a predicate; predicates are tested in insertion order.
    pub fn push(&mut self, predicate: IgnorePredicate) {
        self.predicates.push(predicate);
    }

    /// The first predicate matching the message, if any.
    pub fn matching(&self, message: &CommitMessage) -> Option<&IgnorePredicate> {
        self.predicates.iter().find(|p| p.matches(&message.raw))
    }

    pub fn is_ignored(&self, message: &CommitMessage) -> bool {
        self.matching(message).is_some()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ignored(policy: &IgnorePolicy, text: &str) -> bool {
        policy.is_ignored(&CommitMessage::parse(text))
    }

    #[test]
    fn test_default_patterns_compile() {
        assert_eq!(IgnorePolicy::defaults().len(), DEFAULT_PATTERNS.len());
    }

    #[test]
    fn test_defaults_ignore_merges() {
        let policy = IgnorePolicy::defaults();
        assert!(ignored(&policy, "Merge pull request #42 from x/y"));
        assert!(ignored(&policy, "Merge branch 'main' into feature"));
        assert!(ignored(&policy, "Merge remote-tracking branch 'origin/main'"));
        assert!(ignored(&policy, "Merge tag 'v1.0.0'"));
    }

    #[test]
    fn test_defaults_ignore_tool_commits() {
        let policy = IgnorePolicy::defaults();
        assert!(ignored(&policy, "Revert \"dog: refill water bowl\"\n\nThis reverts commit abc."));
        assert!(ignored(&policy, "fixup! dog: refill water bowl"));
        assert!(ignored(&policy, "squash! dog: refill water bowl"));
    }

    #[test]
    fn test_defaults_ignore_version_bumps() {
        let policy = IgnorePolicy::defaults();
        assert!(ignored(&policy, "bump foo-pkg to v1.2.3"));
        assert!(ignored(&policy, "Bump serde from 1.0.1 to 1.0.2"));
        assert!(ignored(&policy, "Bump serde from 1.0.1 to 1.0.2\n\nBumps [serde] from 1.0.1 to 1.0.2."));
        assert!(ignored(&policy, "v1.2.3\n"));
        assert!(ignored(&policy, "2.0.0-rc.1"));
    }

    #[test]
    fn test_defaults_keep_normal_commits() {
        let policy = IgnorePolicy::defaults();
        assert!(!ignored(&policy, "dog: refill water bowl"));
        assert!(!ignored(&policy, "migrate shoes to new shoe module."));
        assert!(!ignored(&policy, "deps: bump serde"));
        assert!(!ignored(&policy, "dog: refill\n\nMerge branch mentioned in body"));
        assert!(!ignored(&policy, "Bump serde to 2 and Rewrote The Whole Parser."));
        assert!(!ignored(&policy, "bump foo-pkg to v1.2.3, then refactor the loader"));
    }

    #[test]
    fn test_from_config() {
        let config = IgnoreConfig {
            defaults: false,
            contains: vec!["[skip lint]".to_string()],
            patterns: vec!["^Release ".to_string()],
        };
        let policy = IgnorePolicy::from_config(&config).unwrap();
        assert_eq!(policy.len(), 2);
        assert!(ignored(&policy, "dog: refill [skip lint]"));
        assert!(ignored(&policy, "Release 1.4"));
        assert!(!ignored(&policy, "Merge pull request #42 from x/y"));
    }

    #[test]
    fn test_from_config_bad_pattern() {
        let config = IgnoreConfig {
            defaults: true,
            contains: Vec::new(),
            patterns: vec!["(".to_string()],
        };
        assert!(IgnorePolicy::from_config(&config).is_err());
    }

    #[test]
    fn test_matching_reports_first_predicate() {
        let mut policy = IgnorePolicy::new();
        policy.push(IgnorePredicate::Contains("Merge".to_string()));
        policy.push(IgnorePredicate::Contains("pull".to_string()));
        let message = CommitMessage::parse("Merge pull request #1");
        assert_eq!(
            policy.matching(&message).map(|p| p.describe()),
            Some("contains 'Merge'".to_string())
        );
    }
}
