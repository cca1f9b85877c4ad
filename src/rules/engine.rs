// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::{CommitMessage, ParsedHeader};
use crate::config::{ClintConfig, RuleSetting, RulesConfig};
use crate::error::Result;
use crate::git;
use rayon::prelude::*;

use super::builtin::{Rule, RuleKind, RuleOptions};
use super::ignore::IgnorePolicy;
use super::report::{EvaluationReport, ReportEntry};

/// A rule with the severity and `when` it runs at.
#[derive(Debug)]
pub struct ConfiguredRule {
    pub rule: Box<dyn Rule>,
    pub setting: RuleSetting,
}

/// An ordered collection of configured rules.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<ConfiguredRule>,
}

impl RuleSet {
    /// An empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// All built-in rules, in `RuleKind::all()` order, with the
    /// configured settings applied.
    pub fn builtin(config: &RulesConfig) -> Self {
        let mut set = Self::new();
        for kind in RuleKind::all() {
            set.push(kind.rule(), config.setting_for(*kind));
        }
        set
    }

    /// Append a rule; rules run in insertion order.
    pub fn push(&mut self, rule: Box<dyn Rule>, setting: RuleSetting) {
        self.rules.push(ConfiguredRule { rule, setting });
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfiguredRule> {
        self.rules.iter()
    }

    /// Rules whose severity is not `off`.
    pub fn enabled(&self) -> impl Iterator<Item = &ConfiguredRule> {
        self.rules.iter().filter(|r| r.setting.is_enabled())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Rule engine for validating commit messages.
///
/// Holds only read-only state, so one engine can evaluate any number of
/// messages, from any number of threads.
#[derive(Debug)]
pub struct RuleEngine {
    rules: RuleSet,
    options: RuleOptions,
    ignore: IgnorePolicy,
}

impl RuleEngine {
    /// Create a rule engine from configuration.
    ///
    /// The configuration is validated first; an invalid configuration is
    /// an error before any message is evaluated.
    pub fn new(config: &ClintConfig) -> Result<Self> {
        config.validate()?;
        let engine = Self::from_parts(
            RuleSet::builtin(&config.rules),
            RuleOptions::from_config(&config.rules),
            IgnorePolicy::from_config(&config.ignore)?,
        );
        tracing::debug!(
            "Rule engine ready: {} rules, {} verbs, {} ignore predicates",
            engine.rules.len(),
            engine.options.verbs.len(),
            engine.ignore.len()
        );
        Ok(engine)
    }

    /// Assemble an engine from already-built parts.
    pub fn from_parts(rules: RuleSet, options: RuleOptions, ignore: IgnorePolicy) -> Self {
        Self {
            rules,
            options,
            ignore,
        }
    }

    /// Add a custom rule to the engine; it runs after the existing rules.
    pub fn add_rule(&mut self, rule: Box<dyn Rule>, setting: RuleSetting) {
        self.rules.push(rule, setting);
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn options(&self) -> &RuleOptions {
        &self.options
    }

    /// Validate a commit message.
    ///
    /// Ignored messages get an empty report. Otherwise every enabled rule
    /// runs and every result is kept.
    pub fn evaluate(&self, message: &CommitMessage) -> EvaluationReport {
        if let Some(predicate) = self.ignore.matching(message) {
            tracing::debug!("Ignoring '{}': {}", message.header, predicate.describe());
            return EvaluationReport::ignored(message.header.clone());
        }

        let header = ParsedHeader::parse(&message.header);
        let mut report = EvaluationReport::new(message.header.clone());

        for configured in self.rules.enabled() {
            let result = configured.rule.evaluate(
                &header,
                message,
                &self.options,
                configured.setting.when,
            );
            tracing::debug!(
                rule = configured.rule.name(),
                passed = result.passed,
                "rule evaluated"
            );
            report.entries.push(ReportEntry {
                rule: configured.rule.name().to_string(),
                severity: configured.setting.severity,
                result,
            });
        }

        report
    }

    /// Validate a commit message string.
    pub fn evaluate_str(&self, message: &str) -> EvaluationReport {
        self.evaluate(&CommitMessage::parse(message))
    }

    /// Validate a batch of messages in parallel. Reports are returned in
    /// input order.
    pub fn evaluate_all(&self, messages: &[CommitMessage]) -> Vec<EvaluationReport> {
        messages.par_iter().map(|m| self.evaluate(m)).collect()
    }

    /// Check a specific commit by reference.
    pub fn check_commit(&self, reference: &str) -> Result<EvaluationReport> {
        let (sha, message) = git::get_commit(reference)?;
        let mut report = self.evaluate_str(&message);
        report.commit_sha = Some(sha);
        Ok(report)
    }

    /// Check a range of commits (`A..B`), newest first.
    pub fn check_range(&self, range: &str) -> Result<Vec<EvaluationReport>> {
        let commits = git::get_commit_range(range)?;
        let messages: Vec<CommitMessage> = commits
            .iter()
            .map(|(_, message)| CommitMessage::parse(message))
            .collect();

        let mut reports = self.evaluate_all(&messages);
        for (report, (sha, _)) in reports.iter_mut().zip(commits) {
            report.commit_sha = Some(sha);
        }

        Ok(reports)
    }
}
