// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in validation rules.

use crate::commit::{CommitMessage, ParsedHeader};
use crate::config::{RuleSetting, RulesConfig, Severity, When};
use serde::{Deserialize, Serialize};

use super::case::CaseStyle;
use super::report::RuleResult;
use super::verbs::Allowlist;

/// Options shared by all rules for one run.
#[derive(Debug, Clone)]
pub struct RuleOptions {
    pub header_max_length: usize,
    pub body_max_line_length: usize,
    /// Case styles checked by `description-case`.
    pub cases: Vec<CaseStyle>,
    /// Verbs accepted by `description-tense`.
    pub verbs: Allowlist,
}

impl RuleOptions {
    pub fn from_config(config: &RulesConfig) -> Self {
        Self {
            header_max_length: config.header_max_length,
            body_max_line_length: config.body_max_line_length,
            cases: config.disallowed_cases.clone(),
            verbs: Allowlist::from_config(&config.verbs),
        }
    }
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self::from_config(&RulesConfig::default())
    }
}

/// A single check over a parsed commit message.
///
/// Rules are stateless: the same inputs always give the same result.
/// `when` inverts the rule's condition.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Evaluate the rule.
    fn evaluate(
        &self,
        header: &ParsedHeader,
        message: &CommitMessage,
        options: &RuleOptions,
        when: When,
    ) -> RuleResult;

    /// Get the rule name.
    fn name(&self) -> &str;
}

/// Identifiers of the built-in rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    ComponentNotEmpty,
    DescriptionNotEmpty,
    DescriptionCase,
    DescriptionTense,
    HeaderMaxLength,
    BodyMaxLineLength,
    HeaderTrim,
    SubjectFullStop,
    BodyLeadingBlank,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::ComponentNotEmpty => "component-not-empty",
            RuleKind::DescriptionNotEmpty => "description-not-empty",
            RuleKind::DescriptionCase => "description-case",
            RuleKind::DescriptionTense => "description-tense",
            RuleKind::HeaderMaxLength => "header-max-length",
            RuleKind::BodyMaxLineLength => "body-max-line-length",
            RuleKind::HeaderTrim => "header-trim",
            RuleKind::SubjectFullStop => "subject-full-stop",
            RuleKind::BodyLeadingBlank => "body-leading-blank",
        }
    }

    /// A short description of what the rule checks.
    pub fn description(&self) -> &'static str {
        match self {
            RuleKind::ComponentNotEmpty => "Header names a component before ': '",
            RuleKind::DescriptionNotEmpty => "Header has a description",
            RuleKind::DescriptionCase => "Description is written in one of the configured cases",
            RuleKind::DescriptionTense => "Description starts with an allowlisted verb",
            RuleKind::HeaderMaxLength => "Header fits the length limit",
            RuleKind::BodyMaxLineLength => "Every body line fits the length limit",
            RuleKind::HeaderTrim => "Header has no surrounding whitespace",
            RuleKind::SubjectFullStop => "Header ends with a full stop",
            RuleKind::BodyLeadingBlank => "Body follows exactly one blank line",
        }
    }

    /// Severity and `when` used when configuration does not override them.
    pub fn default_setting(&self) -> RuleSetting {
        match self {
            RuleKind::DescriptionCase | RuleKind::SubjectFullStop => {
                RuleSetting::new(Severity::Error, When::Never)
            }
            RuleKind::BodyLeadingBlank => RuleSetting::new(Severity::Warning, When::Always),
            _ => RuleSetting::new(Severity::Error, When::Always),
        }
    }

    /// The implementation of this rule.
    pub fn rule(&self) -> Box<dyn Rule> {
        match self {
            RuleKind::ComponentNotEmpty => Box::new(ComponentNotEmpty),
            RuleKind::DescriptionNotEmpty => Box::new(DescriptionNotEmpty),
            RuleKind::DescriptionCase => Box::new(DescriptionCase),
            RuleKind::DescriptionTense => Box::new(DescriptionTense),
            RuleKind::HeaderMaxLength => Box::new(HeaderMaxLength),
            RuleKind::BodyMaxLineLength => Box::new(BodyMaxLineLength),
            RuleKind::HeaderTrim => Box::new(HeaderTrim),
            RuleKind::SubjectFullStop => Box::new(SubjectFullStop),
            RuleKind::BodyLeadingBlank => Box::new(BodyLeadingBlank),
        }
    }

    /// Get all built-in rules in evaluation order.
    pub fn all() -> &'static [RuleKind] {
        &[
            RuleKind::ComponentNotEmpty,
            RuleKind::DescriptionNotEmpty,
            RuleKind::DescriptionCase,
            RuleKind::DescriptionTense,
            RuleKind::HeaderMaxLength,
            RuleKind::BodyMaxLineLength,
            RuleKind::HeaderTrim,
            RuleKind::SubjectFullStop,
            RuleKind::BodyLeadingBlank,
        ]
    }
}

impl std::str::FromStr for RuleKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleKind::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or(())
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// `component-not-empty`: the header has a component.
#[derive(Debug)]
pub struct ComponentNotEmpty;

impl Rule for ComponentNotEmpty {
    fn evaluate(
        &self,
        header: &ParsedHeader,
        _message: &CommitMessage,
        _options: &RuleOptions,
        when: When,
    ) -> RuleResult {
        if when.apply(header.has_component()) {
            return RuleResult::pass();
        }
        match when {
            When::Always => {
                RuleResult::fail("header must be of the form `<component>: <description>`")
            }
            When::Never => RuleResult::fail(format!(
                "header must not start with a component, found '{}'",
                header.component
            )),
        }
    }

    fn name(&self) -> &str {
        RuleKind::ComponentNotEmpty.as_str()
    }
}

/// `description-not-empty`: the header has a description.
#[derive(Debug)]
pub struct DescriptionNotEmpty;

impl Rule for DescriptionNotEmpty {
    fn evaluate(
        &self,
        header: &ParsedHeader,
        _message: &CommitMessage,
        _options: &RuleOptions,
        when: When,
    ) -> RuleResult {
        let present = !header.description.trim().is_empty();
        if when.apply(present) {
            RuleResult::pass()
        } else {
            match when {
                When::Always => RuleResult::fail("description may not be empty"),
                When::Never => RuleResult::fail("description must be empty"),
            }
        }
    }

    fn name(&self) -> &str {
        RuleKind::DescriptionNotEmpty.as_str()
    }
}

/// `description-case`: the description's letter case.
///
/// Only the description is checked; components are often proper nouns.
#[derive(Debug)]
pub struct DescriptionCase;

impl Rule for DescriptionCase {
    fn evaluate(
        &self,
        header: &ParsedHeader,
        _message: &CommitMessage,
        options: &RuleOptions,
        when: When,
    ) -> RuleResult {
        let description = header.description.trim_start();
        // Nothing to judge without a leading letter.
        if options.cases.is_empty() || !description.starts_with(char::is_alphabetic) {
            return RuleResult::pass();
        }

        let matched: Vec<&CaseStyle> = options
            .cases
            .iter()
            .filter(|style| style.matches(description))
            .collect();

        if when.apply(!matched.is_empty()) {
            return RuleResult::pass();
        }

        match when {
            When::Always => RuleResult::fail(format!(
                "description must be {}",
                join_styles(options.cases.iter())
            )),
            When::Never => RuleResult::fail(format!(
                "description must not be {}",
                join_styles(matched.into_iter())
            )),
        }
    }

    fn name(&self) -> &str {
        RuleKind::DescriptionCase.as_str()
    }
}

fn join_styles<'a>(styles: impl Iterator<Item = &'a CaseStyle>) -> String {
    styles
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `description-tense`: the first word is a present-imperative verb.
///
/// An empty description passes; `description-not-empty` reports that.
#[derive(Debug)]
pub struct DescriptionTense;

impl Rule for DescriptionTense {
    fn evaluate(
        &self,
        header: &ParsedHeader,
        _message: &CommitMessage,
        options: &RuleOptions,
        when: When,
    ) -> RuleResult {
        let Some(word) = header.first_word() else {
            return RuleResult::pass();
        };

        if when.apply(options.verbs.contains(word)) {
            return RuleResult::pass();
        }

        match when {
            When::Always => RuleResult::fail(format!(
                "description must start with a present-imperative verb, '{}' is not in the allowlist",
                word
            )),
            When::Never => RuleResult::fail(format!(
                "description must not start with an allowlisted verb, found '{}'",
                word
            )),
        }
    }

    fn name(&self) -> &str {
        RuleKind::DescriptionTense.as_str()
    }
}

/// `header-max-length`: header length in characters.
#[derive(Debug)]
pub struct HeaderMaxLength;

impl Rule for HeaderMaxLength {
    fn evaluate(
        &self,
        header: &ParsedHeader,
        _message: &CommitMessage,
        options: &RuleOptions,
        when: When,
    ) -> RuleResult {
        let max = options.header_max_length;
        let len = header.raw.chars().count();

        if when.apply(len <= max) {
            RuleResult::pass()
        } else {
            RuleResult::fail(format!(
                "header {} be at most {} characters, current length is {}",
                when.must(),
                max,
                len
            ))
        }
    }

    fn name(&self) -> &str {
        RuleKind::HeaderMaxLength.as_str()
    }
}

/// `body-max-line-length`: length of every body line in characters.
#[derive(Debug)]
pub struct BodyMaxLineLength;

impl Rule for BodyMaxLineLength {
    fn evaluate(
        &self,
        _header: &ParsedHeader,
        message: &CommitMessage,
        options: &RuleOptions,
        when: When,
    ) -> RuleResult {
        let max = options.body_max_line_length;
        let longest = message
            .body_lines()
            .enumerate()
            .map(|(i, line)| (i, line.chars().count()))
            .find(|(_, len)| *len > max);

        if when.apply(longest.is_none()) {
            return RuleResult::pass();
        }

        match longest {
            // Body line numbers are 1-based and count from the first body line.
            Some((index, len)) => RuleResult::fail(format!(
                "body lines {} be at most {} characters, body line {} has {}",
                when.must(),
                max,
                index + 1,
                len
            )),
            None => RuleResult::fail(format!(
                "body lines {} be at most {} characters",
                when.must(),
                max
            )),
        }
    }

    fn name(&self) -> &str {
        RuleKind::BodyMaxLineLength.as_str()
    }
}

/// `header-trim`: no leading or trailing whitespace on the header.
#[derive(Debug)]
pub struct HeaderTrim;

impl Rule for HeaderTrim {
    fn evaluate(
        &self,
        header: &ParsedHeader,
        _message: &CommitMessage,
        _options: &RuleOptions,
        when: When,
    ) -> RuleResult {
        let trimmed = header.raw.trim() == header.raw;
        if when.apply(trimmed) {
            RuleResult::pass()
        } else {
            RuleResult::fail(format!(
                "header {} be free of leading and trailing whitespace",
                when.must()
            ))
        }
    }

    fn name(&self) -> &str {
        RuleKind::HeaderTrim.as_str()
    }
}

/// `subject-full-stop`: whether the header ends with a period.
#[derive(Debug)]
pub struct SubjectFullStop;

impl Rule for SubjectFullStop {
    fn evaluate(
        &self,
        header: &ParsedHeader,
        _message: &CommitMessage,
        _options: &RuleOptions,
        when: When,
    ) -> RuleResult {
        if when.apply(header.raw.ends_with('.')) {
            RuleResult::pass()
        } else {
            RuleResult::fail(format!("header {} end with full stop '.'", when.must()))
        }
    }

    fn name(&self) -> &str {
        RuleKind::SubjectFullStop.as_str()
    }
}

/// `body-leading-blank`: exactly one blank line between header and body.
#[derive(Debug)]
pub struct BodyLeadingBlank;

impl Rule for BodyLeadingBlank {
    fn evaluate(
        &self,
        _header: &ParsedHeader,
        message: &CommitMessage,
        _options: &RuleOptions,
        when: When,
    ) -> RuleResult {
        if message.body.is_none() {
            return RuleResult::pass();
        }

        let found = message.separator_lines;
        if when.apply(found == 1) {
            RuleResult::pass()
        } else {
            RuleResult::fail(format!(
                "body {} be separated from the header by exactly one blank line, found {}",
                when.must(),
                found
            ))
        }
    }

    fn name(&self) -> &str {
        RuleKind::BodyLeadingBlank.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(kind: RuleKind, text: &str) -> RuleResult {
        run_with(kind, text, &RuleOptions::default(), kind.default_setting().when)
    }

    fn run_with(kind: RuleKind, text: &str, options: &RuleOptions, when: When) -> RuleResult {
        let message = CommitMessage::parse(text);
        let header = ParsedHeader::parse(&message.header);
        kind.rule().evaluate(&header, &message, options, when)
    }

    #[test]
    fn test_rule_names_match_kinds() {
        for kind in RuleKind::all() {
            assert_eq!(kind.rule().name(), kind.as_str());
            assert_eq!(kind.as_str().parse::<RuleKind>(), Ok(*kind));
        }
    }

    #[test]
    fn test_component_not_empty() {
        assert!(run(RuleKind::ComponentNotEmpty, "dog: refill water bowl").passed);

        let result = run(RuleKind::ComponentNotEmpty, "migrate shoes to new shoe module.");
        assert!(!result.passed);
        assert!(result.message.contains("<component>: <description>"));
    }

    #[test]
    fn test_component_never() {
        let result = run_with(
            RuleKind::ComponentNotEmpty,
            "dog: refill water bowl",
            &RuleOptions::default(),
            When::Never,
        );
        assert!(!result.passed);
        assert!(result.message.contains("'dog'"));
    }

    #[test]
    fn test_description_not_empty() {
        assert!(run(RuleKind::DescriptionNotEmpty, "dog: refill water bowl").passed);
        assert!(!run(RuleKind::DescriptionNotEmpty, "").passed);
        assert!(!run(RuleKind::DescriptionNotEmpty, "   ").passed);
    }

    #[test]
    fn test_description_case() {
        assert!(run(RuleKind::DescriptionCase, "dog: refill water bowl").passed);

        let result = run(
            RuleKind::DescriptionCase,
            "dungeonmaster: Fixes a bug with STR and CON attributes",
        );
        assert!(!result.passed);
        assert!(result.message.contains("sentence-case"));

        assert!(!run(RuleKind::DescriptionCase, "dog: REFILL WATER BOWL").passed);
    }

    #[test]
    fn test_description_case_extra_space_after_colon() {
        let result = run(RuleKind::DescriptionCase, "dog:  Refill Water Bowl");
        assert!(!result.passed);
        assert!(result.message.contains("start-case"));
        assert!(run(RuleKind::DescriptionCase, "dog:  refill water bowl").passed);
    }

    #[test]
    fn test_description_case_ignores_component() {
        assert!(run(RuleKind::DescriptionCase, "Dog: refill water bowl").passed);
    }

    #[test]
    fn test_description_case_skips_non_letters() {
        assert!(run(RuleKind::DescriptionCase, "dog: 2x faster refill").passed);
        assert!(run(RuleKind::DescriptionCase, "").passed);
    }

    #[test]
    fn test_description_case_always() {
        let options = RuleOptions {
            cases: vec![CaseStyle::LowerCase],
            ..RuleOptions::default()
        };
        assert!(run_with(RuleKind::DescriptionCase, "dog: refill bowl", &options, When::Always).passed);

        let result = run_with(RuleKind::DescriptionCase, "dog: Refill bowl", &options, When::Always);
        assert!(!result.passed);
        assert_eq!(result.message, "description must be lower-case");
    }

    #[test]
    fn test_description_tense() {
        assert!(run(RuleKind::DescriptionTense, "dog: refill water bowl").passed);
        assert!(run(RuleKind::DescriptionTense, "dog: Refill water bowl").passed);

        let result = run(
            RuleKind::DescriptionTense,
            "dungeonmaster: Fixes a bug with STR and CON attributes",
        );
        assert!(!result.passed);
        assert!(result.message.contains("'Fixes'"));
    }

    #[test]
    fn test_description_tense_empty_passes() {
        assert!(run(RuleKind::DescriptionTense, "").passed);
    }

    #[test]
    fn test_description_tense_uses_injected_allowlist() {
        let options = RuleOptions {
            verbs: Allowlist::new(["frobnicate"]),
            ..RuleOptions::default()
        };
        assert!(run_with(RuleKind::DescriptionTense, "x: frobnicate it", &options, When::Always).passed);
        assert!(!run_with(RuleKind::DescriptionTense, "x: add it", &options, When::Always).passed);
    }

    #[test]
    fn test_header_max_length() {
        let header = format!("dog: {}", "a".repeat(75));
        assert_eq!(header.chars().count(), 80);

        let result = run(RuleKind::HeaderMaxLength, &header);
        assert!(!result.passed);
        assert!(result.message.contains("72"));
        assert!(result.message.contains("80"));

        let header = format!("dog: {}", "a".repeat(67));
        assert!(run(RuleKind::HeaderMaxLength, &header).passed);
    }

    #[test]
    fn test_header_length_counts_characters() {
        let header = format!("dog: {}", "é".repeat(67));
        assert!(header.len() > 72);
        assert!(run(RuleKind::HeaderMaxLength, &header).passed);
    }

    #[test]
    fn test_body_max_line_length() {
        let ok = "dog: refill water bowl\n\nshort line";
        assert!(run(RuleKind::BodyMaxLineLength, ok).passed);

        let long = format!("dog: refill water bowl\n\nfine\n{}", "b".repeat(73));
        let result = run(RuleKind::BodyMaxLineLength, &long);
        assert!(!result.passed);
        assert!(result.message.contains("72"));
        assert!(result.message.contains("body line 2"));
    }

    #[test]
    fn test_header_trim() {
        assert!(run(RuleKind::HeaderTrim, "dog: refill water bowl").passed);
        assert!(!run(RuleKind::HeaderTrim, " dog: refill water bowl").passed);
        assert!(!run(RuleKind::HeaderTrim, "dog: refill water bowl\t").passed);
    }

    #[test]
    fn test_subject_full_stop() {
        assert!(run(RuleKind::SubjectFullStop, "dog: refill water bowl").passed);

        let result = run(RuleKind::SubjectFullStop, "dog: refill water bowl.");
        assert!(!result.passed);
        assert_eq!(result.message, "header must not end with full stop '.'");
    }

    #[test]
    fn test_body_leading_blank() {
        assert!(run(RuleKind::BodyLeadingBlank, "dog: refill water bowl").passed);
        assert!(run(RuleKind::BodyLeadingBlank, "dog: refill\n\nbody").passed);
        assert!(!run(RuleKind::BodyLeadingBlank, "dog: refill\nbody").passed);

        let result = run(RuleKind::BodyLeadingBlank, "dog: refill\n\n\nbody");
        assert!(!result.passed);
        assert!(result.message.contains("found 2"));
    }

    #[test]
    fn test_default_settings() {
        assert_eq!(
            RuleKind::SubjectFullStop.default_setting(),
            RuleSetting::new(Severity::Error, When::Never)
        );
        assert_eq!(
            RuleKind::BodyLeadingBlank.default_setting().severity,
            Severity::Warning
        );
        assert_eq!(
            RuleKind::DescriptionTense.default_setting(),
            RuleSetting::new(Severity::Error, When::Always)
        );
    }
}
