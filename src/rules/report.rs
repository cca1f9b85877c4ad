// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Evaluation result types.

use crate::cli::args::OutputFormat;
use crate::config::Severity;
use console::{style, Style};

/// Outcome of one rule on one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleResult {
    pub passed: bool,
    /// Why the rule failed; empty when it passed.
    pub message: String,
}

impl RuleResult {
    pub fn pass() -> Self {
        Self {
            passed: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }
}

/// A rule result together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// Rule name.
    pub rule: String,
    /// Severity the rule ran at.
    pub severity: Severity,
    pub result: RuleResult,
}

impl ReportEntry {
    pub fn is_error(&self) -> bool {
        !self.result.passed && self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        !self.result.passed && self.severity == Severity::Warning
    }

    /// Format the entry for terminal output.
    pub fn format(&self) -> String {
        if self.result.passed {
            return format!(
                "{} {}",
                style("✓").green(),
                style(&self.rule).dim()
            );
        }

        let (prefix, code_style) = if self.severity == Severity::Error {
            (style("✗").red().bold(), Style::new().red())
        } else {
            (style("⚠").yellow().bold(), Style::new().yellow())
        };

        format!(
            "{} {} {}",
            prefix,
            code_style.apply_to(&self.rule),
            self.result.message
        )
    }
}

/// Result of evaluating one commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationReport {
    /// Header of the evaluated message.
    pub header: String,
    /// Commit SHA if the message came from git.
    pub commit_sha: Option<String>,
    /// One entry per enabled rule, in evaluation order.
    pub entries: Vec<ReportEntry>,
    /// Whether the ignore policy exempted the message.
    pub ignored: bool,
}

impl EvaluationReport {
    /// Create an empty report for a header.
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            commit_sha: None,
            entries: Vec::new(),
            ignored: false,
        }
    }

    /// Report for a message exempted by the ignore policy.
    pub fn ignored(header: impl Into<String>) -> Self {
        Self {
            ignored: true,
            ..Self::new(header)
        }
    }

    /// True iff no error-severity rule failed.
    pub fn overall_passed(&self) -> bool {
        !self.entries.iter().any(ReportEntry::is_error)
    }

    /// True iff no enabled rule failed at all.
    pub fn passed_strict(&self) -> bool {
        self.entries.iter().all(|e| e.result.passed)
    }

    /// `passed_strict` when `strict` is set, otherwise `overall_passed`.
    pub fn passed(&self, strict: bool) -> bool {
        if strict {
            self.passed_strict()
        } else {
            self.overall_passed()
        }
    }

    /// Failed error-severity entries.
    pub fn errors(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| e.is_error())
    }

    /// Failed warning-severity entries.
    pub fn warnings(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| e.is_warning())
    }

    /// Look up the entry for a rule.
    pub fn entry(&self, rule: &str) -> Option<&ReportEntry> {
        self.entries.iter().find(|e| e.rule == rule)
    }

    /// Names of all failed rules, in evaluation order.
    pub fn failed_rules(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| !e.result.passed)
            .map(|e| e.rule.as_str())
            .collect()
    }

    /// Print the report to stdout.
    pub fn print(&self, format: Option<OutputFormat>, show_passed: bool, strict: bool) {
        match format {
            Some(OutputFormat::Json) => self.print_json(strict),
            _ => println!("{}", self.format_text(show_passed)),
        }
    }

    /// Render the report as terminal text.
    pub fn format_text(&self, show_passed: bool) -> String {
        let status = if self.ignored {
            style("○").dim()
        } else if self.overall_passed() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };

        let mut output = match self.commit_sha {
            Some(ref sha) => {
                let short_sha = &sha[..7.min(sha.len())];
                format!("{} {} {}", status, style(short_sha).cyan(), self.header)
            }
            None => format!("{} {}", status, self.header),
        };

        if self.ignored {
            output.push_str(&format!(" {}", style("(ignored)").dim()));
            return output;
        }

        for entry in &self.entries {
            if entry.result.passed && !show_passed {
                continue;
            }
            output.push_str(&format!("\n  {}", entry.format()));
        }

        output
    }

    /// Render the report as JSON. `valid` follows the same pass rule as the
    /// exit code, so `strict` counts warnings as failures.
    pub fn to_json(&self, strict: bool) -> serde_json::Value {
        serde_json::json!({
            "valid": self.passed(strict),
            "ignored": self.ignored,
            "commit": self.commit_sha,
            "header": self.header,
            "results": self.entries.iter().map(|e| {
                serde_json::json!({
                    "rule": e.rule,
                    "severity": e.severity.as_str(),
                    "passed": e.result.passed,
                    "message": e.result.message,
                })
            }).collect::<Vec<_>>(),
        })
    }

    fn print_json(&self, strict: bool) {
        println!(
            "{}",
            serde_json::to_string_pretty(&self.to_json(strict)).unwrap_or_default()
        );
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.ignored {
            return "Ignored".to_string();
        }

        let errors = self.errors().count();
        let warnings = self.warnings().count();
        if errors == 0 {
            if warnings == 0 {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", warnings)
            }
        } else {
            format!("Invalid ({} errors, {} warnings)", errors, warnings)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(rule: &str, severity: Severity, result: RuleResult) -> ReportEntry {
        ReportEntry {
            rule: rule.to_string(),
            severity,
            result,
        }
    }

    #[test]
    fn test_report_valid() {
        let mut report = EvaluationReport::new("dog: refill water bowl");
        report
            .entries
            .push(entry("header-trim", Severity::Error, RuleResult::pass()));
        assert!(report.overall_passed());
        assert!(report.passed_strict());
        assert_eq!(report.summary(), "Valid");
    }

    #[test]
    fn test_warning_does_not_fail() {
        let mut report = EvaluationReport::new("dog: refill\nbody");
        report.entries.push(entry(
            "body-leading-blank",
            Severity::Warning,
            RuleResult::fail("body must be separated"),
        ));
        assert!(report.overall_passed());
        assert!(!report.passed_strict());
        assert_eq!(report.warnings().count(), 1);
        assert!(report.summary().contains("1 warnings"));
    }

    #[test]
    fn test_error_fails() {
        let mut report = EvaluationReport::new("dog: refill.");
        report.entries.push(entry(
            "subject-full-stop",
            Severity::Error,
            RuleResult::fail("header must not end with full stop '.'"),
        ));
        assert!(!report.overall_passed());
        assert_eq!(report.failed_rules(), vec!["subject-full-stop"]);
        assert!(report.summary().contains("Invalid"));
    }

    #[test]
    fn test_ignored_report() {
        let report = EvaluationReport::ignored("Merge branch 'main'");
        assert!(report.overall_passed());
        assert!(report.entries.is_empty());
        assert_eq!(report.summary(), "Ignored");
        assert!(report.format_text(false).contains("(ignored)"));
    }

    #[test]
    fn test_format_text_lists_failures() {
        let mut report = EvaluationReport::new("dog: refill.");
        report.commit_sha = Some("0123456789abcdef".to_string());
        report
            .entries
            .push(entry("header-trim", Severity::Error, RuleResult::pass()));
        report.entries.push(entry(
            "subject-full-stop",
            Severity::Error,
            RuleResult::fail("header must not end with full stop '.'"),
        ));

        let text = report.format_text(false);
        assert!(text.contains("0123456"));
        assert!(!text.contains("0123456789"));
        assert!(text.contains("subject-full-stop"));
        assert!(!text.contains("header-trim"));
        assert!(report.format_text(true).contains("header-trim"));
    }

    #[test]
    fn test_to_json() {
        let mut report = EvaluationReport::new("dog: refill.");
        report.entries.push(entry(
            "subject-full-stop",
            Severity::Error,
            RuleResult::fail("header must not end with full stop '.'"),
        ));
        let json = report.to_json(false);
        assert_eq!(json["valid"], false);
        assert_eq!(json["results"][0]["rule"], "subject-full-stop");
        assert_eq!(json["results"][0]["severity"], "error");
    }

    #[test]
    fn test_to_json_strict_counts_warnings() {
        let mut report = EvaluationReport::new("dog: refill water bowl");
        report.entries.push(entry(
            "body-leading-blank",
            Severity::Warning,
            RuleResult::fail("body must be separated from the header by exactly one blank line, found 0"),
        ));
        assert_eq!(report.to_json(false)["valid"], true);
        assert_eq!(report.to_json(true)["valid"], false);
        assert!(report.passed(false));
        assert!(!report.passed(true));
    }
}
