// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! clint - Commit Header Linter
//!
//! Checks commit messages of the form `<component>: <description>` against a
//! configurable rule set.
//!
//! # Features
//!
//! - **Header Parsing**: Splits a header into component and description
//! - **Rule Engine**: Typed rules with per-rule severity and negation
//! - **Verb Allowlist**: Descriptions must open with a present-imperative verb
//! - **Ignore Policy**: Merges, reverts and bot bumps are skipped entirely
//! - **Git Integration**: Lint single commits or whole ranges
//!
//! # Example
//!
//! ```no_run
//! use clint::config::ClintConfig;
//! use clint::rules::RuleEngine;
//!
//! let config = ClintConfig::default();
//! let engine = RuleEngine::new(&config).unwrap();
//!
//! let report = engine.evaluate_str("dog: refill water bowl");
//! assert!(report.overall_passed());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod rules;

// Re-exports for convenience
pub use config::ClintConfig;
pub use error::{ClintError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of clint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// The rustc version used for the build (if available).
    pub const RUSTC_SEMVER: Option<&str> = option_env!("VERGEN_RUSTC_SEMVER");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }

}
