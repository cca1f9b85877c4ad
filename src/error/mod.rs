// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for clint.
//!
//! Rule violations are not errors: they are reported through
//! [`EvaluationReport`](crate::rules::EvaluationReport). The types here cover
//! the things that stop a run outright, such as a broken configuration or an
//! unreadable git reference.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for clint operations.
#[derive(Error, Debug)]
pub enum ClintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Lint outcome errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
///
/// All of these are raised while loading configuration, before any commit
/// message is evaluated.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Invalid commit range: {range}")]
    InvalidRange { range: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Outcome of a lint run that should turn into a non-zero exit.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{failed} of {checked} commit message(s) failed linting")]
    LintFailed { failed: usize, checked: usize },
}

/// Result type alias for clint operations.
pub type Result<T> = std::result::Result<T, ClintError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ClintError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
