// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{ClintError, GitError, Result};
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository for reading commit messages.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            ClintError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path (or any directory inside it).
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                ClintError::Git(GitError::NotARepository)
            } else {
                ClintError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        Ok(Self { inner: repo })
    }

    /// Get a commit by reference (SHA, branch name, etc.).
    pub fn get_commit(&self, reference: &str) -> Result<git2::Commit<'_>> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            ClintError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let commit = obj.peel_to_commit().map_err(|e| {
            ClintError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        Ok(commit)
    }

    /// Get the commit message for a reference.
    pub fn get_commit_message(&self, reference: &str) -> Result<String> {
        let commit = self.get_commit(reference)?;
        Ok(message_of(&commit))
    }

    /// Get commits in a range (`A..B`), newest first.
    ///
    /// A single reference yields just that commit. An empty side of the
    /// range means `HEAD`, as in git.
    pub fn get_commits_in_range(&self, range: &str) -> Result<Vec<(Oid, String)>> {
        if !range.contains("..") {
            let commit = self.get_commit(range)?;
            return Ok(vec![(commit.id(), message_of(&commit))]);
        }

        let parts: Vec<&str> = range.split("..").collect();
        let (from, to) = match parts.as_slice() {
            &[from, to] if !from.starts_with('.') && !to.starts_with('.') => (
                if from.is_empty() { "HEAD" } else { from },
                if to.is_empty() { "HEAD" } else { to },
            ),
            _ => {
                return Err(ClintError::Git(GitError::InvalidRange {
                    range: range.to_string(),
                }))
            }
        };

        let from = self.get_commit(from)?;
        let to = self.get_commit(to)?;

        let mut revwalk = self.inner.revwalk().map_err(|e| walk_error("revwalk", e))?;
        revwalk
            .set_sorting(git2::Sort::TOPOLOGICAL)
            .map_err(|e| walk_error("revwalk.set_sorting", e))?;
        revwalk
            .push(to.id())
            .map_err(|e| walk_error("revwalk.push", e))?;
        revwalk
            .hide(from.id())
            .map_err(|e| walk_error("revwalk.hide", e))?;

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result.map_err(|e| walk_error("revwalk", e))?;
            let commit = self.inner.find_commit(oid).map_err(|e| {
                ClintError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;
            commits.push((oid, message_of(&commit)));
        }

        Ok(commits)
    }
}

fn walk_error(command: &str, e: git2::Error) -> ClintError {
    ClintError::Git(GitError::CommandFailed {
        command: command.to_string(),
        message: e.message().to_string(),
    })
}

/// Message text of a commit; invalid UTF-8 is replaced rather than dropped.
fn message_of(commit: &git2::Commit<'_>) -> String {
    match commit.message() {
        Some(message) => message.to_string(),
        None => {
            tracing::warn!("Commit {} has a non-UTF-8 message", commit.id());
            String::from_utf8_lossy(commit.message_bytes()).into_owned()
        }
    }
}

/// Get the SHA and message of a commit.
pub fn get_commit(reference: &str) -> Result<(String, String)> {
    let repo = Repository::open_current()?;
    let commit = repo.get_commit(reference)?;
    Ok((commit.id().to_string(), message_of(&commit)))
}

/// Get commits in a range from the current repository.
pub fn get_commit_range(range: &str) -> Result<Vec<(String, String)>> {
    let current_dir = std::env::current_dir()?;
    get_commit_range_in(&current_dir, range)
}

/// Get commits in a range from the repository containing `path`.
pub fn get_commit_range_in(path: &Path, range: &str) -> Result<Vec<(String, String)>> {
    let repo = Repository::open(path)?;
    let commits = repo.get_commits_in_range(range)?;
    Ok(commits
        .into_iter()
        .map(|(oid, msg)| (oid.to_string(), msg))
        .collect())
}
