// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Reads commit messages from the current repository for `clint check`.

mod repo;

pub use repo::{get_commit, get_commit_range, get_commit_range_in, Repository};
