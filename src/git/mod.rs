// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! A thin read-only layer: resolving references to commit messages is
//! all the linter needs from the repository.

mod repo;

pub use repo::{get_commit_message, get_commit_range, open_repo, Repository};
