// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CML - Conventional Commit Message Linter
//!
//! A production-grade CLI tool for validating commit messages against a
//! declarative rule set.
//!
//! # Features
//!
//! - **Rule Engine**: Seven built-in rules with configurable severity,
//!   always/never applicability, and parameters
//! - **Lenient Parsing**: Malformed messages become rule violations, not
//!   parse errors
//! - **Git Integration**: Check a single commit, a range, a file, or stdin
//! - **Git Hooks**: Native commit-msg hook management without shell scripts
//!
//! # Example
//!
//! ```no_run
//! use cml::config::CmlConfig;
//! use cml::rules::RuleSet;
//!
//! // Load configuration
//! let config = CmlConfig::load().unwrap();
//!
//! // Evaluate a message
//! let rules = RuleSet::from_config(&config);
//! let report = rules.evaluate_text("feat: Add login button");
//!
//! for violation in &report.violations {
//!     println!("{}", violation.format());
//! }
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod message;
pub mod rules;

// Re-exports for convenience
pub use config::CmlConfig;
pub use error::{CmlError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cml.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

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
