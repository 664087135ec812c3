// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the cml application.
//!
//! This module defines all error types used throughout the application,
//! with proper error categorization and context propagation. Rule
//! violations are not errors: they are ordinary results of a check and
//! live in [`crate::rules`].

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cml operations.
#[derive(Error, Debug)]
pub enum CmlError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Lint outcome errors (carry the exit status for failed checks)
    #[error("Lint error: {0}")]
    Lint(#[from] LintError),

    // Hook errors
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },
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

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

/// Lint outcome errors.
///
/// Produced by the check command when a run must map to a non-zero exit
/// status. Individual violations are reported before this is returned.
#[derive(Error, Debug)]
pub enum LintError {
    #[error("Checks failed: {errors} errors, {warnings} warnings")]
    ChecksFailed { errors: usize, warnings: usize },
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Hook already exists: {hook}")]
    AlreadyExists { hook: String },

    #[error("Hook not found: {hook}")]
    NotFound { hook: String },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },

    #[error("Hook execution failed: {hook} - {message}")]
    ExecutionFailed { hook: String, message: String },
}

/// Result type alias for cml operations.
pub type Result<T> = std::result::Result<T, CmlError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CmlError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config"),
        };
        assert!(err.to_string().contains("/path/to/config"));
    }

    #[test]
    fn test_lint_error_display() {
        let err = LintError::ChecksFailed {
            errors: 2,
            warnings: 1,
        };
        assert!(err.to_string().contains("2 errors"));
    }

    #[test]
    fn test_cml_error_from_git_error() {
        let git_err = GitError::InvalidReference {
            reference: "HEAD~99".to_string(),
        };
        let err: CmlError = git_err.into();
        assert!(err.to_string().contains("HEAD~99"));
    }

    #[test]
    fn test_result_ext_context() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = result.context("reading message file").unwrap_err();
        assert!(err.to_string().contains("reading message file"));
    }
}
