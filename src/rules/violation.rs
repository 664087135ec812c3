// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Violation and report types.

use crate::cli::args::OutputFormat;
use console::{style, Style};
use serde::{Deserialize, Serialize};

use super::builtin::RuleId;

/// Severity of a rule.
///
/// `Off` disables the rule entirely; `Warning` and `Error` only differ in
/// how a caller maps the report to an exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Off,
    Warning,
    Error,
}

impl Severity {
    /// Get the string representation of the severity.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Whether a violation at this severity fails the check.
    pub fn is_blocking(self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The rule that was violated.
    pub rule: RuleId,
    /// Severity the rule was configured with.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
}

impl Violation {
    /// Format the violation for terminal output.
    pub fn format(&self) -> String {
        let prefix = if self.severity.is_blocking() {
            style("✗").red().bold()
        } else {
            style("⚠").yellow().bold()
        };

        let rule_style = if self.severity.is_blocking() {
            Style::new().red()
        } else {
            Style::new().yellow()
        };

        let mut output = format!(
            "{} {} {}",
            prefix,
            rule_style.apply_to(self.rule.as_str()),
            self.message
        );

        if let Some(ref suggestion) = self.suggestion {
            output.push_str(&format!(
                "\n  {} {}",
                style("→").dim(),
                style(suggestion).dim()
            ));
        }

        output
    }
}

/// Result of checking a commit message.
///
/// Violations appear in rule declaration order and are never persisted.
#[derive(Debug, Clone)]
pub struct LintReport {
    /// The original message.
    pub message: String,
    /// Commit SHA if checking an existing commit.
    pub commit_sha: Option<String>,
    /// Violations in declaration order.
    pub violations: Vec<Violation>,
}

impl LintReport {
    /// Create a new empty report for a message.
    pub fn new(message: String) -> Self {
        Self {
            message,
            commit_sha: None,
            violations: Vec::new(),
        }
    }

    /// Check if the message passed (no error-severity violations).
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    /// Number of error-severity violations.
    pub fn error_count(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity.is_blocking())
            .count()
    }

    /// Number of warning-severity violations.
    pub fn warning_count(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| !v.severity.is_blocking())
            .count()
    }

    /// Print the report to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    /// Print in text format.
    fn print_text(&self) {
        let status = if self.is_valid() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };

        if let Some(ref sha) = self.commit_sha {
            let short_sha = &sha[..7.min(sha.len())];
            let first_line = self.message.lines().next().unwrap_or("");
            println!("{} {} {}", status, style(short_sha).cyan(), first_line);
        } else if !self.violations.is_empty() {
            println!("{} {}", status, self.summary());
        }

        for violation in &self.violations {
            println!("  {}", violation.format());
        }
    }

    /// Print in JSON format.
    fn print_json(&self) {
        let json = serde_json::json!({
            "valid": self.is_valid(),
            "commit": self.commit_sha,
            "message": self.message,
            "violations": self.violations.iter().map(|v| {
                serde_json::json!({
                    "rule": v.rule.as_str(),
                    "severity": v.severity.as_str(),
                    "message": v.message,
                    "suggestion": v.suggestion,
                })
            }).collect::<Vec<_>>(),
        });

        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            if self.violations.is_empty() {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warning_count())
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.error_count(),
                self.warning_count()
            )
        }
    }
}
