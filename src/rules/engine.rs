// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule set construction and evaluation.

use serde::{Deserialize, Serialize};

use crate::config::CmlConfig;
use crate::error::Result;
use crate::git;
use crate::message::CommitMessage;

use super::builtin::{self, RuleId, RuleParam};
use super::violation::{LintReport, Severity, Violation};

/// Applicability of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum When {
    /// The condition must hold.
    Always,
    /// The condition must not hold.
    Never,
}

impl When {
    /// Get the string representation of the applicability.
    pub fn as_str(self) -> &'static str {
        match self {
            When::Always => "always",
            When::Never => "never",
        }
    }
}

impl std::fmt::Display for When {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A rule together with its configured severity, applicability, and
/// parameter.
#[derive(Debug, Clone)]
pub struct ConfiguredRule {
    pub id: RuleId,
    pub severity: Severity,
    pub when: When,
    pub param: RuleParam,
}

/// The ordered set of rules a check runs against.
///
/// Rules are materialized from configuration once and held read-only for
/// the duration of a check. Evaluation reports violations in the order
/// rules are declared here.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<ConfiguredRule>,
}

impl RuleSet {
    /// Materialize the rule set from configuration, in declaration order.
    pub fn from_config(config: &CmlConfig) -> Self {
        let r = &config.rules;
        let rules = vec![
            ConfiguredRule {
                id: RuleId::TypeEnum,
                severity: r.type_enum.severity,
                when: r.type_enum.when,
                param: RuleParam::Values(r.type_enum.values.clone()),
            },
            ConfiguredRule {
                id: RuleId::SubjectCase,
                severity: r.subject_case.severity,
                when: r.subject_case.when,
                param: RuleParam::Case(r.subject_case.case),
            },
            ConfiguredRule {
                id: RuleId::BodyLeadingBlank,
                severity: r.body_leading_blank.severity,
                when: r.body_leading_blank.when,
                param: RuleParam::None,
            },
            ConfiguredRule {
                id: RuleId::BodyMaxLineLength,
                severity: r.body_max_line_length.severity,
                when: r.body_max_line_length.when,
                param: RuleParam::Limit(r.body_max_line_length.limit),
            },
            ConfiguredRule {
                id: RuleId::IssueReferenceInFooter,
                severity: r.issue_reference_in_footer.severity,
                when: r.issue_reference_in_footer.when,
                param: RuleParam::None,
            },
            ConfiguredRule {
                id: RuleId::FooterLeadingBlank,
                severity: r.footer_leading_blank.severity,
                when: r.footer_leading_blank.when,
                param: RuleParam::None,
            },
            ConfiguredRule {
                id: RuleId::FooterMaxLineLength,
                severity: r.footer_max_line_length.severity,
                when: r.footer_max_line_length.when,
                param: RuleParam::Limit(r.footer_max_line_length.limit),
            },
        ];

        Self { rules }
    }

    /// The configured rules in declaration order.
    pub fn rules(&self) -> &[ConfiguredRule] {
        &self.rules
    }

    /// Evaluate every active rule against a parsed message.
    ///
    /// Pure and side-effect-free: the same input always yields the same
    /// violation sequence. No short-circuiting; the caller sees the
    /// complete list in one pass.
    pub fn evaluate(&self, message: &CommitMessage) -> LintReport {
        let mut report = LintReport::new(message.format());

        for rule in &self.rules {
            if rule.severity == Severity::Off {
                continue;
            }

            let holds = builtin::holds(rule.id, message, &rule.param);
            let violated = match rule.when {
                When::Always => !holds,
                When::Never => holds,
            };

            if violated {
                let (text, suggestion) =
                    builtin::failure_message(rule.id, rule.when, &rule.param, message);
                report.violations.push(Violation {
                    rule: rule.id,
                    severity: rule.severity,
                    message: text,
                    suggestion,
                });
            }
        }

        report
    }

    /// Parse raw text and evaluate it.
    pub fn evaluate_text(&self, text: &str) -> LintReport {
        let message = CommitMessage::parse(text);
        let mut report = self.evaluate(&message);
        report.message = text.trim().to_string();
        report
    }

    /// Check a specific commit by reference.
    pub fn check_commit(&self, reference: &str) -> Result<LintReport> {
        let message = git::get_commit_message(reference)?;
        Ok(self.evaluate_text(&message))
    }

    /// Check a range of commits.
    pub fn check_range(&self, range: &str) -> Result<Vec<LintReport>> {
        let commits = git::get_commit_range(range)?;
        let mut reports = Vec::new();

        for (oid, message) in commits {
            let mut report = self.evaluate_text(&message);
            report.commit_sha = Some(oid);
            reports.push(report);
        }

        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_set() -> RuleSet {
        RuleSet::from_config(&CmlConfig::default())
    }

    #[test]
    fn test_header_only_message_reports_missing_reference() {
        let report = default_set().evaluate_text("feat: Add login button");

        assert!(report.is_valid());
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].rule, RuleId::IssueReferenceInFooter);
        assert_eq!(report.violations[0].severity, Severity::Warning);
    }

    #[test]
    fn test_full_message_passes_every_rule() {
        let report =
            default_set().evaluate_text("fix: fix bug\n\nSee #42 for details.\n\nCloses #42");

        assert!(report.violations.is_empty());
    }

    #[test]
    fn test_disallowed_type_is_single_error() {
        let report = default_set().evaluate_text("chore: update deps");

        assert!(!report.is_valid());
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.violations[0].rule, RuleId::TypeEnum);
        assert_eq!(report.violations[0].severity, Severity::Error);
    }

    #[test]
    fn test_footer_without_reference_is_single_violation() {
        let report = default_set().evaluate_text(
            "feat: Add thing\n\nExplain the thing.\n\nSigned-off-by: Dev <dev@example.com>",
        );

        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].rule, RuleId::IssueReferenceInFooter);
    }

    #[test]
    fn test_body_line_length_boundary() {
        let at_limit = format!("feat: Add thing\n\n{}\n\nCloses #1", "a".repeat(100));
        let report = default_set().evaluate_text(&at_limit);
        assert!(report.violations.is_empty());

        let over_limit = format!("feat: Add thing\n\n{}\n\nCloses #1", "a".repeat(101));
        let report = default_set().evaluate_text(&over_limit);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.violations[0].rule, RuleId::BodyMaxLineLength);
    }

    #[test]
    fn test_missing_body_separator() {
        let report = default_set().evaluate_text("feat: Add thing\nbody right here\n\nCloses #1");

        assert!(report
            .violations
            .iter()
            .any(|v| v.rule == RuleId::BodyLeadingBlank));
    }

    #[test]
    fn test_missing_footer_separator() {
        let report = default_set().evaluate_text("feat: Add thing\n\nSome body.\nCloses #1");

        assert!(report
            .violations
            .iter()
            .any(|v| v.rule == RuleId::FooterLeadingBlank));
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let set = default_set();
        let text = "chore: update deps\nno separator\n\nCloses #1";

        let first = set.evaluate_text(text);
        let second = set.evaluate_text(text);
        assert_eq!(first.violations, second.violations);
    }

    #[test]
    fn test_violations_follow_declaration_order() {
        // Violates type-enum (1st), body-leading-blank (3rd), and
        // issue-reference-in-footer (5th), in that order.
        let report = default_set().evaluate_text("chore: update deps\nbody right here");

        let rules: Vec<RuleId> = report.violations.iter().map(|v| v.rule).collect();
        assert_eq!(
            rules,
            vec![
                RuleId::TypeEnum,
                RuleId::BodyLeadingBlank,
                RuleId::IssueReferenceInFooter
            ]
        );
    }

    #[test]
    fn test_empty_message_is_reported_not_fatal() {
        let report = default_set().evaluate_text("");

        assert!(!report.is_valid());
        assert!(report.violations.iter().any(|v| v.rule == RuleId::TypeEnum));
    }

    #[test]
    fn test_off_rule_is_skipped() {
        let mut config = CmlConfig::default();
        config.rules.type_enum.severity = Severity::Off;
        let report = RuleSet::from_config(&config).evaluate_text("chore: update deps");

        assert!(report.violations.iter().all(|v| v.rule != RuleId::TypeEnum));
    }

    #[test]
    fn test_subject_case_when_enabled() {
        let mut config = CmlConfig::default();
        config.rules.subject_case.severity = Severity::Error;

        let set = RuleSet::from_config(&config);
        assert!(set
            .evaluate_text("feat: Add thing\n\nCloses #1")
            .violations
            .iter()
            .all(|v| v.rule != RuleId::SubjectCase));

        let report = set.evaluate_text("feat: add thing\n\nCloses #1");
        assert!(report
            .violations
            .iter()
            .any(|v| v.rule == RuleId::SubjectCase && v.severity == Severity::Error));
    }

    #[test]
    fn test_never_applicability_inverts_check() {
        let mut config = CmlConfig::default();
        config.rules.subject_case.severity = Severity::Error;
        config.rules.subject_case.when = When::Never;

        let report =
            RuleSet::from_config(&config).evaluate_text("feat: Add thing\n\nCloses #1");
        assert!(report
            .violations
            .iter()
            .any(|v| v.rule == RuleId::SubjectCase));
    }
}
