// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in rule checks.
//!
//! Each check is a pure predicate over a parsed message: it reports
//! whether the rule's condition *holds*. The engine applies severity and
//! the always/never applicability on top.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::message::CommitMessage;

use super::engine::When;

lazy_static! {
    /// An issue reference token, e.g. `#42`.
    static ref ISSUE_REFERENCE_REGEX: Regex = Regex::new(r"#[0-9]+").unwrap();
}

/// Identifiers for the built-in rules, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    TypeEnum,
    SubjectCase,
    BodyLeadingBlank,
    BodyMaxLineLength,
    IssueReferenceInFooter,
    FooterLeadingBlank,
    FooterMaxLineLength,
}

impl RuleId {
    /// Get the rule name used in configuration and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::TypeEnum => "type-enum",
            RuleId::SubjectCase => "subject-case",
            RuleId::BodyLeadingBlank => "body-leading-blank",
            RuleId::BodyMaxLineLength => "body-max-line-length",
            RuleId::IssueReferenceInFooter => "issue-reference-in-footer",
            RuleId::FooterLeadingBlank => "footer-leading-blank",
            RuleId::FooterMaxLineLength => "footer-max-line-length",
        }
    }

    /// Get a description of what the rule checks.
    pub fn description(self) -> &'static str {
        match self {
            RuleId::TypeEnum => "commit type is in the allowed set",
            RuleId::SubjectCase => "subject matches the configured case style",
            RuleId::BodyLeadingBlank => "blank line separates header and body",
            RuleId::BodyMaxLineLength => "body lines stay within the length limit",
            RuleId::IssueReferenceInFooter => "footer references an issue",
            RuleId::FooterLeadingBlank => "blank line separates body and footer",
            RuleId::FooterMaxLineLength => "footer lines stay within the length limit",
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Case style for the subject-case rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// First alphabetic character is uppercase.
    Sentence,
    /// No uppercase characters.
    Lower,
    /// No lowercase characters.
    Upper,
}

impl CaseStyle {
    /// Get the string representation of the case style.
    pub fn as_str(self) -> &'static str {
        match self {
            CaseStyle::Sentence => "sentence",
            CaseStyle::Lower => "lower",
            CaseStyle::Upper => "upper",
        }
    }

    /// Whether the text matches this case style.
    ///
    /// Text with no alphabetic characters matches any style.
    pub fn matches(self, text: &str) -> bool {
        match self {
            CaseStyle::Sentence => text
                .chars()
                .find(|c| c.is_alphabetic())
                .map(|c| c.is_uppercase())
                .unwrap_or(true),
            CaseStyle::Lower => !text.chars().any(|c| c.is_uppercase()),
            CaseStyle::Upper => !text.chars().any(|c| c.is_lowercase()),
        }
    }
}

/// Optional parameter carried by a configured rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleParam {
    /// No parameter.
    None,
    /// Maximum line length in characters.
    Limit(usize),
    /// Allowed values.
    Values(Vec<String>),
    /// Required case style.
    Case(CaseStyle),
}

impl RuleParam {
    /// Describe the parameter for the rule listing.
    pub fn describe(&self) -> String {
        match self {
            RuleParam::None => "-".to_string(),
            RuleParam::Limit(n) => n.to_string(),
            RuleParam::Values(values) => values.join(", "),
            RuleParam::Case(case) => case.as_str().to_string(),
        }
    }
}

/// Whether the rule's condition holds for the message.
///
/// Section rules are vacuously true when their section is absent; the
/// exception is `issue-reference-in-footer`, which requires a reference
/// to exist and therefore fails on a missing footer.
pub fn holds(rule: RuleId, message: &CommitMessage, param: &RuleParam) -> bool {
    match rule {
        RuleId::TypeEnum => match param {
            RuleParam::Values(values) => values.iter().any(|t| t == &message.commit_type),
            _ => true,
        },
        RuleId::SubjectCase => match param {
            RuleParam::Case(case) => case.matches(&message.subject),
            _ => true,
        },
        RuleId::BodyLeadingBlank => !message.has_body() || message.body_leading_blank,
        RuleId::BodyMaxLineLength => match param {
            RuleParam::Limit(limit) => lines_within(&message.body, *limit),
            _ => true,
        },
        RuleId::IssueReferenceInFooter => message
            .footer
            .iter()
            .any(|line| ISSUE_REFERENCE_REGEX.is_match(line)),
        RuleId::FooterLeadingBlank => !message.has_footer() || message.footer_leading_blank,
        RuleId::FooterMaxLineLength => match param {
            RuleParam::Limit(limit) => lines_within(&message.footer, *limit),
            _ => true,
        },
    }
}

fn lines_within(lines: &[String], limit: usize) -> bool {
    lines.iter().all(|line| line.chars().count() <= limit)
}

fn longest_line(lines: &[String]) -> (usize, usize) {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| (i + 1, line.chars().count()))
        .max_by_key(|(_, len)| *len)
        .unwrap_or((0, 0))
}

/// Build the failure message and suggestion for a violated rule.
pub fn failure_message(
    rule: RuleId,
    when: When,
    param: &RuleParam,
    message: &CommitMessage,
) -> (String, Option<String>) {
    let inverted = when == When::Never;

    match rule {
        RuleId::TypeEnum => {
            let allowed = match param {
                RuleParam::Values(values) => values.join(", "),
                _ => String::new(),
            };
            if inverted {
                (
                    format!("type '{}' must not be one of: {}", message.commit_type, allowed),
                    None,
                )
            } else {
                (
                    format!("type '{}' is not in the allowed set", message.commit_type),
                    Some(format!("use one of: {}", allowed)),
                )
            }
        }
        RuleId::SubjectCase => {
            let case = match param {
                RuleParam::Case(case) => case.as_str(),
                _ => "configured",
            };
            if inverted {
                (format!("subject must not be {}-case", case), None)
            } else {
                (
                    format!("subject is not {}-case", case),
                    match param {
                        RuleParam::Case(CaseStyle::Sentence) => {
                            Some("capitalize the first letter of the subject".to_string())
                        }
                        _ => None,
                    },
                )
            }
        }
        RuleId::BodyLeadingBlank => {
            if inverted {
                ("body must follow the header without a blank line".to_string(), None)
            } else {
                (
                    "body is not separated from the header by a blank line".to_string(),
                    Some("insert a blank line after the header".to_string()),
                )
            }
        }
        RuleId::BodyMaxLineLength => {
            let limit = match param {
                RuleParam::Limit(limit) => *limit,
                _ => 0,
            };
            if inverted {
                (
                    format!("body must contain a line longer than {} characters", limit),
                    None,
                )
            } else {
                let (index, len) = longest_line(&message.body);
                (
                    format!("body line {} is {} characters (max: {})", index, len, limit),
                    Some(format!("wrap body lines at {} characters", limit)),
                )
            }
        }
        RuleId::IssueReferenceInFooter => {
            if inverted {
                ("footer must not reference an issue".to_string(), None)
            } else {
                (
                    "footer does not reference an issue".to_string(),
                    Some("add a reference like 'Closes #123' to the footer".to_string()),
                )
            }
        }
        RuleId::FooterLeadingBlank => {
            if inverted {
                ("footer must follow the body without a blank line".to_string(), None)
            } else {
                (
                    "footer is not separated from the body by a blank line".to_string(),
                    Some("insert a blank line before the footer".to_string()),
                )
            }
        }
        RuleId::FooterMaxLineLength => {
            let limit = match param {
                RuleParam::Limit(limit) => *limit,
                _ => 0,
            };
            if inverted {
                (
                    format!("footer must contain a line longer than {} characters", limit),
                    None,
                )
            } else {
                let (index, len) = longest_line(&message.footer);
                (
                    format!("footer line {} is {} characters (max: {})", index, len, limit),
                    Some(format!("wrap footer lines at {} characters", limit)),
                )
            }
        }
    }
}
