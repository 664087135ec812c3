// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from cml.toml.
//! Every rule entry is a `(severity, when, parameter)` tuple; missing
//! entries and fields fall back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::rules::{CaseStyle, Severity, When};

/// Commit types allowed by default.
pub const DEFAULT_TYPES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "revert",
];

/// Default maximum line length for body and footer lines.
pub const DEFAULT_LINE_LIMIT: usize = 100;

/// The main configuration structure for cml.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CmlConfig {
    /// Rule configuration.
    pub rules: RulesConfig,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

impl CmlConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Rule configuration.
///
/// Field order is the declaration order violations are reported in.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RulesConfig {
    #[serde(rename = "type-enum")]
    pub type_enum: TypeEnumSettings,

    #[serde(rename = "subject-case")]
    pub subject_case: SubjectCaseSettings,

    #[serde(rename = "body-leading-blank")]
    pub body_leading_blank: FlagSettings,

    #[serde(rename = "body-max-line-length")]
    pub body_max_line_length: LineLengthSettings,

    #[serde(rename = "issue-reference-in-footer")]
    pub issue_reference_in_footer: FlagSettings,

    #[serde(rename = "footer-leading-blank")]
    pub footer_leading_blank: FlagSettings,

    #[serde(rename = "footer-max-line-length")]
    pub footer_max_line_length: LineLengthSettings,
}

/// Settings for the type-enum rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeEnumSettings {
    pub severity: Severity,
    pub when: When,
    pub values: Vec<String>,
}

impl Default for TypeEnumSettings {
    fn default() -> Self {
        Self {
            severity: Severity::Error,
            when: When::Always,
            values: DEFAULT_TYPES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Settings for the subject-case rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubjectCaseSettings {
    pub severity: Severity,
    pub when: When,
    pub case: CaseStyle,
}

impl Default for SubjectCaseSettings {
    fn default() -> Self {
        Self {
            severity: Severity::Off,
            when: When::Always,
            case: CaseStyle::Sentence,
        }
    }
}

/// Settings for rules without a parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagSettings {
    pub severity: Severity,
    pub when: When,
}

impl Default for FlagSettings {
    fn default() -> Self {
        Self {
            severity: Severity::Warning,
            when: When::Always,
        }
    }
}

/// Settings for the line length rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LineLengthSettings {
    pub severity: Severity,
    pub when: When,
    pub limit: usize,
}

impl Default for LineLengthSettings {
    fn default() -> Self {
        Self {
            severity: Severity::Error,
            when: When::Always,
            limit: DEFAULT_LINE_LIMIT,
        }
    }
}

/// UI/UX configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors.
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CmlConfig::default();
        assert_eq!(config.rules.type_enum.severity, Severity::Error);
        assert_eq!(config.rules.subject_case.severity, Severity::Off);
        assert_eq!(config.rules.body_max_line_length.limit, 100);
        assert!(config.ui.color);
    }

    #[test]
    fn test_default_types_exclude_chore() {
        assert!(!DEFAULT_TYPES.contains(&"chore"));
        assert!(DEFAULT_TYPES.contains(&"feat"));
    }

    #[test]
    fn test_config_serialization() {
        let config = CmlConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("type-enum"));
        assert!(toml_str.contains("severity"));
    }
}
