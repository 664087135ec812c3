// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::CmlConfig;

/// Get the default configuration.
pub fn default_config() -> CmlConfig {
    CmlConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# CML Configuration File
# Author: Eshan Roy
# SPDX-License-Identifier: MIT

# Each rule maps to (severity, when, parameter).
# severity: "off" disables the rule, "warning" reports without failing,
#           "error" fails the check.
# when:     "always" requires the condition, "never" forbids it.

[rules.type-enum]
severity = "error"
when = "always"
values = ["feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "revert"]

[rules.subject-case]
severity = "off"
when = "always"
case = "sentence"

[rules.body-leading-blank]
severity = "warning"
when = "always"

[rules.body-max-line-length]
severity = "error"
when = "always"
limit = 100

[rules.issue-reference-in-footer]
severity = "warning"
when = "always"

[rules.footer-leading-blank]
severity = "warning"
when = "always"

[rules.footer-max-line-length]
severity = "error"
when = "always"
limit = 100

[ui]
color = true
"#
}
