// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook script templates.

/// Hooks that cml can install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookTemplate {
    /// Validates the message git is about to record.
    CommitMsg,
}

impl HookTemplate {
    /// Get all installable hooks.
    pub fn all() -> &'static [HookTemplate] {
        &[HookTemplate::CommitMsg]
    }

    /// Get the hook filename in .git/hooks.
    pub fn filename(&self) -> &'static str {
        match self {
            HookTemplate::CommitMsg => "commit-msg",
        }
    }

    /// Generate the hook script.
    pub fn generate(&self) -> String {
        match self {
            HookTemplate::CommitMsg => format!(
                "#!/bin/sh\n\
                 # CML Git Hook\n\
                 # Generated by cml v{}\n\
                 \n\
                 exec cml check --message-file \"$1\"\n",
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}

impl std::str::FromStr for HookTemplate {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "commit-msg" => Ok(HookTemplate::CommitMsg),
            _ => Err(()),
        }
    }
}
