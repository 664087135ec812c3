// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure.

/// A structured commit message.
///
/// The type is kept as a raw string so that an unknown type is a rule
/// violation rather than a parse error. Body and footer are ordered line
/// sequences; an empty sequence means the section is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// Commit type from the header (feat, fix, etc.), empty if the header
    /// did not match the conventional form.
    pub commit_type: String,
    /// Optional scope.
    pub scope: Option<String>,
    /// Subject line.
    pub subject: String,
    /// Body lines.
    pub body: Vec<String>,
    /// Footer lines (references, trailers).
    pub footer: Vec<String>,
    /// Whether this is a breaking change.
    pub is_breaking: bool,
    /// Whether a blank line separated the header from the body.
    pub body_leading_blank: bool,
    /// Whether a blank line separated the body from the footer.
    pub footer_leading_blank: bool,
}

impl CommitMessage {
    /// Create a new commit message with canonical separators.
    pub fn new(commit_type: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            commit_type: commit_type.into(),
            scope: None,
            subject: subject.into(),
            body: Vec::new(),
            footer: Vec::new(),
            is_breaking: false,
            body_leading_blank: true,
            footer_leading_blank: true,
        }
    }

    /// Set the scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Set the body lines.
    pub fn with_body<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Set the footer lines.
    pub fn with_footer<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.footer = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Set the breaking flag.
    pub fn with_breaking(mut self, breaking: bool) -> Self {
        self.is_breaking = breaking;
        self
    }

    /// Whether the message has a body.
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }

    /// Whether the message has a footer.
    pub fn has_footer(&self) -> bool {
        !self.footer.is_empty()
    }

    /// Get the first line (header) of the commit message.
    pub fn header(&self) -> String {
        if self.commit_type.is_empty() {
            return self.subject.clone();
        }

        let mut result = String::new();
        result.push_str(&self.commit_type);

        if let Some(ref scope) = self.scope {
            result.push('(');
            result.push_str(scope);
            result.push(')');
        }

        if self.is_breaking {
            result.push('!');
        }

        result.push_str(": ");
        result.push_str(&self.subject);

        result
    }

    /// Format the commit message as a string.
    pub fn format(&self) -> String {
        let mut result = self.header();

        if self.has_body() {
            result.push_str("\n\n");
            result.push_str(&self.body.join("\n"));
        }

        if self.has_footer() {
            result.push_str("\n\n");
            result.push_str(&self.footer.join("\n"));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_message_new() {
        let msg = CommitMessage::new("feat", "Add new feature");
        assert_eq!(msg.commit_type, "feat");
        assert_eq!(msg.subject, "Add new feature");
        assert!(msg.scope.is_none());
        assert!(!msg.has_body());
        assert!(!msg.has_footer());
    }

    #[test]
    fn test_commit_message_builder() {
        let msg = CommitMessage::new("fix", "Fix bug")
            .with_scope("core")
            .with_body(["This fixes the bug"])
            .with_footer(["Closes #42"]);

        assert_eq!(msg.scope, Some("core".to_string()));
        assert!(msg.has_body());
        assert!(msg.has_footer());
    }

    #[test]
    fn test_commit_message_header() {
        let msg = CommitMessage::new("feat", "Add feature").with_scope("cli");
        assert_eq!(msg.header(), "feat(cli): Add feature");
    }

    #[test]
    fn test_commit_message_header_breaking() {
        let msg = CommitMessage::new("feat", "Change API").with_breaking(true);
        assert!(msg.header().starts_with("feat!:"));
    }

    #[test]
    fn test_commit_message_header_without_type() {
        let msg = CommitMessage::new("", "just a plain line");
        assert_eq!(msg.header(), "just a plain line");
    }

    #[test]
    fn test_commit_message_format() {
        let msg = CommitMessage::new("feat", "Add feature")
            .with_scope("api")
            .with_body(["Detailed description"]);

        assert_eq!(
            msg.format(),
            "feat(api): Add feature\n\nDetailed description"
        );
    }

    #[test]
    fn test_commit_message_format_with_footer() {
        let msg = CommitMessage::new("fix", "Fix bug")
            .with_body(["Explanation."])
            .with_footer(["Closes #7"]);

        assert_eq!(msg.format(), "fix: Fix bug\n\nExplanation.\n\nCloses #7");
    }
}
