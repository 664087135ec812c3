// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Section parsing for raw commit message text.

use lazy_static::lazy_static;
use regex::Regex;

use super::model::CommitMessage;

lazy_static! {
    /// Regex for the conventional commit header line.
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<type>[A-Za-z]+)(?:\((?P<scope>[^)]+)\))?(?P<breaking>!)?: ?(?P<subject>.*)$"
    )
    .unwrap();

    /// A git-style trailer line: `Token: value`.
    static ref TOKEN_TRAILER_REGEX: Regex = Regex::new(
        r"^(?:[A-Za-z][A-Za-z0-9-]*|(?i:BREAKING[ -]CHANGE)): \S"
    )
    .unwrap();

    /// An action reference line: `Closes #42`, `Fixes gh/repo#7`.
    static ref ACTION_TRAILER_REGEX: Regex = Regex::new(
        r"^(?i:close[sd]?|fix(?:e[sd])?|resolve[sd]?|refs?)\s+\S*#[0-9]+"
    )
    .unwrap();
}

/// Whether a line belongs to the footer section.
fn is_trailer_line(line: &str) -> bool {
    TOKEN_TRAILER_REGEX.is_match(line) || ACTION_TRAILER_REGEX.is_match(line)
}

impl CommitMessage {
    /// Parse a commit message from raw text.
    ///
    /// Parsing is infallible: an empty or malformed message yields empty
    /// sections, which then fail whichever rules require content. The
    /// footer is the trailing run of trailer-shaped lines; everything
    /// between header and footer is the body.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let mut lines = text.lines();
        let header = lines.next().unwrap_or("");

        let (commit_type, scope, subject, is_breaking) = match HEADER_REGEX.captures(header) {
            Some(captures) => (
                captures["type"].to_string(),
                captures.name("scope").map(|m| m.as_str().to_string()),
                captures["subject"].to_string(),
                captures.name("breaking").is_some(),
            ),
            None => (String::new(), None, header.to_string(), false),
        };

        let rest: Vec<&str> = lines.collect();

        // Locate the first and last content lines after the header.
        let content_start = rest.iter().position(|l| !l.trim().is_empty());
        let body_leading_blank = match content_start {
            Some(i) => i > 0,
            None => true,
        };
        let content_start = content_start.unwrap_or(rest.len());
        let mut content_end = rest.len();
        while content_end > content_start && rest[content_end - 1].trim().is_empty() {
            content_end -= 1;
        }
        let content = &rest[content_start..content_end];

        // The footer is the trailing run of trailer lines.
        let mut footer_start = content.len();
        while footer_start > 0 {
            let line = content[footer_start - 1];
            if line.trim().is_empty() || !is_trailer_line(line) {
                break;
            }
            footer_start -= 1;
        }
        let footer: Vec<String> = content[footer_start..]
            .iter()
            .map(|l| l.to_string())
            .collect();

        let footer_leading_blank = if footer.is_empty() || footer_start == 0 {
            // Separated from the header, or no footer at all.
            body_leading_blank
        } else {
            content[footer_start - 1].trim().is_empty()
        };

        // Body is what remains, with separator blanks trimmed.
        let mut body_end = footer_start;
        while body_end > 0 && content[body_end - 1].trim().is_empty() {
            body_end -= 1;
        }
        let body: Vec<String> = content[..body_end].iter().map(|l| l.to_string()).collect();

        Self {
            commit_type,
            scope,
            subject,
            body,
            footer,
            is_breaking,
            body_leading_blank,
            footer_leading_blank,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_only() {
        let msg = CommitMessage::parse("feat(core): Add new feature");
        assert_eq!(msg.commit_type, "feat");
        assert_eq!(msg.scope, Some("core".to_string()));
        assert_eq!(msg.subject, "Add new feature");
        assert!(!msg.has_body());
        assert!(!msg.has_footer());
    }

    #[test]
    fn test_parse_breaking_marker() {
        let msg = CommitMessage::parse("feat!: Change the API");
        assert!(msg.is_breaking);
        assert_eq!(msg.subject, "Change the API");
    }

    #[test]
    fn test_parse_unconventional_header() {
        let msg = CommitMessage::parse("update the readme");
        assert_eq!(msg.commit_type, "");
        assert_eq!(msg.subject, "update the readme");
    }

    #[test]
    fn test_parse_empty_message() {
        let msg = CommitMessage::parse("");
        assert_eq!(msg.commit_type, "");
        assert_eq!(msg.subject, "");
        assert!(!msg.has_body());
        assert!(!msg.has_footer());
    }

    #[test]
    fn test_parse_body_and_footer() {
        let msg = CommitMessage::parse("fix: Fix bug\n\nSee #42 for details.\n\nCloses #42");
        assert_eq!(msg.body, vec!["See #42 for details."]);
        assert_eq!(msg.footer, vec!["Closes #42"]);
        assert!(msg.body_leading_blank);
        assert!(msg.footer_leading_blank);
    }

    #[test]
    fn test_parse_body_without_separator() {
        let msg = CommitMessage::parse("feat: Add thing\nbody starts immediately");
        assert_eq!(msg.body, vec!["body starts immediately"]);
        assert!(!msg.body_leading_blank);
    }

    #[test]
    fn test_parse_footer_without_separator() {
        let msg = CommitMessage::parse("feat: Add thing\n\nSome body line.\nCloses #42");
        assert_eq!(msg.body, vec!["Some body line."]);
        assert_eq!(msg.footer, vec!["Closes #42"]);
        assert!(!msg.footer_leading_blank);
    }

    #[test]
    fn test_parse_footer_only() {
        let msg = CommitMessage::parse("feat: Add thing\n\nCloses #42");
        assert!(!msg.has_body());
        assert_eq!(msg.footer, vec!["Closes #42"]);
        assert!(msg.footer_leading_blank);
    }

    #[test]
    fn test_parse_multi_line_footer() {
        let msg = CommitMessage::parse(
            "feat: Add thing\n\nBody.\n\nCloses #1\nSigned-off-by: Dev <dev@example.com>",
        );
        assert_eq!(msg.body, vec!["Body."]);
        assert_eq!(msg.footer.len(), 2);
    }

    #[test]
    fn test_parse_multi_paragraph_body() {
        let msg = CommitMessage::parse("feat: Add thing\n\nFirst paragraph.\n\nSecond paragraph.");
        assert_eq!(msg.body, vec!["First paragraph.", "", "Second paragraph."]);
        assert!(!msg.has_footer());
    }

    #[test]
    fn test_parse_prose_fixes_stays_in_body() {
        // An action keyword without an issue token is prose, not a trailer.
        let msg = CommitMessage::parse("fix: Fix crash\n\nFixes a crash in the parser");
        assert_eq!(msg.body, vec!["Fixes a crash in the parser"]);
        assert!(!msg.has_footer());
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let msg = CommitMessage::parse("\nfeat: Add thing\n\n\n");
        assert_eq!(msg.commit_type, "feat");
        assert!(!msg.has_body());
    }
}
