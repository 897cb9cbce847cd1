// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

use crate::error::{CclintError, CommitError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Conventional header: `type(scope)!: subject`.
    static ref HEADER_REGEX: Regex =
        Regex::new(r"^(?P<type>\w*)(?:\((?P<scope>.*)\))?(?P<breaking>!)?: (?P<subject>.*)$")
            .expect("header regex is valid");

    /// Git trailer or breaking change note that opens a footer.
    static ref FOOTER_REGEX: Regex =
        Regex::new(r"^(?:BREAKING[ -]CHANGE|[\w-]+)(?:: | #)").expect("footer regex is valid");
}

/// Marker git writes before the diff in verbose commit templates.
const SCISSORS: &str = "# ------------------------ >8 ------------------------";

/// A commit message split into its conventional parts.
///
/// Only the header is structured. A header that does not follow the
/// conventional grammar leaves `commit_type`, `scope` and `subject` empty
/// rather than failing, so that the rules can say what is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// First line, as written.
    pub header: String,
    /// Type token (feat, fix, etc.), exactly as written.
    pub commit_type: Option<String>,
    /// Optional scope.
    pub scope: Option<String>,
    /// Subject line after the `: ` separator.
    pub subject: Option<String>,
    /// Optional body.
    pub body: Option<String>,
    /// Optional footer (trailers, breaking change notes).
    pub footer: Option<String>,
    /// Whether this is a breaking change.
    pub is_breaking: bool,
    /// Whether a blank line separates the header from what follows.
    pub body_leading_blank: bool,
    /// Whether a blank line separates the footer from what precedes it.
    pub footer_leading_blank: bool,
    /// The cleaned-up message the parts were taken from.
    pub raw: String,
}

impl CommitMessage {
    /// Parse a commit message from a string.
    ///
    /// Git comment lines are dropped and everything below a scissors line is
    /// ignored.
    pub fn parse(message: &str) -> Result<Self> {
        let lines = strip_comments(message);

        if lines.iter().all(|line| line.trim().is_empty()) {
            return Err(CclintError::Commit(CommitError::EmptyMessage));
        }

        let header = lines[0].to_string();
        let rest = &lines[1..];

        let body_leading_blank = rest.first().map_or(true, |line| line.trim().is_empty());

        // Split the remainder into paragraphs to find the footer.
        let (body_lines, footer_lines) = split_footer(rest);

        let footer_leading_blank = footer_lines.is_empty()
            || body_lines.last().is_some_and(|line| line.trim().is_empty());

        let body = join_paragraph(body_lines);
        let footer = join_paragraph(footer_lines);

        let (commit_type, scope, breaking_marker, subject) = match HEADER_REGEX.captures(&header) {
            Some(captures) => (
                captures
                    .name("type")
                    .map(|m| m.as_str().to_string())
                    .filter(|s| !s.is_empty()),
                captures
                    .name("scope")
                    .map(|m| m.as_str().to_string())
                    .filter(|s| !s.is_empty()),
                captures.name("breaking").is_some(),
                captures
                    .name("subject")
                    .map(|m| m.as_str().to_string())
                    .filter(|s| !s.trim().is_empty()),
            ),
            None => (None, None, false, None),
        };

        let is_breaking = breaking_marker
            || footer.as_deref().is_some_and(|f| {
                f.lines()
                    .any(|line| line.starts_with("BREAKING CHANGE") || line.starts_with("BREAKING-CHANGE"))
            });

        Ok(Self {
            header,
            commit_type,
            scope,
            subject,
            body,
            footer,
            is_breaking,
            body_leading_blank,
            footer_leading_blank,
            raw: lines.join("\n"),
        })
    }

    /// Get the header length in characters.
    pub fn header_len(&self) -> usize {
        self.header.chars().count()
    }
}

/// Drop git comment lines, cut at the scissors line, and trim trailing blanks.
fn strip_comments(message: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = message
        .lines()
        .take_while(|line| *line != SCISSORS)
        .filter(|line| !line.starts_with('#'))
        .collect();

    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    // Leading blank lines carry no meaning either.
    let first = lines
        .iter()
        .position(|line| !line.trim().is_empty())
        .unwrap_or(lines.len());
    lines.split_off(first)
}

/// Split the lines after the header into body and footer.
///
/// The footer starts at the first trailer or breaking change line of the
/// final paragraph, with or without a blank line before it.
fn split_footer<'a>(rest: &'a [&'a str]) -> (&'a [&'a str], &'a [&'a str]) {
    let paragraph_start = rest
        .iter()
        .rposition(|line| line.trim().is_empty())
        .map_or(0, |i| i + 1);

    let start = rest[paragraph_start..]
        .iter()
        .position(|line| FOOTER_REGEX.is_match(line))
        .map_or(rest.len(), |i| paragraph_start + i);

    rest.split_at(start)
}

fn join_paragraph(lines: &[&str]) -> Option<String> {
    let text = lines.join("\n");
    let text = text.trim_matches('\n').trim_end();
    (!text.trim().is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_only() {
        let msg = CommitMessage::parse("feat(core): add new feature").unwrap();
        assert_eq!(msg.commit_type.as_deref(), Some("feat"));
        assert_eq!(msg.scope.as_deref(), Some("core"));
        assert_eq!(msg.subject.as_deref(), Some("add new feature"));
        assert!(msg.body.is_none());
        assert!(msg.footer.is_none());
        assert!(!msg.is_breaking);
    }

    #[test]
    fn test_parse_keeps_type_as_written() {
        let msg = CommitMessage::parse("Fix: handle empty input").unwrap();
        assert_eq!(msg.commit_type.as_deref(), Some("Fix"));

        let msg = CommitMessage::parse("hotfix: patch prod").unwrap();
        assert_eq!(msg.commit_type.as_deref(), Some("hotfix"));
    }

    #[test]
    fn test_parse_with_body() {
        let msg = CommitMessage::parse("fix: fix bug\n\nThis is the body\nover two lines").unwrap();
        assert_eq!(msg.commit_type.as_deref(), Some("fix"));
        assert_eq!(msg.body.as_deref(), Some("This is the body\nover two lines"));
        assert!(msg.body_leading_blank);
        assert_eq!(msg.body.as_deref().map(|b| b.lines().count()), Some(2));
    }

    #[test]
    fn test_parse_missing_leading_blank() {
        let msg = CommitMessage::parse("fix: fix bug\nbody right away").unwrap();
        assert!(!msg.body_leading_blank);
        assert_eq!(msg.body.as_deref(), Some("body right away"));
    }

    #[test]
    fn test_parse_footer() {
        let msg = CommitMessage::parse(
            "feat: add api\n\nLonger explanation.\n\nRefs #42\nReviewed-by: Jane",
        )
        .unwrap();
        assert_eq!(msg.body.as_deref(), Some("Longer explanation."));
        assert_eq!(msg.footer.as_deref(), Some("Refs #42\nReviewed-by: Jane"));
        assert!(msg.footer_leading_blank);
        assert!(!msg.is_breaking);
    }

    #[test]
    fn test_parse_footer_without_body() {
        let msg = CommitMessage::parse("feat: add api\n\nBREAKING CHANGE: drops v1").unwrap();
        assert!(msg.body.is_none());
        assert_eq!(msg.footer.as_deref(), Some("BREAKING CHANGE: drops v1"));
        assert!(msg.is_breaking);
    }

    #[test]
    fn test_parse_trailer_right_after_body() {
        let msg =
            CommitMessage::parse("feat: add api\n\nExplain the change.\nBREAKING CHANGE: drops v1")
                .unwrap();
        assert_eq!(msg.body.as_deref(), Some("Explain the change."));
        assert_eq!(msg.footer.as_deref(), Some("BREAKING CHANGE: drops v1"));
        assert!(msg.is_breaking);
        assert!(!msg.footer_leading_blank);
    }

    #[test]
    fn test_parse_trailer_paragraph_followed_by_prose() {
        let msg = CommitMessage::parse("fix: x\n\nRefs #1\n\nmore body text").unwrap();
        assert_eq!(msg.body.as_deref(), Some("Refs #1\n\nmore body text"));
        assert!(msg.footer.is_none());
        assert!(msg.footer_leading_blank);
    }

    #[test]
    fn test_parse_breaking_marker() {
        let msg = CommitMessage::parse("feat!: breaking change").unwrap();
        assert!(msg.is_breaking);
        assert_eq!(msg.commit_type.as_deref(), Some("feat"));
    }

    #[test]
    fn test_parse_non_conventional_header() {
        let msg = CommitMessage::parse("not a conventional commit").unwrap();
        assert!(msg.commit_type.is_none());
        assert!(msg.subject.is_none());
        assert_eq!(msg.header, "not a conventional commit");
    }

    #[test]
    fn test_parse_empty_type() {
        let msg = CommitMessage::parse(": subject only").unwrap();
        assert!(msg.commit_type.is_none());
        assert_eq!(msg.subject.as_deref(), Some("subject only"));
    }

    #[test]
    fn test_parse_strips_git_comments() {
        let raw = "feat: add thing\n\n# Please enter the commit message\n# Lines starting with '#' are ignored\n";
        let msg = CommitMessage::parse(raw).unwrap();
        assert_eq!(msg.raw, "feat: add thing");
        assert!(msg.body.is_none());
    }

    #[test]
    fn test_parse_stops_at_scissors() {
        let raw = format!("fix: typo\n{}\ndiff --git a/x b/x\n", SCISSORS);
        let msg = CommitMessage::parse(&raw).unwrap();
        assert_eq!(msg.raw, "fix: typo");
    }

    #[test]
    fn test_parse_empty() {
        assert!(CommitMessage::parse("").is_err());
        assert!(CommitMessage::parse("\n\n# only a comment\n").is_err());
    }

    #[test]
    fn test_header_len_counts_chars() {
        let msg = CommitMessage::parse("docs: café").unwrap();
        assert_eq!(msg.header_len(), 10);
    }
}
