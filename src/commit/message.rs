// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

/// Line git writes above the diff in `commit --verbose`; everything from
/// here down is not part of the message.
const SCISSORS: &str = "------------------------ >8 ------------------------";

/// A raw commit message split into header and body.
///
/// Parsing never fails: whatever the text looks like, the first line is the
/// header and the remaining non-blank content is the body. Shape problems
/// are left for the rules to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// The full message text as read.
    pub raw: String,
    /// First line.
    pub header: String,
    /// Content after the blank separator line(s), if any.
    pub body: Option<String>,
    /// Number of blank lines between the header and the body.
    pub separator_lines: usize,
}

impl CommitMessage {
    /// Create a message that consists of a header only.
    pub fn new(header: impl Into<String>) -> Self {
        let header = header.into();
        Self {
            raw: header.clone(),
            header,
            body: None,
            separator_lines: 0,
        }
    }

    /// Set the body, separated from the header by one blank line.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        let body_str = body.into();
        if !body_str.trim().is_empty() {
            self.raw = format!("{}\n\n{}", self.header, body_str);
            self.body = Some(body_str);
            self.separator_lines = 1;
        }
        self
    }

    /// Parse a commit message from a string.
    pub fn parse(message: &str) -> Self {
        let mut lines = message.lines();
        let header = lines.next().unwrap_or("").to_string();

        let rest: Vec<&str> = lines.collect();
        let separator_lines = rest
            .iter()
            .take_while(|line| line.trim().is_empty())
            .count();

        let mut body_lines = &rest[separator_lines..];
        while let Some((last, init)) = body_lines.split_last() {
            if !last.trim().is_empty() {
                break;
            }
            body_lines = init;
        }

        let body = if body_lines.is_empty() {
            None
        } else {
            Some(body_lines.join("\n"))
        };

        Self {
            raw: message.to_string(),
            header,
            body,
            separator_lines: if body_lines.is_empty() { 0 } else { separator_lines },
        }
    }

    /// Parse the contents of a `COMMIT_EDITMSG`-style file.
    ///
    /// Drops comment lines and everything below the scissors line, and
    /// leading blank lines, the way git cleans up an edited message.
    pub fn from_edit_file(content: &str) -> Self {
        let mut kept = Vec::new();
        for line in content.lines() {
            if let Some(comment) = line.strip_prefix('#') {
                if comment.trim() == SCISSORS {
                    break;
                }
                continue;
            }
            kept.push(line);
        }

        let start = kept
            .iter()
            .position(|line| !line.trim().is_empty())
            .unwrap_or(kept.len());

        Self::parse(&kept[start..].join("\n"))
    }

    /// Iterate over the body lines (empty if there is no body).
    pub fn body_lines(&self) -> impl Iterator<Item = &str> {
        self.body.as_deref().unwrap_or("").lines()
    }

    /// Whether the message has no content at all.
    pub fn is_empty(&self) -> bool {
        self.header.trim().is_empty() && self.body.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_message_new() {
        let msg = CommitMessage::new("dog: refill water bowl");
        assert_eq!(msg.header, "dog: refill water bowl");
        assert!(msg.body.is_none());
        assert_eq!(msg.separator_lines, 0);
    }

    #[test]
    fn test_commit_message_builder() {
        let msg = CommitMessage::new("dog: refill water bowl").with_body("The bowl was empty.");
        assert_eq!(msg.body.as_deref(), Some("The bowl was empty."));
        assert_eq!(msg.separator_lines, 1);
        assert_eq!(msg.raw, "dog: refill water bowl\n\nThe bowl was empty.");
    }

    #[test]
    fn test_parse_header_only() {
        let msg = CommitMessage::parse("dog: refill water bowl\n");
        assert_eq!(msg.header, "dog: refill water bowl");
        assert!(msg.body.is_none());
    }

    #[test]
    fn test_parse_with_body() {
        let msg = CommitMessage::parse("dog: refill water bowl\n\nFirst line.\nSecond line.\n\n");
        assert_eq!(msg.body.as_deref(), Some("First line.\nSecond line."));
        assert_eq!(msg.separator_lines, 1);
        assert_eq!(msg.body_lines().count(), 2);
    }

    #[test]
    fn test_parse_body_without_separator() {
        let msg = CommitMessage::parse("dog: refill water bowl\nno blank line");
        assert_eq!(msg.body.as_deref(), Some("no blank line"));
        assert_eq!(msg.separator_lines, 0);
    }

    #[test]
    fn test_parse_body_with_two_separators() {
        let msg = CommitMessage::parse("dog: refill water bowl\n\n\nbody");
        assert_eq!(msg.separator_lines, 2);
    }

    #[test]
    fn test_parse_keeps_inner_blank_lines() {
        let msg = CommitMessage::parse("a: b\n\npara one\n\npara two");
        assert_eq!(msg.body.as_deref(), Some("para one\n\npara two"));
    }

    #[test]
    fn test_parse_empty() {
        let msg = CommitMessage::parse("");
        assert_eq!(msg.header, "");
        assert!(msg.is_empty());
    }

    #[test]
    fn test_parse_keeps_header_whitespace() {
        let msg = CommitMessage::parse("  dog: refill water bowl ");
        assert_eq!(msg.header, "  dog: refill water bowl ");
    }

    #[test]
    fn test_from_edit_file_strips_comments() {
        let content = "\n# leading comment\ndog: refill water bowl\n\n# Please enter the commit message\nBody text\n";
        let msg = CommitMessage::from_edit_file(content);
        assert_eq!(msg.header, "dog: refill water bowl");
        assert_eq!(msg.body.as_deref(), Some("Body text"));
        assert_eq!(msg.separator_lines, 1);
    }

    #[test]
    fn test_from_edit_file_stops_at_scissors() {
        let content = "dog: refill water bowl\n# ------------------------ >8 ------------------------\ndiff --git a/x b/x\n";
        let msg = CommitMessage::from_edit_file(content);
        assert_eq!(msg.header, "dog: refill water bowl");
        assert!(msg.body.is_none());
    }
}
