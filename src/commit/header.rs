// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Lenient `<component>: <description>` header parsing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A component token (word characters, dots, underscores, hyphens),
    /// a colon, exactly one space, and a non-empty remainder.
    static ref HEADER_REGEX: Regex = Regex::new(r"^(?P<component>[\w.\-]+): (?P<description>.+)$").unwrap();
}

/// A header split into component and description.
///
/// If the header is not of the form `<component>: <description>`, the
/// component is empty and the description is the whole header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    /// Subsystem token before the colon; empty if the header has none.
    pub component: String,
    /// Text after `": "`, or the whole header on a shape mismatch.
    pub description: String,
    /// The header as given.
    pub raw: String,
}

impl ParsedHeader {
    /// Split a header line. Never fails.
    pub fn parse(header: &str) -> Self {
        match HEADER_REGEX.captures(header) {
            Some(captures) => Self {
                component: captures["component"].to_string(),
                description: captures["description"].to_string(),
                raw: header.to_string(),
            },
            None => Self {
                component: String::new(),
                description: header.to_string(),
                raw: header.to_string(),
            },
        }
    }

    /// First whitespace-delimited word of the description.
    pub fn first_word(&self) -> Option<&str> {
        self.description.split_whitespace().next()
    }

    pub fn has_component(&self) -> bool {
        !self.component.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_component_and_description() {
        let parsed = ParsedHeader::parse("dog: refill water bowl");
        assert_eq!(parsed.component, "dog");
        assert_eq!(parsed.description, "refill water bowl");
        assert_eq!(format!("{}: {}", parsed.component, parsed.description), parsed.raw);
    }

    #[test]
    fn test_parse_component_with_punctuation() {
        for (header, component) in [
            ("build.rs: regenerate bindings", "build.rs"),
            ("net_io: drop stale sockets", "net_io"),
            ("foo-pkg: bump to v2", "foo-pkg"),
        ] {
            let parsed = ParsedHeader::parse(header);
            assert_eq!(parsed.component, component, "{}", header);
        }
    }

    #[test]
    fn test_parse_description_with_colons() {
        let parsed = ParsedHeader::parse("docs: update README: add examples");
        assert_eq!(parsed.component, "docs");
        assert_eq!(parsed.description, "update README: add examples");
    }

    #[test]
    fn test_no_colon_falls_back() {
        let header = "migrate shoes to new shoe module.";
        let parsed = ParsedHeader::parse(header);
        assert_eq!(parsed.component, "");
        assert_eq!(parsed.description, header);
        assert!(!parsed.has_component());
    }

    #[test]
    fn test_whitespace_in_component_falls_back() {
        let parsed = ParsedHeader::parse("shoe module: migrate shoes");
        assert_eq!(parsed.component, "");
        assert_eq!(parsed.description, "shoe module: migrate shoes");
    }

    #[test]
    fn test_missing_space_after_colon_falls_back() {
        let parsed = ParsedHeader::parse("dog:refill water bowl");
        assert_eq!(parsed.component, "");
        assert_eq!(parsed.description, "dog:refill water bowl");
    }

    #[test]
    fn test_empty_remainder_falls_back() {
        let parsed = ParsedHeader::parse("dog: ");
        assert_eq!(parsed.component, "");
        assert_eq!(parsed.description, "dog: ");
    }

    #[test]
    fn test_empty_header() {
        let parsed = ParsedHeader::parse("");
        assert_eq!(parsed.component, "");
        assert_eq!(parsed.description, "");
        assert_eq!(parsed.first_word(), None);
    }

    #[test]
    fn test_first_word() {
        let parsed = ParsedHeader::parse("dog:   refill water bowl");
        assert_eq!(parsed.first_word(), Some("refill"));
    }
}
