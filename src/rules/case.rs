// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Case style detection for descriptions.
//!
//! A text "is in" a case style when converting it to that style leaves it
//! unchanged.

use serde::{Deserialize, Serialize};

/// A named letter-case convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseStyle {
    LowerCase,
    UpperCase,
    CamelCase,
    KebabCase,
    PascalCase,
    SentenceCase,
    SnakeCase,
    StartCase,
}

impl CaseStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStyle::LowerCase => "lower-case",
            CaseStyle::UpperCase => "upper-case",
            CaseStyle::CamelCase => "camel-case",
            CaseStyle::KebabCase => "kebab-case",
            CaseStyle::PascalCase => "pascal-case",
            CaseStyle::SentenceCase => "sentence-case",
            CaseStyle::SnakeCase => "snake-case",
            CaseStyle::StartCase => "start-case",
        }
    }

    /// Convert `text` to this case style.
    pub fn convert(&self, text: &str) -> String {
        match self {
            CaseStyle::LowerCase => text.to_lowercase(),
            CaseStyle::UpperCase => text.to_uppercase(),
            CaseStyle::SentenceCase => upper_first(text),
            CaseStyle::CamelCase => {
                let mut out = String::new();
                for (i, word) in words(text).iter().enumerate() {
                    if i == 0 {
                        out.push_str(&word.to_lowercase());
                    } else {
                        out.push_str(&capitalize(word));
                    }
                }
                out
            }
            CaseStyle::PascalCase => words(text).iter().map(|w| capitalize(w)).collect(),
            CaseStyle::KebabCase => join_lower(text, "-"),
            CaseStyle::SnakeCase => join_lower(text, "_"),
            CaseStyle::StartCase => words(text)
                .iter()
                .map(|w| upper_first(w))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Whether `text` is already written in this case style.
    ///
    /// Texts that do not start with a letter are not in any style.
    pub fn matches(&self, text: &str) -> bool {
        match text.chars().next() {
            Some(c) if c.is_alphabetic() => self.convert(text) == text,
            _ => false,
        }
    }
}

impl std::fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CaseStyle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lower-case" | "lowercase" => Ok(CaseStyle::LowerCase),
            "upper-case" | "uppercase" => Ok(CaseStyle::UpperCase),
            "camel-case" | "camelcase" => Ok(CaseStyle::CamelCase),
            "kebab-case" | "kebabcase" => Ok(CaseStyle::KebabCase),
            "pascal-case" | "pascalcase" => Ok(CaseStyle::PascalCase),
            "sentence-case" | "sentencecase" => Ok(CaseStyle::SentenceCase),
            "snake-case" | "snakecase" => Ok(CaseStyle::SnakeCase),
            "start-case" | "startcase" => Ok(CaseStyle::StartCase),
            _ => Err(()),
        }
    }
}

/// Split text into words on non-alphanumeric characters and on
/// lower-to-upper transitions (`fooBar` -> `foo`, `Bar`).
fn words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in text.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_numeric();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn capitalize(word: &str) -> String {
    upper_first(&word.to_lowercase())
}

fn join_lower(text: &str, sep: &str) -> String {
    words(text)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}
