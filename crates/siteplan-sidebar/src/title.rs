//! Entry title derivation.
//!
//! Titles come from the first H1 heading of the markdown source; entries
//! without a heading fall back to a title-cased version of their name.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

/// Regex for extracting the first H1 heading.
fn h1_regex() -> &'static Regex {
    static H1: OnceLock<Regex> = OnceLock::new();
    H1.get_or_init(|| Regex::new(r"(?m)^#\s+(.+)$").expect("invalid H1 regex"))
}

/// Derive the display title for an entry.
///
/// With heading derivation on, the first H1 of `content_path` wins; entries
/// without a heading (or with unreadable content) fall back to a title-cased
/// `name`. With heading derivation off, `name` is used as-is.
pub(crate) fn derive(content_path: Option<&Path>, name: &str, use_heading: bool) -> String {
    if !use_heading {
        return name.to_owned();
    }

    content_path
        .and_then(extract_h1)
        .unwrap_or_else(|| titlecase_from_slug(name))
}

/// Extract the first H1 heading from a markdown file.
fn extract_h1(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let caps = h1_regex().captures(&content)?;
    Some(caps[1].trim().to_owned())
}

/// Convert a slug (kebab-case or `snake_case`) to title case.
///
/// Replaces `-` and `_` with spaces, then capitalizes the first letter of
/// each word.
fn titlecase_from_slug(slug: &str) -> String {
    let mut result = String::with_capacity(slug.len());
    for word in slug.split(['-', '_', ' ']).filter(|w| !w.is_empty()) {
        if !result.is_empty() {
            result.push(' ');
        }
        capitalize_first_into(word, &mut result);
    }
    result
}

/// Capitalize the first character of a word, appending to `buf`.
fn capitalize_first_into(word: &str, buf: &mut String) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        buf.extend(first.to_uppercase());
        buf.push_str(chars.as_str());
    }
}
