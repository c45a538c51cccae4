//! Application name normalization.
//!
//! Two related cleaners live here:
//!
//! - [`clean_name`] feeds the similarity oracle: it reduces a raw
//!   application name to the tokens that actually identify the product,
//!   dropping version numbers, architecture markers, and generic filler
//!   words ("Tool", "Client", ...).
//! - [`normalize_display_name`] produces a human-readable cleaned name for
//!   the normalization report, collapsing the many spellings of the same
//!   product ("Foo 2019 (x64)" -> "Foo") without destroying readability.
//!
//! Both are pure functions with no shared state.

use regex::Regex;
use std::sync::OnceLock;

/// Filler words that carry no product identity. Raw tokens matching any of
/// these (case-sensitively, as the source exports capitalize them) are
/// dropped before overlap and fuzzy comparison.
const STOPWORDS: &[&str] = &[
    "Tool",
    "Tools",
    "Module",
    "Update",
    "Software",
    "",
    "App",
    "Client",
    "for",
    "and",
    "in",
    "Installer",
    "Drive",
    "Driver",
    "Web",
    "Helper",
    "Support",
    "Center",
    "Manager",
    "File",
    "Reader",
    "C",
    "Launcher",
    "Plugin",
    "Service",
    "Setup",
    "x86",
    "(x86)",
    "x64",
    "(x64)",
    "X86",
];

/// Architecture tags stripped from display names, longest-first so that
/// "ARM64" is consumed before "ARM".
const ARCH_TAGS: &[&str] = &[
    "ARM64", "arm64", "amd64", "arm", "ARM", "X64", "X86", "x64", "x86", "64-bit", "32-bit",
    "32bit", "64bit",
];

fn version_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+(\.\d+)*$").expect("static regex is valid"))
}

/// True for purely numeric or dotted-numeric tokens like "2019" or "3.1.4".
#[must_use]
pub fn is_version_token(token: &str) -> bool {
    version_token_re().is_match(token)
}

/// Reduce a raw application name to its identifying tokens, in order.
///
/// Splits on whitespace, comma, underscore, and hyphen, then drops
/// version-like tokens and stopwords. The result doubles as an ordered
/// sequence (for fuzzy comparison) and, via a set view, as an unordered
/// token set (for overlap testing).
#[must_use]
pub fn clean_name(name: &str) -> Vec<String> {
    name.split([' ', ',', '_', '-'])
        .filter(|token| !STOPWORDS.contains(token))
        .filter(|token| !is_version_token(token))
        .map(str::to_string)
        .collect()
}

/// Single-character product names ("R", "7") cannot be meaningfully
/// tokenized; the similarity oracle bypasses token-overlap for them.
#[must_use]
pub fn bypasses_token_overlap(raw_name: &str) -> bool {
    raw_name.chars().count() == 1
}

/// Produce a cleaned display name for the normalization report.
///
/// Word-by-word: drop numeric-looking words (including `v`-prefixed version
/// numbers and years), strip trailing commas and embedded architecture
/// tags, drop dangling half-parenthesized words and anything containing
/// "version", then rejoin with single spaces.
#[must_use]
pub fn normalize_display_name(name: &str) -> String {
    let words: Vec<String> = name
        .split_whitespace()
        .filter(|w| has_alpha_beyond_version_prefix(w))
        .map(strip_trailing_comma)
        .map(|w| strip_arch_tags(&w))
        .map(|w| strip_dangling_parenthesis(&w))
        .filter(|w| !w.to_lowercase().contains("version"))
        .filter(|w| !w.is_empty())
        .collect();
    words.join(" ")
}

/// Keep a word only if it contains an alphabetic character; a leading `v`
/// does not count, so "v2.1" is still treated as a version number.
fn has_alpha_beyond_version_prefix(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let body = if word.starts_with(['v', 'V']) {
        &word[1..]
    } else {
        word
    };
    body.chars().any(char::is_alphabetic)
}

fn strip_trailing_comma(word: &str) -> String {
    word.strip_suffix(',').unwrap_or(word).to_string()
}

fn strip_arch_tags(word: &str) -> String {
    let mut out = word.to_string();
    for tag in ARCH_TAGS {
        let parenthesized = format!("({tag})");
        let underscored = format!("_{tag}");
        if out.contains(&parenthesized) {
            out = out.replace(&parenthesized, "");
        } else if out.contains(&underscored) {
            out = out.replace(&underscored, "");
        } else if out.contains(tag) {
            out = out.replace(tag, "");
        }
    }
    out
}

/// A word opening a parenthesis it never closes (or closing one it never
/// opened) is leftover packaging noise like "(64" or "bit)".
fn strip_dangling_parenthesis(word: &str) -> String {
    let opens_unclosed = word.starts_with('(') && !word.contains(')');
    let closes_unopened = word.ends_with(')') && !word.contains('(');
    if opens_unclosed || closes_unopened {
        String::new()
    } else {
        word.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_tokens() {
        assert!(is_version_token("2019"));
        assert!(is_version_token("3.1.4"));
        assert!(!is_version_token("v3.1"));
        assert!(!is_version_token("3.1b"));
        assert!(!is_version_token(""));
    }

    #[test]
    fn test_clean_name_strips_versions_and_stopwords() {
        assert_eq!(clean_name("Foo Driver 1.0"), vec!["Foo"]);
        assert_eq!(clean_name("Acrobat Reader 2020"), vec!["Acrobat"]);
    }

    #[test]
    fn test_clean_name_splits_on_delimiters() {
        assert_eq!(clean_name("foo_bar-baz,qux"), vec!["foo", "bar", "baz", "qux"]);
    }

    #[test]
    fn test_clean_name_drops_arch_markers() {
        assert_eq!(clean_name("Widget (x86) x64"), vec!["Widget"]);
    }

    #[test]
    fn test_clean_name_can_empty_out() {
        let tokens = clean_name("Update Tool 3.0");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_single_char_bypass() {
        assert!(bypasses_token_overlap("R"));
        assert!(!bypasses_token_overlap("Rx"));
    }

    #[test]
    fn test_display_name_strips_years_and_tags() {
        assert_eq!(normalize_display_name("Foo 2019 (x64)"), "Foo");
        assert_eq!(normalize_display_name("Bar v2.1 64-bit"), "Bar");
    }

    #[test]
    fn test_display_name_keeps_v_words() {
        // "vlc" starts with v but has letters after it
        assert_eq!(normalize_display_name("vlc player"), "vlc player");
    }

    #[test]
    fn test_display_name_strips_trailing_commas() {
        assert_eq!(normalize_display_name("Foo, Bar"), "Foo Bar");
    }

    #[test]
    fn test_display_name_drops_dangling_parens() {
        assert_eq!(normalize_display_name("Foo (64 bit)"), "Foo");
    }

    #[test]
    fn test_display_name_drops_version_word() {
        assert_eq!(normalize_display_name("Foo Version 9"), "Foo");
    }
}
