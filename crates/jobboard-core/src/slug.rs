//! # Slug Codec
//!
//! Converts a human-readable title into a URL-safe path segment for
//! `/blog/:slug`, and back into a best-effort title.
//!
//! ## Encoding
//!
//! 1. Lowercase the text.
//! 2. Drop every character outside `[a-z0-9]`, whitespace and `-`.
//!    Diacritics and punctuation are dropped, not transliterated.
//! 3. Runs of whitespace and hyphens become a single hyphen.
//! 4. Leading and trailing hyphens are trimmed.
//!
//! Whitespace means the Unicode `White_Space` property
//! ([`char::is_whitespace`]). NEXT LINE (U+0085) therefore separates words,
//! while a byte-order mark (U+FEFF) is not whitespace and is dropped.
//!
//! The output always matches `^[a-z0-9]+(-[a-z0-9]+)*$` or is empty, and
//! encoding is a fixed point on its own output.
//!
//! ## Decoding
//!
//! [`decode`] only turns hyphens back into spaces. Case and dropped
//! characters cannot be recovered, so records are looked up by their
//! stored slug, never by comparing a decoded slug with a title.

use serde::{Deserialize, Serialize};

/// Encode a title as a slug. Single pass, never fails.
pub fn encode(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else if c == '-' || c.is_whitespace() {
            pending_hyphen = true;
        }
    }

    out
}

/// Encode an optional title; missing input yields an empty slug.
pub fn encode_opt(title: Option<&str>) -> String {
    title.map(encode).unwrap_or_default()
}

/// Best-effort inverse of [`encode`]: hyphens become spaces.
pub fn decode(slug: &str) -> String {
    slug.replace('-', " ")
}

/// A routable slug. Only constructible through [`encode`].
///
/// Deserialising a `Slug` re-encodes the input, so a hand-edited export
/// cannot smuggle an invalid path segment into a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Encode a title into a slug.
    pub fn from_title(title: &str) -> Self {
        Self(encode(title))
    }

    /// The slug text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the slug is empty (the title had no encodable characters).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The approximate title recovered by [`decode`].
    pub fn decode(&self) -> String {
        decode(&self.0)
    }
}

impl From<String> for Slug {
    fn from(raw: String) -> Self {
        Self::from_title(&raw)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_unicode_white_space() {
        assert_eq!(encode("remote\u{0085}jobs"), "remote-jobs");
        assert_eq!(encode("remote\u{00A0}jobs"), "remote-jobs");
        assert_eq!(encode("\u{FEFF}remote\u{FEFF}jobs"), "remotejobs");
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(encode("Senior Software Engineer!"), "senior-software-engineer");
    }

    #[test]
    fn collapses_spaces_and_hyphens() {
        assert_eq!(encode("  Multi   Space -- Test  "), "multi-space-test");
    }

    #[test]
    fn empty_and_missing_input() {
        assert_eq!(encode(""), "");
        assert_eq!(encode("   "), "");
        assert_eq!(encode("!!!"), "");
        assert_eq!(encode_opt(None), "");
        assert_eq!(encode_opt(Some("Hi There")), "hi-there");
    }

    #[test]
    fn drops_diacritics() {
        assert_eq!(encode("Café Résumé Tips"), "caf-rsum-tips");
    }

    #[test]
    fn dropped_character_does_not_split_words() {
        assert_eq!(encode("C++ & Rust"), "c-rust");
        assert_eq!(encode("don't"), "dont");
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(encode("Top 10 Interview Questions (2026)"), "top-10-interview-questions-2026");
    }

    #[test]
    fn tabs_and_newlines_are_whitespace() {
        assert_eq!(encode("one\ttwo\nthree"), "one-two-three");
    }

    #[test]
    fn underscore_is_dropped() {
        assert_eq!(encode("snake_case title"), "snakecase-title");
    }

    #[test]
    fn decode_replaces_hyphens() {
        assert_eq!(decode("senior-software-engineer"), "senior software engineer");
        assert_eq!(decode(""), "");
    }

    #[test]
    fn slug_deserialize_reencodes() {
        let slug: Slug = serde_json::from_str("\"How To Ace It?\"").unwrap();
        assert_eq!(slug.as_str(), "how-to-ace-it");
        assert_eq!(serde_json::to_string(&slug).unwrap(), "\"how-to-ace-it\"");
    }

    #[test]
    fn slug_decode() {
        let slug = Slug::from_title("Job Search 101");
        assert_eq!(slug.decode(), "job search 101");
        assert!(!slug.is_empty());
        assert!(Slug::from_title("?").is_empty());
    }
}
