//! Source detection for pasted content.

use crate::markup::RE_TAG_LIKE;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Word processor fingerprints (class names and product strings)
const WORD_MARKERS: &[&str] = &[
    "class=\"Mso",
    "class=Mso",
    "MsoNormal",
    "urn:schemas-microsoft-com:office",
    "Microsoft Word",
    "<o:p>",
];

/// Google Docs wraps its clipboard payload in an element carrying this id prefix
const GOOGLE_DOCS_MARKERS: &[&str] = &["docs-internal-guid"];

static RE_HTML_ROOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!doctype\s+html|<html[\s>]").unwrap());

static RE_MD_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6}[ \t]+\S").unwrap());

static RE_MD_EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*[^*\n]+\*\*|__[^_\n]+__").unwrap());

/// Best-effort guess at the tool that produced pasted content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceTag {
    /// Microsoft Word (or another Office application)
    Word,
    /// Google Docs
    GoogleDocs,
    /// Generic HTML document
    Html,
    /// Markdown-style lightweight markup
    Markdown,
    /// No recognizable fingerprint
    Unknown,
}

impl SourceTag {
    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceTag::Word => "word",
            SourceTag::GoogleDocs => "google-docs",
            SourceTag::Html => "html",
            SourceTag::Markdown => "markdown",
            SourceTag::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SourceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify the origin of pasted content.
///
/// Fingerprints are checked in priority order (Word, Google Docs, generic
/// HTML, Markdown) and the first match wins.
pub fn classify_source(input: &str) -> SourceTag {
    if WORD_MARKERS.iter().any(|m| input.contains(m)) {
        return SourceTag::Word;
    }

    if GOOGLE_DOCS_MARKERS.iter().any(|m| input.contains(m)) {
        return SourceTag::GoogleDocs;
    }

    if RE_HTML_ROOT.is_match(input) {
        return SourceTag::Html;
    }

    if RE_MD_HEADING.is_match(input) || RE_MD_EMPHASIS.is_match(input) {
        return SourceTag::Markdown;
    }

    SourceTag::Unknown
}

/// Returns true if the input contains any tag-like substring.
pub fn looks_like_markup(input: &str) -> bool {
    RE_TAG_LIKE.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_word() {
        let input = r#"<p class="MsoNormal">Hello<o:p></o:p></p>"#;
        assert_eq!(classify_source(input), SourceTag::Word);
    }

    #[test]
    fn test_detect_word_product_string() {
        let input = r#"<meta name=Generator content="Microsoft Word 15"><p>Hi</p>"#;
        assert_eq!(classify_source(input), SourceTag::Word);
    }

    #[test]
    fn test_detect_google_docs() {
        let input = r#"<b id="docs-internal-guid-1234abcd"><p>Hello</p></b>"#;
        assert_eq!(classify_source(input), SourceTag::GoogleDocs);
    }

    #[test]
    fn test_word_wins_over_html() {
        let input = r#"<!DOCTYPE html><html><p class=MsoNormal>x</p></html>"#;
        assert_eq!(classify_source(input), SourceTag::Word);
    }

    #[test]
    fn test_detect_html() {
        assert_eq!(classify_source("<!doctype html><p>x</p>"), SourceTag::Html);
        assert_eq!(classify_source("<HTML lang=\"en\"><body>x</body>"), SourceTag::Html);
    }

    #[test]
    fn test_detect_markdown() {
        assert_eq!(classify_source("# Title\n\nBody"), SourceTag::Markdown);
        assert_eq!(classify_source("some **bold** text"), SourceTag::Markdown);
        assert_eq!(classify_source("some __bold__ text"), SourceTag::Markdown);
    }

    #[test]
    fn test_detect_unknown() {
        assert_eq!(classify_source("Just a plain sentence."), SourceTag::Unknown);
        assert_eq!(classify_source(""), SourceTag::Unknown);
        // hashtag without a space is not a heading
        assert_eq!(classify_source("#rustlang is fun"), SourceTag::Unknown);
    }

    #[test]
    fn test_source_tag_display() {
        assert_eq!(SourceTag::GoogleDocs.to_string(), "google-docs");
        assert_eq!(SourceTag::Word.to_string(), "word");
    }

    #[test]
    fn test_looks_like_markup() {
        assert!(looks_like_markup("<p>x</p>"));
        assert!(looks_like_markup("text <!-- note --> text"));
        assert!(looks_like_markup("</div>"));
        assert!(!looks_like_markup("a < b and c > d"));
        assert!(!looks_like_markup("plain text"));
    }
}
