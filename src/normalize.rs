//! Whitespace normalization.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_MULTIPLE_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());

static RE_SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+([.,;:!?])(\[?)").unwrap());

// Whitespace-only lines count as blank so trimming lines afterwards cannot
// leave three line breaks in a row.
static RE_MULTIPLE_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n(?:[^\S\n]*\n){2,}").unwrap());

/// Normalizes whitespace in cleaned text.
///
/// - Unify line endings to `\n`
/// - Collapse runs of two or more spaces to one (tabs are kept)
/// - Remove spaces before `. , ; : ! ?`
/// - Reduce 3+ line breaks to 2
/// - Trim every line, then the whole text
///
/// Applying it twice gives the same result as applying it once.
pub fn normalize_whitespace(input: &str) -> String {
    let text = input.replace("\r\n", "\n").replace('\r', "\n");
    let text = RE_MULTIPLE_SPACES.replace_all(&text, " ");
    let text = RE_SPACE_BEFORE_PUNCT.replace_all(&text, |caps: &Captures<'_>| {
        // "![" opens an image marker, not the end of a sentence
        if &caps[1] == "!" && !caps[2].is_empty() {
            caps[0].to_string()
        } else {
            format!("{}{}", &caps[1], &caps[2])
        }
    });
    let text = RE_MULTIPLE_NEWLINES.replace_all(&text, "\n\n");

    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    lines.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_spaces() {
        assert_eq!(normalize_whitespace("a   b  c d"), "a b c d");
    }

    #[test]
    fn test_tabs_kept_inside_lines() {
        assert_eq!(normalize_whitespace("key\tvalue\t\tmore"), "key\tvalue\t\tmore");
        assert_eq!(normalize_whitespace("\tindented  line\t"), "indented line");
    }

    #[test]
    fn test_space_before_punctuation() {
        assert_eq!(normalize_whitespace("Hello , world ! Really ?"), "Hello, world! Really?");
    }

    #[test]
    fn test_image_marker_keeps_space() {
        assert_eq!(normalize_whitespace("see  ![A](/a.png) now !"), "see ![A](/a.png) now!");
    }

    #[test]
    fn test_multiple_newlines() {
        let result = normalize_whitespace("first\n\n\n\n\nsecond");
        assert_eq!(result, "first\n\nsecond");
    }

    #[test]
    fn test_blank_lines_with_spaces() {
        let result = normalize_whitespace("first\n  \n \t \n\nsecond");
        assert_eq!(result, "first\n\nsecond");
    }

    #[test]
    fn test_trim_lines_and_document() {
        let result = normalize_whitespace("\n\n   - A  \n   - B   \n\n");
        assert_eq!(result, "- A\n- B");
    }

    #[test]
    fn test_crlf() {
        assert_eq!(normalize_whitespace("a\r\n\r\n\r\n\r\nb\rc"), "a\n\nb\nc");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "  a  ,  b \n\n\n c . \n",
            "x\n \u{3000}\n\u{3000}\n\ny",
            "\t- item ;\n\n\n\n## Title  \n",
            "",
            "   ",
            "a \u{A0} b",
        ];
        for sample in samples {
            let once = normalize_whitespace(sample);
            assert_eq!(normalize_whitespace(&once), once, "not idempotent for {:?}", sample);
        }
    }
}
