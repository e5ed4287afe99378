//! Markup scanning helpers shared by the stripping and conversion stages.
//!
//! Nothing here builds a document tree. Tags are located with patterns, and
//! [`find_elements`] pairs opening and closing tags with a stack so that
//! nested elements of the same kind are matched by structure instead of by
//! the first closing tag that follows.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Anything that looks like a tag, comment or declaration.
pub(crate) static RE_TAG_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[a-zA-Z/!?][^>]*>").unwrap());

static RE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9:-]*)(?:\s[^>]*)?/?>").unwrap()
});

static RE_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s([a-zA-Z_:][-a-zA-Z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>=`]+))"#)
        .unwrap()
});

// Tags that separate words when flattened
pub(crate) static RE_BLOCK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)</?(?:br|p|div|li|ul|ol|dl|dt|dd|table|thead|tbody|tfoot|tr|td|th|caption|h[1-6]|blockquote|pre|section|article|header|footer|hr)\b[^>]*>",
    )
    .unwrap()
});

static RE_NBSP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"&(?:nbsp|#160|#x[aA]0);").unwrap());

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// A matched element: opening tag, inner content and closing tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element<'a> {
    /// Lowercase tag name
    pub name: String,
    /// Full opening tag text, including attributes
    pub open_tag: &'a str,
    /// Content between the opening and closing tags
    pub inner: &'a str,
    /// Byte offset of the opening tag
    pub start: usize,
    /// Byte offset just past the closing tag
    pub end: usize,
}

/// Finds the outermost balanced elements whose name is in `names`.
///
/// Opening tags without a matching closing tag, and closing tags without an
/// opening one, are ignored. Self-closing tags never open an element.
pub fn find_elements<'a>(text: &'a str, names: &[&str]) -> Vec<Element<'a>> {
    let mut stack: Vec<(String, usize, usize)> = Vec::new();
    let mut pairs: Vec<Element<'a>> = Vec::new();

    for caps in RE_TAG.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let name = caps[2].to_ascii_lowercase();
        if !names.contains(&name.as_str()) {
            continue;
        }

        if caps[1].is_empty() {
            if !whole.as_str().ends_with("/>") {
                stack.push((name, whole.start(), whole.end()));
            }
            continue;
        }

        if let Some(pos) = stack.iter().rposition(|(open, _, _)| *open == name) {
            let (start, open_end) = (stack[pos].1, stack[pos].2);
            stack.truncate(pos);
            pairs.push(Element {
                name,
                open_tag: &text[start..open_end],
                inner: &text[open_end..whole.start()],
                start,
                end: whole.end(),
            });
        }
    }

    // Pairs are nested or disjoint, so keeping the first of each overlapping
    // run yields the outermost ones.
    pairs.sort_by_key(|el| el.start);
    let mut outermost = Vec::with_capacity(pairs.len());
    let mut covered = 0;
    for el in pairs {
        if el.start >= covered {
            covered = el.end;
            outermost.push(el);
        }
    }
    outermost
}

/// Replaces outermost elements named in `names`.
///
/// `replace` returns the replacement text, or `None` to leave the element
/// untouched.
pub fn replace_elements<F>(text: &str, names: &[&str], mut replace: F) -> String
where
    F: FnMut(&Element<'_>) -> Option<String>,
{
    let elements = find_elements(text, names);
    if elements.is_empty() {
        return text.to_string();
    }

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    for el in &elements {
        if let Some(replacement) = replace(el) {
            output.push_str(&text[cursor..el.start]);
            output.push_str(&replacement);
            cursor = el.end;
        }
    }
    output.push_str(&text[cursor..]);
    output
}

/// Returns the value of attribute `name` (case-insensitive) in a tag.
pub fn attr_value(tag: &str, name: &str) -> Option<String> {
    RE_ATTR
        .captures_iter(tag)
        .find(|caps| caps[1].eq_ignore_ascii_case(name))
        .and_then(|caps| caps.get(2).or_else(|| caps.get(3)).or_else(|| caps.get(4)))
        .map(|m| m.as_str().to_string())
}

/// Flattens a markup fragment to a single line of plain text.
///
/// Block-level tags become word breaks, inline tags disappear, and
/// non-breaking space references count as whitespace. Other entities are left
/// for the entity decoder.
pub fn flatten_text(fragment: &str) -> String {
    let text = RE_BLOCK_TAG.replace_all(fragment, " ");
    let text = RE_TAG_LIKE.replace_all(&text, "");
    let text = RE_NBSP.replace_all(&text, " ");
    RE_WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Removes every match of `re`, returning the new text and the match count.
pub(crate) fn remove_counted(re: &Regex, text: &str) -> (String, usize) {
    let mut count = 0;
    let output = re
        .replace_all(text, |_: &Captures<'_>| {
            count += 1;
            ""
        })
        .into_owned();
    (output, count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_nested_same_kind() {
        let html = "<ul><li>A<ul><li>B</li></ul></li></ul><p>x</p><ul><li>C</li></ul>";
        let lists = find_elements(html, &["ul"]);
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].inner, "<li>A<ul><li>B</li></ul></li>");
        assert_eq!(lists[1].inner, "<li>C</li>");
    }

    #[test]
    fn test_find_ignores_unclosed() {
        let html = "<table><tr><td>x</td></tr> <ul><li>y</li></ul>";
        assert!(find_elements(html, &["table"]).is_empty());
        assert_eq!(find_elements(html, &["ul"]).len(), 1);
    }

    #[test]
    fn test_find_case_insensitive() {
        let html = "<UL><LI>a</LI></ul>";
        let lists = find_elements(html, &["ul"]);
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].name, "ul");
        assert_eq!(lists[0].open_tag, "<UL>");
    }

    #[test]
    fn test_self_closing_does_not_open() {
        let html = "<a href=\"x\"/>text<a href=\"y\">link</a>";
        let anchors = find_elements(html, &["a"]);
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].inner, "link");
    }

    #[test]
    fn test_replace_elements_keep() {
        let html = "<b>1</b> and <b>2</b>";
        let out = replace_elements(html, &["b"], |el| {
            if el.inner == "1" {
                Some("one".to_string())
            } else {
                None
            }
        });
        assert_eq!(out, "one and <b>2</b>");
    }

    #[test]
    fn test_attr_value_quoting() {
        let tag = r#"<a HREF="https://e.x" title='t' data-id=42>"#;
        assert_eq!(attr_value(tag, "href").as_deref(), Some("https://e.x"));
        assert_eq!(attr_value(tag, "title").as_deref(), Some("t"));
        assert_eq!(attr_value(tag, "data-id").as_deref(), Some("42"));
        assert_eq!(attr_value(tag, "alt"), None);
    }

    #[test]
    fn test_attr_value_does_not_match_suffix() {
        let tag = r#"<img data-src="lazy.png" src="real.png">"#;
        assert_eq!(attr_value(tag, "src").as_deref(), Some("real.png"));
    }

    #[test]
    fn test_flatten_text() {
        assert_eq!(flatten_text("<b>he</b>llo <i>world</i>"), "hello world");
        assert_eq!(flatten_text("line<br>break"), "line break");
        assert_eq!(flatten_text("  <span>&nbsp;</span>  "), "");
        assert_eq!(flatten_text("a &amp; b"), "a &amp; b");
    }

    #[test]
    fn test_remove_counted() {
        let re = Regex::new(r"x").unwrap();
        let (out, count) = remove_counted(&re, "axbxc");
        assert_eq!(out, "abc");
        assert_eq!(count, 2);
    }
}
