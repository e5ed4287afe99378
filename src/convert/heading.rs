//! Headings to leveled marker lines.

use crate::markup::{flatten_text, replace_elements};

const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6"];

/// Converts `<h1>`..`<h6>` into `#`-prefixed lines surrounded by blank lines.
///
/// Empty headings are removed and not counted.
pub fn convert_headings(html: &str) -> (String, usize) {
    let mut count = 0;
    let text = replace_elements(html, HEADING_TAGS, |heading| {
        let level = heading_level(&heading.name);
        let content = flatten_text(heading.inner);
        if content.is_empty() {
            return Some(String::new());
        }

        count += 1;
        Some(format!("\n\n{} {}\n\n", "#".repeat(level), content))
    });
    (text, count)
}

fn heading_level(name: &str) -> usize {
    name[1..].parse::<usize>().unwrap_or(1).clamp(1, 6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        for level in 1..=6 {
            let html = format!("<h{0}>Title</h{0}>", level);
            let (out, count) = convert_headings(&html);
            assert_eq!(out, format!("\n\n{} Title\n\n", "#".repeat(level)));
            assert_eq!(count, 1);
        }
    }

    #[test]
    fn test_heading_inner_markup() {
        let (out, _) = convert_headings("<h2 id=\"x\"><span>Getting</span> <em>started</em></h2>");
        assert_eq!(out, "\n\n## Getting started\n\n");
    }

    #[test]
    fn test_empty_heading_dropped() {
        let (out, count) = convert_headings("a<h3> <br> </h3>b");
        assert_eq!(out, "ab");
        assert_eq!(count, 0);
    }

    #[test]
    fn test_mismatched_heading_untouched() {
        let html = "<h1>Title</h2>";
        let (out, count) = convert_headings(html);
        assert_eq!(out, html);
        assert_eq!(count, 0);
    }
}
