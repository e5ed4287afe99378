//! Ordered and unordered lists to numbered/bulleted lines.

use crate::markup::{find_elements, flatten_text, replace_elements};

/// Converts every outermost `<ul>`/`<ol>` into one line per item.
///
/// Ordered lists number from 1 and restart for each list. Nested lists are
/// flattened into the text of their parent item. Empty items are dropped.
/// Each list element counts once.
///
/// A list with text outside of closed `<li>` pairs (unclosed items, stray
/// text) is left untouched and uncounted for residual stripping.
pub fn convert_lists(html: &str) -> (String, usize) {
    let mut count = 0;
    let text = replace_elements(html, &["ul", "ol"], |list| {
        let stray = replace_elements(list.inner, &["li"], |_| Some(" ".to_string()));
        if !flatten_text(&stray).is_empty() {
            return None;
        }

        count += 1;
        let ordered = list.name == "ol";
        let items: Vec<String> = find_elements(list.inner, &["li"])
            .iter()
            .map(|item| flatten_text(item.inner))
            .filter(|text| !text.is_empty())
            .collect();

        if items.is_empty() {
            return Some(String::new());
        }

        let lines: Vec<String> = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if ordered {
                    format!("{}. {}", i + 1, item)
                } else {
                    format!("- {}", item)
                }
            })
            .collect();

        Some(format!("\n{}\n", lines.join("\n")))
    });
    (text, count)
}
