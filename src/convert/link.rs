//! Links and images to inline references.

use crate::markup::{attr_value, flatten_text, replace_elements};
use crate::options::CleanupOptions;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_IMG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<img\b[^>]*>").unwrap());

/// Converts anchors with an `href` into `[text](href)`.
///
/// Anchors whose text flattens to nothing are dropped along with their href
/// and not counted. Anchors without an `href` are left for residual stripping.
pub fn convert_links(html: &str) -> (String, usize) {
    let mut count = 0;
    let text = replace_elements(html, &["a"], |anchor| {
        let href = attr_value(anchor.open_tag, "href")?;
        let text = flatten_text(anchor.inner);
        if text.is_empty() {
            return Some(String::new());
        }

        count += 1;
        Some(format!("[{}]({})", text, href.trim()))
    });
    (text, count)
}

/// Converts images with a `src` into `![alt](src)`.
///
/// A missing or empty `alt` falls back to the configured placeholder.
pub fn convert_images(html: &str, options: &CleanupOptions) -> (String, usize) {
    let mut count = 0;
    let text = RE_IMG
        .replace_all(html, |caps: &Captures<'_>| {
            let tag = &caps[0];
            let src = attr_value(tag, "src")
                .map(|src| src.trim().to_string())
                .filter(|src| !src.is_empty());
            let Some(src) = src else {
                return tag.to_string();
            };

            let alt = attr_value(tag, "alt")
                .map(|alt| alt.trim().to_string())
                .filter(|alt| !alt.is_empty())
                .unwrap_or_else(|| options.image_placeholder.clone());

            count += 1;
            format!("![{}]({})", alt, src)
        })
        .into_owned();
    (text, count)
}
