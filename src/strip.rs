//! Stripping stages: comments, unsafe/noise elements and presentation markup.
//!
//! Each stripper removes every occurrence of its element class and reports
//! how many it removed. Zero matches is a normal outcome.

use crate::markup::remove_counted;
use crate::options::CleanupOptions;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

static RE_SCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*/>|<script\b[^>]*>.*?</script\s*>").unwrap()
});

static RE_NOSCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<noscript\b[^>]*/>|<noscript\b[^>]*>.*?</noscript\s*>").unwrap()
});

static RE_IMG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<img\b[^>]*>").unwrap());

static RE_STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").unwrap());

static RE_OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[a-zA-Z][a-zA-Z0-9:-]*\s[^>]*>").unwrap());

static RE_STYLE_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)\s+style\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]+)"#).unwrap()
});

static RE_CLASS_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)\s+class\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]+)"#).unwrap()
});

/// Removals made by [`strip_unsafe`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoiseCounts {
    /// Script and noscript elements
    pub scripts: usize,
    /// Tracking-pixel images
    pub tracking_pixels: usize,
}

/// Removes every comment span, including Word conditional comments.
pub fn strip_comments(html: &str) -> (String, usize) {
    remove_counted(&RE_COMMENT, html)
}

/// Removes script and noscript elements with their content, and images that
/// match a tracking marker.
pub fn strip_unsafe(html: &str, options: &CleanupOptions) -> (String, NoiseCounts) {
    let (text, scripts) = remove_counted(&RE_SCRIPT, html);
    let (text, noscripts) = remove_counted(&RE_NOSCRIPT, &text);

    let mut tracking_pixels = 0;
    let text = RE_IMG
        .replace_all(&text, |caps: &Captures<'_>| {
            if options.is_tracking_image(&caps[0]) {
                tracking_pixels += 1;
                String::new()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned();

    (
        text,
        NoiseCounts {
            scripts: scripts + noscripts,
            tracking_pixels,
        },
    )
}

/// Removes style blocks, then inline `style` attributes, then `class`
/// attributes. Every occurrence of any of the three counts once.
pub fn strip_presentation(html: &str) -> (String, usize) {
    let (text, blocks) = remove_counted(&RE_STYLE_BLOCK, html);
    let (text, styles) = strip_attribute(&RE_STYLE_ATTR, &text);
    let (text, classes) = strip_attribute(&RE_CLASS_ATTR, &text);
    (text, blocks + styles + classes)
}

/// Removes an attribute pattern inside opening tags only, so prose that
/// happens to read `style="..."` is left alone.
fn strip_attribute(attr: &Regex, html: &str) -> (String, usize) {
    let mut count = 0;
    let text = RE_OPEN_TAG
        .replace_all(html, |caps: &Captures<'_>| {
            let (tag, removed) = remove_counted(attr, &caps[0]);
            count += removed;
            tag
        })
        .into_owned();
    (text, count)
}
