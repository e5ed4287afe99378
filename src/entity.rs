//! Residual tag stripping and character reference decoding.

use crate::markup::{RE_BLOCK_TAG, RE_TAG_LIKE};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_PARAGRAPH_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</(?:p|div|h[1-6]|blockquote|pre)\s*>").unwrap());

static RE_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]{2,8});").unwrap());

/// Named references decoded before `&amp;`.
///
/// `&nbsp;` becomes a plain space so the whitespace normalizer can collapse it.
const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("nbsp", " "),
    ("quot", "\""),
    ("apos", "'"),
    ("lt", "<"),
    ("gt", ">"),
    ("ndash", "\u{2013}"),
    ("mdash", "\u{2014}"),
    ("hellip", "\u{2026}"),
    ("lsquo", "\u{2018}"),
    ("rsquo", "\u{2019}"),
    ("ldquo", "\u{201C}"),
    ("rdquo", "\u{201D}"),
    ("bull", "\u{2022}"),
    ("copy", "\u{00A9}"),
    ("reg", "\u{00AE}"),
    ("trade", "\u{2122}"),
];

/// Removes every remaining tag-like substring.
///
/// Closing paragraph-like tags become a blank line and other block-level
/// tags a line break, so adjacent blocks never run together. The whitespace
/// normalizer caps the resulting breaks.
pub fn strip_residual_tags(html: &str) -> String {
    let text = RE_PARAGRAPH_END.replace_all(html, "\n\n");
    let text = RE_BLOCK_TAG.replace_all(&text, "\n");
    RE_TAG_LIKE.replace_all(&text, "").into_owned()
}

/// Decodes character references, with `&amp;` decoded last.
///
/// Decoding `&amp;` last keeps `&amp;lt;` as the literal text `&lt;` instead of
/// turning it into `<`. A numeric reference to `&` yields `&amp;` for the
/// final pass to finish, for the same reason.
pub fn decode_entities(text: &str) -> String {
    let decoded = RE_ENTITY.replace_all(text, |caps: &Captures<'_>| {
        decode_reference(&caps[1]).unwrap_or_else(|| caps[0].to_string())
    });
    decoded.replace("&amp;", "&")
}

fn decode_reference(reference: &str) -> Option<String> {
    if let Some(number) = reference.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse::<u32>().ok()?,
        };
        return match char::from_u32(code)? {
            '\0' => None,
            '&' => Some("&amp;".to_string()),
            '\u{A0}' => Some(" ".to_string()),
            c => Some(c.to_string()),
        };
    }

    NAMED_ENTITIES
        .iter()
        .find(|(name, _)| *name == reference)
        .map(|(_, value)| value.to_string())
}
