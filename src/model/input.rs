//! Raw pasted input.

use crate::detect::looks_like_markup;

/// Pasted content together with the caller's markup flag.
///
/// Borrowed for the duration of a single pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawInput<'a> {
    /// The pasted text
    pub content: &'a str,
    /// Whether the text should be treated as tag-based markup
    pub is_markup: bool,
}

impl<'a> RawInput<'a> {
    /// Creates an input with an explicit markup flag.
    pub fn new(content: &'a str, is_markup: bool) -> Self {
        Self { content, is_markup }
    }

    /// Creates a markup-flagged input.
    pub fn markup(content: &'a str) -> Self {
        Self::new(content, true)
    }

    /// Creates an input treated as already-plain text.
    pub fn plain(content: &'a str) -> Self {
        Self::new(content, false)
    }

    /// Sets the markup flag from the presence of any tag-like substring.
    pub fn detect(content: &'a str) -> Self {
        Self::new(content, looks_like_markup(content))
    }
}
