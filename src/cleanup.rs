//! # Cleanup Pipeline
//!
//! Reduces pasted content to clean lightweight markup while counting what
//! was removed or converted.
//!
//! ## Pipeline Stages
//!
//! 0. **Classification** - Guess the source (Word, Google Docs, HTML, Markdown)
//! 1. **Comments** - Remove comment spans
//! 2. **Unsafe/Noise** - Remove scripts, noscript blocks and tracking pixels
//! 3. **Presentation** - Remove style blocks and style/class attributes
//! 4. **Structure** - Tables, lists, headings, links, then images
//! 5. **Pruning** - Remove empty elements until a fixed point
//! 6. **Residual** - Strip remaining tags and decode entities
//! 7. **Whitespace** - Collapse spaces and blank lines, trim
//! 8. **Diagnostics** - Build the result and its warnings
//!
//! Stages 1-6 only run for markup-flagged input.

use crate::convert::convert_structure;
use crate::detect::{classify_source, looks_like_markup};
use crate::diagnostics::collect_warnings;
use crate::entity::{decode_entities, strip_residual_tags};
use crate::model::{CleanupResult, RawInput, StageCounters};
use crate::normalize::normalize_whitespace;
use crate::options::CleanupOptions;
use crate::prune::prune_empty_elements;
use crate::strip::{strip_comments, strip_presentation, strip_unsafe};

// ============================================================================
// Main Pipeline
// ============================================================================

/// Runs the full pipeline with custom options.
///
/// # Example
///
/// ```
/// use pasteclean::{clean_with_options, CleanupOptions, RawInput};
///
/// let options = CleanupOptions::default().with_table_separator(" / ");
/// let html = "<table><tr><td>a</td><td>b</td></tr></table>";
/// let result = clean_with_options(RawInput::markup(html), &options);
/// assert_eq!(result.cleaned_text, "- a / b");
/// ```
pub fn clean_with_options(input: RawInput<'_>, options: &CleanupOptions) -> CleanupResult {
    let source = classify_source(input.content);
    let mut counters = StageCounters::new();

    log::debug!(
        "cleaning {} bytes (markup: {}, source: {})",
        input.content.len(),
        input.is_markup,
        source
    );

    let text = if input.is_markup {
        clean_markup(input.content, options, &mut counters)
    } else {
        input.content.to_string()
    };

    let cleaned_text = normalize_whitespace(&text);
    let warnings = collect_warnings(&counters, source, options, input.content, &cleaned_text);

    log::debug!(
        "cleaned to {} bytes with {} warning(s)",
        cleaned_text.len(),
        warnings.len()
    );

    CleanupResult {
        cleaned_text,
        removed: counters.removed(),
        converted: counters.converted(),
        images: counters.images,
        warnings,
        source,
    }
}

/// Stages 1-6: everything that only applies to markup.
fn clean_markup(html: &str, options: &CleanupOptions, counters: &mut StageCounters) -> String {
    let (text, comments) = strip_comments(html);
    counters.comments += comments;

    let (text, noise) = strip_unsafe(&text, options);
    counters.scripts += noise.scripts;
    counters.tracking_pixels += noise.tracking_pixels;

    let (text, styles) = strip_presentation(&text);
    counters.styles += styles;

    log::debug!(
        "stripped {} comment(s), {} script(s), {} tracking pixel(s), {} presentation artifact(s)",
        comments,
        noise.scripts,
        noise.tracking_pixels,
        styles
    );

    let text = convert_structure(&text, options, counters);

    let (text, empty_tags) = prune_empty_elements(&text);
    counters.empty_tags += empty_tags;
    log::debug!("pruned {} empty element(s)", empty_tags);

    decode_entities(&strip_residual_tags(&text))
}

/// Cleans pasted content with default options.
///
/// # Example
///
/// ```
/// use pasteclean::clean_pasted_content;
///
/// let result = clean_pasted_content("<ul><li>A</li><li>B</li></ul>", true);
/// assert_eq!(result.cleaned_text, "- A\n- B");
/// assert_eq!(result.converted.lists, 1);
/// ```
pub fn clean_pasted_content(content: &str, is_markup: bool) -> CleanupResult {
    clean_with_options(RawInput::new(content, is_markup), &CleanupOptions::default())
}

/// Cleans pasted content, detecting markup from any tag-like substring, and
/// returns only the text.
pub fn quick_clean_paste(content: &str) -> String {
    clean_pasted_content(content, looks_like_markup(content)).cleaned_text
}

/// Keeps already-clean lightweight markup as is apart from whitespace; falls
/// back to [`quick_clean_paste`] when the content contains tags.
pub fn preserve_markdown(content: &str) -> String {
    if looks_like_markup(content) {
        quick_clean_paste(content)
    } else {
        normalize_whitespace(content)
    }
}
