//! # pasteclean
//!
//! Cleans content pasted into an authoring tool from word processors, web
//! pages and other editors, reducing it to clean lightweight markup.
//!
//! ## What it does
//!
//! - Classifies the source (Word, Google Docs, generic HTML, Markdown)
//! - Removes comments, scripts, tracking pixels and presentation markup
//! - Converts tables, lists, headings, links and images to lightweight markup
//! - Prunes empty elements, strips leftover tags and decodes entities
//! - Normalizes whitespace
//! - Reports what was removed or converted, plus advisory warnings
//!
//! ## Quick Start
//!
//! ```
//! use pasteclean::clean_pasted_content;
//!
//! let html = r#"<p class="MsoNormal">See <a href="https://example.com">the docs</a></p>"#;
//! let result = clean_pasted_content(html, true);
//!
//! assert_eq!(result.cleaned_text, "See [the docs](https://example.com)");
//! assert_eq!(result.converted.links, 1);
//! ```
//!
//! ## Features
//!
//! - `parallel` (default): batch cleaning with rayon

pub mod cleanup;
pub mod convert;
pub mod detect;
pub mod diagnostics;
pub mod entity;
pub mod error;
pub(crate) mod markup;
pub mod model;
pub mod normalize;
pub mod options;
pub mod prune;
pub mod strip;

// Re-exports
pub use cleanup::{clean_pasted_content, clean_with_options, preserve_markdown, quick_clean_paste};
pub use detect::{classify_source, looks_like_markup, SourceTag};
pub use error::{Error, Result};
pub use model::{CleanupResult, ConvertedCounts, RawInput, RemovedCounts, StageCounters, Warning};
pub use normalize::normalize_whitespace;
pub use options::CleanupOptions;

use std::io::Read;
use std::path::Path;

/// Cleans the content of a file with default options.
///
/// The markup flag is detected from the content.
///
/// # Example
///
/// ```no_run
/// use pasteclean::clean_file;
///
/// let result = clean_file("clipboard.html")?;
/// println!("{}", result.cleaned_text);
/// # Ok::<(), pasteclean::Error>(())
/// ```
pub fn clean_file(path: impl AsRef<Path>) -> Result<CleanupResult> {
    Cleaner::new().clean_file(path)
}

/// Cleans everything read from a reader with default options.
pub fn clean_reader<R: Read>(reader: R) -> Result<CleanupResult> {
    Cleaner::new().clean_reader(reader)
}

/// Builder for cleaning pasted content with custom options.
///
/// # Example
///
/// ```
/// use pasteclean::Cleaner;
///
/// let cleaner = Cleaner::new()
///     .with_table_separator(" ; ")
///     .with_image_placeholder("figure");
///
/// let result = cleaner.clean_str(r#"<table><tr><td>a</td><td>b</td></tr></table><img src="/x.png">"#);
/// assert_eq!(result.cleaned_text, "- a ; b\n![figure](/x.png)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Cleaner {
    options: CleanupOptions,
}

impl Cleaner {
    /// Creates a new cleaner with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all options at once.
    pub fn with_options(mut self, options: CleanupOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the separator placed between table cells.
    pub fn with_table_separator(mut self, separator: impl Into<String>) -> Self {
        self.options = self.options.with_table_separator(separator);
        self
    }

    /// Sets the alt text used for images without one.
    pub fn with_image_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.options = self.options.with_image_placeholder(placeholder);
        self
    }

    /// Sets how many presentation removals Word content may have before a
    /// warning is raised.
    pub fn with_word_artifact_threshold(mut self, threshold: usize) -> Self {
        self.options = self.options.with_word_artifact_threshold(threshold);
        self
    }

    /// Adds a substring that marks an image as a tracking pixel.
    pub fn with_tracking_marker(mut self, marker: impl Into<String>) -> Self {
        self.options = self.options.with_tracking_marker(marker);
        self
    }

    /// Returns the configured options.
    pub fn options(&self) -> &CleanupOptions {
        &self.options
    }

    /// Cleans an input whose markup flag is already known.
    pub fn clean(&self, input: RawInput<'_>) -> CleanupResult {
        clean_with_options(input, &self.options)
    }

    /// Cleans a string, detecting the markup flag from its content.
    pub fn clean_str(&self, content: &str) -> CleanupResult {
        self.clean(RawInput::detect(content))
    }

    /// Cleans many inputs. Results keep the order of `inputs`.
    pub fn clean_batch<S>(&self, inputs: &[S]) -> Vec<CleanupResult>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            inputs
                .par_iter()
                .map(|input| self.clean_str(input.as_ref()))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            inputs
                .iter()
                .map(|input| self.clean_str(input.as_ref()))
                .collect()
        }
    }

    /// Reads a file and cleans its content.
    pub fn clean_file(&self, path: impl AsRef<Path>) -> Result<CleanupResult> {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(Error::InvalidInput(format!(
                "{} is a directory",
                path.display()
            )));
        }

        log::debug!("reading {}", path.display());
        let bytes = std::fs::read(path)?;
        let content = String::from_utf8(bytes)?;
        Ok(self.clean_str(&content))
    }

    /// Reads everything from a reader and cleans it.
    pub fn clean_reader<R: Read>(&self, mut reader: R) -> Result<CleanupResult> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let content = String::from_utf8(bytes)?;
        Ok(self.clean_str(&content))
    }
}
