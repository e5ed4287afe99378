//! Cleanup options.

/// Default substrings that mark an `<img>` as a tracking pixel.
pub const DEFAULT_TRACKING_MARKERS: &[&str] = &[
    "tracking",
    "analytics",
    "pixel",
    "beacon",
    "doubleclick",
    "facebook.com/tr",
];

/// Options for the cleanup pipeline.
#[derive(Debug, Clone)]
pub struct CleanupOptions {
    /// Separator placed between table cells on a flattened row.
    /// Default: " | "
    pub table_cell_separator: String,

    /// Alt text used for images without one.
    /// Default: "image"
    pub image_placeholder: String,

    /// Presentation removals above which Word content gets a warning.
    pub word_artifact_threshold: usize,

    /// Case-insensitive substrings that mark an image as a tracking pixel.
    pub tracking_markers: Vec<String>,
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self {
            table_cell_separator: " | ".to_string(),
            image_placeholder: "image".to_string(),
            word_artifact_threshold: 10,
            tracking_markers: DEFAULT_TRACKING_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

impl CleanupOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the table cell separator.
    pub fn with_table_separator(mut self, separator: impl Into<String>) -> Self {
        self.table_cell_separator = separator.into();
        self
    }

    /// Sets the placeholder alt text for images.
    pub fn with_image_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.image_placeholder = placeholder.into();
        self
    }

    /// Sets the Word formatting warning threshold.
    pub fn with_word_artifact_threshold(mut self, threshold: usize) -> Self {
        self.word_artifact_threshold = threshold;
        self
    }

    /// Adds a tracking-pixel marker. Stored lowercase.
    pub fn with_tracking_marker(mut self, marker: impl Into<String>) -> Self {
        self.tracking_markers.push(marker.into().to_lowercase());
        self
    }

    /// Returns true if the image tag text matches a tracking marker.
    pub fn is_tracking_image(&self, tag: &str) -> bool {
        let lower = tag.to_lowercase();
        self.tracking_markers
            .iter()
            .any(|marker| lower.contains(marker.as_str()))
    }
}
