//! Pipeline result and warnings.

use super::{ConvertedCounts, RemovedCounts};
use crate::detect::SourceTag;
use serde::{Serialize, Serializer};

/// Heuristic condition worth a reviewer's attention.
///
/// Warnings are advisory. They never prevent a result from being produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Script or noscript blocks were removed
    ScriptsRemoved { count: usize },
    /// Tracking images were removed
    TrackingPixelsRemoved { count: usize },
    /// Word content carried many presentation artifacts
    WordFormatting { removed: usize },
    /// Tables lost their tabular layout
    TablesFlattened { count: usize },
    /// Non-blank input cleaned down to nothing
    ContentDiscarded,
}

impl Warning {
    /// Stable machine-readable name of the warning.
    pub fn kind(&self) -> &'static str {
        match self {
            Warning::ScriptsRemoved { .. } => "scripts-removed",
            Warning::TrackingPixelsRemoved { .. } => "tracking-pixels-removed",
            Warning::WordFormatting { .. } => "word-formatting",
            Warning::TablesFlattened { .. } => "tables-flattened",
            Warning::ContentDiscarded => "content-discarded",
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::ScriptsRemoved { count } => {
                write!(f, "Removed {} script block(s) from pasted content", count)
            }
            Warning::TrackingPixelsRemoved { count } => {
                write!(f, "Removed {} tracking image(s) from pasted content", count)
            }
            Warning::WordFormatting { removed } => write!(
                f,
                "Large number of Word formatting artifacts removed ({}); review formatting",
                removed
            ),
            Warning::TablesFlattened { count } => write!(
                f,
                "{} table(s) converted to bulleted lines; tabular layout was not preserved, review the result",
                count
            ),
            Warning::ContentDiscarded => {
                write!(f, "Cleanup removed all content; check the original paste")
            }
        }
    }
}

impl Serialize for Warning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Warning", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanupResult {
    /// Cleaned lightweight-markup text
    pub cleaned_text: String,
    /// Stripped and pruned element counts
    pub removed: RemovedCounts,
    /// Structural conversion counts
    pub converted: ConvertedCounts,
    /// Images converted to inline markers
    pub images: usize,
    /// Warnings in stage order
    pub warnings: Vec<Warning>,
    /// Detected source of the paste
    pub source: SourceTag,
}

impl CleanupResult {
    /// Returns the warning texts in order.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(|w| w.to_string()).collect()
    }

    /// Returns true if any warning was raised.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns the result as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
