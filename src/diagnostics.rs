//! Warning heuristics over the accumulated stage counters.

use crate::detect::SourceTag;
use crate::model::{StageCounters, Warning};
use crate::options::CleanupOptions;

/// Derives warnings from the counters, in stage execution order.
///
/// `input` and `cleaned` are only inspected to notice a paste that was
/// cleaned down to nothing.
pub fn collect_warnings(
    counters: &StageCounters,
    source: SourceTag,
    options: &CleanupOptions,
    input: &str,
    cleaned: &str,
) -> Vec<Warning> {
    let mut warnings = Vec::new();

    if counters.scripts > 0 {
        warnings.push(Warning::ScriptsRemoved {
            count: counters.scripts,
        });
    }

    if counters.tracking_pixels > 0 {
        warnings.push(Warning::TrackingPixelsRemoved {
            count: counters.tracking_pixels,
        });
    }

    if source == SourceTag::Word && counters.styles > options.word_artifact_threshold {
        warnings.push(Warning::WordFormatting {
            removed: counters.styles,
        });
    }

    // Flattening always loses the grid, so any table is worth a look.
    if counters.tables > 0 {
        warnings.push(Warning::TablesFlattened {
            count: counters.tables,
        });
    }

    if cleaned.is_empty() && !input.trim().is_empty() {
        warnings.push(Warning::ContentDiscarded);
    }

    warnings
}
