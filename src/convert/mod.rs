//! Structural conversion of markup into lightweight markup.
//!
//! Sub-stages run in a fixed order: tables, lists, headings, links, images.
//! Each one only recognizes its own element kind and is blind to what an
//! earlier sub-stage produced, so markup nested inside a table cell or list
//! item is flattened to plain text rather than converted.

mod heading;
mod link;
mod list;
mod table;

pub use heading::convert_headings;
pub use link::{convert_images, convert_links};
pub use list::convert_lists;
pub use table::convert_tables;

use crate::model::StageCounters;
use crate::options::CleanupOptions;

/// Runs every structural sub-stage in order, adding to `counters`.
pub fn convert_structure(
    html: &str,
    options: &CleanupOptions,
    counters: &mut StageCounters,
) -> String {
    let (text, tables) = convert_tables(html, options);
    let (text, lists) = convert_lists(&text);
    let (text, headings) = convert_headings(&text);
    let (text, links) = convert_links(&text);
    let (text, images) = convert_images(&text, options);

    *counters += StageCounters {
        tables,
        lists,
        headings,
        links,
        images,
        ..StageCounters::default()
    };

    log::debug!(
        "structure: {} table(s), {} list(s), {} heading(s), {} link(s), {} image(s)",
        tables,
        lists,
        headings,
        links,
        images
    );

    text
}
