//! Tables to bulleted line groups.

use crate::markup::{find_elements, flatten_text, replace_elements};
use crate::options::CleanupOptions;

/// Flattens every outermost table into one bulleted line per row.
///
/// Cells are joined with the configured separator. Empty cells are skipped,
/// rows without any text are dropped, and a table without rows converts to
/// nothing. Each table counts once regardless of its row count.
///
/// A table with text but no closed `<tr>` pairs is left untouched and
/// uncounted for residual stripping. A row without closed cells becomes a
/// single cell holding the row text.
pub fn convert_tables(html: &str, options: &CleanupOptions) -> (String, usize) {
    let mut count = 0;
    let text = replace_elements(html, &["table"], |table| {
        let lines: Vec<String> = find_elements(table.inner, &["tr"])
            .iter()
            .filter_map(|row| render_row(row.inner, &options.table_cell_separator))
            .collect();

        if lines.is_empty() && !flatten_text(table.inner).is_empty() {
            return None;
        }

        count += 1;
        if lines.is_empty() {
            Some(String::new())
        } else {
            Some(format!("\n{}\n", lines.join("\n")))
        }
    });
    (text, count)
}

fn render_row(row: &str, separator: &str) -> Option<String> {
    let pairs = find_elements(row, &["td", "th"]);
    let cells: Vec<String> = if pairs.is_empty() {
        vec![flatten_text(row)]
    } else {
        pairs.iter().map(|cell| flatten_text(cell.inner)).collect()
    };
    let cells: Vec<String> = cells.into_iter().filter(|text| !text.is_empty()).collect();

    if cells.is_empty() {
        None
    } else {
        Some(format!("- {}", cells.join(separator)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_row_table() {
        let html = "<table><tr><td>x</td><td>y</td></tr><tr><td>1</td><td>2</td></tr></table>";
        let (out, count) = convert_tables(html, &CleanupOptions::default());
        assert_eq!(out, "\n- x | y\n- 1 | 2\n");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_header_cells_and_sections() {
        let html = concat!(
            "<table border=\"1\"><thead><tr><th>Name</th><th>Age</th></tr></thead>",
            "<tbody><tr><td><b>Ann</b></td><td>31</td></tr></tbody></table>"
        );
        let (out, _) = convert_tables(html, &CleanupOptions::default());
        assert_eq!(out, "\n- Name | Age\n- Ann | 31\n");
    }

    #[test]
    fn test_empty_rows_dropped() {
        let html = "<table><tr><td>&nbsp;</td><td> </td></tr><tr><td>a</td><td></td></tr></table>";
        let (out, count) = convert_tables(html, &CleanupOptions::default());
        assert_eq!(out, "\n- a\n");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_empty_table_converts_to_nothing() {
        let (out, count) = convert_tables("a<table></table>b", &CleanupOptions::default());
        assert_eq!(out, "ab");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_custom_separator() {
        let options = CleanupOptions::default().with_table_separator(" ; ");
        let (out, _) = convert_tables("<table><tr><td>a</td><td>b</td></tr></table>", &options);
        assert_eq!(out, "\n- a ; b\n");
    }

    #[test]
    fn test_nested_table_counts_once() {
        let html = "<table><tr><td>outer<table><tr><td>inner</td></tr></table></td></tr></table>";
        let (out, count) = convert_tables(html, &CleanupOptions::default());
        assert_eq!(out, "\n- outer inner\n");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_unclosed_table_untouched() {
        let html = "<table><tr><td>x</td></tr>";
        let (out, count) = convert_tables(html, &CleanupOptions::default());
        assert_eq!(out, html);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_unclosed_rows_untouched() {
        let html = "<table><tr><td>a<tr><td>b</table>";
        let (out, count) = convert_tables(html, &CleanupOptions::default());
        assert_eq!(out, html);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_unclosed_cells_keep_row_text() {
        let html = "<table><tr><td>a<td>b</tr></table>";
        let (out, count) = convert_tables(html, &CleanupOptions::default());
        assert_eq!(out, "\n- a b\n");
        assert_eq!(count, 1);
    }
}
