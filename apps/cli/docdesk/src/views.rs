//! Plain-text rendering of views for the terminal.

use crate::error::DocdeskError;

use models::{DocumentRecord, decode};

use serde_json::Value;

const EMPTY_LIST_MESSAGE: &str = "No documents uploaded yet.";
const UNCATEGORIZED: &str = "-";

/// Render the `GET /documents` reply as an aligned table.
///
/// The ID column holds the stored file name, which is what `analyze` and
/// `delete` take.
pub fn render_document_list(listing: Value) -> Result<String, DocdeskError> {
    let records: Vec<DocumentRecord> = decode(listing)?;

    if records.is_empty() {
        return Ok(EMPTY_LIST_MESSAGE.to_string());
    }

    let header = ["NAME", "CATEGORY", "SIZE", "MODIFIED", "ID"];
    let rows: Vec<[String; 5]> = records
        .iter()
        .map(|r| {
            [
                r.display_name().to_string(),
                r.metadata
                    .category
                    .clone()
                    .unwrap_or_else(|| UNCATEGORIZED.to_string()),
                r.size.to_string(),
                r.last_modified.clone(),
                r.filename.clone(),
            ]
        })
        .collect();

    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: &[&str]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_row(&header)];
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        lines.push(format_row(&cells));
    }

    Ok(lines.join("\n"))
}

/// Pretty-print a raw service reply.
pub fn render_json(value: &Value) -> Result<String, DocdeskError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| DocdeskError::docdesk(format!("Failed to format reply: {e}")))
}
