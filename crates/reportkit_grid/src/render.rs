//! Flat HTML artifact rendering.

use crate::conf::{
    C_CLASS_COLUMN, C_CLASS_TABLE, C_CLASS_TABLE_ROW, C_CLASS_TEXT_CELL, C_COLNAME_UNNAMED_PREFIX,
};
use crate::spec::{RenderError, SpecDataTable};
use crate::util::is_textual_cell;

/// Render the data table as the flat report artifact.
///
/// Header row: one cell per column whose name does not start with the
/// unnamed-column sentinel prefix; sentinel columns are skipped in the header
/// row only. Data rows: textual cells carry the text-cell class, plain cells
/// carry none. Cell content is emitted verbatim.
pub fn render_html_table(table: &SpecDataTable) -> Result<String, RenderError> {
    if table.rows.is_empty() {
        return Err(RenderError::EmptyTable);
    }

    let mut c_html = String::new();
    c_html.push_str(&format!("<table class='{C_CLASS_TABLE}'>"));

    c_html.push_str(&format!("<tr class='{C_CLASS_TABLE_ROW}'>"));
    for c_colname in &table.column_names {
        if c_colname.starts_with(C_COLNAME_UNNAMED_PREFIX) {
            continue;
        }
        c_html.push_str(&format!("<td class='{C_CLASS_COLUMN}'>{c_colname}</td>"));
    }
    c_html.push_str("</tr>");

    for l_row in &table.rows {
        c_html.push_str(&format!("<tr class='{C_CLASS_TABLE_ROW}'>"));
        for c_cell in l_row {
            if is_textual_cell(c_cell) {
                c_html.push_str(&format!("<td class='{C_CLASS_TEXT_CELL}'>{c_cell}</td>"));
            } else {
                c_html.push_str(&format!("<td>{c_cell}</td>"));
            }
        }
        c_html.push_str("</tr>");
    }

    c_html.push_str("</table>");
    Ok(c_html)
}
