//! `reportkit_grid` v1:
//! Pure merge kernel for spreadsheet report generation.
//!
//! Architecture:
//! - `conf`   : constants (unnamed-column sentinel, artifact class names)
//! - `spec`   : shared models and fault types
//! - `grid`   : 1-indexed sheet grid container
//! - `scan`   : index-cell scanning and unique-axis selection
//! - `merge`  : record resolution and formatted writes
//! - `render` : flat HTML artifact rendering
//! - `report` : run-report model
//! - `util`   : stateless helper predicates and formatting

pub mod conf;
pub mod grid;
pub mod merge;
pub mod render;
pub mod report;
pub mod scan;
pub mod spec;
pub mod util;

pub use conf::{
    C_CLASS_COLUMN, C_CLASS_TABLE, C_CLASS_TABLE_ROW, C_CLASS_TEXT_CELL, C_COLNAME_UNNAMED_PREFIX,
};
pub use grid::SheetGrid;
pub use merge::{lookup_index_cell, merge_report_values, resolve_target_cell};
pub use render::render_html_table;
pub use report::ReportRun;
pub use scan::{scan_index_cells, scan_index_cells_partitioned, select_axis_indices};
pub use spec::{
    EnumIndexMatch, MergeError, RenderError, SpecAxisSelection, SpecDataTable, SpecIndexCell,
    SpecReportRecord, SpecResolvedCell,
};
pub use util::{format_report_value, is_index_candidate, is_textual_cell};
