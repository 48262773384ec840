//! Merge-kernel constants.

/// Column-name prefix reserved for unnamed/auto-generated columns.
pub const C_COLNAME_UNNAMED_PREFIX: &str = "NoName";

/// Class attribute of the artifact `<table>` element.
pub const C_CLASS_TABLE: &str = "report-table";
/// Class attribute of every artifact `<tr>` element.
pub const C_CLASS_TABLE_ROW: &str = "report-table-row";
/// Class attribute of header-row cells.
pub const C_CLASS_COLUMN: &str = "report-column";
/// Class attribute of textual data cells.
pub const C_CLASS_TEXT_CELL: &str = "header-style";

/// Worker cap applied when the partitioned scan is given no explicit limit.
pub const N_WORKERS_SCAN_MAX_DEFAULT: usize = 8;
