//! Report-values document constants.

/// Supported document extension (without the dot).
pub const C_EXT_XML: &str = "xml";

/// Document root element.
pub const TAG_ROOT: &[u8] = b"Reports";
/// Report element under the root.
pub const TAG_REPORT: &[u8] = b"Report";
/// Report name element.
pub const TAG_NAME: &[u8] = b"Name";
/// One report-value record.
pub const TAG_VALUE: &[u8] = b"ReportVal";
/// Logical row coordinate of a record.
pub const TAG_VALUE_ROW: &[u8] = b"ReportRow";
/// Logical column coordinate of a record.
pub const TAG_VALUE_COL: &[u8] = b"ReportCol";
/// Record value.
pub const TAG_VALUE_VAL: &[u8] = b"Val";
