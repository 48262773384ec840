//! Shared merge-kernel models and fault types.

use std::fmt;

////////////////////////////////////////////////////////////////////////////////
// #region IndexModels

/// One index-cell candidate produced by scanning.
///
/// `raw_value` is guaranteed non-empty and decimal digits only; `row` and
/// `column` are the candidate's physical grid coordinates (1-indexed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecIndexCell {
    /// Cell content as scanned.
    pub raw_value: String,
    /// Physical row of the cell.
    pub row: usize,
    /// Physical column of the cell.
    pub column: usize,
}

/// Unique-axis selection over a candidate set.
///
/// Every element of `row_indices` is the sole candidate in its physical row;
/// symmetric for `column_indices`. Either side may be empty; that is a
/// representable state and only faults at the merge precondition boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecAxisSelection {
    /// Singleton-per-row candidates.
    pub row_indices: Vec<SpecIndexCell>,
    /// Singleton-per-column candidates.
    pub column_indices: Vec<SpecIndexCell>,
}

/// Typed outcome of an exactly-one index lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumIndexMatch<'a> {
    /// Exactly one candidate matched.
    Found(&'a SpecIndexCell),
    /// No candidate matched.
    Missing,
    /// More than one candidate matched; carries the match count.
    Ambiguous(usize),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region RecordModels

/// One external report value destined for the grid.
///
/// `row`/`column` are logical index values matched against candidate cell
/// contents, not physical coordinates. `None` coordinates resolve to a
/// missing-index fault at merge time.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecReportRecord {
    /// Logical row-index value.
    pub row: Option<i64>,
    /// Logical column-index value.
    pub column: Option<i64>,
    /// Value to merge.
    pub value: f64,
}

/// Physical target cell and formatted value written by merging one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecResolvedCell {
    /// Physical target row.
    pub row: usize,
    /// Physical target column.
    pub column: usize,
    /// Formatted value written at the target.
    pub value: String,
}

/// Flat table consumed by the renderer: column names plus string rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecDataTable {
    /// Column names, in column order.
    pub column_names: Vec<String>,
    /// Data rows; every row has one cell per column.
    pub rows: Vec<Vec<String>>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region FaultTypes

/// Merge faults: precondition violations and per-record resolution failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    /// The axis selection holds no usable row indices.
    NoRowIndices,
    /// The axis selection holds no usable column indices.
    NoColumnIndices,
    /// The record sequence is empty.
    NoRecords,
    /// No row-index candidate matched the record's row (or the row was absent).
    RowIndexMissing {
        /// Logical row of the offending record.
        row: Option<i64>,
    },
    /// More than one row-index candidate matched the record's row.
    RowIndexAmbiguous {
        /// Logical row of the offending record.
        row: i64,
        /// Number of matching candidates.
        n_matches: usize,
    },
    /// No column-index candidate matched the record's column (or it was absent).
    ColumnIndexMissing {
        /// Logical column of the offending record.
        column: Option<i64>,
    },
    /// More than one column-index candidate matched the record's column.
    ColumnIndexAmbiguous {
        /// Logical column of the offending record.
        column: i64,
        /// Number of matching candidates.
        n_matches: usize,
    },
    /// Resolved target coordinates fall outside the grid bounds.
    TargetOutOfBounds {
        /// Physical target row.
        row: usize,
        /// Physical target column.
        column: usize,
    },
}

impl fmt::Display for MergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRowIndices => {
                write!(f, "No unique row index cells detected in the grid.")
            }
            Self::NoColumnIndices => {
                write!(f, "No unique column index cells detected in the grid.")
            }
            Self::NoRecords => write!(f, "No report values found to merge."),
            Self::RowIndexMissing { row: Some(row) } => {
                write!(f, "No unique row index found for report row {row}.")
            }
            Self::RowIndexMissing { row: None } => {
                write!(f, "Report value carries no row coordinate.")
            }
            Self::RowIndexAmbiguous { row, n_matches } => {
                write!(f, "Report row {row} matches {n_matches} row index cells.")
            }
            Self::ColumnIndexMissing {
                column: Some(column),
            } => {
                write!(f, "No unique column index found for report column {column}.")
            }
            Self::ColumnIndexMissing { column: None } => {
                write!(f, "Report value carries no column coordinate.")
            }
            Self::ColumnIndexAmbiguous { column, n_matches } => {
                write!(
                    f,
                    "Report column {column} matches {n_matches} column index cells."
                )
            }
            Self::TargetOutOfBounds { row, column } => {
                write!(f, "Merge target ({row}, {column}) is outside the grid bounds.")
            }
        }
    }
}

impl std::error::Error for MergeError {}

/// Rendering faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The data table has no rows.
    EmptyTable,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTable => {
                write!(f, "Data table must have at least one row to render.")
            }
        }
    }
}

impl std::error::Error for RenderError {}

// #endregion
////////////////////////////////////////////////////////////////////////////////
