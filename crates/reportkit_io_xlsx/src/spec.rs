//! Workbook I/O fault types.

use std::fmt;
use std::path::PathBuf;

/// Faults raised while validating, reading, or writing workbooks.
#[derive(Debug)]
pub enum XlsxIoError {
    /// Source file does not exist.
    FileNotFound(PathBuf),
    /// Source file does not carry the supported spreadsheet extension.
    NotSpreadsheetFile(PathBuf),
    /// Sheet name is empty or whitespace.
    MissingSheetName,
    /// Workbook could not be opened.
    WorkbookOpen {
        /// Workbook path.
        path: PathBuf,
        /// Underlying error text.
        message: String,
    },
    /// Named sheet is absent from the workbook.
    SheetNotFound {
        /// Requested sheet name.
        sheet_name: String,
    },
    /// Sheet range could not be read.
    SheetRead {
        /// Requested sheet name.
        sheet_name: String,
        /// Underlying error text.
        message: String,
    },
    /// Sheet holds no cells at all.
    EmptySheet {
        /// Requested sheet name.
        sheet_name: String,
    },
    /// Loaded range could not be shaped into a grid.
    GridInit(String),
    /// Grid exceeds worksheet limits or cell coordinates overflow.
    CellOverflow {
        /// Offending row (1-indexed).
        row: usize,
        /// Offending column (1-indexed).
        column: usize,
    },
    /// Workbook could not be written.
    WorkbookWrite {
        /// Output path.
        path: PathBuf,
        /// Underlying error text.
        message: String,
    },
}

impl fmt::Display for XlsxIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound(path) => {
                write!(f, "Spreadsheet file not found: {}", path.display())
            }
            Self::NotSpreadsheetFile(path) => {
                write!(
                    f,
                    "Only xlsx spreadsheet files are supported: {}",
                    path.display()
                )
            }
            Self::MissingSheetName => write!(f, "Sheet name must not be empty."),
            Self::WorkbookOpen { path, message } => {
                write!(f, "Failed to open workbook {}: {message}", path.display())
            }
            Self::SheetNotFound { sheet_name } => {
                write!(f, "Worksheet not found: {sheet_name:?}")
            }
            Self::SheetRead {
                sheet_name,
                message,
            } => {
                write!(f, "Failed to read worksheet {sheet_name:?}: {message}")
            }
            Self::EmptySheet { sheet_name } => {
                write!(f, "Worksheet {sheet_name:?} has no cells.")
            }
            Self::GridInit(message) => write!(f, "{message}"),
            Self::CellOverflow { row, column } => {
                write!(f, "Cell ({row}, {column}) exceeds worksheet limits.")
            }
            Self::WorkbookWrite { path, message } => {
                write!(f, "Failed to write workbook {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for XlsxIoError {}
