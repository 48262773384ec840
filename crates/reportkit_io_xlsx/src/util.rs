//! Source validation and name/index helpers.

use std::ffi::OsStr;
use std::path::Path;

use crate::conf::{C_EXT_SPREADSHEET, N_LEN_EXCEL_SHEET_NAME_MAX, TUP_EXCEL_ILLEGAL};
use crate::spec::XlsxIoError;

////////////////////////////////////////////////////////////////////////////////
// #region SourceValidation

/// Validate a spreadsheet source before opening it: the sheet name must be
/// non-blank, the file must exist, and the extension must be the supported
/// spreadsheet format.
pub fn validate_spreadsheet_source(path: &Path, sheet_name: &str) -> Result<(), XlsxIoError> {
    if sheet_name.trim().is_empty() {
        return Err(XlsxIoError::MissingSheetName);
    }
    if !path.is_file() {
        return Err(XlsxIoError::FileNotFound(path.to_path_buf()));
    }
    if path.extension().and_then(OsStr::to_str) != Some(C_EXT_SPREADSHEET) {
        return Err(XlsxIoError::NotSpreadsheetFile(path.to_path_buf()));
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region SheetNormalization

/// Replace invalid chars and trim to a valid Excel sheet name.
pub fn sanitize_sheet_name(name: &str, replace_to: &str) -> String {
    let mut c_name = name.to_string();
    for c_illegal in TUP_EXCEL_ILLEGAL {
        c_name = c_name.replace(c_illegal, replace_to);
    }
    c_name = c_name.trim().to_string();
    if c_name.is_empty() {
        c_name = "Sheet".to_string();
    }

    c_name.chars().take(N_LEN_EXCEL_SHEET_NAME_MAX).collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region IndexCasts

/// Cast a 1-indexed grid row to a 0-indexed worksheet row.
pub(crate) fn cast_row_num(row: usize) -> Result<u32, XlsxIoError> {
    u32::try_from(row.saturating_sub(1)).map_err(|_| XlsxIoError::CellOverflow { row, column: 0 })
}

/// Cast a 1-indexed grid column to a 0-indexed worksheet column.
pub(crate) fn cast_col_num(column: usize) -> Result<u16, XlsxIoError> {
    u16::try_from(column.saturating_sub(1))
        .map_err(|_| XlsxIoError::CellOverflow { row: 0, column })
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
