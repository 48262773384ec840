//! Workbook reading into the merge-kernel models.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};

use reportkit_grid::conf::C_COLNAME_UNNAMED_PREFIX;
use reportkit_grid::grid::SheetGrid;
use reportkit_grid::spec::SpecDataTable;

use crate::spec::XlsxIoError;
use crate::util::validate_spreadsheet_source;

////////////////////////////////////////////////////////////////////////////////
// #region GridLoad

/// Load the named worksheet into a 1-indexed [`SheetGrid`] anchored at the
/// used range's first cell.
pub fn load_sheet_grid(path: &Path, sheet_name: &str) -> Result<SheetGrid, XlsxIoError> {
    validate_spreadsheet_source(path, sheet_name)?;
    let range = read_sheet_range(path, sheet_name)?;

    let Some((n_row0, n_col0)) = range.start() else {
        return Err(XlsxIoError::EmptySheet {
            sheet_name: sheet_name.to_string(),
        });
    };

    let l_rows = range
        .rows()
        .map(|row| row.iter().map(stringify_cell).collect())
        .collect();

    SheetGrid::from_rows(n_row0 as usize + 1, n_col0 as usize + 1, l_rows)
        .map_err(XlsxIoError::GridInit)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region DataTableLoad

/// Re-read a workbook as a flat data table: the first row of the used range
/// becomes the column names (blank names replaced by the unnamed-column
/// sentinel plus the 1-based position), the remaining rows become string
/// cells with absent cells as empty strings.
pub fn read_data_table(path: &Path, sheet_name: &str) -> Result<SpecDataTable, XlsxIoError> {
    validate_spreadsheet_source(path, sheet_name)?;
    let range = read_sheet_range(path, sheet_name)?;

    if range.start().is_none() {
        return Err(XlsxIoError::EmptySheet {
            sheet_name: sheet_name.to_string(),
        });
    }

    let mut iter_rows = range.rows();
    let l_colnames = match iter_rows.next() {
        Some(l_header) => l_header
            .iter()
            .enumerate()
            .map(|(n_idx, data)| derive_column_name(data, n_idx))
            .collect(),
        None => vec![],
    };

    let l_rows = iter_rows
        .map(|row| {
            row.iter()
                .map(|data| stringify_cell(data).unwrap_or_default())
                .collect()
        })
        .collect();

    Ok(SpecDataTable {
        column_names: l_colnames,
        rows: l_rows,
    })
}

fn derive_column_name(data: &Data, col_idx_0based: usize) -> String {
    match stringify_cell(data) {
        Some(c_name) if !c_name.trim().is_empty() => c_name,
        _ => format!("{C_COLNAME_UNNAMED_PREFIX}{}", col_idx_0based + 1),
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellConversion

fn read_sheet_range(
    path: &Path,
    sheet_name: &str,
) -> Result<calamine::Range<Data>, XlsxIoError> {
    let mut workbook: Xlsx<BufReader<File>> =
        open_workbook(path).map_err(|err: calamine::XlsxError| XlsxIoError::WorkbookOpen {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;

    if !workbook
        .sheet_names()
        .iter()
        .any(|c_name| c_name == sheet_name)
    {
        return Err(XlsxIoError::SheetNotFound {
            sheet_name: sheet_name.to_string(),
        });
    }

    workbook
        .worksheet_range(sheet_name)
        .map_err(|err| XlsxIoError::SheetRead {
            sheet_name: sheet_name.to_string(),
            message: err.to_string(),
        })
}

/// Convert one worksheet cell into the grid's optional string model.
///
/// Integral floats render without a fraction so digit strings stored as
/// numbers (`10.0`) still qualify as index-cell candidates.
fn stringify_cell(data: &Data) -> Option<String> {
    match data {
        Data::Empty => None,
        Data::String(val) => Some(val.clone()),
        Data::Float(val) => Some(stringify_float(*val)),
        Data::Int(val) => Some(val.to_string()),
        Data::Bool(val) => Some(if *val { "True" } else { "False" }.to_string()),
        Data::Error(val) => Some(val.to_string()),
        Data::DateTime(val) => Some(stringify_float(val.as_f64())),
        Data::DateTimeIso(val) => Some(val.clone()),
        Data::DurationIso(val) => Some(val.clone()),
    }
}

fn stringify_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        return (value as i64).to_string();
    }
    value.to_string()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
