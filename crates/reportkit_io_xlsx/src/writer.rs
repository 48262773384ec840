//! Grid writing into a workbook.

use std::path::Path;

use rust_xlsxwriter::{Workbook, XlsxError};

use reportkit_grid::grid::SheetGrid;

use crate::conf::{N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX};
use crate::spec::XlsxIoError;
use crate::util::{cast_col_num, cast_row_num, sanitize_sheet_name};

/// Write the grid's present cells into a single worksheet and save the
/// workbook at `path`.
///
/// Values-only output: every present cell is written as a string so digit
/// strings (`"010"`) and grouped values (`"1,234"`) survive a re-read
/// verbatim. The sheet name is sanitized to Excel's constraints.
pub fn save_sheet_grid(
    grid: &SheetGrid,
    path: &Path,
    sheet_name: &str,
) -> Result<(), XlsxIoError> {
    if grid.row_end() > N_NROWS_EXCEL_MAX + 1 {
        return Err(XlsxIoError::CellOverflow {
            row: grid.row_end() - 1,
            column: grid.col_start(),
        });
    }
    if grid.col_end() > N_NCOLS_EXCEL_MAX + 1 {
        return Err(XlsxIoError::CellOverflow {
            row: grid.row_start(),
            column: grid.col_end() - 1,
        });
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sanitize_sheet_name(sheet_name, "_"))
        .map_err(|err| derive_write_error(path, err))?;

    for n_row in grid.row_start()..grid.row_end() {
        for n_col in grid.col_start()..grid.col_end() {
            let Some(c_value) = grid.get(n_row, n_col) else {
                continue;
            };
            worksheet
                .write_string(cast_row_num(n_row)?, cast_col_num(n_col)?, c_value)
                .map_err(|err| derive_write_error(path, err))?;
        }
    }

    workbook
        .save(path)
        .map_err(|err| derive_write_error(path, err))?;
    Ok(())
}

fn derive_write_error(path: &Path, err: XlsxError) -> XlsxIoError {
    XlsxIoError::WorkbookWrite {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::load_sheet_grid;

    fn cell(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn save_then_load_round_trips_present_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("merged.xlsx");
        let grid = SheetGrid::from_rows(
            1,
            1,
            vec![
                vec![cell("Header"), cell("010")],
                vec![None, cell("1,234")],
            ],
        )
        .unwrap();

        save_sheet_grid(&grid, &path, "F 20.04").unwrap();
        let grid_reloaded = load_sheet_grid(&path, "F 20.04").unwrap();

        assert_eq!(grid_reloaded.get(1, 1), Some("Header"));
        assert_eq!(grid_reloaded.get(1, 2), Some("010"));
        assert_eq!(grid_reloaded.get(2, 2), Some("1,234"));
        assert_eq!(grid_reloaded.get(2, 1), None);
    }

    #[test]
    fn save_sanitizes_illegal_sheet_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        let grid = SheetGrid::from_rows(1, 1, vec![vec![cell("x")]]).unwrap();

        save_sheet_grid(&grid, &path, "bad/name").unwrap();

        assert!(load_sheet_grid(&path, "bad_name").is_ok());
    }

    #[test]
    fn save_preserves_grid_anchor_offsets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        let grid = SheetGrid::from_rows(9, 4, vec![vec![cell("4"), cell("5")]]).unwrap();

        save_sheet_grid(&grid, &path, "Sheet1").unwrap();
        let grid_reloaded = load_sheet_grid(&path, "Sheet1").unwrap();

        assert_eq!(grid_reloaded.row_start(), 9);
        assert_eq!(grid_reloaded.col_start(), 4);
        assert_eq!(grid_reloaded.get(9, 4), Some("4"));
        assert_eq!(grid_reloaded.get(9, 5), Some("5"));
    }
}
