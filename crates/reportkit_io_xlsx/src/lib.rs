//! `reportkit_io_xlsx` v1:
//! Workbook I/O around the merge kernel.
//!
//! Architecture:
//! - `conf`   : Excel limits and extension constants
//! - `spec`   : fault types
//! - `util`   : source validation and name/index helpers
//! - `reader` : workbook -> `SheetGrid` / `SpecDataTable`
//! - `writer` : `SheetGrid` -> workbook

pub mod conf;
pub mod reader;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::{
    C_EXT_SPREADSHEET, N_LEN_EXCEL_SHEET_NAME_MAX, N_NCOLS_EXCEL_MAX, N_NROWS_EXCEL_MAX,
    TUP_EXCEL_ILLEGAL,
};
pub use reader::{load_sheet_grid, read_data_table};
pub use spec::XlsxIoError;
pub use util::{sanitize_sheet_name, validate_spreadsheet_source};
pub use writer::save_sheet_grid;
