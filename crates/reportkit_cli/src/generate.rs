//! Pipeline orchestration: load, scan, select, merge, save, re-read, render.

use std::fmt;
use std::path::PathBuf;

use reportkit_grid::merge::merge_report_values;
use reportkit_grid::render::render_html_table;
use reportkit_grid::report::ReportRun;
use reportkit_grid::scan::{scan_index_cells_partitioned, select_axis_indices};
use reportkit_grid::spec::{MergeError, RenderError};
use reportkit_io_xlsx::reader::{load_sheet_grid, read_data_table};
use reportkit_io_xlsx::spec::XlsxIoError;
use reportkit_io_xlsx::util::sanitize_sheet_name;
use reportkit_io_xlsx::writer::save_sheet_grid;
use reportkit_io_xml::parser::parse_report_document_file;
use reportkit_io_xml::spec::XmlIoError;

use crate::conf::SpecRunConfig;

////////////////////////////////////////////////////////////////////////////////
// #region GenerateResult

/// Final artifact of one generate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFinal {
    /// Rendered flat HTML table.
    pub raw_html: String,
}

/// "Run failed" faults wrapping each stage's error type.
#[derive(Debug)]
pub enum GenerateError {
    /// Run configuration could not be loaded or parsed.
    Config {
        /// Configuration file path.
        path: PathBuf,
        /// Underlying error text.
        message: String,
    },
    /// Workbook validation, read, or write fault.
    Xlsx(XlsxIoError),
    /// Report-values document fault.
    Xml(XmlIoError),
    /// Merge precondition or resolution fault.
    Merge(MergeError),
    /// Artifact rendering fault.
    Render(RenderError),
    /// Artifact could not be written to its output path.
    ArtifactWrite {
        /// Artifact output path.
        path: PathBuf,
        /// Underlying error text.
        message: String,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { path, message } => {
                write!(f, "Failed to load run config {}: {message}", path.display())
            }
            Self::Xlsx(err) => write!(f, "{err}"),
            Self::Xml(err) => write!(f, "{err}"),
            Self::Merge(err) => write!(f, "{err}"),
            Self::Render(err) => write!(f, "{err}"),
            Self::ArtifactWrite { path, message } => {
                write!(f, "Failed to write artifact {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for GenerateError {}

impl From<XlsxIoError> for GenerateError {
    fn from(err: XlsxIoError) -> Self {
        Self::Xlsx(err)
    }
}

impl From<XmlIoError> for GenerateError {
    fn from(err: XmlIoError) -> Self {
        Self::Xml(err)
    }
}

impl From<MergeError> for GenerateError {
    fn from(err: MergeError) -> Self {
        Self::Merge(err)
    }
}

impl From<RenderError> for GenerateError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Generate

/// Run the full pipeline and return the artifact plus the run report.
///
/// Stages, in order: parse the report-values document; load the template
/// worksheet; scan index-cell candidates; select unique axes; merge records
/// into the grid; save the merged workbook; re-read it as a flat data table;
/// render the artifact. The first fault aborts the run.
pub fn generate(config: &SpecRunConfig) -> Result<(ReportFinal, ReportRun), GenerateError> {
    let document = parse_report_document_file(&config.values_file)?;
    let mut grid = load_sheet_grid(&config.template_file, &config.sheet_name)?;

    let l_candidates = scan_index_cells_partitioned(&grid, config.scan_workers);
    let axis = select_axis_indices(&l_candidates);
    let l_resolved = merge_report_values(&mut grid, &axis, &document.records)?;

    save_sheet_grid(&grid, &config.merged_file, &config.sheet_name)?;
    let c_sheet_saved = sanitize_sheet_name(&config.sheet_name, "_");
    let table = read_data_table(&config.merged_file, &c_sheet_saved)?;
    let c_html = render_html_table(&table)?;

    let mut report = ReportRun {
        cnt_candidates: l_candidates.len() as u64,
        cnt_row_indices: axis.row_indices.len() as u64,
        cnt_column_indices: axis.column_indices.len() as u64,
        cnt_records: document.records.len() as u64,
        cnt_cells_written: l_resolved.len() as u64,
        len_html: c_html.len() as u64,
        warnings: vec![],
    };
    if document.name.is_none() {
        report.warn("Values document carries no report name.");
    }

    Ok((ReportFinal { raw_html: c_html }, report))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
