//! Run configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::generate::GenerateError;

/// Paths and options for one generate run.
///
/// Loaded from a TOML file; absent keys fall back to the defaults below and
/// CLI flags override individual fields afterwards.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpecRunConfig {
    /// Report-values document path.
    pub values_file: PathBuf,
    /// Template workbook path.
    pub template_file: PathBuf,
    /// Worksheet holding the report grid.
    pub sheet_name: String,
    /// Merged workbook output path.
    pub merged_file: PathBuf,
    /// Artifact output path; stdout when absent.
    pub html_file: Option<PathBuf>,
    /// Maximum scan workers; available parallelism when absent.
    pub scan_workers: Option<usize>,
}

impl Default for SpecRunConfig {
    fn default() -> Self {
        Self {
            values_file: PathBuf::from("report_values.xml"),
            template_file: PathBuf::from("report_template.xlsx"),
            sheet_name: "Report".to_string(),
            merged_file: PathBuf::from("merged_report.xlsx"),
            html_file: None,
            scan_workers: None,
        }
    }
}

/// Load the run configuration: defaults when no file is given, the parsed
/// file otherwise.
pub fn load_run_config(path: Option<&Path>) -> Result<SpecRunConfig, GenerateError> {
    let Some(path) = path else {
        return Ok(SpecRunConfig::default());
    };

    let c_toml = fs::read_to_string(path).map_err(|err| GenerateError::Config {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    toml::from_str(&c_toml).map_err(|err| GenerateError::Config {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}
