//! Run-report model for one report-generation pass.

use std::collections::BTreeMap;
use std::fmt;

/// Aggregate counters and diagnostics for one generate run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportRun {
    /// Index-cell candidates found by the scan.
    pub cnt_candidates: u64,
    /// Usable row indices after axis selection.
    pub cnt_row_indices: u64,
    /// Usable column indices after axis selection.
    pub cnt_column_indices: u64,
    /// Report records parsed from the values document.
    pub cnt_records: u64,
    /// Cells written by the merge.
    pub cnt_cells_written: u64,
    /// Length of the rendered artifact in bytes.
    pub len_html: u64,
    /// Non-fatal warnings collected during the run.
    pub warnings: Vec<String>,
}

impl ReportRun {
    /// Number of collected warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }

    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_candidates".to_string(), self.cnt_candidates);
        dict_counts.insert("cnt_row_indices".to_string(), self.cnt_row_indices);
        dict_counts.insert("cnt_column_indices".to_string(), self.cnt_column_indices);
        dict_counts.insert("cnt_records".to_string(), self.cnt_records);
        dict_counts.insert("cnt_cells_written".to_string(), self.cnt_cells_written);
        dict_counts.insert("len_html".to_string(), self.len_html);
        dict_counts.insert("cnt_warnings".to_string(), self.warning_count() as u64);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} candidates={} row_indices={} column_indices={} records={} cells_written={} html_len={} warnings={}",
            self.cnt_candidates,
            self.cnt_row_indices,
            self.cnt_column_indices,
            self.cnt_records,
            self.cnt_cells_written,
            self.len_html,
            self.warning_count()
        )
    }
}

impl fmt::Display for ReportRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[REPORT]"))
    }
}

#[cfg(test)]
mod tests {
    use super::ReportRun;

    #[test]
    fn report_run_to_dict_and_format_agree() {
        let mut report = ReportRun {
            cnt_candidates: 9,
            cnt_row_indices: 2,
            cnt_column_indices: 7,
            cnt_records: 6,
            cnt_cells_written: 6,
            len_html: 512,
            warnings: vec![],
        };
        report.warn("w");

        let dict_counts = report.to_dict();
        assert_eq!(dict_counts["cnt_candidates"], 9);
        assert_eq!(dict_counts["cnt_row_indices"], 2);
        assert_eq!(dict_counts["cnt_column_indices"], 7);
        assert_eq!(dict_counts["cnt_records"], 6);
        assert_eq!(dict_counts["cnt_cells_written"], 6);
        assert_eq!(dict_counts["len_html"], 512);
        assert_eq!(dict_counts["cnt_warnings"], 1);

        let txt = report.format("[REPORT]");
        assert_eq!(
            txt,
            "[REPORT] candidates=9 row_indices=2 column_indices=7 records=6 cells_written=6 html_len=512 warnings=1"
        );
        assert_eq!(report.to_string(), txt);
    }
}
