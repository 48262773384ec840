//! Record resolution and formatted writes into the sheet grid.

use crate::grid::SheetGrid;
use crate::spec::{
    EnumIndexMatch, MergeError, SpecAxisSelection, SpecIndexCell, SpecReportRecord,
    SpecResolvedCell,
};
use crate::util::format_report_value;

////////////////////////////////////////////////////////////////////////////////
// #region Merge

/// Merge report records into `grid` using the axis selection.
///
/// Preconditions, checked before any write: both axis sides and the record
/// sequence must be non-empty. Records resolve independently, in input
/// order; the returned cells follow that order. The first fault aborts the
/// whole merge; writes already applied stay in place (callers needing
/// atomicity operate on a copy of the grid).
pub fn merge_report_values(
    grid: &mut SheetGrid,
    axis: &SpecAxisSelection,
    records: &[SpecReportRecord],
) -> Result<Vec<SpecResolvedCell>, MergeError> {
    if axis.row_indices.is_empty() {
        return Err(MergeError::NoRowIndices);
    }
    if axis.column_indices.is_empty() {
        return Err(MergeError::NoColumnIndices);
    }
    if records.is_empty() {
        return Err(MergeError::NoRecords);
    }

    let mut l_resolved = Vec::with_capacity(records.len());
    for record in records {
        let rc = resolve_row_index(&axis.row_indices, record.row)?;
        let cc = resolve_column_index(&axis.column_indices, record.column)?;

        let (n_row_target, n_col_target) = resolve_target_cell(rc, cc);
        let c_value = format_report_value(record.value);

        grid.set(n_row_target, n_col_target, c_value.clone())
            .map_err(|_| MergeError::TargetOutOfBounds {
                row: n_row_target,
                column: n_col_target,
            })?;

        l_resolved.push(SpecResolvedCell {
            row: n_row_target,
            column: n_col_target,
            value: c_value,
        });
    }

    Ok(l_resolved)
}

/// Choose the physical data cell jointly described by a row-index candidate
/// and a column-index candidate.
///
/// When `rc` sits strictly below AND strictly right of `cc`, the target keeps
/// `rc`'s row and `cc`'s column; otherwise it is the per-axis maximum.
pub fn resolve_target_cell(rc: &SpecIndexCell, cc: &SpecIndexCell) -> (usize, usize) {
    if rc.row > cc.row && rc.column > cc.column {
        (rc.row, cc.column)
    } else {
        (usize::max(rc.row, cc.row), usize::max(cc.column, rc.column))
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region IndexLookup

/// Locate the candidate whose raw value parses to `value`.
///
/// Raw values too large for `i64` cannot equal any record coordinate and are
/// treated as non-matching.
pub fn lookup_index_cell(cells: &[SpecIndexCell], value: i64) -> EnumIndexMatch<'_> {
    let mut first_found = None;
    let mut n_matches = 0usize;
    for cell in cells {
        if cell.raw_value.parse::<i64>().ok() == Some(value) {
            n_matches += 1;
            if first_found.is_none() {
                first_found = Some(cell);
            }
        }
    }

    match (first_found, n_matches) {
        (Some(cell), 1) => EnumIndexMatch::Found(cell),
        (Some(_), n) => EnumIndexMatch::Ambiguous(n),
        (None, _) => EnumIndexMatch::Missing,
    }
}

fn resolve_row_index(
    cells: &[SpecIndexCell],
    row: Option<i64>,
) -> Result<&SpecIndexCell, MergeError> {
    let Some(n_row) = row else {
        return Err(MergeError::RowIndexMissing { row: None });
    };
    match lookup_index_cell(cells, n_row) {
        EnumIndexMatch::Found(cell) => Ok(cell),
        EnumIndexMatch::Missing => Err(MergeError::RowIndexMissing { row: Some(n_row) }),
        EnumIndexMatch::Ambiguous(n_matches) => Err(MergeError::RowIndexAmbiguous {
            row: n_row,
            n_matches,
        }),
    }
}

fn resolve_column_index(
    cells: &[SpecIndexCell],
    column: Option<i64>,
) -> Result<&SpecIndexCell, MergeError> {
    let Some(n_column) = column else {
        return Err(MergeError::ColumnIndexMissing { column: None });
    };
    match lookup_index_cell(cells, n_column) {
        EnumIndexMatch::Found(cell) => Ok(cell),
        EnumIndexMatch::Missing => Err(MergeError::ColumnIndexMissing {
            column: Some(n_column),
        }),
        EnumIndexMatch::Ambiguous(n_matches) => Err(MergeError::ColumnIndexAmbiguous {
            column: n_column,
            n_matches,
        }),
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{scan_index_cells, select_axis_indices};

    fn cell(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    fn candidate(raw_value: &str, row: usize, column: usize) -> SpecIndexCell {
        SpecIndexCell {
            raw_value: raw_value.to_string(),
            row,
            column,
        }
    }

    fn record(row: i64, column: i64, value: f64) -> SpecReportRecord {
        SpecReportRecord {
            row: Some(row),
            column: Some(column),
            value,
        }
    }

    fn make_axis(
        row_indices: Vec<SpecIndexCell>,
        column_indices: Vec<SpecIndexCell>,
    ) -> SpecAxisSelection {
        SpecAxisSelection {
            row_indices,
            column_indices,
        }
    }

    /// 12x12 blank grid anchored at (1, 1).
    fn blank_grid() -> SheetGrid {
        SheetGrid::from_rows(1, 1, vec![vec![None; 12]; 12]).unwrap()
    }

    #[test]
    fn target_defaults_to_per_axis_maximum() {
        let rc = candidate("10", 9, 1);
        let cc = candidate("4", 1, 9);

        assert_eq!(resolve_target_cell(&rc, &cc), (9, 9));
    }

    #[test]
    fn target_keeps_column_of_dominated_candidate() {
        // rc sits strictly below and right of cc in both axes.
        let rc = candidate("10", 9, 9);
        let cc = candidate("4", 1, 1);

        assert_eq!(resolve_target_cell(&rc, &cc), (9, 1));
    }

    #[test]
    fn merge_rejects_empty_axis_sides_and_empty_records() {
        let mut grid = blank_grid();
        let rows = vec![candidate("10", 2, 1)];
        let cols = vec![candidate("4", 1, 2)];
        let l_records = vec![record(10, 4, 1.0)];

        assert_eq!(
            merge_report_values(&mut grid, &make_axis(vec![], cols.clone()), &l_records),
            Err(MergeError::NoRowIndices)
        );
        assert_eq!(
            merge_report_values(&mut grid, &make_axis(rows.clone(), vec![]), &l_records),
            Err(MergeError::NoColumnIndices)
        );
        assert_eq!(
            merge_report_values(&mut grid, &make_axis(rows, cols), &[]),
            Err(MergeError::NoRecords)
        );
        // Precondition faults leave the grid untouched.
        assert_eq!(grid, blank_grid());
    }

    #[test]
    fn merge_writes_formatted_values_at_resolved_targets() {
        let mut grid = blank_grid();
        let axis = make_axis(
            vec![candidate("10", 10, 1), candidate("20", 11, 1)],
            vec![candidate("4", 9, 4), candidate("5", 9, 5)],
        );
        let l_records = vec![
            record(10, 4, 900.0),
            record(20, 5, 1234.0),
            record(10, 5, 0.0),
        ];

        let l_resolved = merge_report_values(&mut grid, &axis, &l_records).unwrap();

        // Row indices sit left of the column indices, so each target is the
        // per-axis maximum: rc's row, cc's column.
        assert_eq!(
            l_resolved,
            vec![
                SpecResolvedCell {
                    row: 10,
                    column: 4,
                    value: "900".to_string()
                },
                SpecResolvedCell {
                    row: 11,
                    column: 5,
                    value: "1,234".to_string()
                },
                SpecResolvedCell {
                    row: 10,
                    column: 5,
                    value: "0".to_string()
                },
            ]
        );
        assert_eq!(grid.get(10, 4), Some("900"));
        assert_eq!(grid.get(11, 5), Some("1,234"));
        assert_eq!(grid.get(10, 5), Some("0"));
    }

    #[test]
    fn merge_overwrites_existing_cell_content() {
        let mut grid =
            SheetGrid::from_rows(1, 1, vec![vec![None, cell("keep")], vec![cell("2"), cell("old")]])
                .unwrap();
        let axis = make_axis(vec![candidate("2", 2, 1)], vec![candidate("9", 1, 2)]);

        merge_report_values(&mut grid, &axis, &[record(2, 9, 7.0)]).unwrap();

        assert_eq!(grid.get(2, 2), Some("7"));
        assert_eq!(grid.get(1, 2), Some("keep"));
    }

    #[test]
    fn merge_is_deterministic_from_equal_starting_state() {
        let axis = make_axis(
            vec![candidate("10", 10, 1), candidate("20", 11, 1)],
            vec![candidate("4", 9, 4)],
        );
        let l_records = vec![record(10, 4, 1.0), record(20, 4, 2500.0)];

        let mut grid_first = blank_grid();
        let mut grid_second = blank_grid();
        let l_resolved_first =
            merge_report_values(&mut grid_first, &axis, &l_records).unwrap();
        let l_resolved_second =
            merge_report_values(&mut grid_second, &axis, &l_records).unwrap();

        assert_eq!(l_resolved_first, l_resolved_second);
        assert_eq!(grid_first, grid_second);
    }

    #[test]
    fn merge_faults_on_missing_and_ambiguous_indices() {
        let mut grid = blank_grid();
        let axis = make_axis(
            vec![candidate("10", 2, 1), candidate("10", 3, 1)],
            vec![candidate("4", 1, 2)],
        );

        assert_eq!(
            merge_report_values(&mut grid, &axis, &[record(99, 4, 1.0)]),
            Err(MergeError::RowIndexMissing { row: Some(99) })
        );
        assert_eq!(
            merge_report_values(&mut grid, &axis, &[record(10, 4, 1.0)]),
            Err(MergeError::RowIndexAmbiguous {
                row: 10,
                n_matches: 2
            })
        );
        assert_eq!(
            merge_report_values(
                &mut grid,
                &make_axis(vec![candidate("10", 2, 1)], vec![candidate("4", 1, 2)]),
                &[record(10, 99, 1.0)]
            ),
            Err(MergeError::ColumnIndexMissing { column: Some(99) })
        );
    }

    #[test]
    fn merge_treats_absent_record_coordinates_as_missing() {
        let mut grid = blank_grid();
        let axis = make_axis(vec![candidate("10", 2, 1)], vec![candidate("4", 1, 2)]);

        assert_eq!(
            merge_report_values(
                &mut grid,
                &axis,
                &[SpecReportRecord {
                    row: None,
                    column: Some(4),
                    value: 1.0
                }]
            ),
            Err(MergeError::RowIndexMissing { row: None })
        );
        assert_eq!(
            merge_report_values(
                &mut grid,
                &axis,
                &[SpecReportRecord {
                    row: Some(10),
                    column: None,
                    value: 1.0
                }]
            ),
            Err(MergeError::ColumnIndexMissing { column: None })
        );
    }

    #[test]
    fn merge_keeps_earlier_writes_when_a_later_record_faults() {
        let mut grid = blank_grid();
        let axis = make_axis(vec![candidate("10", 10, 1)], vec![candidate("4", 9, 4)]);
        let l_records = vec![record(10, 4, 900.0), record(77, 4, 1.0)];

        let result = merge_report_values(&mut grid, &axis, &l_records);

        assert_eq!(result, Err(MergeError::RowIndexMissing { row: Some(77) }));
        assert_eq!(grid.get(10, 4), Some("900"));
    }

    #[test]
    fn merge_leading_zero_index_cells_match_parsed_values() {
        let mut grid = blank_grid();
        let axis = make_axis(vec![candidate("010", 10, 1)], vec![candidate("04", 9, 4)]);

        let l_resolved =
            merge_report_values(&mut grid, &axis, &[record(10, 4, 5.0)]).unwrap();

        assert_eq!(l_resolved[0].row, 10);
        assert_eq!(l_resolved[0].column, 4);
    }

    #[test]
    fn lookup_reports_found_missing_and_ambiguous() {
        let l_cells = vec![
            candidate("010", 2, 1),
            candidate("20", 3, 1),
            candidate("20", 4, 1),
        ];

        assert_eq!(
            lookup_index_cell(&l_cells, 10),
            EnumIndexMatch::Found(&l_cells[0])
        );
        assert_eq!(lookup_index_cell(&l_cells, 30), EnumIndexMatch::Missing);
        assert_eq!(lookup_index_cell(&l_cells, 20), EnumIndexMatch::Ambiguous(2));
    }

    #[test]
    fn scan_select_merge_pipeline_end_to_end() {
        // Column-index candidates "4"/"5" in row 9; row-index candidates
        // "10"/"20" in column 1, sole digit cells of their rows.
        let mut l_rows = vec![vec![None; 6]; 11];
        l_rows[8][3] = cell("4");
        l_rows[8][4] = cell("5");
        l_rows[9][0] = cell("10");
        l_rows[10][0] = cell("20");
        let mut grid = SheetGrid::from_rows(1, 1, l_rows).unwrap();

        let l_candidates = scan_index_cells(&grid);
        let axis = select_axis_indices(&l_candidates);

        // Row 9 holds two candidates, so only "10"/"20" are row indices;
        // column 1 holds two candidates, so only "4"/"5" are column indices.
        assert_eq!(axis.row_indices.len(), 2);
        assert_eq!(axis.column_indices.len(), 2);

        let l_resolved =
            merge_report_values(&mut grid, &axis, &[record(10, 4, 900.0)]).unwrap();

        assert_eq!(
            l_resolved,
            vec![SpecResolvedCell {
                row: 10,
                column: 4,
                value: "900".to_string()
            }]
        );
        assert_eq!(grid.get(10, 4), Some("900"));
    }
}
