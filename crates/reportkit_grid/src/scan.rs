//! Index-cell scanning and unique-axis selection.

use std::collections::BTreeMap;

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::grid::SheetGrid;
use crate::spec::{SpecAxisSelection, SpecIndexCell};
use crate::util::{calculate_worker_limit, is_index_candidate};

////////////////////////////////////////////////////////////////////////////////
// #region Scan

/// Scan every in-bounds cell and collect index-cell candidates in row-major
/// order. Absent cells are skipped; a present cell qualifies iff its content
/// is a non-empty all-digit string.
pub fn scan_index_cells(grid: &SheetGrid) -> Vec<SpecIndexCell> {
    scan_row_span(grid, grid.row_start(), grid.row_end())
}

/// Partitioned parallel scan.
///
/// The row range is split into contiguous partitions, each scanned into a
/// partition-local sequence on a rayon pool, then concatenated in partition
/// order. No shared mutable state, no lock in the hot loop. Output is
/// identical to [`scan_index_cells`] for every input. Falls back to the
/// serial scan when one worker is requested or the pool cannot be built.
pub fn scan_index_cells_partitioned(
    grid: &SheetGrid,
    num_workers_max: Option<usize>,
) -> Vec<SpecIndexCell> {
    let n_workers_max = calculate_worker_limit(num_workers_max);
    if n_workers_max <= 1 || grid.height() <= 1 {
        return scan_index_cells(grid);
    }

    let l_partitions = partition_row_spans(grid.row_start(), grid.row_end(), n_workers_max);

    let thread_pool = ThreadPoolBuilder::new()
        .num_threads(n_workers_max)
        .build();
    let Ok(thread_pool) = thread_pool else {
        return scan_index_cells(grid);
    };

    thread_pool
        .install(|| {
            l_partitions
                .into_par_iter()
                .map(|(n_row_start, n_row_end)| scan_row_span(grid, n_row_start, n_row_end))
                .collect::<Vec<_>>()
        })
        .into_iter()
        .flatten()
        .collect()
}

fn scan_row_span(grid: &SheetGrid, row_start: usize, row_end: usize) -> Vec<SpecIndexCell> {
    let mut l_cells = Vec::new();
    for n_row in row_start..row_end {
        for n_col in grid.col_start()..grid.col_end() {
            let Some(c_value) = grid.get(n_row, n_col) else {
                continue;
            };
            if is_index_candidate(c_value) {
                l_cells.push(SpecIndexCell {
                    raw_value: c_value.to_string(),
                    row: n_row,
                    column: n_col,
                });
            }
        }
    }
    l_cells
}

/// Split `[row_start, row_end)` into at most `n_parts_max` contiguous spans.
fn partition_row_spans(
    row_start: usize,
    row_end: usize,
    n_parts_max: usize,
) -> Vec<(usize, usize)> {
    let n_rows_total = row_end.saturating_sub(row_start);
    if n_rows_total == 0 {
        return vec![];
    }

    let n_rows_per_part = usize::max(1, n_rows_total.div_ceil(usize::max(1, n_parts_max)));

    let mut l_spans = Vec::new();
    let mut n_row_cursor = row_start;
    while n_row_cursor < row_end {
        let n_span_end = usize::min(row_end, n_row_cursor + n_rows_per_part);
        l_spans.push((n_row_cursor, n_span_end));
        n_row_cursor = n_span_end;
    }
    l_spans
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region AxisSelection

/// Keep candidates whose physical row holds exactly one candidate, and
/// candidates whose physical column holds exactly one candidate.
///
/// Pure function of the candidate set; both sides preserve candidate input
/// order and are duplicate-free in their grouping key.
pub fn select_axis_indices(candidates: &[SpecIndexCell]) -> SpecAxisSelection {
    SpecAxisSelection {
        row_indices: select_singletons(candidates, |cell| cell.row),
        column_indices: select_singletons(candidates, |cell| cell.column),
    }
}

fn select_singletons(
    candidates: &[SpecIndexCell],
    key: impl Fn(&SpecIndexCell) -> usize,
) -> Vec<SpecIndexCell> {
    let mut dict_group_sizes: BTreeMap<usize, usize> = BTreeMap::new();
    for cell in candidates {
        *dict_group_sizes.entry(key(cell)).or_insert(0) += 1;
    }

    candidates
        .iter()
        .filter(|cell| dict_group_sizes[&key(cell)] == 1)
        .cloned()
        .collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
