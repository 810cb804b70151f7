//! Dense all-pairs bottleneck table.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::error::define_error_codes;

/// Cell value for node pairs that lie in different components.
///
/// Legal weights are non-negative, so the sentinel never collides with a
/// real bottleneck.
pub const UNREACHABLE: i32 = -1;

/// Errors raised while allocating a [`BottleneckTable`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TableError {
    /// `node_count * node_count` overflows `usize`.
    #[error("a table for {node_count} nodes has more cells than can be addressed")]
    TooLarge {
        /// Node count of the requested table.
        node_count: usize,
    },
    /// The allocator could not provide the cells.
    #[error("failed to allocate a table for {node_count} nodes: {source}")]
    AllocationFailed {
        /// Node count of the requested table.
        node_count: usize,
        /// Allocator failure.
        #[source]
        source: TryReserveError,
    },
}

define_error_codes! {
    /// Stable codes describing [`TableError`] variants.
    enum TableErrorCode for TableError {
        /// `node_count * node_count` overflows `usize`.
        TooLarge => TooLarge { .. } => "TABLE_TOO_LARGE",
        /// The allocator could not provide the cells.
        AllocationFailed => AllocationFailed { .. } => "TABLE_ALLOCATION_FAILED",
    }
}

/// Row-major `N x N` matrix of bottleneck values.
///
/// `get(i, j)` is the minimum edge weight on the spanning-forest path from
/// `i` to `j`, `0` on the diagonal, and [`UNREACHABLE`] when no path exists.
///
/// # Examples
/// ```
/// use widepath_core::{EdgeWeightGraph, UNREACHABLE, maximum_spanning_forest};
///
/// let graph = EdgeWeightGraph::from_triples(3, [(0, 1, 4)])?;
/// let table = maximum_spanning_forest(&graph)?.bottlenecks()?;
/// assert_eq!(table.get(0, 1), Some(4));
/// assert_eq!(table.get(1, 1), Some(0));
/// assert_eq!(table.get(0, 2), Some(UNREACHABLE));
/// assert_eq!(table.get(0, 3), None);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BottleneckTable {
    node_count: usize,
    cells: Vec<i32>,
}

impl BottleneckTable {
    /// Allocates a table whose every cell is [`UNREACHABLE`].
    ///
    /// The allocation is fallible so an oversized graph is reported instead
    /// of aborting the process.
    pub(crate) fn unreachable(node_count: usize) -> Result<Self, TableError> {
        let cell_count = node_count
            .checked_mul(node_count)
            .ok_or(TableError::TooLarge { node_count })?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(cell_count)
            .map_err(|source| TableError::AllocationFailed { node_count, source })?;
        cells.resize(cell_count, UNREACHABLE);
        Ok(Self { node_count, cells })
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[Vec<i32>]) -> Self {
        Self {
            node_count: rows.len(),
            cells: rows.iter().flatten().copied().collect(),
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: i32) {
        self.cells[row * self.node_count + col] = value;
    }

    /// Returns the number of nodes (rows and columns).
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the cell at `(row, col)`, or `None` outside the table.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        if row >= self.node_count || col >= self.node_count {
            return None;
        }
        self.cells.get(row * self.node_count + col).copied()
    }

    /// Returns `true` when a path joins `row` and `col`.
    #[must_use]
    pub fn is_reachable(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|value| value != UNREACHABLE)
    }

    /// Returns one row of the table.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[i32]> {
        if row >= self.node_count {
            return None;
        }
        let start = row * self.node_count;
        self.cells.get(start..start + self.node_count)
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        self.cells.chunks_exact(self.node_count.max(1))
    }

    /// Returns the cells in row-major order.
    #[must_use]
    #[rustfmt::skip]
    pub fn as_slice(&self) -> &[i32] { &self.cells }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(5)]
    fn new_tables_are_unreachable_everywhere(#[case] node_count: usize) {
        let table = BottleneckTable::unreachable(node_count).expect("small tables allocate");
        assert_eq!(table.node_count(), node_count);
        assert_eq!(table.as_slice().len(), node_count * node_count);
        assert!(table.as_slice().iter().all(|&cell| cell == UNREACHABLE));
    }

    #[rstest]
    fn overflowing_cell_counts_are_rejected() {
        let err = BottleneckTable::unreachable(usize::MAX).expect_err("cell count overflows");
        assert_eq!(err, TableError::TooLarge { node_count: usize::MAX });
        assert_eq!(err.code(), TableErrorCode::TooLarge);
    }

    #[rstest]
    fn unallocatable_tables_are_reported() {
        let node_count = 1usize << (usize::BITS / 2 - 1);
        let err = BottleneckTable::unreachable(node_count).expect_err("allocation must fail");
        assert_eq!(err.code(), TableErrorCode::AllocationFailed);
        assert_eq!(err.code().as_str(), "TABLE_ALLOCATION_FAILED");
    }
}
