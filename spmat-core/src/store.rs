//! Coordinate store
//!
//! Maps `(row, col)` pairs to stored values. A row map of column maps keeps
//! memory proportional to the number of stored entries: rows without entries
//! occupy nothing, and nothing is sized by the declared extent.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::traits::MatrixElement;

/// Entries of one row, keyed by column
pub type RowEntries<T> = HashMap<usize, T>;

/// Sparse `(row, col) -> value` map with a zero default
///
/// The store knows nothing about the declared shape; bounds are enforced by
/// the containers built on top of it.
#[derive(Debug, Clone)]
pub struct CoordinateStore<T> {
    /// `rows[r][c]` = stored entry at (`r`, `c`)
    rows: HashMap<usize, RowEntries<T>>,
    /// Total number of stored entries across all rows
    nnz: usize,
}

impl<T> Default for CoordinateStore<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
            nnz: 0,
        }
    }
}

impl<T: MatrixElement> CoordinateStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored value at `(row, col)`, or zero if absent
    pub fn get(&self, row: usize, col: usize) -> T {
        self.rows
            .get(&row)
            .and_then(|entries| entries.get(&col))
            .copied()
            .unwrap_or_else(T::zero)
    }

    /// Store `value` at `(row, col)`; zero evicts the entry
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if value.is_zero() {
            self.remove(row, col);
            return;
        }
        let entries = self.rows.entry(row).or_default();
        if entries.insert(col, value).is_none() {
            self.nnz += 1;
        }
    }

    /// Remove the entry at `(row, col)`, returning it if present
    pub fn remove(&mut self, row: usize, col: usize) -> Option<T> {
        let entries = self.rows.get_mut(&row)?;
        let removed = entries.remove(&col)?;
        self.nnz -= 1;
        if entries.is_empty() {
            self.rows.remove(&row);
        }
        Some(removed)
    }

    /// Mutable slot at `(row, col)`, inserting an explicit zero if absent
    pub fn slot_mut(&mut self, row: usize, col: usize) -> &mut T {
        let entries = self.rows.entry(row).or_default();
        let nnz = &mut self.nnz;
        entries.entry(col).or_insert_with(|| {
            *nnz += 1;
            T::zero()
        })
    }

    /// Reference to the stored value, if any
    pub fn get_ref(&self, row: usize, col: usize) -> Option<&T> {
        self.rows.get(&row).and_then(|entries| entries.get(&col))
    }

    /// Number of physically stored entries (explicit zeros included)
    pub fn nnz(&self) -> usize {
        self.nnz
    }

    /// Entries of a row, if it holds any
    pub fn row(&self, row: usize) -> Option<&RowEntries<T>> {
        self.rows.get(&row)
    }

    /// Iterate over non-empty rows
    pub fn rows(&self) -> impl Iterator<Item = (usize, &RowEntries<T>)> {
        self.rows.iter().map(|(&r, entries)| (r, entries))
    }

    /// Iterate over all stored entries in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.rows
            .iter()
            .flat_map(|(&r, entries)| entries.iter().map(move |(&c, &v)| (r, c, v)))
    }

    /// Non-zero entries of a row sorted by column
    ///
    /// Explicit zeros left behind by [`CoordinateStore::slot_mut`] are skipped.
    pub fn sorted_row(&self, row: usize) -> Vec<(usize, T)> {
        let mut out: Vec<(usize, T)> = self
            .rows
            .get(&row)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|(_, v)| !v.is_zero())
                    .map(|(&c, &v)| (c, v))
                    .collect()
            })
            .unwrap_or_default();
        out.sort_unstable_by_key(|&(c, _)| c);
        out
    }

    /// Insert a whole row at once, replacing whatever the row held
    ///
    /// Zeros in `entries` are skipped.
    pub fn replace_row(&mut self, row: usize, entries: RowEntries<T>) {
        if let Some(old) = self.rows.remove(&row) {
            self.nnz -= old.len();
        }
        let entries: RowEntries<T> = entries.into_iter().filter(|(_, v)| !v.is_zero()).collect();
        if !entries.is_empty() {
            self.nnz += entries.len();
            self.rows.insert(row, entries);
        }
    }

    /// Drop every entry with row index `>= nrows`
    pub fn truncate_rows(&mut self, nrows: usize) {
        let nnz = &mut self.nnz;
        self.rows.retain(|&r, entries| {
            let keep = r < nrows;
            if !keep {
                *nnz -= entries.len();
            }
            keep
        });
    }

    /// Drop every entry with column index `>= ncols`
    pub fn truncate_cols(&mut self, ncols: usize) {
        let nnz = &mut self.nnz;
        self.rows.retain(|_, entries| {
            let before = entries.len();
            entries.retain(|&c, _| c < ncols);
            *nnz -= before - entries.len();
            !entries.is_empty()
        });
    }

    /// Evict explicit zeros left behind by mutable slots
    pub fn prune(&mut self) {
        let nnz = &mut self.nnz;
        self.rows.retain(|_, entries| {
            let before = entries.len();
            entries.retain(|_, v| !v.is_zero());
            *nnz -= before - entries.len();
            !entries.is_empty()
        });
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.rows.clear();
        self.nnz = 0;
    }
}
