//! Bounded cursor over the ordered mismatch catalog.
//!
//! The cursor snapshots the catalog's paths at construction time and keeps
//! an optional position into that snapshot. Record lookups go through a
//! `&MismatchCatalog` argument, so the cursor itself holds no borrow and
//! can live alongside the catalog in one owning session.

use json_compare_path::NodePath;

use crate::mismatch::{MismatchCatalog, MismatchRecord};

/// Stateful pointer used to step through a catalog's records in order.
///
/// Starts unpositioned; any navigation call on a non-empty catalog leaves
/// it positioned, and navigation clamps at both ends (no wraparound). On an
/// empty catalog every navigation call returns `None` and the cursor stays
/// unpositioned.
#[derive(Debug, Clone)]
pub struct MismatchCursor {
    paths: Vec<NodePath>,
    index: Option<usize>,
}

impl MismatchCursor {
    /// Snapshot the catalog's paths; the cursor starts unpositioned.
    pub fn new(catalog: &MismatchCatalog) -> Self {
        Self {
            paths: catalog.paths().cloned().collect(),
            index: None,
        }
    }

    /// Current position, or `None` before any navigation call.
    pub fn position(&self) -> Option<usize> {
        self.index
    }

    /// Move to the first record and return it, or `None` when empty.
    pub fn first<'a>(&mut self, catalog: &'a MismatchCatalog) -> Option<&'a MismatchRecord> {
        if self.paths.is_empty() {
            return None;
        }
        self.index = Some(0);
        self.record_at(catalog, 0)
    }

    /// Move to the last record and return it, or `None` when empty.
    pub fn last<'a>(&mut self, catalog: &'a MismatchCatalog) -> Option<&'a MismatchRecord> {
        if self.paths.is_empty() {
            return None;
        }
        let last = self.paths.len() - 1;
        self.index = Some(last);
        self.record_at(catalog, last)
    }

    /// Advance by one, clamped at the last record.
    ///
    /// Unpositioned behaves like [`MismatchCursor::first`].
    pub fn next<'a>(&mut self, catalog: &'a MismatchCatalog) -> Option<&'a MismatchRecord> {
        if self.paths.is_empty() {
            return None;
        }
        let next = match self.index {
            None => 0,
            Some(i) => (i + 1).min(self.paths.len() - 1),
        };
        self.index = Some(next);
        self.record_at(catalog, next)
    }

    /// Retreat by one, clamped at the first record.
    ///
    /// Unpositioned behaves like [`MismatchCursor::last`].
    pub fn previous<'a>(&mut self, catalog: &'a MismatchCatalog) -> Option<&'a MismatchRecord> {
        if self.paths.is_empty() {
            return None;
        }
        let prev = match self.index {
            None => self.paths.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.index = Some(prev);
        self.record_at(catalog, prev)
    }

    /// Record at the current position, or `None` when unpositioned.
    pub fn current<'a>(&self, catalog: &'a MismatchCatalog) -> Option<&'a MismatchRecord> {
        self.index.and_then(|i| self.record_at(catalog, i))
    }

    /// One-line report of the comparison outcome.
    ///
    /// Empty catalog reports that the files match; an unpositioned cursor
    /// reports the total count; a positioned one reports the message of the
    /// record at the position. Emptiness is decided by catalog length, so a
    /// single-mismatch catalog is never misreported as a match.
    pub fn summary(&self, catalog: &MismatchCatalog) -> String {
        if catalog.is_empty() {
            return "The files are the same".to_string();
        }
        match self.current(catalog) {
            Some(record) => record.message.clone(),
            None => format!("Found {} mismatches", catalog.len()),
        }
    }

    fn record_at<'a>(
        &self,
        catalog: &'a MismatchCatalog,
        index: usize,
    ) -> Option<&'a MismatchRecord> {
        self.paths.get(index).and_then(|path| catalog.get(path))
    }
}
