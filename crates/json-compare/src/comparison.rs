//! One comparison session: engine run plus catalog and cursor.

use serde_json::Value;

use crate::cursor::MismatchCursor;
use crate::diff;
use crate::mismatch::{MismatchCatalog, MismatchRecord};

/// A single logical comparison session.
///
/// Owns the catalog produced by the most recent [`Comparison::compare`] call
/// and a cursor over it. Each independent comparison needs its own session;
/// there is no shared or global state.
///
/// # Example
///
/// ```
/// use json_compare::Comparison;
/// use serde_json::json;
///
/// let mut session = Comparison::new();
/// session.compare(&json!([1, 2]), &json!([1, 3]));
/// assert_eq!(session.summary(), "Found 1 mismatches");
/// assert_eq!(session.first().unwrap().message, "Mismatch: $[1] - 2 != 3");
/// ```
#[derive(Debug, Clone)]
pub struct Comparison {
    catalog: MismatchCatalog,
    cursor: MismatchCursor,
}

impl Comparison {
    /// Fresh session with an empty catalog and an unpositioned cursor.
    pub fn new() -> Self {
        let catalog = MismatchCatalog::new();
        let cursor = MismatchCursor::new(&catalog);
        Self { catalog, cursor }
    }

    /// Compare two value trees, replacing any previous result.
    ///
    /// Rebuilds the catalog from empty and resets the cursor to its
    /// unpositioned state over the new snapshot.
    pub fn compare(&mut self, a: &Value, b: &Value) {
        self.catalog = diff::compare(a, b);
        self.cursor = MismatchCursor::new(&self.catalog);
    }

    /// The catalog of the most recent comparison run.
    pub fn catalog(&self) -> &MismatchCatalog {
        &self.catalog
    }

    /// Mutable catalog access for presentation layers attaching handles.
    pub fn catalog_mut(&mut self) -> &mut MismatchCatalog {
        &mut self.catalog
    }

    /// One-line report of the current state; see [`MismatchCursor::summary`].
    pub fn summary(&self) -> String {
        self.cursor.summary(&self.catalog)
    }

    pub fn first(&mut self) -> Option<&MismatchRecord> {
        self.cursor.first(&self.catalog)
    }

    pub fn last(&mut self) -> Option<&MismatchRecord> {
        self.cursor.last(&self.catalog)
    }

    pub fn next(&mut self) -> Option<&MismatchRecord> {
        self.cursor.next(&self.catalog)
    }

    pub fn previous(&mut self) -> Option<&MismatchRecord> {
        self.cursor.previous(&self.catalog)
    }

    pub fn current(&self) -> Option<&MismatchRecord> {
        self.cursor.current(&self.catalog)
    }
}

impl Default for Comparison {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mismatch::MismatchKind;
    use serde_json::json;

    #[test]
    fn fresh_session_reports_a_match() {
        let session = Comparison::new();
        assert!(session.catalog().is_empty());
        assert_eq!(session.summary(), "The files are the same");
    }

    #[test]
    fn compare_resets_catalog_and_cursor() {
        let mut session = Comparison::new();
        session.compare(&json!({"a": 1}), &json!({"a": 2}));
        session.first();
        assert!(session.current().is_some());

        session.compare(&json!({"a": 1}), &json!({"a": 1}));
        assert!(session.catalog().is_empty());
        assert!(session.current().is_none());
        assert_eq!(session.summary(), "The files are the same");
    }

    #[test]
    fn navigation_steps_through_both_records() {
        let mut session = Comparison::new();
        session.compare(
            &json!({"a": 1, "b": {"c": 2}}),
            &json!({"a": 1, "b": {"c": 3}, "d": 4}),
        );

        assert_eq!(session.summary(), "Found 2 mismatches");

        let first = session.first().unwrap();
        assert_eq!(first.kind, MismatchKind::ValueMismatch);
        assert_eq!(first.message, "Mismatch: $.b.c - 2 != 3");

        let second = session.next().unwrap();
        assert_eq!(second.kind, MismatchKind::MissingProperty);
        assert_eq!(second.path.to_string(), "$.d");

        // Clamped at the end.
        let still_second = session.next().unwrap();
        assert_eq!(still_second.path.to_string(), "$.d");
    }

    #[test]
    fn handles_survive_until_the_next_compare() {
        use crate::mismatch::ViewHandle;

        let mut session = Comparison::new();
        session.compare(&json!({"a": 1}), &json!({"a": 2}));
        let path = session.first().unwrap().path.clone();

        session
            .catalog_mut()
            .get_mut(&path)
            .unwrap()
            .display_refs
            .push(ViewHandle::new("node-1"));
        assert_eq!(session.current().unwrap().display_refs.len(), 1);

        session.compare(&json!({"a": 1}), &json!({"a": 2}));
        assert!(session.first().unwrap().display_refs.is_empty());
    }
}
