//! Mismatch records and the ordered catalog produced by one comparison run.

use indexmap::map::Entry;
use indexmap::IndexMap;
use json_compare_path::NodePath;
use std::fmt;

/// Classification of one reported difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchKind {
    /// The two nodes have different runtime kinds.
    TypeMismatch,
    /// Same kind of scalar, different value.
    ValueMismatch,
    /// An object key present on one side only.
    MissingProperty,
    /// An array index present on one side only.
    MissingElement,
}

/// Which input played the reference role in the sweep that discovered a
/// record. For missing members this is the side the member is present on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => f.write_str("A"),
            Side::B => f.write_str("B"),
        }
    }
}

/// Opaque handle a presentation layer can attach to a record.
///
/// The engine never creates or inspects handles; every record leaves the
/// engine with an empty handle list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewHandle(String);

impl ViewHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One reported structural difference at a given path.
#[derive(Debug, Clone, PartialEq)]
pub struct MismatchRecord {
    pub path: NodePath,
    pub kind: MismatchKind,
    pub message: String,
    pub side: Side,
    pub display_refs: Vec<ViewHandle>,
}

impl MismatchRecord {
    pub fn new(path: NodePath, kind: MismatchKind, message: impl Into<String>, side: Side) -> Self {
        Self {
            path,
            kind,
            message: message.into(),
            side,
            display_refs: Vec::new(),
        }
    }
}

/// Ordered, deduplicated collection of mismatch records.
///
/// Insertion order is discovery order; at most one record exists per path.
/// Rebuilt from empty on every comparison run and read-only afterwards,
/// apart from presentation layers attaching handles via
/// [`MismatchCatalog::get_mut`].
#[derive(Debug, Clone, Default)]
pub struct MismatchCatalog {
    records: IndexMap<NodePath, MismatchRecord>,
}

impl MismatchCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record unless its path is already present.
    ///
    /// The first mismatch discovered at a path wins; later discoveries at
    /// the same path (including those of the mirror sweep) are dropped.
    /// Returns whether the record was inserted.
    pub fn insert_if_absent(&mut self, record: MismatchRecord) -> bool {
        match self.records.entry(record.path.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no mismatches were discovered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, path: &NodePath) -> Option<&MismatchRecord> {
        self.records.get(path)
    }

    /// Mutable access for presentation layers attaching display handles.
    pub fn get_mut(&mut self, path: &NodePath) -> Option<&mut MismatchRecord> {
        self.records.get_mut(path)
    }

    /// Paths in discovery order.
    pub fn paths(&self) -> impl Iterator<Item = &NodePath> {
        self.records.keys()
    }

    /// Records in discovery order.
    pub fn records(&self) -> impl Iterator<Item = &MismatchRecord> {
        self.records.values()
    }

    /// `(path, record)` pairs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodePath, &MismatchRecord)> {
        self.records.iter()
    }
}
