//! json-compare — structural diff of parsed JSON value trees.
//!
//! Walks two JSON documents in lock-step and produces an ordered,
//! deduplicated catalog of mismatch records, each addressed by a stable
//! node path (`$`, `.key`, `[index]`). A bounded cursor steps through the
//! catalog one record at a time.
//!
//! # Example
//!
//! ```
//! use json_compare::Comparison;
//! use serde_json::json;
//!
//! let mut session = Comparison::new();
//! session.compare(&json!({"a": 1, "b": {"c": 2}}), &json!({"a": 1, "b": {"c": 3}, "d": 4}));
//!
//! assert_eq!(session.summary(), "Found 2 mismatches");
//! assert_eq!(session.first().unwrap().message, "Mismatch: $.b.c - 2 != 3");
//! assert_eq!(session.next().unwrap().message, "Missing property: $.d: d");
//! ```

pub mod compare_cli;
pub mod comparison;
pub mod cursor;
pub mod diff;
pub mod loader;
pub mod mismatch;

pub use comparison::Comparison;
pub use cursor::MismatchCursor;
pub use diff::{compare, value_kind, ValueKind};
pub use loader::{load_json_file, LoadError};
pub use mismatch::{MismatchCatalog, MismatchKind, MismatchRecord, Side, ViewHandle};
