//! Two-sweep recursive diff over parsed JSON values.
//!
//! [`compare`] walks the two documents twice, once with each side as the
//! reference, writing into a single catalog. A single sweep only visits the
//! members of its reference side, so object keys and trailing array elements
//! present on the other side alone are caught by the mirror sweep. The
//! first-writer-wins catalog keeps the symmetric findings from appearing
//! twice.

use json_compare_path::NodePath;
use serde_json::Value;

use crate::mismatch::{MismatchCatalog, MismatchKind, MismatchRecord, Side};

/// Runtime kind of a JSON value as seen by the type check.
///
/// Integers and floats are distinct kinds: `1` and `1.0` report as a type
/// mismatch, never as equal values. This mirrors the observed contract of
/// the system this engine reimplements; see DESIGN.md.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    Array,
    Object,
}

/// Classify a value for the kind check.
pub fn value_kind(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Bool,
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                ValueKind::Integer
            } else {
                ValueKind::Float
            }
        }
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
    }
}

/// Compare two JSON value trees.
///
/// Total over any pair of well-formed values: never fails, never touches
/// anything beyond the returned catalog. Catalog order is discovery order
/// and is deterministic (objects iterate in insertion order, arrays by
/// index, and the `a`-reference sweep runs before the `b`-reference one).
///
/// # Example
///
/// ```
/// use json_compare::diff::compare;
/// use serde_json::json;
///
/// let catalog = compare(&json!({"x": 1}), &json!({"x": [1]}));
/// let messages: Vec<&str> = catalog.records().map(|r| r.message.as_str()).collect();
/// assert_eq!(messages, vec!["Mismatch: $.x different types"]);
/// ```
pub fn compare(a: &Value, b: &Value) -> MismatchCatalog {
    let mut catalog = MismatchCatalog::new();
    sweep(a, b, NodePath::root(), Side::A, &mut catalog);
    sweep(b, a, NodePath::root(), Side::B, &mut catalog);
    catalog
}

/// One traversal comparing `x` against `y`, with `x` as the reference side.
fn sweep(x: &Value, y: &Value, path: NodePath, side: Side, catalog: &mut MismatchCatalog) {
    if x == y {
        return;
    }
    if value_kind(x) != value_kind(y) {
        let message = format!("Mismatch: {path} different types");
        catalog.insert_if_absent(MismatchRecord::new(
            path,
            MismatchKind::TypeMismatch,
            message,
            side,
        ));
        return;
    }
    match (x, y) {
        (Value::Object(x_members), Value::Object(y_members)) => {
            for (key, x_value) in x_members {
                let child = path.child(key.as_str());
                match y_members.get(key) {
                    None => {
                        let message = format!("Missing property: {child}: {key}");
                        catalog.insert_if_absent(MismatchRecord::new(
                            child,
                            MismatchKind::MissingProperty,
                            message,
                            side,
                        ));
                    }
                    Some(y_value) if x_value != y_value => {
                        sweep(x_value, y_value, child, side, catalog);
                    }
                    Some(_) => {}
                }
            }
        }
        (Value::Array(x_items), Value::Array(y_items)) => {
            for (index, x_item) in x_items.iter().enumerate() {
                let element = path.element(index);
                match y_items.get(index) {
                    None => {
                        let message = format!("Missing list element: {element} - {x_item}");
                        catalog.insert_if_absent(MismatchRecord::new(
                            element,
                            MismatchKind::MissingElement,
                            message,
                            side,
                        ));
                    }
                    Some(y_item) if x_item != y_item => {
                        sweep(x_item, y_item, element, side, catalog);
                    }
                    Some(_) => {}
                }
            }
        }
        _ => {
            let message = format!("Mismatch: {path} - {x} != {y}");
            catalog.insert_if_absent(MismatchRecord::new(
                path,
                MismatchKind::ValueMismatch,
                message,
                side,
            ));
        }
    }
}
