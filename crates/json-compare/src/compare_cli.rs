//! Core logic for the `json-compare` binary.
//!
//! Kept in the library so the file-to-report pipeline is testable without
//! spawning the binary; the entry point in `src/bin/json_compare.rs` only
//! handles arguments, printing, and exit codes.

use std::path::Path;

use crate::comparison::Comparison;
use crate::loader::{load_json_file, LoadError};

/// Load two JSON files and run a comparison session over them.
///
/// The first load failure wins; mismatches between the documents are not an
/// error.
pub fn compare_files(file_a: &Path, file_b: &Path) -> Result<Comparison, LoadError> {
    let doc_a = load_json_file(file_a)?;
    let doc_b = load_json_file(file_b)?;
    let mut session = Comparison::new();
    session.compare(&doc_a, &doc_b);
    Ok(session)
}

/// Report lines for a finished comparison: one line per record message in
/// catalog order, then the summary line.
pub fn report_lines(session: &Comparison) -> Vec<String> {
    let mut lines: Vec<String> = session
        .catalog()
        .records()
        .map(|record| record.message.clone())
        .collect();
    lines.push(session.summary());
    lines
}
