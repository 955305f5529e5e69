//! `json-compare` — report structural differences between two JSON files.
//!
//! Usage:
//!   json-compare <file1.json> <file2.json>
//!
//! Prints one diagnostic line per discovered mismatch, in discovery order,
//! followed by a summary line. Exits non-zero only when a file cannot be
//! read or parsed; finding mismatches is a normal outcome.

use std::path::Path;
use std::process;

use json_compare::compare_cli::{compare_files, report_lines};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let (file_a, file_b) = match (args.get(1), args.get(2)) {
        (Some(a), Some(b)) => (a.clone(), b.clone()),
        _ => {
            eprintln!("Usage: json-compare <file1.json> <file2.json>");
            process::exit(1);
        }
    };

    println!("Reading: {file_a}");
    println!("Reading: {file_b}");
    match compare_files(Path::new(&file_a), Path::new(&file_b)) {
        Ok(session) => {
            for line in report_lines(&session) {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}
