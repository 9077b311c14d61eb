//! File input and output helpers for alignment listings and reports.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

mod export;
mod listing;

pub use export::{
    report_json_string, table_csv_string, write_files, write_report_json, write_table_csv,
};
pub use listing::{
    parse_elements, parse_row, read_elements_csv, InputLayout, ID_COLUMN, LENGTH_COLUMN,
    RADIUS_COLUMN, TYPE_COLUMN,
};

/// Writes a string to a file, replacing its contents.
pub fn write_string<P: AsRef<Path>>(path: P, contents: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())
}
