use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use log::debug;

use crate::element::{Element, ElementKind};
use crate::error::{DesignError, Result};

pub const ID_COLUMN: usize = 0;
pub const TYPE_COLUMN: usize = 1;
pub const LENGTH_COLUMN: usize = 3;
pub const RADIUS_COLUMN: usize = 6;

/// Rows of a listing that surround the element rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLayout {
    pub skip_header: usize,
    pub skip_footer: usize,
}

impl Default for InputLayout {
    fn default() -> Self {
        Self {
            skip_header: 3,
            skip_footer: 1,
        }
    }
}

fn cell(record: &StringRecord, row: usize, column: usize) -> Result<&str> {
    record
        .get(column)
        .ok_or(DesignError::MissingColumn { row, column })
}

fn number<T: std::str::FromStr>(value: &str, row: usize, column: usize) -> Result<T> {
    value.parse().map_err(|_| DesignError::InvalidNumber {
        row,
        column,
        value: value.to_string(),
    })
}

fn real(value: &str, row: usize, column: usize) -> Result<f64> {
    let v: f64 = number(value, row, column)?;
    if !v.is_finite() {
        return Err(DesignError::InvalidNumber {
            row,
            column,
            value: value.to_string(),
        });
    }
    Ok(v)
}

/// Builds an element from one listing row. `row` is the 1-based line used in
/// diagnostics.
pub fn parse_row(record: &StringRecord, row: usize) -> Result<Element> {
    let id: i64 = number(cell(record, row, ID_COLUMN)?, row, ID_COLUMN)?;
    let token = cell(record, row, TYPE_COLUMN)?;
    let kind = ElementKind::from_token(token).ok_or_else(|| DesignError::UnknownElementType {
        row,
        value: token.to_string(),
    })?;
    let length = real(cell(record, row, LENGTH_COLUMN)?, row, LENGTH_COLUMN)?;
    let radius = match record.get(RADIUS_COLUMN) {
        Some(value) if !value.is_empty() => real(value, row, RADIUS_COLUMN)?,
        _ => 0.0,
    };
    Ok(Element::new(id, kind, length, radius))
}

/// Parses the element rows of a listing, skipping header and footer rows.
pub fn parse_elements<R: Read>(reader: R, layout: InputLayout) -> Result<Vec<Element>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let records = rdr.records().collect::<std::result::Result<Vec<_>, csv::Error>>()?;
    let too_few = DesignError::TooFewRows {
        rows: records.len(),
    };
    match layout.skip_header.checked_add(layout.skip_footer) {
        Some(skipped) if skipped <= records.len() => {}
        _ => return Err(too_few),
    }
    let data = &records[layout.skip_header..records.len() - layout.skip_footer];
    let elements = data
        .iter()
        .enumerate()
        .map(|(i, record)| parse_row(record, layout.skip_header + i + 1))
        .collect::<Result<Vec<_>>>()?;
    debug!("read {} elements", elements.len());
    Ok(elements)
}

pub fn read_elements_csv<P: AsRef<Path>>(path: P, layout: InputLayout) -> Result<Vec<Element>> {
    let file = File::open(path)?;
    parse_elements(file, layout)
}
