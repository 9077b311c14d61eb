use thiserror::Error;

/// Errors that abort an alignment check.
///
/// Validation findings such as a too short element are not errors; they are
/// recorded in [`crate::ErrorFlags`] on the element instead.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DesignError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("row {row}: missing column {column}")]
    MissingColumn { row: usize, column: usize },

    #[error("row {row}: couldn't convert {value:?} in column {column} to a number")]
    InvalidNumber {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("row {row}: unknown element type {value:?}")]
    UnknownElementType { row: usize, value: String },

    #[error("input has {rows} rows, fewer than the skipped header and footer rows")]
    TooFewRows { rows: usize },

    #[error("element {id}: no straight breakpoints for vp bucket {bucket}")]
    NoStraightBreakpoints { id: i64, bucket: u32 },

    #[error("element {id}: no clothoid length found for vp {speed}")]
    NoClothoidLength { id: i64, speed: u32 },

    #[error("element {id}: could not find a radius element")]
    NoRadius { id: i64 },

    #[error("invalid design tables: {0}")]
    InvalidTables(String),
}

pub type Result<T> = std::result::Result<T, DesignError>;
