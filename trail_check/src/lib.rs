//! Core library for checking the design speeds and element lengths of a
//! horizontal alignment made of straights, clothoids and circular arcs.

pub mod element;
pub mod error;
pub mod io;
pub mod length;
pub mod neighbors;
pub mod pipeline;
pub mod report;
pub mod speed;
pub mod tables;
pub mod validation;

pub use element::{Element, ElementKind, ErrorFlags};
pub use error::{DesignError, Result};
pub use pipeline::{analyze, Analysis};
pub use report::{MeanVp, Report, RowFilter};
pub use tables::DesignTables;
