//! Runs the stages of a check in their fixed order.

use log::{debug, info};

use crate::element::Element;
use crate::error::Result;
use crate::length::assign_length_bounds;
use crate::report::{mean_vp, MeanVp, Report, RowFilter};
use crate::speed::assign_speeds;
use crate::tables::DesignTables;
use crate::validation::validate;

/// Checked alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub elements: Vec<Element>,
    pub mean_vp: MeanVp,
}

impl Analysis {
    pub fn flagged(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|e| !e.errors.is_empty())
    }

    pub fn report(&self, filter: RowFilter) -> Report {
        Report::new(&self.elements, filter)
    }
}

/// Derives speeds, length bounds and findings for the elements as read from
/// input. Every stage finishes on the whole sequence before the next starts.
pub fn analyze(mut elements: Vec<Element>, tables: &DesignTables) -> Result<Analysis> {
    debug!("assigning design speeds to {} elements", elements.len());
    assign_speeds(&mut elements, tables)?;
    debug!("deriving length bounds");
    assign_length_bounds(&mut elements)?;
    debug!("validating");
    validate(&mut elements);

    let mean_vp = mean_vp(&elements);
    let analysis = Analysis { elements, mean_vp };
    info!(
        "checked {} elements, {} flagged, mean vp {}",
        analysis.elements.len(),
        analysis.flagged().count(),
        analysis.mean_vp
    );
    Ok(analysis)
}
