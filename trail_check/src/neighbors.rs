//! Searches for the radius elements surrounding a position of the alignment.

use log::debug;

use crate::element::Element;
use crate::error::{DesignError, Result};

/// Scan direction along the element sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

/// Radius element found by a directed scan.
#[derive(Debug, Clone, Copy)]
pub struct RadiusHit<'a> {
    pub index: usize,
    pub element: &'a Element,
    /// Number of steps from the start position, at least 1.
    pub distance: usize,
}

/// Walks from `pos` in `direction` and returns the first radius element.
pub fn directed_next_radius(
    elements: &[Element],
    pos: usize,
    direction: Direction,
) -> Option<RadiusHit<'_>> {
    let candidates: Box<dyn Iterator<Item = usize>> = match direction {
        Direction::Backward => Box::new((0..pos.min(elements.len())).rev()),
        Direction::Forward => Box::new(pos + 1..elements.len()),
    };
    for (step, index) in candidates.enumerate() {
        let element = &elements[index];
        if element.is_radius() {
            return Some(RadiusHit {
                index,
                element,
                distance: step + 1,
            });
        }
    }
    None
}

pub fn previous_radius(elements: &[Element], pos: usize) -> Option<&Element> {
    directed_next_radius(elements, pos, Direction::Backward).map(|hit| hit.element)
}

pub fn next_radius(elements: &[Element], pos: usize) -> Option<&Element> {
    directed_next_radius(elements, pos, Direction::Forward).map(|hit| hit.element)
}

/// Closest radius element on either side of `pos`. On equal distance the
/// following element wins.
pub fn nearest_radius(elements: &[Element], pos: usize) -> Result<&Element> {
    let previous = directed_next_radius(elements, pos, Direction::Backward);
    let next = directed_next_radius(elements, pos, Direction::Forward);
    let hit = match (previous, next) {
        (Some(p), Some(n)) if p.distance < n.distance => p,
        (_, Some(n)) => n,
        (Some(p), None) => p,
        (None, None) => {
            let id = elements.get(pos).map_or(pos as i64, |e| e.id);
            return Err(DesignError::NoRadius { id });
        }
    };
    debug!(
        "nearest radius of position {pos} is element {} at distance {}",
        hit.element.id, hit.distance
    );
    Ok(hit.element)
}
