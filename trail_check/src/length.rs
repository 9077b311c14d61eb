//! Minimum and maximum permissible element lengths.

use crate::element::{Element, ElementKind};
use crate::error::Result;
use crate::neighbors::{nearest_radius, next_radius, previous_radius};

/// Driving time a radius or straight must last at its design speed.
pub const MIN_DRIVING_SECONDS: f64 = 1.0;
/// Driving time for a straight between two curves turning the same way.
pub const SAME_DIRECTION_SECONDS: f64 = 5.0;

/// Distance in meters travelled at `vp` km/h during `seconds`.
pub fn driving_length(vp: u32, seconds: f64) -> f64 {
    f64::from(vp) / 3.6 * seconds
}

/// True when both radii curve to the same side.
pub fn same_direction(a: f64, b: f64) -> bool {
    (a < 0.0 && b < 0.0) || (a > 0.0 && b > 0.0)
}

fn straight_min_length(elements: &[Element], pos: usize) -> f64 {
    let vp = elements[pos].vp;
    match (previous_radius(elements, pos), next_radius(elements, pos)) {
        (Some(p), Some(n)) if same_direction(p.radius, n.radius) => {
            driving_length(vp, SAME_DIRECTION_SECONDS)
        }
        _ => driving_length(vp, MIN_DRIVING_SECONDS),
    }
}

/// Derives `min_length` for every element and `max_length` for clothoids.
/// Speeds must already be assigned.
pub fn assign_length_bounds(elements: &mut [Element]) -> Result<()> {
    for i in 0..elements.len() {
        match elements[i].kind {
            ElementKind::Radius => {
                elements[i].min_length = driving_length(elements[i].vp, MIN_DRIVING_SECONDS);
            }
            ElementKind::Straight => {
                elements[i].min_length = straight_min_length(elements, i);
            }
            ElementKind::Clothoid => {
                let radius = nearest_radius(elements, i)?;
                let (a_min, a_max) = (radius.a_min, radius.a_max);
                elements[i].min_length = a_min;
                elements[i].max_length = Some(a_max);
            }
        }
    }
    Ok(())
}
