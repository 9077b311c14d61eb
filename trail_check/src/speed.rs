//! Design speed (Vp) assignment.
//!
//! Radius elements get their speed from the radius table. Straights and
//! clothoids only read the speeds of radius elements, so all radius elements
//! are assigned before any straight or clothoid.

use log::debug;

use crate::element::{Element, ElementKind};
use crate::error::{DesignError, Result};
use crate::neighbors::{nearest_radius, next_radius, previous_radius};
use crate::tables::DesignTables;

/// Minimum clothoid parameters `(AMin, AMax)` for a radius and its minimum
/// clothoid length.
pub fn clothoid_parameters(radius: f64, min_clothoid_length: f64) -> (f64, f64) {
    let base = radius.abs() * min_clothoid_length;
    (base.sqrt(), (base * 2.0).sqrt())
}

/// Speed of a straight of `length` meters next to curves of speed
/// `radius_vp`. Returns `None` when the speed bucket has no breakpoints.
pub fn straight_vp(tables: &DesignTables, radius_vp: u32, length: f64) -> Option<u32> {
    let addition = radius_vp % 10;
    let bucket = radius_vp - addition;
    let breakpoints = tables.straight_breakpoints(bucket)?;
    let vp = breakpoints
        .iter()
        .position(|&limit| length <= limit)
        .map_or(tables.max_straight_vp, |k| bucket + 10 * k as u32 + addition);
    Some(vp)
}

pub fn assign_radius_speeds(elements: &mut [Element], tables: &DesignTables) -> Result<()> {
    for element in elements.iter_mut().filter(|e| e.kind == ElementKind::Radius) {
        element.vp = tables.radius_vp(element.radius);
        let min_clothoid_length = tables.clothoid_min_length(element.vp).ok_or(
            DesignError::NoClothoidLength {
                id: element.id,
                speed: element.vp,
            },
        )?;
        let (a_min, a_max) = clothoid_parameters(element.radius, min_clothoid_length);
        element.a_min = a_min;
        element.a_max = a_max;
    }
    Ok(())
}

pub fn assign_straight_speeds(elements: &mut [Element], tables: &DesignTables) -> Result<()> {
    for i in 0..elements.len() {
        if elements[i].kind != ElementKind::Straight {
            continue;
        }
        let previous = previous_radius(elements, i).map(|r| r.vp);
        let next = next_radius(elements, i).map(|r| r.vp);
        let element = &elements[i];
        if previous.is_none() && next.is_none() {
            return Err(DesignError::NoRadius { id: element.id });
        }
        let radius_vp = previous.unwrap_or(0).max(next.unwrap_or(0));
        let vp = straight_vp(tables, radius_vp, element.length).ok_or(
            DesignError::NoStraightBreakpoints {
                id: element.id,
                bucket: radius_vp - radius_vp % 10,
            },
        )?;
        debug!("straight {} next to vp {radius_vp} gets vp {vp}", element.id);
        elements[i].vp = vp;
    }
    Ok(())
}

pub fn assign_clothoid_speeds(elements: &mut [Element]) -> Result<()> {
    for i in 0..elements.len() {
        if elements[i].kind != ElementKind::Clothoid {
            continue;
        }
        let vp = nearest_radius(elements, i)?.vp;
        elements[i].vp = vp;
    }
    Ok(())
}

/// Runs the three assignment passes in order: radius, straight, clothoid.
pub fn assign_speeds(elements: &mut [Element], tables: &DesignTables) -> Result<()> {
    assign_radius_speeds(elements, tables)?;
    assign_straight_speeds(elements, tables)?;
    assign_clothoid_speeds(elements)
}
