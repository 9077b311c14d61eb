//! Speed continuity and length checks. Findings are added to the element
//! flags and never cleared.

use crate::element::{Element, ErrorFlags};

/// Largest tolerated Vp jump between adjacent elements.
pub const MAX_VP_DIFFERENCE: u32 = 20;
/// Open ended top speed class. Jumps next to it are checked with `>=`.
pub const VP_CEILING: u32 = 100;

/// Whether the jump between two adjacent speeds is too large. Next to an
/// element at the speed `ceiling` a jump of exactly the limit is flagged too.
pub fn vp_difference_exceeded(a: u32, b: u32, ceiling: u32) -> bool {
    let diff = a.abs_diff(b);
    if a == ceiling || b == ceiling {
        diff >= MAX_VP_DIFFERENCE
    } else {
        diff > MAX_VP_DIFFERENCE
    }
}

pub fn check_vp_differences(elements: &mut [Element]) {
    for i in 1..elements.len() {
        if vp_difference_exceeded(elements[i - 1].vp, elements[i].vp, VP_CEILING) {
            elements[i - 1].errors.insert(ErrorFlags::VP_DIFFERENCE);
            elements[i].errors.insert(ErrorFlags::VP_DIFFERENCE);
        }
    }
}

pub fn check_length_bounds(elements: &mut [Element]) {
    for element in elements.iter_mut() {
        if element.length < element.min_length {
            element.errors.insert(ErrorFlags::BELOW_MIN_LENGTH);
        }
        if let Some(max) = element.max_length.filter(|max| *max != 0.0) {
            if element.length > max {
                element.errors.insert(ErrorFlags::ABOVE_MAX_LENGTH);
            }
        }
    }
}

/// Runs the speed continuity pass, then the length pass.
pub fn validate(elements: &mut [Element]) {
    check_vp_differences(elements);
    check_length_bounds(elements);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_vps(vps: &[u32]) -> Vec<Element> {
        vps.iter()
            .enumerate()
            .map(|(i, &vp)| {
                let mut e = Element::straight(i as i64, 100.0);
                e.vp = vp;
                e
            })
            .collect()
    }

    #[test]
    fn jump_limits() {
        assert!(vp_difference_exceeded(100, 79, 100));
        assert!(vp_difference_exceeded(100, 80, 100));
        assert!(!vp_difference_exceeded(100, 81, 100));
        assert!(vp_difference_exceeded(90, 69, 100));
        assert!(!vp_difference_exceeded(90, 70, 100));
        assert!(!vp_difference_exceeded(70, 90, 100));
    }

    #[test]
    fn both_neighbours_are_flagged() {
        let mut elements = with_vps(&[50, 50, 80, 80]);
        check_vp_differences(&mut elements);
        let flagged: Vec<bool> = elements
            .iter()
            .map(|e| e.errors.contains(ErrorFlags::VP_DIFFERENCE))
            .collect();
        assert_eq!(flagged, vec![false, true, true, false]);
    }

    #[test]
    fn single_element_has_no_pairs() {
        let mut elements = with_vps(&[40]);
        check_vp_differences(&mut elements);
        assert!(elements[0].errors.is_empty());
        let mut empty: Vec<Element> = Vec::new();
        check_vp_differences(&mut empty);
    }

    #[test]
    fn clothoid_length_window() {
        let mut elements: Vec<Element> = [150.0, 100.0, 200.0]
            .iter()
            .enumerate()
            .map(|(i, &len)| {
                let mut e = Element::clothoid(i as i64, len);
                e.min_length = 122.47;
                e.max_length = Some(173.21);
                e
            })
            .collect();
        check_length_bounds(&mut elements);
        assert!(elements[0].errors.is_empty());
        assert_eq!(elements[1].errors, ErrorFlags::BELOW_MIN_LENGTH);
        assert_eq!(elements[2].errors, ErrorFlags::ABOVE_MAX_LENGTH);
    }

    #[test]
    fn zero_max_length_is_unbounded() {
        let mut elements = vec![Element::clothoid(0, 50.0)];
        elements[0].max_length = Some(0.0);
        check_length_bounds(&mut elements);
        assert!(elements[0].errors.is_empty());
    }

    #[test]
    fn flags_are_never_cleared() {
        let mut elements = with_vps(&[40, 90]);
        elements[0].min_length = 500.0;
        validate(&mut elements);
        validate(&mut elements);
        assert_eq!(
            elements[0].errors,
            ErrorFlags::VP_DIFFERENCE | ErrorFlags::BELOW_MIN_LENGTH
        );
    }
}
