//! Lookup tables mapping radii to design speeds and design speeds to
//! minimum element lengths.

use std::collections::BTreeMap;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{DesignError, Result};

/// Upper radius bound of one speed step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusSpeed {
    /// Largest absolute radius in meters that still maps to `speed`.
    pub max_radius: f64,
    pub speed: u32,
}

/// Read-only design tables shared by every stage of a check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignTables {
    /// Radius steps in ascending order of `max_radius`.
    pub radius_speeds: Vec<RadiusSpeed>,
    /// Speed for radii above the last step.
    pub above_speed: u32,
    /// Length breakpoints of straights, keyed by speed bucket (multiples of 10).
    pub straight_breakpoints: BTreeMap<u32, Vec<f64>>,
    /// Minimum clothoid length keyed by radius speed.
    pub clothoid_min_lengths: BTreeMap<u32, f64>,
    /// Cap applied to the speed of radius elements.
    pub max_vp: u32,
    /// Speed of a straight longer than every breakpoint of its bucket.
    pub max_straight_vp: u32,
}

const RADIUS_SPEEDS: [(f64, u32); 15] = [
    (30.0, 40),
    (40.0, 45),
    (50.0, 50),
    (60.0, 55),
    (80.0, 60),
    (100.0, 65),
    (130.0, 70),
    (160.0, 75),
    (200.0, 80),
    (250.0, 85),
    (300.0, 90),
    (350.0, 95),
    (430.0, 100),
    (530.0, 110),
    (670.0, 120),
];

const CLOTHOID_MIN_LENGTHS: [(u32, f64); 16] = [
    (40, 15.0),
    (45, 20.0),
    (50, 20.0),
    (55, 30.0),
    (60, 30.0),
    (65, 39.0),
    (70, 39.0),
    (75, 44.0),
    (80, 44.0),
    (85, 50.0),
    (90, 50.0),
    (95, 56.0),
    (100, 56.0),
    (110, 61.0),
    (120, 67.0),
    (130, 72.0),
];

static BUILTIN: Lazy<DesignTables> = Lazy::new(DesignTables::default);

impl Default for DesignTables {
    fn default() -> Self {
        let straight_breakpoints = BTreeMap::from([
            (40, vec![30.0, 100.0, 180.0, 270.0, 380.0, 500.0]),
            (50, vec![35.0, 120.0, 210.0, 320.0, 440.0]),
            (60, vec![40.0, 140.0, 250.0, 370.0]),
            (70, vec![50.0, 160.0, 280.0]),
            (80, vec![60.0, 180.0]),
            (90, vec![70.0]),
        ]);
        Self {
            radius_speeds: RADIUS_SPEEDS
                .iter()
                .map(|&(max_radius, speed)| RadiusSpeed { max_radius, speed })
                .collect(),
            above_speed: 130,
            straight_breakpoints,
            clothoid_min_lengths: CLOTHOID_MIN_LENGTHS.into_iter().collect(),
            max_vp: 100,
            max_straight_vp: 100,
        }
    }
}

impl DesignTables {
    /// The built-in tables, created once per process.
    pub fn builtin() -> &'static DesignTables {
        &BUILTIN
    }

    /// Uncapped speed for a radius: the first step whose bound is not
    /// exceeded by `|radius|`.
    pub fn radius_speed(&self, radius: f64) -> u32 {
        let radius = radius.abs();
        self.radius_speeds
            .iter()
            .find(|step| radius <= step.max_radius)
            .map_or(self.above_speed, |step| step.speed)
    }

    /// Speed of a radius element, capped at [`DesignTables::max_vp`].
    pub fn radius_vp(&self, radius: f64) -> u32 {
        self.radius_speed(radius).min(self.max_vp)
    }

    pub fn straight_breakpoints(&self, bucket: u32) -> Option<&[f64]> {
        self.straight_breakpoints.get(&bucket).map(Vec::as_slice)
    }

    pub fn clothoid_min_length(&self, speed: u32) -> Option<f64> {
        self.clothoid_min_lengths.get(&speed).copied()
    }

    /// Checks the invariants the stages rely on.
    pub fn validate(&self) -> Result<()> {
        if self.radius_speeds.is_empty() {
            return Err(DesignError::InvalidTables("no radius steps".into()));
        }
        for pair in self.radius_speeds.windows(2) {
            if pair[1].max_radius <= pair[0].max_radius {
                return Err(DesignError::InvalidTables(format!(
                    "radius step {} does not follow {} in ascending order",
                    pair[1].max_radius, pair[0].max_radius
                )));
            }
        }
        for (bucket, breakpoints) in &self.straight_breakpoints {
            if breakpoints.windows(2).any(|pair| pair[1] <= pair[0]) {
                return Err(DesignError::InvalidTables(format!(
                    "straight breakpoints of bucket {bucket} are not in ascending order"
                )));
            }
        }
        if self.max_vp == 0 || self.max_straight_vp == 0 {
            return Err(DesignError::InvalidTables(
                "maximum speeds must be positive".into(),
            ));
        }
        let speeds = self
            .radius_speeds
            .iter()
            .map(|step| step.speed)
            .chain(std::iter::once(self.above_speed));
        for speed in speeds {
            let capped = speed.min(self.max_vp);
            if self.clothoid_min_length(capped).is_none() {
                return Err(DesignError::InvalidTables(format!(
                    "no clothoid length for radius speed {capped}"
                )));
            }
        }
        Ok(())
    }

    /// Parses and validates tables from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let tables: DesignTables = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
