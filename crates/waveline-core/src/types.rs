//! Fundamental geometric and simulation types.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TIMELINE_LABEL;

/// 2D position on the field (grid units, Cartesian).
/// x = column axis, z = row axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.z)
    }

    /// Straight-line distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.to_dvec2().distance(other.to_dvec2())
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, z: v.y }
    }
}

/// Unique id handed to a fragment when it spawns. Never reused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque handle to a unit's render resource in the scene graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VisualHandle(pub u64);

/// Point on the simulation timeline: a label plus seconds since the
/// wave timeline started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineStamp {
    pub label: String,
    pub secs: f64,
}

impl TimelineStamp {
    pub fn new(label: impl Into<String>, secs: f64) -> Self {
        Self {
            label: label.into(),
            secs,
        }
    }

    /// Stamp on the default timeline.
    pub fn at(secs: f64) -> Self {
        Self::new(DEFAULT_TIMELINE_LABEL, secs)
    }

    /// Same label, advanced by `dt` seconds.
    pub fn advanced(&self, dt: f64) -> Self {
        Self {
            label: self.label.clone(),
            secs: self.secs + dt,
        }
    }
}
