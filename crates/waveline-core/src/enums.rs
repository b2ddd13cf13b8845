//! Enumeration types used throughout the simulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SpawnError;

/// Unit family a catalog entry or constructor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    /// Hostile unit driven along a wave path.
    Enemy,
    /// Player-controlled unit. Constructed here but not tracked.
    Operator,
}

impl UnitCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            UnitCategory::Enemy => "enemy",
            UnitCategory::Operator => "operator",
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for UnitCategory {
    type Err = SpawnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enemy" => Ok(UnitCategory::Enemy),
            "operator" => Ok(UnitCategory::Operator),
            other => Err(SpawnError::InvalidUnitSpecification {
                category: other.to_string(),
                data: String::from("unknown unit category"),
            }),
        }
    }
}

/// Kind of a discrete event recorded on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimelineEventKind {
    /// An enemy entered the field.
    #[serde(rename = "enemy create")]
    EnemyCreate,
    /// An enemy left the field at the end of its path.
    #[serde(rename = "enemy drop")]
    EnemyDrop,
}

impl TimelineEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TimelineEventKind::EnemyCreate => "enemy create",
            TimelineEventKind::EnemyDrop => "enemy drop",
        }
    }
}

impl fmt::Display for TimelineEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
