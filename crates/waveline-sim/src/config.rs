//! Tunables for a controller instance.

use serde::{Deserialize, Serialize};

use waveline_core::constants::{CELL_CENTER_OFFSET, SPAWN_EPSILON};

/// Configuration for a new controller. Scenario files may override any field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// A fragment is due once `now >= time` or `|now - time|` is within this.
    pub spawn_epsilon: f64,
    /// Added to waypoint grid indices to aim at the cell centre.
    pub cell_center_offset: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            spawn_epsilon: SPAWN_EPSILON,
            cell_center_offset: CELL_CENTER_OFFSET,
        }
    }
}
