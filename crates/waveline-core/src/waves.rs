//! Authored wave data: waves, fragments and waypoints.
//!
//! This is data only. Nothing in here is mutated once authored; live state
//! for a spawned fragment is held by the simulation's roster instead.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::errors::ScenarioError;

/// A node on a fragment's path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Waypoint {
    /// Hold position for `pause` seconds.
    Pause { pause: f64 },
    /// Move to grid cell `(x, z)`.
    Position { x: f64, z: f64 },
}

impl Waypoint {
    pub fn at(x: f64, z: f64) -> Self {
        Waypoint::Position { x, z }
    }

    pub fn pause(secs: f64) -> Self {
        Waypoint::Pause { pause: secs }
    }

    pub fn is_pause(&self) -> bool {
        matches!(self, Waypoint::Pause { .. })
    }
}

/// One scheduled enemy spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// Seconds after the wave timeline starts.
    pub time: f64,
    /// Key into the enemy section of the resource catalog.
    pub name: String,
    pub path: Vec<Waypoint>,
}

impl Fragment {
    pub fn new(time: f64, name: impl Into<String>, path: Vec<Waypoint>) -> Self {
        Self {
            time,
            name: name.into(),
            path,
        }
    }
}

/// An ordered batch of fragments, consumed front to back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaveInfo {
    pub fragments: VecDeque<Fragment>,
}

impl WaveInfo {
    pub fn new(fragments: impl IntoIterator<Item = Fragment>) -> Self {
        Self {
            fragments: fragments.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// Wave data declared by a map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    /// Enemies the player has to resolve to clear the map.
    pub enemy_count: u32,
    pub waves: Vec<WaveInfo>,
}

impl MapData {
    /// Map whose declared total matches the number of authored fragments.
    pub fn from_waves(waves: Vec<WaveInfo>) -> Self {
        let mut map = Self {
            enemy_count: 0,
            waves,
        };
        map.enemy_count = map.total_fragments() as u32;
        map
    }

    pub fn total_fragments(&self) -> usize {
        self.waves.iter().map(|w| w.fragments.len()).sum()
    }

    /// Reject paths the motion integrator cannot drive: an empty path has
    /// nowhere to place the unit, and a leading pause has no spawn cell.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        for (wave_idx, wave) in self.waves.iter().enumerate() {
            for (frag_idx, fragment) in wave.fragments.iter().enumerate() {
                let reason = match fragment.path.first() {
                    None => Some("path is empty"),
                    Some(Waypoint::Pause { .. }) => Some("path starts with a pause"),
                    Some(Waypoint::Position { .. }) => None,
                };
                if let Some(reason) = reason {
                    return Err(ScenarioError::InvalidPath {
                        wave: wave_idx,
                        fragment: frag_idx,
                        reason: format!("{} ({reason})", fragment.name),
                    });
                }
            }
        }
        Ok(())
    }
}
