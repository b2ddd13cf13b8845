//! Snapshot system: read-only view of the roster for UI consumers.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use waveline_core::types::{EnemyId, Position};
use waveline_core::waves::WaveInfo;

use crate::roster::{ActiveFragment, Roster};

/// One live enemy as seen from outside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySnapshot {
    pub id: EnemyId,
    pub name: String,
    pub position: Position,
    pub rotation: f64,
    pub remaining_waypoints: usize,
    /// Serving a pause node right now.
    pub paused: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    /// Sorted by id.
    pub enemies: Vec<EnemySnapshot>,
    pub enemy_count: u32,
    pub pending_waves: usize,
    pub pending_fragments: usize,
}

/// Build a snapshot of the roster and what is left of the wave queue.
pub fn build_snapshot(roster: &Roster, waves: &VecDeque<WaveInfo>, enemy_count: u32) -> RosterSnapshot {
    let mut enemies: Vec<EnemySnapshot> = roster
        .world()
        .query::<&ActiveFragment>()
        .iter()
        .filter_map(|(_entity, active)| {
            let spawn = active.spawn.as_ref()?;
            Some(EnemySnapshot {
                id: spawn.id,
                name: active.fragment.name.clone(),
                position: spawn.inst.position,
                rotation: spawn.inst.rotation,
                remaining_waypoints: active.route.len(),
                paused: spawn.pause_remaining.is_some(),
            })
        })
        .collect();
    enemies.sort_by_key(|e| e.id);

    RosterSnapshot {
        enemies,
        enemy_count,
        pending_waves: waves.len(),
        pending_fragments: waves.iter().map(|w| w.fragments.len()).sum(),
    }
}
