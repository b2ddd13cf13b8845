//! Wave spawning system — releases the head fragment once it is due.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use waveline_core::enums::TimelineEventKind;
use waveline_core::errors::SpawnError;
use waveline_core::services::{FieldMap, SceneGraph, TimelineNotifier};
use waveline_core::types::{EnemyId, TimelineStamp};
use waveline_core::waves::{WaveInfo, Waypoint};

use crate::factory::UnitFactory;
use crate::roster::{ActiveFragment, Roster};

/// Frame timestamps are sampled floats that can land just short of the
/// authored time, so anything within `epsilon` below it counts as due.
pub fn is_due(scheduled: f64, now: f64, epsilon: f64) -> bool {
    now >= scheduled || (now - scheduled).abs() <= epsilon
}

/// Check the head fragment of the head wave and spawn it if due.
///
/// Spawns at most one enemy per call. Returns the id of the spawned enemy.
/// A factory error leaves the wave queue, roster and id counter as they were.
#[allow(clippy::too_many_arguments)]
pub fn run(
    waves: &mut VecDeque<WaveInfo>,
    roster: &mut Roster,
    factory: &mut UnitFactory,
    field: &mut dyn FieldMap,
    scene: &mut dyn SceneGraph,
    timeline: &mut dyn TimelineNotifier,
    now: &TimelineStamp,
    epsilon: f64,
) -> Result<Option<EnemyId>, SpawnError> {
    let Some(wave) = waves.front_mut() else {
        return Ok(None);
    };
    let Some(head) = wave.fragments.front() else {
        // Authored empty wave: nothing to release, drop it.
        waves.pop_front();
        return Ok(None);
    };
    if !is_due(head.time, now.secs, epsilon) {
        return Ok(None);
    }

    let entity = factory.create_enemy(head, roster).inspect_err(|err| {
        warn!(name = %head.name, error = %err, "spawn failed");
    })?;

    let mut spawned = None;
    if let Some(mut active) = roster.get_mut(entity) {
        let event_id = active.event_id();
        let ActiveFragment {
            fragment,
            route,
            spawn,
        } = &mut *active;
        if let Some(spawn) = spawn.as_mut() {
            spawn.spawned_at = Some(now.secs);
            match route.front().copied() {
                Some(Waypoint::Position { x, z }) => {
                    route.pop_front();
                    field.place_unit(x, z, &mut spawn.inst);
                }
                _ => warn!(name = %fragment.name, "fragment spawned without a leading position"),
            }
            scene.attach(spawn.inst.visual);
            if let Some(event_id) = event_id {
                timeline.record_event(TimelineEventKind::EnemyCreate, &event_id, &fragment.name, now);
            }
            debug!(
                name = %fragment.name,
                id = %spawn.id,
                x = spawn.inst.position.x,
                z = spawn.inst.position.z,
                t = now.secs,
                "enemy spawned"
            );
            spawned = Some(spawn.id);
        }
    }

    wave.fragments.pop_front();
    if wave.is_empty() {
        waves.pop_front();
        info!(remaining = waves.len(), t = now.secs, "wave released");
    }

    Ok(spawned)
}
