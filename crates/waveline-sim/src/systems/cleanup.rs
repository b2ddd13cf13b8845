//! Cleanup system: tears down enemies that left the field.

use hecs::Entity;
use tracing::debug;

use waveline_core::enums::TimelineEventKind;
use waveline_core::events::enemy_event_id;
use waveline_core::services::{SceneGraph, TimelineNotifier};
use waveline_core::types::TimelineStamp;

use crate::roster::Roster;

/// Retire every entity in `despawn_buffer`: detach and dispose its visual,
/// log an `enemy drop`, and take it out of the roster. Returns how many
/// live enemies were retired.
///
/// Removal and disposal happen in the same step, and an entity that is no
/// longer in the roster is skipped, so a visual is disposed at most once.
pub fn retire(
    roster: &mut Roster,
    despawn_buffer: &mut Vec<Entity>,
    scene: &mut dyn SceneGraph,
    timeline: &mut dyn TimelineNotifier,
    now: &TimelineStamp,
) -> u32 {
    let mut retired = 0;
    for entity in despawn_buffer.drain(..) {
        let Some(active) = roster.remove(entity) else {
            continue;
        };
        let Some(spawn) = active.spawn else {
            continue;
        };
        scene.detach(spawn.inst.visual);
        scene.dispose(spawn.inst.visual);
        let event_id = enemy_event_id(&active.fragment.name, spawn.id);
        timeline.record_event(TimelineEventKind::EnemyDrop, &event_id, &active.fragment.name, now);
        debug!(id = %event_id, t = now.secs, "enemy dropped");
        retired += 1;
    }
    retired
}

/// Dispose every live unit and empty the roster. No timeline events are
/// emitted. Returns how many visuals were disposed.
pub fn clear(roster: &mut Roster, scene: &mut dyn SceneGraph) -> usize {
    let mut disposed = 0;
    for entity in roster.entities() {
        if let Some(spawn) = roster.remove(entity).and_then(|active| active.spawn) {
            scene.detach(spawn.inst.visual);
            scene.dispose(spawn.inst.visual);
            disposed += 1;
        }
    }
    roster.clear();
    disposed
}
