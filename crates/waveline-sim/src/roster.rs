//! Active roster: the live enemy fragments currently on the field.
//!
//! Each roster entity carries a single [`ActiveFragment`]. Membership in the
//! world is the only source of truth for whether an enemy is alive.

use std::collections::VecDeque;

use hecs::{Entity, World};

use waveline_core::events::enemy_event_id;
use waveline_core::types::EnemyId;
use waveline_core::units::Unit;
use waveline_core::waves::{Fragment, Waypoint};

/// Live state attached to a fragment when it spawns. `id` and `inst` are set
/// once and never replaced.
#[derive(Debug, Clone)]
pub struct SpawnState {
    pub id: EnemyId,
    pub inst: Unit,
    /// Seconds left on the pause node at the head of the route, if one is
    /// being served.
    pub pause_remaining: Option<f64>,
    /// Timeline seconds of the frame that released this fragment. Taken by
    /// the first movement pass after the release.
    pub spawned_at: Option<f64>,
}

/// An authored fragment plus everything that changes once it is live.
#[derive(Debug, Clone)]
pub struct ActiveFragment {
    /// Authored record, untouched after spawn.
    pub fragment: Fragment,
    /// Waypoints still ahead of the unit.
    pub route: VecDeque<Waypoint>,
    pub spawn: Option<SpawnState>,
}

impl ActiveFragment {
    pub fn new(fragment: Fragment) -> Self {
        let route = fragment.path.iter().copied().collect();
        Self {
            fragment,
            route,
            spawn: None,
        }
    }

    pub fn spawned(fragment: Fragment, id: EnemyId, inst: Unit) -> Self {
        Self {
            spawn: Some(SpawnState {
                id,
                inst,
                pause_remaining: None,
                spawned_at: None,
            }),
            ..Self::new(fragment)
        }
    }

    pub fn id(&self) -> Option<EnemyId> {
        self.spawn.as_ref().map(|s| s.id)
    }

    pub fn name(&self) -> &str {
        &self.fragment.name
    }

    /// Timeline id (`"<name>-<id>"`), once spawned.
    pub fn event_id(&self) -> Option<String> {
        self.id().map(|id| enemy_event_id(&self.fragment.name, id))
    }
}

/// hecs-backed set of active fragments.
#[derive(Default)]
pub struct Roster {
    world: World,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, active: ActiveFragment) -> Entity {
        self.world.spawn((active,))
    }

    pub fn get(&self, entity: Entity) -> Option<hecs::Ref<'_, ActiveFragment>> {
        self.world.get::<&ActiveFragment>(entity).ok()
    }

    pub fn get_mut(&mut self, entity: Entity) -> Option<hecs::RefMut<'_, ActiveFragment>> {
        self.world.get::<&mut ActiveFragment>(entity).ok()
    }

    /// Take a fragment out of the set. Returns `None` if it was already gone,
    /// so a second removal can never reach the scene graph again.
    pub fn remove(&mut self, entity: Entity) -> Option<ActiveFragment> {
        let active = self.world.remove_one::<ActiveFragment>(entity).ok()?;
        let despawned = self.world.despawn(entity);
        debug_assert!(despawned.is_ok(), "entity {entity:?} vanished between remove and despawn");
        Some(active)
    }

    pub fn find(&self, id: EnemyId) -> Option<Entity> {
        self.world
            .query::<&ActiveFragment>()
            .iter()
            .find(|(_, active)| active.id() == Some(id))
            .map(|(entity, _)| entity)
    }

    pub fn contains(&self, id: EnemyId) -> bool {
        self.find(id).is_some()
    }

    pub fn entities(&self) -> Vec<Entity> {
        self.world.iter().map(|entity_ref| entity_ref.entity()).collect()
    }

    pub fn len(&self) -> usize {
        self.world.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.world.is_empty()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub(crate) fn clear(&mut self) {
        self.world.clear();
    }
}
