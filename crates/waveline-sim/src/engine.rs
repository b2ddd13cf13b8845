//! Game controller — the root of the wave simulation.
//!
//! `GameController` owns the wave queue, the roster and the counters, and
//! runs the spawn and movement systems in order each frame. It is driven
//! entirely from outside, one tick at a time, and never blocks.

use std::collections::VecDeque;

use hecs::Entity;
use tracing::info;

use waveline_core::errors::SpawnError;
use waveline_core::services::{FieldMap, SceneGraph, TimelineNotifier};
use waveline_core::types::{EnemyId, TimelineStamp};
use waveline_core::units::Unit;
use waveline_core::waves::{MapData, WaveInfo};

use crate::config::SimConfig;
use crate::factory::UnitFactory;
use crate::roster::Roster;
use crate::systems;
use crate::systems::snapshot::RosterSnapshot;

/// The wave controller. Owns the roster and all wave state.
pub struct GameController<S: SceneGraph, M: FieldMap> {
    config: SimConfig,
    /// Authored waves as the map declared them. Never mutated.
    map_data: MapData,
    waves: VecDeque<WaveInfo>,
    roster: Roster,
    factory: UnitFactory,
    /// Enemies still to resolve. Counts down on retirement only.
    enemy_count: u32,
    despawn_buffer: Vec<Entity>,
    scene: S,
    field: M,
}

impl<S: SceneGraph, M: FieldMap> GameController<S, M> {
    pub fn new(config: SimConfig, map_data: MapData, factory: UnitFactory, scene: S, field: M) -> Self {
        let waves = map_data.waves.iter().cloned().collect();
        let enemy_count = map_data.enemy_count;
        Self {
            config,
            map_data,
            waves,
            roster: Roster::new(),
            factory,
            enemy_count,
            despawn_buffer: Vec::new(),
            scene,
            field,
        }
    }

    /// Spawn the head fragment if it is due at `now`. At most one spawn.
    pub fn update_enemy_status(
        &mut self,
        timeline: &mut dyn TimelineNotifier,
        now: &TimelineStamp,
    ) -> Result<Option<EnemyId>, SpawnError> {
        systems::wave_spawner::run(
            &mut self.waves,
            &mut self.roster,
            &mut self.factory,
            &mut self.field,
            &mut self.scene,
            timeline,
            now,
            self.config.spawn_epsilon,
        )
    }

    /// Move every live enemy by `interval` seconds and retire the ones that
    /// ran out of path.
    pub fn update_enemy_position(
        &mut self,
        timeline: &mut dyn TimelineNotifier,
        interval: f64,
        now: &TimelineStamp,
    ) {
        let retired = systems::movement::run(
            &mut self.roster,
            &mut self.despawn_buffer,
            &mut self.scene,
            timeline,
            interval,
            now,
            self.config.cell_center_offset,
        );
        self.enemy_count = self.enemy_count.saturating_sub(retired);
    }

    /// One frame: spawn check first, then movement. A spawn failure is
    /// returned after the movement pass has still run for this frame.
    pub fn tick(
        &mut self,
        timeline: &mut dyn TimelineNotifier,
        interval: f64,
        now: &TimelineStamp,
    ) -> Result<Option<EnemyId>, SpawnError> {
        let spawned = self.update_enemy_status(timeline, now);
        self.update_enemy_position(timeline, interval, now);
        spawned
    }

    /// Dispose every live enemy and restart the map's wave timeline.
    ///
    /// The id counter is left running, so ids stay unique across resets.
    pub fn reset_game(&mut self) {
        let disposed = systems::cleanup::clear(&mut self.roster, &mut self.scene);
        self.despawn_buffer.clear();
        self.enemy_count = self.map_data.enemy_count;
        self.waves = self.map_data.waves.iter().cloned().collect();
        info!(
            disposed,
            enemy_count = self.enemy_count,
            waves = self.waves.len(),
            "game reset"
        );
    }

    /// Build an operator through the shared catalog.
    pub fn create_operator(&self, name: &str, hp: f64) -> Result<Unit, SpawnError> {
        self.factory.create_operator(name, hp)
    }

    pub fn snapshot(&self) -> RosterSnapshot {
        systems::snapshot::build_snapshot(&self.roster, &self.waves, self.enemy_count)
    }

    /// No waves pending and nobody left on the field.
    pub fn is_cleared(&self) -> bool {
        self.waves.is_empty() && self.roster.is_empty()
    }

    pub fn enemy_count(&self) -> u32 {
        self.enemy_count
    }

    pub fn next_enemy_id(&self) -> EnemyId {
        self.factory.next_enemy_id()
    }

    pub fn waves(&self) -> &VecDeque<WaveInfo> {
        &self.waves
    }

    /// Mutable access to the pending wave queue, for editors and tests.
    pub fn waves_mut(&mut self) -> &mut VecDeque<WaveInfo> {
        &mut self.waves
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn active_len(&self) -> usize {
        self.roster.len()
    }

    pub fn map_data(&self) -> &MapData {
        &self.map_data
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn field(&self) -> &M {
        &self.field
    }
}
