//! Wave controller for WAVELINE.
//!
//! Owns the hecs roster of live enemies, schedules spawns off the authored
//! wave timeline, moves units along their waypoint paths every tick, and
//! tears them down when their paths run out.

pub mod config;
pub mod engine;
pub mod factory;
pub mod roster;
pub mod scenario;
pub mod systems;

pub use waveline_core as core;
pub use config::SimConfig;
pub use engine::GameController;
pub use factory::{ConstructorRegistry, UnitFactory};
