//! Systems that operate on the roster each tick.
//!
//! Systems are free functions over the roster and the services they need.
//! They do not own state; counters stay with the controller.

pub mod cleanup;
pub mod movement;
pub mod snapshot;
pub mod wave_spawner;
