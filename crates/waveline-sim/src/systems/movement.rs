//! Kinematic integration system.
//!
//! Moves every live enemy toward the waypoint at the head of its route,
//! serves scripted pauses, and hands units whose route has run out to
//! [`cleanup::retire`](super::cleanup::retire).

use std::collections::VecDeque;
use std::f64::consts::{FRAC_PI_2, PI};

use glam::DVec2;
use hecs::Entity;

use waveline_core::services::{SceneGraph, TimelineNotifier};
use waveline_core::types::{Position, TimelineStamp};
use waveline_core::units::Unit;
use waveline_core::waves::Waypoint;

use crate::roster::{ActiveFragment, Roster, SpawnState};
use crate::systems::cleanup;

/// Velocity and facing for a unit heading from `from` to `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heading {
    pub velocity: DVec2,
    /// `None` when already on the target; facing is left alone then.
    pub rotation: Option<f64>,
}

fn axis_sign(d: f64) -> f64 {
    if d > 0.0 {
        1.0
    } else if d < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Split `speed` into x/z components along the line to `target`.
///
/// Uses the slope `dz/dx` of that line. Facing is `π − atan(slope)`, which
/// does not distinguish travel toward −x from travel toward +x.
pub fn heading_toward(from: Position, target: Position, speed: f64) -> Heading {
    let delta = target.to_dvec2() - from.to_dvec2();

    // Subnormal dx would blow the slope up to inf and the z speed to NaN.
    if delta.x.abs() < f64::EPSILON {
        let dir = axis_sign(delta.y);
        return Heading {
            velocity: DVec2::new(0.0, speed * dir),
            rotation: (dir != 0.0).then(|| PI - dir * FRAC_PI_2),
        };
    }

    let slope = delta.y / delta.x;
    let vx = speed / (1.0 + slope * slope).sqrt();
    let vz = (slope * vx).abs();
    Heading {
        velocity: DVec2::new(vx * axis_sign(delta.x), vz * axis_sign(delta.y)),
        rotation: Some(PI - slope.atan()),
    }
}

/// Turn `unit` toward `target` without moving it.
pub fn face_toward(unit: &mut Unit, target: Position) {
    if let Some(rotation) = heading_toward(unit.position, target, unit.speed).rotation {
        unit.rotation = rotation;
    }
}

/// Advance `unit` one step toward `target`. Returns true when the step
/// covers the remaining distance on both axes. The step is not clamped, so
/// the unit may end up slightly past the target.
pub fn step_toward(unit: &mut Unit, target: Position, interval: f64) -> bool {
    let heading = heading_toward(unit.position, target, unit.speed);
    let remaining = target.to_dvec2() - unit.position.to_dvec2();
    let step = heading.velocity * interval;

    let arrived = remaining.x.abs() <= step.x.abs() && remaining.y.abs() <= step.y.abs();

    unit.position = Position::from(unit.position.to_dvec2() + step);
    if let Some(rotation) = heading.rotation {
        unit.rotation = rotation;
    }
    arrived
}

/// Serve the pause node at the head of `route`.
///
/// The tick that discovers the pause is charged straight away. Later ticks
/// count down and pop the node once nothing is left.
fn serve_pause(route: &mut VecDeque<Waypoint>, spawn: &mut SpawnState, pause: f64, interval: f64) {
    match spawn.pause_remaining {
        None => spawn.pause_remaining = Some(pause - interval),
        Some(remaining) => {
            let remaining = remaining - interval;
            if remaining <= 0.0 {
                route.pop_front();
                spawn.pause_remaining = None;
            } else {
                spawn.pause_remaining = Some(remaining);
            }
        }
    }
}

/// Integrate all live enemies by `interval` seconds and retire the ones
/// whose route is empty. Returns how many were retired.
///
/// Exhausted entities are collected in `despawn_buffer` during the query
/// and removed after it, so the pass never visits a member twice or skips one.
pub fn run(
    roster: &mut Roster,
    despawn_buffer: &mut Vec<Entity>,
    scene: &mut dyn SceneGraph,
    timeline: &mut dyn TimelineNotifier,
    interval: f64,
    now: &TimelineStamp,
    cell_offset: f64,
) -> u32 {
    despawn_buffer.clear();

    for (entity, active) in roster.world_mut().query_mut::<&mut ActiveFragment>() {
        let ActiveFragment { route, spawn, .. } = active;
        let Some(spawn) = spawn.as_mut() else {
            continue;
        };
        // Released this frame: placed already, so it only turns to face its
        // next waypoint. The marker is spent on the first pass either way.
        if spawn.spawned_at.take() == Some(now.secs) {
            if let Some(Waypoint::Position { x, z }) = route.front().copied() {
                face_toward(&mut spawn.inst, Position::new(x + cell_offset, z + cell_offset));
            }
            continue;
        }

        match route.front().copied() {
            None => despawn_buffer.push(entity),
            Some(Waypoint::Pause { pause }) => serve_pause(route, spawn, pause, interval),
            Some(Waypoint::Position { x, z }) => {
                let target = Position::new(x + cell_offset, z + cell_offset);
                if step_toward(&mut spawn.inst, target, interval) {
                    route.pop_front();
                }
            }
        }
    }

    cleanup::retire(roster, despawn_buffer, scene, timeline, now)
}
