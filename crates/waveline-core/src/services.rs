//! Seams to the collaborators this core drives but does not own:
//! the scene graph, the field map, and the timeline notifier.
//!
//! Each trait comes with a small in-memory implementation. The headless
//! runner and the tests use these; a renderer plugs in its own.

use std::collections::BTreeSet;

use crate::constants::CELL_CENTER_OFFSET;
use crate::enums::TimelineEventKind;
use crate::events::TimelineEvent;
use crate::types::{Position, TimelineStamp, VisualHandle};
use crate::units::Unit;

/// Render-side lifecycle of a unit's visual.
pub trait SceneGraph {
    fn attach(&mut self, visual: VisualHandle);
    fn detach(&mut self, visual: VisualHandle);
    fn dispose(&mut self, visual: VisualHandle);
}

/// Grid placement of units on the field.
pub trait FieldMap {
    fn place_unit(&mut self, x: f64, z: f64, unit: &mut Unit);
}

/// Receiver of discrete named events on the simulation timeline.
pub trait TimelineNotifier {
    fn record_event(&mut self, kind: TimelineEventKind, id: &str, name: &str, time: &TimelineStamp);
}

/// Scene graph that only tracks which visuals are live.
#[derive(Debug, Default)]
pub struct SceneRegistry {
    attached: BTreeSet<VisualHandle>,
    disposed: BTreeSet<VisualHandle>,
    /// Dispose calls on a visual that was already disposed.
    pub double_disposes: u32,
}

impl SceneRegistry {
    pub fn is_attached(&self, visual: VisualHandle) -> bool {
        self.attached.contains(&visual)
    }

    pub fn is_disposed(&self, visual: VisualHandle) -> bool {
        self.disposed.contains(&visual)
    }

    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    pub fn disposed_count(&self) -> usize {
        self.disposed.len()
    }
}

impl SceneGraph for SceneRegistry {
    fn attach(&mut self, visual: VisualHandle) {
        self.attached.insert(visual);
    }

    fn detach(&mut self, visual: VisualHandle) {
        self.attached.remove(&visual);
    }

    fn dispose(&mut self, visual: VisualHandle) {
        if !self.disposed.insert(visual) {
            self.double_disposes += 1;
        }
    }
}

/// Field map that centres units on their cell and remembers every placement.
#[derive(Debug)]
pub struct GridMap {
    /// Added to both axes of a cell corner. Must match the offset movement
    /// targets use, or units drift off their lane.
    pub offset: f64,
    pub placements: Vec<(f64, f64, String)>,
}

impl GridMap {
    pub fn with_offset(offset: f64) -> Self {
        Self {
            offset,
            placements: Vec::new(),
        }
    }
}

impl Default for GridMap {
    fn default() -> Self {
        Self::with_offset(CELL_CENTER_OFFSET)
    }
}

impl FieldMap for GridMap {
    fn place_unit(&mut self, x: f64, z: f64, unit: &mut Unit) {
        unit.position = Position::new(x + self.offset, z + self.offset);
        self.placements.push((x, z, unit.name.clone()));
    }
}

/// Notifier that appends every event to a list.
#[derive(Debug, Clone, Default)]
pub struct TimelineLog {
    pub events: Vec<TimelineEvent>,
}

impl TimelineLog {
    pub fn of_kind(&self, kind: TimelineEventKind) -> impl Iterator<Item = &TimelineEvent> {
        self.events.iter().filter(move |e| e.kind == kind)
    }

    pub fn ids(&self, kind: TimelineEventKind) -> Vec<&str> {
        self.of_kind(kind).map(|e| e.id.as_str()).collect()
    }
}

impl TimelineNotifier for TimelineLog {
    fn record_event(&mut self, kind: TimelineEventKind, id: &str, name: &str, time: &TimelineStamp) {
        self.events.push(TimelineEvent {
            kind,
            id: id.to_string(),
            name: name.to_string(),
            time: time.clone(),
        });
    }
}
