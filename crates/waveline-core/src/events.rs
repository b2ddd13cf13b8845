//! Events emitted by the simulation for the timeline notifier.

use serde::{Deserialize, Serialize};

use crate::constants::EVENT_ID_SEPARATOR;
use crate::enums::TimelineEventKind;
use crate::types::{EnemyId, TimelineStamp};

/// A discrete event as recorded on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub kind: TimelineEventKind,
    /// `"<name>-<id>"`.
    pub id: String,
    pub name: String,
    pub time: TimelineStamp,
}

/// Timeline id for a spawned enemy, e.g. `Slime-0`.
pub fn enemy_event_id(name: &str, id: EnemyId) -> String {
    format!("{name}{EVENT_ID_SEPARATOR}{id}")
}
