//! Simulation constants and tuning parameters.

/// Tolerance (seconds) under which a frame timestamp sitting just below a
/// fragment's scheduled time still counts as due.
pub const SPAWN_EPSILON: f64 = 0.01;

/// Offset applied on both axes to move a grid index to its cell centre.
pub const CELL_CENTER_OFFSET: f64 = 0.5;

/// Label stamped on timeline events when the caller gives none.
pub const DEFAULT_TIMELINE_LABEL: &str = "wave";

// --- Timeline event ids ---

/// Separator between unit name and fragment id in timeline event ids.
pub const EVENT_ID_SEPARATOR: char = '-';

// --- Defaults for prototypes missing optional fields ---

/// Movement speed (cells per second) used when a prototype omits it.
pub const DEFAULT_UNIT_SPEED: f64 = 1.0;

/// Hit points used when a prototype omits them.
pub const DEFAULT_UNIT_HP: f64 = 100.0;
