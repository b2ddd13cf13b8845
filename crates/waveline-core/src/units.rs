//! Live units and the catalog prototypes they are built from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_UNIT_HP, DEFAULT_UNIT_SPEED};
use crate::enums::UnitCategory;
use crate::types::{Position, VisualHandle};

/// Catalog entity a unit is instantiated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prototype {
    /// Mesh/asset key understood by the scene graph.
    pub model: String,
    /// Cells per second.
    #[serde(default = "default_speed")]
    pub speed: f64,
    #[serde(default = "default_hp")]
    pub hp: f64,
    /// Render resource backing this entity. Enemy clones get a fresh one.
    #[serde(default)]
    pub visual: VisualHandle,
}

fn default_speed() -> f64 {
    DEFAULT_UNIT_SPEED
}

fn default_hp() -> f64 {
    DEFAULT_UNIT_HP
}

impl Prototype {
    pub fn new(model: impl Into<String>, speed: f64) -> Self {
        Self {
            model: model.into(),
            speed,
            hp: DEFAULT_UNIT_HP,
            visual: VisualHandle::default(),
        }
    }

    /// Clone this prototype onto a new render resource.
    pub fn instantiate(&self, visual: VisualHandle) -> Self {
        Self {
            visual,
            ..self.clone()
        }
    }
}

/// One catalog slot. `entity` is `None` when the asset failed to load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub entity: Option<Prototype>,
}

/// Resource catalog shared by enemies and operators:
/// category → name → entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceCatalog {
    #[serde(default)]
    pub enemy: BTreeMap<String, CatalogEntry>,
    #[serde(default)]
    pub operator: BTreeMap<String, CatalogEntry>,
}

impl ResourceCatalog {
    pub fn insert(&mut self, category: UnitCategory, name: impl Into<String>, prototype: Prototype) {
        self.entries_mut(category).insert(
            name.into(),
            CatalogEntry {
                entity: Some(prototype),
            },
        );
    }

    pub fn entry(&self, category: UnitCategory, name: &str) -> Option<&CatalogEntry> {
        self.entries(category).get(name)
    }

    pub fn entries(&self, category: UnitCategory) -> &BTreeMap<String, CatalogEntry> {
        match category {
            UnitCategory::Enemy => &self.enemy,
            UnitCategory::Operator => &self.operator,
        }
    }

    fn entries_mut(&mut self, category: UnitCategory) -> &mut BTreeMap<String, CatalogEntry> {
        match category {
            UnitCategory::Enemy => &mut self.enemy,
            UnitCategory::Operator => &mut self.operator,
        }
    }
}

/// A live simulation entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub name: String,
    pub category: UnitCategory,
    pub position: Position,
    /// Facing angle in radians around the vertical axis.
    pub rotation: f64,
    /// Cells per second.
    pub speed: f64,
    pub hp: f64,
    pub visual: VisualHandle,
}

impl Unit {
    /// Build a unit that takes every stat straight from its prototype.
    pub fn from_prototype(name: impl Into<String>, category: UnitCategory, prototype: &Prototype) -> Self {
        Self {
            name: name.into(),
            category,
            position: Position::default(),
            rotation: 0.0,
            speed: prototype.speed,
            hp: prototype.hp,
            visual: prototype.visual,
        }
    }
}
