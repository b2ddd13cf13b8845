//! Unit factory: resolves catalog prototypes and builds concrete units.
//!
//! Concrete unit types live outside this crate. They are reached through a
//! [`ConstructorRegistry`] that maps type names to constructor closures and
//! is filled in once at startup.

use std::collections::HashMap;

use hecs::Entity;
use tracing::debug;

use waveline_core::enums::UnitCategory;
use waveline_core::errors::SpawnError;
use waveline_core::types::{EnemyId, VisualHandle};
use waveline_core::units::{Prototype, ResourceCatalog, Unit};
use waveline_core::waves::Fragment;

use crate::roster::{ActiveFragment, Roster};

/// Builds an enemy from its cloned prototype.
pub type EnemyConstructor = Box<dyn Fn(&Prototype) -> Unit>;
/// Builds an operator from its prototype and the requested hit points.
pub type OperatorConstructor = Box<dyn Fn(&Prototype, f64) -> Unit>;

/// Name-keyed constructors for both unit families.
#[derive(Default)]
pub struct ConstructorRegistry {
    enemies: HashMap<String, EnemyConstructor>,
    operators: HashMap<String, OperatorConstructor>,
}

impl ConstructorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with a plain [`Unit::from_prototype`] constructor for every
    /// name in the catalog. Operators take the requested hit points.
    pub fn from_catalog(catalog: &ResourceCatalog) -> Self {
        let mut registry = Self::new();
        for name in catalog.enemy.keys() {
            let unit_name = name.clone();
            registry.register_enemy(name.clone(), move |proto| {
                Unit::from_prototype(unit_name.clone(), UnitCategory::Enemy, proto)
            });
        }
        for name in catalog.operator.keys() {
            let unit_name = name.clone();
            registry.register_operator(name.clone(), move |proto, hp| Unit {
                hp,
                ..Unit::from_prototype(unit_name.clone(), UnitCategory::Operator, proto)
            });
        }
        registry
    }

    pub fn register_enemy(
        &mut self,
        name: impl Into<String>,
        constructor: impl Fn(&Prototype) -> Unit + 'static,
    ) -> &mut Self {
        self.enemies.insert(name.into(), Box::new(constructor));
        self
    }

    pub fn register_operator(
        &mut self,
        name: impl Into<String>,
        constructor: impl Fn(&Prototype, f64) -> Unit + 'static,
    ) -> &mut Self {
        self.operators.insert(name.into(), Box::new(constructor));
        self
    }
}

/// What a caller asks [`UnitFactory::create`] to build.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitSpec {
    Enemy(Fragment),
    Operator { name: String, hp: f64 },
}

/// Result of [`UnitFactory::create`].
#[derive(Debug)]
pub enum Created {
    /// Roster entity of the newly active enemy fragment.
    Enemy(Entity),
    /// Operators are handed back and not tracked here.
    Operator(Unit),
}

pub struct UnitFactory {
    catalog: ResourceCatalog,
    constructors: ConstructorRegistry,
    next_enemy_id: u32,
    next_visual: u64,
}

impl UnitFactory {
    pub fn new(catalog: ResourceCatalog, constructors: ConstructorRegistry) -> Self {
        Self {
            catalog,
            constructors,
            next_enemy_id: 0,
            // 0 is the handle prototypes carry before they are cloned.
            next_visual: 1,
        }
    }

    /// Id the next spawned enemy will receive.
    pub fn next_enemy_id(&self) -> EnemyId {
        EnemyId(self.next_enemy_id)
    }

    /// String-keyed entry point. The category must name a known unit family
    /// and agree with the kind of `spec`.
    pub fn create(
        &mut self,
        category: &str,
        spec: UnitSpec,
        roster: &mut Roster,
    ) -> Result<Created, SpawnError> {
        let category: UnitCategory = category.parse()?;
        match (category, spec) {
            (UnitCategory::Enemy, UnitSpec::Enemy(fragment)) => {
                self.create_enemy(&fragment, roster).map(Created::Enemy)
            }
            (UnitCategory::Operator, UnitSpec::Operator { name, hp }) => {
                self.create_operator(&name, hp).map(Created::Operator)
            }
            (category, spec) => Err(SpawnError::invalid_specification(
                category,
                format!("{spec:?}"),
            )),
        }
    }

    /// Instantiate the enemy for `fragment` and enter it into the roster.
    ///
    /// On error nothing is touched: no id is consumed and the roster is
    /// unchanged.
    pub fn create_enemy(
        &mut self,
        fragment: &Fragment,
        roster: &mut Roster,
    ) -> Result<Entity, SpawnError> {
        let prototype = self.resolve(UnitCategory::Enemy, &fragment.name)?;
        let constructor = self.constructors.enemies.get(&fragment.name).ok_or_else(|| {
            SpawnError::invalid_specification(
                UnitCategory::Enemy,
                format!("no enemy constructor for {:?}", fragment),
            )
        })?;

        let visual = VisualHandle(self.next_visual);
        let inst = constructor(&prototype.instantiate(visual));
        self.next_visual += 1;

        let id = EnemyId(self.next_enemy_id);
        self.next_enemy_id += 1;

        debug!(name = %fragment.name, %id, "enemy instantiated");
        Ok(roster.insert(ActiveFragment::spawned(fragment.clone(), id, inst)))
    }

    /// Build an operator. Operators are not tracked by the roster.
    pub fn create_operator(&self, name: &str, hp: f64) -> Result<Unit, SpawnError> {
        let prototype = self.resolve(UnitCategory::Operator, name)?;
        let constructor = self.constructors.operators.get(name).ok_or_else(|| {
            SpawnError::invalid_specification(
                UnitCategory::Operator,
                format!("no operator constructor for {name:?} (hp {hp})"),
            )
        })?;
        Ok(constructor(prototype, hp))
    }

    fn resolve(&self, category: UnitCategory, name: &str) -> Result<&Prototype, SpawnError> {
        let entry = self.catalog.entry(category, name);
        match entry.and_then(|e| e.entity.as_ref()) {
            Some(prototype) => Ok(prototype),
            None => Err(SpawnError::resource_unavailable(
                category,
                name,
                entry.map_or_else(|| String::from("none"), |e| format!("{e:?}")),
            )),
        }
    }
}
