//! Scenario files: map waves, resource catalog and optional config in one
//! JSON document, plus a small built-in demo.

use std::path::Path;

use serde::{Deserialize, Serialize};

use waveline_core::enums::UnitCategory;
use waveline_core::errors::ScenarioError;
use waveline_core::services::{FieldMap, GridMap, SceneGraph};
use waveline_core::units::{Prototype, ResourceCatalog};
use waveline_core::waves::{Fragment, MapData, WaveInfo, Waypoint};

use crate::config::SimConfig;
use crate::engine::GameController;
use crate::factory::{ConstructorRegistry, UnitFactory};

/// Everything needed to start a controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFile {
    #[serde(default)]
    pub config: SimConfig,
    pub map: MapData,
    pub catalog: ResourceCatalog,
}

impl ScenarioFile {
    /// Grid map centring units with this scenario's cell offset.
    pub fn grid_map(&self) -> GridMap {
        GridMap::with_offset(self.config.cell_center_offset)
    }

    /// Controller using a plain constructor for every catalog name.
    pub fn into_controller<S: SceneGraph, M: FieldMap>(self, scene: S, field: M) -> GameController<S, M> {
        let constructors = ConstructorRegistry::from_catalog(&self.catalog);
        self.into_controller_with(constructors, scene, field)
    }

    pub fn into_controller_with<S: SceneGraph, M: FieldMap>(
        self,
        constructors: ConstructorRegistry,
        scene: S,
        field: M,
    ) -> GameController<S, M> {
        let factory = UnitFactory::new(self.catalog, constructors);
        GameController::new(self.config, self.map, factory, scene, field)
    }
}

/// Parse and validate a scenario document.
pub fn parse_scenario(json: &str) -> Result<ScenarioFile, ScenarioError> {
    let scenario: ScenarioFile = serde_json::from_str(json)?;
    scenario.map.validate()?;
    Ok(scenario)
}

/// Load a scenario from disk.
pub fn load_scenario(path: &Path) -> Result<ScenarioFile, ScenarioError> {
    let data = std::fs::read_to_string(path)?;
    parse_scenario(&data)
}

/// Demo: "Two Lanes"
/// Wave 1: two Slimes along the top lane, 3s apart.
/// Wave 2: a Bat that stops for 2s mid-route, then a Slime down the side.
pub fn demo() -> ScenarioFile {
    let top_lane = vec![
        Waypoint::at(0.0, 0.0),
        Waypoint::at(4.0, 0.0),
        Waypoint::at(4.0, 3.0),
        Waypoint::at(8.0, 3.0),
    ];
    let side_lane = vec![
        Waypoint::at(0.0, 6.0),
        Waypoint::at(3.0, 6.0),
        Waypoint::pause(2.0),
        Waypoint::at(8.0, 3.0),
    ];

    let map = MapData::from_waves(vec![
        WaveInfo::new([
            Fragment::new(0.0, "Slime", top_lane.clone()),
            Fragment::new(3.0, "Slime", top_lane),
        ]),
        WaveInfo::new([
            Fragment::new(8.0, "Bat", side_lane.clone()),
            Fragment::new(10.0, "Slime", side_lane),
        ]),
    ]);

    let mut catalog = ResourceCatalog::default();
    catalog.insert(UnitCategory::Enemy, "Slime", Prototype::new("enemy/slime", 1.0));
    catalog.insert(UnitCategory::Enemy, "Bat", Prototype::new("enemy/bat", 2.0));
    catalog.insert(UnitCategory::Operator, "Guard", Prototype::new("operator/guard", 0.0));

    ScenarioFile {
        config: SimConfig::default(),
        map,
        catalog,
    }
}
