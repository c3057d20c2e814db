//! Terrain kinds and grid cells

use serde::{Deserialize, Serialize};

use crate::core::types::{EncounterId, GridPos};

/// Terrain kind of a delivery grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CellType {
    #[default]
    Street,
    Building,
    Traffic,
    Construction,
    Security,
    Protest,
    Pickup,
    Shortcut,
    Surveillance,
    Underground,
}

impl CellType {
    pub const ALL: [CellType; 10] = [
        CellType::Street,
        CellType::Building,
        CellType::Traffic,
        CellType::Construction,
        CellType::Security,
        CellType::Protest,
        CellType::Pickup,
        CellType::Shortcut,
        CellType::Surveillance,
        CellType::Underground,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CellType::Street => "street",
            CellType::Building => "building",
            CellType::Traffic => "traffic",
            CellType::Construction => "construction",
            CellType::Security => "security",
            CellType::Protest => "protest",
            CellType::Pickup => "pickup",
            CellType::Shortcut => "shortcut",
            CellType::Surveillance => "surveillance",
            CellType::Underground => "underground",
        }
    }
}

fn default_movement_cost() -> u32 {
    1
}

/// A single cell on the delivery grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub position: GridPos,
    #[serde(rename = "type", default)]
    pub cell_type: CellType,
    /// Probability (0.0 to 1.0) that a move ending here triggers an encounter
    #[serde(default)]
    pub encounter_chance: f32,
    /// Fixed encounter; overrides the terrain candidate table when set
    #[serde(default)]
    pub encounter_id: Option<EncounterId>,
    /// AP per unit of distance when this cell is the destination
    #[serde(default = "default_movement_cost")]
    pub movement_cost: u32,
    #[serde(default)]
    pub blocks_movement: bool,
    #[serde(default)]
    pub district: String,
}

impl GridCell {
    pub fn new(position: GridPos, cell_type: CellType) -> Self {
        Self {
            position,
            cell_type,
            encounter_chance: 0.0,
            encounter_id: None,
            movement_cost: 1,
            blocks_movement: false,
            district: String::new(),
        }
    }

    /// Backfill cell for unauthored positions
    pub fn street(position: GridPos, encounter_chance: f32, district: &str) -> Self {
        Self {
            encounter_chance,
            district: district.to_string(),
            ..Self::new(position, CellType::Street)
        }
    }

    pub fn with_encounter_chance(mut self, chance: f32) -> Self {
        self.encounter_chance = chance;
        self
    }

    pub fn with_encounter(mut self, id: impl Into<String>) -> Self {
        self.encounter_id = Some(EncounterId::new(id));
        self
    }

    pub fn with_movement_cost(mut self, cost: u32) -> Self {
        self.movement_cost = cost;
        self
    }

    pub fn blocking(mut self) -> Self {
        self.blocks_movement = true;
        self
    }
}
