//! District templates - authored terrain blueprints
//!
//! Templates are sparse: only interesting cells are authored, the rest
//! are backfilled as street when a `Grid` is built.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::error::{EngineError, Result};
use crate::grid::cell::GridCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

/// District-wide difficulty knobs
///
/// Only `base_encounter_chance` affects mechanics; the other two are read by
/// presentation code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DifficultyModifiers {
    pub base_encounter_chance: f32,
    pub surveillance_level: f32,
    pub traffic_level: f32,
}

/// Authored district blueprint used to instantiate a `Grid`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictGrid {
    pub id: String,
    pub name: String,
    pub size: GridSize,
    #[serde(default)]
    pub default_cells: Vec<GridCell>,
    #[serde(default)]
    pub special_features: Vec<String>,
    #[serde(default)]
    pub difficulty_modifiers: DifficultyModifiers,
}

impl DistrictGrid {
    /// Create an empty template (every cell will be backfilled)
    pub fn new(id: impl Into<String>, name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            size: GridSize { width, height },
            default_cells: Vec::new(),
            special_features: Vec::new(),
            difficulty_modifiers: DifficultyModifiers::default(),
        }
    }

    pub fn with_base_encounter_chance(mut self, chance: f32) -> Self {
        self.difficulty_modifiers.base_encounter_chance = chance;
        self
    }

    pub fn with_cell(mut self, cell: GridCell) -> Self {
        self.default_cells.push(cell);
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Check authored data for problems a `Grid` would silently paper over
    pub fn validate(&self) -> Result<()> {
        if self.size.width == 0 || self.size.height == 0 {
            return Err(EngineError::InvalidTemplate(format!(
                "{}: grid size {}x{} is empty",
                self.id, self.size.width, self.size.height
            )));
        }

        let base = self.difficulty_modifiers.base_encounter_chance;
        if !(0.0..=1.0).contains(&base) {
            return Err(EngineError::InvalidTemplate(format!(
                "{}: base_encounter_chance {} outside [0, 1]",
                self.id, base
            )));
        }

        let mut seen = HashSet::new();
        for cell in &self.default_cells {
            let pos = cell.position;
            if pos.x < 0
                || pos.y < 0
                || pos.x as u32 >= self.size.width
                || pos.y as u32 >= self.size.height
            {
                return Err(EngineError::InvalidTemplate(format!(
                    "{}: cell {} outside {}x{}",
                    self.id, pos, self.size.width, self.size.height
                )));
            }
            if !seen.insert(pos) {
                return Err(EngineError::InvalidTemplate(format!(
                    "{}: cell {} authored twice",
                    self.id, pos
                )));
            }
            if !(0.0..=1.0).contains(&cell.encounter_chance) {
                return Err(EngineError::InvalidTemplate(format!(
                    "{}: cell {} encounter_chance {} outside [0, 1]",
                    self.id, pos, cell.encounter_chance
                )));
            }
        }

        Ok(())
    }
}
