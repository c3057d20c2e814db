//! Delivery engine - one grid, its units, and the rules that move them
//!
//! The engine owns all mutable state for a district visit. It is driven by a
//! single game session through `&mut self`; there is no shared instance.

pub mod turn;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::EngineConfig;
use crate::core::error::{EngineError, MoveError, Result};
use crate::core::types::{GridPos, PartnerId, Round, UnitId};
use crate::encounter::resolver::roll_encounter;
use crate::encounter::tables::EncounterTable;
use crate::grid::catalog::Grid;
use crate::grid::cell::GridCell;
use crate::movement::outcome::MoveOutcome;
use crate::movement::validator::{apply_move, valid_moves, validate_move};
use crate::partner::bonus::{trait_bonus, Situation};
use crate::units::delivery::{DeliveryUnit, Package};
use crate::units::registry::UnitRegistry;

#[derive(Debug)]
pub struct DeliveryEngine {
    grid: Grid,
    units: UnitRegistry,
    encounters: EncounterTable,
    config: EngineConfig,
    rng: ChaCha8Rng,
    round: Round,
}

impl DeliveryEngine {
    /// Create an engine; the RNG is seeded from `config.seed` or from entropy
    pub fn new(grid: Grid, config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let encounters = EncounterTable::with_defaults(config.generic_encounter_id.clone());

        Self {
            grid,
            units: UnitRegistry::new(),
            encounters,
            config,
            rng,
            round: 0,
        }
    }

    /// Deterministic engine with default config
    pub fn with_seed(grid: Grid, seed: u64) -> Self {
        Self::new(
            grid,
            EngineConfig {
                seed: Some(seed),
                ..EngineConfig::default()
            },
        )
    }

    /// Replace the encounter candidate lists
    pub fn set_encounter_table(&mut self, table: EncounterTable) {
        self.encounters = table;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn round(&self) -> Round {
        self.round
    }

    pub fn get_cell_at(&self, pos: GridPos) -> Option<&GridCell> {
        self.grid.get_cell_at(pos)
    }

    // === UNIT REGISTRY ===

    /// Put a partner's unit on the grid with the base AP budget
    pub fn add_unit(
        &mut self,
        partner_id: PartnerId,
        position: GridPos,
        package: Package,
    ) -> Result<UnitId> {
        if !self.grid.in_bounds(position) {
            return Err(EngineError::OutOfBounds(position));
        }

        let unit = DeliveryUnit::new(
            partner_id,
            position,
            package,
            self.config.base_action_points,
        );
        tracing::debug!(
            "Unit {} for partner {} placed at {}",
            unit.id,
            unit.partner_id.0,
            position
        );
        Ok(self.units.insert(unit))
    }

    pub fn remove_unit(&mut self, unit_id: UnitId) -> Option<DeliveryUnit> {
        self.units.remove(unit_id)
    }

    pub fn get_unit(&self, unit_id: UnitId) -> Option<&DeliveryUnit> {
        self.units.get(unit_id)
    }

    pub fn get_all_units(&self) -> &[DeliveryUnit] {
        self.units.all()
    }

    // === TRAIT BONUSES ===

    /// Situational multiplier from the unit's bound partner (1.0 if none)
    pub fn get_trait_bonus(&self, unit_id: UnitId, situation: Situation) -> f32 {
        trait_bonus(self.units.partner(unit_id), situation)
    }

    // === MOVEMENT ===

    /// Destinations for the renderer's highlight overlay
    pub fn get_valid_moves(&self, unit_id: UnitId) -> Vec<GridPos> {
        self.units
            .get(unit_id)
            .map(|unit| valid_moves(&self.grid, unit))
            .unwrap_or_default()
    }

    /// Move a unit and roll for an encounter at the destination
    ///
    /// Every check runs before anything is written, so a rejected move leaves
    /// the unit exactly as it was.
    pub fn move_unit(
        &mut self,
        unit_id: UnitId,
        new_position: GridPos,
    ) -> std::result::Result<MoveOutcome, MoveError> {
        let unit = self.units.get(unit_id).ok_or(MoveError::UnitNotFound)?;
        let cost = validate_move(&self.grid, unit, new_position)?;
        let from = unit.position;

        let movement_bonus = self.get_trait_bonus(unit_id, Situation::Movement);
        let unit = self.units.get_mut(unit_id).ok_or(MoveError::UnitNotFound)?;
        apply_move(unit, new_position, cost);
        tracing::debug!(
            "Unit {} moved {} -> {} for {} AP ({} left)",
            unit_id,
            from,
            new_position,
            cost,
            unit.action_points
        );

        let encounter = self
            .grid
            .get_cell_at(new_position)
            .and_then(|cell| {
                roll_encounter(cell, movement_bonus, &self.encounters, &mut self.rng)
            });
        if let Some(id) = &encounter {
            tracing::info!("Unit {} triggered encounter {} at {}", unit_id, id, new_position);
        }

        Ok(MoveOutcome { cost, encounter })
    }
}
