//! Encounter trial after a successful move
//!
//! The movement bonus divides the cell's chance: a bigger bonus shrinks the
//! probability toward zero but never removes it.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::types::EncounterId;
use crate::encounter::tables::EncounterTable;
use crate::grid::cell::GridCell;

/// Chance after the movement bonus is applied
pub fn effective_chance(encounter_chance: f32, movement_bonus: f32) -> f32 {
    encounter_chance / movement_bonus
}

/// Which encounter a triggered cell opens
pub fn select_encounter(
    cell: &GridCell,
    table: &EncounterTable,
    rng: &mut impl Rng,
) -> EncounterId {
    if let Some(id) = &cell.encounter_id {
        return id.clone();
    }

    table
        .candidates(cell.cell_type)
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| table.fallback().clone())
}

/// Single Bernoulli trial for a destination cell
pub fn roll_encounter(
    cell: &GridCell,
    movement_bonus: f32,
    table: &EncounterTable,
    rng: &mut impl Rng,
) -> Option<EncounterId> {
    let chance = effective_chance(cell.encounter_chance, movement_bonus);
    let roll: f32 = rng.gen();
    let fired = roll < chance;

    tracing::debug!(
        "Encounter roll at {}: {:.3} vs {:.3} ({})",
        cell.position,
        roll,
        chance,
        if fired { "hit" } else { "miss" }
    );

    fired.then(|| select_encounter(cell, table, rng))
}
