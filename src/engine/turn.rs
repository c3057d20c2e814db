//! Turn controller - round boundaries, AP budgets, package clocks
//!
//! `reset_turn` is the only way a unit gets to move again. It must run once
//! per round boundary, never per unit action.

use crate::core::error::{EngineError, Result};
use crate::core::types::UnitId;
use crate::engine::DeliveryEngine;
use crate::partner::bonus::calculate_action_points;
use crate::partner::profile::PartnerTraitProfile;
use crate::units::delivery::DeliveryUnit;

impl DeliveryEngine {
    /// Per-round AP budget for a partner under this engine's base
    pub fn calculate_action_points(&self, partner: Option<&PartnerTraitProfile>) -> u32 {
        calculate_action_points(partner, self.config.base_action_points)
    }

    /// Bind a partner and overwrite the unit's AP with the partner's budget
    pub fn set_partner_for_unit(
        &mut self,
        unit_id: UnitId,
        partner: PartnerTraitProfile,
    ) -> Result<u32> {
        let action_points = self.calculate_action_points(Some(&partner));
        let unit = self
            .units
            .get_mut(unit_id)
            .ok_or(EngineError::UnitNotFound(unit_id))?;
        unit.action_points = action_points;

        tracing::debug!(
            "Unit {} bound to partner {} ({} AP)",
            unit_id,
            partner.partner_id.0,
            action_points
        );
        self.units.bind_partner(unit_id, partner);
        Ok(action_points)
    }

    /// Advance to the next round for every unit at once
    pub fn reset_turn(&mut self) {
        let base = self.config.base_action_points;
        let decay = self.config.package_timer_decay;
        let (units, partners) = self.units.units_with_partners();

        for unit in units.iter_mut() {
            unit.action_points = calculate_action_points(partners.get(&unit.id), base);
            unit.has_acted = false;
            unit.package.time_remaining = unit.package.time_remaining.saturating_sub(decay);
        }

        self.round += 1;
        tracing::info!(
            "Round {} begins for {} units on {}",
            self.round,
            self.units.len(),
            self.grid.template_id()
        );
    }

    /// Is the unit standing on its package's destination?
    pub fn check_delivery_complete(&self, unit_id: UnitId) -> bool {
        self.units
            .get(unit_id)
            .is_some_and(DeliveryUnit::at_destination)
    }

    /// Take a unit off the grid once its package has arrived
    pub fn complete_delivery(&mut self, unit_id: UnitId) -> Option<DeliveryUnit> {
        if !self.check_delivery_complete(unit_id) {
            return None;
        }

        let unit = self.units.remove(unit_id)?;
        tracing::info!(
            "Unit {} delivered {} with {} minutes left",
            unit_id,
            unit.package.id,
            unit.package.time_remaining
        );
        Some(unit)
    }

    /// Units whose delivery clock has run out
    pub fn overdue_units(&self) -> Vec<UnitId> {
        self.units
            .all()
            .iter()
            .filter(|u| u.package.is_overdue())
            .map(|u| u.id)
            .collect()
    }
}
