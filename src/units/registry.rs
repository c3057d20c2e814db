//! Unit registry - delivery units and their bound partners

use ahash::AHashMap;

use crate::core::types::UnitId;
use crate::partner::profile::PartnerTraitProfile;
use crate::units::delivery::DeliveryUnit;

/// All units on one grid, in insertion order
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    units: Vec<DeliveryUnit>,
    partners: AHashMap<UnitId, PartnerTraitProfile>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, unit: DeliveryUnit) -> UnitId {
        let id = unit.id;
        self.units.push(unit);
        id
    }

    /// Remove a unit and drop its partner binding
    pub fn remove(&mut self, id: UnitId) -> Option<DeliveryUnit> {
        let index = self.units.iter().position(|u| u.id == id)?;
        self.partners.remove(&id);
        Some(self.units.remove(index))
    }

    pub fn get(&self, id: UnitId) -> Option<&DeliveryUnit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn get_mut(&mut self, id: UnitId) -> Option<&mut DeliveryUnit> {
        self.units.iter_mut().find(|u| u.id == id)
    }

    pub fn all(&self) -> &[DeliveryUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn bind_partner(&mut self, id: UnitId, profile: PartnerTraitProfile) {
        self.partners.insert(id, profile);
    }

    pub fn partner(&self, id: UnitId) -> Option<&PartnerTraitProfile> {
        self.partners.get(&id)
    }

    /// Split borrow: mutable units alongside read-only partner bindings
    pub fn units_with_partners(
        &mut self,
    ) -> (&mut [DeliveryUnit], &AHashMap<UnitId, PartnerTraitProfile>) {
        (self.units.as_mut_slice(), &self.partners)
    }
}
