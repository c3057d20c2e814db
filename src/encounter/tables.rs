//! Per-terrain encounter candidate lists

use ahash::AHashMap;

use crate::core::config::GENERIC_ENCOUNTER_ID;
use crate::core::types::EncounterId;
use crate::grid::cell::CellType;

/// Built-in candidates for each terrain kind
pub fn default_candidates(cell_type: CellType) -> &'static [&'static str] {
    match cell_type {
        CellType::Street => &["street_hustler", "lost_tourist", "stray_dog_chase"],
        CellType::Building => &["doorman_dispute", "elevator_outage", "wrong_floor"],
        CellType::Traffic => &["gridlock_standoff", "courier_rival", "fender_bender"],
        CellType::Construction => &["falling_debris", "foreman_detour", "sinkhole_scare"],
        CellType::Security => &["checkpoint_shakedown", "badge_inspection", "patrol_sweep"],
        CellType::Protest => &["crowd_surge", "rally_recruiter", "kettled_crossing"],
        CellType::Pickup => &["order_mixup", "impatient_vendor", "extra_parcel"],
        CellType::Shortcut => &["dead_end_alley", "rooftop_leap", "locked_gate"],
        CellType::Surveillance => &["camera_flag", "drone_tail", "facial_scan"],
        CellType::Underground => &["tunnel_dwellers", "flooded_passage", "blackout_maze"],
    }
}

/// Candidate encounter ids keyed by terrain, with a generic fallback
#[derive(Debug, Clone)]
pub struct EncounterTable {
    by_type: AHashMap<CellType, Vec<EncounterId>>,
    fallback: EncounterId,
}

impl EncounterTable {
    /// Empty table: every terrain resolves to the fallback id
    pub fn empty(fallback: impl Into<String>) -> Self {
        Self {
            by_type: AHashMap::new(),
            fallback: EncounterId::new(fallback),
        }
    }

    /// Built-in lists for all ten terrain kinds
    pub fn with_defaults(fallback: impl Into<String>) -> Self {
        let mut table = Self::empty(fallback);
        for cell_type in CellType::ALL {
            table.set_candidates(
                cell_type,
                default_candidates(cell_type)
                    .iter()
                    .map(|id| EncounterId::new(*id))
                    .collect(),
            );
        }
        table
    }

    pub fn set_candidates(&mut self, cell_type: CellType, candidates: Vec<EncounterId>) {
        self.by_type.insert(cell_type, candidates);
    }

    /// Candidates for a terrain; empty when unmapped
    pub fn candidates(&self, cell_type: CellType) -> &[EncounterId] {
        self.by_type
            .get(&cell_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn fallback(&self) -> &EncounterId {
        &self.fallback
    }
}

impl Default for EncounterTable {
    fn default() -> Self {
        Self::with_defaults(GENERIC_ENCOUNTER_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_terrain_has_defaults() {
        let table = EncounterTable::default();
        for cell_type in CellType::ALL {
            assert!(!table.candidates(cell_type).is_empty(), "{:?}", cell_type);
        }
    }

    #[test]
    fn test_default_ids_unique_across_terrain() {
        let mut seen = std::collections::HashSet::new();
        for cell_type in CellType::ALL {
            for id in default_candidates(cell_type) {
                assert!(seen.insert(*id), "duplicate encounter id {}", id);
            }
        }
    }

    #[test]
    fn test_empty_table_uses_fallback() {
        let table = EncounterTable::empty("generic");
        assert!(table.candidates(CellType::Protest).is_empty());
        assert_eq!(table.fallback().as_str(), "generic");
    }

    #[test]
    fn test_override_candidates() {
        let mut table = EncounterTable::default();
        table.set_candidates(CellType::Pickup, vec![EncounterId::new("vip_order")]);
        assert_eq!(table.candidates(CellType::Pickup), &[EncounterId::new("vip_order")]);
    }
}
