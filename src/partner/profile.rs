//! Partner trait profiles (read-only view of the progression store)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::types::PartnerId;

/// Character traits the delivery engine knows how to reward
///
/// Profiles come from the progression store and may name traits this engine
/// has no rule for; those read as `Other` and earn nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterTrait {
    EnhancedSenses,
    PatternRecognition,
    AttentionToDetail,
    Hyperfocus,
    RoutineMastery,
    #[serde(other)]
    Other,
}

/// Mastery tiers as stored in the mastery map
pub mod mastery {
    pub const BRONZE: u8 = 0;
    pub const SILVER: u8 = 1;
    pub const GOLD: u8 = 2;
}

/// A partner's traits and per-trait mastery level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerTraitProfile {
    pub partner_id: PartnerId,
    #[serde(default)]
    pub primary_trait: Option<CharacterTrait>,
    #[serde(default)]
    pub secondary_trait: Option<CharacterTrait>,
    #[serde(default)]
    pub tertiary_trait: Option<CharacterTrait>,
    #[serde(default)]
    pub mastery: HashMap<CharacterTrait, u8>,
}

impl PartnerTraitProfile {
    pub fn new(partner_id: PartnerId) -> Self {
        Self {
            partner_id,
            primary_trait: None,
            secondary_trait: None,
            tertiary_trait: None,
            mastery: HashMap::new(),
        }
    }

    pub fn with_primary(mut self, trait_id: CharacterTrait, level: u8) -> Self {
        self.primary_trait = Some(trait_id);
        self.mastery.insert(trait_id, level);
        self
    }

    pub fn with_secondary(mut self, trait_id: CharacterTrait, level: u8) -> Self {
        self.secondary_trait = Some(trait_id);
        self.mastery.insert(trait_id, level);
        self
    }

    pub fn with_tertiary(mut self, trait_id: CharacterTrait, level: u8) -> Self {
        self.tertiary_trait = Some(trait_id);
        self.mastery.insert(trait_id, level);
        self
    }

    /// Is the trait in one of the three trait slots?
    pub fn has_trait(&self, trait_id: CharacterTrait) -> bool {
        [self.primary_trait, self.secondary_trait, self.tertiary_trait]
            .iter()
            .any(|slot| *slot == Some(trait_id))
    }

    /// Mastery level for a trait (bronze when unrecorded)
    pub fn mastery_of(&self, trait_id: CharacterTrait) -> u8 {
        self.mastery
            .get(&trait_id)
            .copied()
            .unwrap_or(mastery::BRONZE)
    }

    /// Mastery level, but only for traits the partner actually carries
    pub fn slotted_mastery(&self, trait_id: CharacterTrait) -> Option<u8> {
        self.has_trait(trait_id).then(|| self.mastery_of(trait_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_trait_checks_all_slots() {
        let profile = PartnerTraitProfile::new(PartnerId::new("mika"))
            .with_tertiary(CharacterTrait::Hyperfocus, mastery::SILVER);
        assert!(profile.has_trait(CharacterTrait::Hyperfocus));
        assert!(!profile.has_trait(CharacterTrait::RoutineMastery));
    }

    #[test]
    fn test_mastery_without_slot_is_ignored() {
        let mut profile = PartnerTraitProfile::new(PartnerId::new("mika"));
        profile.mastery.insert(CharacterTrait::EnhancedSenses, mastery::GOLD);
        assert_eq!(profile.mastery_of(CharacterTrait::EnhancedSenses), mastery::GOLD);
        assert_eq!(profile.slotted_mastery(CharacterTrait::EnhancedSenses), None);
    }

    #[test]
    fn test_missing_mastery_defaults_to_bronze() {
        let mut profile = PartnerTraitProfile::new(PartnerId::new("mika"));
        profile.primary_trait = Some(CharacterTrait::PatternRecognition);
        assert_eq!(
            profile.slotted_mastery(CharacterTrait::PatternRecognition),
            Some(mastery::BRONZE)
        );
    }

    #[test]
    fn test_profile_from_json() {
        let json = r#"{
            "partner_id": "rook",
            "primary_trait": "attention_to_detail",
            "mastery": {"attention_to_detail": 2}
        }"#;
        let profile: PartnerTraitProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.primary_trait, Some(CharacterTrait::AttentionToDetail));
        assert_eq!(profile.mastery_of(CharacterTrait::AttentionToDetail), 2);
        assert!(profile.secondary_trait.is_none());
    }

    #[test]
    fn test_profile_with_foreign_traits_parses() {
        let json = r#"{
            "partner_id": "rook",
            "primary_trait": "pattern_recognition",
            "secondary_trait": "creative_thinking",
            "tertiary_trait": "night_owl",
            "mastery": {"pattern_recognition": 1, "creative_thinking": 2, "night_owl": 1}
        }"#;
        let profile: PartnerTraitProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.primary_trait, Some(CharacterTrait::PatternRecognition));
        assert_eq!(profile.secondary_trait, Some(CharacterTrait::Other));
        assert_eq!(profile.tertiary_trait, Some(CharacterTrait::Other));
        assert_eq!(
            profile.slotted_mastery(CharacterTrait::PatternRecognition),
            Some(mastery::SILVER)
        );
    }
}
