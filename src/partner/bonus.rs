//! Trait-derived bonuses: situational multipliers and action-point budgets
//!
//! Both are data tables. Adding a trait means adding a row, not a branch.

use serde::{Deserialize, Serialize};

use crate::partner::profile::{CharacterTrait, PartnerTraitProfile};

/// Situation a bonus is being asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Situation {
    Movement,
    Encounter,
    Observation,
}

impl Situation {
    pub const ALL: [Situation; 3] = [
        Situation::Movement,
        Situation::Encounter,
        Situation::Observation,
    ];
}

/// One mastery-gated step: applies when mastery >= `required_mastery`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasteryTier<T> {
    pub required_mastery: u8,
    pub increment: T,
}

const fn tier<T>(required_mastery: u8, increment: T) -> MasteryTier<T> {
    MasteryTier {
        required_mastery,
        increment,
    }
}

/// Multiplier increments a trait grants in the listed situations
#[derive(Debug, Clone, Copy)]
pub struct TraitBonusRule {
    pub trait_id: CharacterTrait,
    pub situations: &'static [Situation],
    pub tiers: &'static [MasteryTier<f32>],
}

/// Action points a trait adds to the per-round budget
#[derive(Debug, Clone, Copy)]
pub struct ActionPointRule {
    pub trait_id: CharacterTrait,
    pub tiers: &'static [MasteryTier<u32>],
}

pub const TRAIT_BONUS_TABLE: &[TraitBonusRule] = &[
    TraitBonusRule {
        trait_id: CharacterTrait::EnhancedSenses,
        situations: &[Situation::Observation, Situation::Encounter],
        tiers: &[tier(1, 0.30), tier(2, 0.20)],
    },
    TraitBonusRule {
        trait_id: CharacterTrait::PatternRecognition,
        situations: &[Situation::Movement],
        tiers: &[tier(1, 0.25)],
    },
    TraitBonusRule {
        trait_id: CharacterTrait::AttentionToDetail,
        situations: &Situation::ALL,
        tiers: &[tier(1, 0.15)],
    },
];

pub const ACTION_POINT_TABLE: &[ActionPointRule] = &[
    ActionPointRule {
        trait_id: CharacterTrait::Hyperfocus,
        tiers: &[tier(1, 1), tier(2, 1)],
    },
    ActionPointRule {
        trait_id: CharacterTrait::RoutineMastery,
        tiers: &[tier(1, 1)],
    },
];

/// Multiplier for a situation; 1.0 with no partner, never below 1.0
pub fn trait_bonus(profile: Option<&PartnerTraitProfile>, situation: Situation) -> f32 {
    let Some(profile) = profile else {
        return 1.0;
    };

    let increments: f32 = TRAIT_BONUS_TABLE
        .iter()
        .filter(|rule| rule.situations.contains(&situation))
        .filter_map(|rule| {
            profile
                .slotted_mastery(rule.trait_id)
                .map(|level| earned(rule.tiers, level).sum::<f32>())
        })
        .sum();

    1.0 + increments
}

/// Per-round action points: `base` plus every earned trait increment
pub fn calculate_action_points(profile: Option<&PartnerTraitProfile>, base: u32) -> u32 {
    let Some(profile) = profile else {
        return base;
    };

    let increments: u32 = ACTION_POINT_TABLE
        .iter()
        .filter_map(|rule| {
            profile
                .slotted_mastery(rule.trait_id)
                .map(|level| earned(rule.tiers, level).sum::<u32>())
        })
        .sum();

    base + increments
}

fn earned<T: Copy>(tiers: &[MasteryTier<T>], level: u8) -> impl Iterator<Item = T> + '_ {
    tiers
        .iter()
        .filter(move |t| level >= t.required_mastery)
        .map(|t| t.increment)
}
