//! Partner traits and the bonuses they grant on a delivery run

pub mod bonus;
pub mod profile;

pub use bonus::{calculate_action_points, trait_bonus, Situation};
pub use profile::{mastery, CharacterTrait, PartnerTraitProfile};
