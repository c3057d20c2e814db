//! Encounter resolver - probabilistic events on arrival

pub mod resolver;
pub mod tables;

pub use resolver::{effective_chance, roll_encounter, select_encounter};
pub use tables::{default_candidates, EncounterTable};
