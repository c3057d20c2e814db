//! Delivery Grid - turn-based delivery runs on a district terrain grid
//!
//! Units move under an action-point budget and may trigger encounters on
//! arrival; a bound partner's traits shape both.

pub mod core;
pub mod encounter;
pub mod engine;
pub mod grid;
pub mod movement;
pub mod partner;
pub mod units;

pub use crate::core::{
    EncounterId, EngineConfig, EngineError, GridPos, MoveError, PartnerId, UnitId,
};
pub use crate::engine::DeliveryEngine;
pub use crate::grid::{CellType, DistrictGrid, Grid, GridCell};
pub use crate::movement::{MoveOutcome, MoveResponse};
pub use crate::partner::{CharacterTrait, PartnerTraitProfile, Situation};
pub use crate::units::{DeliveryUnit, Package, PackageKind};
