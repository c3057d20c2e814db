//! Grid and cell catalog - the terrain a delivery run plays out on
//!
//! Districts are authored sparsely; the grid fills the gaps with plain street.

pub mod catalog;
pub mod cell;
pub mod template;

pub use catalog::Grid;
pub use cell::{CellType, GridCell};
pub use template::{DifficultyModifiers, DistrictGrid, GridSize};
