//! Delivery units - who is on the grid, where, and with what

pub mod delivery;
pub mod registry;

pub use delivery::{DeliveryUnit, Package, PackageKind};
pub use registry::UnitRegistry;
