//! Delivery units and the packages they carry

use serde::{Deserialize, Serialize};

use crate::core::types::{GridPos, PartnerId, UnitId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PackageKind {
    Food,
    #[default]
    Package,
    Urgent,
    Fragile,
}

/// Cargo a unit is carrying to its destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub id: String,
    pub destination: GridPos,
    pub kind: PackageKind,
    /// Minutes left on the delivery clock; goes negative when late
    pub time_remaining: i32,
}

impl Package {
    pub fn new(
        id: impl Into<String>,
        destination: GridPos,
        kind: PackageKind,
        time_remaining: i32,
    ) -> Self {
        Self {
            id: id.into(),
            destination,
            kind,
            time_remaining,
        }
    }

    pub fn is_overdue(&self) -> bool {
        self.time_remaining <= 0
    }
}

/// A mobile delivery unit on the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryUnit {
    pub id: UnitId,
    pub partner_id: PartnerId,
    pub position: GridPos,
    pub package: Package,
    /// Remaining this round
    pub action_points: u32,
    /// Set by a successful move, cleared only at round reset
    pub has_acted: bool,
}

impl DeliveryUnit {
    pub fn new(
        partner_id: PartnerId,
        position: GridPos,
        package: Package,
        action_points: u32,
    ) -> Self {
        Self {
            id: UnitId::new(),
            partner_id,
            position,
            package,
            action_points,
            has_acted: false,
        }
    }

    /// Has the package reached its destination?
    pub fn at_destination(&self) -> bool {
        self.position == self.package.destination
    }

    pub fn can_act(&self) -> bool {
        !self.has_acted
    }
}
