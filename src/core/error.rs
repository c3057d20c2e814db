use thiserror::Error;

use crate::core::types::{GridPos, UnitId};

/// Why a `move_unit` call was rejected. No state changes on any of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Unit not found")]
    UnitNotFound,

    #[error("Unit has already acted")]
    AlreadyActed,

    #[error("Invalid position")]
    InvalidPosition,

    #[error("Position blocked")]
    PositionBlocked,

    #[error("Not enough action points")]
    NotEnoughActionPoints,
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unit not found: {0}")]
    UnitNotFound(UnitId),

    #[error("Position out of bounds: {0}")]
    OutOfBounds(GridPos),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        assert_eq!(MoveError::UnitNotFound.to_string(), "Unit not found");
        assert_eq!(MoveError::InvalidPosition.to_string(), "Invalid position");
        assert_eq!(MoveError::PositionBlocked.to_string(), "Position blocked");
        assert_eq!(
            MoveError::NotEnoughActionPoints.to_string(),
            "Not enough action points"
        );
    }

    #[test]
    fn test_engine_error_display_includes_position() {
        let err = EngineError::OutOfBounds(GridPos::new(9, -1));
        assert_eq!(err.to_string(), "Position out of bounds: (9, -1)");
    }
}
