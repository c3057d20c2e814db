pub mod config;
pub mod error;
pub mod types;

pub use config::EngineConfig;
pub use error::{EngineError, MoveError, Result};
pub use types::{EncounterId, GridPos, PartnerId, Round, UnitId};
