//! What a move hands back to the mission dispatcher

use serde::{Deserialize, Serialize};

use crate::core::error::MoveError;
use crate::core::types::EncounterId;

/// A committed move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// AP spent
    pub cost: u32,
    /// Set when the encounter trial fired
    pub encounter: Option<EncounterId>,
}

/// Flat `{success, encounter?, message?}` shape for the UI layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter: Option<EncounterId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Result<MoveOutcome, MoveError>> for MoveResponse {
    fn from(result: Result<MoveOutcome, MoveError>) -> Self {
        match result {
            Ok(outcome) => Self {
                success: true,
                encounter: outcome.encounter,
                message: None,
            },
            Err(err) => Self {
                success: false,
                encounter: None,
                message: Some(err.to_string()),
            },
        }
    }
}
