//! Error types for rejected commands and bad configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a unit placement was refused. A refused placement never spends
/// resources or creates a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail")]
pub enum PlacementError {
    #[error("unknown archetype id {0}")]
    InvalidArchetype(u8),
    #[error("insufficient resources: need {cost}, have {available}")]
    InsufficientResource { cost: u32, available: u32 },
    #[error("match is not running")]
    MatchNotRunning,
    #[error("placement coordinates must be finite")]
    NonFinitePosition,
}

/// Failure to load or validate [`crate::rules::MatchRules`].
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("malformed rules: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid rules: {0}")]
    Invalid(String),
}
