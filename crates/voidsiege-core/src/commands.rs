//! Player commands sent from the input layer to the simulation.
//!
//! Queued commands are applied at the start of the next tick, never mid-tick.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Place an attacker unit of archetype `archetype_id` (1..=4) at (x, y).
    PlaceUnit { archetype_id: u8, x: f64, y: f64 },
    /// Place the currently selected archetype at (x, y).
    PlaceSelected { x: f64, y: f64 },
    /// Change the archetype used by `PlaceSelected`.
    SelectArchetype { archetype_id: u8 },
    /// Running <-> Paused.
    TogglePause,
    /// Reset everything to start-of-match values and resume.
    Restart,
    /// Game speed multiplier, clamped to the allowed range.
    SetTimeScale { scale: f64 },
}
