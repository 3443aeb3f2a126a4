//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{Faction, UnitKind};
use crate::error::PlacementError;

/// Something notable that happened during a tick (or a command applied
/// between ticks). Drained into the next snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchEvent {
    UnitDeployed {
        unit_id: u64,
        kind: UnitKind,
        x: f64,
        y: f64,
        cost: u32,
    },
    PlacementRejected {
        error: PlacementError,
    },
    DefenderSpawned {
        unit_id: u64,
        kind: UnitKind,
        wave: u32,
    },
    ProjectileFired {
        faction: Faction,
        x: f64,
        y: f64,
    },
    ProjectileHit {
        faction: Faction,
        unit_id: u64,
        damage: u32,
    },
    ProjectileExpired {
        faction: Faction,
    },
    StructureDamaged {
        faction: Faction,
        damage: u32,
        remaining: u32,
    },
    UnitKilled {
        unit_id: u64,
        kind: UnitKind,
        /// Resources and score credited for the kill (zero for attackers).
        bounty: u32,
    },
    /// Defender structure destroyed; `wave` is the new wave number.
    WaveCleared {
        wave: u32,
        structure_health: u32,
    },
    MatchEnded {
        score: u32,
        waves_cleared: u32,
    },
    PauseToggled {
        paused: bool,
    },
    MatchRestarted,
}
