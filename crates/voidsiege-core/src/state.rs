//! Match state snapshot: the complete visible state after a tick.
//!
//! Renderers read only this. It is built after a tick has fully settled.

use serde::{Deserialize, Serialize};

use crate::enums::{Faction, MatchPhase, UnitKind};
use crate::events::MatchEvent;
use crate::types::{Position, SimTime};

/// Complete match state handed to the presentation layer after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub phase: MatchPhase,
    pub resources: u32,
    pub max_resources: u32,
    pub wave: u32,
    pub score: u32,
    /// Archetype id used by `PlaceSelected`.
    pub selected_archetype: u8,
    pub time_scale: f64,
    pub attacker_units: Vec<UnitView>,
    pub defender_units: Vec<UnitView>,
    pub projectiles: Vec<ProjectileView>,
    pub attacker_structure: Option<StructureView>,
    pub defender_structure: Option<StructureView>,
    pub events: Vec<MatchEvent>,
    /// Final result, present once the match has ended.
    pub summary: Option<MatchSummary>,
}

/// A unit on the field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub unit_id: u64,
    pub kind: UnitKind,
    pub name: String,
    pub position: Position,
    pub health: u32,
    pub max_health: u32,
    pub engagement_radius: f64,
    /// True when the attack cooldown has elapsed.
    pub ready_to_attack: bool,
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub faction: Faction,
    pub position: Position,
    pub target: Position,
    pub age_secs: f64,
}

/// One side's structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureView {
    pub faction: Faction,
    pub position: Position,
    pub health: u32,
    pub max_health: u32,
}

/// Final result reported when the match ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub score: u32,
    pub waves_cleared: u32,
    pub elapsed_secs: f64,
}
