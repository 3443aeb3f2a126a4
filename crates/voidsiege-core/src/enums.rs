//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which side of the battle an entity fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    /// Player-aligned side. Places units, owns the left structure.
    Attacker,
    /// Opponent side. Spawns on a timer, owns the right structure.
    Defender,
}

impl Faction {
    /// The side this faction fights against.
    pub fn opponent(self) -> Faction {
        match self {
            Faction::Attacker => Faction::Defender,
            Faction::Defender => Faction::Attacker,
        }
    }
}

/// Player-placeable unit archetypes, addressed by ids 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackerArchetype {
    Knight,
    Warden,
    Hornet,
    Sovereign,
}

/// Spawner-created unit archetypes. Later entries unlock as waves progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefenderArchetype {
    Husk,
    Sentry,
    Vengefly,
    Radiance,
}

/// Archetype identity of a unit, carried for rendering and bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "side", content = "archetype")]
pub enum UnitKind {
    Attacker(AttackerArchetype),
    Defender(DefenderArchetype),
}

impl UnitKind {
    pub fn faction(self) -> Faction {
        match self {
            UnitKind::Attacker(_) => Faction::Attacker,
            UnitKind::Defender(_) => Faction::Defender,
        }
    }
}

/// Top-level match state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    #[default]
    Running,
    Paused,
    /// Attacker structure destroyed. Terminal until restart.
    Ended,
}

/// Difficulty preset scaling spawn cadence, defender toughness and income.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Spawn frequency multiplier. The spawn interval is divided by this.
    pub fn spawn_multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 0.7,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.5,
        }
    }

    /// Multiplier on spawned defender health.
    pub fn defender_health_multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 0.8,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.3,
        }
    }

    /// Multiplier on passive resource regeneration.
    pub fn regen_multiplier(self) -> f64 {
        match self {
            Difficulty::Easy => 1.2,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 0.8,
        }
    }
}
