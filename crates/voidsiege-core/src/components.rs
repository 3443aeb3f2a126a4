//! ECS components for hecs entities.
//!
//! Components are plain data. Game logic lives in the simulation systems;
//! the only methods here are the clamped health mutations every system
//! must go through.

use serde::{Deserialize, Serialize};

use crate::archetypes::UnitStats;
use crate::enums::Faction;
use crate::types::Position;

/// Hit points. `current` never exceeds `max` and never underflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Health {
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_dead(&self) -> bool {
        self.current == 0
    }

    /// Apply damage, flooring at zero. Returns true if this call killed.
    pub fn apply_damage(&mut self, amount: u32) -> bool {
        let was_alive = self.current > 0;
        self.current = self.current.saturating_sub(amount);
        was_alive && self.current == 0
    }

    /// Restore health, capped at max.
    pub fn restore(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.max);
    }
}

/// Attack and movement parameters of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub damage: u32,
    /// Attacks per second.
    pub attack_rate: f64,
    pub engagement_radius: f64,
    pub speed: f64,
    /// Seconds until the next attack is allowed.
    pub cooldown_secs: f64,
}

impl Combatant {
    pub fn from_stats(stats: &UnitStats) -> Self {
        Self {
            damage: stats.damage,
            attack_rate: stats.attack_rate,
            engagement_radius: stats.engagement_radius,
            speed: stats.speed,
            cooldown_secs: 0.0,
        }
    }

    /// Seconds between attacks.
    pub fn attack_interval(&self) -> f64 {
        1.0 / self.attack_rate
    }
}

/// Marks an entity as a faction's structure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Structure;

/// A projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileState {
    /// Aim point captured when fired. Not a live reference to the target.
    pub target: Position,
    pub damage: u32,
    /// Side that fired it. It may only hit units of the opposing side.
    pub faction: Faction,
    pub age_secs: f64,
}

/// Creation sequence number. Systems iterate rosters in this order so
/// that ties resolve identically every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpawnOrder(pub u64);
