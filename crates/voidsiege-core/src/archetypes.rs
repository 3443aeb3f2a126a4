//! Archetype catalog.
//!
//! Both placement and spawning read unit stats from these two fixed tables
//! instead of branching on unit type at each call site.

use crate::constants::{ARCHETYPE_COUNT, ATTACKER_SPEED, DEFENDER_SPEED};
use crate::enums::{AttackerArchetype, DefenderArchetype};
use crate::error::PlacementError;

/// Stat template for one archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchetypeDescriptor {
    pub name: &'static str,
    /// Resource cost to place. Zero for spawner-only archetypes.
    pub cost: u32,
    pub health: u32,
    pub damage: u32,
    /// Attacks per second.
    pub attack_rate: f64,
    pub engagement_radius: f64,
    pub speed: f64,
    /// Additive health gained per wave (spawned units only).
    pub health_per_wave: u32,
    /// Additive damage gained per wave (spawned units only).
    pub damage_per_wave: u32,
}

/// Concrete stats of a unit about to enter the arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitStats {
    pub health: u32,
    pub damage: u32,
    pub attack_rate: f64,
    pub engagement_radius: f64,
    pub speed: f64,
}

impl ArchetypeDescriptor {
    /// Stats without wave scaling, as placed by the player.
    pub fn base_stats(&self) -> UnitStats {
        UnitStats {
            health: self.health,
            damage: self.damage,
            attack_rate: self.attack_rate,
            engagement_radius: self.engagement_radius,
            speed: self.speed,
        }
    }

    /// Stats with additive wave scaling applied to health and damage.
    pub fn scaled_stats(&self, wave: u32) -> UnitStats {
        UnitStats {
            health: self.health + self.health_per_wave * wave,
            damage: self.damage + self.damage_per_wave * wave,
            ..self.base_stats()
        }
    }
}

const fn attacker(
    name: &'static str,
    cost: u32,
    health: u32,
    damage: u32,
    attack_rate: f64,
    engagement_radius: f64,
) -> ArchetypeDescriptor {
    ArchetypeDescriptor {
        name,
        cost,
        health,
        damage,
        attack_rate,
        engagement_radius,
        speed: ATTACKER_SPEED,
        health_per_wave: 0,
        damage_per_wave: 0,
    }
}

const fn defender(
    name: &'static str,
    health: u32,
    health_per_wave: u32,
    damage: u32,
    damage_per_wave: u32,
    attack_rate: f64,
    engagement_radius: f64,
) -> ArchetypeDescriptor {
    ArchetypeDescriptor {
        name,
        cost: 0,
        health,
        damage,
        attack_rate,
        engagement_radius,
        speed: DEFENDER_SPEED,
        health_per_wave,
        damage_per_wave,
    }
}

/// Player archetypes, in id order (id 1 is index 0).
pub static ATTACKER_ARCHETYPES: [ArchetypeDescriptor; ARCHETYPE_COUNT] = [
    attacker("Knight", 30, 80, 25, 1.5, 60.0),
    attacker("Warden", 40, 60, 30, 2.0, 80.0),
    attacker("Hornet", 50, 50, 35, 2.5, 120.0),
    attacker("Sovereign", 70, 120, 50, 3.0, 100.0),
];

/// Spawner archetypes, in unlock order.
pub static DEFENDER_ARCHETYPES: [ArchetypeDescriptor; ARCHETYPE_COUNT] = [
    defender("Husk", 60, 5, 20, 2, 1.0, 50.0),
    defender("Sentry", 80, 5, 15, 2, 1.5, 40.0),
    defender("Vengefly", 40, 3, 30, 3, 2.0, 60.0),
    defender("Radiance", 200, 10, 40, 5, 0.8, 80.0),
];

impl AttackerArchetype {
    pub const ALL: [AttackerArchetype; ARCHETYPE_COUNT] = [
        AttackerArchetype::Knight,
        AttackerArchetype::Warden,
        AttackerArchetype::Hornet,
        AttackerArchetype::Sovereign,
    ];

    /// Resolve a placement id (1..=4).
    pub fn from_id(id: u8) -> Result<Self, PlacementError> {
        match id {
            1 => Ok(AttackerArchetype::Knight),
            2 => Ok(AttackerArchetype::Warden),
            3 => Ok(AttackerArchetype::Hornet),
            4 => Ok(AttackerArchetype::Sovereign),
            other => Err(PlacementError::InvalidArchetype(other)),
        }
    }

    pub fn id(self) -> u8 {
        match self {
            AttackerArchetype::Knight => 1,
            AttackerArchetype::Warden => 2,
            AttackerArchetype::Hornet => 3,
            AttackerArchetype::Sovereign => 4,
        }
    }

    pub fn descriptor(self) -> &'static ArchetypeDescriptor {
        &ATTACKER_ARCHETYPES[usize::from(self.id() - 1)]
    }
}

impl DefenderArchetype {
    pub const ALL: [DefenderArchetype; ARCHETYPE_COUNT] = [
        DefenderArchetype::Husk,
        DefenderArchetype::Sentry,
        DefenderArchetype::Vengefly,
        DefenderArchetype::Radiance,
    ];

    /// Resolve a spawner roll (1..=4). Unknown rolls fall back to Husk.
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            2 => DefenderArchetype::Sentry,
            3 => DefenderArchetype::Vengefly,
            4 => DefenderArchetype::Radiance,
            _ => DefenderArchetype::Husk,
        }
    }

    fn index(self) -> usize {
        match self {
            DefenderArchetype::Husk => 0,
            DefenderArchetype::Sentry => 1,
            DefenderArchetype::Vengefly => 2,
            DefenderArchetype::Radiance => 3,
        }
    }

    pub fn descriptor(self) -> &'static ArchetypeDescriptor {
        &DEFENDER_ARCHETYPES[self.index()]
    }
}

/// How many defender archetypes the spawner may pick from at `wave`.
/// One more unlocks every three waves, capped at the catalog size.
pub fn defender_choice_count(wave: u32) -> u32 {
    (1 + wave / 3).min(DEFENDER_ARCHETYPES.len() as u32)
}
