//! Structure upkeep and the win/lose/advance assessment.

use hecs::{Entity, World};

use voidsiege_core::components::{Health, Structure};
use voidsiege_core::enums::Faction;
use voidsiege_core::rules::MatchRules;
use voidsiege_core::types::Position;

use crate::world_setup;

/// What the structures' health means for the match after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Both structures stand.
    Standing,
    /// Attacker structure destroyed: the match is over.
    AttackerFell,
    /// Defender structure destroyed: advance the wave.
    DefenderFell,
}

/// Locate a faction's structure.
pub fn find(world: &World, faction: Faction) -> Option<(Entity, Position)> {
    world
        .query::<(&Structure, &Faction, &Position)>()
        .iter()
        .find(|(_, (_, owner, _))| **owner == faction)
        .map(|(entity, (_, _, pos))| (entity, *pos))
}

/// Apply damage to a faction's structure. Returns remaining health.
pub fn damage(world: &mut World, faction: Faction, amount: u32) -> Option<u32> {
    world
        .query_mut::<(&Structure, &Faction, &mut Health)>()
        .into_iter()
        .find(|(_, (_, owner, _))| **owner == faction)
        .map(|(_, (_, _, health))| {
            health.apply_damage(amount);
            health.current
        })
}

/// Per-tick upkeep: the attacker structure regenerates while damaged.
/// A destroyed structure stays destroyed; the defender never regenerates.
pub fn upkeep(world: &mut World, rules: &MatchRules) {
    for (_entity, (_structure, owner, health)) in
        world.query_mut::<(&Structure, &Faction, &mut Health)>()
    {
        if *owner == Faction::Attacker && !health.is_dead() && health.current < health.max {
            health.restore(rules.attacker_structure_regen_per_tick);
        }
    }
}

/// Check both structures. Attacker loss takes precedence.
pub fn assess(world: &World) -> Outcome {
    let mut attacker_dead = false;
    let mut defender_dead = false;
    for (_entity, (_structure, owner, health)) in
        world.query::<(&Structure, &Faction, &Health)>().iter()
    {
        if health.is_dead() {
            match owner {
                Faction::Attacker => attacker_dead = true,
                Faction::Defender => defender_dead = true,
            }
        }
    }

    if attacker_dead {
        Outcome::AttackerFell
    } else if defender_dead {
        Outcome::DefenderFell
    } else {
        Outcome::Standing
    }
}

/// Replace the fallen defender structure with a fresh one of `max_health`.
pub fn rebuild_defender(world: &mut World, max_health: u32, next_order: &mut u64) -> Entity {
    if let Some((old, _)) = find(world, Faction::Defender) {
        let _ = world.despawn(old);
    }
    world_setup::spawn_structure(world, Faction::Defender, max_health, next_order)
}
