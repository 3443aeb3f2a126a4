//! Entity spawn factories for setting up the arena.
//!
//! Creates structures, units and projectiles with the appropriate
//! component bundles. Every factory stamps a fresh `SpawnOrder`.

use hecs::{Entity, World};

use voidsiege_core::archetypes::UnitStats;
use voidsiege_core::components::*;
use voidsiege_core::constants::*;
use voidsiege_core::enums::{Faction, UnitKind};
use voidsiege_core::rules::MatchRules;
use voidsiege_core::types::Position;

/// Take the next creation sequence number.
pub fn next_spawn_order(counter: &mut u64) -> SpawnOrder {
    let order = SpawnOrder(*counter);
    *counter += 1;
    order
}

/// Set up a fresh arena: one structure per faction.
/// Units arrive later through placement and the spawner.
pub fn setup_match(world: &mut World, rules: &MatchRules, next_order: &mut u64) {
    spawn_structure(
        world,
        Faction::Attacker,
        rules.attacker_structure_health,
        next_order,
    );
    spawn_structure(
        world,
        Faction::Defender,
        rules.defender_structure_health_for(1),
        next_order,
    );
}

/// Anchor point of a faction's structure on the ground line.
pub fn structure_anchor(faction: Faction) -> Position {
    match faction {
        Faction::Attacker => Position::new(ATTACKER_STRUCTURE_X, GROUND_Y),
        Faction::Defender => Position::new(DEFENDER_STRUCTURE_X, GROUND_Y),
    }
}

/// Spawn a faction's structure at full health.
pub fn spawn_structure(
    world: &mut World,
    faction: Faction,
    max_health: u32,
    next_order: &mut u64,
) -> Entity {
    world.spawn((
        Structure,
        faction,
        structure_anchor(faction),
        Health::full(max_health),
        next_spawn_order(next_order),
    ))
}

/// Spawn a unit with the given stats. Returns the entity and its unit id.
pub fn spawn_unit(
    world: &mut World,
    kind: UnitKind,
    position: Position,
    stats: &UnitStats,
    next_order: &mut u64,
) -> (Entity, u64) {
    let order = next_spawn_order(next_order);
    let entity = world.spawn((
        kind,
        position,
        Health::full(stats.health),
        Combatant::from_stats(stats),
        order,
    ));
    (entity, order.0)
}

/// Spawn a projectile flying from `origin` toward the fixed point `target`.
pub fn spawn_projectile(
    world: &mut World,
    origin: Position,
    target: Position,
    damage: u32,
    faction: Faction,
    next_order: &mut u64,
) -> Entity {
    world.spawn((
        origin,
        ProjectileState {
            target,
            damage,
            faction,
            age_secs: 0.0,
        },
        next_spawn_order(next_order),
    ))
}
