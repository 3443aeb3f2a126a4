//! Combat system: per-roster move-or-attack decisions.
//!
//! Each live unit of the acting faction cools down, picks a target from
//! the opposing roster, then either fires, advances, or (with no target)
//! marches on the opposing structure and strikes it when in reach.
//! Projectiles and structure damage are staged and applied after the pass.

use hecs::World;
use tracing::debug;

use voidsiege_core::components::Combatant;
use voidsiege_core::constants::{ARENA_MAX_X, ARENA_MIN_X, ARRIVAL_TOLERANCE, GROUND_Y};
use voidsiege_core::enums::Faction;
use voidsiege_core::events::MatchEvent;
use voidsiege_core::types::Position;

use crate::systems::structures;
use crate::systems::targeting::{self, find_target};
use crate::world_setup;

/// A ranged attack decided during the pass, spawned afterwards.
#[derive(Debug, Clone, Copy)]
struct Volley {
    origin: Position,
    target: Position,
    damage: u32,
}

/// Run one roster's combat pass.
pub fn run(
    world: &mut World,
    faction: Faction,
    dt: f64,
    next_order: &mut u64,
    events: &mut Vec<MatchEvent>,
) {
    let opponents = targeting::gather_candidates(world, faction.opponent());
    let enemy_structure = structures::find(world, faction.opponent()).map(|(_, pos)| pos);
    let roster = targeting::roster(world, faction);

    let mut volleys: Vec<Volley> = Vec::new();
    let mut structure_damage: u32 = 0;

    for entity in roster {
        let Ok((pos, combatant)) = world.query_one_mut::<(&mut Position, &mut Combatant)>(entity)
        else {
            continue;
        };

        combatant.cooldown_secs = (combatant.cooldown_secs - dt).max(0.0);

        match find_target(pos, combatant.engagement_radius, &opponents) {
            None => {
                let Some(structure_pos) = enemy_structure else {
                    continue;
                };
                step_towards(pos, structure_pos.x, combatant.speed, dt);
                if pos.distance_to(&structure_pos) < combatant.engagement_radius
                    && combatant.cooldown_secs <= 0.0
                {
                    structure_damage += combatant.damage;
                    combatant.cooldown_secs = combatant.attack_interval();
                }
            }
            Some(target) => {
                if pos.distance_to(&target.position) <= combatant.engagement_radius {
                    if combatant.cooldown_secs <= 0.0 {
                        volleys.push(Volley {
                            origin: *pos,
                            target: target.position,
                            damage: combatant.damage,
                        });
                        combatant.cooldown_secs = combatant.attack_interval();
                    }
                } else {
                    step_towards(pos, target.position.x, combatant.speed, dt);
                }
            }
        }
    }

    for volley in volleys {
        world_setup::spawn_projectile(
            world,
            volley.origin,
            volley.target,
            volley.damage,
            faction,
            next_order,
        );
        events.push(MatchEvent::ProjectileFired {
            faction,
            x: volley.origin.x,
            y: volley.origin.y,
        });
    }

    if structure_damage > 0 {
        if let Some(remaining) = structures::damage(world, faction.opponent(), structure_damage) {
            debug!(
                target = ?faction.opponent(),
                damage = structure_damage,
                remaining,
                "structure hit"
            );
            events.push(MatchEvent::StructureDamaged {
                faction: faction.opponent(),
                damage: structure_damage,
                remaining,
            });
        }
    }
}

/// Move horizontally toward `target_x` at `speed`, pinned to the ground line
/// and clamped to the arena. Units within the arrival tolerance hold still.
pub fn step_towards(pos: &mut Position, target_x: f64, speed: f64, dt: f64) {
    let dx = target_x - pos.x;
    if dx.abs() <= ARRIVAL_TOLERANCE {
        return;
    }
    pos.x += dx.signum() * speed * dt;
    pos.y = GROUND_Y;
    pos.x = pos.x.clamp(ARENA_MIN_X, ARENA_MAX_X);
}
