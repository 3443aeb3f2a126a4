//! Projectile system: flight, hit detection and expiry.
//!
//! Each projectile leaves the world exactly once per tick it is resolved:
//! on its first hit (expiry is then not checked) or, failing that, once its
//! age reaches the lifetime.

use hecs::{Entity, World};

use voidsiege_core::components::{Health, ProjectileState, SpawnOrder};
use voidsiege_core::constants::{
    PROJECTILE_HIT_RADIUS, PROJECTILE_LIFETIME_SECS, PROJECTILE_SNAP_EPSILON, PROJECTILE_SPEED,
};
use voidsiege_core::enums::Faction;
use voidsiege_core::events::MatchEvent;
use voidsiege_core::types::Position;

use crate::systems::targeting::{self, TargetCandidate};

/// Advance, collide and expire every projectile in flight.
pub fn run(
    world: &mut World,
    dt: f64,
    events: &mut Vec<MatchEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let attackers = targeting::gather_candidates(world, Faction::Attacker);
    let defenders = targeting::gather_candidates(world, Faction::Defender);

    let mut in_flight: Vec<(SpawnOrder, Entity)> = world
        .query::<(&ProjectileState, &SpawnOrder)>()
        .iter()
        .map(|(entity, (_, order))| (*order, entity))
        .collect();
    in_flight.sort_by_key(|(order, _)| *order);

    for (_, entity) in in_flight {
        let Ok((pos, state)) = world.query_one_mut::<(&mut Position, &mut ProjectileState)>(entity)
        else {
            continue;
        };
        advance(pos, state, dt);
        let (pos, state) = (*pos, *state);

        // A projectile only ever hits the side that did not fire it.
        let victims: &[TargetCandidate] = match state.faction {
            Faction::Attacker => &defenders,
            Faction::Defender => &attackers,
        };

        if let Some(victim) = first_hit(world, &pos, victims) {
            if let Ok(mut health) = world.get::<&mut Health>(victim.entity) {
                health.apply_damage(state.damage);
            }
            events.push(MatchEvent::ProjectileHit {
                faction: state.faction,
                unit_id: victim.unit_id,
                damage: state.damage,
            });
            despawn_buffer.push(entity);
        } else if state.age_secs >= PROJECTILE_LIFETIME_SECS {
            events.push(MatchEvent::ProjectileExpired {
                faction: state.faction,
            });
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Move toward the fixed aim point at constant speed and age the projectile.
/// Snaps onto the aim point once within the epsilon or when the step would
/// overshoot it.
pub fn advance(pos: &mut Position, state: &mut ProjectileState, dt: f64) {
    state.age_secs += dt;

    let dx = state.target.x - pos.x;
    let dy = state.target.y - pos.y;
    let distance = (dx * dx + dy * dy).sqrt();
    let step = PROJECTILE_SPEED * dt;

    if distance <= PROJECTILE_SNAP_EPSILON || step >= distance {
        *pos = state.target;
    } else {
        pos.x += dx / distance * step;
        pos.y += dy / distance * step;
    }
}

/// First unit (in spawn order) still alive and within the hit radius.
fn first_hit(world: &World, pos: &Position, victims: &[TargetCandidate]) -> Option<TargetCandidate> {
    victims
        .iter()
        .filter(|victim| pos.distance_to(&victim.position) < PROJECTILE_HIT_RADIUS)
        .find(|victim| {
            world
                .get::<&Health>(victim.entity)
                .map(|health| !health.is_dead())
                .unwrap_or(false)
        })
        .copied()
}
