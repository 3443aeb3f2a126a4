//! Cleanup system: removes dead units and pays out defender kills.

use hecs::{Entity, World};
use tracing::debug;

use voidsiege_core::components::{Health, SpawnOrder};
use voidsiege_core::enums::{Faction, UnitKind};
use voidsiege_core::events::MatchEvent;

use crate::ledger::Ledger;

/// Remove every unit of `faction` at zero health. Each defender removed
/// credits the ledger exactly once, since a removed unit is never seen again.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn reap_casualties(
    world: &mut World,
    faction: Faction,
    ledger: &mut Ledger,
    kill_credit_base: u32,
    events: &mut Vec<MatchEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let mut fallen: Vec<(SpawnOrder, Entity, UnitKind)> = world
        .query_mut::<(&UnitKind, &Health, &SpawnOrder)>()
        .into_iter()
        .filter(|(_, (kind, health, _))| kind.faction() == faction && health.is_dead())
        .map(|(entity, (kind, _, order))| (*order, entity, *kind))
        .collect();
    fallen.sort_by_key(|(order, _, _)| *order);

    for (order, entity, kind) in fallen {
        let bounty = match faction {
            Faction::Defender => ledger.credit_kill(kill_credit_base),
            Faction::Attacker => 0,
        };
        debug!(unit_id = order.0, ?kind, bounty, "unit killed");
        events.push(MatchEvent::UnitKilled {
            unit_id: order.0,
            kind,
            bounty,
        });
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
