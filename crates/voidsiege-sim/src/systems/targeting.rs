//! Target selection: nearest live opponent within acquisition range.
//!
//! Read-only over the world. Rosters are gathered in spawn order so the
//! first-encountered tie-break is stable from tick to tick.

use hecs::{Entity, World};

use voidsiege_core::components::{Health, SpawnOrder};
use voidsiege_core::constants::TARGET_ACQUISITION_FACTOR;
use voidsiege_core::enums::{Faction, UnitKind};
use voidsiege_core::types::Position;

/// A unit that may be targeted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetCandidate {
    pub entity: Entity,
    pub unit_id: u64,
    pub position: Position,
}

/// Pick the nearest candidate within `TARGET_ACQUISITION_FACTOR *
/// engagement_radius` of `origin`. Ties go to the earliest candidate.
pub fn find_target(
    origin: &Position,
    engagement_radius: f64,
    candidates: &[TargetCandidate],
) -> Option<TargetCandidate> {
    let reach = engagement_radius * TARGET_ACQUISITION_FACTOR;
    let mut best: Option<(f64, TargetCandidate)> = None;

    for candidate in candidates {
        let distance = origin.distance_to(&candidate.position);
        // NaN distances never qualify.
        if distance.is_nan() || distance > reach {
            continue;
        }
        match best {
            Some((best_distance, _)) if distance >= best_distance => {}
            _ => best = Some((distance, *candidate)),
        }
    }

    best.map(|(_, candidate)| candidate)
}

/// All live units of `faction`, in spawn order.
pub fn gather_candidates(world: &World, faction: Faction) -> Vec<TargetCandidate> {
    let mut roster: Vec<(SpawnOrder, TargetCandidate)> = world
        .query::<(&UnitKind, &Position, &Health, &SpawnOrder)>()
        .iter()
        .filter(|(_, (kind, _, health, _))| kind.faction() == faction && !health.is_dead())
        .map(|(entity, (_, pos, _, order))| {
            (
                *order,
                TargetCandidate {
                    entity,
                    unit_id: order.0,
                    position: *pos,
                },
            )
        })
        .collect();

    roster.sort_by_key(|(order, _)| *order);
    roster.into_iter().map(|(_, candidate)| candidate).collect()
}

/// Entities of all live units of `faction`, in spawn order.
pub fn roster(world: &World, faction: Faction) -> Vec<Entity> {
    gather_candidates(world, faction)
        .into_iter()
        .map(|candidate| candidate.entity)
        .collect()
}
