//! Snapshot system: queries the ECS world and builds a MatchSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use voidsiege_core::components::*;
use voidsiege_core::enums::{Faction, MatchPhase, UnitKind};
use voidsiege_core::events::MatchEvent;
use voidsiege_core::state::*;
use voidsiege_core::types::{Position, SimTime};

use crate::ledger::Ledger;

/// Engine-side values that are not stored in the world.
pub struct MatchHeader {
    pub time: SimTime,
    pub phase: MatchPhase,
    pub selected_archetype: u8,
    pub time_scale: f64,
    pub summary: Option<MatchSummary>,
}

/// Build a complete MatchSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    header: MatchHeader,
    ledger: &Ledger,
    events: Vec<MatchEvent>,
) -> MatchSnapshot {
    MatchSnapshot {
        time: header.time,
        phase: header.phase,
        resources: ledger.resources,
        max_resources: ledger.max_resources,
        wave: ledger.wave,
        score: ledger.score,
        selected_archetype: header.selected_archetype,
        time_scale: header.time_scale,
        attacker_units: build_units(world, Faction::Attacker),
        defender_units: build_units(world, Faction::Defender),
        projectiles: build_projectiles(world),
        attacker_structure: build_structure(world, Faction::Attacker),
        defender_structure: build_structure(world, Faction::Defender),
        events,
        summary: header.summary,
    }
}

/// UnitView list for one faction, in spawn order.
pub fn build_units(world: &World, faction: Faction) -> Vec<UnitView> {
    let mut units: Vec<UnitView> = world
        .query::<(&UnitKind, &Position, &Health, &Combatant, &SpawnOrder)>()
        .iter()
        .filter(|(_, (kind, _, _, _, _))| kind.faction() == faction)
        .map(|(_, (kind, pos, health, combatant, order))| UnitView {
            unit_id: order.0,
            kind: *kind,
            name: unit_name(*kind).to_string(),
            position: *pos,
            health: health.current,
            max_health: health.max,
            engagement_radius: combatant.engagement_radius,
            ready_to_attack: combatant.cooldown_secs <= 0.0,
        })
        .collect();

    units.sort_by_key(|u| u.unit_id);
    units
}

/// ProjectileView list, in spawn order.
pub fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<(SpawnOrder, ProjectileView)> = world
        .query::<(&Position, &ProjectileState, &SpawnOrder)>()
        .iter()
        .map(|(_, (pos, state, order))| {
            (
                *order,
                ProjectileView {
                    faction: state.faction,
                    position: *pos,
                    target: state.target,
                    age_secs: state.age_secs,
                },
            )
        })
        .collect();

    projectiles.sort_by_key(|(order, _)| *order);
    projectiles.into_iter().map(|(_, view)| view).collect()
}

/// StructureView for one faction, if its structure exists.
pub fn build_structure(world: &World, faction: Faction) -> Option<StructureView> {
    world
        .query::<(&Structure, &Faction, &Position, &Health)>()
        .iter()
        .find(|(_, (_, owner, _, _))| **owner == faction)
        .map(|(_, (_, owner, pos, health))| StructureView {
            faction: *owner,
            position: *pos,
            health: health.current,
            max_health: health.max,
        })
}

fn unit_name(kind: UnitKind) -> &'static str {
    match kind {
        UnitKind::Attacker(archetype) => archetype.descriptor().name,
        UnitKind::Defender(archetype) => archetype.descriptor().name,
    }
}
