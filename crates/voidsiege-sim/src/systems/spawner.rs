//! Spawner system: time-gated creation of defender units.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use voidsiege_core::archetypes::defender_choice_count;
use voidsiege_core::constants::{DEFENDER_STRUCTURE_X, GROUND_Y};
use voidsiege_core::enums::{DefenderArchetype, UnitKind};
use voidsiege_core::events::MatchEvent;
use voidsiege_core::rules::MatchRules;
use voidsiege_core::types::Position;

use crate::world_setup;

/// When the last defender was spawned.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpawnClock {
    pub last_spawn_secs: f64,
}

/// Spawn one defender if more than the wave's spawn interval has passed
/// since the last spawn.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    clock: &mut SpawnClock,
    rules: &MatchRules,
    wave: u32,
    elapsed_secs: f64,
    next_order: &mut u64,
    events: &mut Vec<MatchEvent>,
) {
    if elapsed_secs - clock.last_spawn_secs <= rules.spawn_interval(wave) {
        return;
    }
    clock.last_spawn_secs = elapsed_secs;

    let roll = 1 + rng.gen_range(0..defender_choice_count(wave));
    let archetype = DefenderArchetype::from_roll(roll);
    let mut stats = archetype.descriptor().scaled_stats(wave);
    let multiplier = rules.difficulty.defender_health_multiplier();
    stats.health = ((f64::from(stats.health) * multiplier).round() as u32).max(1);

    let kind = UnitKind::Defender(archetype);
    let (_, unit_id) = world_setup::spawn_unit(
        world,
        kind,
        Position::new(DEFENDER_STRUCTURE_X, GROUND_Y),
        &stats,
        next_order,
    );
    debug!(unit_id, ?archetype, wave, health = stats.health, "defender spawned");
    events.push(MatchEvent::DefenderSpawned {
        unit_id,
        kind,
        wave,
    });
}
