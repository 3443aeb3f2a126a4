//! Simulation engine: the core of the game.
//!
//! `MatchEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `MatchSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use voidsiege_core::commands::PlayerCommand;
use voidsiege_core::constants::{MAX_TIME_SCALE, MIN_TIME_SCALE};
use voidsiege_core::enums::{AttackerArchetype, Faction, MatchPhase, UnitKind};
use voidsiege_core::error::PlacementError;
use voidsiege_core::events::MatchEvent;
use voidsiege_core::rules::MatchRules;
use voidsiege_core::state::{MatchSnapshot, MatchSummary, ProjectileView, StructureView, UnitView};
use voidsiege_core::types::{Position, SimTime};

use crate::ledger::Ledger;
use crate::systems;
use crate::systems::snapshot::MatchHeader;
use crate::systems::spawner::SpawnClock;
use crate::systems::structures::Outcome;
use crate::world_setup;

/// Configuration for starting a new match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and inputs = same match.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    pub rules: MatchRules,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            rules: MatchRules::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all match state.
pub struct MatchEngine {
    config: SimConfig,
    world: World,
    time: SimTime,
    phase: MatchPhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    ledger: Ledger,
    spawn_clock: SpawnClock,
    selected_archetype: AttackerArchetype,
    next_spawn_order: u64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<MatchEvent>,
    summary: Option<MatchSummary>,
}

impl MatchEngine {
    /// Create an engine with a match already running.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            time: SimTime::default(),
            phase: MatchPhase::Running,
            time_scale: clamp_time_scale(config.time_scale).unwrap_or(1.0),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            ledger: Ledger::new(&config.rules),
            spawn_clock: SpawnClock::default(),
            selected_archetype: AttackerArchetype::Knight,
            next_spawn_order: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            summary: None,
            config,
        };
        world_setup::setup_match(
            &mut engine.world,
            &engine.config.rules,
            &mut engine.next_spawn_order,
        );
        info!(seed = engine.config.seed, "match started");
        engine
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the match by `delta_secs` of wall time and return the
    /// resulting snapshot. Queued commands are applied first. Nothing
    /// advances while paused or after the match has ended.
    pub fn tick(&mut self, delta_secs: f64) -> MatchSnapshot {
        self.process_commands();

        if self.phase == MatchPhase::Running {
            if delta_secs.is_finite() && delta_secs > 0.0 {
                let dt = delta_secs * self.time_scale;
                self.time.advance(dt);
                self.run_systems(dt);
            } else {
                debug!(delta_secs, "ignoring non-positive tick delta");
            }
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, self.header(), &self.ledger, events)
    }

    /// Place an attacker unit now. Returns whether it was placed.
    /// A refusal is also recorded as a `PlacementRejected` event.
    pub fn submit_placement(&mut self, archetype_id: u8, x: f64, y: f64) -> bool {
        match self.try_place_unit(archetype_id, x, y) {
            Ok(_) => true,
            Err(error) => {
                warn!(archetype_id, %error, "placement rejected");
                self.events.push(MatchEvent::PlacementRejected { error });
                false
            }
        }
    }

    /// Place an attacker unit now, returning its unit id or why it was refused.
    /// A refused placement changes nothing.
    pub fn try_place_unit(&mut self, archetype_id: u8, x: f64, y: f64) -> Result<u64, PlacementError> {
        if self.phase != MatchPhase::Running {
            return Err(PlacementError::MatchNotRunning);
        }
        let archetype = AttackerArchetype::from_id(archetype_id)?;
        if !(x.is_finite() && y.is_finite()) {
            return Err(PlacementError::NonFinitePosition);
        }
        let descriptor = archetype.descriptor();
        self.ledger.try_spend(descriptor.cost)?;

        let kind = UnitKind::Attacker(archetype);
        let (_, unit_id) = world_setup::spawn_unit(
            &mut self.world,
            kind,
            Position::new(x, y),
            &descriptor.base_stats(),
            &mut self.next_spawn_order,
        );
        debug!(unit_id, ?archetype, x, y, cost = descriptor.cost, "unit deployed");
        self.events.push(MatchEvent::UnitDeployed {
            unit_id,
            kind,
            x,
            y,
            cost: descriptor.cost,
        });
        Ok(unit_id)
    }

    /// Running <-> Paused. No effect once the match has ended.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            MatchPhase::Running => MatchPhase::Paused,
            MatchPhase::Paused => MatchPhase::Running,
            MatchPhase::Ended => {
                warn!("pause toggle ignored: match has ended");
                return;
            }
        };
        self.events.push(MatchEvent::PauseToggled {
            paused: self.phase == MatchPhase::Paused,
        });
    }

    /// Reinitialize every entity, counter and flag to start-of-match values
    /// and resume running.
    pub fn restart(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.phase = MatchPhase::Running;
        self.time_scale = clamp_time_scale(self.config.time_scale).unwrap_or(1.0);
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.ledger = Ledger::new(&self.config.rules);
        self.spawn_clock = SpawnClock::default();
        self.selected_archetype = AttackerArchetype::Knight;
        self.next_spawn_order = 0;
        self.despawn_buffer.clear();
        self.events.clear();
        self.summary = None;
        world_setup::setup_match(&mut self.world, &self.config.rules, &mut self.next_spawn_order);
        self.events.push(MatchEvent::MatchRestarted);
        info!("match restarted");
    }

    /// Choose the archetype used by `PlaceSelected`.
    pub fn select_archetype(&mut self, archetype_id: u8) -> Result<(), PlacementError> {
        self.selected_archetype = AttackerArchetype::from_id(archetype_id)?;
        Ok(())
    }

    /// Set the game speed multiplier, clamped to the allowed range.
    pub fn set_time_scale(&mut self, scale: f64) {
        match clamp_time_scale(scale) {
            Some(scale) => self.time_scale = scale,
            None => warn!(scale, "time scale ignored: not a number"),
        }
    }

    // --- Read-only accessors ---

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// False once the match has ended.
    pub fn is_running(&self) -> bool {
        self.phase != MatchPhase::Ended
    }

    pub fn is_paused(&self) -> bool {
        self.phase == MatchPhase::Paused
    }

    pub fn resources(&self) -> u32 {
        self.ledger.resources
    }

    pub fn max_resources(&self) -> u32 {
        self.ledger.max_resources
    }

    pub fn wave(&self) -> u32 {
        self.ledger.wave
    }

    pub fn score(&self) -> u32 {
        self.ledger.score
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn selected_archetype(&self) -> AttackerArchetype {
        self.selected_archetype
    }

    /// Final result, once the match has ended.
    pub fn summary(&self) -> Option<MatchSummary> {
        self.summary
    }

    pub fn attacker_units(&self) -> Vec<UnitView> {
        systems::snapshot::build_units(&self.world, Faction::Attacker)
    }

    pub fn defender_units(&self) -> Vec<UnitView> {
        systems::snapshot::build_units(&self.world, Faction::Defender)
    }

    pub fn projectiles(&self) -> Vec<ProjectileView> {
        systems::snapshot::build_projectiles(&self.world)
    }

    pub fn attacker_structure(&self) -> Option<StructureView> {
        systems::snapshot::build_structure(&self.world, Faction::Attacker)
    }

    pub fn defender_structure(&self) -> Option<StructureView> {
        systems::snapshot::build_structure(&self.world, Faction::Defender)
    }

    /// Current state without draining pending events.
    pub fn snapshot(&self) -> MatchSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            self.header(),
            &self.ledger,
            self.events.clone(),
        )
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that stage exact situations.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    /// Spawn a unit directly, bypassing cost and the spawner.
    #[cfg(test)]
    pub fn spawn_test_unit(&mut self, kind: UnitKind, position: Position) -> hecs::Entity {
        let stats = match kind {
            UnitKind::Attacker(archetype) => archetype.descriptor().base_stats(),
            UnitKind::Defender(archetype) => archetype.descriptor().scaled_stats(self.ledger.wave),
        };
        world_setup::spawn_unit(
            &mut self.world,
            kind,
            position,
            &stats,
            &mut self.next_spawn_order,
        )
        .0
    }

    /// Spawn a projectile directly.
    #[cfg(test)]
    pub fn spawn_test_projectile(
        &mut self,
        origin: Position,
        target: Position,
        damage: u32,
        faction: Faction,
    ) -> hecs::Entity {
        world_setup::spawn_projectile(
            &mut self.world,
            origin,
            target,
            damage,
            faction,
            &mut self.next_spawn_order,
        )
    }

    fn header(&self) -> MatchHeader {
        MatchHeader {
            time: self.time,
            phase: self.phase,
            selected_archetype: self.selected_archetype.id(),
            time_scale: self.time_scale,
            summary: self.summary,
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::PlaceUnit { archetype_id, x, y } => {
                self.submit_placement(archetype_id, x, y);
            }
            PlayerCommand::PlaceSelected { x, y } => {
                self.submit_placement(self.selected_archetype.id(), x, y);
            }
            PlayerCommand::SelectArchetype { archetype_id } => {
                if let Err(error) = self.select_archetype(archetype_id) {
                    warn!(%error, "archetype selection ignored");
                }
            }
            PlayerCommand::TogglePause => self.toggle_pause(),
            PlayerCommand::Restart => self.restart(),
            PlayerCommand::SetTimeScale { scale } => self.set_time_scale(scale),
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        let rules = &self.config.rules;

        // 1. Passive income
        self.ledger.regenerate(rules.effective_regen_per_sec(), dt);
        // 2. Defender spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_clock,
            rules,
            self.ledger.wave,
            self.time.elapsed_secs,
            &mut self.next_spawn_order,
            &mut self.events,
        );
        // 3. Combat, attacker roster fully before defender roster
        for faction in [Faction::Attacker, Faction::Defender] {
            systems::combat::run(
                &mut self.world,
                faction,
                dt,
                &mut self.next_spawn_order,
                &mut self.events,
            );
            systems::cleanup::reap_casualties(
                &mut self.world,
                faction,
                &mut self.ledger,
                rules.kill_credit_base,
                &mut self.events,
                &mut self.despawn_buffer,
            );
        }
        // 4. Projectile flight and hits
        systems::projectiles::run(
            &mut self.world,
            dt,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        for faction in [Faction::Attacker, Faction::Defender] {
            systems::cleanup::reap_casualties(
                &mut self.world,
                faction,
                &mut self.ledger,
                rules.kill_credit_base,
                &mut self.events,
                &mut self.despawn_buffer,
            );
        }
        // 5. Structure upkeep
        systems::structures::upkeep(&mut self.world, rules);
        // 6. Win / lose / advance
        self.resolve_outcome();
    }

    fn resolve_outcome(&mut self) {
        match systems::structures::assess(&self.world) {
            Outcome::Standing => {}
            Outcome::AttackerFell => {
                let summary = MatchSummary {
                    score: self.ledger.score,
                    waves_cleared: self.ledger.wave - 1,
                    elapsed_secs: self.time.elapsed_secs,
                };
                self.phase = MatchPhase::Ended;
                self.summary = Some(summary);
                info!(
                    score = summary.score,
                    waves_cleared = summary.waves_cleared,
                    "match ended"
                );
                self.events.push(MatchEvent::MatchEnded {
                    score: summary.score,
                    waves_cleared: summary.waves_cleared,
                });
            }
            Outcome::DefenderFell => {
                let rules = &self.config.rules;
                let wave = self
                    .ledger
                    .advance_wave(rules.wave_bonus_resources, rules.wave_bonus_score);
                let structure_health = rules.defender_structure_health_for(wave);
                systems::structures::rebuild_defender(
                    &mut self.world,
                    structure_health,
                    &mut self.next_spawn_order,
                );
                info!(wave, structure_health, "wave cleared");
                self.events.push(MatchEvent::WaveCleared {
                    wave,
                    structure_health,
                });
            }
        }
    }
}

/// Clamp to the allowed time scale range. `None` for NaN.
fn clamp_time_scale(scale: f64) -> Option<f64> {
    if scale.is_nan() {
        None
    } else {
        Some(scale.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE))
    }
}
