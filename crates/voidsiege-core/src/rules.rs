//! Tunable match rules: economy, structures and spawn cadence.
//!
//! Every field has a default, so a rules file only needs the values it
//! overrides. `MatchRules::default()` is the standard match.

use serde::{Deserialize, Serialize};

use crate::enums::Difficulty;
use crate::error::RulesError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchRules {
    // --- Economy ---
    /// Resource pool at match start.
    pub initial_resources: u32,
    /// Resource pool cap.
    pub max_resources: u32,
    /// Passive income (resources/s) before the difficulty multiplier.
    pub resource_regen_per_sec: f64,
    /// Kill credit is `kill_credit_base + wave`, paid to pool and score.
    pub kill_credit_base: u32,
    /// Resources granted when the defender structure falls.
    pub wave_bonus_resources: u32,
    /// Score granted when the defender structure falls.
    pub wave_bonus_score: u32,

    // --- Structures ---
    pub attacker_structure_health: u32,
    /// Defender structure health at wave 1.
    pub defender_structure_health: u32,
    /// A respawned defender structure has
    /// `defender_structure_health + wave * defender_structure_health_per_wave`.
    pub defender_structure_health_per_wave: u32,
    /// Health the attacker structure regains each tick while damaged.
    pub attacker_structure_regen_per_tick: u32,

    // --- Spawner ---
    pub base_spawn_interval: f64,
    /// Interval shrink per wave.
    pub spawn_interval_step: f64,
    pub min_spawn_interval: f64,

    pub difficulty: Difficulty,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            initial_resources: 100,
            max_resources: 200,
            resource_regen_per_sec: 20.0,
            kill_credit_base: 10,
            wave_bonus_resources: 50,
            wave_bonus_score: 100,
            attacker_structure_health: 500,
            defender_structure_health: 300,
            defender_structure_health_per_wave: 100,
            attacker_structure_regen_per_tick: 1,
            base_spawn_interval: 3.0,
            spawn_interval_step: 0.1,
            min_spawn_interval: 1.5,
            difficulty: Difficulty::Normal,
        }
    }
}

impl MatchRules {
    /// Parse and validate rules from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, RulesError> {
        let rules: MatchRules = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Reject rule sets that would break match invariants.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.max_resources == 0 {
            return Err(RulesError::Invalid("max_resources must be positive".into()));
        }
        if self.initial_resources > self.max_resources {
            return Err(RulesError::Invalid(format!(
                "initial_resources {} exceeds max_resources {}",
                self.initial_resources, self.max_resources
            )));
        }
        if !(self.resource_regen_per_sec >= 0.0 && self.resource_regen_per_sec.is_finite()) {
            return Err(RulesError::Invalid(
                "resource_regen_per_sec must be a non-negative number".into(),
            ));
        }
        if self.attacker_structure_health == 0 || self.defender_structure_health == 0 {
            return Err(RulesError::Invalid("structure health must be positive".into()));
        }
        if !(self.min_spawn_interval > 0.0 && self.min_spawn_interval <= self.base_spawn_interval)
        {
            return Err(RulesError::Invalid(format!(
                "min_spawn_interval {} must be in (0, base_spawn_interval {}]",
                self.min_spawn_interval, self.base_spawn_interval
            )));
        }
        if self.spawn_interval_step.is_nan() || self.spawn_interval_step < 0.0 {
            return Err(RulesError::Invalid(
                "spawn_interval_step must be non-negative".into(),
            ));
        }
        Ok(())
    }

    /// Seconds between defender spawns at `wave`, after difficulty.
    /// Never below `min_spawn_interval`, whatever the difficulty.
    pub fn spawn_interval(&self, wave: u32) -> f64 {
        let interval = self.base_spawn_interval - f64::from(wave) * self.spawn_interval_step;
        (interval / self.difficulty.spawn_multiplier()).max(self.min_spawn_interval)
    }

    /// Max health of the defender structure built for `wave`.
    /// The wave-1 structure uses the plain baseline.
    pub fn defender_structure_health_for(&self, wave: u32) -> u32 {
        if wave <= 1 {
            self.defender_structure_health
        } else {
            self.defender_structure_health + wave * self.defender_structure_health_per_wave
        }
    }

    /// Effective passive income per second.
    pub fn effective_regen_per_sec(&self) -> f64 {
        self.resource_regen_per_sec * self.difficulty.regen_multiplier()
    }
}
