//! Match ledger: resource pool, score and wave counter.
//!
//! Stored on `MatchEngine`, NOT as ECS entities. The pool only grows
//! through regeneration, kill credit and the wave bonus, and only shrinks
//! through placement costs. Score never decreases.

use voidsiege_core::error::PlacementError;
use voidsiege_core::rules::MatchRules;

#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    pub resources: u32,
    pub max_resources: u32,
    pub score: u32,
    /// Current wave, starting at 1.
    pub wave: u32,
    /// Fractional income not yet credited.
    regen_carry: f64,
}

impl Ledger {
    pub fn new(rules: &MatchRules) -> Self {
        Self {
            resources: rules.initial_resources.min(rules.max_resources),
            max_resources: rules.max_resources,
            score: 0,
            wave: 1,
            regen_carry: 0.0,
        }
    }

    /// Accrue `rate_per_sec * dt` of passive income, crediting whole units.
    pub fn regenerate(&mut self, rate_per_sec: f64, dt: f64) {
        if self.resources >= self.max_resources {
            self.regen_carry = 0.0;
            return;
        }
        self.regen_carry += rate_per_sec * dt;
        let whole = self.regen_carry.floor();
        if whole >= 1.0 {
            self.regen_carry -= whole;
            self.deposit(whole as u32);
        }
    }

    /// Deduct `cost` if the pool covers it. Leaves the pool untouched otherwise.
    pub fn try_spend(&mut self, cost: u32) -> Result<(), PlacementError> {
        if self.resources < cost {
            return Err(PlacementError::InsufficientResource {
                cost,
                available: self.resources,
            });
        }
        self.resources -= cost;
        Ok(())
    }

    /// Pay out a defender kill. Returns the bounty credited.
    pub fn credit_kill(&mut self, kill_credit_base: u32) -> u32 {
        let bounty = kill_credit_base + self.wave;
        self.deposit(bounty);
        self.score = self.score.saturating_add(bounty);
        bounty
    }

    /// Advance to the next wave and pay the clear bonus. Returns the new wave.
    pub fn advance_wave(&mut self, bonus_resources: u32, bonus_score: u32) -> u32 {
        self.wave += 1;
        self.deposit(bonus_resources);
        self.score = self.score.saturating_add(bonus_score);
        self.wave
    }

    fn deposit(&mut self, amount: u32) {
        self.resources = self
            .resources
            .saturating_add(amount)
            .min(self.max_resources);
        debug_assert!(self.resources <= self.max_resources);
    }
}
