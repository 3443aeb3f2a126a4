//! Simulation constants and tuning parameters.
//!
//! Economy and structure values that a match may tune live in
//! [`crate::rules::MatchRules`]; the numbers here are fixed geometry and
//! physics shared by every match.

// --- Arena ---

/// Arena width in arena units.
pub const ARENA_WIDTH: f64 = 1000.0;

/// Arena height in arena units.
pub const ARENA_HEIGHT: f64 = 600.0;

/// Ground line every moving unit is pinned to.
pub const GROUND_Y: f64 = ARENA_HEIGHT - 100.0;

/// Horizontal margin units are clamped inside.
pub const ARENA_MARGIN: f64 = 10.0;

/// Minimum x a unit may occupy.
pub const ARENA_MIN_X: f64 = ARENA_MARGIN;

/// Maximum x a unit may occupy.
pub const ARENA_MAX_X: f64 = ARENA_WIDTH - ARENA_MARGIN;

// --- Structures ---

/// Attacker structure anchor x.
pub const ATTACKER_STRUCTURE_X: f64 = 80.0;

/// Defender structure anchor x. Defender units also spawn here.
pub const DEFENDER_STRUCTURE_X: f64 = ARENA_WIDTH - 80.0;

// --- Units ---

/// Movement speed of attacker units (units/s).
pub const ATTACKER_SPEED: f64 = 25.0;

/// Movement speed of defender units (units/s).
pub const DEFENDER_SPEED: f64 = 35.0;

/// Units stop advancing once this close (horizontally) to their destination.
pub const ARRIVAL_TOLERANCE: f64 = 15.0;

/// Targets are acquired out to this multiple of the engagement radius.
pub const TARGET_ACQUISITION_FACTOR: f64 = 1.5;

/// Number of archetypes per faction.
pub const ARCHETYPE_COUNT: usize = 4;

// --- Projectiles ---

/// Projectile flight speed (units/s).
pub const PROJECTILE_SPEED: f64 = 250.0;

/// Projectile lifetime in seconds before it expires.
pub const PROJECTILE_LIFETIME_SECS: f64 = 4.0;

/// A projectile this close to a unit (strictly less) hits it.
pub const PROJECTILE_HIT_RADIUS: f64 = 18.0;

/// Within this distance of its aim point a projectile snaps onto it.
pub const PROJECTILE_SNAP_EPSILON: f64 = 3.0;

// --- Time ---

/// Lower bound on the time scale multiplier.
pub const MIN_TIME_SCALE: f64 = 0.5;

/// Upper bound on the time scale multiplier.
pub const MAX_TIME_SCALE: f64 = 3.0;
