//! Simulation engine for VOIDSIEGE.
//!
//! Owns the hecs ECS world, advances it by variable time steps,
//! and produces MatchSnapshots for whatever drives it.

pub mod engine;
pub mod ledger;
pub mod systems;
pub mod world_setup;

pub use engine::{MatchEngine, SimConfig};
pub use voidsiege_core as core;
