//! ECS systems that operate on the arena world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for
//! read-only work). They do not own state; all state lives in components
//! or is passed in by the engine.

pub mod cleanup;
pub mod combat;
pub mod projectiles;
pub mod snapshot;
pub mod spawner;
pub mod structures;
pub mod targeting;
