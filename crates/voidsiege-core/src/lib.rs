//! Core types and definitions for the VOIDSIEGE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, the archetype catalog, commands, snapshots, events,
//! rules and constants. It has no dependency on any runtime framework.

pub mod archetypes;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod rules;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
