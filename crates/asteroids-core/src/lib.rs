//! Core types and definitions for the asteroids game world.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entity data types, commands, state snapshots, alerts, and constants.
//! It has no dependency on any UI or runtime framework.

pub mod commands;
pub mod constants;
pub mod entities;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
