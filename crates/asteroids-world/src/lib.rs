//! The asteroids game-world simulation.
//!
//! `GameWorld` owns the entity store, processes player commands, advances
//! the clock one frame at a time, and produces `GameStateSnapshot`s.
//! Completely headless (no UI dependency), enabling deterministic testing.

pub mod store;
pub mod world;
