//! Player commands sent from a frontend to the game world.
//!
//! Each command maps to exactly one `GameWorld` method; adapters hold no
//! game logic of their own. Commands are queued and processed in order.

use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;

/// All possible player/UI actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Spawning ---
    SpawnPlayer,
    SpawnEnemy,
    SpawnAsteroid,
    SpawnStation,

    // --- Player control ---
    /// Speed the player up (`true`) or slow it down (`false`).
    ChangeSpeed { speed_up: bool },
    /// Turn the player clockwise (`true`) or counter-clockwise (`false`).
    TurnPlayer { turn_right: bool },
    /// Rotate the missile launcher one step counter-clockwise.
    RotateLauncher,
    /// Hyperspace jump: reset the player to the spawn point.
    ResetPosition,

    // --- Weapons ---
    FirePlayerMissile,
    FireEnemyMissile,
    /// Refill the player's magazine (requires a station in the world).
    ReloadMissiles,

    // --- Destruction & collision ---
    /// Destroy the first asteroid or enemy ship with a player missile.
    DestroyTarget { kind: EntityKind },
    /// An enemy missile strikes the player.
    KillPlayerWithEnemyMissile,
    /// Two entities collide; `first` must be the player or an asteroid,
    /// `second` an asteroid or an enemy ship.
    Collision { first: EntityKind, second: EntityKind },

    // --- Simulation ---
    /// Advance the world by one frame.
    AdvanceGameClock,

    // --- Queries (logged, never state-changing) ---
    DisplayGameValues,
    PrintMap,
}
