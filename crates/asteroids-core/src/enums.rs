//! Enumeration types used throughout the game world.

use serde::{Deserialize, Serialize};

/// Runtime tag identifying an entity variant.
///
/// The destroy and collision operations take these tags rather than
/// entity handles; the world validates the tag combination at call time
/// and reports unsupported combinations as invalid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Enemy,
    Asteroid,
    Missile,
    Station,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Player => "player ship",
            EntityKind::Enemy => "enemy ship",
            EntityKind::Asteroid => "asteroid",
            EntityKind::Missile => "missile",
            EntityKind::Station => "space station",
        };
        f.write_str(name)
    }
}

/// Which side launched a missile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissileSource {
    Player,
    Enemy,
}

/// Top-level game phase. `GameOver` latches when lives reach zero and is
/// never cleared without building a fresh world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver,
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Warning,
}
