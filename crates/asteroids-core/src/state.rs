//! Game state snapshot — the complete visible state handed to observers.
//!
//! Snapshots are built fresh on request and never alias world internals;
//! reading one cannot mutate the game.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, MissileSource};
use crate::events::Alert;
use crate::types::GameTime;

/// Complete game state visible to a presentation layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: GameTime,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    pub player: Option<PlayerView>,
    pub entities: Vec<EntityView>,
    /// Diagnostics raised since the previous snapshot.
    pub alerts: Vec<Alert>,
}

impl GameStateSnapshot {
    /// The `DisplayGameValues` line: score, player missile count, elapsed
    /// time. `None` when no player is in the world.
    pub fn status_line(&self) -> Option<String> {
        self.player.as_ref().map(|player| {
            format!(
                "score={} missiles={} elapsed={}",
                self.score, player.missiles, self.time.frame
            )
        })
    }
}

/// The player's ship as seen by the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: DVec2,
    pub heading: i32,
    pub speed: f64,
    pub launcher: i32,
    pub missiles: u32,
}

/// One entity on the map, tagged by kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum EntityView {
    Player {
        position: DVec2,
        heading: i32,
        speed: f64,
        launcher: i32,
        missiles: u32,
    },
    Enemy {
        position: DVec2,
        heading: i32,
        speed: f64,
        missiles: u32,
    },
    Asteroid {
        position: DVec2,
        heading: i32,
        speed: f64,
    },
    Missile {
        source: MissileSource,
        position: DVec2,
        heading: i32,
        speed: f64,
        fuel: u32,
    },
    Station {
        position: DVec2,
        blink_timer: u32,
    },
}
