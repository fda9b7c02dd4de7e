//! Game entity data and per-frame behavior.
//!
//! Entities form a closed set of variants; the world dispatches frame
//! advancement by matching on [`Entity`] rather than inspecting runtime
//! types. Spawn-time attribute randomization lives in the world crate —
//! constructors here take explicit values.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{
    MISSILE_FUEL, PLAYER_MAX_MISSILES, PLAYER_SPAWN_X, PLAYER_SPAWN_Y, SPEED_STEP, WORLD_HEIGHT,
    WORLD_WIDTH,
};
use crate::enums::{EntityKind, MissileSource};
use crate::types::Heading;

/// Wrap a position toroidally onto the playfield.
fn wrap_to_world(position: DVec2) -> DVec2 {
    DVec2::new(
        position.x.rem_euclid(WORLD_WIDTH),
        position.y.rem_euclid(WORLD_HEIGHT),
    )
}

/// The player's ship: steerable hull plus an independently rotating
/// missile launcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerShip {
    pub position: DVec2,
    pub heading: Heading,
    pub speed: f64,
    /// Launcher direction, independent of the hull heading. Rotates
    /// counter-clockwise only.
    pub launcher: Heading,
    pub missiles: u32,
}

impl PlayerShip {
    /// Player at the default spawn point, facing north, full magazine.
    pub fn spawn() -> Self {
        Self {
            position: DVec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            heading: Heading::default(),
            speed: 0.0,
            launcher: Heading::default(),
            missiles: PLAYER_MAX_MISSILES,
        }
    }

    /// Speed up or slow down by the fixed increment, clamped to
    /// `[0, MAX_SHIP_SPEED]`.
    pub fn adjust_speed(&mut self, speed_up: bool) {
        let delta = if speed_up { SPEED_STEP } else { -SPEED_STEP };
        self.speed = (self.speed + delta).clamp(0.0, crate::constants::MAX_SHIP_SPEED);
    }

    /// Turn the hull by `delta` degrees (positive = clockwise).
    pub fn steer(&mut self, delta: i32) {
        self.heading = self.heading.turn(delta);
    }

    /// Rotate the launcher one step counter-clockwise.
    pub fn rotate_launcher(&mut self, step: i32) {
        self.launcher = self.launcher.turn(-step);
    }

    /// Expend one missile. Callers check ammo first.
    pub fn fire(&mut self) {
        self.missiles = self.missiles.saturating_sub(1);
    }

    /// Restore the magazine to capacity.
    pub fn reload(&mut self) {
        self.missiles = PLAYER_MAX_MISSILES;
    }

    /// Hyperspace jump: back to the spawn point, attitude unchanged.
    pub fn reset_position(&mut self) {
        self.position = DVec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y);
    }

    /// Translate one frame along the hull heading.
    pub fn advance_frame(&mut self) {
        self.position = wrap_to_world(self.position + self.heading.unit_vector() * self.speed);
    }
}

impl std::fmt::Display for PlayerShip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player ship: loc=({:.1}, {:.1}) heading={} speed={:.1} launcher={} missiles={}",
            self.position.x,
            self.position.y,
            self.heading.degrees(),
            self.speed,
            self.launcher.degrees(),
            self.missiles
        )
    }
}

/// A hostile ship with the same movement/launcher shape as the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyShip {
    pub position: DVec2,
    pub heading: Heading,
    pub speed: f64,
    pub launcher: Heading,
    pub missiles: u32,
}

impl EnemyShip {
    pub fn new(position: DVec2, heading: Heading, speed: f64, launcher: Heading, missiles: u32) -> Self {
        Self {
            position,
            heading,
            speed,
            launcher,
            missiles,
        }
    }

    pub fn fire(&mut self) {
        self.missiles = self.missiles.saturating_sub(1);
    }

    pub fn advance_frame(&mut self) {
        self.position = wrap_to_world(self.position + self.heading.unit_vector() * self.speed);
    }
}

impl std::fmt::Display for EnemyShip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Enemy ship: loc=({:.1}, {:.1}) heading={} speed={:.1} launcher={} missiles={}",
            self.position.x,
            self.position.y,
            self.heading.degrees(),
            self.speed,
            self.launcher.degrees(),
            self.missiles
        )
    }
}

/// A drifting asteroid. No weapon, constant velocity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub position: DVec2,
    pub heading: Heading,
    pub speed: f64,
}

impl Asteroid {
    pub fn new(position: DVec2, heading: Heading, speed: f64) -> Self {
        Self {
            position,
            heading,
            speed,
        }
    }

    pub fn advance_frame(&mut self) {
        self.position = wrap_to_world(self.position + self.heading.unit_vector() * self.speed);
    }
}

impl std::fmt::Display for Asteroid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Asteroid: loc=({:.1}, {:.1}) heading={} speed={:.1}",
            self.position.x,
            self.position.y,
            self.heading.degrees(),
            self.speed
        )
    }
}

/// A missile in flight. Ages one fuel unit per frame; the world removes
/// it the instant fuel reaches zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Missile {
    pub source: MissileSource,
    pub position: DVec2,
    pub heading: Heading,
    pub speed: f64,
    pub fuel: u32,
}

impl Missile {
    /// Missile launched from `position` with a full fuel load.
    pub fn launch(source: MissileSource, position: DVec2, heading: Heading, speed: f64) -> Self {
        Self {
            source,
            position,
            heading,
            speed,
            fuel: MISSILE_FUEL,
        }
    }

    /// Translate one frame and burn exactly one fuel unit.
    pub fn advance_frame(&mut self) {
        self.position = wrap_to_world(self.position + self.heading.unit_vector() * self.speed);
        self.fuel = self.fuel.saturating_sub(1);
    }

    /// True once the fuel load is spent.
    pub fn expended(&self) -> bool {
        self.fuel == 0
    }
}

impl std::fmt::Display for Missile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source = match self.source {
            MissileSource::Player => "player",
            MissileSource::Enemy => "enemy",
        };
        write!(
            f,
            "Missile({}): loc=({:.1}, {:.1}) heading={} speed={:.1} fuel={}",
            source,
            self.position.x,
            self.position.y,
            self.heading.degrees(),
            self.speed,
            self.fuel
        )
    }
}

/// A stationary space station. The blink timer is visual-only state;
/// nothing removes a station because of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceStation {
    pub position: DVec2,
    pub blink_timer: u32,
}

impl SpaceStation {
    pub fn new(position: DVec2) -> Self {
        Self {
            position,
            blink_timer: 0,
        }
    }

    pub fn tick_blink(&mut self) {
        self.blink_timer += 1;
    }
}

impl std::fmt::Display for SpaceStation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Space station: loc=({:.1}, {:.1}) blink={}",
            self.position.x, self.position.y, self.blink_timer
        )
    }
}

/// Any spawned game object. Closed variant set; frame advancement and
/// lookups match on this enum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Entity {
    Player(PlayerShip),
    Enemy(EnemyShip),
    Asteroid(Asteroid),
    Missile(Missile),
    Station(SpaceStation),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Player(_) => EntityKind::Player,
            Entity::Enemy(_) => EntityKind::Enemy,
            Entity::Asteroid(_) => EntityKind::Asteroid,
            Entity::Missile(_) => EntityKind::Missile,
            Entity::Station(_) => EntityKind::Station,
        }
    }

    pub fn as_player(&self) -> Option<&PlayerShip> {
        match self {
            Entity::Player(ship) => Some(ship),
            _ => None,
        }
    }

    pub fn as_player_mut(&mut self) -> Option<&mut PlayerShip> {
        match self {
            Entity::Player(ship) => Some(ship),
            _ => None,
        }
    }

    pub fn as_enemy_mut(&mut self) -> Option<&mut EnemyShip> {
        match self {
            Entity::Enemy(ship) => Some(ship),
            _ => None,
        }
    }

    pub fn as_missile(&self) -> Option<&Missile> {
        match self {
            Entity::Missile(missile) => Some(missile),
            _ => None,
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entity::Player(ship) => ship.fmt(f),
            Entity::Enemy(ship) => ship.fmt(f),
            Entity::Asteroid(asteroid) => asteroid.fmt(f),
            Entity::Missile(missile) => missile.fmt(f),
            Entity::Station(station) => station.fmt(f),
        }
    }
}
