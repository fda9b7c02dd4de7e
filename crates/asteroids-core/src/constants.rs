//! Game-world constants and tuning parameters.

/// Playfield width in world units.
pub const WORLD_WIDTH: f64 = 1024.0;

/// Playfield height in world units.
pub const WORLD_HEIGHT: f64 = 768.0;

// --- Player ship ---

/// Player spawn X (playfield center).
pub const PLAYER_SPAWN_X: f64 = WORLD_WIDTH / 2.0;

/// Player spawn Y (playfield center).
pub const PLAYER_SPAWN_Y: f64 = WORLD_HEIGHT / 2.0;

/// Speed change per `ChangeSpeed` call.
pub const SPEED_STEP: f64 = 1.0;

/// Maximum speed for the player ship (world units per frame).
pub const MAX_SHIP_SPEED: f64 = 20.0;

/// Heading change per `TurnPlayer` call (degrees).
pub const TURN_STEP_DEGREES: i32 = 1;

/// Launcher rotation per `RotateLauncher` call (degrees, counter-clockwise).
pub const LAUNCHER_STEP_DEGREES: i32 = 1;

/// Player missile magazine capacity (also the reload target).
pub const PLAYER_MAX_MISSILES: u32 = 10;

// --- Enemy ships ---

/// Missiles carried by a freshly spawned enemy ship.
pub const ENEMY_MISSILE_COUNT: u32 = 2;

/// Enemy ship speed range at spawn (world units per frame, inclusive).
pub const ENEMY_SPEED_MIN: f64 = 1.0;
pub const ENEMY_SPEED_MAX: f64 = 5.0;

// --- Asteroids ---

/// Asteroid speed range at spawn (world units per frame, inclusive).
pub const ASTEROID_SPEED_MIN: f64 = 1.0;
pub const ASTEROID_SPEED_MAX: f64 = 8.0;

// --- Missiles ---

/// Frames of fuel a missile starts with; it is removed the frame fuel
/// reaches zero.
pub const MISSILE_FUEL: u32 = 10;

/// Missile speed bonus over the firing ship's speed.
pub const MISSILE_SPEED_BONUS: f64 = 2.0;

// --- Scoring and lives ---

/// Score credited for destroying an asteroid.
pub const SCORE_ASTEROID: u32 = 10;

/// Score credited for destroying an enemy ship.
pub const SCORE_ENEMY: u32 = 20;

/// Player lives at world creation.
pub const STARTING_LIVES: u32 = 3;
