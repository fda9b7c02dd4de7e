//! Game world orchestration — the core of the game.
//!
//! `GameWorld` owns the entity store, processes player commands, resolves
//! collisions and kills, keeps score and lives, and advances the clock
//! one frame at a time. Operations that cannot complete (missing player,
//! no ammunition, invalid entity combination) raise an [`Alert`] and
//! leave the world untouched; nothing here panics or aborts.

use std::collections::VecDeque;

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use asteroids_core::commands::PlayerCommand;
use asteroids_core::constants::{
    ASTEROID_SPEED_MAX, ASTEROID_SPEED_MIN, ENEMY_MISSILE_COUNT, ENEMY_SPEED_MAX, ENEMY_SPEED_MIN,
    LAUNCHER_STEP_DEGREES, MISSILE_SPEED_BONUS, SCORE_ASTEROID, SCORE_ENEMY, STARTING_LIVES,
    TURN_STEP_DEGREES, WORLD_HEIGHT, WORLD_WIDTH,
};
use asteroids_core::entities::{Asteroid, EnemyShip, Entity, Missile, PlayerShip, SpaceStation};
use asteroids_core::enums::{AlertLevel, EntityKind, GamePhase, MissileSource};
use asteroids_core::events::Alert;
use asteroids_core::state::{EntityView, GameStateSnapshot, PlayerView};
use asteroids_core::types::{GameTime, Heading};

use crate::store::{EntityId, EntityStore};

/// Configuration for a new game world.
pub struct WorldConfig {
    /// RNG seed for spawn attribute randomization. Same seed = same game.
    pub seed: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The game world. Owns the entity store and all game state.
pub struct GameWorld {
    store: EntityStore,
    time: GameTime,
    score: u32,
    lives: u32,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    alerts: Vec<Alert>,
    observers: Vec<Box<dyn FnMut()>>,
}

impl GameWorld {
    /// Create a new world with the given config.
    pub fn new(config: WorldConfig) -> Self {
        Self {
            store: EntityStore::new(),
            time: GameTime::default(),
            score: 0,
            lives: STARTING_LIVES,
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            alerts: Vec::new(),
            observers: Vec::new(),
        }
    }

    // --- Command pump ---

    /// Queue a player command for processing.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Process all queued commands in order. Each command maps to exactly
    /// one world method.
    pub fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SpawnPlayer => self.spawn_player(),
            PlayerCommand::SpawnEnemy => self.spawn_enemy(),
            PlayerCommand::SpawnAsteroid => self.spawn_asteroid(),
            PlayerCommand::SpawnStation => self.spawn_station(),
            PlayerCommand::ChangeSpeed { speed_up } => self.change_speed(speed_up),
            PlayerCommand::TurnPlayer { turn_right } => self.turn_player(turn_right),
            PlayerCommand::RotateLauncher => self.rotate_launcher(),
            PlayerCommand::ResetPosition => self.reset_position(),
            PlayerCommand::FirePlayerMissile => self.fire_player_missile(),
            PlayerCommand::FireEnemyMissile => self.fire_enemy_missile(),
            PlayerCommand::ReloadMissiles => self.reload_missiles(),
            PlayerCommand::DestroyTarget { kind } => self.destroy_target(kind),
            PlayerCommand::KillPlayerWithEnemyMissile => self.kill_player_with_enemy_missile(),
            PlayerCommand::Collision { first, second } => self.collision(first, second),
            PlayerCommand::AdvanceGameClock => self.advance_clock(),
            PlayerCommand::DisplayGameValues => match self.display_values() {
                Some(line) => log::info!("{line}"),
                None => self.report_no_player(),
            },
            PlayerCommand::PrintMap => log::info!("world map:\n{}", self.map_report()),
        }
    }

    // --- Spawning ---

    /// Spawn the player ship at its default position and heading. Rejected
    /// while a player exists or once the game is over.
    pub fn spawn_player(&mut self) {
        if self.phase == GamePhase::GameOver {
            self.report(AlertLevel::Warning, "cannot spawn a player after game over");
            return;
        }
        if self.find_player().is_some() {
            self.report(
                AlertLevel::Warning,
                "there is already an instance of the player",
            );
            return;
        }
        self.store.add(Entity::Player(PlayerShip::spawn()));
        self.notify();
    }

    /// Spawn an enemy ship with randomized position, heading, and speed.
    pub fn spawn_enemy(&mut self) {
        let position = self.random_position();
        let heading = self.random_heading();
        let launcher = self.random_heading();
        let speed = self.rng.gen_range(ENEMY_SPEED_MIN..=ENEMY_SPEED_MAX);
        self.store.add(Entity::Enemy(EnemyShip::new(
            position,
            heading,
            speed,
            launcher,
            ENEMY_MISSILE_COUNT,
        )));
        self.notify();
    }

    /// Spawn an asteroid with randomized position, heading, and speed.
    pub fn spawn_asteroid(&mut self) {
        let position = self.random_position();
        let heading = self.random_heading();
        let speed = self.rng.gen_range(ASTEROID_SPEED_MIN..=ASTEROID_SPEED_MAX);
        self.store
            .add(Entity::Asteroid(Asteroid::new(position, heading, speed)));
        self.notify();
    }

    /// Spawn a space station at a randomized position.
    pub fn spawn_station(&mut self) {
        let position = self.random_position();
        self.store.add(Entity::Station(SpaceStation::new(position)));
        self.notify();
    }

    // --- Player control ---

    /// Adjust the player's speed up or down by the fixed increment.
    pub fn change_speed(&mut self, speed_up: bool) {
        let Some(player_id) = self.find_player() else {
            self.report_no_player();
            return;
        };
        if let Some(player) = self.store.get_mut(player_id).and_then(Entity::as_player_mut) {
            player.adjust_speed(speed_up);
        }
        self.notify();
    }

    /// Turn the player one step clockwise (`true`) or counter-clockwise
    /// (`false`). Heading wraps modulo 360.
    pub fn turn_player(&mut self, turn_right: bool) {
        let Some(player_id) = self.find_player() else {
            self.report_no_player();
            return;
        };
        let step = if turn_right {
            TURN_STEP_DEGREES
        } else {
            -TURN_STEP_DEGREES
        };
        if let Some(player) = self.store.get_mut(player_id).and_then(Entity::as_player_mut) {
            player.steer(step);
        }
        self.notify();
    }

    /// Rotate the player's launcher one step counter-clockwise.
    pub fn rotate_launcher(&mut self) {
        let Some(player_id) = self.find_player() else {
            self.report_no_player();
            return;
        };
        if let Some(player) = self.store.get_mut(player_id).and_then(Entity::as_player_mut) {
            player.rotate_launcher(LAUNCHER_STEP_DEGREES);
        }
        self.notify();
    }

    /// Hyperspace jump: reset the player to the spawn point.
    pub fn reset_position(&mut self) {
        let Some(player_id) = self.find_player() else {
            self.report_no_player();
            return;
        };
        if let Some(player) = self.store.get_mut(player_id).and_then(Entity::as_player_mut) {
            player.reset_position();
        }
        self.notify();
    }

    // --- Weapons ---

    /// Fire a missile from the player's launcher. Requires a player with
    /// ammunition.
    pub fn fire_player_missile(&mut self) {
        let Some(player_id) = self.find_player() else {
            self.report_no_player();
            return;
        };
        let (position, launcher, speed, missiles) = match self.store.get(player_id) {
            Some(Entity::Player(player)) => {
                (player.position, player.launcher, player.speed, player.missiles)
            }
            _ => return,
        };
        if missiles == 0 {
            self.report(AlertLevel::Warning, "no more missiles, time to reload");
            return;
        }
        let missile = Missile::launch(
            MissileSource::Player,
            position,
            launcher,
            speed + MISSILE_SPEED_BONUS,
        );
        self.store.add(Entity::Missile(missile));
        if let Some(player) = self.store.get_mut(player_id).and_then(Entity::as_player_mut) {
            player.fire();
        }
        self.notify();
    }

    /// Fire a missile from the first enemy ship (in spawn order) that has
    /// ammunition.
    pub fn fire_enemy_missile(&mut self) {
        let Some(enemy_id) = self
            .store
            .find(|entity| matches!(entity, Entity::Enemy(ship) if ship.missiles > 0))
        else {
            self.report(
                AlertLevel::Warning,
                "no enemy ship with missiles to fire, spawn a new enemy",
            );
            return;
        };
        let (position, launcher, speed) = match self.store.get(enemy_id) {
            Some(Entity::Enemy(enemy)) => (enemy.position, enemy.launcher, enemy.speed),
            _ => return,
        };
        let missile = Missile::launch(
            MissileSource::Enemy,
            position,
            launcher,
            speed + MISSILE_SPEED_BONUS,
        );
        self.store.add(Entity::Missile(missile));
        if let Some(enemy) = self.store.get_mut(enemy_id).and_then(Entity::as_enemy_mut) {
            enemy.fire();
        }
        self.notify();
    }

    /// Refill the player's magazine. Station presence is the sole gate:
    /// both a player and a station must exist in the world.
    pub fn reload_missiles(&mut self) {
        let Some(player_id) = self.find_player() else {
            self.report_no_player();
            return;
        };
        if self
            .store
            .find(|entity| matches!(entity, Entity::Station(_)))
            .is_none()
        {
            self.report(AlertLevel::Warning, "no space station to reload from");
            return;
        }
        if let Some(player) = self.store.get_mut(player_id).and_then(Entity::as_player_mut) {
            player.reload();
        }
        self.notify();
    }

    // --- Destruction & collision resolution ---

    /// Destroy the first asteroid or enemy ship with a player missile,
    /// crediting score. Both the missile and the target must exist; a
    /// missing side or an unsupported kind is a reported no-op.
    pub fn destroy_target(&mut self, kind: EntityKind) {
        let points = match kind {
            EntityKind::Asteroid => SCORE_ASTEROID,
            EntityKind::Enemy => SCORE_ENEMY,
            other => {
                self.report(
                    AlertLevel::Warning,
                    format!("cannot destroy a {other} with a missile"),
                );
                return;
            }
        };
        let Some(missile_id) = self.find_missile(MissileSource::Player) else {
            self.report(AlertLevel::Warning, "no player missile in flight");
            return;
        };
        let Some(target_id) = self.store.find(|entity| entity.kind() == kind) else {
            self.report(AlertLevel::Warning, format!("no {kind} to destroy"));
            return;
        };
        self.store.remove(missile_id);
        self.store.remove(target_id);
        self.score += points;
        self.notify();
    }

    /// An enemy missile strikes the player: both are removed and a life
    /// is lost.
    pub fn kill_player_with_enemy_missile(&mut self) {
        let Some(missile_id) = self.find_missile(MissileSource::Enemy) else {
            self.report(AlertLevel::Warning, "no enemy missile in flight");
            return;
        };
        let Some(player_id) = self.find_player() else {
            self.report_no_player();
            return;
        };
        self.store.remove(missile_id);
        self.store.remove(player_id);
        self.reduce_lives();
        self.notify();
    }

    /// Pairwise collision resolution. `first` must be the player or an
    /// asteroid, `second` an asteroid or an enemy ship; any other tag is
    /// invalid input. When `second` is an asteroid, the scan skips the
    /// entity already resolved as `first` so two distinct asteroids can
    /// collide but one never collides with itself. If `first` resolved to
    /// the player, a life is lost.
    pub fn collision(&mut self, first: EntityKind, second: EntityKind) {
        let first_id = match first {
            EntityKind::Player => self.find_player(),
            EntityKind::Asteroid => self
                .store
                .find(|entity| matches!(entity, Entity::Asteroid(_))),
            other => {
                self.report(
                    AlertLevel::Warning,
                    format!("{other} cannot initiate a collision"),
                );
                return;
            }
        };
        let Some(first_id) = first_id else {
            self.report(AlertLevel::Warning, format!("no instance of {first}"));
            return;
        };

        let second_id = match second {
            EntityKind::Asteroid => self
                .store
                .iter()
                .find(|(id, entity)| {
                    matches!(entity, Entity::Asteroid(_)) && *id != first_id
                })
                .map(|(id, _)| id),
            EntityKind::Enemy => self.store.find(|entity| matches!(entity, Entity::Enemy(_))),
            other => {
                self.report(
                    AlertLevel::Warning,
                    format!("{other} cannot be collided with"),
                );
                return;
            }
        };
        let Some(second_id) = second_id else {
            self.report(AlertLevel::Warning, format!("no instance of {second}"));
            return;
        };

        self.store.remove(first_id);
        self.store.remove(second_id);
        if first == EntityKind::Player {
            self.reduce_lives();
        }
        self.notify();
    }

    /// Reduce player lives by one, latching game over when they reach
    /// zero. Suppressed entirely once the game is over.
    pub fn reduce_lives(&mut self) {
        if self.phase == GamePhase::GameOver {
            self.report(AlertLevel::Info, "game is already over");
            return;
        }
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            self.report(AlertLevel::Info, "player has run out of lives");
        }
    }

    // --- Frame advancement ---

    /// Advance the world by one frame: every mover translates, missiles
    /// burn one fuel unit and are removed the instant fuel reaches zero
    /// (within the same pass), stations blink, and elapsed time ticks.
    pub fn advance_clock(&mut self) {
        let mut cursor = self.store.cursor();
        while cursor.has_next() {
            let expended = match cursor.advance() {
                Some((_, Entity::Player(ship))) => {
                    ship.advance_frame();
                    false
                }
                Some((_, Entity::Enemy(ship))) => {
                    ship.advance_frame();
                    false
                }
                Some((_, Entity::Asteroid(asteroid))) => {
                    asteroid.advance_frame();
                    false
                }
                Some((_, Entity::Missile(missile))) => {
                    missile.advance_frame();
                    missile.expended()
                }
                Some((_, Entity::Station(station))) => {
                    station.tick_blink();
                    false
                }
                None => false,
            };
            if expended {
                cursor.remove_current();
            }
        }
        self.time.advance();
        self.notify();
    }

    // --- Observation ---

    /// Register an observer called (with no payload) after every
    /// state-changing operation. Observers re-query via [`Self::snapshot`].
    pub fn subscribe(&mut self, observer: impl FnMut() + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Build the complete visible state, draining pending alerts into it.
    /// Game state itself is untouched.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let alerts = std::mem::take(&mut self.alerts);
        let player = self
            .store
            .iter()
            .find_map(|(_, entity)| entity.as_player())
            .map(|player| PlayerView {
                position: player.position,
                heading: player.heading.degrees(),
                speed: player.speed,
                launcher: player.launcher.degrees(),
                missiles: player.missiles,
            });
        let entities = self.store.iter().map(|(_, entity)| view_of(entity)).collect();
        GameStateSnapshot {
            time: self.time,
            phase: self.phase,
            score: self.score,
            lives: self.lives,
            player,
            entities,
            alerts,
        }
    }

    /// The `DisplayGameValues` line; `None` when no player exists.
    pub fn display_values(&self) -> Option<String> {
        self.store
            .iter()
            .find_map(|(_, entity)| entity.as_player())
            .map(|player| {
                format!(
                    "score={} missiles={} elapsed={}",
                    self.score, player.missiles, self.time.frame
                )
            })
    }

    /// Dump every entity's string representation, one per line, in spawn
    /// order.
    pub fn map_report(&self) -> String {
        self.store
            .iter()
            .map(|(_, entity)| entity.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    // --- Accessors ---

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> GameTime {
        self.time
    }

    /// Read-only access to the entity store.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    // --- Internals ---

    fn find_player(&self) -> Option<EntityId> {
        self.store.find(|entity| matches!(entity, Entity::Player(_)))
    }

    fn find_missile(&self, source: MissileSource) -> Option<EntityId> {
        self.store
            .find(move |entity| matches!(entity, Entity::Missile(missile) if missile.source == source))
    }

    fn random_position(&mut self) -> DVec2 {
        DVec2::new(
            self.rng.gen_range(0.0..WORLD_WIDTH),
            self.rng.gen_range(0.0..WORLD_HEIGHT),
        )
    }

    fn random_heading(&mut self) -> Heading {
        Heading::new(self.rng.gen_range(0..360))
    }

    fn report(&mut self, level: AlertLevel, message: impl Into<String>) {
        let message = message.into();
        match level {
            AlertLevel::Warning => log::warn!("{message}"),
            AlertLevel::Info => log::info!("{message}"),
        }
        self.alerts.push(Alert {
            level,
            message,
            frame: self.time.frame,
        });
    }

    fn report_no_player(&mut self) {
        self.report(AlertLevel::Warning, "no player ship has been spawned yet");
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer();
        }
    }
}

fn view_of(entity: &Entity) -> EntityView {
    match entity {
        Entity::Player(ship) => EntityView::Player {
            position: ship.position,
            heading: ship.heading.degrees(),
            speed: ship.speed,
            launcher: ship.launcher.degrees(),
            missiles: ship.missiles,
        },
        Entity::Enemy(ship) => EntityView::Enemy {
            position: ship.position,
            heading: ship.heading.degrees(),
            speed: ship.speed,
            missiles: ship.missiles,
        },
        Entity::Asteroid(asteroid) => EntityView::Asteroid {
            position: asteroid.position,
            heading: asteroid.heading.degrees(),
            speed: asteroid.speed,
        },
        Entity::Missile(missile) => EntityView::Missile {
            source: missile.source,
            position: missile.position,
            heading: missile.heading.degrees(),
            speed: missile.speed,
            fuel: missile.fuel,
        },
        Entity::Station(station) => EntityView::Station {
            position: station.position,
            blink_timer: station.blink_timer,
        },
    }
}
