#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::commands::PlayerCommand;
    use crate::constants::{MISSILE_FUEL, PLAYER_MAX_MISSILES};
    use crate::entities::{Entity, Missile, PlayerShip, SpaceStation};
    use crate::enums::*;
    use crate::events::Alert;
    use crate::state::{GameStateSnapshot, PlayerView};
    use crate::types::{GameTime, Heading};

    // ---- Heading ----

    #[test]
    fn test_heading_normalizes_on_construction() {
        assert_eq!(Heading::new(360).degrees(), 0);
        assert_eq!(Heading::new(-1).degrees(), 359);
        assert_eq!(Heading::new(725).degrees(), 5);
    }

    #[test]
    fn test_heading_wraps_at_both_ends() {
        // 0 turned left once -> 359
        assert_eq!(Heading::new(0).turn(-1).degrees(), 359);
        // 359 turned right once -> 0
        assert_eq!(Heading::new(359).turn(1).degrees(), 0);
    }

    #[test]
    fn test_heading_stays_in_range_over_long_sequences() {
        let mut heading = Heading::default();
        for step in [-1, 1, -90, 270, 359, -359, 1, 1] {
            heading = heading.turn(step);
            assert!((0..=359).contains(&heading.degrees()));
        }
    }

    #[test]
    fn test_heading_unit_vectors_compass_points() {
        let north = Heading::new(0).unit_vector();
        assert!((north.x - 0.0).abs() < 1e-10 && (north.y - 1.0).abs() < 1e-10);

        let east = Heading::new(90).unit_vector();
        assert!((east.x - 1.0).abs() < 1e-10 && east.y.abs() < 1e-10);

        let south = Heading::new(180).unit_vector();
        assert!(south.x.abs() < 1e-10 && (south.y + 1.0).abs() < 1e-10);

        let west = Heading::new(270).unit_vector();
        assert!((west.x + 1.0).abs() < 1e-10 && west.y.abs() < 1e-10);
    }

    // ---- GameTime ----

    #[test]
    fn test_game_time_advances_by_one() {
        let mut time = GameTime::default();
        assert_eq!(time.frame, 0);
        for _ in 0..5 {
            time.advance();
        }
        assert_eq!(time.frame, 5);
    }

    // ---- Entities ----

    #[test]
    fn test_player_spawn_defaults() {
        let player = PlayerShip::spawn();
        assert_eq!(player.missiles, PLAYER_MAX_MISSILES);
        assert_eq!(player.heading.degrees(), 0);
        assert_eq!(player.speed, 0.0);
    }

    #[test]
    fn test_player_speed_clamps_at_zero() {
        let mut player = PlayerShip::spawn();
        player.adjust_speed(false);
        assert_eq!(player.speed, 0.0);
        player.adjust_speed(true);
        assert_eq!(player.speed, 1.0);
    }

    #[test]
    fn test_launcher_rotates_counter_clockwise_only() {
        let mut player = PlayerShip::spawn();
        player.rotate_launcher(1);
        assert_eq!(player.launcher.degrees(), 359);
        player.rotate_launcher(1);
        assert_eq!(player.launcher.degrees(), 358);
    }

    #[test]
    fn test_missile_burns_one_fuel_per_frame() {
        let mut missile = Missile::launch(
            MissileSource::Player,
            DVec2::ZERO,
            Heading::new(90),
            3.0,
        );
        assert_eq!(missile.fuel, MISSILE_FUEL);
        missile.advance_frame();
        assert_eq!(missile.fuel, MISSILE_FUEL - 1);
        assert!(!missile.expended());
        for _ in 1..MISSILE_FUEL {
            missile.advance_frame();
        }
        assert!(missile.expended());
    }

    #[test]
    fn test_station_blink_timer_increments() {
        let mut station = SpaceStation::new(DVec2::new(100.0, 100.0));
        station.tick_blink();
        station.tick_blink();
        assert_eq!(station.blink_timer, 2);
    }

    #[test]
    fn test_entity_kind_tags() {
        let entity = Entity::Player(PlayerShip::spawn());
        assert_eq!(entity.kind(), EntityKind::Player);
        assert!(entity.as_player().is_some());
        assert!(entity.as_missile().is_none());
    }

    // ---- Serde ----

    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::SpawnPlayer,
            PlayerCommand::ChangeSpeed { speed_up: true },
            PlayerCommand::TurnPlayer { turn_right: false },
            PlayerCommand::FirePlayerMissile,
            PlayerCommand::DestroyTarget {
                kind: EntityKind::Asteroid,
            },
            PlayerCommand::Collision {
                first: EntityKind::Player,
                second: EntityKind::Enemy,
            },
            PlayerCommand::AdvanceGameClock,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_alert_serde() {
        let alert = Alert {
            level: AlertLevel::Warning,
            message: "no player ship has been spawned yet".to_string(),
            frame: 42,
        };
        let json = serde_json::to_string(&alert).unwrap();
        let back: Alert = serde_json::from_str(&json).unwrap();
        assert_eq!(alert.message, back.message);
        assert_eq!(alert.frame, back.frame);
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.frame, back.time.frame);
        assert_eq!(snapshot.phase, back.phase);
    }

    #[test]
    fn test_status_line_requires_player() {
        let mut snapshot = GameStateSnapshot::default();
        assert!(snapshot.status_line().is_none());

        snapshot.score = 30;
        snapshot.player = Some(PlayerView {
            position: DVec2::ZERO,
            heading: 0,
            speed: 0.0,
            launcher: 0,
            missiles: 7,
        });
        let line = snapshot.status_line().unwrap();
        assert!(line.contains("score=30"));
        assert!(line.contains("missiles=7"));
    }
}
