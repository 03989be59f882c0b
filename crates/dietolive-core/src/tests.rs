#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::{PlayerCommand, UpgradeTarget};
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::CommandError;
    use crate::events::SimEvent;
    use crate::profiles::{enemy_profile, max_level, tower_profile, upgrade_step};
    use crate::state::SimSnapshot;
    use crate::types::{on_playfield, GridCell, SimTime};

    // ---- Commands and events on the wire ----

    #[test]
    fn test_command_json_is_tagged() {
        let cmd = PlayerCommand::PlaceTower {
            cell: GridCell::new(3, 4),
            kind: TowerKind::Ice,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(
            json,
            r#"{"type":"PlaceTower","cell":{"x":3,"y":4},"kind":"Ice"}"#
        );

        let upgrade: PlayerCommand =
            serde_json::from_str(r#"{"type":"Upgrade","target":{"target":"ClickDamage"}}"#)
                .unwrap();
        assert_eq!(
            upgrade,
            PlayerCommand::Upgrade {
                target: UpgradeTarget::ClickDamage
            }
        );
    }

    #[test]
    fn test_rejection_event_carries_command_and_error() {
        let event = SimEvent::CommandRejected {
            command: PlayerCommand::AdvanceWave,
            error: CommandError::InvalidTransition {
                command: "AdvanceWave".into(),
                phase: SimPhase::GameOver,
            },
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: SimEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let json = serde_json::to_string(&SimSnapshot::default()).unwrap();
        assert!(json.contains(r#""phase":"Build""#));
    }

    #[test]
    fn test_command_error_messages() {
        let err = CommandError::InvalidPlacement {
            cell: GridCell::new(13, 7),
            reason: PlacementIssue::OnPath,
        };
        assert_eq!(
            err.to_string(),
            "cannot place a tower at (13, 7): on the enemy path"
        );
        let err = CommandError::InsufficientFunds {
            needed: 300,
            available: 70,
        };
        assert_eq!(err.to_string(), "insufficient funds: need 300, have 70");
    }

    // ---- Geometry ----

    #[test]
    fn test_cell_center_and_containing() {
        let cell = GridCell::new(2, 3);
        assert_eq!(cell.center(), Vec2::new(125.0, 175.0));
        assert_eq!(GridCell::containing(cell.center()), cell);
        assert_eq!(
            GridCell::containing(Vec2::new(-0.5, 10.0)),
            GridCell::new(-1, 0)
        );
        assert!(!GridCell::new(GRID_SIZE, 0).in_bounds());
        assert!(GridCell::new(GRID_SIZE - 1, GRID_SIZE - 1).in_bounds());
    }

    #[test]
    fn test_playfield_bounds() {
        assert!(on_playfield(Vec2::new(0.0, 0.0)));
        assert!(on_playfield(Vec2::new(PLAYFIELD_SIZE, PLAYFIELD_SIZE)));
        assert!(!on_playfield(Vec2::new(-1.0, 10.0)));
        assert!(!on_playfield(Vec2::new(10.0, PLAYFIELD_SIZE + 0.5)));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-12);
    }

    // ---- Profiles ----

    #[test]
    fn test_tower_base_stats() {
        assert_eq!(tower_profile(TowerKind::Arrow).cost, 30);
        assert_eq!(tower_profile(TowerKind::Bomb).cost, 40);
        assert_eq!(tower_profile(TowerKind::Ice).cost, 25);
        assert_eq!(tower_profile(TowerKind::Minigun).cost, 300);
        assert_eq!(tower_profile(TowerKind::Ice).slow_ticks, 18);
        assert_eq!(tower_profile(TowerKind::Minigun).max_cooldown, 5);
    }

    #[test]
    fn test_upgrade_tables_terminate() {
        assert_eq!(max_level(TowerKind::Arrow), 3);
        assert_eq!(max_level(TowerKind::Bomb), 1);
        assert_eq!(max_level(TowerKind::Ice), 5);
        assert_eq!(max_level(TowerKind::Minigun), 5);
        for kind in TowerKind::ALL {
            assert!(upgrade_step(kind, max_level(kind)).is_none());
        }
    }

    #[test]
    fn test_upgrade_steps_raise_level_and_damage() {
        for kind in TowerKind::ALL {
            let mut damage = tower_profile(kind).damage;
            for level in 1..max_level(kind) {
                let step = upgrade_step(kind, level).unwrap();
                assert_eq!(step.level, level + 1);
                assert!(step.damage > damage, "{kind} level {level}");
                assert!(step.cost > 0);
                damage = step.damage;
            }
        }
    }

    #[test]
    fn test_ice_upgrades_extend_slow() {
        let slows: Vec<u32> = (1..5)
            .filter_map(|l| upgrade_step(TowerKind::Ice, l))
            .filter_map(|s| s.slow_ticks)
            .collect();
        assert_eq!(slows, vec![60, 90, 120, 150]);
        assert_eq!(upgrade_step(TowerKind::Arrow, 1).unwrap().slow_ticks, None);
    }

    #[test]
    fn test_enemy_profiles() {
        let speedy = enemy_profile(EnemyKind::Speedy);
        assert_eq!(speedy.speed, 2.0);
        assert_eq!(speedy.max_health, 15);
        let charged = enemy_profile(EnemyKind::Charged);
        assert_eq!(charged.reward, 20);
        assert_eq!(charged.damage, 5);
    }

    #[test]
    fn test_phase_terminality() {
        assert!(SimPhase::GameOver.is_terminal());
        assert!(SimPhase::Win.is_terminal());
        assert!(!SimPhase::Phase2.is_terminal());
        assert_eq!(SimPhase::default(), SimPhase::Build);
    }
}
