//! End-to-end scenarios driven only through queued commands and snapshots.

use dietolive_sim::core::commands::{PlayerCommand, UpgradeTarget};
use dietolive_sim::core::enums::{SimPhase, TowerKind};
use dietolive_sim::core::events::SimEvent;
use dietolive_sim::core::state::SimSnapshot;
use dietolive_sim::core::types::GridCell;
use dietolive_sim::{SimConfig, SimulationEngine};

/// Tick until `done` holds or `limit` ticks pass.
fn run_until(
    engine: &mut SimulationEngine,
    limit: u32,
    mut done: impl FnMut(&SimSnapshot) -> bool,
) -> Option<SimSnapshot> {
    for _ in 0..limit {
        let snapshot = engine.tick();
        if done(&snapshot) {
            return Some(snapshot);
        }
    }
    None
}

#[test]
fn undefended_base_falls_at_wave_nine() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let mut cleared = Vec::new();

    let mut snapshot = engine.tick();
    while !snapshot.phase.is_terminal() {
        if snapshot.phase == SimPhase::Build {
            engine.queue_command(PlayerCommand::AdvanceWave);
        }
        snapshot = engine.tick();
        for event in &snapshot.events {
            if let SimEvent::WaveCleared { wave, .. } = event {
                cleared.push(*wave);
            }
        }
        assert!(snapshot.time.tick < 20_000, "run should end");
    }

    assert_eq!(snapshot.phase, SimPhase::GameOver);
    assert_eq!(snapshot.economy.wave, 9);
    assert_eq!(snapshot.economy.base_health, 0);
    assert_eq!(cleared, (1..=8).collect::<Vec<_>>());
    // Wave bonuses only: 100 + sum(30 + 15w) for w in 1..=8.
    assert_eq!(snapshot.economy.coins, 880);
}

#[test]
fn defended_first_wave_accounts_for_every_enemy() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_commands([
        PlayerCommand::PlaceTower {
            cell: GridCell::new(12, 6),
            kind: TowerKind::Arrow,
        },
        PlayerCommand::PlaceTower {
            cell: GridCell::new(10, 6),
            kind: TowerKind::Arrow,
        },
        PlayerCommand::PlaceTower {
            cell: GridCell::new(8, 5),
            kind: TowerKind::Arrow,
        },
        PlayerCommand::AdvanceWave,
    ]);

    let mut kills = 0;
    let mut hits = 0;
    let snapshot = run_until(&mut engine, 3000, |snapshot| {
        for event in &snapshot.events {
            match event {
                SimEvent::EnemyKilled { .. } => kills += 1,
                SimEvent::BaseHit { .. } => hits += 1,
                _ => {}
            }
        }
        snapshot
            .events
            .iter()
            .any(|e| matches!(e, SimEvent::WaveCleared { .. }))
    })
    .expect("wave 1 should clear");

    assert_eq!(snapshot.phase, SimPhase::Build);
    assert!(kills > 0, "towers next to the lane should score");
    assert_eq!(kills + hits, 6);
    assert_eq!(snapshot.economy.base_health, 100 - hits);
    // 100 - 90 for towers, 10 per kill, 45 wave bonus.
    assert_eq!(snapshot.economy.coins, 10 + 10 * kills as u32 + 45);
}

#[test]
fn build_commands_apply_while_paused() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let cell = GridCell::new(4, 4);
    engine.queue_commands([
        PlayerCommand::PlaceTower {
            cell,
            kind: TowerKind::Arrow,
        },
        PlayerCommand::Upgrade {
            target: UpgradeTarget::Tower { cell },
        },
    ]);
    let snapshot = engine.tick();

    assert!(snapshot.paused);
    assert_eq!(snapshot.time.tick, 0);
    assert_eq!(snapshot.towers.len(), 1);
    assert_eq!(snapshot.towers[0].level, 2);
    assert_eq!(snapshot.towers[0].upgrade_cost, Some(50));
    assert_eq!(snapshot.economy.coins, 50);
}

#[test]
fn snapshot_serializes_to_json() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.queue_command(PlayerCommand::AdvanceWave);
    let snapshot = run_until(&mut engine, 100, |s| !s.enemies.is_empty()).unwrap();

    let json = serde_json::to_string(&snapshot).unwrap();
    let decoded: SimSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.enemies.len(), snapshot.enemies.len());
    assert!(json.contains(r#""type":"EnemySpawned""#));
}
