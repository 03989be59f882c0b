//! Scripted player for headless runs.
//!
//! Reads a snapshot and answers with commands: in BUILD it spends coins on
//! towers beside the lane and on upgrades, then starts the next wave; in
//! PHASE2 it clicks the enemy closest to the base and buys click damage.

use std::collections::BTreeSet;

use dietolive_core::commands::{PlayerCommand, UpgradeTarget};
use dietolive_core::constants::{CLICK_UPGRADE_COST, GRID_SIZE};
use dietolive_core::enums::{SimPhase, TowerKind};
use dietolive_core::profiles::tower_profile;
use dietolive_core::state::SimSnapshot;
use dietolive_core::types::GridCell;

/// Tower kinds bought in turn while coins allow.
const BUILD_ORDER: [TowerKind; 4] = [
    TowerKind::Arrow,
    TowerKind::Bomb,
    TowerKind::Arrow,
    TowerKind::Ice,
];

/// Coins kept back for an upgrade before a Minigun is bought.
const MINIGUN_RESERVE: u32 = 100;

#[derive(Debug, Default)]
pub struct Autopilot {
    /// Wave for which the BUILD turn has been played.
    built_for_wave: Option<u32>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands to send in response to `snapshot`.
    pub fn decide(&mut self, snapshot: &SimSnapshot) -> Vec<PlayerCommand> {
        match snapshot.phase {
            SimPhase::Build => self.build_turn(snapshot),
            SimPhase::Phase2 => phase2_turn(snapshot),
            SimPhase::Combat | SimPhase::GameOver | SimPhase::Win => Vec::new(),
        }
    }

    fn build_turn(&mut self, snapshot: &SimSnapshot) -> Vec<PlayerCommand> {
        let wave = snapshot.economy.wave;
        if self.built_for_wave == Some(wave) {
            return Vec::new();
        }
        self.built_for_wave = Some(wave);

        let mut coins = snapshot.economy.coins;
        let mut commands = Vec::new();
        let mut free = placement_candidates(snapshot).into_iter();
        let mut placed = snapshot.towers.len();

        loop {
            let kind = if coins >= tower_profile(TowerKind::Minigun).cost + MINIGUN_RESERVE {
                TowerKind::Minigun
            } else {
                BUILD_ORDER[placed % BUILD_ORDER.len()]
            };
            let cost = tower_profile(kind).cost;
            if coins < cost {
                break;
            }
            let Some(cell) = free.next() else { break };
            commands.push(PlayerCommand::PlaceTower { cell, kind });
            coins -= cost;
            placed += 1;
        }

        let mut upgradable: Vec<_> = snapshot
            .towers
            .iter()
            .filter_map(|tower| tower.upgrade_cost.map(|cost| (cost, tower.cell)))
            .collect();
        upgradable.sort_unstable();
        for (cost, cell) in upgradable {
            if coins < cost {
                break;
            }
            commands.push(PlayerCommand::Upgrade {
                target: UpgradeTarget::Tower { cell },
            });
            coins -= cost;
        }

        commands.push(PlayerCommand::AdvanceWave);
        commands
    }
}

fn phase2_turn(snapshot: &SimSnapshot) -> Vec<PlayerCommand> {
    let mut commands = Vec::new();
    if snapshot.economy.coins >= CLICK_UPGRADE_COST * 2 {
        commands.push(PlayerCommand::Upgrade {
            target: UpgradeTarget::ClickDamage,
        });
    }
    let front = snapshot
        .enemies
        .iter()
        .max_by_key(|enemy| (enemy.path_index, std::cmp::Reverse(enemy.serial)));
    match front {
        Some(enemy) => commands.push(PlayerCommand::ClickAt {
            x: enemy.position.x,
            y: enemy.position.y,
        }),
        None => commands.push(PlayerCommand::AdvanceWave),
    }
    commands
}

/// Free cells beside the lane, those covering the most lane cells first.
pub fn placement_candidates(snapshot: &SimSnapshot) -> Vec<GridCell> {
    let lane: BTreeSet<GridCell> = snapshot.lane.iter().copied().collect();
    let occupied: BTreeSet<GridCell> = snapshot.towers.iter().map(|tower| tower.cell).collect();

    let mut scored: Vec<(usize, GridCell)> = Vec::new();
    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let cell = GridCell::new(x, y);
            if lane.contains(&cell) || occupied.contains(&cell) {
                continue;
            }
            let nearby = lane
                .iter()
                .filter(|lane_cell| {
                    (lane_cell.x - x).abs() <= 2 && (lane_cell.y - y).abs() <= 2
                })
                .count();
            let touches_lane = lane
                .iter()
                .any(|lane_cell| (lane_cell.x - x).abs() <= 1 && (lane_cell.y - y).abs() <= 1);
            if touches_lane {
                scored.push((nearby, cell));
            }
        }
    }
    scored.sort_unstable_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    scored.into_iter().map(|(_, cell)| cell).collect()
}
