//! Per-kind stat tables for towers and enemies.
//!
//! Consolidates every balance number that depends on a kind, so the
//! simulation never branches on kind outside of these lookups.

use crate::constants::TICK_RATE;
use crate::enums::{EnemyKind, TowerKind};

/// Stats a freshly placed tower starts with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TowerProfile {
    /// Coins to place the tower; also the base for the sell refund.
    pub cost: u32,
    /// Damage per projectile.
    pub damage: i32,
    /// Reach in cells.
    pub range: u32,
    /// Ticks between shots.
    pub max_cooldown: u32,
    /// Slow applied on hit (ticks); zero for non-slowing towers.
    pub slow_ticks: u32,
}

/// Stat bundle applied by one upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeStep {
    /// Coins the upgrade costs.
    pub cost: u32,
    /// Level the tower reaches.
    pub level: u32,
    /// Damage after the upgrade.
    pub damage: i32,
    /// Slow duration after the upgrade, for kinds that slow.
    pub slow_ticks: Option<u32>,
}

/// Intrinsic stats of an enemy kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    /// Coins credited when killed.
    pub reward: u32,
    /// Base health lost when it reaches the base.
    pub damage: i32,
    /// Travel per tick at full speed.
    pub speed: f32,
    pub max_health: i32,
}

const fn secs_to_ticks(tenths: u32) -> u32 {
    tenths * TICK_RATE / 10
}

/// Get the placement profile for a tower kind.
pub fn tower_profile(kind: TowerKind) -> TowerProfile {
    match kind {
        TowerKind::Arrow => TowerProfile {
            cost: 30,
            damage: 2,
            range: 5,
            max_cooldown: 30,
            slow_ticks: 0,
        },
        TowerKind::Bomb => TowerProfile {
            cost: 40,
            damage: 5,
            range: 4,
            max_cooldown: 60,
            slow_ticks: 0,
        },
        TowerKind::Ice => TowerProfile {
            cost: 25,
            damage: 1,
            range: 4,
            max_cooldown: 20,
            slow_ticks: secs_to_ticks(3),
        },
        TowerKind::Minigun => TowerProfile {
            cost: 300,
            damage: 3,
            range: 4,
            max_cooldown: 5,
            slow_ticks: 0,
        },
    }
}

/// The upgrade available to a tower of `kind` at `level`, or `None` at max level.
pub fn upgrade_step(kind: TowerKind, level: u32) -> Option<UpgradeStep> {
    let (cost, damage, slow_tenths) = match (kind, level) {
        (TowerKind::Arrow, 1) => (20, 4, None),
        (TowerKind::Arrow, 2) => (50, 8, None),
        (TowerKind::Ice, 1) => (60, 2, Some(10)),
        (TowerKind::Ice, 2) => (45, 4, Some(15)),
        (TowerKind::Ice, 3) => (50, 5, Some(20)),
        (TowerKind::Ice, 4) => (130, 10, Some(25)),
        (TowerKind::Minigun, 1) => (200, 7, None),
        (TowerKind::Minigun, 2) => (250, 11, None),
        (TowerKind::Minigun, 3) => (300, 14, None),
        (TowerKind::Minigun, 4) => (400, 20, None),
        _ => return None,
    };
    Some(UpgradeStep {
        cost,
        level: level + 1,
        damage,
        slow_ticks: slow_tenths.map(secs_to_ticks),
    })
}

/// Highest level a tower of `kind` can reach.
pub fn max_level(kind: TowerKind) -> u32 {
    let mut level = 1;
    while upgrade_step(kind, level).is_some() {
        level += 1;
    }
    level
}

/// Get the stat profile for an enemy kind.
pub fn enemy_profile(kind: EnemyKind) -> EnemyProfile {
    match kind {
        EnemyKind::Basic => EnemyProfile {
            reward: 10,
            damage: 1,
            speed: 1.0,
            max_health: 20,
        },
        EnemyKind::Speedy => EnemyProfile {
            reward: 7,
            damage: 2,
            speed: 2.0,
            max_health: 15,
        },
        EnemyKind::Abnormal => EnemyProfile {
            reward: 15,
            damage: 3,
            speed: 1.0,
            max_health: 40,
        },
        EnemyKind::Charged => EnemyProfile {
            reward: 20,
            damage: 5,
            speed: 1.0,
            max_health: 60,
        },
    }
}
