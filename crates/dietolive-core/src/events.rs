//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::commands::PlayerCommand;
use crate::enums::{EnemyKind, TowerKind};
use crate::error::CommandError;
use crate::types::GridCell;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    TowerPlaced {
        cell: GridCell,
        kind: TowerKind,
        cost: u32,
    },
    TowerUpgraded {
        cell: GridCell,
        level: u32,
        cost: u32,
    },
    TowerSold {
        cell: GridCell,
        refund: u32,
    },
    ClickUpgraded {
        level: u32,
        damage: i32,
    },
    EnemySpawned {
        serial: u64,
        kind: EnemyKind,
    },
    EnemyKilled {
        serial: u64,
        kind: EnemyKind,
        reward: u32,
    },
    /// An enemy walked into the base.
    BaseHit {
        serial: u64,
        damage: i32,
        base_health: i32,
    },
    WaveStarted {
        wave: u32,
        enemies: u32,
    },
    WaveCleared {
        wave: u32,
        bonus: u32,
    },
    /// The base fell late in the run; the PHASE2 ramp began.
    Phase2Started {
        wave: u32,
    },
    Phase2Entered,
    GameOver {
        wave: u32,
    },
    Victory {
        wave: u32,
    },
    Paused,
    Resumed,
    GameReset,
    /// A queued command could not be applied.
    CommandRejected {
        command: PlayerCommand,
        error: CommandError,
    },
}
