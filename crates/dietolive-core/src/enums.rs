//! Enumeration types used throughout the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tower kinds the player can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    /// Long range, steady fire.
    Arrow,
    /// Heavy, slow shots. Cannot be upgraded.
    Bomb,
    /// Weak shots that slow the target.
    Ice,
    /// Very fast fire at a premium price.
    Minigun,
}

impl TowerKind {
    pub const ALL: [TowerKind; 4] = [
        TowerKind::Arrow,
        TowerKind::Bomb,
        TowerKind::Ice,
        TowerKind::Minigun,
    ];
}

impl fmt::Display for TowerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TowerKind::Arrow => "Arrow Tower",
            TowerKind::Bomb => "Bomb Tower",
            TowerKind::Ice => "Ice Tower",
            TowerKind::Minigun => "Minigunner",
        };
        f.write_str(name)
    }
}

/// Enemy kinds, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Basic,
    /// Fast but fragile.
    Speedy,
    Abnormal,
    /// Tough and hits the base hard.
    Charged,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 4] = [
        EnemyKind::Basic,
        EnemyKind::Speedy,
        EnemyKind::Abnormal,
        EnemyKind::Charged,
    ];
}

/// Top-level simulation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// Between waves; towers may be placed freely.
    #[default]
    Build,
    /// A wave is spawning or still alive.
    Combat,
    /// Endgame mode entered after losing the base late in the run.
    Phase2,
    /// The base fell before the PHASE2 threshold. Terminal.
    GameOver,
    /// The final wave was reached. Terminal.
    Win,
}

impl SimPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SimPhase::GameOver | SimPhase::Win)
    }
}

/// Why a cell cannot take a tower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementIssue {
    OutOfBounds,
    OnPath,
    Occupied,
}

impl fmt::Display for PlacementIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            PlacementIssue::OutOfBounds => "out of bounds",
            PlacementIssue::OnPath => "on the enemy path",
            PlacementIssue::Occupied => "already occupied",
        };
        f.write_str(text)
    }
}

/// Cosmetic tint of a particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Enemy death or base impact.
    Blood,
    /// Projectile impact, tinted by the firing tower.
    Impact(TowerKind),
    /// PHASE2 click that hit an enemy.
    Spark,
    /// PHASE2 click that hit nothing.
    Miss,
    /// PHASE2 entry burst.
    Phase2,
}
