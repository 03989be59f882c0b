//! Player commands sent from the presentation layer to the simulation.
//!
//! Commands are queued and applied at the start of the next tick, never
//! in the middle of one.

use serde::{Deserialize, Serialize};

use crate::enums::TowerKind;
use crate::types::GridCell;

/// What an upgrade command applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "target")]
pub enum UpgradeTarget {
    /// The tower standing on `cell`.
    Tower { cell: GridCell },
    /// The PHASE2 click damage.
    ClickDamage,
}

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Building ---
    /// Buy a tower and place it on a free cell.
    PlaceTower { cell: GridCell, kind: TowerKind },
    /// Buy the next upgrade level.
    Upgrade { target: UpgradeTarget },
    /// Remove a tower for a partial refund.
    SellTower { cell: GridCell },

    // --- Flow ---
    /// Start the next wave.
    AdvanceWave,
    /// Pause or resume a running wave.
    TogglePause,
    /// Damage everything near a playfield point (PHASE2 only).
    ClickAt { x: f32, y: f32 },
    /// Start over after the run has ended.
    Reset,
}

impl PlayerCommand {
    /// Short name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            PlayerCommand::PlaceTower { .. } => "PlaceTower",
            PlayerCommand::Upgrade { .. } => "Upgrade",
            PlayerCommand::SellTower { .. } => "SellTower",
            PlayerCommand::AdvanceWave => "AdvanceWave",
            PlayerCommand::TogglePause => "TogglePause",
            PlayerCommand::ClickAt { .. } => "ClickAt",
            PlayerCommand::Reset => "Reset",
        }
    }
}
