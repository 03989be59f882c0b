//! Error types reported by the lane builder and the command handlers.
//!
//! None of these are fatal: a rejected command leaves the simulation
//! untouched and is surfaced to the caller as a diagnostic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::{PlacementIssue, SimPhase};
use crate::types::GridCell;

/// Why a player command was not applied.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CommandError {
    #[error("cannot place a tower at {cell}: {reason}")]
    InvalidPlacement {
        cell: GridCell,
        reason: PlacementIssue,
    },
    #[error("insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: u32, available: u32 },
    #[error("{command} is not allowed during {phase:?}")]
    InvalidTransition {
        command: String,
        phase: SimPhase,
    },
    #[error("no tower at {cell}")]
    NoTowerAt { cell: GridCell },
    #[error("tower at {cell} is already at max level")]
    MaxLevel { cell: GridCell },
}

/// Why a lane could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("a lane needs at least two waypoints, got {len}")]
    TooShort { len: usize },
    #[error("waypoint {cell} lies outside the board")]
    OutOfBounds { cell: GridCell },
    #[error("waypoint {index} repeats {cell}")]
    RepeatedWaypoint { index: usize, cell: GridCell },
}
