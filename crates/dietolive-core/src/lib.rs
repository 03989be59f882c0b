//! Core types and definitions for the Die to Live simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, the lane and its placement grid, components, stat profiles,
//! commands, events, state snapshots, errors, and constants.
//! It has no dependency on any runtime or rendering framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod path;
pub mod profiles;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
