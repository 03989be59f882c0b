//! Tower data model.
//!
//! Stored in `SimulationEngine`'s tower map keyed by cell, NOT as ECS
//! entities. The map is ordered, so towers always fire in cell order.

use dietolive_core::constants::{CELL_SIZE, SELL_REFUND_DENOMINATOR, SELL_REFUND_NUMERATOR};
use dietolive_core::enums::TowerKind;
use dietolive_core::profiles::{tower_profile, upgrade_step, UpgradeStep};

/// A placed tower.
#[derive(Debug, Clone, PartialEq)]
pub struct Tower {
    pub kind: TowerKind,
    pub damage: i32,
    /// Reach in cells.
    pub range: u32,
    /// Placement cost; the sell refund is based on it.
    pub cost: u32,
    pub level: u32,
    /// Ticks until the tower may fire again.
    pub cooldown: u32,
    pub max_cooldown: u32,
    /// Slow applied by this tower's shots (ticks).
    pub slow_ticks: u32,
}

impl Tower {
    /// A level-1 tower of the given kind, ready to fire.
    pub fn new(kind: TowerKind) -> Self {
        let profile = tower_profile(kind);
        Self {
            kind,
            damage: profile.damage,
            range: profile.range,
            cost: profile.cost,
            level: 1,
            cooldown: 0,
            max_cooldown: profile.max_cooldown,
            slow_ticks: profile.slow_ticks,
        }
    }

    /// The next upgrade, or `None` at max level.
    pub fn next_upgrade(&self) -> Option<UpgradeStep> {
        upgrade_step(self.kind, self.level)
    }

    /// Cost of the next upgrade, or `None` at max level.
    pub fn upgrade_cost(&self) -> Option<u32> {
        self.next_upgrade().map(|step| step.cost)
    }

    /// Apply an upgrade step. Callers must have charged for it.
    pub(crate) fn apply_upgrade(&mut self, step: UpgradeStep) {
        self.level = step.level;
        self.damage = step.damage;
        if let Some(slow_ticks) = step.slow_ticks {
            self.slow_ticks = slow_ticks;
        }
    }

    /// Coins returned on sale: floor(cost * 0.6).
    pub fn sell_value(&self) -> u32 {
        self.cost * SELL_REFUND_NUMERATOR / SELL_REFUND_DENOMINATOR
    }

    /// Reach in world units.
    pub fn range_units(&self) -> f32 {
        self.range as f32 * CELL_SIZE
    }
}
