//! Coin balance, base health and PHASE2 click damage.
//!
//! Every spend goes through `Economy::spend`, which checks affordability
//! before touching the balance, so coins can never underflow.

use dietolive_core::constants::*;
use dietolive_core::error::CommandError;
use dietolive_core::state::EconomyView;

/// Player resources.
#[derive(Debug, Clone, PartialEq)]
pub struct Economy {
    coins: u32,
    base_health: i32,
    click_damage: i32,
    click_level: u32,
}

impl Default for Economy {
    fn default() -> Self {
        Self {
            coins: START_COINS,
            base_health: BASE_HEALTH,
            click_damage: CLICK_BASE_DAMAGE,
            click_level: 0,
        }
    }
}

impl Economy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }

    pub fn base_health(&self) -> i32 {
        self.base_health
    }

    pub fn click_damage(&self) -> i32 {
        self.click_damage
    }

    pub fn click_level(&self) -> u32 {
        self.click_level
    }

    pub fn can_afford(&self, cost: u32) -> bool {
        self.coins >= cost
    }

    /// Deduct `cost` if affordable; otherwise leave the balance untouched.
    pub fn spend(&mut self, cost: u32) -> Result<(), CommandError> {
        if !self.can_afford(cost) {
            return Err(CommandError::InsufficientFunds {
                needed: cost,
                available: self.coins,
            });
        }
        self.coins -= cost;
        Ok(())
    }

    pub fn credit(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount);
    }

    /// Subtract `damage` from the base and return the remaining health.
    pub fn damage_base(&mut self, damage: i32) -> i32 {
        self.base_health -= damage;
        self.base_health
    }

    pub(crate) fn set_base_health(&mut self, health: i32) {
        self.base_health = health;
    }

    /// Buy one click-damage level.
    pub fn upgrade_click(&mut self) -> Result<i32, CommandError> {
        self.spend(CLICK_UPGRADE_COST)?;
        self.click_level += 1;
        self.click_damage = click_damage_for_level(self.click_level);
        Ok(self.click_damage)
    }

    /// Back to level-0 click damage (on entering PHASE2).
    pub fn reset_click(&mut self) {
        self.click_level = 0;
        self.click_damage = CLICK_BASE_DAMAGE;
    }

    pub fn view(&self, wave: u32, pending_spawns: u32) -> EconomyView {
        EconomyView {
            coins: self.coins,
            base_health: self.base_health,
            wave,
            pending_spawns,
            click_damage: self.click_damage,
            click_level: self.click_level,
        }
    }
}

/// Coins credited when wave `wave` is cleared.
pub fn wave_clear_bonus(wave: u32) -> u32 {
    WAVE_CLEAR_BONUS_BASE + WAVE_CLEAR_BONUS_PER_WAVE * wave
}

/// Click damage at a given upgrade level.
pub fn click_damage_for_level(level: u32) -> i32 {
    CLICK_BASE_DAMAGE + CLICK_DAMAGE_PER_LEVEL * level as i32
}
