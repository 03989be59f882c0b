//! Wave and phase state machine.
//!
//! BUILD -> COMBAT on an explicit wave start, COMBAT -> BUILD once the wave
//! is spawned out and dead, a timed ramp into PHASE2 when the base falls
//! late in the run, and the GAME_OVER / WIN terminal states. Pure data; the
//! engine feeds it observations and applies the returned outcomes.

use dietolive_core::constants::*;
use dietolive_core::enums::SimPhase;
use dietolive_core::error::CommandError;

/// What losing the base led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseOutcome {
    /// The PHASE2 ramp started; the base is restored.
    Phase2Ramp,
    /// The run is over.
    GameOver,
    /// A ramp is already running; nothing re-triggers.
    Absorbed,
}

/// Wave counter, spawn bookkeeping and the current phase.
#[derive(Debug, Clone, PartialEq)]
pub struct Progression {
    phase: SimPhase,
    paused: bool,
    wave: u32,
    pending_spawns: u32,
    spawn_timer: u32,
    /// Ticks elapsed in the PHASE2 ramp, while it runs.
    phase2_ramp: Option<u32>,
}

impl Default for Progression {
    fn default() -> Self {
        Self {
            phase: SimPhase::Build,
            paused: true,
            wave: 0,
            pending_spawns: 0,
            spawn_timer: 0,
            phase2_ramp: None,
        }
    }
}

impl Progression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn pending_spawns(&self) -> u32 {
        self.pending_spawns
    }

    pub fn is_ramping(&self) -> bool {
        self.phase2_ramp.is_some()
    }

    /// PHASE2 ramp progress in 0..=1, if the ramp is running.
    pub fn phase2_progress(&self) -> Option<f32> {
        self.phase2_ramp
            .map(|ticks| ticks as f32 / PHASE2_RAMP_TICKS as f32)
    }

    /// Start the next wave. Allowed from BUILD and PHASE2.
    pub fn start_next_wave(&mut self) -> Result<u32, CommandError> {
        if !matches!(self.phase, SimPhase::Build | SimPhase::Phase2) {
            return Err(self.rejected("AdvanceWave"));
        }
        self.wave += 1;
        self.pending_spawns = WAVE_BASE_SPAWNS + self.wave;
        self.spawn_timer = 0;
        self.phase = SimPhase::Combat;
        self.paused = false;
        Ok(self.pending_spawns)
    }

    /// Flip the pause flag of a running wave. Returns the new flag.
    pub fn toggle_pause(&mut self) -> Result<bool, CommandError> {
        if !matches!(self.phase, SimPhase::Combat | SimPhase::Phase2) {
            return Err(self.rejected("TogglePause"));
        }
        self.paused = !self.paused;
        Ok(self.paused)
    }

    /// Advance the spawn timer. Returns true when an enemy is due, having
    /// already counted it off the pending total.
    pub fn spawn_due(&mut self) -> bool {
        if self.phase != SimPhase::Combat || self.pending_spawns == 0 {
            return false;
        }
        self.spawn_timer += 1;
        if self.spawn_timer < SPAWN_INTERVAL_TICKS {
            return false;
        }
        self.spawn_timer = 0;
        self.pending_spawns -= 1;
        true
    }

    /// Close the wave if it is spawned out and no enemy is alive.
    /// Returns the cleared wave number.
    pub fn try_clear_wave(&mut self, live_enemies: usize) -> Option<u32> {
        if self.phase != SimPhase::Combat
            || self.is_ramping()
            || live_enemies > 0
            || self.pending_spawns > 0
        {
            return None;
        }
        self.phase = SimPhase::Build;
        self.paused = true;
        Some(self.wave)
    }

    /// The base health dropped to zero or below.
    pub fn base_destroyed(&mut self) -> BaseOutcome {
        if self.is_ramping() {
            return BaseOutcome::Absorbed;
        }
        if self.wave >= PHASE2_WAVE_THRESHOLD {
            self.phase2_ramp = Some(0);
            BaseOutcome::Phase2Ramp
        } else {
            self.phase = SimPhase::GameOver;
            self.paused = true;
            BaseOutcome::GameOver
        }
    }

    /// Step the PHASE2 ramp. Returns true on the tick PHASE2 is entered.
    pub fn advance_phase2_ramp(&mut self) -> bool {
        let Some(ticks) = self.phase2_ramp.as_mut() else {
            return false;
        };
        *ticks += 1;
        if *ticks < PHASE2_RAMP_TICKS {
            return false;
        }
        self.phase2_ramp = None;
        if self.phase.is_terminal() {
            return false;
        }
        self.phase = SimPhase::Phase2;
        true
    }

    /// Force WIN once the final wave is reached. Returns true on the
    /// transition.
    pub fn check_victory(&mut self) -> bool {
        if self.wave < WIN_WAVE || self.phase == SimPhase::Win {
            return false;
        }
        self.phase = SimPhase::Win;
        self.paused = true;
        self.phase2_ramp = None;
        true
    }

    fn rejected(&self, command: &str) -> CommandError {
        CommandError::InvalidTransition {
            command: command.to_string(),
            phase: self.phase,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_wave(&mut self, wave: u32) {
        self.wave = wave;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave_start_sets_counters_and_unpauses() {
        let mut progression = Progression::new();
        assert!(progression.is_paused());
        assert_eq!(progression.start_next_wave(), Ok(6));
        assert_eq!(progression.wave(), 1);
        assert_eq!(progression.phase(), SimPhase::Combat);
        assert!(!progression.is_paused());
        assert!(progression.start_next_wave().is_err());
    }

    #[test]
    fn spawns_every_thirty_ticks_until_exhausted() {
        let mut progression = Progression::new();
        progression.start_next_wave().unwrap();
        let due: Vec<u32> = (1..=400)
            .filter(|_| progression.spawn_due())
            .collect();
        assert_eq!(due, vec![30, 60, 90, 120, 150, 180]);
        assert_eq!(progression.pending_spawns(), 0);
    }

    #[test]
    fn wave_clears_only_when_spawned_out_and_empty() {
        let mut progression = Progression::new();
        progression.start_next_wave().unwrap();
        assert_eq!(progression.try_clear_wave(0), None);
        while progression.pending_spawns() > 0 {
            progression.spawn_due();
        }
        assert_eq!(progression.try_clear_wave(2), None);
        assert_eq!(progression.try_clear_wave(0), Some(1));
        assert_eq!(progression.phase(), SimPhase::Build);
        assert!(progression.is_paused());
    }

    #[test]
    fn base_loss_before_threshold_ends_the_run() {
        let mut progression = Progression::new();
        progression.set_wave(19);
        assert_eq!(progression.base_destroyed(), BaseOutcome::GameOver);
        assert_eq!(progression.phase(), SimPhase::GameOver);
        assert!(progression.start_next_wave().is_err());
    }

    #[test]
    fn phase2_ramp_runs_fifty_ticks_and_restarts_on_later_losses() {
        let mut progression = Progression::new();
        progression.set_wave(19);
        progression.start_next_wave().unwrap();
        assert_eq!(progression.base_destroyed(), BaseOutcome::Phase2Ramp);
        assert_eq!(progression.base_destroyed(), BaseOutcome::Absorbed);

        let entered_at = (1..=PHASE2_RAMP_TICKS)
            .find(|_| progression.advance_phase2_ramp())
            .unwrap();
        assert_eq!(entered_at, PHASE2_RAMP_TICKS);
        assert_eq!(progression.phase(), SimPhase::Phase2);
        assert_eq!(progression.phase2_progress(), None);

        progression.start_next_wave().unwrap();
        assert_eq!(progression.wave(), 21);
        assert_eq!(progression.base_destroyed(), BaseOutcome::Phase2Ramp);
        assert_eq!(progression.phase2_progress(), Some(0.0));
    }

    #[test]
    fn victory_overrides_any_phase() {
        let mut progression = Progression::new();
        progression.set_wave(39);
        progression.start_next_wave().unwrap();
        assert!(progression.check_victory());
        assert_eq!(progression.phase(), SimPhase::Win);
        assert!(!progression.check_victory());
    }
}
