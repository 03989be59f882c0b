//! Simulation engine for the tower-defense core.
//!
//! `SimulationEngine` owns the hecs world (enemies, projectiles, particles),
//! the tower map, the economy and the wave/phase progression. Commands are
//! queued and applied at the start of each tick; systems then run in a
//! fixed order. Completely headless, so every behavior is testable without
//! a renderer.

use std::collections::{BTreeMap, VecDeque};

use glam::Vec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use dietolive_core::commands::{PlayerCommand, UpgradeTarget};
use dietolive_core::constants::{PHASE2_BURST_PARTICLES, PLAYFIELD_SIZE};
use dietolive_core::enums::{EffectKind, PlacementIssue, SimPhase, TowerKind};
use dietolive_core::error::CommandError;
use dietolive_core::events::SimEvent;
use dietolive_core::path::{Path, PlacementGrid};
use dietolive_core::state::SimSnapshot;
use dietolive_core::types::{GridCell, SimTime};

use crate::economy::{wave_clear_bonus, Economy};
use crate::progression::Progression;
use crate::systems;
use crate::systems::damage::Ledger;
use crate::systems::snapshot::SnapshotSource;
use crate::tower::Tower;
use crate::world_setup;

/// Mixed into the seed for the cosmetic generator.
const FX_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed. Same seed and same commands give the same run.
    pub seed: u64,
    /// The lane enemies walk.
    pub path: Path,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            path: Path::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    seed: u64,
    path: Path,
    placement: PlacementGrid,
    towers: BTreeMap<GridCell, Tower>,
    economy: Economy,
    progression: Progression,
    /// Gameplay draws (enemy kinds).
    rng: ChaCha8Rng,
    /// Particle draws.
    fx_rng: ChaCha8Rng,
    next_enemy_serial: u64,
    next_projectile_serial: u64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    arrivals: Vec<(u64, Entity)>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create an engine in the start state: BUILD, paused, wave 0.
    pub fn new(config: SimConfig) -> Self {
        let placement = config.path.placement_grid();
        Self {
            world: World::new(),
            time: SimTime::default(),
            seed: config.seed,
            path: config.path,
            placement,
            towers: BTreeMap::new(),
            economy: Economy::new(),
            progression: Progression::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            fx_rng: ChaCha8Rng::seed_from_u64(config.seed ^ FX_SEED_SALT),
            next_enemy_serial: 0,
            next_projectile_serial: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            arrivals: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Apply queued commands without ticking. The driver calls this while
    /// paused so that resume and build commands still take effect.
    pub fn apply_pending_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        self.apply_pending_commands();

        if !self.progression.is_paused() {
            self.run_systems();
            self.time.advance();
        }
        self.check_victory();

        self.snapshot()
    }

    /// Snapshot of the current state, draining the pending events.
    pub fn snapshot(&mut self) -> SimSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            SnapshotSource {
                world: &self.world,
                time: self.time,
                path: &self.path,
                towers: &self.towers,
                economy: &self.economy,
                progression: &self.progression,
            },
            events,
        )
    }

    pub fn phase(&self) -> SimPhase {
        self.progression.phase()
    }

    pub fn is_paused(&self) -> bool {
        self.progression.is_paused()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn towers(&self) -> &BTreeMap<GridCell, Tower> {
        &self.towers
    }

    pub fn tower_at(&self, cell: GridCell) -> Option<&Tower> {
        self.towers.get(&cell)
    }

    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    /// Why a tower cannot go on `cell`, if it cannot.
    pub fn check_placement(&self, cell: GridCell) -> Result<(), PlacementIssue> {
        if !cell.in_bounds() {
            Err(PlacementIssue::OutOfBounds)
        } else if self.placement.is_path(cell) {
            Err(PlacementIssue::OnPath)
        } else if self.towers.contains_key(&cell) {
            Err(PlacementIssue::Occupied)
        } else {
            Ok(())
        }
    }

    /// In bounds, off the lane and unoccupied.
    pub fn is_valid_placement(&self, cell: GridCell) -> bool {
        self.check_placement(cell).is_ok()
    }

    // --- Direct commands ---
    //
    // Each applies immediately and reports failure; a failed command leaves
    // the state untouched. Queued commands go through the same methods.

    /// Buy a level-1 tower and place it on `cell`.
    pub fn place_tower(&mut self, cell: GridCell, kind: TowerKind) -> Result<(), CommandError> {
        self.reject_if_over("PlaceTower")?;
        self.check_placement(cell)
            .map_err(|reason| CommandError::InvalidPlacement { cell, reason })?;
        let tower = Tower::new(kind);
        let cost = tower.cost;
        self.economy.spend(cost)?;
        self.towers.insert(cell, tower);
        self.events.push(SimEvent::TowerPlaced { cell, kind, cost });
        log::debug!("placed {kind} at {cell} for {cost} coins");
        Ok(())
    }

    /// Buy the next level of a tower or of the click damage.
    pub fn upgrade(&mut self, target: UpgradeTarget) -> Result<(), CommandError> {
        match target {
            UpgradeTarget::Tower { cell } => {
                self.reject_if_over("Upgrade")?;
                let tower = self
                    .towers
                    .get_mut(&cell)
                    .ok_or(CommandError::NoTowerAt { cell })?;
                let step = tower.next_upgrade().ok_or(CommandError::MaxLevel { cell })?;
                self.economy.spend(step.cost)?;
                tower.apply_upgrade(step);
                self.events.push(SimEvent::TowerUpgraded {
                    cell,
                    level: step.level,
                    cost: step.cost,
                });
                log::debug!("upgraded tower at {cell} to level {}", step.level);
            }
            UpgradeTarget::ClickDamage => {
                if self.progression.phase() != SimPhase::Phase2 {
                    return Err(self.invalid_transition("Upgrade"));
                }
                let damage = self.economy.upgrade_click()?;
                self.events.push(SimEvent::ClickUpgraded {
                    level: self.economy.click_level(),
                    damage,
                });
            }
        }
        Ok(())
    }

    /// Remove the tower on `cell` for floor(cost * 0.6) coins.
    pub fn sell_tower(&mut self, cell: GridCell) -> Result<u32, CommandError> {
        self.reject_if_over("SellTower")?;
        let tower = self
            .towers
            .remove(&cell)
            .ok_or(CommandError::NoTowerAt { cell })?;
        let refund = tower.sell_value();
        self.economy.credit(refund);
        self.events.push(SimEvent::TowerSold { cell, refund });
        log::debug!("sold {} at {cell} for {refund} coins", tower.kind);
        Ok(refund)
    }

    /// Start the next wave.
    pub fn advance_wave(&mut self) -> Result<(), CommandError> {
        let enemies = self.progression.start_next_wave()?;
        let wave = self.progression.wave();
        self.events.push(SimEvent::WaveStarted { wave, enemies });
        log::info!("wave {wave} started with {enemies} enemies");
        Ok(())
    }

    /// Pause or resume a running wave.
    pub fn toggle_pause(&mut self) -> Result<(), CommandError> {
        let paused = self.progression.toggle_pause()?;
        self.events.push(if paused {
            SimEvent::Paused
        } else {
            SimEvent::Resumed
        });
        Ok(())
    }

    /// PHASE2 area click at a playfield point. Returns the number of
    /// enemies hit.
    pub fn click_at(&mut self, x: f32, y: f32) -> Result<usize, CommandError> {
        if self.progression.phase() != SimPhase::Phase2 {
            return Err(self.invalid_transition("ClickAt"));
        }
        let click_damage = self.economy.click_damage();
        let mut ledger = Ledger {
            economy: &mut self.economy,
            events: &mut self.events,
            fx_rng: &mut self.fx_rng,
        };
        Ok(systems::direct_damage::click_at(
            &mut self.world,
            Vec2::new(x, y),
            click_damage,
            &mut ledger,
        ))
    }

    /// Start over after GAME_OVER or WIN.
    pub fn reset(&mut self) -> Result<(), CommandError> {
        if !self.progression.phase().is_terminal() {
            return Err(self.invalid_transition("Reset"));
        }
        self.world.clear();
        self.time = SimTime::default();
        self.towers.clear();
        self.economy = Economy::new();
        self.progression = Progression::new();
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.fx_rng = ChaCha8Rng::seed_from_u64(self.seed ^ FX_SEED_SALT);
        self.next_enemy_serial = 0;
        self.next_projectile_serial = 0;
        self.despawn_buffer.clear();
        self.arrivals.clear();
        self.events.push(SimEvent::GameReset);
        log::info!("simulation reset");
        Ok(())
    }

    /// Apply one command, reporting a failure as an event.
    fn handle_command(&mut self, command: PlayerCommand) {
        let result = match &command {
            PlayerCommand::PlaceTower { cell, kind } => self.place_tower(*cell, *kind),
            PlayerCommand::Upgrade { target } => self.upgrade(*target),
            PlayerCommand::SellTower { cell } => self.sell_tower(*cell).map(|_| ()),
            PlayerCommand::AdvanceWave => self.advance_wave(),
            PlayerCommand::TogglePause => self.toggle_pause(),
            PlayerCommand::ClickAt { x, y } => self.click_at(*x, *y).map(|_| ()),
            PlayerCommand::Reset => self.reset(),
        };
        if let Err(error) = result {
            log::debug!("rejected {}: {error}", command.name());
            self.events
                .push(SimEvent::CommandRejected { command, error });
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Release pending enemies.
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.progression,
            &self.path,
            &mut self.rng,
            &mut self.next_enemy_serial,
            &mut self.events,
        );

        // 2. Walk the lane; arrivals hit the base.
        systems::movement::run(&mut self.world, &self.path, &mut self.arrivals);
        let mut ledger = Ledger {
            economy: &mut self.economy,
            events: &mut self.events,
            fx_rng: &mut self.fx_rng,
        };
        systems::base::resolve_arrivals(
            &mut self.world,
            &self.arrivals,
            &mut self.progression,
            &mut ledger,
        );

        // 3. Towers pick targets and fire.
        systems::fire_control::run(
            &mut self.world,
            &mut self.towers,
            &mut self.next_projectile_serial,
        );

        // 4. Projectiles fly and hit.
        systems::projectiles::run(&mut self.world, &mut ledger, &mut self.despawn_buffer);

        // 5. Cosmetics.
        systems::particles::run(&mut self.world, &mut self.despawn_buffer);

        // 6. Remove everything flagged this tick.
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        self.check_wave_cleared();
        self.advance_phase2_ramp();
    }

    fn check_wave_cleared(&mut self) {
        let live_enemies = self
            .world
            .query::<&dietolive_core::components::Enemy>()
            .iter()
            .count();
        let Some(wave) = self.progression.try_clear_wave(live_enemies) else {
            return;
        };
        let bonus = wave_clear_bonus(wave);
        self.economy.credit(bonus);
        self.events.push(SimEvent::WaveCleared { wave, bonus });
        log::info!("wave {wave} cleared, +{bonus} coins");
    }

    fn advance_phase2_ramp(&mut self) {
        if !self.progression.advance_phase2_ramp() {
            return;
        }
        self.economy.reset_click();
        let center = Vec2::splat(PLAYFIELD_SIZE / 2.0);
        world_setup::spawn_burst(
            &mut self.world,
            &mut self.fx_rng,
            center,
            EffectKind::Phase2,
            PHASE2_BURST_PARTICLES,
        );
        self.events.push(SimEvent::Phase2Entered);
        log::info!("PHASE2 entered at wave {}", self.progression.wave());
    }

    fn check_victory(&mut self) {
        if !self.progression.check_victory() {
            return;
        }
        let wave = self.progression.wave();
        self.events.push(SimEvent::Victory { wave });
        log::info!("victory at wave {wave}");
    }

    fn reject_if_over(&self, command: &str) -> Result<(), CommandError> {
        if self.progression.phase().is_terminal() {
            Err(self.invalid_transition(command))
        } else {
            Ok(())
        }
    }

    fn invalid_transition(&self, command: &str) -> CommandError {
        CommandError::InvalidTransition {
            command: command.to_string(),
            phase: self.progression.phase(),
        }
    }

    // --- Test hooks ---

    /// Jump to a later wave in BUILD.
    #[cfg(test)]
    pub(crate) fn set_wave(&mut self, wave: u32) {
        self.progression.set_wave(wave);
    }

    #[cfg(test)]
    pub(crate) fn set_base_health(&mut self, health: i32) {
        self.economy.set_base_health(health);
    }

    #[cfg(test)]
    pub(crate) fn grant_coins(&mut self, coins: u32) {
        self.economy.credit(coins);
    }

    /// Spawn an enemy at `at` on waypoint `path_index`.
    #[cfg(test)]
    pub(crate) fn spawn_test_enemy(
        &mut self,
        kind: dietolive_core::enums::EnemyKind,
        at: Vec2,
        path_index: usize,
    ) -> Entity {
        let serial = self.next_enemy_serial;
        self.next_enemy_serial += 1;
        let entity = world_setup::spawn_enemy(&mut self.world, kind, serial, at);
        if let Ok(mut enemy) = self
            .world
            .get::<&mut dietolive_core::components::Enemy>(entity)
        {
            enemy.path_index = path_index;
        }
        entity
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
