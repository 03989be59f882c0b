//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Board ---

/// Board width and height in cells.
pub const GRID_SIZE: i32 = 15;

/// Edge length of one cell in world units.
pub const CELL_SIZE: f32 = 50.0;

/// Playfield extent in world units (square board).
pub const PLAYFIELD_SIZE: f32 = GRID_SIZE as f32 * CELL_SIZE;

// --- Economy ---

/// Coins at the start of a run.
pub const START_COINS: u32 = 100;

/// Base health at the start of a run.
pub const BASE_HEALTH: i32 = 100;

/// Sell refund as a fraction of the placement cost: numerator / denominator.
pub const SELL_REFUND_NUMERATOR: u32 = 3;
pub const SELL_REFUND_DENOMINATOR: u32 = 5;

/// Flat part of the wave-clear bonus.
pub const WAVE_CLEAR_BONUS_BASE: u32 = 30;

/// Per-wave part of the wave-clear bonus.
pub const WAVE_CLEAR_BONUS_PER_WAVE: u32 = 15;

// --- Waves ---

/// Enemies in a wave are this many plus the wave number.
pub const WAVE_BASE_SPAWNS: u32 = 5;

/// Ticks between consecutive spawns within a wave (0.5 s).
pub const SPAWN_INTERVAL_TICKS: u32 = 30;

/// First wave at which losing the base escalates to PHASE2 instead of ending the run.
pub const PHASE2_WAVE_THRESHOLD: u32 = 20;

/// Reaching this wave wins the run.
pub const WIN_WAVE: u32 = 40;

// --- PHASE2 ---

/// Base health granted when the PHASE2 ramp starts.
pub const PHASE2_BASE_HEALTH: i32 = 50;

/// Length of the PHASE2 ramp in ticks (progress 0.02 per tick).
pub const PHASE2_RAMP_TICKS: u32 = 50;

/// Click damage at level 0.
pub const CLICK_BASE_DAMAGE: i32 = 1;

/// Click damage gained per click upgrade level.
pub const CLICK_DAMAGE_PER_LEVEL: i32 = 3;

/// Coins per click upgrade.
pub const CLICK_UPGRADE_COST: u32 = 50;

/// Radius around the click point inside which enemies take damage.
pub const CLICK_RADIUS: f32 = 30.0;

/// Coins credited for every enemy a click hits.
pub const CLICK_HIT_BONUS: u32 = 2;

// --- Combat ---

/// Projectile travel per tick.
pub const PROJECTILE_SPEED: f32 = 8.0;

/// Projectile hits when closer than this to its target.
pub const PROJECTILE_HIT_RADIUS: f32 = 10.0;

/// Slowed enemies move at this fraction of their base speed.
pub const SLOW_FACTOR: f32 = 0.3;

// --- Cosmetic effects ---

/// Particles emitted when an enemy dies or reaches the base.
pub const DEATH_BURST_PARTICLES: usize = 20;

/// Particles emitted at a projectile impact.
pub const HIT_BURST_PARTICLES: usize = 5;

/// Particles emitted per enemy hit by a click.
pub const CLICK_BURST_PARTICLES: usize = 5;

/// Particles emitted by a click that hits nothing.
pub const MISS_BURST_PARTICLES: usize = 3;

/// Particles emitted when PHASE2 begins.
pub const PHASE2_BURST_PARTICLES: usize = 100;

/// Downward acceleration applied to particles each tick.
pub const PARTICLE_GRAVITY: f32 = 0.1;

/// Maximum magnitude of each initial particle velocity component.
pub const PARTICLE_MAX_SPEED: f32 = 2.0;

/// Particle lifetime range in ticks (inclusive min, exclusive max).
pub const PARTICLE_LIFE_MIN: u32 = 20;
pub const PARTICLE_LIFE_MAX: u32 = 50;
