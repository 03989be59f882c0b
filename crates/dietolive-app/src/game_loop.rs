//! Game loop thread: owns the driver, paces frames, publishes snapshots.
//!
//! The engine is created inside the thread. Commands arrive over an `mpsc`
//! channel and are queued for the next tick boundary. After each frame the
//! latest snapshot is stored in a shared slot for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Instant;

use dietolive_core::commands::PlayerCommand;
use dietolive_core::state::SimSnapshot;

use crate::config::LoopConfig;
use crate::driver::FixedStepDriver;
use crate::error::AppError;
use crate::state::GameLoopCommand;

/// Shared slot holding the most recent snapshot.
pub type SnapshotSlot = Arc<Mutex<Option<SimSnapshot>>>;

/// Owner's side of a running game loop.
pub struct GameLoopHandle {
    command_tx: mpsc::Sender<GameLoopCommand>,
    latest_snapshot: SnapshotSlot,
    thread: Option<JoinHandle<()>>,
}

impl GameLoopHandle {
    /// Forward a player command to the simulation.
    pub fn send(&self, command: PlayerCommand) -> Result<(), AppError> {
        self.command_tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| AppError::ChannelClosed)
    }

    /// The most recent snapshot, if a frame has completed.
    pub fn latest_snapshot(&self) -> Result<Option<SimSnapshot>, AppError> {
        let lock = self
            .latest_snapshot
            .lock()
            .map_err(|_| AppError::LockPoisoned)?;
        Ok(lock.clone())
    }

    /// Stop the loop and wait for the thread to exit.
    pub fn shutdown(mut self) -> Result<(), AppError> {
        // The loop also exits on disconnect, so a failed send is fine.
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        match self.thread.take() {
            Some(thread) => thread.join().map_err(|_| AppError::ThreadPanicked),
            None => Ok(()),
        }
    }
}

impl Drop for GameLoopHandle {
    fn drop(&mut self) {
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
    }
}

/// Spawn the game loop on a named thread.
pub fn spawn_game_loop(config: LoopConfig) -> Result<GameLoopHandle, AppError> {
    let (command_tx, command_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot: SnapshotSlot = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("dietolive-game-loop".into())
        .spawn(move || run_game_loop(config, command_rx, &slot))?;

    Ok(GameLoopHandle {
        command_tx,
        latest_snapshot,
        thread: Some(thread),
    })
}

/// The game loop. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    config: LoopConfig,
    command_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<SimSnapshot>>,
) {
    let frame_interval = config.frame_interval;
    let mut driver = FixedStepDriver::new(config);
    let mut last_frame = Instant::now();
    let mut next_frame_time = last_frame;
    log::debug!("game loop started");

    loop {
        // 1. Drain pending commands.
        loop {
            match command_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(command)) => driver.queue_command(command),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    log::debug!("game loop stopped at tick {}", driver.engine().time().tick);
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Run the ticks this frame's wall time covers.
        let now = Instant::now();
        let frame = driver.advance(now - last_frame);
        last_frame = now;

        // 3. Publish.
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(frame.snapshot);
        }

        // 4. Sleep until the next frame.
        next_frame_time += frame_interval;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > frame_interval * 2 {
            // Too far behind; skip instead of spiraling.
            next_frame_time = now;
        }
    }
}
