//! Headless Die to Live run: the game loop thread plus a scripted player.
//!
//! Usage: `dietolive [seed]`. Set `RUST_LOG=info` (or `debug`) for progress.

use std::time::Duration;

use dietolive_app::autopilot::Autopilot;
use dietolive_app::config::LoopConfig;
use dietolive_app::error::AppError;
use dietolive_app::game_loop;
use dietolive_core::enums::SimPhase;
use dietolive_sim::SimConfig;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    let config = LoopConfig {
        sim: SimConfig {
            seed,
            ..Default::default()
        },
        ..Default::default()
    };
    log::info!("starting headless run with seed {seed}");

    let handle = game_loop::spawn_game_loop(config)?;
    let mut autopilot = Autopilot::new();
    let mut last_wave = 0;

    loop {
        std::thread::sleep(POLL_INTERVAL);
        let Some(snapshot) = handle.latest_snapshot()? else {
            continue;
        };

        if snapshot.economy.wave != last_wave {
            last_wave = snapshot.economy.wave;
            log::info!(
                "wave {last_wave}: {} coins, base {}, {} towers",
                snapshot.economy.coins,
                snapshot.economy.base_health,
                snapshot.towers.len()
            );
        }

        match snapshot.phase {
            SimPhase::GameOver | SimPhase::Win => {
                let outcome = if snapshot.phase == SimPhase::Win {
                    "won"
                } else {
                    "lost"
                };
                log::info!(
                    "run {outcome} at wave {} after {:.1} s of game time",
                    snapshot.economy.wave,
                    snapshot.time.elapsed_secs
                );
                break;
            }
            _ => {
                for command in autopilot.decide(&snapshot) {
                    handle.send(command)?;
                }
            }
        }
    }

    handle.shutdown()
}
