use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};

use easeclock_core::{clock::SystemClock, AppConfig, Position, Timer};

use super::{build_timer, TimerArgs};

/// Transport changes to apply while watching, in ms after start
#[derive(Debug, Clone, Copy, Default)]
pub struct Schedule {
    pub pause_at: Option<u64>,
    pub resume_at: Option<u64>,
    pub reverse_at: Option<u64>,
}

impl Schedule {
    /// Apply every change that came due in `(last, elapsed]`
    fn apply(&self, timer: &mut Timer, last: u64, elapsed: u64) {
        let due = |at: Option<u64>| at.is_some_and(|at| at > last && at <= elapsed);

        if due(self.pause_at) {
            info!(elapsed, "Pausing");
            timer.pause();
        }
        if due(self.resume_at) {
            info!(elapsed, "Resuming");
            timer.play();
        }
        if due(self.reverse_at) {
            info!(elapsed, "Reversing");
            let speed = match timer.speed() {
                0 => -1,
                speed => -speed,
            };
            timer.set_speed(speed);
        }
    }
}

pub async fn run(config: &AppConfig, args: &TimerArgs, schedule: Schedule, json: bool) -> Result<()> {
    let mut timer = build_timer(config, args, SystemClock)?;
    let max_run_ms = config.driver.max_run_ms;

    let mut ticker = tokio::time::interval(config.driver.tick());
    let started = Instant::now();
    let mut last = 0;

    timer.play();
    info!(
        duration = timer.duration(),
        easing = %timer.easing(),
        fps = config.driver.fps,
        "Watching timer"
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                timer.stop();
                break;
            }
        }

        let elapsed = started.elapsed().as_millis() as u64;
        schedule.apply(&mut timer, last, elapsed);
        last = elapsed;

        let position = timer.position()?;
        print_frame(elapsed, &position, json);

        if !timer.is_playing()? {
            info!(elapsed, "Timer finished");
            break;
        }
        if max_run_ms > 0 && elapsed >= max_run_ms {
            warn!(elapsed, "Giving up after max_run_ms");
            timer.stop();
            break;
        }
    }

    Ok(())
}

fn print_frame(elapsed: u64, position: &Position, json: bool) {
    if json {
        let mut frame = serde_json::to_value(position).unwrap_or_default();
        frame["ms"] = elapsed.into();
        println!("{}", frame);
    } else {
        let width = 40;
        let filled = (position.value.clamp(0.0, 1.0) * width as f64).round() as usize;
        println!(
            "  {:>7} ms  loop {:>3}  time {:>7.4}  value {:>7.4}  |{}{}|",
            elapsed,
            position.loop_index,
            position.time,
            position.value,
            "#".repeat(filled),
            " ".repeat(width - filled)
        );
    }
}
