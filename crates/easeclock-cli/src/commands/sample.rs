use anyhow::{Context, Result};

use easeclock_core::{clock::SystemClock, AppConfig, Frozen};

use super::{build_timer, TimerArgs};

pub fn run(config: &AppConfig, args: &TimerArgs, samples: u32, json: bool) -> Result<()> {
    let timer = build_timer(config, args, SystemClock)?;
    let samples = samples.max(1);

    // sample over the delay plus one loop, starting at instant 0
    let span = (timer.delay().max(0) as u64 + timer.duration()) as f64;

    if !json {
        println!(
            "Sampling {} ms with {} ({} steps)\n",
            timer.duration(),
            timer.easing(),
            timer.steps().count
        );
        println!("  {:>10} {:>10} {:>10}", "ms", "time", "value");
    }

    for i in 0..=samples {
        let now = span * i as f64 / samples as f64;
        let Frozen { time, value } = timer
            .freeze(Some(0.0), Some(now))
            .context("Cannot evaluate timer")?;

        if json {
            println!("{}", serde_json::json!({ "ms": now, "time": time, "value": value }));
        } else {
            println!("  {:>10.1} {:>10.4} {:>10.4}", now, time, value);
        }
    }

    Ok(())
}
