pub mod curves;
pub mod sample;
pub mod watch;

use anyhow::{Context, Result};
use clap::Args;

use easeclock_core::{clock::Clock, AppConfig, Timer};

/// Timer settings layered over the `[timer]` section of the config file
#[derive(Args, Debug, Default)]
pub struct TimerArgs {
    /// Duration of one loop in milliseconds
    #[arg(short = 'd', long)]
    pub duration: Option<u64>,
    /// Easing name or `x1,y1,x2,y2` bezier control points
    #[arg(short = 'e', long)]
    pub easing: Option<String>,
    /// Number of steps (0 = continuous)
    #[arg(long)]
    pub steps: Option<u32>,
    /// Step position: start or end
    #[arg(long)]
    pub step_position: Option<String>,
    /// Extra property assignments, e.g. `--set speed=-1`
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub assignments: Vec<String>,
}

impl TimerArgs {
    /// All overrides as property assignments, flags first
    fn assignments(&self) -> Result<Vec<(String, String)>> {
        let mut pairs = Vec::new();

        if let Some(duration) = self.duration {
            pairs.push(("duration".to_string(), duration.to_string()));
        }
        if let Some(easing) = &self.easing {
            pairs.push(("easing".to_string(), easing.clone()));
        }
        if let Some(steps) = self.steps {
            pairs.push(("steps.length".to_string(), steps.to_string()));
        }
        if let Some(position) = &self.step_position {
            pairs.push(("steps.position".to_string(), position.clone()));
        }

        for assignment in &self.assignments {
            let (key, value) = assignment
                .split_once('=')
                .with_context(|| format!("Expected KEY=VALUE, got '{}'", assignment))?;
            pairs.push((key.trim().to_string(), value.trim().to_string()));
        }

        Ok(pairs)
    }
}

/// Build a timer from the config file and command-line overrides
pub fn build_timer<C: Clock>(config: &AppConfig, args: &TimerArgs, clock: C) -> Result<Timer<C>> {
    let mut timer = Timer::with_clock(config.timer.clone(), clock);

    for (key, value) in args.assignments()? {
        timer
            .set_property(&key, &value)
            .with_context(|| format!("Cannot set {} to '{}'", key, value))?;
        tracing::debug!(key = %key, value = %value, "Applied timer override");
    }

    Ok(timer)
}
