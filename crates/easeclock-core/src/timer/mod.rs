//! Animation timer
//!
//! A [`Timer`] turns wall-clock time into animation progress. It never
//! schedules anything itself: a driver calls [`Timer::position`] on its own
//! cadence (typically once per frame) and renders whatever comes back.
//!
//! - `steps` - step quantization of the time fraction
//! - `state` - reference-instant bookkeeping behind every transition
//! - `controller` - the public play/pause/stop/position surface
//! - `property` - string-keyed access for drivers and the CLI
//!
//! # Usage
//!
//! ```
//! use easeclock_core::{clock::ManualClock, Timer, TimerConfig};
//!
//! let clock = ManualClock::new(1_000.0);
//! let mut timer = Timer::with_clock(TimerConfig::from(200), clock.clone());
//!
//! timer.play();
//! clock.advance(50.0);
//! assert_eq!(timer.position().unwrap().time, 0.25);
//! ```

mod controller;
mod property;
mod state;
mod steps;

use serde::Serialize;

pub use controller::Timer;
pub use property::Property;
pub use state::Loops;
pub use steps::{StepPosition, Steps};

/// Progress of a running timer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    /// Elapsed fraction of the current loop
    pub time: f64,
    /// Eased (and stepped) output
    pub value: f64,
    /// 1-based loop index
    #[serde(rename = "loop")]
    pub loop_index: u32,
}

impl Position {
    /// Position of a stopped timer, or one outside its window
    pub const ZERO: Position = Position {
        time: 0.0,
        value: 0.0,
        loop_index: 1,
    };
}

impl Default for Position {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Playback flags, the result of [`Timer::status`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TimerStatus {
    pub playing: bool,
    pub paused: bool,
}

/// Point-in-time evaluation returned by [`Timer::freeze`]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Frozen {
    pub time: f64,
    pub value: f64,
}
