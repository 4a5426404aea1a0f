//! Internal timer state
//!
//! Every position query measures elapsed time from a single reference
//! instant, `begin`. The setters here shift `begin` whenever delay, speed,
//! pause or reverse change, so that the reported position stays continuous
//! across transitions.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;

use super::steps::Steps;

/// How many times the animation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum Loops {
    #[default]
    Infinite,
    /// A finite number of runs, always at least 1
    Count(u32),
}

impl Loops {
    /// The loop limit, `None` when unbounded
    #[inline]
    pub fn limit(&self) -> Option<u32> {
        match self {
            Loops::Infinite => None,
            Loops::Count(n) => Some(*n),
        }
    }
}

impl From<u32> for Loops {
    /// 0 means infinite
    fn from(value: u32) -> Self {
        match value {
            0 => Loops::Infinite,
            n => Loops::Count(n),
        }
    }
}

impl From<Loops> for u32 {
    fn from(loops: Loops) -> Self {
        loops.limit().unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TimerState {
    pub(super) duration: u64,
    pub(super) delay: i64,
    pub(super) speed: i32,
    pub(super) prev_speed: i32,
    pub(super) loops: Loops,
    pub(super) steps: Steps,
    pub(super) easing: Easing,
    pub(super) constrain: bool,
    pub(super) user_time: Option<f64>,
    pub(super) start_time: Option<f64>,
    pub(super) pause_time: Option<f64>,
    pub(super) back_time: Option<f64>,
    pub(super) begin: f64,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            duration: 0,
            delay: 0,
            speed: 1,
            prev_speed: 1,
            loops: Loops::Infinite,
            steps: Steps::default(),
            easing: Easing::default(),
            constrain: true,
            user_time: None,
            start_time: None,
            pause_time: None,
            back_time: None,
            begin: 0.0,
        }
    }
}

impl TimerState {
    /// End of the current run window
    pub fn end(&self) -> f64 {
        self.begin + self.duration as f64 / effective_rate(self.speed)
    }

    /// Reference instant, never negative
    fn set_begin(&mut self, value: f64) {
        self.begin = if value >= 0.0 { value } else { 0.0 };
    }

    pub fn set_delay(&mut self, delay: i64) {
        if self.begin != 0.0 {
            self.set_begin(self.begin - self.delay as f64 + delay as f64);
        }
        self.delay = delay;
    }

    /// Start (Some) or stop (None) the run
    pub fn set_user_time(&mut self, instant: Option<f64>) {
        self.user_time = instant;
        self.set_start_time(instant);
    }

    fn set_start_time(&mut self, instant: Option<f64>) {
        self.start_time = instant;

        // a fresh start discards any pending pause or reverse duration
        if let Some(start) = instant {
            if self.pause_time.is_some() {
                self.pause_time = Some(start);
            }
            if self.back_time.is_some() {
                self.back_time = Some(start);
            }
        }

        self.set_begin(instant.unwrap_or(0.0) + self.delay as f64);
    }

    fn set_pause_time(&mut self, instant: Option<f64>, now: f64) {
        if let (Some(paused_at), None) = (self.pause_time, instant) {
            self.set_begin(self.begin + (now - paused_at));
            tracing::trace!(begin = self.begin, paused_ms = now - paused_at, "Pause settled");
        }
        self.pause_time = instant;
    }

    fn set_back_time(&mut self, instant: Option<f64>, now: f64) {
        if let (Some(reversed_at), None) = (self.back_time, instant) {
            self.set_begin(self.begin + (now - reversed_at) * 2.0);
            tracing::trace!(begin = self.begin, reversed_ms = now - reversed_at, "Reverse settled");
        }
        self.back_time = instant;
    }

    /// Change speed at `now`, rescaling `begin` so the elapsed fraction holds
    pub fn set_speed(&mut self, speed: i32, now: f64) {
        let old_rate = effective_rate(self.speed);

        self.set_pause_time(None, now);
        self.set_back_time(None, now);

        if speed == 0 {
            self.set_pause_time(Some(now), now);
        }
        if speed < 0 {
            self.set_back_time(Some(now), now);
        }

        if self.speed != 0 {
            self.prev_speed = self.speed;
        }
        self.speed = speed;

        // `shift` is measured at the old rate
        let shift = now - self.begin;
        self.set_begin(now - shift * old_rate / effective_rate(speed));
    }
}

/// |speed|, with a paused timer counting as rate 1
#[inline]
fn effective_rate(speed: i32) -> f64 {
    match speed.unsigned_abs() {
        0 => 1.0,
        rate => rate as f64,
    }
}
