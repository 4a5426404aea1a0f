//! Step quantization
//!
//! With a non-zero step count the time fraction is snapped to one of
//! `count` equal buckets before the easing function is applied.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// Which edge of a bucket a step jumps on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepPosition {
    /// Round up: the first step is taken at the start of the bucket
    Start,
    /// Round down: the step is taken at the end of the bucket
    #[default]
    End,
}

impl StepPosition {
    /// Anything other than `start` or `end` falls back to `end`
    pub fn resolve(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for StepPosition {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(StepPosition::Start),
            "end" => Ok(StepPosition::End),
            _ => Err(()),
        }
    }
}

impl fmt::Display for StepPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepPosition::Start => write!(f, "start"),
            StepPosition::End => write!(f, "end"),
        }
    }
}

/// Step settings of a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Steps {
    /// Number of steps; 0 means continuous
    pub count: u32,
    pub position: StepPosition,
}

impl Steps {
    pub fn new(count: u32, position: StepPosition) -> Self {
        Self { count, position }
    }

    #[inline]
    pub fn is_continuous(&self) -> bool {
        self.count == 0
    }

    /// Snap `time` to its bucket and ease the snapped fraction
    pub fn quantize(&self, time: f64, easing: &Easing) -> f64 {
        let count = self.count as f64;
        let step = match self.position {
            StepPosition::End => (time * count).floor(),
            StepPosition::Start => (time * count).ceil(),
        };
        easing.apply(step / count)
    }
}

impl From<u32> for Steps {
    fn from(count: u32) -> Self {
        Self {
            count,
            position: StepPosition::End,
        }
    }
}
