pub mod clock;
pub mod config;
pub mod easing;
pub mod error;
pub mod timer;

pub use config::{AppConfig, EasingSpec, StepsConfig, TimerConfig};
pub use easing::{CubicBezier, Curve, Easing};
pub use error::{Error, Result};
pub use timer::{Frozen, Loops, Position, StepPosition, Steps, Timer, TimerStatus};
