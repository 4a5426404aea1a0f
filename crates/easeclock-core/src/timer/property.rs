//! String-keyed timer properties
//!
//! Drivers that receive settings as text (the CLI's `--set key=value`, a
//! config overlay) go through [`Timer::set_property`]. Values are coerced
//! the lenient way animation settings usually are: a speed that is not a
//! number means 1, a negative duration means 0, and so on.

use std::fmt;
use std::str::FromStr;

use crate::clock::Clock;
use crate::easing::Easing;
use crate::{Error, Result};

use super::controller::Timer;
use super::state::Loops;
use super::steps::StepPosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Delay,
    Speed,
    Duration,
    Easing,
    Constrain,
    Loops,
    StepsLength,
    StepsPosition,
    StartTime,
    Is,
    Position,
}

impl Property {
    pub const ALL: [Property; 11] = [
        Property::Delay,
        Property::Speed,
        Property::Duration,
        Property::Easing,
        Property::Constrain,
        Property::Loops,
        Property::StepsLength,
        Property::StepsPosition,
        Property::StartTime,
        Property::Is,
        Property::Position,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Property::Delay => "delay",
            Property::Speed => "speed",
            Property::Duration => "duration",
            Property::Easing => "easing",
            Property::Constrain => "constrain",
            Property::Loops => "loops",
            Property::StepsLength => "steps.length",
            Property::StepsPosition => "steps.position",
            Property::StartTime => "startTime",
            Property::Is => "is",
            Property::Position => "position",
        }
    }

    #[inline]
    pub fn is_read_only(&self) -> bool {
        matches!(self, Property::StartTime | Property::Is | Property::Position)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Property {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Property::ALL
            .into_iter()
            .find(|property| property.name() == s)
            .ok_or_else(|| Error::UnknownProperty(s.to_string()))
    }
}

/// Numeric value of `raw`, or `alt` when it is not a number
fn to_number(raw: &str, alt: f64) -> f64 {
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    raw.parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
        .unwrap_or(alt)
}

/// Like [`to_number`], but negative values also fall back to `alt`
fn to_non_negative(raw: &str, alt: f64) -> f64 {
    let value = to_number(raw, f64::NAN);
    if value >= 0.0 {
        value
    } else {
        alt
    }
}

fn to_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        _ => Err(Error::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

impl<C: Clock> Timer<C> {
    /// Set a property from its text form
    ///
    /// Fails with [`Error::ReadOnlyProperty`] for `startTime`, `is` and
    /// `position`, and with [`Error::UnknownProperty`] for anything not in
    /// [`Property::ALL`].
    pub fn set_property(&mut self, key: &str, raw: &str) -> Result<()> {
        let property: Property = key.parse()?;

        match property {
            Property::Delay => self.set_delay(to_number(raw, 0.0) as i64),
            Property::Speed => self.set_speed(to_number(raw, 1.0) as i32),
            Property::Duration => self.set_duration(to_non_negative(raw, 0.0) as u64),
            Property::Easing => self.set_easing(raw.parse::<Easing>()?),
            Property::Constrain => self.set_constrain(to_bool(key, raw)?),
            Property::Loops => self.set_loops(Loops::from(to_non_negative(raw, 1.0) as u32)),
            Property::StepsLength => self.set_steps_count(to_non_negative(raw, 0.0) as u32),
            Property::StepsPosition => self.set_steps_position(StepPosition::resolve(raw.trim())),
            Property::StartTime | Property::Is | Property::Position => {
                return Err(Error::ReadOnlyProperty(property.name().to_string()));
            }
        }
        Ok(())
    }

    /// Text form of a property
    ///
    /// Reading `is` or `position` evaluates the timer and may stop it, just
    /// like [`Timer::status`] and [`Timer::position`].
    pub fn property(&mut self, key: &str) -> Result<String> {
        let property: Property = key.parse()?;

        let text = match property {
            Property::Delay => self.delay().to_string(),
            Property::Speed => self.speed().to_string(),
            Property::Duration => self.duration().to_string(),
            Property::Easing => self.easing().to_string(),
            Property::Constrain => self.constrain().to_string(),
            Property::Loops => u32::from(self.loops()).to_string(),
            Property::StepsLength => self.steps().count.to_string(),
            Property::StepsPosition => self.steps().position.to_string(),
            Property::StartTime => match self.start_time() {
                Some(instant) => instant.to_string(),
                None => "null".to_string(),
            },
            Property::Is => {
                let status = self.status()?;
                format!("{{playing: {}, paused: {}}}", status.playing, status.paused)
            }
            Property::Position => {
                let position = self.position()?;
                format!(
                    "{{time: {}, value: {}, loop: {}}}",
                    position.time, position.value, position.loop_index
                )
            }
        };
        Ok(text)
    }
}
