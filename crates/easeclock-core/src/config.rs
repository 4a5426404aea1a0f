use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

use crate::easing::{CubicBezier, Easing};
use crate::timer::{Loops, StepPosition, Steps};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub driver: DriverConfig,
    #[serde(default, deserialize_with = "bare_or_full_timer")]
    pub timer: TimerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Settings for the terminal driver that polls timers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Polling rate in frames per second
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Give up on a running timer after this many milliseconds (0 = never)
    #[serde(default = "default_max_run")]
    pub max_run_ms: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            max_run_ms: default_max_run(),
        }
    }
}

impl DriverConfig {
    /// Interval between two polls, never shorter than 1ms
    pub fn tick(&self) -> std::time::Duration {
        if self.fps == 0 {
            std::time::Duration::from_millis(16) // ~60fps fallback
        } else {
            std::time::Duration::from_millis((1000 / self.fps as u64).max(1))
        }
    }
}

/// Construction settings of a [`Timer`](crate::Timer)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Duration of one loop in milliseconds
    #[serde(deserialize_with = "non_negative")]
    pub duration: u64,
    /// Offset before the first loop starts, may be negative
    pub delay: i64,
    pub easing: EasingSpec,
    /// Playback rate; 0 pauses, negative plays backwards
    pub speed: i32,
    /// Number of loops, 0 for infinite
    pub loops: Loops,
    /// Clamp output to the animation window and stop at its end
    pub constrain: bool,
    pub steps: StepsConfig,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            duration: 0,
            delay: 0,
            easing: EasingSpec::default(),
            speed: 1,
            loops: Loops::Infinite,
            constrain: true,
            steps: StepsConfig::default(),
        }
    }
}

/// A bare number is a duration
impl From<u64> for TimerConfig {
    fn from(duration: u64) -> Self {
        Self {
            duration,
            ..Default::default()
        }
    }
}

/// Easing as written in configuration: a catalog name or four control points
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EasingSpec {
    Name(String),
    Bezier(CubicBezier),
}

impl EasingSpec {
    pub fn resolve(&self) -> Easing {
        match self {
            EasingSpec::Name(name) => Easing::named(name),
            EasingSpec::Bezier(curve) => Easing::Bezier(*curve),
        }
    }
}

impl Default for EasingSpec {
    fn default() -> Self {
        EasingSpec::Name("linear".to_string())
    }
}

impl From<&str> for EasingSpec {
    fn from(name: &str) -> Self {
        EasingSpec::Name(name.to_string())
    }
}

impl From<[f64; 4]> for EasingSpec {
    fn from(points: [f64; 4]) -> Self {
        EasingSpec::Bezier(points.into())
    }
}

// Custom deserializer to accept either a string or a 4-element array
impl<'de> Deserialize<'de> for EasingSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, SeqAccess, Visitor};
        use std::fmt;

        struct EasingSpecVisitor;

        impl<'de> Visitor<'de> for EasingSpecVisitor {
            type Value = EasingSpec;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an easing name or an array of 4 bezier control points")
            }

            fn visit_str<E>(self, value: &str) -> Result<EasingSpec, E>
            where
                E: de::Error,
            {
                Ok(EasingSpec::Name(value.to_string()))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<EasingSpec, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut points = [0.0; 4];
                for (i, point) in points.iter_mut().enumerate() {
                    *point = seq
                        .next_element()?
                        .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
                }
                if seq.next_element::<f64>()?.is_some() {
                    return Err(de::Error::invalid_length(5, &self));
                }
                Ok(EasingSpec::from(points))
            }
        }

        deserializer.deserialize_any(EasingSpecVisitor)
    }
}

/// Steps as written in configuration: a count or `{ length, position }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StepsConfig {
    pub length: u32,
    pub position: StepPosition,
}

impl From<u32> for StepsConfig {
    fn from(length: u32) -> Self {
        Self {
            length,
            position: StepPosition::End,
        }
    }
}

impl From<StepsConfig> for Steps {
    fn from(config: StepsConfig) -> Self {
        Steps::new(config.length, config.position)
    }
}

// Custom deserializer to accept either a number or a map
impl<'de> Deserialize<'de> for StepsConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct StepsConfigVisitor;

        impl<'de> Visitor<'de> for StepsConfigVisitor {
            type Value = StepsConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a step count or a map with 'length' and optional 'position'")
            }

            fn visit_u64<E>(self, value: u64) -> Result<StepsConfig, E>
            where
                E: de::Error,
            {
                Ok(StepsConfig::from(value.min(u32::MAX as u64) as u32))
            }

            // Negative counts mean no stepping
            fn visit_i64<E>(self, value: i64) -> Result<StepsConfig, E>
            where
                E: de::Error,
            {
                self.visit_u64(value.max(0) as u64)
            }

            fn visit_map<M>(self, mut map: M) -> Result<StepsConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut steps = StepsConfig::default();

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "length" => {
                            let length: i64 = map.next_value()?;
                            steps.length = length.clamp(0, u32::MAX as i64) as u32;
                        }
                        "position" => {
                            let position: String = map.next_value()?;
                            steps.position = StepPosition::resolve(&position);
                        }
                        _ => {
                            // Ignore unknown fields
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(steps)
            }
        }

        deserializer.deserialize_any(StepsConfigVisitor)
    }
}

fn non_negative<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = i64::deserialize(deserializer)?;
    Ok(value.max(0) as u64)
}

fn bare_or_full_timer<'de, D>(deserializer: D) -> Result<TimerConfig, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TimerSource {
        Duration(u64),
        Full(TimerConfig),
    }

    Ok(match TimerSource::deserialize(deserializer)? {
        TimerSource::Duration(duration) => TimerConfig::from(duration),
        TimerSource::Full(config) => config,
    })
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_fps() -> u32 {
    60
}

fn default_max_run() -> u64 {
    10_000
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/easeclock/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("easeclock")
            .join("config.toml")
    }
}
