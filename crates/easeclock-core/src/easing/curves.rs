//! Named easing curves (Penner equations)
//!
//! Every function maps a time fraction `t` in [0, 1] to an eased value.
//! Back and elastic curves overshoot the unit interval.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// The fixed catalog of named curves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Curve {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInCirc,
    EaseOutCirc,
    EaseInOutCirc,
    EaseInElastic,
    EaseOutElastic,
    EaseInOutElastic,
    EaseInBack,
    EaseOutBack,
    EaseInOutBack,
    EaseInBounce,
    EaseOutBounce,
    EaseInOutBounce,
}

impl Curve {
    pub const ALL: [Curve; 31] = [
        Curve::Linear,
        Curve::EaseInQuad,
        Curve::EaseOutQuad,
        Curve::EaseInOutQuad,
        Curve::EaseInCubic,
        Curve::EaseOutCubic,
        Curve::EaseInOutCubic,
        Curve::EaseInQuart,
        Curve::EaseOutQuart,
        Curve::EaseInOutQuart,
        Curve::EaseInQuint,
        Curve::EaseOutQuint,
        Curve::EaseInOutQuint,
        Curve::EaseInSine,
        Curve::EaseOutSine,
        Curve::EaseInOutSine,
        Curve::EaseInExpo,
        Curve::EaseOutExpo,
        Curve::EaseInOutExpo,
        Curve::EaseInCirc,
        Curve::EaseOutCirc,
        Curve::EaseInOutCirc,
        Curve::EaseInElastic,
        Curve::EaseOutElastic,
        Curve::EaseInOutElastic,
        Curve::EaseInBack,
        Curve::EaseOutBack,
        Curve::EaseInOutBack,
        Curve::EaseInBounce,
        Curve::EaseOutBounce,
        Curve::EaseInOutBounce,
    ];

    /// Catalog name, e.g. `easeInOutQuad`
    pub fn name(&self) -> &'static str {
        match self {
            Curve::Linear => "linear",
            Curve::EaseInQuad => "easeInQuad",
            Curve::EaseOutQuad => "easeOutQuad",
            Curve::EaseInOutQuad => "easeInOutQuad",
            Curve::EaseInCubic => "easeInCubic",
            Curve::EaseOutCubic => "easeOutCubic",
            Curve::EaseInOutCubic => "easeInOutCubic",
            Curve::EaseInQuart => "easeInQuart",
            Curve::EaseOutQuart => "easeOutQuart",
            Curve::EaseInOutQuart => "easeInOutQuart",
            Curve::EaseInQuint => "easeInQuint",
            Curve::EaseOutQuint => "easeOutQuint",
            Curve::EaseInOutQuint => "easeInOutQuint",
            Curve::EaseInSine => "easeInSine",
            Curve::EaseOutSine => "easeOutSine",
            Curve::EaseInOutSine => "easeInOutSine",
            Curve::EaseInExpo => "easeInExpo",
            Curve::EaseOutExpo => "easeOutExpo",
            Curve::EaseInOutExpo => "easeInOutExpo",
            Curve::EaseInCirc => "easeInCirc",
            Curve::EaseOutCirc => "easeOutCirc",
            Curve::EaseInOutCirc => "easeInOutCirc",
            Curve::EaseInElastic => "easeInElastic",
            Curve::EaseOutElastic => "easeOutElastic",
            Curve::EaseInOutElastic => "easeInOutElastic",
            Curve::EaseInBack => "easeInBack",
            Curve::EaseOutBack => "easeOutBack",
            Curve::EaseInOutBack => "easeInOutBack",
            Curve::EaseInBounce => "easeInBounce",
            Curve::EaseOutBounce => "easeOutBounce",
            Curve::EaseInOutBounce => "easeInOutBounce",
        }
    }

    /// Resolve a catalog name, falling back to linear for unknown names
    pub fn resolve(name: &str) -> Curve {
        name.parse().unwrap_or_else(|_| {
            tracing::debug!(name, "Unknown easing name, using linear");
            Curve::Linear
        })
    }

    /// Apply the curve to a time fraction
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Curve::Linear => t,
            Curve::EaseInQuad => t.powi(2),
            Curve::EaseOutQuad => -t * (t - 2.0),
            Curve::EaseInOutQuad => ease_in_out_quad(t),
            Curve::EaseInCubic => t.powi(3),
            Curve::EaseOutCubic => (t - 1.0).powi(3) + 1.0,
            Curve::EaseInOutCubic => ease_in_out_cubic(t),
            Curve::EaseInQuart => t.powi(4),
            Curve::EaseOutQuart => -(t - 1.0).powi(4) + 1.0,
            Curve::EaseInOutQuart => ease_in_out_quart(t),
            Curve::EaseInQuint => t.powi(5),
            Curve::EaseOutQuint => (t - 1.0).powi(5) + 1.0,
            Curve::EaseInOutQuint => ease_in_out_quint(t),
            Curve::EaseInSine => -(t * (PI / 2.0)).cos() + 1.0,
            Curve::EaseOutSine => (t * PI / 2.0).sin(),
            Curve::EaseInOutSine => ((t * PI).cos() - 1.0) / -2.0,
            Curve::EaseInExpo => ease_in_expo(t),
            Curve::EaseOutExpo => ease_out_expo(t),
            Curve::EaseInOutExpo => ease_in_out_expo(t),
            Curve::EaseInCirc => -((1.0 - t.powi(2)).sqrt() - 1.0),
            Curve::EaseOutCirc => (1.0 - (t - 1.0).powi(2)).sqrt(),
            Curve::EaseInOutCirc => ease_in_out_circ(t),
            Curve::EaseInElastic => ease_in_elastic(t),
            Curve::EaseOutElastic => ease_out_elastic(t),
            Curve::EaseInOutElastic => ease_in_out_elastic(t),
            Curve::EaseInBack => t.powi(2) * ((BACK + 1.0) * t - BACK),
            Curve::EaseOutBack => ease_out_back(t),
            Curve::EaseInOutBack => ease_in_out_back(t),
            Curve::EaseInBounce => ease_in_bounce(t),
            Curve::EaseOutBounce => ease_out_bounce(t),
            Curve::EaseInOutBounce => ease_in_out_bounce(t),
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Curve {
    type Err = Error;

    /// Accepts catalog names in camelCase, snake_case or kebab-case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        Curve::ALL
            .into_iter()
            .find(|curve| curve.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| Error::InvalidValue {
                key: "easing".to_string(),
                value: s.to_string(),
            })
    }
}

/// Back overshoot amount
const BACK: f64 = 1.70158;

/// Elastic period
const ELASTIC_PERIOD: f64 = 0.3;

fn ease_in_out_quad(t: f64) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        return t.powi(2) / 2.0;
    }
    let t = t - 1.0;
    (t * (t - 2.0) - 1.0) / -2.0
}

fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        return t.powi(3) / 2.0;
    }
    let t = t - 2.0;
    (t.powi(3) + 2.0) / 2.0
}

fn ease_in_out_quart(t: f64) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        return t.powi(4) / 2.0;
    }
    let t = t - 2.0;
    (t.powi(4) - 2.0) / -2.0
}

fn ease_in_out_quint(t: f64) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        return t.powi(5) / 2.0;
    }
    let t = t - 2.0;
    (t.powi(5) + 2.0) / 2.0
}

fn ease_in_expo(t: f64) -> f64 {
    if t == 0.0 {
        0.0
    } else {
        2.0_f64.powf(10.0 * (t - 1.0))
    }
}

fn ease_out_expo(t: f64) -> f64 {
    if t == 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

fn ease_in_out_expo(t: f64) -> f64 {
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    let t = t * 2.0;
    if t < 1.0 {
        return 2.0_f64.powf(10.0 * (t - 1.0)) / 2.0;
    }
    let t = t - 1.0;
    (2.0 - 2.0_f64.powf(-10.0 * t)) / 2.0
}

fn ease_in_out_circ(t: f64) -> f64 {
    let t = t * 2.0;
    if t < 1.0 {
        return ((1.0 - t.powi(2)).sqrt() - 1.0) / -2.0;
    }
    let t = t - 2.0;
    ((1.0 - t.powi(2)).sqrt() + 1.0) / 2.0
}

/// Phase shift of an elastic curve with period `p`
#[inline]
fn elastic_shift(p: f64) -> f64 {
    p / (2.0 * PI) * 1.0_f64.asin()
}

fn ease_in_elastic(t: f64) -> f64 {
    let p = ELASTIC_PERIOD;
    let s = elastic_shift(p);
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    let t = t - 1.0;
    -(2.0_f64.powf(10.0 * t) * ((t - s) * (2.0 * PI) / p).sin())
}

fn ease_out_elastic(t: f64) -> f64 {
    let p = ELASTIC_PERIOD;
    let s = elastic_shift(p);
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    2.0_f64.powf(-10.0 * t) * ((t - s) * (2.0 * PI) / p).sin() + 1.0
}

fn ease_in_out_elastic(t: f64) -> f64 {
    let p = 1.5 * ELASTIC_PERIOD;
    let s = elastic_shift(p);
    if t == 0.0 {
        return 0.0;
    }
    let t = t * 2.0;
    if t == 2.0 {
        return 1.0;
    }
    let t = t - 1.0;
    if t < 0.0 {
        return -0.5 * (2.0_f64.powf(10.0 * t) * ((t - s) * (2.0 * PI) / p).sin());
    }
    2.0_f64.powf(-10.0 * t) * ((t - s) * (2.0 * PI) / p).sin() * 0.5 + 1.0
}

fn ease_out_back(t: f64) -> f64 {
    let t = t - 1.0;
    t.powi(2) * ((BACK + 1.0) * t + BACK) + 1.0
}

fn ease_in_out_back(t: f64) -> f64 {
    let s = BACK * 1.525;
    let t = t * 2.0;
    if t < 1.0 {
        return (t.powi(2) * (s * t + t - s)) / 2.0;
    }
    let t = t - 2.0;
    (t.powi(2) * (s * t + t + s) + 2.0) / 2.0
}

fn ease_in_bounce(t: f64) -> f64 {
    1.0 - ease_out_bounce(1.0 - t)
}

fn ease_out_bounce(t: f64) -> f64 {
    const C: f64 = 2.75;
    let (a, b) = if t < 1.0 / C {
        (0.0, 0.0)
    } else if t < 2.0 / C {
        (1.5, 0.75)
    } else if t < 2.5 / C {
        (2.25, 0.9375)
    } else {
        (2.625, 0.984375)
    };
    let t = t - a / C;
    7.5625 * t.powi(2) + b
}

fn ease_in_out_bounce(t: f64) -> f64 {
    if t < 0.5 {
        return ease_in_bounce(t * 2.0) * 0.5;
    }
    ease_out_bounce(t * 2.0 - 1.0) * 0.5 + 0.5
}
