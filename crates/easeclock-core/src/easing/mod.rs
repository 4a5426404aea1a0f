//! Easing engine
//!
//! An [`Easing`] maps a time fraction to an eased output. It is resolved
//! once from a catalog name, Bezier control points or a closure, and then
//! evaluated directly on every query.
//!
//! - `curves` - the named Penner catalog
//! - `bezier` - cubic Bezier curves solved by bisection

mod bezier;
mod curves;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::{Error, Result};

pub use bezier::CubicBezier;
pub use curves::Curve;

/// Easing function used by a timer
#[derive(Clone)]
pub enum Easing {
    /// One of the fixed catalog curves
    Named(Curve),
    /// CSS-style cubic Bezier (x1, y1, x2, y2)
    Bezier(CubicBezier),
    /// Caller supplied function
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl Easing {
    /// Resolve a catalog name; unknown names give linear
    pub fn named(name: &str) -> Self {
        Easing::Named(Curve::resolve(name))
    }

    pub fn bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Easing::Bezier(CubicBezier::new(x1, y1, x2, y2))
    }

    /// Create a custom easing from a closure
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Easing::Custom(Arc::new(f))
    }

    /// Apply the easing function to a time fraction
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::Named(curve) => curve.apply(t),
            Easing::Bezier(curve) => curve.apply(t),
            Easing::Custom(f) => f(t),
        }
    }

    /// Fraction of the way `now` is between `begin` and `end`
    ///
    /// Not clamped: instants outside the interval give fractions below 0
    /// or above 1.
    pub fn time(&self, begin: f64, end: f64, now: f64) -> Result<f64> {
        if begin == end {
            return Err(Error::DegenerateInterval);
        }
        Ok((now - begin) / (end - begin))
    }

    /// Eased value at `now` on the `begin..end` interval
    pub fn value(&self, begin: f64, end: f64, now: f64) -> Result<f64> {
        self.time(begin, end, now).map(|t| self.apply(t))
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Named(Curve::Linear)
    }
}

impl From<Curve> for Easing {
    fn from(curve: Curve) -> Self {
        Easing::Named(curve)
    }
}

impl From<CubicBezier> for Easing {
    fn from(curve: CubicBezier) -> Self {
        Easing::Bezier(curve)
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Named(curve) => write!(f, "Named({})", curve),
            Easing::Bezier(curve) => {
                let [x1, y1, x2, y2] = curve.control_points();
                write!(f, "Bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
            Easing::Custom(_) => write!(f, "Custom"),
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Named(curve) => write!(f, "{}", curve),
            Easing::Bezier(curve) => {
                let [x1, y1, x2, y2] = curve.control_points();
                write!(f, "{},{},{},{}", x1, y1, x2, y2)
            }
            Easing::Custom(_) => write!(f, "custom"),
        }
    }
}

impl FromStr for Easing {
    type Err = Error;

    /// Parses either a catalog name or `x1,y1,x2,y2` control points
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if !s.contains(',') {
            return Ok(Easing::named(s));
        }

        let invalid = || Error::InvalidValue {
            key: "easing".to_string(),
            value: s.to_string(),
        };
        let points = s
            .split(',')
            .map(|part| part.trim().parse::<f64>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>>>()?;

        match points.as_slice() {
            [x1, y1, x2, y2] => Ok(Easing::bezier(*x1, *y1, *x2, *y2)),
            _ => Err(invalid()),
        }
    }
}
