//! Cubic Bezier easing
//!
//! The curve runs through (0, 0), (x1, y1), (x2, y2) and (1, 1). Time is
//! mapped back to the Bezier parameter by bisection, then the same
//! parameter is evaluated on the y control points.

use serde::{Deserialize, Serialize};

/// Bisection rounds used to solve for the curve parameter
const SOLVE_ITERATIONS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// Build a curve, clamping the x coordinates to [0, 1]
    ///
    /// The y coordinates are kept as given so the curve can overshoot.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    pub fn control_points(&self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    pub fn apply(&self, t: f64) -> f64 {
        if t == 0.0 {
            return 0.0;
        }
        if t == 1.0 {
            return 1.0;
        }
        n_for_t(t_for_n(t, self.x1, self.x2), self.y1, self.y2)
    }
}

impl From<[f64; 4]> for CubicBezier {
    fn from([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

impl From<CubicBezier> for [f64; 4] {
    fn from(curve: CubicBezier) -> Self {
        curve.control_points()
    }
}

/// One coordinate of the curve at parameter `t`
#[inline]
fn n_for_t(t: f64, n1: f64, n2: f64) -> f64 {
    let nt = 1.0 - t;
    3.0 * nt.powi(2) * t * n1 + 3.0 * nt * t.powi(2) * n2 + t.powi(3)
}

/// Parameter at which the curve coordinate reaches `n`
fn t_for_n(n: f64, n1: f64, n2: f64) -> f64 {
    let mut min_t = 0.0;
    let mut max_t = 1.0;

    for _ in 0..SOLVE_ITERATIONS {
        let guess_t = (min_t + max_t) / 2.0;
        if n < n_for_t(guess_t, n1, n2) {
            max_t = guess_t;
        } else {
            min_t = guess_t;
        }
    }

    (min_t + max_t) / 2.0
}
