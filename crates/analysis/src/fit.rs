//! Least-squares line through sweep measurements.

use serde::Serialize;

use crate::sweep::Measurement;

/// `mean ≈ slope · x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Ordinary least squares over `(x, mean)`. `None` unless at least two
    /// distinct `x` values are present.
    pub fn least_squares(points: &[Measurement]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        let n = points.len() as f64;
        let sx: f64 = points.iter().map(|p| p.x).sum();
        let sy: f64 = points.iter().map(|p| p.mean).sum();
        let sxx: f64 = points.iter().map(|p| p.x * p.x).sum();
        let sxy: f64 = points.iter().map(|p| p.x * p.mean).sum();

        let denom = n * sxx - sx * sx;
        if denom.abs() < f64::EPSILON {
            return None;
        }
        let slope = (n * sxy - sx * sy) / denom;
        let intercept = (sy - slope * sx) / n;
        Some(Self { slope, intercept })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
