//! Sample statistics and binary entropy.

use serde::Serialize;

use crate::{AnalysisError, Result};

/// Mean and sample standard deviation of a set of observations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub mean: f64,
    pub std_dev: f64,
    pub samples: usize,
}

impl Summary {
    /// Summarise `data`. The standard deviation uses the `N - 1` denominator
    /// and is 0 for a single observation.
    pub fn of(data: &[f64]) -> Result<Self> {
        if data.is_empty() {
            return Err(AnalysisError::EmptySample);
        }
        let n = data.len() as f64;
        let mean = data.iter().sum::<f64>() / n;
        let std_dev = if data.len() < 2 {
            0.0
        } else {
            let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
            variance.sqrt()
        };
        Ok(Self {
            mean,
            std_dev,
            samples: data.len(),
        })
    }
}

/// Shannon entropy (bits) of the `'1'` frequency in a bit-string.
///
/// 0 for an empty string or when every character is the same.
pub fn binary_entropy(s: &str) -> f64 {
    let total = s.chars().count();
    if total == 0 {
        return 0.0;
    }
    let ones = s.chars().filter(|&c| c == '1').count();
    let p = ones as f64 / total as f64;
    if p == 0.0 || p == 1.0 {
        return 0.0;
    }
    -p * p.log2() - (1.0 - p) * (1.0 - p).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_known_data() {
        let s = Summary::of(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((s.mean - 5.0).abs() < 1e-12);
        // Sample variance = 32 / 7
        assert!((s.std_dev - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
        assert_eq!(s.samples, 8);
    }

    #[test]
    fn single_observation_has_zero_spread() {
        let s = Summary::of(&[3.0]).unwrap();
        assert_eq!(s.mean, 3.0);
        assert_eq!(s.std_dev, 0.0);
    }

    #[test]
    fn empty_sample_rejected() {
        assert!(matches!(Summary::of(&[]), Err(AnalysisError::EmptySample)));
    }

    #[test]
    fn entropy_extremes() {
        assert_eq!(binary_entropy(""), 0.0);
        assert_eq!(binary_entropy("0000"), 0.0);
        assert_eq!(binary_entropy("1111"), 0.0);
        assert!((binary_entropy("0101") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn entropy_quarter() {
        let expected = -(0.25f64 * 0.25f64.log2()) - 0.75 * 0.75f64.log2();
        assert!((binary_entropy("0001") - expected).abs() < 1e-12);
    }
}
