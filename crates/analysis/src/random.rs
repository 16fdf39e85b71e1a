//! Random bit-string generation.

use rand::Rng;
use rand::distr::{Bernoulli, Distribution};

use crate::{AnalysisError, Result};

/// A string of `len` characters, each `'1'` with probability `probability`
/// and `'0'` otherwise.
pub fn random_bit_string<R: Rng + ?Sized>(
    len: usize,
    probability: f64,
    rng: &mut R,
) -> Result<String> {
    let coin =
        Bernoulli::new(probability).map_err(|_| AnalysisError::InvalidProbability(probability))?;
    Ok((0..len)
        .map(|_| if coin.sample(&mut *rng) { '1' } else { '0' })
        .collect())
}
