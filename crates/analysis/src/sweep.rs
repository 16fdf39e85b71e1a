//! Length/probability sweeps and entropy scatters.
//!
//! A sweep is a plan of [`SamplePoint`]s. Each point is measured on its own
//! [`Context`] with its own seeded RNG, so points are independent and can be
//! measured in any order (or in parallel) with identical results.

use pathways_core::{Context, ensure_solved};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::random::random_bit_string;
use crate::stats::{Summary, binary_entropy};
use crate::{AnalysisError, Result};

/// Where to sample: `length`-character strings with `'1'` probability
/// `probability`, plotted at `x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplePoint {
    pub x: f64,
    pub length: usize,
    pub probability: f64,
}

/// Mean assembly index (with spread) at one sample point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    pub x: f64,
    pub length: usize,
    pub probability: f64,
    pub mean: f64,
    pub std_dev: f64,
    pub samples: usize,
}

/// One random string's entropy against its assembly index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntropyPoint {
    pub probability: f64,
    pub entropy: f64,
    pub assembly_index: i32,
}

/// Lengths `min..=max` at a fixed probability; `x` is the length.
pub fn length_sweep(min: usize, max: usize, probability: f64) -> Vec<SamplePoint> {
    (min..=max)
        .map(|length| SamplePoint {
            x: length as f64,
            length,
            probability,
        })
        .collect()
}

/// Probabilities `0, step, 2·step, ...` up to 1 at a fixed length; `x` is the
/// probability.
pub fn probability_sweep(length: usize, step: f64) -> Result<Vec<SamplePoint>> {
    Ok(probabilities(step)?
        .into_iter()
        .map(|probability| SamplePoint {
            x: probability,
            length,
            probability,
        })
        .collect())
}

/// Most intervals a probability sweep may divide `[0, 1]` into.
pub const MAX_PROBABILITY_STEPS: usize = 1_000_000;

fn probabilities(step: f64) -> Result<Vec<f64>> {
    if !(step > 0.0 && step <= 1.0) {
        return Err(AnalysisError::InvalidStep(step));
    }
    let intervals = (1.0 / step).floor();
    if intervals > MAX_PROBABILITY_STEPS as f64 {
        return Err(AnalysisError::InvalidStep(step));
    }
    let steps = (intervals as usize)
        .checked_add(1)
        .ok_or(AnalysisError::InvalidStep(step))?;
    Ok((0..steps).map(|i| (i as f64 * step).min(1.0)).collect())
}

/// Seed for the `index`-th point of a sweep seeded with `seed`.
pub fn point_seed(seed: u64, index: usize) -> u64 {
    seed.wrapping_add(index as u64)
}

/// Measure `samples` random strings at `point`, sharing one context across
/// them.
pub fn measure(point: &SamplePoint, samples: usize, seed: u64, use_cache: bool) -> Result<Measurement> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut ctx = Context::<String>::new();
    let mut indices = Vec::with_capacity(samples);
    for _ in 0..samples {
        let s = random_bit_string(point.length, point.probability, &mut rng)?;
        let index = ensure_solved(ctx.assembly_index(&s, use_cache)?)?;
        indices.push(f64::from(index));
    }
    let summary = Summary::of(&indices)?;
    tracing::debug!(
        x = point.x,
        mean = summary.mean,
        std_dev = summary.std_dev,
        cache_size = ctx.cache_size(),
        "measured sweep point"
    );
    Ok(Measurement {
        x: point.x,
        length: point.length,
        probability: point.probability,
        mean: summary.mean,
        std_dev: summary.std_dev,
        samples: summary.samples,
    })
}

/// Measure every point in order. Point `i` uses [`point_seed`]`(seed, i)`.
pub fn run_sweep(
    points: &[SamplePoint],
    samples: usize,
    seed: u64,
    use_cache: bool,
) -> Result<Vec<Measurement>> {
    points
        .iter()
        .enumerate()
        .map(|(i, point)| measure(point, samples, point_seed(seed, i), use_cache))
        .collect()
}

/// `per_step` random strings of `length` at every probability step, each on
/// a fresh context.
pub fn entropy_scatter(
    length: usize,
    per_step: usize,
    step: f64,
    seed: u64,
    use_cache: bool,
) -> Result<Vec<EntropyPoint>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Vec::new();
    for probability in probabilities(step)? {
        for _ in 0..per_step {
            let s = random_bit_string(length, probability, &mut rng)?;
            let index = ensure_solved(Context::new().assembly_index(&s, use_cache)?)?;
            points.push(EntropyPoint {
                probability,
                entropy: binary_entropy(&s),
                assembly_index: index,
            });
        }
    }
    tracing::debug!(points = points.len(), "entropy scatter complete");
    Ok(points)
}
