//! Concurrent sweep driver.
//!
//! Every point runs on the blocking pool with its own context, so no cache is
//! ever shared between threads.

use tokio::task::JoinSet;

use crate::sweep::{Measurement, SamplePoint, measure, point_seed};
use crate::{AnalysisError, Result};

/// Same results as [`crate::run_sweep`], measured concurrently.
pub async fn run_sweep_parallel(
    points: Vec<SamplePoint>,
    samples: usize,
    seed: u64,
    use_cache: bool,
) -> Result<Vec<Measurement>> {
    let mut tasks = JoinSet::new();
    for (i, point) in points.into_iter().enumerate() {
        tasks.spawn_blocking(move || (i, measure(&point, samples, point_seed(seed, i), use_cache)));
    }

    let mut measured = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        let (i, measurement) = joined.map_err(|e| AnalysisError::Worker(e.to_string()))?;
        measured.push((i, measurement?));
    }
    measured.sort_by_key(|(i, _)| *i);

    tracing::debug!(points = measured.len(), "parallel sweep complete");
    Ok(measured.into_iter().map(|(_, m)| m).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::{length_sweep, run_sweep};

    #[tokio::test]
    async fn parallel_matches_sequential() {
        let points = length_sweep(2, 9, 0.5);
        let sequential = run_sweep(&points, 3, 123, true).unwrap();
        let parallel = run_sweep_parallel(points, 3, 123, true).await.unwrap();
        assert_eq!(parallel, sequential);
    }

    #[tokio::test]
    async fn errors_surface() {
        let points = vec![SamplePoint {
            x: 0.0,
            length: 0,
            probability: 0.5,
        }];
        let err = run_sweep_parallel(points, 1, 0, true).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Engine(_)));
    }
}
