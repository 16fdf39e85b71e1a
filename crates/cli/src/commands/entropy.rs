//! `pathways entropy` — Assembly index against the entropy of random strings.

use pathways_analysis::{EntropyPoint, entropy_scatter};
use pathways_config::AppConfig;
use serde::Serialize;

use super::{Output, resolve_seed};

#[derive(Debug, Serialize)]
struct EntropyReport {
    seed: u64,
    length: usize,
    points: Vec<EntropyPoint>,
}

pub async fn run(
    config: &AppConfig,
    out: &Output,
    samples: Option<usize>,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let samples = samples.unwrap_or(config.sampling.samples);
    if samples == 0 {
        return Err("number of samples must be at least 1".into());
    }
    let seed = resolve_seed(seed, config.sampling.seed);
    let length = config.entropy.length;
    let step = config.entropy.step;
    let use_cache = config.engine.use_cache;

    tracing::info!(length, step, samples, seed, "running entropy scatter");
    let points =
        tokio::task::spawn_blocking(move || entropy_scatter(length, samples, step, seed, use_cache))
            .await??;

    let report = EntropyReport {
        seed,
        length,
        points,
    };
    out.emit(&report, |r| {
        println!("Assembly Index vs. Entropy (length {}, seed {})", r.length, r.seed);
        println!("{:>12}  {:>8}  {:>6}", "probability", "entropy", "c");
        for p in &r.points {
            println!("{:>12.2}  {:>8.4}  {:>6}", p.probability, p.entropy, p.assembly_index);
        }
    })
}
