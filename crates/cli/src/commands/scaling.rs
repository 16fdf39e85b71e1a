//! `pathways scaling` — Mean assembly index against length and probability.

use pathways_analysis::{
    LinearFit, Measurement, length_sweep, probability_sweep, run_sweep_parallel,
};
use pathways_config::AppConfig;
use serde::Serialize;

use super::{Output, resolve_seed};

#[derive(Debug, Serialize)]
struct ScalingReport {
    seed: u64,
    samples: usize,
    length_scaling: Vec<Measurement>,
    length_fit: Option<LinearFit>,
    probability_scaling: Vec<Measurement>,
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
    let use_cache = config.engine.use_cache;
    let scaling = &config.scaling;

    tracing::info!(
        samples,
        seed,
        min_length = scaling.min_length,
        max_length = scaling.max_length,
        "running length sweep"
    );
    let lengths = length_sweep(scaling.min_length, scaling.max_length, scaling.probability);
    let length_scaling = run_sweep_parallel(lengths, samples, seed, use_cache).await?;
    let length_fit = LinearFit::least_squares(&length_scaling);

    tracing::info!(
        length = scaling.probability_length,
        step = scaling.probability_step,
        "running probability sweep"
    );
    let probabilities = probability_sweep(scaling.probability_length, scaling.probability_step)?;
    let probability_scaling = run_sweep_parallel(probabilities, samples, seed, use_cache).await?;

    let report = ScalingReport {
        seed,
        samples,
        length_scaling,
        length_fit,
        probability_scaling,
    };
    out.emit(&report, |r| {
        println!("Length Scaling (seed {}, {} samples/point)", r.seed, r.samples);
        print_table("length", &r.length_scaling);
        match &r.length_fit {
            Some(fit) => println!("\n  c = {:.4}·length + {:.4}", fit.slope, fit.intercept),
            None => println!("\n  (not enough points to fit)"),
        }
        println!();
        println!("Probability Scaling");
        print_table("probability", &r.probability_scaling);
    })
}

fn print_table(label: &str, rows: &[Measurement]) {
    println!("{label:>12}  {:>10}  {:>10}", "mean", "std dev");
    for m in rows {
        println!("{:>12.4}  {:>10.4}  {:>10.4}", m.x, m.mean, m.std_dev);
    }
}
