//! `pathways random` — Assembly index of one random bit-string.

use pathways_analysis::{binary_entropy, random_bit_string};
use pathways_config::AppConfig;
use pathways_core::{Context, Index, ensure_solved};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use super::{Output, resolve_seed};

#[derive(Debug, Serialize)]
struct RandomReport {
    seed: u64,
    length: usize,
    probability: f64,
    string: String,
    entropy: f64,
    assembly_index: Index,
    cache_size: usize,
}

fn sample(
    seed: u64,
    length: usize,
    probability: f64,
    use_cache: bool,
) -> pathways_analysis::Result<RandomReport> {
    let mut rng = StdRng::seed_from_u64(seed);
    let string = random_bit_string(length, probability, &mut rng)?;

    let mut ctx = Context::new();
    let assembly_index = ensure_solved(ctx.assembly_index(&string, use_cache)?)?;

    Ok(RandomReport {
        seed,
        length,
        probability,
        entropy: binary_entropy(&string),
        string,
        assembly_index,
        cache_size: ctx.cache_size(),
    })
}

pub async fn run(
    config: &AppConfig,
    out: &Output,
    length: Option<usize>,
    probability: Option<f64>,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let length = length.unwrap_or(config.sampling.length);
    let probability = probability.unwrap_or(config.sampling.probability);
    let seed = resolve_seed(seed, config.sampling.seed);

    let use_cache = config.engine.use_cache;
    let report =
        tokio::task::spawn_blocking(move || sample(seed, length, probability, use_cache)).await??;
    out.emit(&report, |r| {
        println!("{}", r.string);
        println!("  Seed:       {}", r.seed);
        println!("  Entropy:    {:.4}", r.entropy);
        println!("  c ~ {}", r.assembly_index);
        println!("  Cache size: {}", r.cache_size);
    })
}
