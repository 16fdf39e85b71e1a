//! `pathways string | integer | sequence` — Assembly index of a single object.

use std::time::Instant;

use pathways_config::AppConfig;
use pathways_core::{AssemblyObject, Context, Index, ensure_solved};
use serde::Serialize;

use super::Output;

#[derive(Debug, Serialize)]
struct IndexReport<T> {
    object: T,
    assembly_index: Index,
    cache_size: usize,
    use_cache: bool,
    elapsed_secs: f64,
}

fn evaluate<T: AssemblyObject>(object: T, use_cache: bool) -> pathways_core::Result<IndexReport<T>> {
    let mut ctx = Context::new();
    let start = Instant::now();
    let index = ensure_solved(ctx.assembly_index(&object, use_cache)?)?;
    let elapsed = start.elapsed();
    tracing::debug!(index, cache_size = ctx.cache_size(), ?elapsed, "evaluated object");

    Ok(IndexReport {
        object,
        assembly_index: index,
        cache_size: ctx.cache_size(),
        use_cache,
        elapsed_secs: elapsed.as_secs_f64(),
    })
}

fn print_report<T: std::fmt::Debug>(report: &IndexReport<T>) {
    println!("{:?}", report.object);
    println!("  c ~ {}", report.assembly_index);
    println!("  Cache size: {}", report.cache_size);
    println!("  Elapsed:    {:.6}s", report.elapsed_secs);
}

pub async fn string(
    config: &AppConfig,
    out: &Output,
    value: String,
    no_cache: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let use_cache = config.engine.use_cache && !no_cache;
    let report = tokio::task::spawn_blocking(move || evaluate(value, use_cache)).await??;
    out.emit(&report, print_report)
}

pub async fn integer(
    config: &AppConfig,
    out: &Output,
    value: i64,
    no_cache: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let use_cache = config.engine.use_cache && !no_cache;
    let report = tokio::task::spawn_blocking(move || evaluate(value, use_cache)).await??;
    out.emit(&report, print_report)
}

#[derive(Debug, Serialize)]
struct SequenceReport {
    indices: Vec<Index>,
    cache_size: usize,
}

fn addition_sequence(max: i64, use_cache: bool) -> pathways_core::Result<SequenceReport> {
    let mut ctx = Context::new();
    let indices = (1..=max)
        .map(|n| ctx.assembly_index(&n, use_cache).and_then(ensure_solved))
        .collect::<pathways_core::Result<Vec<_>>>()?;

    Ok(SequenceReport {
        indices,
        cache_size: ctx.cache_size(),
    })
}

pub async fn sequence(config: &AppConfig, out: &Output, max: i64) -> Result<(), Box<dyn std::error::Error>> {
    let use_cache = config.engine.use_cache;
    let report = tokio::task::spawn_blocking(move || addition_sequence(max, use_cache)).await??;
    out.emit(&report, |r| {
        println!("{:>6}  {:>4}", "n", "c");
        for (n, c) in (1..).zip(&r.indices) {
            println!("{n:>6}  {c:>4}");
        }
        println!("\n  Cache size: {}", r.cache_size);
    })
}
