use crate::generator;
use crate::stats::LatencyStats;
use anyhow::{Result, ensure};
use calo_core::channel::Detector;
use calo_io::loader;
use rayon::prelude::*;
use std::hint::black_box;
use std::path::Path;
use std::time::Instant;

// Batches are a few microseconds each
const BUCKET_NS: u64 = 1_000;

pub fn run_benchmark(
    detector: Detector,
    input: Option<&Path>,
    count: usize,
    batch: usize,
    seed: u64,
) -> Result<()> {
    ensure!(batch > 0, "batch size must be positive");

    let ids = match input {
        Some(path) => {
            tracing::info!(target: "calo::bench", "Loading ids from {}", path.display());
            loader::load_ids(path)?
        }
        None => {
            tracing::info!(target: "calo::bench", "Generating {} random ids (seed {})", count, seed);
            generator::random_ids(count, seed, None)
        }
    };
    ensure!(!ids.is_empty(), "no ids to decode");

    println!("Decoding {} {} ids in batches of {}...", ids.len(), detector, batch);
    let start_bench = Instant::now();

    let (idet_sum, latency) = ids
        .par_chunks(batch)
        .map(|chunk| {
            let start = Instant::now();
            let sum: u64 = chunk
                .iter()
                .map(|&id| black_box(detector.decode(id)).idet() as u64)
                .sum();
            (sum, start.elapsed().as_nanos() as u64)
        })
        .fold(
            || (0u64, LatencyStats::new(BUCKET_NS)),
            |(total, mut stats), (sum, nanos)| {
                stats.update(nanos);
                (total + sum, stats)
            },
        )
        .reduce(
            || (0u64, LatencyStats::new(BUCKET_NS)),
            |(a, stats_a), (b, stats_b)| (a + b, stats_a.merge(stats_b)),
        );

    let seconds = start_bench.elapsed().as_secs_f64();
    let throughput = ids.len() as f64 / seconds;

    println!("Results");
    println!("Time: {:.4} s", seconds);
    println!("Throughput: {:.2} ids/s", throughput);
    println!("Checksum (sum of idet): {}", idet_sum);
    latency.print_report();

    Ok(())
}
