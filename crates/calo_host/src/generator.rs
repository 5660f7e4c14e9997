//! Sample id generator.
//!
//! Produces random 64-bit words for exercising the decoders and the file
//! readers. The words are not encoded from field values; when a detector is
//! given, its reserved bits are simply cleared.

use anyhow::Result;
use calo_core::channel::Detector;
use calo_io::writer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

/// Returns `count` pseudo-random ids from a seeded generator.
///
/// # Arguments
///
/// * `count` - Number of ids to produce
/// * `seed` - Generator seed; equal seeds give equal sequences
/// * `detector` - If set, bits from its reserved shift upwards are cleared
pub fn random_ids(count: usize, seed: u64, detector: Option<Detector>) -> Vec<u64> {
    let mask = detector.map_or(u64::MAX, |d| (1u64 << d.reserved_shift()) - 1);
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.r#gen::<u64>() & mask).collect()
}

/// Writes random ids to `output`, binary or text depending on its extension.
pub fn generate_ids(
    output: &Path,
    count: usize,
    seed: u64,
    detector: Option<Detector>,
) -> Result<()> {
    let ids = random_ids(count, seed, detector);
    writer::write_ids(output, &ids)?;
    tracing::info!(target: "calo::gen", "Wrote {} ids to {}", ids.len(), output.display());
    println!("Wrote {} ids to {}", ids.len(), output.display());
    Ok(())
}
