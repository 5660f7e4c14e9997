//! Human-readable views of channel ids and layouts.
//!
//! Decoded channels, layouts and tables are program output and go to stdout.
//! Diagnostics go through `tracing`.

use anyhow::{Context, Result};
use calo_common::layout::{Field, ecal};
use calo_core::channel::Detector;
use calo_core::ecal::MATERIAL_TABLE;
use calo_io::{loader, parser, writer};
use std::io::{self, Write};
use std::path::Path;

/// Decodes and prints each id argument.
pub fn decode_ids(detector: Detector, ids: &[String]) -> Result<()> {
    let ids = ids
        .iter()
        .map(|text| parser::parse_id(text))
        .collect::<Result<Vec<u64>>>()?;

    let stdout = io::stdout();
    writer::write_dump(&mut stdout.lock(), detector, &ids)
}

/// Loads a file of ids and prints one decoded line per id.
///
/// # Arguments
///
/// * `detector` - Layout used to decode every id in the file
/// * `input` - Binary (`.ids`/`.bin`) or text id file
/// * `limit` - Print at most this many ids
pub fn dump_file(detector: Detector, input: &Path, limit: Option<usize>) -> Result<()> {
    tracing::info!(target: "calo::dump", "Loading ids from {}", input.display());
    let ids = loader::load_ids(input)?;
    let shown = limit.map_or(ids.len(), |limit| limit.min(ids.len()));
    tracing::info!(
        target: "calo::dump",
        "Decoding {} of {} ids as {}",
        shown,
        ids.len(),
        detector
    );

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    writer::write_dump(&mut out, detector, &ids[..shown])?;
    out.flush().context("Failed to flush dump output")?;
    Ok(())
}

fn describe(field: &Field) -> String {
    if field.width == 1 {
        format!("bit  {}", field.shift)
    } else {
        format!("bits {}-{}", field.shift, field.last())
    }
}

pub fn print_layout(detector: Detector) {
    println!("{} (bits {}+ reserved)", detector, detector.reserved_shift());
    for (name, field) in detector.fields() {
        println!(
            "  {:<8} {:<10} mask {:#x}",
            name,
            describe(field),
            field.mask()
        );
    }
    if detector == Detector::Ecal {
        let gaps: Vec<String> = ecal::GAPS.iter().map(|bit| bit.to_string()).collect();
        println!("  unused bits: {}", gaps.join(", "));
    }
}

pub fn print_materials() {
    println!("ilayer islice type");
    for (ilayer, islice, material) in MATERIAL_TABLE {
        println!(
            "{:>6} {:>6} {:>4} ({})",
            ilayer,
            islice,
            material.code(),
            material
        );
    }
    println!("any other pair -> 0 (none)");
}
