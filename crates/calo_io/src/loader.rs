use crate::{is_binary_path, parser};
use anyhow::{Context, Result};
use bitvec::prelude::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Width of one stored channel id.
pub const ID_BITS: usize = u64::BITS as usize;

/// Loads a binary id file as raw bits.
pub fn load_id_file<P: AsRef<Path>>(path: P) -> Result<BitVec<u8, Lsb0>> {
    let path = path.as_ref();
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open id file {}", path.display()))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;

    // Little-endian bytes with LSB-first bits give the natural u64 bit order
    let bits = BitVec::<u8, Lsb0>::from_vec(buffer);
    Ok(bits)
}

/// Splits raw bits into 64-bit channel ids.
///
/// A trailing partial word is dropped with a warning.
pub fn slice_ids(raw_bits: &BitSlice<u8, Lsb0>) -> Vec<u64> {
    let chunks = raw_bits.chunks_exact(ID_BITS);
    let remainder = chunks.remainder().len();
    if remainder != 0 {
        tracing::warn!(
            target: "calo::io",
            "Ignoring {} trailing bits that do not form a full id",
            remainder
        );
    }

    chunks.map(|word| word.load_le::<u64>()).collect()
}

/// Loads channel ids from `path`, binary or text depending on its extension.
pub fn load_ids<P: AsRef<Path>>(path: P) -> Result<Vec<u64>> {
    let path = path.as_ref();
    let ids = if is_binary_path(path) {
        let raw_bits = load_id_file(path)?;
        slice_ids(&raw_bits)
    } else {
        parser::load_id_list(path)?
    };

    tracing::debug!(target: "calo::io", "Loaded {} ids from {}", ids.len(), path.display());
    Ok(ids)
}
