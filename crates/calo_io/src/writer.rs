use anyhow::{Context, Result};
use calo_core::channel::Detector;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes ids as consecutive little-endian 64-bit words.
pub fn write_id_file<P: AsRef<Path>>(path: P, ids: &[u64]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create id file {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for id in ids {
        out.write_all(&id.to_le_bytes())?;
    }
    out.flush()?;
    Ok(())
}

/// Writes ids as a text list, one zero-padded hexadecimal id per line.
pub fn write_id_list<P: AsRef<Path>>(path: P, ids: &[u64]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create id list {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for id in ids {
        writeln!(out, "{id:#018x}")?;
    }
    out.flush()?;
    Ok(())
}

/// Writes ids to `path`, binary or text depending on its extension.
pub fn write_ids<P: AsRef<Path>>(path: P, ids: &[u64]) -> Result<()> {
    if crate::is_binary_path(&path) {
        write_id_file(path, ids)
    } else {
        write_id_list(path, ids)
    }
}

/// Writes one decoded line per id: index, raw id, then the decoded fields.
///
/// Ids with bits set in the detector's reserved range get a trailing note;
/// those bits do not take part in decoding.
pub fn write_dump<W: Write>(out: &mut W, detector: Detector, ids: &[u64]) -> Result<()> {
    let reserved_shift = detector.reserved_shift();
    for (index, &id) in ids.iter().enumerate() {
        write!(out, "{index:>8} {id:#018x} {}", detector.decode(id))?;
        if id >> reserved_shift != 0 {
            write!(out, " [reserved bits set]")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_ids;

    #[test]
    fn binary_and_text_files_reload() {
        let dir = tempfile::tempdir().unwrap();
        let ids = [0u64, 1 << 37, u64::MAX, 0x0014_0000];

        let bin = dir.path().join("sample.ids");
        write_ids(&bin, &ids).unwrap();
        assert_eq!(std::fs::metadata(&bin).unwrap().len(), 32);
        assert_eq!(load_ids(&bin).unwrap(), ids);

        let txt = dir.path().join("sample.txt");
        write_ids(&txt, &ids).unwrap();
        let text = std::fs::read_to_string(&txt).unwrap();
        assert_eq!(text.lines().next(), Some("0x0000000000000000"));
        assert_eq!(load_ids(&txt).unwrap(), ids);
    }

    #[test]
    fn dump_lines() {
        let mut out = Vec::new();
        write_dump(&mut out, Detector::Ecal, &[(1 << 20) | (4 << 17), 1 << 30]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "       0 0x0000000000180000 idet=0 ix=0 iy=0 islice=4 ilayer=1 wc=0 type=1 (photodiode)"
        );
        assert!(lines[1].ends_with("type=0 (none) [reserved bits set]"));
    }
}
