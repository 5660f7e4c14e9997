//! I/O utilities for channel-id files.
//!
//! Provides functions for reading channel ids from binary files (raw
//! little-endian 64-bit words) and from text id lists, and for writing both
//! forms back out. The file contents are plain ids; no framing is added on
//! top of the detector bit layouts.

/// Binary id file loading.
///
/// Reads a file as a bit vector and slices it into 64-bit little-endian
/// words, one channel id per word. Also selects the binary or text reader
/// from a path's extension.
pub mod loader;

/// Parser for text id lists.
///
/// Accepts one id per line in decimal, hexadecimal (`0x`) or binary (`0b`)
/// notation with optional `_` separators and `#` comments.
pub mod parser;

/// Writers for binary and text id files.
pub mod writer;

use std::path::Path;

/// Extensions treated as binary id files. Anything else is read as text.
pub const BINARY_EXTENSIONS: [&str; 2] = ["ids", "bin"];

/// Returns true when `path` should be read as a binary id file.
pub fn is_binary_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            BINARY_EXTENSIONS
                .iter()
                .any(|bin| ext.eq_ignore_ascii_case(bin))
        })
}
