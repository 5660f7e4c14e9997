//! Decoders for calorimeter detector channel identifiers.
//!
//! Each detector subsystem packs the location of a channel into a single
//! 64-bit id. This crate unpacks those ids into typed structures. Decoding is
//! pure, allocation-free and total: every `u64` is accepted, reserved bits are
//! ignored, and unassigned field values pass through unchanged. All modules are
//! `no_std` so they can be linked into readout firmware as well as host tools.

#![no_std]

use core::fmt;

/// Bit extraction helpers for packed channel ids.
///
/// Provides mask-and-shift field extraction and the explicit two's-complement
/// remap used for biased coordinate fields, independent of the native integer
/// width of the caller.
pub mod bit_utils;

/// Detector dispatch and the common decoder interface.
///
/// Defines the `ChannelDecoder` trait implemented by every decoded channel
/// type, the `Detector` selector, and the `Channel` sum type used by tools
/// that handle ids from several subsystems.
pub mod channel;

/// Electromagnetic calorimeter channel decoding.
///
/// Unpacks detector, signed crystal coordinates, slice, layer and readout
/// index, and derives the material type from the (layer, slice) table.
pub mod ecal;

/// Fiber channel decoding.
///
/// Unpacks detector, layer, tube, air-hole marker and fiber type as plain
/// unsigned fields.
pub mod fiber;

/// Sampling calorimeter channel decoding.
///
/// Unpacks detector, tower coordinates, layer, box index and slice as plain
/// unsigned fields.
pub mod sampling;

#[cfg(test)]
mod testing;

/// Error types returned at the edges of the decoding API.
///
/// Decoding itself never fails. These errors cover the helpers that turn user
/// input into decoder selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaloError {
    /// A detector name did not match any known subsystem.
    ///
    /// Accepted names are `ecal`, `fiber` and `sampling` (or `scal`),
    /// compared case-insensitively.
    UnknownDetector,
}

impl fmt::Display for CaloError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaloError::UnknownDetector => {
                f.write_str("unknown detector (expected ecal, fiber or sampling)")
            }
        }
    }
}

impl core::error::Error for CaloError {}
