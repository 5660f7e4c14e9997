//! Common definitions shared across the calorimeter channel-id tooling.
//!
//! This crate provides the bit layouts of the channel identifiers produced by
//! each detector subsystem and the enumerations used to classify decoded
//! fields. It has no dependencies and is usable from `no_std` contexts such as
//! embedded readout code as well as from host-side analysis tools.

#![no_std]

/// Bit-range descriptors for every field of every channel-id layout.
///
/// Each layout is a set of `Field` constants whose ranges never overlap.
/// Bits above a layout's highest field are reserved for future extension and
/// must be ignored by decoders.
pub mod layout;

/// Material classifications derived from or carried by decoded channel ids.
///
/// Includes the ECAL material type, which is derived from (layer, slice)
/// rather than stored in the id, and the fiber medium/material enumerants.
pub mod material;
