//! ECAL channel decoding.
//!
//! The ECAL id stores six fields in the low 26 bits. Crystal coordinates
//! `ix` and `iy` are kept in 6 bits each and centred on zero by a
//! two's-complement remap. The material is not stored; it is looked up from
//! the (layer, slice) pair.

use crate::bit_utils::BitPack;
use crate::channel::{ChannelDecoder, Detector};
use calo_common::layout::ecal as layout;
use calo_common::material::MaterialType;
use core::fmt;

/// Every (ilayer, islice) pair with an assigned material.
///
/// Slices 1-4 of layer 1 are those of layer 0 in reverse order; slice 5 is
/// air in both.
pub const MATERIAL_TABLE: [(u8, u8, MaterialType); 10] = [
    (0, 1, MaterialType::Photodiode),
    (0, 2, MaterialType::ResinCookie),
    (0, 3, MaterialType::ResinCookie),
    (0, 4, MaterialType::Crystal),
    (0, 5, MaterialType::Air),
    (1, 1, MaterialType::Crystal),
    (1, 2, MaterialType::ResinCookie),
    (1, 3, MaterialType::ResinCookie),
    (1, 4, MaterialType::Photodiode),
    (1, 5, MaterialType::Air),
];

/// Derives the material of an ECAL channel from its layer and slice.
///
/// Pairs outside [`MATERIAL_TABLE`] yield [`MaterialType::None`].
pub const fn material_type(ilayer: u8, islice: u8) -> MaterialType {
    match (ilayer, islice) {
        (0, 1) | (1, 4) => MaterialType::Photodiode,
        (0, 4) | (1, 1) => MaterialType::Crystal,
        (0, 5) | (1, 5) => MaterialType::Air,
        (0, 2) | (0, 3) | (1, 2) | (1, 3) => MaterialType::ResinCookie,
        _ => MaterialType::None,
    }
}

/// A decoded ECAL channel id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EcalChannel {
    /// Detector index, bits 0-2.
    pub idet: u8,

    /// Crystal column, bits 3-8, in [-32, 31].
    pub ix: i8,

    /// Crystal row, bits 10-15, in [-32, 31].
    pub iy: i8,

    /// Slice inside the layer, bits 17-19.
    pub islice: u8,

    /// Layer, bits 20-22.
    pub ilayer: u8,

    /// Readout channel index, bits 23-25.
    pub wc: u8,

    /// Material derived from `(ilayer, islice)`.
    pub material: MaterialType,
}

impl EcalChannel {
    /// Numeric material type code (0-4).
    pub const fn type_code(&self) -> u8 {
        self.material.code()
    }
}

/// Decodes an ECAL channel id.
///
/// Bits 9 and 16 and everything from bit 26 upwards are ignored.
pub fn decode(id: u64) -> EcalChannel {
    let idet = BitPack::extract(id, layout::IDET) as u8;
    let ix = BitPack::extract_signed(id, layout::IX) as i8;
    let iy = BitPack::extract_signed(id, layout::IY) as i8;
    let islice = BitPack::extract(id, layout::ISLICE) as u8;
    let ilayer = BitPack::extract(id, layout::ILAYER) as u8;
    let wc = BitPack::extract(id, layout::WC) as u8;

    EcalChannel {
        idet,
        ix,
        iy,
        islice,
        ilayer,
        wc,
        material: material_type(ilayer, islice),
    }
}

impl ChannelDecoder for EcalChannel {
    const DETECTOR: Detector = Detector::Ecal;
    const RESERVED_SHIFT: u32 = layout::RESERVED_SHIFT;

    fn decode(id: u64) -> Self {
        decode(id)
    }
}

impl fmt::Display for EcalChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "idet={} ix={} iy={} islice={} ilayer={} wc={} type={} ({})",
            self.idet,
            self.ix,
            self.iy,
            self.islice,
            self.ilayer,
            self.wc,
            self.type_code(),
            self.material
        )
    }
}
