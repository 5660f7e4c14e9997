//! Fiber channel decoding.
//!
//! Every field is a plain unsigned extraction. The `iair` and `itype`
//! enumerants keep their raw values; unassigned values are passed through for
//! the caller to interpret.

use crate::bit_utils::BitPack;
use crate::channel::{ChannelDecoder, Detector};
use calo_common::layout::fiber as layout;
use calo_common::material::{FiberMaterial, FiberMedium};
use core::fmt;

/// A decoded fiber channel id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FiberChannel {
    /// Detector index, bits 0-7.
    pub idet: u8,
    /// Layer, bits 8-19.
    pub ilayer: u16,
    /// Tube within the layer, bits 20-31.
    pub itube: u16,
    /// Air-hole marker, bits 32-34.
    pub iair: u8,
    /// Fiber type, bits 35-37.
    pub itype: u8,
}

impl FiberChannel {
    /// Classification of `iair`, or `None` for unassigned values.
    pub const fn medium(&self) -> Option<FiberMedium> {
        FiberMedium::from_raw(self.iair)
    }

    /// Classification of `itype`, or `None` for unassigned values.
    pub const fn material(&self) -> Option<FiberMaterial> {
        FiberMaterial::from_raw(self.itype)
    }
}

/// Decodes a fiber channel id. Bits 38 and above are ignored.
pub fn decode(id: u64) -> FiberChannel {
    FiberChannel {
        idet: BitPack::extract(id, layout::IDET) as u8,
        ilayer: BitPack::extract(id, layout::ILAYER) as u16,
        itube: BitPack::extract(id, layout::ITUBE) as u16,
        iair: BitPack::extract(id, layout::IAIR) as u8,
        itype: BitPack::extract(id, layout::ITYPE) as u8,
    }
}

impl ChannelDecoder for FiberChannel {
    const DETECTOR: Detector = Detector::Fiber;
    const RESERVED_SHIFT: u32 = layout::RESERVED_SHIFT;

    fn decode(id: u64) -> Self {
        decode(id)
    }
}

impl fmt::Display for FiberChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "idet={} ilayer={} itube={} iair={} itype={}",
            self.idet, self.ilayer, self.itube, self.iair, self.itype
        )?;
        if let (Some(medium), Some(material)) = (self.medium(), self.material()) {
            write!(f, " ({medium}, {material})")?;
        }
        Ok(())
    }
}
