//! Sampling calorimeter channel decoding.

use crate::bit_utils::BitPack;
use crate::channel::{ChannelDecoder, Detector};
use calo_common::layout::sampling as layout;
use core::fmt;

/// A decoded sampling calorimeter channel id.
///
/// All fields are unsigned. `iy` occupies the lower bits of the id and `ix`
/// sits above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SamplingChannel {
    pub idet: u8,
    pub ix: u16,
    pub iy: u16,
    pub ilayer: u16,
    pub ibox2: u8,
    pub islice: u8,
}

/// Decodes a sampling calorimeter channel id. Bits 45 and above are ignored.
pub fn decode(id: u64) -> SamplingChannel {
    SamplingChannel {
        idet: BitPack::extract(id, layout::IDET) as u8,
        ix: BitPack::extract(id, layout::IX) as u16,
        iy: BitPack::extract(id, layout::IY) as u16,
        ilayer: BitPack::extract(id, layout::ILAYER) as u16,
        ibox2: BitPack::extract(id, layout::IBOX2) as u8,
        islice: BitPack::extract(id, layout::ISLICE) as u8,
    }
}

impl ChannelDecoder for SamplingChannel {
    const DETECTOR: Detector = Detector::Sampling;
    const RESERVED_SHIFT: u32 = layout::RESERVED_SHIFT;

    fn decode(id: u64) -> Self {
        decode(id)
    }
}

impl fmt::Display for SamplingChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "idet={} ix={} iy={} ilayer={} ibox2={} islice={}",
            self.idet, self.ix, self.iy, self.ilayer, self.ibox2, self.islice
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::pack;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn iy_is_below_ix() {
        let ch = decode(1 << 3);
        assert_eq!((ch.iy, ch.ix), (1, 0));
        let ch = decode(1 << 15);
        assert_eq!((ch.iy, ch.ix), (0, 1));
    }

    #[test]
    fn packed_fields() {
        let id = pack(&[
            (layout::IDET, 5),
            (layout::IY, 0x0AB),
            (layout::IX, 0xFFF),
            (layout::ILAYER, 42),
            (layout::IBOX2, 3),
            (layout::ISLICE, 9),
        ]);
        assert_eq!(
            decode(id),
            SamplingChannel {
                idet: 5,
                ix: 0xFFF,
                iy: 0x0AB,
                ilayer: 42,
                ibox2: 3,
                islice: 9,
            }
        );
    }

    #[test]
    fn single_bits_stay_in_their_field() {
        for bit in 0..layout::RESERVED_SHIFT {
            let ch = decode(1 << bit);
            let fields = [
                (layout::IDET, ch.idet as u64),
                (layout::IY, ch.iy as u64),
                (layout::IX, ch.ix as u64),
                (layout::ILAYER, ch.ilayer as u64),
                (layout::IBOX2, ch.ibox2 as u64),
                (layout::ISLICE, ch.islice as u64),
            ];
            for (field, value) in fields {
                let expected = if bit >= field.shift && bit < field.end() {
                    1 << (bit - field.shift)
                } else {
                    0
                };
                assert_eq!(value, expected, "bit {bit}");
            }
        }
    }

    #[test]
    fn reserved_bits_are_ignored() {
        let mut rng = StdRng::seed_from_u64(0x5CA1);
        for _ in 0..10_000 {
            let id: u64 = rng.r#gen();
            let low = id & !BitPack::above(u64::MAX, layout::RESERVED_SHIFT);
            assert_eq!(decode(id), decode(low));
            assert_eq!(decode(id | (0x7FFFF << 45)), decode(low));
        }
    }
}
