//! Bit layouts of the detector channel identifiers.
//!
//! A channel id is a single `u64`. Every subsystem packs its fields into
//! fixed, non-overlapping bit ranges starting at bit 0. The ranges below are a
//! stable binary format and must stay bit-exact.

/// A contiguous range of bits inside a channel id.
///
/// Stored as the position of the lowest bit and the number of bits. The
/// extracted value of a field is `(id >> shift) & mask`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Index of the least significant bit of the field.
    pub shift: u32,

    /// Number of bits in the field. Always in `1..64`.
    pub width: u32,
}

impl Field {
    pub const fn new(shift: u32, width: u32) -> Self {
        Self { shift, width }
    }

    /// Right-aligned mask covering `width` bits.
    #[inline(always)]
    pub const fn mask(&self) -> u64 {
        (1u64 << self.width) - 1
    }

    /// Mask covering the field at its position inside the id.
    #[inline(always)]
    pub const fn span(&self) -> u64 {
        self.mask() << self.shift
    }

    /// Index of the first bit above the field.
    #[inline(always)]
    pub const fn end(&self) -> u32 {
        self.shift + self.width
    }

    /// Index of the most significant bit of the field.
    #[inline(always)]
    pub const fn last(&self) -> u32 {
        self.end() - 1
    }
}

/// Electromagnetic calorimeter (ECAL) channel layout.
///
/// | field  | bits  | mask |
/// |--------|-------|------|
/// | idet   | 0-2   | 0x07 |
/// | ix     | 3-8   | 0x3F |
/// | (gap)  | 9     |      |
/// | iy     | 10-15 | 0x3F |
/// | (gap)  | 16    |      |
/// | islice | 17-19 | 0x07 |
/// | ilayer | 20-22 | 0x07 |
/// | wc     | 23-25 | 0x07 |
///
/// `ix` and `iy` are stored biased in 6 bits and decode to a signed value.
pub mod ecal {
    use super::Field;

    pub const IDET: Field = Field::new(0, 3);
    pub const IX: Field = Field::new(3, 6);
    pub const IY: Field = Field::new(10, 6);
    pub const ISLICE: Field = Field::new(17, 3);
    pub const ILAYER: Field = Field::new(20, 3);
    pub const WC: Field = Field::new(23, 3);

    /// Unused single-bit gaps between fields.
    pub const GAPS: [u32; 2] = [9, 16];

    /// First reserved bit. Everything at or above it is ignored.
    pub const RESERVED_SHIFT: u32 = WC.end();

    pub const FIELDS: [(&str, Field); 6] = [
        ("idet", IDET),
        ("ix", IX),
        ("iy", IY),
        ("islice", ISLICE),
        ("ilayer", ILAYER),
        ("wc", WC),
    ];
}

/// Fiber (dual-readout) channel layout.
///
/// | field  | bits  | mask  |
/// |--------|-------|-------|
/// | idet   | 0-7   | 0xFF  |
/// | ilayer | 8-19  | 0xFFF |
/// | itube  | 20-31 | 0xFFF |
/// | iair   | 32-34 | 0x7   |
/// | itype  | 35-37 | 0x7   |
pub mod fiber {
    use super::Field;

    pub const IDET: Field = Field::new(0, 8);
    pub const ILAYER: Field = Field::new(8, 12);
    pub const ITUBE: Field = Field::new(20, 12);
    pub const IAIR: Field = Field::new(32, 3);
    pub const ITYPE: Field = Field::new(35, 3);

    pub const RESERVED_SHIFT: u32 = ITYPE.end();

    pub const FIELDS: [(&str, Field); 5] = [
        ("idet", IDET),
        ("ilayer", ILAYER),
        ("itube", ITUBE),
        ("iair", IAIR),
        ("itype", ITYPE),
    ];
}

/// Sampling calorimeter channel layout.
///
/// | field  | bits  | mask  |
/// |--------|-------|-------|
/// | idet   | 0-2   | 0x07  |
/// | iy     | 3-14  | 0xFFF |
/// | ix     | 15-26 | 0xFFF |
/// | ilayer | 27-38 | 0xFFF |
/// | ibox2  | 39-40 | 0x03  |
/// | islice | 41-44 | 0xF   |
///
/// Note that `iy` sits below `ix` in this layout.
pub mod sampling {
    use super::Field;

    pub const IDET: Field = Field::new(0, 3);
    pub const IY: Field = Field::new(3, 12);
    pub const IX: Field = Field::new(15, 12);
    pub const ILAYER: Field = Field::new(27, 12);
    pub const IBOX2: Field = Field::new(39, 2);
    pub const ISLICE: Field = Field::new(41, 4);

    pub const RESERVED_SHIFT: u32 = ISLICE.end();

    pub const FIELDS: [(&str, Field); 6] = [
        ("idet", IDET),
        ("iy", IY),
        ("ix", IX),
        ("ilayer", ILAYER),
        ("ibox2", IBOX2),
        ("islice", ISLICE),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_packed(fields: &[(&str, Field)], reserved_shift: u32) {
        let mut seen = 0u64;
        for (name, field) in fields {
            assert!(field.width > 0 && field.end() <= 64, "{name}");
            assert_eq!(seen & field.span(), 0, "{name} overlaps a lower field");
            seen |= field.span();
        }
        let top = fields.iter().map(|(_, f)| f.end()).max().unwrap();
        assert_eq!(top, reserved_shift);
    }

    #[test]
    fn masks_match_documented_values() {
        assert_eq!(ecal::IX.mask(), 0x3F);
        assert_eq!(ecal::IY.span(), 0x3F << 10);
        assert_eq!(fiber::IDET.mask(), 0xFF);
        assert_eq!(fiber::ITUBE.mask(), 0xFFF);
        assert_eq!(sampling::IBOX2.mask(), 0x03);
        assert_eq!(sampling::ISLICE.mask(), 0xF);
        assert_eq!(sampling::ISLICE.last(), 44);
    }

    #[test]
    fn layouts_do_not_overlap() {
        assert_packed(&ecal::FIELDS, ecal::RESERVED_SHIFT);
        assert_packed(&fiber::FIELDS, fiber::RESERVED_SHIFT);
        assert_packed(&sampling::FIELDS, sampling::RESERVED_SHIFT);
    }

    #[test]
    fn reserved_shifts() {
        assert_eq!(ecal::RESERVED_SHIFT, 26);
        assert_eq!(fiber::RESERVED_SHIFT, 38);
        assert_eq!(sampling::RESERVED_SHIFT, 45);
    }

    #[test]
    fn ecal_gaps_are_outside_every_field() {
        for gap in ecal::GAPS {
            for (name, field) in ecal::FIELDS {
                assert_eq!(field.span() & (1 << gap), 0, "gap {gap} inside {name}");
            }
        }
    }
}
