use calo_common::layout::Field;

pub struct BitPack;

impl BitPack {
    #[inline(always)]
    pub fn get(id: u64, index: u32) -> bool {
        (id >> index) & 1 == 1
    }

    #[inline(always)]
    pub fn extract(id: u64, field: Field) -> u64 {
        (id >> field.shift) & field.mask()
    }

    /// Reinterprets a `width`-bit unsigned value as signed.
    ///
    /// Values at or above `2^(width-1)` wrap to `value - 2^width`. Only the low
    /// `width` bits of `value` are considered.
    #[inline(always)]
    pub fn to_signed(value: u64, width: u32) -> i64 {
        let modulus = 1i64 << width;
        let value = (value & (modulus as u64 - 1)) as i64;
        if value >= modulus >> 1 {
            value - modulus
        } else {
            value
        }
    }

    /// Extracts a field and applies [`BitPack::to_signed`] over its width.
    #[inline(always)]
    pub fn extract_signed(id: u64, field: Field) -> i64 {
        Self::to_signed(Self::extract(id, field), field.width)
    }

    /// Bits at or above `shift`. Zero when `shift >= 64`.
    #[inline(always)]
    pub fn above(id: u64, shift: u32) -> u64 {
        id.checked_shr(shift).map_or(0, |high| high << shift)
    }
}
