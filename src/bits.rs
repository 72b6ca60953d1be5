//! Low-level functions for byte-wide bit manipulation.
//!
//! Bits are numbered from the least significant bit, and masks are always scanned in ascending order of bit offsets.

//-----------------------------------------------------------------------------

/// Number of bits in `u8`.
pub const BYTE_BITS: usize = 8;

/// Number of distinct `u8` values.
pub const BYTE_VALUES: usize = 1 << BYTE_BITS;

//-----------------------------------------------------------------------------

const LOW_SET: [u8; 9] = [
    0b0000_0000,
    0b0000_0001, 0b0000_0011, 0b0000_0111, 0b0000_1111,
    0b0001_1111, 0b0011_1111, 0b0111_1111, 0b1111_1111,
];

//-----------------------------------------------------------------------------

/// Returns a byte with the lowest `n` bits set.
///
/// # Examples
///
/// ```
/// use pextgen::bits;
///
/// assert_eq!(bits::low_set(3), 0b111);
/// ```
///
/// # Panics
///
/// May panic if `n > 8`.
#[inline]
pub fn low_set(n: usize) -> u8 {
    LOW_SET[n]
}

/// Returns the number of set bits in `value`.
///
/// # Examples
///
/// ```
/// use pextgen::bits;
///
/// assert_eq!(bits::popcount(0b1011_0100), 4);
/// ```
#[inline]
pub fn popcount(value: u8) -> u8 {
    value.count_ones() as u8
}

/// Parallel bit extract.
///
/// Gathers the bits of `value` at the offsets of the set bits in `mask` and packs them into the low end of the result.
/// The relative order of the bits is preserved.
///
/// # Examples
///
/// ```
/// use pextgen::bits;
///
/// assert_eq!(bits::pext(0b1011_0100, 0b1100_1010), 0b1000);
/// assert_eq!(bits::pext(0xA5, 0xFF), 0xA5);
/// ```
pub fn pext(value: u8, mask: u8) -> u8 {
    let mut result: u8 = 0;
    let mut out: usize = 0;
    for offset in 0..BYTE_BITS {
        if mask & (1 << offset) != 0 {
            if value & (1 << offset) != 0 {
                result |= 1 << out;
            }
            out += 1;
        }
    }
    result
}

/// Parallel bit deposit.
///
/// Scatters the low-order bits of `value` to the offsets of the set bits in `mask`.
/// Bits not set in `mask` are zero in the result.
/// This is the inverse of [`pext`] under the same mask.
///
/// # Examples
///
/// ```
/// use pextgen::bits;
///
/// assert_eq!(bits::pdep(0b1000, 0b1100_1010), 0b1000_0000);
/// assert_eq!(bits::pdep(0b0101, 0b1111_0000), 0b0101_0000);
/// ```
pub fn pdep(value: u8, mask: u8) -> u8 {
    let mut result: u8 = 0;
    let mut cursor: usize = 0;
    for offset in 0..BYTE_BITS {
        if mask & (1 << offset) != 0 {
            if value & (1 << cursor) != 0 {
                result |= 1 << offset;
            }
            cursor += 1;
        }
    }
    result
}

//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal;

    #[test]
    fn low_set_test() {
        assert_eq!(low_set(0), 0, "low_set(0) failed");
        assert_eq!(low_set(5), 0x1F, "low_set(5) failed");
        assert_eq!(low_set(8), 0xFF, "low_set(8) failed");
        for n in 0..=BYTE_BITS {
            assert_eq!(popcount(low_set(n)) as usize, n, "low_set({}) has the wrong number of bits", n);
        }
    }

    #[test]
    fn popcount_test() {
        assert_eq!(popcount(0), 0, "popcount(0) failed");
        assert_eq!(popcount(0xFF), 8, "popcount(0xFF) failed");
        for value in 0..BYTE_VALUES {
            let value = value as u8;
            let naive = (0..BYTE_BITS).filter(|&offset| value & (1 << offset) != 0).count();
            assert_eq!(popcount(value) as usize, naive, "popcount({:#010b}) failed", value);
            assert_eq!(popcount(value) + popcount(!value), 8, "popcount({:#010b}) is not complementary", value);
        }
    }

    #[test]
    fn empty_and_full_mask() {
        for value in 0..BYTE_VALUES {
            let value = value as u8;
            assert_eq!(pext(value, 0), 0, "pext({:#04X}, 0) failed", value);
            assert_eq!(pdep(value, 0), 0, "pdep({:#04X}, 0) failed", value);
            assert_eq!(pext(value, 0xFF), value, "pext({:#04X}, 0xFF) failed", value);
            assert_eq!(pdep(value, 0xFF), value, "pdep({:#04X}, 0xFF) failed", value);
        }
    }

    #[test]
    fn regression_vector() {
        // Mask offsets {1, 3, 6, 7}; the value only has offset 7 set among them.
        assert_eq!(pext(0b1011_0100, 0b1100_1010), 0b0000_1000, "pext regression vector failed");
        assert_eq!(pdep(0b0000_1000, 0b1100_1010), 0b1000_0000, "pdep regression vector failed");
    }

    #[test]
    fn pext_is_packed() {
        for (value, mask) in internal::all_pairs() {
            let high = !low_set(popcount(mask) as usize);
            assert_eq!(pext(value, mask) & high, 0, "pext({:#04X}, {:#04X}) has bits past the mask weight", value, mask);
        }
    }

    #[test]
    fn pdep_within_mask() {
        for (value, mask) in internal::all_pairs() {
            assert_eq!(pdep(value, mask) & !mask, 0, "pdep({:#04X}, {:#04X}) has bits outside the mask", value, mask);
        }
    }

    #[test]
    fn round_trip() {
        for (value, mask) in internal::all_pairs() {
            let extracted = pext(value, mask) & low_set(popcount(mask) as usize);
            assert_eq!(pdep(extracted, mask), value & mask, "pdep(pext({:#04X}, {:#04X})) failed", value, mask);
        }
    }

    #[test]
    fn single_bit_masks() {
        let pairs = internal::random_pairs(1000);
        for (value, _) in pairs {
            for offset in 0..BYTE_BITS {
                let mask = 1u8 << offset;
                assert_eq!(pext(value, mask), (value >> offset) & 1, "pext({:#04X}, {:#04X}) failed", value, mask);
                assert_eq!(pdep(value, mask), (value & 1) << offset, "pdep({:#04X}, {:#04X}) failed", value, mask);
            }
        }
    }

    #[test]
    #[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
    fn hardware_agreement() {
        use core::arch::x86_64::{_pdep_u32, _pext_u32};
        for (value, mask) in internal::all_pairs() {
            let (hw_pext, hw_pdep) = unsafe { (_pext_u32(value as u32, mask as u32), _pdep_u32(value as u32, mask as u32)) };
            assert_eq!(pext(value, mask) as u32, hw_pext, "pext({:#04X}, {:#04X}) differs from PEXT", value, mask);
            assert_eq!(pdep(value, mask) as u32, hw_pdep, "pdep({:#04X}, {:#04X}) differs from PDEP", value, mask);
        }
    }
}

//-----------------------------------------------------------------------------
