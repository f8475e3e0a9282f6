//! ## Bit Math
//! Bit scanning helpers for fixed-width unsigned integers.

use alloy_primitives::Uint;

/// Returns the index of the most significant set bit of `x`, or `None` if `x` is zero.
#[inline]
pub fn most_significant_bit<const BITS: usize, const LIMBS: usize>(
    x: Uint<BITS, LIMBS>,
) -> Option<usize> {
    x.bit_len().checked_sub(1)
}
