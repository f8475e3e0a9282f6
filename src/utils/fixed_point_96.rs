//! ## FixedPoint96
//! Constants for the Q64.96 fixed point format in which square root prices are encoded.

use alloy_primitives::U256;
use num_bigint::BigUint;
use num_traits::One;

/// The number of fractional bits of a Q64.96 number.
pub const RESOLUTION: u8 = 96;

/// `2^96`, the Q64.96 representation of 1.
pub const Q96: U256 = U256::from_limbs([0, 1 << 32, 0, 0]);

/// `2^192`, the scale of a squared Q64.96 number.
pub const Q192: U256 = U256::from_limbs([0, 0, 0, 1]);

/// [`Q96`] as a [`BigUint`].
#[inline]
pub fn q96() -> BigUint {
    BigUint::one() << RESOLUTION
}

/// [`Q192`] as a [`BigUint`].
#[inline]
pub fn q192() -> BigUint {
    BigUint::one() << (2 * RESOLUTION as usize)
}
