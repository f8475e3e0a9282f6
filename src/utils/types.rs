use crate::error::Error;
use alloy_primitives::{Uint, U160, U256, U512};
use num_bigint::{BigInt, BigUint};
use uniswap_sdk_core::prelude::{BigInt as CoreBigInt, FromBig};

/// Widens any fixed-width [`Uint`] into an arbitrary-precision [`BigUint`].
#[inline]
pub fn uint_to_big_uint<const BITS: usize, const LIMBS: usize>(x: Uint<BITS, LIMBS>) -> BigUint {
    BigUint::from_bytes_be(&x.to_be_bytes_vec())
}

/// Narrows a [`BigUint`] into a [`U256`], failing if it does not fit.
#[inline]
pub fn big_uint_to_u256(x: &BigUint) -> Result<U256, Error> {
    U256::try_from_be_slice(&x.to_bytes_be()).ok_or(Error::SafeCastToU256Overflow)
}

/// Narrows a [`BigUint`] into a [`U160`], failing if it does not fit.
#[inline]
pub fn big_uint_to_u160(x: &BigUint) -> Result<U160, Error> {
    U160::try_from_be_slice(&x.to_bytes_be()).ok_or(Error::SafeCastToU160Overflow)
}

/// Widens a 512-bit integer of the core SDK into an arbitrary-precision [`BigInt`].
#[inline]
pub fn core_to_big_int(x: CoreBigInt) -> BigInt {
    let magnitude = BigInt::from(uint_to_big_uint(U512::from_big_int(if x.is_negative() {
        -x
    } else {
        x
    })));
    if x.is_negative() {
        -magnitude
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;
    use uniswap_sdk_core::prelude::ToBig;

    #[test]
    fn widens_and_narrows() {
        let x = U256::from(123456789_u64) << 200_usize;
        let big = uint_to_big_uint(x);
        assert_eq!(big, BigUint::from(123456789_u64) << 200);
        assert_eq!(big_uint_to_u256(&big), Ok(x));
    }

    #[test]
    fn narrowing_fails_on_overflow() {
        let x = BigUint::from(1_u8) << 256;
        assert_eq!(big_uint_to_u256(&x), Err(Error::SafeCastToU256Overflow));
        let y = BigUint::from(1_u8) << 160;
        assert_eq!(big_uint_to_u160(&y), Err(Error::SafeCastToU160Overflow));
        assert_eq!(big_uint_to_u160(&(y - 1_u8)), Ok(U160::MAX));
    }

    #[test]
    fn zero_round_trips() {
        assert_eq!(big_uint_to_u256(&BigUint::zero()), Ok(U256::ZERO));
        assert!(uint_to_big_uint(U160::ZERO).is_zero());
    }

    #[test]
    fn widens_core_integers() {
        assert_eq!(core_to_big_int(CoreBigInt::from(-5)), BigInt::from(-5));
        assert!(core_to_big_int(CoreBigInt::ZERO).is_zero());
        assert_eq!(
            core_to_big_int(U256::MAX.to_big_int()),
            BigInt::from(uint_to_big_uint(U256::MAX))
        );
        let wide = U256::MAX.to_big_int() * U160::MAX.to_big_int();
        assert_eq!(
            core_to_big_int(-wide),
            -BigInt::from(uint_to_big_uint(U256::MAX) * uint_to_big_uint(U160::MAX))
        );
    }
}
