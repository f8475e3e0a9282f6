use super::big_uint_to_u160;
use crate::error::Error;
use alloy_primitives::U160;
use num_bigint::BigInt;
use num_traits::Signed;

/// Returns the sqrt ratio as a Q64.96 corresponding to a given ratio of amount1 and amount0
///
/// ## Arguments
///
/// * `amount1`: The numerator amount i.e., the amount of token1
/// * `amount0`: The denominator amount i.e., the amount of token0
///
/// returns: U160 The sqrt ratio as a Q64.96
pub fn encode_sqrt_ratio_x96(
    amount1: impl Into<BigInt>,
    amount0: impl Into<BigInt>,
) -> Result<U160, Error> {
    let numerator: BigInt = amount1.into() << 192;
    let denominator: BigInt = amount0.into();
    if !denominator.is_positive() || numerator.is_negative() {
        return Err(Error::InvalidPrice);
    }
    let ratio_x192 = (numerator / denominator).magnitude().clone();
    big_uint_to_u160(&ratio_x192.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Q96;

    #[test]
    fn test_encode_sqrt_ratio_x96() {
        assert_eq!(encode_sqrt_ratio_x96(1, 1).unwrap(), U160::from(Q96));
        assert_eq!(
            encode_sqrt_ratio_x96(100, 1).unwrap(),
            U160::from(792281625142643375935439503360_u128)
        );
        assert_eq!(
            encode_sqrt_ratio_x96(1, 100).unwrap(),
            U160::from(7922816251426433759354395033_u128)
        );
        assert_eq!(
            encode_sqrt_ratio_x96(111, 333).unwrap(),
            U160::from(45742400955009932534161870629_u128)
        );
        assert_eq!(
            encode_sqrt_ratio_x96(333, 111).unwrap(),
            U160::from(137227202865029797602485611888_u128)
        );
    }

    #[test]
    fn rejects_zero_denominator() {
        assert_eq!(encode_sqrt_ratio_x96(1, 0), Err(Error::InvalidPrice));
        assert_eq!(encode_sqrt_ratio_x96(-1, 1), Err(Error::InvalidPrice));
    }

    #[test]
    fn rejects_ratios_past_160_bits() {
        assert_eq!(
            encode_sqrt_ratio_x96(BigInt::from(1) << 160, 1),
            Err(Error::SafeCastToU160Overflow)
        );
    }
}
