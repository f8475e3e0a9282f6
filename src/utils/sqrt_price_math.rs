//! ## Sqrt Price Math
//! Token amounts held by a range of liquidity between two square root prices. All arithmetic is
//! carried out on [`BigUint`] so that intermediate products such as `liquidity << 96` can never
//! overflow, and truncates in the same order as the on-chain library.

use super::{fixed_point_96::RESOLUTION, uint_to_big_uint};
use crate::error::Error;
use alloy_primitives::U160;
use num_bigint::BigUint;
use num_traits::Zero;

#[inline]
fn sort2(a: U160, b: U160) -> (BigUint, BigUint) {
    if a > b {
        (uint_to_big_uint(b), uint_to_big_uint(a))
    } else {
        (uint_to_big_uint(a), uint_to_big_uint(b))
    }
}

/// Gets the amount0 delta between two prices
///
/// Calculates liquidity / sqrt(lower) - liquidity / sqrt(upper),
/// i.e. `(liquidity << 96) * (sqrt(upper) - sqrt(lower)) / sqrt(upper) / sqrt(lower)`, rounding
/// down at each division
///
/// ## Arguments
///
/// * `sqrt_ratio_a_x96`: A sqrt price assumed to be lower otherwise swapped
/// * `sqrt_ratio_b_x96`: Another sqrt price
/// * `liquidity`: The amount of usable liquidity
///
/// ## Returns
///
/// Amount of token0 held by a position of size liquidity between the two passed prices
#[inline]
pub fn get_amount_0_delta(
    sqrt_ratio_a_x96: U160,
    sqrt_ratio_b_x96: U160,
    liquidity: &BigUint,
) -> Result<BigUint, Error> {
    if sqrt_ratio_a_x96 == sqrt_ratio_b_x96 {
        return Ok(BigUint::zero());
    }
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = sort2(sqrt_ratio_a_x96, sqrt_ratio_b_x96);
    if sqrt_ratio_a_x96.is_zero() {
        return Err(Error::InvalidPrice);
    }

    let numerator_1 = liquidity << RESOLUTION;
    let numerator_2 = &sqrt_ratio_b_x96 - &sqrt_ratio_a_x96;

    Ok(numerator_1 * numerator_2 / sqrt_ratio_b_x96 / sqrt_ratio_a_x96)
}

/// Gets the amount1 delta between two prices
///
/// Calculates `liquidity * (sqrt(upper) - sqrt(lower)) / 2^96`, rounding down
///
/// ## Arguments
///
/// * `sqrt_ratio_a_x96`: A sqrt price assumed to be lower otherwise swapped
/// * `sqrt_ratio_b_x96`: Another sqrt price
/// * `liquidity`: The amount of usable liquidity
///
/// ## Returns
///
/// Amount of token1 held by a position of size liquidity between the two passed prices
#[inline]
pub fn get_amount_1_delta(
    sqrt_ratio_a_x96: U160,
    sqrt_ratio_b_x96: U160,
    liquidity: &BigUint,
) -> BigUint {
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = sort2(sqrt_ratio_a_x96, sqrt_ratio_b_x96);
    (liquidity * (sqrt_ratio_b_x96 - sqrt_ratio_a_x96)) >> RESOLUTION
}
