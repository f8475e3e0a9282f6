//! ## Max liquidity for amounts
//! The largest liquidity a position can mint from given token amounts at the current price, in
//! arbitrary precision so that `amount0 * sqrt(lower) * sqrt(upper)` cannot overflow.

use super::{fixed_point_96::RESOLUTION, uint_to_big_uint};
use crate::error::Error;
use alloy_primitives::{U160, U256};
use num_bigint::BigUint;

#[inline]
fn sorted_range(sqrt_ratio_a_x96: U160, sqrt_ratio_b_x96: U160) -> Result<(U160, U160), Error> {
    match sqrt_ratio_a_x96.cmp(&sqrt_ratio_b_x96) {
        core::cmp::Ordering::Less => Ok((sqrt_ratio_a_x96, sqrt_ratio_b_x96)),
        core::cmp::Ordering::Greater => Ok((sqrt_ratio_b_x96, sqrt_ratio_a_x96)),
        core::cmp::Ordering::Equal => Err(Error::InvalidRange),
    }
}

/// Computes the maximum amount of liquidity received for a given amount of token0, as
/// `amount0 * sqrt(lower) * sqrt(upper) / 2^96 / (sqrt(upper) - sqrt(lower))` rounding down at
/// each division
///
/// ## Arguments
///
/// * `sqrt_ratio_a_x96`: The price at the lower boundary
/// * `sqrt_ratio_b_x96`: The price at the upper boundary
/// * `amount0`: The token0 amount
///
/// returns: liquidity for amount0
#[inline]
pub fn max_liquidity_for_amount0(
    sqrt_ratio_a_x96: U160,
    sqrt_ratio_b_x96: U160,
    amount0: U256,
) -> Result<BigUint, Error> {
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = sorted_range(sqrt_ratio_a_x96, sqrt_ratio_b_x96)?;
    let sqrt_ratio_a_x96 = uint_to_big_uint(sqrt_ratio_a_x96);
    let sqrt_ratio_b_x96 = uint_to_big_uint(sqrt_ratio_b_x96);

    let numerator = uint_to_big_uint(amount0) * &sqrt_ratio_a_x96 * &sqrt_ratio_b_x96;
    Ok((numerator >> RESOLUTION) / (sqrt_ratio_b_x96 - sqrt_ratio_a_x96))
}

/// Computes the maximum amount of liquidity received for a given amount of token1, as
/// `amount1 * 2^96 / (sqrt(upper) - sqrt(lower))` rounding down
///
/// ## Arguments
///
/// * `sqrt_ratio_a_x96`: The price at the lower boundary
/// * `sqrt_ratio_b_x96`: The price at the upper boundary
/// * `amount1`: The token1 amount
///
/// returns: liquidity for amount1
#[inline]
pub fn max_liquidity_for_amount1(
    sqrt_ratio_a_x96: U160,
    sqrt_ratio_b_x96: U160,
    amount1: U256,
) -> Result<BigUint, Error> {
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = sorted_range(sqrt_ratio_a_x96, sqrt_ratio_b_x96)?;
    let sqrt_ratio_a_x96 = uint_to_big_uint(sqrt_ratio_a_x96);
    let sqrt_ratio_b_x96 = uint_to_big_uint(sqrt_ratio_b_x96);

    Ok((uint_to_big_uint(amount1) << RESOLUTION) / (sqrt_ratio_b_x96 - sqrt_ratio_a_x96))
}

/// Computes the maximum amount of liquidity received for a given amount of token0, token1,
/// and the prices at the tick boundaries.
///
/// Below the range the position holds only token0, above it only token1, and inside it the
/// smaller of the liquidities that each token amount supports on its side of the current price.
///
/// ## Arguments
///
/// * `sqrt_ratio_current_x96`: The current price
/// * `sqrt_ratio_a_x96`: The price at the lower boundary
/// * `sqrt_ratio_b_x96`: The price at the upper boundary
/// * `amount0`: The token0 amount
/// * `amount1`: The token1 amount
///
/// returns: maximum liquidity for the given amounts, or [`Error::InvalidRange`] if the two
/// boundaries are equal
pub fn max_liquidity_for_amounts(
    sqrt_ratio_current_x96: U160,
    sqrt_ratio_a_x96: U160,
    sqrt_ratio_b_x96: U160,
    amount0: U256,
    amount1: U256,
) -> Result<BigUint, Error> {
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = sorted_range(sqrt_ratio_a_x96, sqrt_ratio_b_x96)?;

    if sqrt_ratio_current_x96 <= sqrt_ratio_a_x96 {
        max_liquidity_for_amount0(sqrt_ratio_a_x96, sqrt_ratio_b_x96, amount0)
    } else if sqrt_ratio_current_x96 < sqrt_ratio_b_x96 {
        let liquidity0 =
            max_liquidity_for_amount0(sqrt_ratio_current_x96, sqrt_ratio_b_x96, amount0)?;
        let liquidity1 =
            max_liquidity_for_amount1(sqrt_ratio_a_x96, sqrt_ratio_current_x96, amount1)?;
        Ok(liquidity0.min(liquidity1))
    } else {
        max_liquidity_for_amount1(sqrt_ratio_a_x96, sqrt_ratio_b_x96, amount1)
    }
}
