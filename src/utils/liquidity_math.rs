//! ## Liquidity math
//! Applies signed liquidity deltas to unsigned liquidity without wrapping.

use crate::error::Error;

/// Add a signed liquidity delta to liquidity, failing if it overflows or underflows
///
/// ## Arguments
///
/// * `x`: The liquidity before change
/// * `y`: The delta by which liquidity should be changed
///
/// ## Returns
///
/// The liquidity after the change
#[inline]
pub fn add_delta(x: u128, y: i128) -> Result<u128, Error> {
    x.checked_add_signed(y).ok_or(Error::LiquidityOverflow)
}
