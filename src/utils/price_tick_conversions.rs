//! ## Price and tick conversions
//! Utility functions for converting between [`i32`] ticks and decimal-adjusted [`Price`]s.

use super::{encode_sqrt_ratio_x96, get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio, MAX_TICK};
use crate::{
    entities::{Price, Token},
    error::Error,
};

/// Returns a price object corresponding to the input tick and the base/quote token.
/// Inputs must be tokens because the address order is used to interpret the price represented by
/// the tick.
///
/// ## Arguments
///
/// * `base_token`: the base token of the price
/// * `quote_token`: the quote token of the price
/// * `tick`: the tick for which to return the price
#[inline]
pub fn tick_to_price(base_token: Token, quote_token: Token, tick: i32) -> Result<Price, Error> {
    Price::from_sqrt_ratio(base_token, quote_token, get_sqrt_ratio_at_tick(tick)?)
}

/// Returns the first tick for which the given price is greater than or equal to the tick price
///
/// ## Arguments
///
/// * `price`: for which to return the closest tick that represents a price less than or equal to
///   the input price, i.e. the price of the returned tick is less than or equal to the input price
pub fn price_to_closest_tick(price: &Price) -> Result<i32, Error> {
    let sorted = price.base.sorts_before(&price.quote)?;
    let value = price.value.as_ref().ok_or(Error::InvalidPrice)?;
    // quote per base in base units
    let (numerator, denominator) = price.base_unit_ratio().ok_or(Error::InvalidPrice)?;
    let sqrt_ratio_x96 = if sorted {
        encode_sqrt_ratio_x96(numerator, denominator)?
    } else {
        encode_sqrt_ratio_x96(denominator, numerator)?
    };
    let tick = get_tick_at_sqrt_ratio(sqrt_ratio_x96)?;
    if tick == MAX_TICK {
        return Ok(tick);
    }
    let next_tick_price = tick_to_price(price.base.clone(), price.quote.clone(), tick + 1)?;
    let next_tick_value = next_tick_price.value.as_ref().ok_or(Error::InvalidPrice)?;
    Ok(if sorted {
        if value >= next_tick_value {
            tick + 1
        } else {
            tick
        }
    } else if value <= next_tick_value {
        tick + 1
    } else {
        tick
    })
}
