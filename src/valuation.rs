//! ## Position valuation
//! Token amounts locked around initialized ticks, as drawn by a liquidity chart, and the price
//! impact of a trade against an independent spot price.

use crate::{
    entities::{
        token_amount, BaseCurrency, Fraction, FractionBase, Percent, Pool, Price, TokenAmount,
    },
    error::Error,
    utils::{
        add_delta, big_uint_to_u256, get_amount_0_delta, get_amount_1_delta,
        get_sqrt_ratio_at_tick, MAX_TICK,
    },
};
use alloc::vec::Vec;
use alloy_primitives::U256;
use derive_more::Deref;
use num_bigint::BigUint;
use num_integer::Integer;
use uniswap_sdk_core::prelude::BigInt as CoreBigInt;

/// The amounts of the two pool tokens held by some liquidity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LockedAmounts {
    pub amount0: TokenAmount,
    pub amount1: TokenAmount,
}

/// An initialized tick and the liquidity that becomes active when the price crosses it upward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickLiquidity {
    pub tick: i32,
    pub liquidity_net: i128,
}

/// One bar of a liquidity chart, with amounts in base units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LiquidityBar {
    pub tick: i32,
    pub liquidity_active: u128,
    pub amount0_locked: U256,
    pub amount1_locked: U256,
}

/// The bars of a liquidity chart in ascending tick order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deref)]
pub struct LiquidityDistribution {
    #[deref]
    pub bars: Vec<LiquidityBar>,
    /// The bar containing the current tick, if any initialized tick lies at or below it.
    pub active_index: Option<usize>,
}

/// The lower tick of the bar containing the current tick, kept within the usable range so that
/// a pool priced at the very bottom still has a bar.
#[inline]
fn active_tick(pool: &Pool) -> i32 {
    let tick_spacing = pool.tick_spacing();
    (pool.tick_current.div_floor(&tick_spacing) * tick_spacing).max(pool.usable_min_tick())
}

#[inline]
fn bar_upper_tick(pool: &Pool, tick: i32) -> i32 {
    tick.saturating_add(pool.tick_spacing()).min(MAX_TICK)
}

/// Both amounts `liquidity` spans across `[tick, tick + tick_spacing]`, in base units.
fn bar_amounts(pool: &Pool, tick: i32, liquidity: u128) -> Result<(U256, U256), Error> {
    let sqrt_ratio_lower_x96 = get_sqrt_ratio_at_tick(tick)?;
    let sqrt_ratio_upper_x96 = get_sqrt_ratio_at_tick(bar_upper_tick(pool, tick))?;
    let liquidity = BigUint::from(liquidity);
    Ok((
        big_uint_to_u256(&get_amount_0_delta(
            sqrt_ratio_lower_x96,
            sqrt_ratio_upper_x96,
            &liquidity,
        )?)?,
        big_uint_to_u256(&get_amount_1_delta(
            sqrt_ratio_lower_x96,
            sqrt_ratio_upper_x96,
            &liquidity,
        ))?,
    ))
}

/// The amounts `liquidity` holds in the active bar, split at the current price.
fn active_bar_amounts(pool: &Pool, liquidity: u128) -> Result<(U256, U256), Error> {
    let tick_lower = active_tick(pool);
    let sqrt_ratio_lower_x96 = get_sqrt_ratio_at_tick(tick_lower)?;
    let sqrt_ratio_upper_x96 = get_sqrt_ratio_at_tick(bar_upper_tick(pool, tick_lower))?;
    let sqrt_ratio_x96 = pool
        .sqrt_ratio_x96
        .clamp(sqrt_ratio_lower_x96, sqrt_ratio_upper_x96);
    let liquidity = BigUint::from(liquidity);
    Ok((
        big_uint_to_u256(&get_amount_0_delta(
            sqrt_ratio_x96,
            sqrt_ratio_upper_x96,
            &liquidity,
        )?)?,
        big_uint_to_u256(&get_amount_1_delta(
            sqrt_ratio_lower_x96,
            sqrt_ratio_x96,
            &liquidity,
        ))?,
    ))
}

#[inline]
fn locked_amounts(pool: &Pool, (amount0, amount1): (U256, U256)) -> Result<LockedAmounts, Error> {
    Ok(LockedAmounts {
        amount0: token_amount(&pool.token0, amount0)?,
        amount1: token_amount(&pool.token1, amount1)?,
    })
}

/// The amounts locked by `liquidity` across the bar `[tick, tick + tick_spacing]`.
///
/// ## Arguments
///
/// * `pool`: The pool the liquidity belongs to
/// * `tick`: The lower tick of the bar
/// * `liquidity`: The liquidity active across the bar
#[inline]
pub fn tokens_locked(pool: &Pool, tick: i32, liquidity: u128) -> Result<LockedAmounts, Error> {
    locked_amounts(pool, bar_amounts(pool, tick, liquidity)?)
}

/// The amounts locked by `liquidity` in the bar containing the current tick, split at the
/// current price: token0 above it, token1 below it.
///
/// At the bottom of the price range the bar starts at the pool's lowest usable tick.
#[inline]
pub fn active_tokens_locked(pool: &Pool, liquidity: u128) -> Result<LockedAmounts, Error> {
    locked_amounts(pool, active_bar_amounts(pool, liquidity)?)
}

/// Builds the bars of a liquidity chart from the pool's initialized ticks.
///
/// Active liquidity accumulates `liquidity_net` from the lowest tick upward. Bars above the
/// active tick hold only token0 and bars below it only token1. The bar containing the current
/// tick is relabelled to the active tick and split at the current price.
///
/// ## Arguments
///
/// * `pool`: The pool the ticks belong to
/// * `ticks`: The initialized ticks in any order
///
/// returns: [`Error::LiquidityOverflow`] if the running liquidity leaves the `u128` range
pub fn liquidity_bars(
    pool: &Pool,
    ticks: &[TickLiquidity],
) -> Result<LiquidityDistribution, Error> {
    let mut ticks = ticks.to_vec();
    ticks.sort_unstable_by_key(|tick| tick.tick);
    let tick_active = active_tick(pool);
    let active_index = ticks.iter().rposition(|tick| tick.tick <= tick_active);

    let mut liquidity_active = 0_u128;
    let mut bars = Vec::with_capacity(ticks.len());
    for (index, tick) in ticks.iter().enumerate() {
        liquidity_active = add_delta(liquidity_active, tick.liquidity_net)?;
        let bar = if Some(index) == active_index {
            let (amount0_locked, amount1_locked) = active_bar_amounts(pool, liquidity_active)?;
            LiquidityBar {
                tick: tick_active,
                liquidity_active,
                amount0_locked,
                amount1_locked,
            }
        } else {
            let (amount0, amount1) = bar_amounts(pool, tick.tick, liquidity_active)?;
            let above = tick.tick > tick_active;
            LiquidityBar {
                tick: tick.tick,
                liquidity_active,
                amount0_locked: if above { amount0 } else { U256::ZERO },
                amount1_locked: if above { U256::ZERO } else { amount1 },
            }
        };
        bars.push(bar);
    }
    tracing::trace!(bars = bars.len(), ?active_index, "built liquidity bars");
    Ok(LiquidityDistribution { bars, active_index })
}

/// The amount in whole tokens.
#[inline]
fn whole_units(amount: &TokenAmount) -> Fraction {
    amount.as_fraction() / Fraction::new(amount.decimal_scale, 1)
}

/// The price at which `amount_in` was exchanged for `amount_out`, in whole tokens.
///
/// Returns `None` for an empty input amount.
pub fn execution_price(amount_in: &TokenAmount, amount_out: &TokenAmount) -> Option<Price> {
    if amount_in.numerator == CoreBigInt::ZERO {
        return None;
    }
    Some(Price::new(
        amount_in.currency.clone(),
        amount_out.currency.clone(),
        whole_units(amount_out) / whole_units(amount_in),
    ))
}

/// The share by which the execution price falls short of the spot price,
/// `(spot - execution) / spot`.
///
/// The execution price is reoriented to the spot price's pair first. Returns `None` while either
/// value is unknown, when the spot price is zero, or when the pairs differ.
pub fn price_impact(spot: &Price, execution: &Price) -> Option<Percent> {
    let execution = if execution.base.equals(&spot.base) && execution.quote.equals(&spot.quote) {
        execution.clone()
    } else if execution.base.equals(&spot.quote) && execution.quote.equals(&spot.base) {
        execution.invert()
    } else {
        tracing::warn!(
            spot_base = %spot.base.address(),
            spot_quote = %spot.quote.address(),
            execution_base = %execution.base.address(),
            execution_quote = %execution.quote.address(),
            "price impact between different pairs"
        );
        return None;
    };
    relative_shortfall(spot.value.as_ref()?, execution.value.as_ref()?)
}

/// The share of value lost between the input and the output of a trade, each valued in a
/// common reference currency such as USD.
#[inline]
pub fn value_impact(input_value: &Fraction, output_value: &Fraction) -> Option<Percent> {
    relative_shortfall(input_value, output_value)
}

#[inline]
fn relative_shortfall(reference: &Fraction, actual: &Fraction) -> Option<Percent> {
    if reference.numerator == CoreBigInt::ZERO {
        return None;
    }
    let shortfall = (reference.clone() - actual) / reference;
    Some(Percent::new(shortfall.numerator, shortfall.denominator))
}
