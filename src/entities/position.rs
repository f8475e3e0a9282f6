use super::{token_amount, BaseCurrency, Pool, Price, Token, TokenAmount};
use crate::{
    error::Error,
    utils::{
        big_uint_to_u256, get_amount_0_delta, get_amount_1_delta, get_sqrt_ratio_at_tick,
        max_liquidity_for_amounts, tick_to_price,
    },
};
use alloy_primitives::U256;
use num_bigint::BigUint;
use num_traits::Zero;

/// Represents a liquidity position on a V3 pool
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub pool: Pool,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity: u128,
}

/// Whether a position currently earns fees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PositionState {
    /// All liquidity has been withdrawn.
    Removed,
    OutOfRange,
    InRange,
}

impl Position {
    /// Constructs a position for a given pool with the given liquidity
    ///
    /// Ticks beyond the pool's usable range are clamped to it.
    ///
    /// ## Arguments
    ///
    /// * `pool`: For which pool the liquidity is assigned
    /// * `liquidity`: The amount of liquidity that is in the position
    /// * `tick_lower`: The lower tick of the position
    /// * `tick_upper`: The upper tick of the position
    ///
    /// returns: [`Error::InvalidRange`] unless `tick_lower < tick_upper`, or
    /// [`Error::InvalidTick`] for a tick that is not a multiple of the tick spacing
    pub fn new(
        pool: Pool,
        liquidity: u128,
        tick_lower: i32,
        tick_upper: i32,
    ) -> Result<Self, Error> {
        let tick_lower = tick_lower.max(pool.usable_min_tick());
        let tick_upper = tick_upper.min(pool.usable_max_tick());
        if tick_lower >= tick_upper {
            return Err(Error::InvalidRange);
        }
        for tick in [tick_lower, tick_upper] {
            if tick % pool.tick_spacing() != 0 {
                return Err(Error::InvalidTick(tick));
            }
        }
        Ok(Self {
            pool,
            tick_lower,
            tick_upper,
            liquidity,
        })
    }

    /// Computes the maximum amount of liquidity received for a given amount of token0, token1,
    /// and the prices at the tick boundaries.
    ///
    /// The ticks are clamped to the pool's usable range first, so the liquidity is sized for the
    /// range the position actually covers.
    ///
    /// ## Arguments
    ///
    /// * `pool`: The pool for which the position should be created
    /// * `tick_lower`: The lower tick of the position
    /// * `tick_upper`: The upper tick of the position
    /// * `amount0`: token0 amount
    /// * `amount1`: token1 amount
    ///
    /// ## Returns
    ///
    /// The position with the maximum amount of liquidity received
    pub fn from_amounts(
        pool: Pool,
        tick_lower: i32,
        tick_upper: i32,
        amount0: U256,
        amount1: U256,
    ) -> Result<Self, Error> {
        let tick_lower = tick_lower.max(pool.usable_min_tick());
        let tick_upper = tick_upper.min(pool.usable_max_tick());
        if tick_lower >= tick_upper {
            return Err(Error::InvalidRange);
        }
        let liquidity = max_liquidity_for_amounts(
            pool.sqrt_ratio_x96,
            get_sqrt_ratio_at_tick(tick_lower)?,
            get_sqrt_ratio_at_tick(tick_upper)?,
            amount0,
            amount1,
        )?;
        let liquidity = u128::try_from(liquidity).map_err(|_| Error::LiquidityOverflow)?;
        Self::new(pool, liquidity, tick_lower, tick_upper)
    }

    #[inline]
    pub const fn state(&self) -> PositionState {
        if self.liquidity == 0 {
            PositionState::Removed
        } else if self.pool.tick_current < self.tick_lower
            || self.pool.tick_current >= self.tick_upper
        {
            PositionState::OutOfRange
        } else {
            PositionState::InRange
        }
    }

    /// Returns the price of token0 at the lower tick
    #[inline]
    pub fn token0_price_lower(&self) -> Result<Price, Error> {
        tick_to_price(
            self.pool.token0.clone(),
            self.pool.token1.clone(),
            self.tick_lower,
        )
    }

    /// Returns the price of token0 at the upper tick
    #[inline]
    pub fn token0_price_upper(&self) -> Result<Price, Error> {
        tick_to_price(
            self.pool.token0.clone(),
            self.pool.token1.clone(),
            self.tick_upper,
        )
    }

    /// The prices of `base` at the two ends of the range, lowest first.
    ///
    /// Quoting in token1 maps the upper tick to the lower price, so the ends swap.
    pub fn price_range(&self, base: &Token) -> Result<(Price, Price), Error> {
        let lower = self.token0_price_lower()?;
        let upper = self.token0_price_upper()?;
        if self.pool.token0.equals(base) {
            Ok((lower, upper))
        } else if self.pool.token1.equals(base) {
            Ok((upper.invert(), lower.invert()))
        } else {
            Err(Error::InvalidToken)
        }
    }

    /// Returns the amount of token0 that this position's liquidity could be burned for at the
    /// current pool price
    pub fn amount0(&self) -> Result<TokenAmount, Error> {
        let liquidity = BigUint::from(self.liquidity);
        let raw = if self.pool.tick_current < self.tick_lower {
            get_amount_0_delta(
                get_sqrt_ratio_at_tick(self.tick_lower)?,
                get_sqrt_ratio_at_tick(self.tick_upper)?,
                &liquidity,
            )?
        } else if self.pool.tick_current < self.tick_upper {
            get_amount_0_delta(
                self.pool.sqrt_ratio_x96,
                get_sqrt_ratio_at_tick(self.tick_upper)?,
                &liquidity,
            )?
        } else {
            BigUint::zero()
        };
        token_amount(&self.pool.token0, big_uint_to_u256(&raw)?)
    }

    /// Returns the amount of token1 that this position's liquidity could be burned for at the
    /// current pool price
    pub fn amount1(&self) -> Result<TokenAmount, Error> {
        let liquidity = BigUint::from(self.liquidity);
        let raw = if self.pool.tick_current < self.tick_lower {
            BigUint::zero()
        } else if self.pool.tick_current < self.tick_upper {
            get_amount_1_delta(
                get_sqrt_ratio_at_tick(self.tick_lower)?,
                self.pool.sqrt_ratio_x96,
                &liquidity,
            )
        } else {
            get_amount_1_delta(
                get_sqrt_ratio_at_tick(self.tick_lower)?,
                get_sqrt_ratio_at_tick(self.tick_upper)?,
                &liquidity,
            )
        };
        token_amount(&self.pool.token1, big_uint_to_u256(&raw)?)
    }
}
