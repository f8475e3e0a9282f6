use super::{BaseCurrency, PoolKey, Price, Token};
use crate::{
    constants::{FeeAmount, PoolDeployment},
    error::Error,
    utils::{get_tick_at_sqrt_ratio, MAX_TICK, MIN_TICK},
};
use alloy_primitives::{Address, ChainId, U160};

/// A snapshot of a V3 pool's slot0 and in-range liquidity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pool {
    pub token0: Token,
    pub token1: Token,
    pub fee: FeeAmount,
    pub sqrt_ratio_x96: U160,
    pub liquidity: u128,
    pub tick_current: i32,
}

impl Pool {
    /// Construct a pool, deriving the current tick from the price
    ///
    /// ## Arguments
    ///
    /// * `token_a`: One of the tokens in the pool
    /// * `token_b`: The other token in the pool
    /// * `fee`: The fee in hundredths of a bips of the input amount of every swap that is collected
    ///   by the pool
    /// * `sqrt_ratio_x96`: The sqrt of the current ratio of amounts of token1 to token0
    /// * `liquidity`: The current value of in range liquidity
    #[inline]
    pub fn new(
        token_a: Token,
        token_b: Token,
        fee: FeeAmount,
        sqrt_ratio_x96: U160,
        liquidity: u128,
    ) -> Result<Self, Error> {
        let tick_current = get_tick_at_sqrt_ratio(sqrt_ratio_x96)?;
        Self::from_slot0(token_a, token_b, fee, sqrt_ratio_x96, tick_current, liquidity)
    }

    /// Construct a pool from the values read from its slot0, trusting the tick as reported.
    ///
    /// Fails with [`Error::Core`] if the tokens are identical or on different chains, and with
    /// [`Error::InvalidTick`] if the tick is out of bounds.
    pub fn from_slot0(
        token_a: Token,
        token_b: Token,
        fee: FeeAmount,
        sqrt_ratio_x96: U160,
        tick_current: i32,
        liquidity: u128,
    ) -> Result<Self, Error> {
        if !(MIN_TICK..=MAX_TICK).contains(&tick_current) {
            return Err(Error::InvalidTick(tick_current));
        }
        let (token0, token1) = if token_a.sorts_before(&token_b)? {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };
        Ok(Self {
            token0,
            token1,
            fee,
            sqrt_ratio_x96,
            liquidity,
            tick_current,
        })
    }

    #[inline]
    pub const fn chain_id(&self) -> ChainId {
        self.token0.chain_id
    }

    #[inline]
    pub const fn tick_spacing(&self) -> i32 {
        self.fee.tick_spacing()
    }

    /// The lowest tick a position in this pool can use.
    #[inline]
    pub const fn usable_min_tick(&self) -> i32 {
        MIN_TICK / self.tick_spacing() * self.tick_spacing()
    }

    /// The highest tick a position in this pool can use.
    #[inline]
    pub const fn usable_max_tick(&self) -> i32 {
        MAX_TICK / self.tick_spacing() * self.tick_spacing()
    }

    /// Returns true if the token is either token0 or token1
    ///
    /// ## Arguments
    ///
    /// * `token`: The token to check
    ///
    /// returns: bool
    #[inline]
    pub fn involves_token(&self, token: &Token) -> bool {
        self.token0.equals(token) || self.token1.equals(token)
    }

    /// Returns the current mid price of the pool in terms of token0, i.e. the ratio of token1 over
    /// token0
    #[inline]
    pub fn token0_price(&self) -> Result<Price, Error> {
        Price::from_sqrt_ratio(self.token0.clone(), self.token1.clone(), self.sqrt_ratio_x96)
    }

    /// Returns the current mid price of the pool in terms of token1, i.e. the ratio of token0 over
    /// token1
    #[inline]
    pub fn token1_price(&self) -> Result<Price, Error> {
        Price::from_sqrt_ratio(self.token1.clone(), self.token0.clone(), self.sqrt_ratio_x96)
    }

    /// Return the price of the given token in terms of the other token in the pool.
    ///
    /// ## Arguments
    ///
    /// * `token`: The token to return price of
    ///
    /// returns: [`Error::InvalidToken`] if the token is not in the pool
    #[inline]
    pub fn price_of(&self, token: &Token) -> Result<Price, Error> {
        if self.token0.equals(token) {
            self.token0_price()
        } else if self.token1.equals(token) {
            self.token1_price()
        } else {
            Err(Error::InvalidToken)
        }
    }

    #[inline]
    pub const fn key(&self) -> PoolKey {
        PoolKey {
            token0: self.token0.meta.address,
            token1: self.token1.meta.address,
            fee: self.fee,
        }
    }

    /// Returns the pool address on the pool's chain
    #[inline]
    pub fn address(&self, deployment: &PoolDeployment) -> Address {
        self.key().address(self.chain_id(), deployment)
    }
}
