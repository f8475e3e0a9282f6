#[cfg(doc)]
use crate::prelude::*;

use alloy_primitives::{Address, U256};
use uniswap_sdk_core::error::Error as CoreError;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Thrown when an error occurs in the core library, e.g. when two tokens cannot be sorted
    /// because they are on different chains or share an address.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// Thrown when the tick passed to [`get_sqrt_ratio_at_tick`] is not between [`MIN_TICK`] and
    /// [`MAX_TICK`].
    #[error("Invalid tick: {0}")]
    InvalidTick(i32),

    /// Thrown when the price passed to [`get_tick_at_sqrt_ratio`] does not correspond to a price
    /// between [`MIN_TICK`] and [`MAX_TICK`].
    #[error("Invalid square root price: {0}")]
    InvalidSqrtPrice(U256),

    #[error("Invalid tick spacing: {0}")]
    InvalidTickSpacing(i32),

    /// Thrown when a fee or tick spacing is not one of the enabled [`FeeAmount`] tiers.
    #[error("Invalid fee amount: {0}")]
    InvalidFee(u32),

    #[error("Invalid tick range")]
    InvalidRange,

    #[error("Invalid price")]
    InvalidPrice,

    /// Thrown when the token passed to [`Pool::price_of`] is not one of the pool's tokens.
    #[error("Invalid token")]
    InvalidToken,

    #[error("Overflow when casting to U160")]
    SafeCastToU160Overflow,

    #[error("Overflow when casting to U256")]
    SafeCastToU256Overflow,

    #[error("Liquidity does not fit in u128")]
    LiquidityOverflow,

    #[error("{0}")]
    PriceMismatch(#[from] PriceMismatch),
}

/// Thrown when two prices cannot be composed because the quote currency of the left operand is
/// not the base currency of the right operand, in either orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Price mismatch: cannot compose {left_base}/{left_quote} with {right_base}/{right_quote}")]
pub struct PriceMismatch {
    pub left_base: Address,
    pub left_quote: Address,
    pub right_base: Address,
    pub right_quote: Address,
}
