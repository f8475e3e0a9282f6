use super::{Fraction, TokenAmount};
use crate::{
    error::{Error, PriceMismatch},
    utils::{core_to_big_int, encode_sqrt_ratio_x96, MAX_SQRT_RATIO, MIN_SQRT_RATIO, Q192},
};
use alloc::{borrow::Cow, string::String};
use alloy_primitives::U160;
use core::cmp::Ordering;
use num_bigint::BigInt;
use num_traits::Signed;
use uniswap_sdk_core::prelude::{
    BaseCurrency, BigInt as CoreBigInt, FractionBase, Rounding, ToBig, Token,
};

/// `10^exponent`, where `exponent` may be negative.
#[inline]
pub(crate) fn decimal_scale(exponent: i32) -> Fraction {
    let scale = CoreBigInt::from(10).pow(exponent.unsigned_abs());
    if exponent >= 0 {
        Fraction::new(scale, 1)
    } else {
        Fraction::new(1, scale)
    }
}

#[inline]
fn is_zero(value: &Fraction) -> bool {
    value.numerator == CoreBigInt::ZERO
}

/// A directed exchange rate: how many whole `quote` tokens one whole `base` token is worth.
///
/// The value is `None` while the rate is unknown, which is distinct from a rate of zero and
/// propagates through every operation. Numerators and denominators are 512-bit, which holds any
/// pool price composed with one other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Price {
    pub base: Token,
    pub quote: Token,
    pub value: Option<Fraction>,
}

impl Price {
    #[inline]
    pub const fn new(base: Token, quote: Token, value: Fraction) -> Self {
        Self {
            base,
            quote,
            value: Some(value),
        }
    }

    /// A price between the two tokens whose value is not known yet.
    #[inline]
    pub const fn unknown(base: Token, quote: Token) -> Self {
        Self {
            base,
            quote,
            value: None,
        }
    }

    /// The price of `base` in `quote` implied by a pool's sqrt price, adjusted for decimals.
    ///
    /// ## Arguments
    ///
    /// * `base`: The base token
    /// * `quote`: The quote token, which must form a pool with `base` on the same chain
    /// * `sqrt_ratio_x96`: The sqrt of token1/token0 in base units, as a Q64.96
    pub fn from_sqrt_ratio(base: Token, quote: Token, sqrt_ratio_x96: U160) -> Result<Self, Error> {
        let sqrt_ratio_x96 = sqrt_ratio_x96.to_big_int();
        let ratio_x192 = sqrt_ratio_x96 * sqrt_ratio_x96;
        let q192 = Q192.to_big_int();
        let raw = if base.sorts_before(&quote)? {
            Fraction::new(ratio_x192, q192)
        } else if ratio_x192 == CoreBigInt::ZERO {
            return Ok(Self::unknown(base, quote));
        } else {
            Fraction::new(q192, ratio_x192)
        };
        let value = raw * decimal_scale(base.decimals as i32 - quote.decimals as i32);
        Ok(Self::new(base, quote, value))
    }

    /// Flips the direction of the price. An unknown value stays unknown, and so does a zero one.
    #[inline]
    pub fn invert(&self) -> Self {
        Self {
            base: self.quote.clone(),
            quote: self.base.clone(),
            value: self
                .value
                .as_ref()
                .filter(|value| !is_zero(value))
                .map(|value| value.invert()),
        }
    }

    /// Composes `self` (`A -> B`) with `other` (`B -> C`) into `A -> C`.
    ///
    /// `other` is inverted first when it is given as `C -> B`. Returns [`Error::PriceMismatch`]
    /// when the currencies do not line up in either orientation.
    pub fn try_multiply(&self, other: &Self) -> Result<Self, Error> {
        let other = if self.quote.equals(&other.base) {
            Cow::Borrowed(other)
        } else if self.quote.equals(&other.quote) {
            Cow::Owned(other.invert())
        } else {
            return Err(PriceMismatch {
                left_base: self.base.address(),
                left_quote: self.quote.address(),
                right_base: other.base.address(),
                right_quote: other.quote.address(),
            }
            .into());
        };
        let value = match (&self.value, &other.value) {
            (Some(a), Some(b)) => Some(a.clone() * b),
            _ => None,
        };
        Ok(Self {
            base: self.base.clone(),
            quote: other.quote.clone(),
            value,
        })
    }

    /// Like [`Price::try_multiply`], but recovers from a currency mismatch by logging it and
    /// returning `self` unchanged.
    pub fn multiply(&self, other: &Self) -> Self {
        self.try_multiply(other).unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring price that does not compose");
            self.clone()
        })
    }

    /// Folds `prices` into one end-to-end rate, starting from the identity rate of `anchor`.
    ///
    /// Every step keeps the base of its left operand, so the result is always based in `anchor`.
    /// A price given towards the anchor is inverted on the way.
    #[inline]
    pub fn chain<'a>(prices: impl IntoIterator<Item = &'a Self>, anchor: &Token) -> Self {
        let identity = Self::new(anchor.clone(), anchor.clone(), Fraction::new(1, 1));
        prices
            .into_iter()
            .fold(identity, |acc, price| acc.multiply(price))
    }

    /// The value as `(numerator, denominator)` of token1 per token0 in base units, which is the
    /// ratio a pool's sqrt price encodes. The denominator is positive.
    pub(crate) fn base_unit_ratio(&self) -> Option<(BigInt, BigInt)> {
        let value = self.value.as_ref()?;
        let raw = value.clone() * decimal_scale(self.quote.decimals as i32 - self.base.decimals as i32);
        let (numerator, denominator) = (
            core_to_big_int(raw.numerator),
            core_to_big_int(raw.denominator),
        );
        Some(if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        })
    }

    /// The sqrt price of the pool that would quote this price, clamped to
    /// `[MIN_SQRT_RATIO, MAX_SQRT_RATIO]`.
    pub fn sqrt_ratio_x96(&self) -> Option<U160> {
        let sorted = self.base.sorts_before(&self.quote).ok()?;
        let (numerator, denominator) = self.base_unit_ratio()?;
        let sqrt_ratio_x96 = if sorted {
            encode_sqrt_ratio_x96(numerator, denominator)
        } else {
            encode_sqrt_ratio_x96(denominator, numerator)
        }
        .unwrap_or(MAX_SQRT_RATIO);
        Some(sqrt_ratio_x96.clamp(MIN_SQRT_RATIO, MAX_SQRT_RATIO))
    }

    /// Compares two prices of the same pair, or `None` if either value is unknown or the pairs
    /// differ.
    #[inline]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        if !self.base.equals(&other.base) || !self.quote.equals(&other.quote) {
            return None;
        }
        Some(self.value.as_ref()?.cmp(other.value.as_ref()?))
    }

    #[inline]
    pub fn greater_than(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Greater)
    }

    #[inline]
    pub fn less_than(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Less)
    }

    /// Converts an amount of the base token into the quote token, truncating to base units.
    ///
    /// Returns `Ok(None)` while the price is unknown.
    pub fn quote(&self, amount: &TokenAmount) -> Result<Option<TokenAmount>, Error> {
        if !amount.currency.equals(&self.base) {
            return Err(Error::InvalidToken);
        }
        let Some(value) = &self.value else {
            return Ok(None);
        };
        let quoted = amount.as_fraction()
            * value
            * decimal_scale(self.quote.decimals as i32 - self.base.decimals as i32);
        let raw = quoted.quotient().max(CoreBigInt::ZERO);
        Ok(Some(TokenAmount::from_raw_amount(self.quote.clone(), raw)?))
    }

    /// Renders the value with `decimal_places` digits after the point, rounding half up.
    #[inline]
    pub fn to_fixed(&self, decimal_places: u8) -> Option<String> {
        self.value
            .as_ref()
            .map(|value| value.to_fixed(decimal_places, Some(Rounding::RoundHalfUp)))
    }

    /// Renders the value to `significant_digits` significant digits, rounding half up.
    ///
    /// Fails only for zero significant digits.
    #[inline]
    pub fn to_significant(&self, significant_digits: u8) -> Result<Option<String>, Error> {
        self.value
            .as_ref()
            .map(|value| value.to_significant(significant_digits, Some(Rounding::RoundHalfUp)))
            .transpose()
            .map_err(Error::from)
    }
}
