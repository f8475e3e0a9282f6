use crate::{
    entities::{FractionBase, Token, TokenAmount},
    token,
};
use alloy_primitives::U256;
use once_cell::sync::Lazy;
use uniswap_sdk_core::prelude::FromBig;

/// The amount in base units.
pub fn raw(amount: &TokenAmount) -> U256 {
    U256::from_big_int(amount.quotient())
}

pub static TOKEN0: Lazy<Token> = Lazy::new(|| {
    token!(
        1,
        "0000000000000000000000000000000000000001",
        18,
        "t0",
        "token0"
    )
});
pub static TOKEN1: Lazy<Token> = Lazy::new(|| {
    token!(
        1,
        "0000000000000000000000000000000000000002",
        18,
        "t1",
        "token1"
    )
});
pub static TOKEN2: Lazy<Token> = Lazy::new(|| {
    token!(
        1,
        "0000000000000000000000000000000000000003",
        6,
        "t2",
        "token2"
    )
});
pub static VIC: Lazy<Token> = Lazy::new(|| {
    token!(
        1,
        "C054751BdBD24Ae713BA3Dc9Bd9434aBe2abc1ce",
        18,
        "VIC",
        "Viction"
    )
});
pub static TOKEN_A: Lazy<Token> = Lazy::new(|| {
    token!(
        1,
        "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        18,
        "A",
        "token a"
    )
});
pub static TOKEN_B: Lazy<Token> = Lazy::new(|| {
    token!(
        1,
        "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
        18,
        "B",
        "token b"
    )
});
pub static WETH: Lazy<Token> = Lazy::new(|| {
    token!(
        1,
        "C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
        18,
        "WETH",
        "Wrapped Ether"
    )
});
pub static USDC: Lazy<Token> = Lazy::new(|| {
    token!(
        1,
        "A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
        6,
        "USDC",
        "USD Coin"
    )
});
pub static DAI: Lazy<Token> = Lazy::new(|| {
    token!(
        1,
        "6B175474E89094C44Da98b954EedeAC495271d0F",
        18,
        "DAI",
        "DAI Stablecoin"
    )
});
