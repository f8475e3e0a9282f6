//! # clamm-math
//!
//! Pricing and position math for concentrated-liquidity AMMs in the style of Uniswap V3, as used
//! by an exchange front end to price swaps, size positions and render price ranges without a
//! node round-trip.
//!
//! ## Features
//!
//! - Bit-exact tick math and amount deltas on [alloy-rs](https://github.com/alloy-rs) integer
//!   types, with [`num-bigint`](https://docs.rs/num-bigint) wherever an intermediate product can
//!   exceed 256 bits
//! - CREATE2 pool address derivation, including the zkSync Era variant
//! - An exact rational [`Price`](entities::Price) algebra with an explicit unknown value, for
//!   chaining pool prices into a reference-currency valuation
//! - [`valuation`] helpers for liquidity charts and price impact
//! - Differential tests against [`uniswap_v3_math`](https://docs.rs/uniswap_v3_math) and
//!   benchmarks
//!
//! Tokens, fractions, percentages and token amounts are the types of
//! [`uniswap-sdk-core`](https://docs.rs/uniswap-sdk-core), re-exported from [`entities`].
//!
//! The crate is `no_std` with `alloc` unless the default `std` feature is enabled.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate alloc;

pub mod constants;
pub mod entities;
pub mod error;
pub mod utils;
pub mod valuation;

pub use alloy_primitives;
pub use uniswap_sdk_core::{self, token};

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::{
        constants::*,
        entities::*,
        error::{Error, PriceMismatch},
        utils::*,
        valuation::*,
    };
}
