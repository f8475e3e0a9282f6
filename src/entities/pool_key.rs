use crate::{
    constants::{FeeAmount, PoolDeployment},
    error::Error,
    utils::compute_pool_address,
};
use alloy_primitives::Address;
use core::fmt;

/// Identifies a pool by its canonically sorted token pair and fee tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PoolKey {
    pub token0: Address,
    pub token1: Address,
    pub fee: FeeAmount,
}

impl PoolKey {
    /// Sorts the pair, rejecting identical tokens with [`Error::InvalidToken`].
    #[inline]
    pub fn new(token_a: Address, token_b: Address, fee: FeeAmount) -> Result<Self, Error> {
        let (token0, token1) = match token_a.cmp(&token_b) {
            core::cmp::Ordering::Less => (token_a, token_b),
            core::cmp::Ordering::Greater => (token_b, token_a),
            core::cmp::Ordering::Equal => return Err(Error::InvalidToken),
        };
        Ok(Self {
            token0,
            token1,
            fee,
        })
    }

    /// The address of the pool deployed by `deployment` on `chain_id`.
    #[inline]
    pub fn address(&self, chain_id: u64, deployment: &PoolDeployment) -> Address {
        compute_pool_address(
            chain_id,
            Some(self.token0),
            Some(self.token1),
            Some(self.fee),
            deployment.factory,
            deployment.init_code_hash,
        )
        .unwrap_or_default()
    }
}

/// Renders the lower-case cache key `token0-token1-fee`.
impl fmt::Display for PoolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:#x}-{:#x}-{}",
            self.token0,
            self.token1,
            self.fee.as_u32()
        )
    }
}
