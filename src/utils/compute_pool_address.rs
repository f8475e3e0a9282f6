use crate::constants::{FeeAmount, ZKSYNC_CHAIN_ID};
use alloy_primitives::{aliases::U24, keccak256, Address, B256};
use alloy_sol_types::SolValue;
use uniswap_sdk_core::prelude::compute_zksync_create2_address;

/// Computes a pool address
///
/// Returns `None` while any of the tokens or the fee is not yet known.
///
/// ## Arguments
///
/// * `chain_id`: The chain the factory is deployed on, which selects the CREATE2 variant
/// * `token_a`: The first token of the pair, irrespective of sort order
/// * `token_b`: The second token of the pair, irrespective of sort order
/// * `fee`: The fee tier of the pool
/// * `factory`: The factory address
/// * `init_code_hash`: The hash of the pool creation code deployed by the factory
///
/// ## Returns
///
/// The computed pool address
///
/// ## Examples
///
/// ```
/// use alloy_primitives::{address, Address};
/// use clamm_math::prelude::*;
///
/// const FACTORY_ADDRESS: Address = address!("1111111111111111111111111111111111111111");
/// const USDC_ADDRESS: Address = address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
/// const DAI_ADDRESS: Address = address!("6B175474E89094C44Da98b954EedeAC495271d0F");
/// let result = compute_pool_address(
///     1,
///     Some(USDC_ADDRESS),
///     Some(DAI_ADDRESS),
///     Some(FeeAmount::LOW),
///     FACTORY_ADDRESS,
///     POOL_INIT_CODE_HASH,
/// );
/// assert_eq!(
///     result,
///     Some(address!("90B1b09A9715CaDbFD9331b3A7652B24BfBEfD32"))
/// );
/// ```
#[inline]
#[must_use]
pub fn compute_pool_address(
    chain_id: u64,
    token_a: Option<Address>,
    token_b: Option<Address>,
    fee: Option<FeeAmount>,
    factory: Address,
    init_code_hash: B256,
) -> Option<Address> {
    let (Some(token_a), Some(token_b), Some(fee)) = (token_a, token_b, fee) else {
        tracing::trace!(?token_a, ?token_b, ?fee, "pool address inputs unavailable");
        return None;
    };
    assert_ne!(token_a, token_b, "ADDRESSES");
    let (token_0, token_1) = if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    };
    let fee: U24 = fee.into();
    let salt = keccak256((token_0, token_1, fee).abi_encode());

    Some(if chain_id == ZKSYNC_CHAIN_ID {
        compute_zksync_create2_address(factory, init_code_hash, salt, None)
    } else {
        factory.create2(salt, init_code_hash)
    })
}
