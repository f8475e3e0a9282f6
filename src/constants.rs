use crate::error::Error;
use alloy_primitives::{address, aliases::U24, b256, Address, B256};

pub const FACTORY_ADDRESS: Address = address!("1F98431c8aD98523631AE4a59f267346ea31F984");

pub const POOL_INIT_CODE_HASH: B256 =
    b256!("e34f199b19b2b4f47f68442619d555527d244f78a3297ea89325f843f87b8b54");

/// The bytecode hash of the pool contract on zkSync Era, which hashes bytecode differently.
pub const ZKSYNC_POOL_INIT_CODE_HASH: B256 =
    b256!("010013f177ea1fcbc4520f9a3ca7cd2d1d77959e05aa66484027cb38e712aeed");

pub const ZKSYNC_CHAIN_ID: u64 = 324;

/// The default factory enabled fee amounts, denominated in hundredths of bips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeeAmount {
    LOWEST = 100,
    LOW = 500,
    MEDIUM = 3000,
    HIGH = 10000,
}

impl FeeAmount {
    /// The default factory tick spacings by fee amount.
    #[inline]
    pub const fn tick_spacing(&self) -> i32 {
        match self {
            Self::LOWEST => 1,
            Self::LOW => 10,
            Self::MEDIUM => 60,
            Self::HIGH => 200,
        }
    }

    /// The fee tier whose default tick spacing is `tick_spacing`.
    #[inline]
    pub fn from_tick_spacing(tick_spacing: i32) -> Result<Self, Error> {
        match tick_spacing {
            1 => Ok(Self::LOWEST),
            10 => Ok(Self::LOW),
            60 => Ok(Self::MEDIUM),
            200 => Ok(Self::HIGH),
            _ => Err(Error::InvalidTickSpacing(tick_spacing)),
        }
    }

    #[inline]
    pub const fn as_u32(&self) -> u32 {
        *self as u32
    }
}

impl TryFrom<u32> for FeeAmount {
    type Error = Error;

    #[inline]
    fn try_from(fee: u32) -> Result<Self, Self::Error> {
        match fee {
            100 => Ok(Self::LOWEST),
            500 => Ok(Self::LOW),
            3000 => Ok(Self::MEDIUM),
            10000 => Ok(Self::HIGH),
            _ => Err(Error::InvalidFee(fee)),
        }
    }
}

impl From<FeeAmount> for U24 {
    #[inline]
    fn from(fee: FeeAmount) -> Self {
        Self::from_limbs([fee.as_u32() as u64])
    }
}

/// Where the pools of a factory live: the factory that deploys them and the hash of the pool
/// creation code it deploys with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolDeployment {
    pub factory: Address,
    pub init_code_hash: B256,
}

impl PoolDeployment {
    #[inline]
    pub const fn new(factory: Address, init_code_hash: B256) -> Self {
        Self {
            factory,
            init_code_hash,
        }
    }
}

impl Default for PoolDeployment {
    #[inline]
    fn default() -> Self {
        Self::new(FACTORY_ADDRESS, POOL_INIT_CODE_HASH)
    }
}
