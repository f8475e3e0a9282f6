//! ## Tokens and amounts
//! The ERC20 token, exact fraction and currency amount types of the core SDK, with the currency of
//! a [`TokenAmount`] fixed to a [`Token`].

use crate::error::Error;
use alloy_primitives::U256;
pub use uniswap_sdk_core::prelude::{
    BaseCurrency, BaseCurrencyCore, CurrencyAmount, Fraction, FractionBase, Percent, Rounding,
    Token,
};
use uniswap_sdk_core::prelude::ToBig;

/// An amount of an ERC20 token, held in base units.
pub type TokenAmount = CurrencyAmount<Token>;

/// Wraps a raw amount in base units of `token`.
#[inline]
pub fn token_amount(token: &Token, raw: U256) -> Result<TokenAmount, Error> {
    Ok(TokenAmount::from_raw_amount(token.clone(), raw.to_big_int())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tests::*, token};
    use alloy_primitives::address;
    use uniswap_sdk_core::error::Error as CoreError;

    #[test]
    fn equality_ignores_metadata() {
        let renamed = Token::new(
            1,
            DAI.address(),
            DAI.decimals,
            Some("XDAI".to_owned()),
            None,
            0,
            0,
        );
        assert!(DAI.equals(&renamed));
        let other_chain = Token::new(5, DAI.address(), DAI.decimals, None, None, 0, 0);
        assert!(!DAI.equals(&other_chain));
    }

    #[test]
    fn sorts_before_compares_addresses() {
        assert!(TOKEN0.sorts_before(&TOKEN1).unwrap());
        assert!(!TOKEN1.sorts_before(&TOKEN0).unwrap());
    }

    #[test]
    fn sorts_before_rejects_same_token_and_other_chain() {
        assert_eq!(TOKEN0.sorts_before(&TOKEN0), Err(CoreError::EqualAddresses));
        let other_chain = Token::new(5, TOKEN1.address(), 18, None, None, 0, 0);
        assert_eq!(
            TOKEN0.sorts_before(&other_chain),
            Err(CoreError::ChainIdMismatch(1, 5))
        );
    }

    #[test]
    fn macro_accepts_address_expressions() {
        let address = address!("6B175474E89094C44Da98b954EedeAC495271d0F");
        let token = token!(1, address, 18, "DAI");
        assert!(token.equals(&*DAI));
        assert_eq!(token.symbol.as_deref(), Some("DAI"));
        assert_eq!(token!(1, address, 18).symbol, None);
    }

    #[test]
    fn token_amount_rendering() {
        let amount = token_amount(&USDC, U256::from(1_234_567)).unwrap();
        assert_eq!(amount.to_fixed(2, None).unwrap(), "1.23");
        assert_eq!(amount.to_exact(), "1.234567");
        assert_eq!(amount.as_fraction(), Fraction::new(1_234_567, 1));
        assert_eq!(amount.currency, *USDC);
    }

    #[test]
    fn token_amount_rejects_amounts_past_u256() {
        let amount = token_amount(&USDC, U256::MAX).unwrap();
        assert_eq!(
            amount.add(&token_amount(&USDC, U256::from(1)).unwrap()),
            Err(CoreError::UintOverflow)
        );
    }
}
