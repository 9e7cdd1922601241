//! Token identity type.

use super::{Address, Amount, Decimals};
use crate::error::AmmError;

/// A fungible token: its ledger address and decimal precision.
///
/// Two tokens are equal only if both address and decimals match.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Address, Decimals, Token};
///
/// let abc = Token::new(Address::repeat_byte(0x11), Decimals::STANDARD);
/// assert_eq!(abc.units(150).get(), 150 * 10u128.pow(18));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    address: Address,
    decimals: Decimals,
}

impl Token {
    /// Creates a new `Token`.
    #[must_use]
    pub const fn new(address: Address, decimals: Decimals) -> Self {
        Self { address, decimals }
    }

    /// Returns the token address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the token decimals.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Raw amount for `whole` tokens.
    pub const fn units(&self, whole: u64) -> Amount {
        Amount::new(self.decimals.scale_up(whole))
    }

    /// Parses a decimal string in this token's precision.
    ///
    /// # Errors
    ///
    /// See [`Amount::parse_units`].
    pub fn parse(&self, text: &str) -> Result<Amount, AmmError> {
        Amount::parse_units(text, self.decimals)
    }

    /// Formats a raw amount in this token's precision.
    #[must_use]
    pub fn format(&self, amount: Amount) -> String {
        amount.format_units(self.decimals)
    }
}
