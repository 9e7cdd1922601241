//! In-memory fungible token ledger.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::domain::{Address, Amount, Role, Token};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::traits::FungibleLedger;

/// A standard fungible-token ledger: balances, allowances and
/// role-gated minting.
///
/// The deployer receives [`Role::Admin`] and [`Role::Minter`].  Admins
/// grant further roles, e.g. minting rights over an LP share token to
/// the pool's account.
///
/// An allowance of [`Amount::MAX`] is treated as unlimited and is not
/// decremented by `transfer_from`.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Address, Amount, Decimals, Token};
/// use pair_amm::ledger::TokenLedger;
/// use pair_amm::traits::FungibleLedger;
///
/// let owner = Address::repeat_byte(0xa0);
/// let user = Address::repeat_byte(0x01);
/// let token = Token::new(Address::repeat_byte(0x11), Decimals::STANDARD);
///
/// let mut abc = TokenLedger::new(token, "Token-ABC", "ABC", owner);
/// abc.mint(&owner, &user, token.units(150)).expect("owner is minter");
/// assert_eq!(abc.balance_of(&user), token.units(150));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenLedger {
    token: Token,
    name: String,
    symbol: String,
    total_supply: Amount,
    balances: BTreeMap<Address, Amount>,
    allowances: BTreeMap<(Address, Address), Amount>,
    roles: BTreeSet<(Role, Address)>,
}

impl TokenLedger {
    /// Deploys an empty ledger for `token`, owned by `deployer`.
    #[must_use]
    pub fn new(
        token: Token,
        name: impl Into<String>,
        symbol: impl Into<String>,
        deployer: Address,
    ) -> Self {
        let mut roles = BTreeSet::new();
        roles.insert((Role::Admin, deployer));
        roles.insert((Role::Minter, deployer));
        Self {
            token,
            name: name.into(),
            symbol: symbol.into(),
            total_supply: Amount::ZERO,
            balances: BTreeMap::new(),
            allowances: BTreeMap::new(),
            roles,
        }
    }

    /// Human-readable token name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Grants `role` to `account`.
    ///
    /// # Errors
    ///
    /// [`AmmError::Unauthorized`] if `admin` lacks [`Role::Admin`].
    pub fn grant_role(&mut self, admin: &Address, role: Role, account: &Address) -> Result<(), AmmError> {
        self.require_role(Role::Admin, admin)?;
        self.roles.insert((role, *account));
        debug!(symbol = %self.symbol, %role, %account, "role granted");
        Ok(())
    }

    /// Revokes `role` from `account`.  Revoking an absent role is a no-op.
    ///
    /// # Errors
    ///
    /// [`AmmError::Unauthorized`] if `admin` lacks [`Role::Admin`].
    pub fn revoke_role(&mut self, admin: &Address, role: Role, account: &Address) -> Result<(), AmmError> {
        self.require_role(Role::Admin, admin)?;
        self.roles.remove(&(role, *account));
        debug!(symbol = %self.symbol, %role, %account, "role revoked");
        Ok(())
    }

    /// Every account with a non-zero balance.
    pub fn holders(&self) -> impl Iterator<Item = (&Address, &Amount)> {
        self.balances.iter()
    }

    fn require_role(&self, role: Role, account: &Address) -> Result<(), AmmError> {
        if self.roles.contains(&(role, *account)) {
            Ok(())
        } else {
            Err(AmmError::Unauthorized {
                account: *account,
                role,
            })
        }
    }

    fn debit(&self, account: &Address, amount: Amount) -> Result<Amount, AmmError> {
        let available = self.balance_of(account);
        available
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientBalance {
                available,
                required: amount,
            })
    }

    fn set_balance(&mut self, account: &Address, amount: Amount) {
        if amount.is_zero() {
            self.balances.remove(account);
        } else {
            self.balances.insert(*account, amount);
        }
    }

    fn move_units(&mut self, from: &Address, to: &Address, amount: Amount) -> Result<(), AmmError> {
        let from_after = self.debit(from, amount)?;
        if from == to {
            return Ok(());
        }
        let to_after = self.balance_of(to).safe_add(&amount)?;
        self.set_balance(from, from_after);
        self.set_balance(to, to_after);
        Ok(())
    }
}

impl FungibleLedger for TokenLedger {
    fn token(&self) -> Token {
        self.token
    }

    fn total_supply(&self) -> Amount {
        self.total_supply
    }

    fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    fn has_role(&self, role: Role, account: &Address) -> bool {
        self.roles.contains(&(role, *account))
    }

    fn approve(&mut self, owner: &Address, spender: &Address, amount: Amount) -> Result<(), AmmError> {
        if spender.is_zero() {
            return Err(AmmError::InvalidConfiguration("cannot approve the zero address"));
        }
        if amount.is_zero() {
            self.allowances.remove(&(*owner, *spender));
        } else {
            self.allowances.insert((*owner, *spender), amount);
        }
        debug!(symbol = %self.symbol, %owner, %spender, %amount, "approval");
        Ok(())
    }

    fn transfer(&mut self, from: &Address, to: &Address, amount: Amount) -> Result<(), AmmError> {
        self.move_units(from, to, amount)?;
        debug!(symbol = %self.symbol, %from, %to, %amount, "transfer");
        Ok(())
    }

    fn transfer_from(
        &mut self,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), AmmError> {
        let allowed = self.allowance(from, spender);
        let remaining = allowed
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientAllowance {
                available: allowed,
                required: amount,
            })?;

        self.move_units(from, to, amount)?;

        if allowed != Amount::MAX {
            if remaining.is_zero() {
                self.allowances.remove(&(*from, *spender));
            } else {
                self.allowances.insert((*from, *spender), remaining);
            }
        }
        debug!(symbol = %self.symbol, %spender, %from, %to, %amount, "transfer_from");
        Ok(())
    }

    fn mint(&mut self, minter: &Address, to: &Address, amount: Amount) -> Result<(), AmmError> {
        self.require_role(Role::Minter, minter)?;
        let supply = self
            .total_supply
            .checked_add(&amount)
            .ok_or(AmmError::Overflow("total supply overflow on mint"))?;
        let balance = self.balance_of(to).safe_add(&amount)?;
        self.total_supply = supply;
        self.set_balance(to, balance);
        debug!(symbol = %self.symbol, %minter, %to, %amount, "mint");
        Ok(())
    }

    fn burn(&mut self, operator: &Address, from: &Address, amount: Amount) -> Result<(), AmmError> {
        if operator != from {
            self.require_role(Role::Minter, operator)?;
        }
        let balance = self.debit(from, amount)?;
        // Supply is the sum of balances, so it cannot fall below `amount` here.
        let supply = self
            .total_supply
            .checked_sub(&amount)
            .ok_or(AmmError::Underflow("total supply underflow on burn"))?;
        self.total_supply = supply;
        self.set_balance(from, balance);
        debug!(symbol = %self.symbol, %operator, %from, %amount, "burn");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::Decimals;

    fn owner() -> Address {
        Address::repeat_byte(0xa0)
    }

    fn alice() -> Address {
        Address::repeat_byte(0x01)
    }

    fn bob() -> Address {
        Address::repeat_byte(0x02)
    }

    fn ledger() -> TokenLedger {
        let token = Token::new(Address::repeat_byte(0x11), Decimals::STANDARD);
        TokenLedger::new(token, "Token-ABC", "ABC", owner())
    }

    fn funded(amount: u128) -> TokenLedger {
        let mut l = ledger();
        let Ok(()) = l.mint(&owner(), &alice(), Amount::new(amount)) else {
            panic!("owner can mint");
        };
        l
    }

    // -- deployment -----------------------------------------------------------

    #[test]
    fn deployer_holds_admin_and_minter() {
        let l = ledger();
        assert!(l.has_role(Role::Admin, &owner()));
        assert!(l.has_role(Role::Minter, &owner()));
        assert!(!l.has_role(Role::Minter, &alice()));
        assert_eq!(l.name(), "Token-ABC");
        assert_eq!(l.symbol(), "ABC");
        assert!(l.total_supply().is_zero());
    }

    // -- mint / roles ---------------------------------------------------------

    #[test]
    fn mint_requires_minter_role() {
        let mut l = ledger();
        let result = l.mint(&alice(), &alice(), Amount::new(1));
        assert_eq!(
            result,
            Err(AmmError::Unauthorized {
                account: alice(),
                role: Role::Minter
            })
        );
        assert!(l.total_supply().is_zero());
    }

    #[test]
    fn granted_minter_can_mint() {
        let mut l = ledger();
        let Ok(()) = l.grant_role(&owner(), Role::Minter, &bob()) else {
            panic!("admin can grant");
        };
        let Ok(()) = l.mint(&bob(), &alice(), Amount::new(5)) else {
            panic!("bob is minter");
        };
        assert_eq!(l.balance_of(&alice()), Amount::new(5));
        assert_eq!(l.total_supply(), Amount::new(5));
    }

    #[test]
    fn only_admin_grants() {
        let mut l = ledger();
        assert!(matches!(
            l.grant_role(&alice(), Role::Minter, &alice()),
            Err(AmmError::Unauthorized { role: Role::Admin, .. })
        ));
    }

    #[test]
    fn revoke_removes_capability() {
        let mut l = ledger();
        let Ok(()) = l.revoke_role(&owner(), Role::Minter, &owner()) else {
            panic!("admin can revoke");
        };
        assert!(l.mint(&owner(), &alice(), Amount::new(1)).is_err());
    }

    #[test]
    fn mint_overflow_leaves_state() {
        let mut l = funded(u128::MAX);
        let before = l.clone();
        assert!(matches!(
            l.mint(&owner(), &bob(), Amount::new(1)),
            Err(AmmError::Overflow(_))
        ));
        assert_eq!(l, before);
    }

    // -- transfer -------------------------------------------------------------

    #[test]
    fn transfer_moves_balance() {
        let mut l = funded(100);
        let Ok(()) = l.transfer(&alice(), &bob(), Amount::new(40)) else {
            panic!("expected Ok");
        };
        assert_eq!(l.balance_of(&alice()), Amount::new(60));
        assert_eq!(l.balance_of(&bob()), Amount::new(40));
        assert_eq!(l.total_supply(), Amount::new(100));
    }

    #[test]
    fn transfer_insufficient_balance() {
        let mut l = funded(10);
        assert_eq!(
            l.transfer(&alice(), &bob(), Amount::new(11)),
            Err(AmmError::InsufficientBalance {
                available: Amount::new(10),
                required: Amount::new(11)
            })
        );
        assert_eq!(l.balance_of(&alice()), Amount::new(10));
    }

    #[test]
    fn transfer_to_self_is_noop() {
        let mut l = funded(10);
        let Ok(()) = l.transfer(&alice(), &alice(), Amount::new(10)) else {
            panic!("expected Ok");
        };
        assert_eq!(l.balance_of(&alice()), Amount::new(10));
    }

    // -- allowances -----------------------------------------------------------

    #[test]
    fn transfer_from_consumes_allowance() {
        let mut l = funded(100);
        let Ok(()) = l.approve(&alice(), &bob(), Amount::new(30)) else {
            panic!("expected Ok");
        };
        let Ok(()) = l.transfer_from(&bob(), &alice(), &bob(), Amount::new(20)) else {
            panic!("expected Ok");
        };
        assert_eq!(l.allowance(&alice(), &bob()), Amount::new(10));
        assert_eq!(l.balance_of(&bob()), Amount::new(20));
    }

    #[test]
    fn transfer_from_checks_allowance_before_balance() {
        let mut l = funded(5);
        assert_eq!(
            l.transfer_from(&bob(), &alice(), &bob(), Amount::new(10)),
            Err(AmmError::InsufficientAllowance {
                available: Amount::ZERO,
                required: Amount::new(10)
            })
        );
    }

    #[test]
    fn transfer_from_insufficient_balance_keeps_allowance() {
        let mut l = funded(5);
        let Ok(()) = l.approve(&alice(), &bob(), Amount::new(10)) else {
            panic!("expected Ok");
        };
        assert!(matches!(
            l.transfer_from(&bob(), &alice(), &bob(), Amount::new(10)),
            Err(AmmError::InsufficientBalance { .. })
        ));
        assert_eq!(l.allowance(&alice(), &bob()), Amount::new(10));
    }

    #[test]
    fn unlimited_allowance_is_not_decremented() {
        let mut l = funded(100);
        let Ok(()) = l.approve(&alice(), &bob(), Amount::MAX) else {
            panic!("expected Ok");
        };
        let Ok(()) = l.transfer_from(&bob(), &alice(), &bob(), Amount::new(100)) else {
            panic!("expected Ok");
        };
        assert_eq!(l.allowance(&alice(), &bob()), Amount::MAX);
    }

    #[test]
    fn approve_zero_address_rejected() {
        let mut l = funded(1);
        assert!(l.approve(&alice(), &Address::zero(), Amount::new(1)).is_err());
    }

    // -- burn -----------------------------------------------------------------

    #[test]
    fn holder_burns_own_units() {
        let mut l = funded(100);
        let Ok(()) = l.burn(&alice(), &alice(), Amount::new(25)) else {
            panic!("expected Ok");
        };
        assert_eq!(l.balance_of(&alice()), Amount::new(75));
        assert_eq!(l.total_supply(), Amount::new(75));
    }

    #[test]
    fn minter_burns_for_holder() {
        let mut l = funded(100);
        let Ok(()) = l.burn(&owner(), &alice(), Amount::new(100)) else {
            panic!("expected Ok");
        };
        assert!(l.total_supply().is_zero());
        assert_eq!(l.holders().count(), 0);
    }

    #[test]
    fn stranger_cannot_burn() {
        let mut l = funded(100);
        assert!(matches!(
            l.burn(&bob(), &alice(), Amount::new(1)),
            Err(AmmError::Unauthorized { .. })
        ));
    }

    #[test]
    fn burn_more_than_held() {
        let mut l = funded(3);
        assert!(matches!(
            l.burn(&alice(), &alice(), Amount::new(4)),
            Err(AmmError::InsufficientBalance { .. })
        ));
        assert_eq!(l.total_supply(), Amount::new(3));
    }
}
