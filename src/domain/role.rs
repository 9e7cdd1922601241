//! Ledger capabilities.

use core::fmt;

/// A capability an account can hold on a token ledger.
///
/// Checked explicitly at the start of every privileged ledger call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    /// May grant and revoke roles.
    Admin,
    /// May mint new units, and burn units held by any account.
    Minter,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Minter => write!(f, "minter"),
        }
    }
}
