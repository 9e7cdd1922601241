//! Reference implementation of the token-ledger collaborator.
//!
//! [`TokenLedger`] implements [`FungibleLedger`](crate::traits::FungibleLedger)
//! in memory.  It serves as the pooled tokens and the LP share token in
//! tests, the demo and any host that does not bring its own ledger.

mod token_ledger;

pub use token_ledger::TokenLedger;
