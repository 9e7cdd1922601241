//! Value types shared by the pool engine and the ledgers.
//!
//! Addresses, token quantities, share quantities, decimal precision,
//! ledger roles and operation receipts.  All are small `Copy` newtypes
//! with validated constructors where a value range applies.

mod address;
mod amount;
mod decimals;
mod receipt;
mod role;
mod shares;
mod token;

pub use address::Address;
pub use amount::Amount;
pub use decimals::Decimals;
pub use receipt::{AddLiquidityReceipt, RemoveLiquidityReceipt};
pub use role::Role;
pub use shares::Shares;
pub use token::Token;
