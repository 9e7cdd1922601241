//! Integer arithmetic for share and payout computation.
//!
//! - [`CheckedArithmetic`]: `Result`-returning add/sub/mul-div on
//!   [`Amount`](crate::domain::Amount) and [`Shares`](crate::domain::Shares).
//! - [`mul_div`]: `a × b / c` through a 256-bit intermediate.
//!
//! No floating point is used anywhere in the crate.

mod checked;
mod mul_div;

pub use checked::CheckedArithmetic;
pub use mul_div::mul_div;
