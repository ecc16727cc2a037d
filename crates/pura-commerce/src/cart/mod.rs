//! Shopping cart module.
//!
//! Contains the cart ledger, its lines, and the pricing breakdown.

mod cart;
mod pricing;

pub use cart::{Cart, CartLine};
pub use pricing::{CartPricing, LinePricing, TAX_RATE_PERCENT};
