//! Cart pricing breakdown.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Sales tax (IVA) applied to the cart subtotal, in percent.
pub const TAX_RATE_PERCENT: f64 = 13.0;

/// Complete pricing breakdown for a cart.
///
/// `grand_total` always equals subtotal + tax + shipping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals, at effective unit prices.
    pub subtotal: Money,
    /// Tax on the subtotal.
    pub tax_total: Money,
    /// Price of the selected shipping method, or 0.
    pub shipping_total: Money,
    /// Final total.
    pub grand_total: Money,
    /// Per-line pricing breakdown, in cart order.
    pub line_items: Vec<LinePricing>,
}

/// Pricing breakdown for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePricing {
    /// Product on the line.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Effective unit price (discount price when present).
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// Line total (unit_price * quantity).
    pub line_total: Money,
}
