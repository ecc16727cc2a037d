//! Cart and line types.
//!
//! The cart is the ledger for one browsing session: it owns its lines and
//! the selected shipping method, and derives all money totals on read.
//! Every operation is total — unknown ids and non-positive quantities are
//! silent no-ops, never errors — because mutations arrive from UI events
//! that have already been validated visually.

use crate::cart::{CartPricing, LinePricing, TAX_RATE_PERCENT};
use crate::catalog::Product;
use crate::checkout::ShippingMethod;
use crate::ids::{CartId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// One (product, quantity) pairing in the cart.
///
/// The product record is snapshotted at add time; quantity is always >= 1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The product, as it looked when added.
    pub product: Product,
    /// Quantity in the cart.
    pub quantity: i64,
}

impl CartLine {
    /// Create a new line.
    pub fn new(product: Product, quantity: i64) -> Self {
        Self { product, quantity }
    }

    /// Unit price for this line: discount price when present, else price.
    pub fn unit_price(&self) -> Money {
        self.product.effective_price()
    }

    /// Line total (unit price times quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply(self.quantity)
    }
}

/// A shopping cart for one browsing session.
///
/// Lines are kept in insertion order (display order; totals don't depend
/// on it), with at most one line per product id. The cart assumes a
/// single-currency catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Unique cart identifier.
    pub id: CartId,
    /// Lines in the cart, in insertion order.
    pub lines: Vec<CartLine>,
    /// Selected shipping method; none selected contributes 0 to the total.
    pub shipping_method: Option<ShippingMethod>,
    /// Cart currency.
    pub currency: Currency,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Cart {
    /// Create a new empty cart.
    pub fn new() -> Self {
        let now = current_timestamp();
        Self {
            id: CartId::generate(),
            lines: Vec::new(),
            shipping_method: None,
            currency: Currency::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add a product to the cart, or increase quantity if already present.
    ///
    /// Non-positive quantities are a no-op. The cart places no upper bound
    /// on quantity: clamping to available stock is the caller's
    /// responsibility (the storefront disables the increment control at
    /// the product's stock level).
    pub fn add_item(&mut self, product: &Product, quantity: i64) {
        if quantity < 1 {
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine::new(product.clone(), quantity));
        }
        self.updated_at = current_timestamp();
    }

    /// Remove a line by product id.
    ///
    /// Returns whether a line was removed; an absent id is a no-op.
    pub fn remove_item(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.product.id != product_id);
        let removed = self.lines.len() < len_before;
        if removed {
            self.updated_at = current_timestamp();
        }
        removed
    }

    /// Replace a line's quantity.
    ///
    /// Quantities below 1 are rejected silently (the line keeps its
    /// current quantity; removal is its own operation). Unknown product
    /// ids are a no-op.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity < 1 {
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| &l.product.id == product_id) {
            line.quantity = quantity;
            self.updated_at = current_timestamp();
        }
    }

    /// Empty the cart and reset the shipping selection.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.shipping_method = None;
        self.updated_at = current_timestamp();
    }

    /// Select a shipping method, replacing any previous selection.
    ///
    /// Membership in the canonical method set is a UI concern; any method
    /// value is accepted here.
    pub fn set_shipping_method(&mut self, method: ShippingMethod) {
        self.shipping_method = Some(method);
        self.updated_at = current_timestamp();
    }

    /// Get a line by product id.
    pub fn get_line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product.id == product_id)
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn unique_line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Subtotal: sum of line totals.
    pub fn subtotal(&self) -> Money {
        let cents = self
            .lines
            .iter()
            .map(|l| l.line_total().amount_cents)
            .sum();
        Money::new(cents, self.currency)
    }

    /// Tax: 13% of the subtotal, rounded to the nearest whole unit.
    pub fn tax(&self) -> Money {
        self.subtotal().percentage(TAX_RATE_PERCENT)
    }

    /// Shipping: the selected method's price, or 0 with none selected.
    pub fn shipping_total(&self) -> Money {
        self.shipping_method
            .as_ref()
            .map(|m| m.price)
            .unwrap_or_else(|| Money::zero(self.currency))
    }

    /// Grand total: subtotal + tax + shipping.
    pub fn total(&self) -> Money {
        let cents = self.subtotal().amount_cents
            + self.tax().amount_cents
            + self.shipping_total().amount_cents;
        Money::new(cents, self.currency)
    }

    /// Full pricing breakdown for the cart and checkout summaries.
    pub fn pricing(&self) -> CartPricing {
        CartPricing {
            subtotal: self.subtotal(),
            tax_total: self.tax(),
            shipping_total: self.shipping_total(),
            grand_total: self.total(),
            line_items: self
                .lines
                .iter()
                .map(|l| LinePricing {
                    product_id: l.product.id.clone(),
                    name: l.product.name.clone(),
                    unit_price: l.unit_price(),
                    quantity: l.quantity,
                    line_total: l.line_total(),
                })
                .collect(),
        }
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
