//! Product types.

use crate::catalog::{Category, LOW_STOCK_THRESHOLD};
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Stock classification over a product's **real** stock level.
///
/// This is the classification the product table filters on. The admin
/// dashboard uses a separate, period-simulated classification (see
/// [`crate::catalog::compute_metrics`]); the two must not be conflated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    /// More than the low-stock threshold on hand.
    InStock,
    /// Between 1 and the low-stock threshold on hand.
    LowStock,
    /// Nothing on hand.
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

/// A product in the supplements catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Regular price.
    pub price: Money,
    /// Discounted price, if the product is on sale. Never above `price`.
    pub discount_price: Option<Money>,
    /// Units on hand.
    pub stock: i64,
    /// Category tag.
    pub category: Category,
    /// Whether the product is featured on the storefront.
    pub featured: bool,
    /// Benefit bullet points shown on the product page.
    pub benefits: Vec<String>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Product {
    /// Create a new product with no stock.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Self {
        let now = current_timestamp();
        Self {
            id: ProductId::generate(),
            name: name.into(),
            description: description.into(),
            price,
            discount_price: None,
            stock: 0,
            category,
            featured: false,
            benefits: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the discount price.
    pub fn with_discount_price(mut self, discount_price: Money) -> Self {
        self.discount_price = Some(discount_price);
        self
    }

    /// Set the stock level.
    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }

    /// Mark the product as featured.
    pub fn with_featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Add a benefit bullet point.
    pub fn with_benefit(mut self, benefit: impl Into<String>) -> Self {
        self.benefits.push(benefit.into());
        self
    }

    /// The price a customer actually pays: discount price when present,
    /// regular price otherwise.
    pub fn effective_price(&self) -> Money {
        self.discount_price.unwrap_or(self.price)
    }

    /// Check if this product is on sale (discounted below regular price).
    pub fn is_on_sale(&self) -> bool {
        self.discount_price
            .map(|dp| dp.amount_cents < self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Calculate the discount percentage if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.discount_price.and_then(|dp| {
            if dp.amount_cents < self.price.amount_cents && self.price.amount_cents > 0 {
                let savings = self.price.amount_cents - dp.amount_cents;
                Some((savings as f64 / self.price.amount_cents as f64) * 100.0)
            } else {
                None
            }
        })
    }

    /// Classify the product's real stock level.
    pub fn stock_status(&self) -> StockStatus {
        if self.stock == 0 {
            StockStatus::OutOfStock
        } else if self.stock <= LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Check if real stock is low (between 1 and the threshold).
    pub fn is_low_stock(&self) -> bool {
        self.stock_status() == StockStatus::LowStock
    }

    /// Check if real stock is exhausted.
    pub fn is_out_of_stock(&self) -> bool {
        self.stock_status() == StockStatus::OutOfStock
    }

    /// Validate store-boundary invariants: non-negative stock and a
    /// discount price no higher than the regular price.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.stock < 0 {
            return Err(StoreError::NegativeStock {
                product_id: self.id.as_str().to_string(),
                requested: self.stock,
            });
        }
        if let Some(dp) = self.discount_price {
            if dp.amount_cents > self.price.amount_cents {
                return Err(StoreError::DiscountExceedsPrice {
                    product_id: self.id.as_str().to_string(),
                    discount: dp.amount_cents,
                    price: self.price.amount_cents,
                });
            }
        }
        Ok(())
    }

    /// Bump the update timestamp.
    pub(crate) fn touch(&mut self) {
        self.updated_at = current_timestamp();
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
