//! Inventory analytics for the admin dashboard.
//!
//! Dashboard metrics are computed over a catalog snapshot under a selected
//! reporting period. With no live sales ledger behind the storefront, the
//! period scales the figures: a *stock modifier* simulates depletion over
//! longer windows and a *value modifier* scales the aggregate inventory
//! value. Classification here uses the **simulated** stock; the product
//! table filters on real stock via [`Product::stock_status`].

use crate::catalog::Product;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Stock at or below this (and above zero) counts as low.
///
/// Shared by both classifications: the real-stock table filter and the
/// simulated dashboard buckets.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Reporting period selected on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ReportingPeriod {
    /// Last 24 hours.
    Day,
    /// Last 7 days.
    Week,
    /// Last 30 days.
    #[default]
    Month,
    /// Last 12 months.
    Year,
}

impl ReportingPeriod {
    /// All periods, in dashboard selector order.
    pub fn all() -> [ReportingPeriod; 4] {
        [
            ReportingPeriod::Day,
            ReportingPeriod::Week,
            ReportingPeriod::Month,
            ReportingPeriod::Year,
        ]
    }

    /// Scale factor applied to the aggregate inventory value.
    pub fn value_modifier(&self) -> f64 {
        match self {
            ReportingPeriod::Day => 0.15,
            ReportingPeriod::Week => 0.4,
            ReportingPeriod::Month => 1.0,
            ReportingPeriod::Year => 12.0,
        }
    }

    /// Scale factor applied per-product to simulate stock depletion.
    pub fn stock_modifier(&self) -> f64 {
        match self {
            ReportingPeriod::Day => 0.98,
            ReportingPeriod::Week => 0.95,
            ReportingPeriod::Month => 0.9,
            ReportingPeriod::Year => 0.5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportingPeriod::Day => "day",
            ReportingPeriod::Week => "week",
            ReportingPeriod::Month => "month",
            ReportingPeriod::Year => "year",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportingPeriod::Day => "Today",
            ReportingPeriod::Week => "This Week",
            ReportingPeriod::Month => "This Month",
            ReportingPeriod::Year => "This Year",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "day" => Some(ReportingPeriod::Day),
            "week" => Some(ReportingPeriod::Week),
            "month" => Some(ReportingPeriod::Month),
            "year" => Some(ReportingPeriod::Year),
            _ => None,
        }
    }
}

/// A product's simulated stock under a reporting period.
///
/// Rounded independently per product; the aggregate in
/// [`compute_metrics`] does not reuse these values.
pub fn simulated_stock(stock: i64, period: ReportingPeriod) -> i64 {
    (stock as f64 * period.stock_modifier()).round() as i64
}

/// Dashboard metrics for a catalog snapshot.
///
/// A derived snapshot with no identity of its own: recompute whenever the
/// catalog or the selected period changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryMetrics {
    /// Number of products in the catalog.
    pub total_products: usize,
    /// Simulated units on hand across the catalog.
    pub total_stock: i64,
    /// Products whose simulated stock is low (0 < simulated <= threshold).
    pub low_stock_count: usize,
    /// Products whose simulated stock is exactly zero.
    pub out_of_stock_count: usize,
    /// Simulated inventory value, scaled by the period's value modifier.
    pub total_value: Money,
    /// The low-stock products themselves (original records, not simulated
    /// copies), for the dashboard alert list.
    pub low_stock_items: Vec<Product>,
}

/// Compute dashboard metrics for a catalog snapshot under a period.
///
/// - `total_stock` rounds the scaled aggregate once.
/// - Each product's simulated stock is rounded independently and drives
///   the low/out-of-stock buckets, which are disjoint.
/// - `total_value` sums simulated stock times the effective unit price,
///   then applies the period's value modifier and rounds.
///
/// An empty catalog yields all-zero metrics and an empty alert list.
pub fn compute_metrics(products: &[Product], period: ReportingPeriod) -> InventoryMetrics {
    let currency = products
        .first()
        .map(|p| p.price.currency)
        .unwrap_or(Currency::default());

    let raw_stock: i64 = products.iter().map(|p| p.stock).sum();
    let total_stock = (raw_stock as f64 * period.stock_modifier()).round() as i64;

    let mut low_stock_items = Vec::new();
    let mut out_of_stock_count = 0;
    let mut raw_value: i64 = 0;

    for product in products {
        let simulated = simulated_stock(product.stock, period);
        if simulated == 0 {
            out_of_stock_count += 1;
        } else if simulated <= LOW_STOCK_THRESHOLD {
            low_stock_items.push(product.clone());
        }
        raw_value += simulated * product.effective_price().amount_cents;
    }

    let total_value = Money::new(
        (raw_value as f64 * period.value_modifier()).round() as i64,
        currency,
    );

    InventoryMetrics {
        total_products: products.len(),
        total_stock,
        low_stock_count: low_stock_items.len(),
        out_of_stock_count,
        total_value,
        low_stock_items,
    }
}
