//! E-commerce domain types and logic for the Pura Vida supplements
//! storefront.
//!
//! This crate is the in-memory core behind the storefront and its admin
//! back-office:
//!
//! - **Catalog**: products, category tags, the in-memory store, inventory
//!   analytics for the admin dashboard
//! - **Cart**: shopping cart with line items, shipping selection, pricing
//! - **Checkout**: the fixed set of shipping methods
//! - **Search**: filtering and sorting over the catalog
//!
//! Everything is a synchronous, pure derivation over caller-supplied data:
//! there is no database, no network, and no payment processing here. The
//! UI layer holds the catalog, mutates it through [`CatalogStore`], and
//! queries fresh totals and metrics after every change.
//!
//! # Example
//!
//! ```rust
//! use pura_commerce::prelude::*;
//!
//! // The demo catalog is the storefront's mock data set
//! let store = CatalogStore::with_products(demo_catalog()).unwrap();
//!
//! // A shopper fills a cart
//! let mut cart = Cart::new();
//! let results = store.search(&CatalogQuery::new().with_text("whey"));
//! cart.add_item(results[0], 2);
//! cart.set_shipping_method(ShippingMethod::express());
//! let pricing = cart.pricing();
//! assert_eq!(pricing.grand_total.amount_cents, 38_400);
//!
//! // The admin dashboard reads period-scaled metrics
//! let metrics = store.metrics(ReportingPeriod::Month);
//! assert_eq!(metrics.total_products, store.len());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use cart::{Cart, CartLine, CartPricing, TAX_RATE_PERCENT};
pub use catalog::{CatalogStore, InventoryMetrics, Product, ReportingPeriod};
pub use checkout::ShippingMethod;
pub use error::StoreError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        compute_metrics, demo_catalog, simulated_stock, CatalogStore, Category, InventoryMetrics,
        Product, ReportingPeriod, StockStatus, StockUpdate, LOW_STOCK_THRESHOLD,
    };

    // Cart
    pub use crate::cart::{Cart, CartLine, CartPricing, LinePricing, TAX_RATE_PERCENT};

    // Checkout
    pub use crate::checkout::ShippingMethod;

    // Search
    pub use crate::search::{CatalogQuery, SortOption};
}
