//! Product catalog module.
//!
//! Contains the product and category types, the in-memory catalog store,
//! the admin inventory analytics, and the demo catalog seed.

mod analytics;
mod category;
mod product;
mod seed;
mod store;

pub use analytics::{
    compute_metrics, simulated_stock, InventoryMetrics, ReportingPeriod, LOW_STOCK_THRESHOLD,
};
pub use category::Category;
pub use product::{Product, StockStatus};
pub use seed::demo_catalog;
pub use store::{CatalogStore, StockUpdate};
