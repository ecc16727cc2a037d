//! Catalog search module.
//!
//! Contains the query builder used by the storefront grid and the admin
//! product table.

mod query;

pub use query::{CatalogQuery, SortOption};
