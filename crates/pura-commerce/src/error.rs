//! Storefront error types.

use thiserror::Error;

/// Errors that can occur at the catalog-store boundary.
///
/// Cart operations are deliberately total and never error: unknown product
/// ids and non-positive quantities are treated as no-ops there. Validation
/// lives where mutations enter the catalog.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A product with the same id already exists.
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// A stock mutation would leave the product with negative stock.
    #[error("Negative stock for {product_id}: requested {requested}")]
    NegativeStock { product_id: String, requested: i64 },

    /// A discount price above the regular price.
    #[error("Discount price {discount} exceeds price {price} for {product_id}")]
    DiscountExceedsPrice {
        product_id: String,
        discount: i64,
        price: i64,
    },
}
