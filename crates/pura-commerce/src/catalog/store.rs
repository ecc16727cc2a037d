//! In-memory catalog store.
//!
//! The storefront and the admin back-office both read from one in-memory
//! product collection; every list/filter/sort is a single linear scan.
//! Mutations are validated here, at the boundary, so the pricing and
//! analytics code can assume well-formed products.

use crate::catalog::{compute_metrics, InventoryMetrics, Product, ReportingPeriod};
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::search::CatalogQuery;
use serde::{Deserialize, Serialize};

/// A stock-mutation request from the admin restock dialog.
///
/// `new_stock` is the absolute level to set, not a delta.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockUpdate {
    /// Product to update.
    pub product_id: ProductId,
    /// New absolute stock level.
    pub new_stock: i64,
}

impl StockUpdate {
    /// Create a new stock update.
    pub fn new(product_id: ProductId, new_stock: i64) -> Self {
        Self {
            product_id,
            new_stock,
        }
    }
}

/// The in-memory product catalog, in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from a product list, validating every product and
    /// rejecting duplicate ids.
    pub fn with_products(products: Vec<Product>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for product in products {
            store.insert(product)?;
        }
        Ok(store)
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Add a product to the catalog.
    pub fn insert(&mut self, product: Product) -> Result<(), StoreError> {
        product.validate()?;
        if self.get(&product.id).is_some() {
            return Err(StoreError::DuplicateProduct(
                product.id.as_str().to_string(),
            ));
        }
        self.products.push(product);
        Ok(())
    }

    /// Replace an existing product, keyed by id.
    pub fn update(&mut self, product: Product) -> Result<(), StoreError> {
        product.validate()?;
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => {
                let created_at = existing.created_at;
                *existing = product;
                existing.created_at = created_at;
                existing.touch();
                Ok(())
            }
            None => Err(StoreError::ProductNotFound(
                product.id.as_str().to_string(),
            )),
        }
    }

    /// Remove a product, returning it if present.
    pub fn remove(&mut self, id: &ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| &p.id == id)?;
        Some(self.products.remove(index))
    }

    /// Apply a stock mutation from the admin restock dialog.
    ///
    /// Rejects unknown products and negative stock levels; the analytics
    /// and table-filter reads then see the updated catalog on their next
    /// computation.
    pub fn apply_stock_update(&mut self, update: &StockUpdate) -> Result<(), StoreError> {
        if update.new_stock < 0 {
            return Err(StoreError::NegativeStock {
                product_id: update.product_id.as_str().to_string(),
                requested: update.new_stock,
            });
        }
        match self
            .products
            .iter_mut()
            .find(|p| p.id == update.product_id)
        {
            Some(product) => {
                product.stock = update.new_stock;
                product.touch();
                Ok(())
            }
            None => Err(StoreError::ProductNotFound(
                update.product_id.as_str().to_string(),
            )),
        }
    }

    /// Run a storefront/admin query: one linear scan, then sort.
    pub fn search(&self, query: &CatalogQuery) -> Vec<&Product> {
        let mut results: Vec<&Product> =
            self.products.iter().filter(|p| query.matches(p)).collect();
        results.sort_by(|a, b| query.sort.compare(a, b));
        results
    }

    /// Products featured on the storefront.
    pub fn featured_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Products low on **real** stock (table filter, not the simulated
    /// dashboard classification).
    pub fn low_stock_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_low_stock()).collect()
    }

    /// Products out of **real** stock.
    pub fn out_of_stock_products(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.is_out_of_stock())
            .collect()
    }

    /// Dashboard metrics for the current catalog under a period.
    pub fn metrics(&self, period: ReportingPeriod) -> InventoryMetrics {
        compute_metrics(&self.products, period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::money::{Currency, Money};

    fn product(id: &str, name: &str, price: i64, stock: i64) -> Product {
        let mut p = Product::new(
            name,
            format!("{} description", name),
            Money::new(price, Currency::CRC),
            Category::Vitamins,
        )
        .with_stock(stock);
        p.id = ProductId::new(id);
        p
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = CatalogStore::new();
        store.insert(product("p1", "Vitamin D3", 9500, 20)).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&ProductId::new("p1")).unwrap().name, "Vitamin D3");
        assert!(store.get(&ProductId::new("p2")).is_none());
    }

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut store = CatalogStore::new();
        store.insert(product("p1", "Vitamin D3", 9500, 20)).unwrap();

        let result = store.insert(product("p1", "Vitamin C", 7000, 10));
        assert!(matches!(result, Err(StoreError::DuplicateProduct(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_replaces_and_keeps_created_at() {
        let mut store = CatalogStore::new();
        let original = product("p1", "Vitamin D3", 9500, 20);
        let created_at = original.created_at;
        store.insert(original).unwrap();

        let mut replacement = product("p1", "Vitamin D3 2000IU", 10500, 15);
        replacement.created_at = 0; // should be ignored
        store.update(replacement).unwrap();

        let updated = store.get(&ProductId::new("p1")).unwrap();
        assert_eq!(updated.name, "Vitamin D3 2000IU");
        assert_eq!(updated.created_at, created_at);
    }

    #[test]
    fn test_update_unknown_product_errors() {
        let mut store = CatalogStore::new();
        let result = store.update(product("ghost", "Ghost", 1000, 1));
        assert!(matches!(result, Err(StoreError::ProductNotFound(_))));
    }

    #[test]
    fn test_remove() {
        let mut store = CatalogStore::new();
        store.insert(product("p1", "Vitamin D3", 9500, 20)).unwrap();

        let removed = store.remove(&ProductId::new("p1")).unwrap();
        assert_eq!(removed.name, "Vitamin D3");
        assert!(store.is_empty());
        assert!(store.remove(&ProductId::new("p1")).is_none());
    }

    #[test]
    fn test_apply_stock_update() {
        let mut store = CatalogStore::new();
        store.insert(product("p1", "Vitamin D3", 9500, 2)).unwrap();

        store
            .apply_stock_update(&StockUpdate::new(ProductId::new("p1"), 40))
            .unwrap();
        assert_eq!(store.get(&ProductId::new("p1")).unwrap().stock, 40);
    }

    #[test]
    fn test_stock_update_rejects_negative() {
        let mut store = CatalogStore::new();
        store.insert(product("p1", "Vitamin D3", 9500, 2)).unwrap();

        let result = store.apply_stock_update(&StockUpdate::new(ProductId::new("p1"), -5));
        assert!(matches!(result, Err(StoreError::NegativeStock { .. })));
        // Rejected update leaves stock untouched
        assert_eq!(store.get(&ProductId::new("p1")).unwrap().stock, 2);
    }

    #[test]
    fn test_stock_update_unknown_product() {
        let mut store = CatalogStore::new();
        let result = store.apply_stock_update(&StockUpdate::new(ProductId::new("ghost"), 10));
        assert!(matches!(result, Err(StoreError::ProductNotFound(_))));
    }

    #[test]
    fn test_real_stock_filters() {
        let store = CatalogStore::with_products(vec![
            product("p1", "A", 1000, 0),
            product("p2", "B", 1000, 3),
            product("p3", "C", 1000, 30),
        ])
        .unwrap();

        let low: Vec<_> = store.low_stock_products();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].name, "B");

        let out: Vec<_> = store.out_of_stock_products();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "A");
    }
}
