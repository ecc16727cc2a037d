//! Catalog query builder.
//!
//! Both the storefront grid and the admin product table filter and sort
//! the same in-memory catalog; a query here is evaluated as one linear
//! scan by [`crate::catalog::CatalogStore::search`].

use crate::catalog::{Category, Product, StockStatus};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort options for catalog results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Featured products first, newest within each group.
    #[default]
    Featured,
    /// Sort by effective price, low to high.
    PriceAsc,
    /// Sort by effective price, high to low.
    PriceDesc,
    /// Sort by name A-Z.
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
    /// Sort by newest first.
    Newest,
}

impl SortOption {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A-Z",
            SortOption::NameDesc => "Name: Z-A",
            SortOption::Newest => "Newest",
        }
    }

    /// Compare two products under this sort.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Featured => b
                .featured
                .cmp(&a.featured)
                .then(b.created_at.cmp(&a.created_at)),
            SortOption::PriceAsc => a
                .effective_price()
                .amount_cents
                .cmp(&b.effective_price().amount_cents),
            SortOption::PriceDesc => b
                .effective_price()
                .amount_cents
                .cmp(&a.effective_price().amount_cents),
            SortOption::NameAsc => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortOption::NameDesc => b.name.to_lowercase().cmp(&a.name.to_lowercase()),
            SortOption::Newest => b.created_at.cmp(&a.created_at),
        }
    }
}

/// A catalog query.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogQuery {
    /// Text matched against name and description, case-insensitively.
    pub text: Option<String>,
    /// Restrict to one category.
    pub category: Option<Category>,
    /// Only featured products.
    pub featured_only: bool,
    /// Restrict by **real** stock classification (admin table filter).
    pub stock_status: Option<StockStatus>,
    /// Sort option.
    pub sort: SortOption,
}

impl CatalogQuery {
    /// Create an unrestricted query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.text = Some(text);
        }
        self
    }

    /// Restrict to a category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Only return featured products.
    pub fn featured_only(mut self) -> Self {
        self.featured_only = true;
        self
    }

    /// Restrict by real stock classification.
    pub fn with_stock_status(mut self, status: StockStatus) -> Self {
        self.stock_status = Some(status);
        self
    }

    /// Set the sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Check if a product matches every restriction on this query.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(ref text) = self.text {
            let needle = text.to_lowercase();
            let in_name = product.name.to_lowercase().contains(&needle);
            let in_description = product.description.to_lowercase().contains(&needle);
            if !in_name && !in_description {
                return false;
            }
        }
        if let Some(category) = self.category {
            if product.category != category {
                return false;
            }
        }
        if self.featured_only && !product.featured {
            return false;
        }
        if let Some(status) = self.stock_status {
            if product.stock_status() != status {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(name: &str, price: i64, category: Category) -> Product {
        Product::new(
            name,
            format!("{} for daily training", name),
            Money::new(price, Currency::CRC),
            category,
        )
        .with_stock(10)
    }

    #[test]
    fn test_text_match_is_case_insensitive() {
        let query = CatalogQuery::new().with_text("WHEY");
        let whey = product("Whey Protein", 25_000, Category::Protein);
        let casein = product("Casein Protein", 27_500, Category::Protein);

        assert!(query.matches(&whey));
        assert!(!query.matches(&casein));
    }

    #[test]
    fn test_text_matches_description() {
        let query = CatalogQuery::new().with_text("training");
        let p = product("Creatine", 15_000, Category::Creatine);
        assert!(query.matches(&p));
    }

    #[test]
    fn test_empty_text_is_ignored() {
        let query = CatalogQuery::new().with_text("");
        assert!(query.text.is_none());
    }

    #[test]
    fn test_category_filter() {
        let query = CatalogQuery::new().with_category(Category::Vitamins);
        assert!(query.matches(&product("Multivitamin", 9_500, Category::Vitamins)));
        assert!(!query.matches(&product("Creatine", 15_000, Category::Creatine)));
    }

    #[test]
    fn test_featured_filter() {
        let query = CatalogQuery::new().featured_only();
        let plain = product("Multivitamin", 9_500, Category::Vitamins);
        let featured = product("Creatine", 15_000, Category::Creatine).with_featured();

        assert!(!query.matches(&plain));
        assert!(query.matches(&featured));
    }

    #[test]
    fn test_stock_status_filter_uses_real_stock() {
        let query = CatalogQuery::new().with_stock_status(StockStatus::LowStock);
        let low = product("Vitamin D3", 7_000, Category::Vitamins).with_stock(3);
        let stocked = product("Multivitamin", 9_500, Category::Vitamins);

        assert!(query.matches(&low));
        assert!(!query.matches(&stocked));
    }

    #[test]
    fn test_price_sort_uses_effective_price() {
        let cheap_after_discount = product("Whey", 25_000, Category::Protein)
            .with_discount_price(Money::new(10_000, Currency::CRC));
        let midrange = product("Creatine", 15_000, Category::Creatine);

        assert_eq!(
            SortOption::PriceAsc.compare(&cheap_after_discount, &midrange),
            Ordering::Less
        );
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let a = product("magnesium", 8_500, Category::Minerals);
        let b = product("Omega-3", 12_000, Category::Omega3);
        assert_eq!(SortOption::NameAsc.compare(&a, &b), Ordering::Less);
    }
}
