//! The demo catalog.
//!
//! Everything behind this storefront is mocked in memory; this module is
//! the mock. Prices are whole-number colones.

use crate::catalog::{Category, Product};
use crate::money::{Currency, Money};

fn crc(amount: i64) -> Money {
    Money::new(amount, Currency::CRC)
}

/// The mock supplements catalog used by the demo storefront and the tests.
///
/// Spans every category and includes discounted, featured, low-stock and
/// out-of-stock products so every storefront and admin surface has
/// something to show.
pub fn demo_catalog() -> Vec<Product> {
    vec![
        Product::new(
            "Whey Protein Isolate 2lb",
            "Grass-fed whey isolate, 25g protein per serving, vanilla.",
            crc(25_000),
            Category::Protein,
        )
        .with_discount_price(crc(15_000))
        .with_stock(24)
        .with_featured()
        .with_benefit("25g protein per serving")
        .with_benefit("Fast absorption")
        .with_benefit("Low in lactose"),
        Product::new(
            "Casein Protein 2lb",
            "Slow-release micellar casein, chocolate.",
            crc(27_500),
            Category::Protein,
        )
        .with_stock(10),
        Product::new(
            "Creatine Monohydrate 300g",
            "Micronized creatine monohydrate, unflavored.",
            crc(15_000),
            Category::Creatine,
        )
        .with_stock(40)
        .with_featured()
        .with_benefit("Supports strength and power")
        .with_benefit("Micronized for easy mixing"),
        Product::new(
            "Pre-Workout Citrus Blast",
            "Caffeine, beta-alanine and citrulline pre-workout formula.",
            crc(18_000),
            Category::PreWorkout,
        )
        .with_discount_price(crc(14_500))
        .with_stock(4),
        Product::new(
            "Multivitamin 90ct",
            "Daily multivitamin with 23 essential micronutrients.",
            crc(9_500),
            Category::Vitamins,
        )
        .with_stock(60),
        Product::new(
            "Vitamin D3 2000IU 120ct",
            "High-potency vitamin D3 in olive oil softgels.",
            crc(7_000),
            Category::Vitamins,
        )
        .with_stock(3),
        Product::new(
            "Magnesium Glycinate 120ct",
            "Chelated magnesium for sleep and muscle recovery.",
            crc(8_500),
            Category::Minerals,
        )
        .with_stock(0),
        Product::new(
            "Omega-3 Fish Oil 90ct",
            "Molecularly distilled fish oil, 1000mg EPA/DHA.",
            crc(12_000),
            Category::Omega3,
        )
        .with_stock(18)
        .with_benefit("Supports heart and brain health"),
        Product::new(
            "Marine Collagen 250g",
            "Hydrolyzed marine collagen peptides, unflavored.",
            crc(16_500),
            Category::Wellness,
        )
        .with_discount_price(crc(13_000))
        .with_stock(12),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;

    #[test]
    fn test_demo_catalog_is_valid() {
        // Every seeded product passes store-boundary validation
        let store = CatalogStore::with_products(demo_catalog()).unwrap();
        assert_eq!(store.len(), 9);
    }

    #[test]
    fn test_demo_catalog_covers_admin_surfaces() {
        let catalog = demo_catalog();
        assert!(catalog.iter().any(|p| p.featured));
        assert!(catalog.iter().any(|p| p.is_on_sale()));
        assert!(catalog.iter().any(|p| p.is_low_stock()));
        assert!(catalog.iter().any(|p| p.is_out_of_stock()));
    }

    #[test]
    fn test_demo_catalog_prices_are_whole_colones() {
        for product in demo_catalog() {
            assert_eq!(product.price.currency, Currency::CRC);
            if let Some(dp) = product.discount_price {
                assert_eq!(dp.currency, Currency::CRC);
            }
        }
    }
}
