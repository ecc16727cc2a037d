//! Shipping method types.
//!
//! The storefront offers a fixed set of three flat-rate methods. The cart
//! treats them as configuration data: it stores whichever method the
//! checkout surface selects and never validates membership itself.

use crate::ids::ShippingMethodId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A flat-rate shipping method option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingMethod {
    /// Unique identifier.
    pub id: ShippingMethodId,
    /// Display name.
    pub name: String,
    /// Description shown under the option at checkout.
    pub description: String,
    /// Flat shipping price.
    pub price: Money,
    /// Delivery-time estimate display string.
    pub delivery_estimate: String,
}

impl ShippingMethod {
    /// Create a new shipping method.
    pub fn new(
        id: impl Into<ShippingMethodId>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        delivery_estimate: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            delivery_estimate: delivery_estimate.into(),
        }
    }

    /// Standard home delivery.
    pub fn standard() -> Self {
        Self::new(
            "standard",
            "Standard Shipping",
            "Home delivery across the country",
            Money::new(2_500, Currency::CRC),
            "3-5 business days",
        )
    }

    /// Express home delivery.
    pub fn express() -> Self {
        Self::new(
            "express",
            "Express Shipping",
            "Priority courier delivery",
            Money::new(4_500, Currency::CRC),
            "1-2 business days",
        )
    }

    /// Free in-store pickup.
    pub fn pickup() -> Self {
        Self::new(
            "pickup",
            "Store Pickup",
            "Pick up at our San Jose store",
            Money::zero(Currency::CRC),
            "Ready in 24 hours",
        )
    }

    /// The canonical set of methods, in checkout display order.
    pub fn canonical() -> Vec<ShippingMethod> {
        vec![Self::standard(), Self::express(), Self::pickup()]
    }

    /// Check if this is free shipping.
    pub fn is_free(&self) -> bool {
        self.price.is_zero()
    }
}
