//! Money type for representing monetary values.
//!
//! Uses minor-unit integer representation to avoid floating-point
//! precision issues that plague monetary calculations. Colón prices in
//! this storefront are whole-number amounts (the colón carries no minor
//! subdivision at retail), so `Currency::CRC` has zero decimal places.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Costa Rican colón.
    #[default]
    CRC,
    /// US dollar.
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "CRC").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::CRC => "CRC",
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol (e.g., "\u{20a1}").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::CRC => "\u{20a1}",
            Currency::USD => "$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::CRC => 0,
            Currency::USD => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "CRC" => Some(Currency::CRC),
            "USD" => Some(Currency::USD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (whole colones
/// for CRC, cents for USD). This avoids floating-point precision issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_cents as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "\u{20a1}25000").
    pub fn display(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        format!("{}{:.places$}", self.currency.symbol(), decimal)
    }

    /// Format as a display string without symbol (e.g., "25000").
    pub fn display_amount(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", decimal)
    }

    /// Add another Money value.
    ///
    /// # Panics
    /// Panics if currencies don't match. Use `try_add` for fallible addition.
    pub fn add(&self, other: &Money) -> Money {
        self.try_add(other).expect("Currency mismatch in addition")
    }

    /// Try to add another Money value, returning None if currencies don't match.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_cents + other.amount_cents,
            self.currency,
        ))
    }

    /// Subtract another Money value.
    ///
    /// # Panics
    /// Panics if currencies don't match.
    pub fn subtract(&self, other: &Money) -> Money {
        self.try_subtract(other)
            .expect("Currency mismatch in subtraction")
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_cents - other.amount_cents,
            self.currency,
        ))
    }

    /// Multiply by a scalar.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents * factor, self.currency)
    }

    /// Multiply by a decimal factor, rounding to the nearest minor unit.
    ///
    /// Rounding is standard arithmetic rounding (half away from zero); the
    /// same policy is used everywhere a fractional intermediate appears.
    pub fn multiply_decimal(&self, factor: f64) -> Money {
        let new_amount = (self.amount_cents as f64 * factor).round() as i64;
        Money::new(new_amount, self.currency)
    }

    /// Calculate a percentage of this amount.
    pub fn percentage(&self, percent: f64) -> Money {
        self.multiply_decimal(percent / 100.0)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::add(&self, &other)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::subtract(&self, &other)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_minor_units() {
        let m = Money::new(25000, Currency::CRC);
        assert_eq!(m.amount_cents, 25000);
        assert_eq!(m.currency, Currency::CRC);
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::new(25000, Currency::CRC);
        assert!((m.to_decimal() - 25000.0).abs() < f64::EPSILON);

        let m = Money::new(4999, Currency::USD);
        assert!((m.to_decimal() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(25000, Currency::CRC);
        assert_eq!(m.display(), "\u{20a1}25000"); // CRC has no decimals

        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(1000, Currency::CRC);
        let b = Money::new(500, Currency::CRC);
        let c = a + b;
        assert_eq!(c.amount_cents, 1500);
    }

    #[test]
    fn test_money_subtraction() {
        let a = Money::new(1000, Currency::CRC);
        let b = Money::new(300, Currency::CRC);
        let c = a.subtract(&b);
        assert_eq!(c.amount_cents, 700);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::new(15000, Currency::CRC);
        let doubled = m.multiply(2);
        assert_eq!(doubled.amount_cents, 30000);
    }

    #[test]
    fn test_money_percentage() {
        let m = Money::new(30000, Currency::CRC);
        let tax = m.percentage(13.0);
        assert_eq!(tax.amount_cents, 3900);
    }

    #[test]
    fn test_percentage_rounds_half_away_from_zero() {
        // 150 * 13% = 19.5, rounds to 20
        let m = Money::new(150, Currency::CRC);
        assert_eq!(m.percentage(13.0).amount_cents, 20);
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_money_currency_mismatch() {
        let crc = Money::new(1000, Currency::CRC);
        let usd = Money::new(1000, Currency::USD);
        let _ = crc + usd;
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("CRC"), Some(Currency::CRC));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
