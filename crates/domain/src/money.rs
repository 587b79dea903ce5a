//! Money value object: amount + currency, immutable, compared by value.

use catalog_core::{DomainError, DomainResult, ValueObject};

/// An amount of money in a single currency.
///
/// Immutable: arithmetic returns new instances. The amount is always finite
/// and non-negative; operations between differing currencies are rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct Money {
    amount: f64,
    currency: String,
}

impl Money {
    /// Currency assumed when none is given.
    pub const DEFAULT_CURRENCY: &'static str = "USD";

    pub fn new(amount: f64, currency: impl Into<String>) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("amount must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation("amount cannot be negative"));
        }
        let currency = currency.into();
        if currency.trim().is_empty() {
            return Err(DomainError::validation("currency cannot be empty"));
        }
        Ok(Self { amount, currency })
    }

    /// Convenience constructor using [`Money::DEFAULT_CURRENCY`].
    pub fn usd(amount: f64) -> DomainResult<Self> {
        Self::new(amount, Self::DEFAULT_CURRENCY)
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns a new `Money` with the summed amount.
    ///
    /// Fails if the currencies differ.
    pub fn add(&self, other: &Money) -> DomainResult<Money> {
        self.require_same_currency(other)?;
        Money::new(self.amount + other.amount, self.currency.clone())
    }

    /// Returns a new `Money` with the difference.
    ///
    /// Fails if the currencies differ or the result would be negative.
    pub fn subtract(&self, other: &Money) -> DomainResult<Money> {
        self.require_same_currency(other)?;
        let result = self.amount - other.amount;
        if result < 0.0 {
            return Err(DomainError::validation("resulting amount cannot be negative"));
        }
        Money::new(result, self.currency.clone())
    }

    fn require_same_currency(&self, other: &Money) -> DomainResult<()> {
        if self.currency != other.currency {
            return Err(DomainError::validation(format!(
                "currency mismatch: {} vs {}",
                self.currency, other.currency
            )));
        }
        Ok(())
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency)
    }
}
