use cambio_assets::{default_registry, AssetHandle, AssetRegistry, MonetaryNumber, Quantity};

use super::AssetsPair;
use crate::errors::FxError;

/// A positive quote-per-base conversion factor.
///
/// The rate stores the resolved handles of its quote (numerator) and
/// base (denominator) assets. Applying a rate to an amount whose asset
/// does not match the relevant side fails with
/// [`FxError::DimensionMismatch`] at conversion time; construction only
/// polices positivity.
#[derive(Debug, Clone, PartialEq)]
pub struct Rate<N> {
    value: N,
    base: AssetHandle,
    quote: AssetHandle,
}

impl<N: MonetaryNumber> Rate<N> {
    /// Build a rate for the pair, resolving handles in the
    /// process-default registry.
    pub fn new(pair: &AssetsPair, value: N) -> Result<Self, FxError> {
        Self::with_registry(pair, value, default_registry())
    }

    /// Build a rate for the pair, resolving handles in an explicit
    /// registry.
    pub fn with_registry(
        pair: &AssetsPair,
        value: N,
        registry: &AssetRegistry,
    ) -> Result<Self, FxError> {
        if !value.is_positive_value() {
            return Err(FxError::NonPositiveRate {
                base: pair.base().to_string(),
                quote: pair.quote().to_string(),
            });
        }
        let base = registry.resolve(pair.base())?;
        let quote = registry.resolve(pair.quote())?;
        Ok(Self { value, base, quote })
    }

    pub fn value(&self) -> &N {
        &self.value
    }

    pub fn base(&self) -> &AssetHandle {
        &self.base
    }

    pub fn quote(&self) -> &AssetHandle {
        &self.quote
    }

    /// Multiply an amount denominated in the base asset into the quote
    /// asset.
    pub(crate) fn apply(&self, amount: Quantity<N>) -> Result<Quantity<N>, FxError> {
        if amount.asset().dimension() != self.base.dimension() {
            return Err(FxError::DimensionMismatch {
                expected: self.base.code().to_string(),
                found: amount.code().to_string(),
            });
        }
        let value = amount.into_value() * self.value.clone();
        Ok(Quantity::from_parts(value, self.quote.clone()))
    }

    /// Divide an amount denominated in the quote asset back into the
    /// base asset.
    pub(crate) fn apply_inverse(&self, amount: Quantity<N>) -> Result<Quantity<N>, FxError> {
        if amount.asset().dimension() != self.quote.dimension() {
            return Err(FxError::DimensionMismatch {
                expected: self.quote.code().to_string(),
                found: amount.code().to_string(),
            });
        }
        let value = amount.into_value() / self.value.clone();
        Ok(Quantity::from_parts(value, self.base.clone()))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_positive_rate_is_accepted() {
        let registry = AssetRegistry::new();
        let pair = AssetsPair::new("USD", "BRL").unwrap();
        let rate = Rate::with_registry(&pair, dec!(5.33897), &registry).unwrap();
        assert_eq!(rate.value(), &dec!(5.33897));
        assert_eq!(rate.base().code(), "USD");
        assert_eq!(rate.quote().code(), "BRL");
    }

    #[test]
    fn test_zero_rate_is_rejected() {
        let registry = AssetRegistry::new();
        let pair = AssetsPair::new("USD", "BRL").unwrap();
        assert!(matches!(
            Rate::with_registry(&pair, Decimal::ZERO, &registry),
            Err(FxError::NonPositiveRate { .. })
        ));
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let registry = AssetRegistry::new();
        let pair = AssetsPair::new("EUR", "USD").unwrap();
        assert!(matches!(
            Rate::with_registry(&pair, -1.19536f64, &registry),
            Err(FxError::NonPositiveRate { .. })
        ));
    }

    #[test]
    fn test_apply_moves_amount_into_quote_asset() {
        let registry = AssetRegistry::new();
        let pair = AssetsPair::new("USD", "BRL").unwrap();
        let rate = Rate::with_registry(&pair, dec!(5.33897), &registry).unwrap();
        let amount = Quantity::with_registry(dec!(100), "USD", &registry).unwrap();

        let converted = rate.apply(amount).unwrap();
        assert_eq!(converted.value(), &dec!(533.89700));
        assert_eq!(converted.code(), "BRL");
    }

    #[test]
    fn test_apply_rejects_mismatched_amount() {
        let registry = AssetRegistry::new();
        let pair = AssetsPair::new("USD", "BRL").unwrap();
        let rate = Rate::with_registry(&pair, dec!(5.33897), &registry).unwrap();
        let amount = Quantity::with_registry(dec!(100), "EUR", &registry).unwrap();

        assert!(matches!(
            rate.apply(amount),
            Err(FxError::DimensionMismatch { .. })
        ));
    }
}
