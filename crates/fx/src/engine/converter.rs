use cambio_assets::{default_registry, AssetRegistry, MonetaryNumber, Quantity};
use log::debug;

use super::ConversionMode;
use crate::errors::FxError;
use crate::models::ExchangeMarket;

/// Stateless conversion engine bound to an asset registry.
///
/// One logical call resolves the target handle, performs the
/// mode-specific market lookups, composes the arithmetic, and returns.
/// Amounts must have been resolved against the same registry the
/// converter was built with; mixing registries is outside the contract.
pub struct Converter<'r> {
    registry: &'r AssetRegistry,
}

impl<'r> Converter<'r> {
    pub fn new(registry: &'r AssetRegistry) -> Self {
        Self { registry }
    }

    /// Convert `amount` into the target asset using the given mode.
    ///
    /// Converting into the asset the amount is already denominated in is
    /// a no-op returning the amount unchanged, regardless of market
    /// contents.
    pub fn convert<N: MonetaryNumber>(
        &self,
        target: &str,
        amount: Quantity<N>,
        market: &ExchangeMarket<N>,
        mode: ConversionMode,
    ) -> Result<Quantity<N>, FxError> {
        let target_handle = self.registry.resolve(target)?;
        if target_handle.dimension() == amount.asset().dimension() {
            return Ok(amount);
        }

        match mode {
            ConversionMode::Direct => {
                let rate = market
                    .rate(amount.code(), target)
                    .ok_or_else(|| missing_pair(amount.code(), target))?;
                rate.apply(amount)
            }
            ConversionMode::Inverse => {
                let rate = market
                    .rate(target, amount.code())
                    .ok_or_else(|| missing_pair(target, amount.code()))?;
                rate.apply_inverse(amount)
            }
            ConversionMode::DirectViaIntermediate => {
                let source = amount.code().to_string();
                let legs = market.assets().into_iter().find_map(|mid| {
                    let first = market.rate(&source, &mid)?;
                    let second = market.rate(&mid, target)?;
                    Some((mid, first, second))
                });
                let (mid, first, second) = legs.ok_or_else(|| FxError::MissingIntermediateAsset {
                    origin: source.clone(),
                    target: target.to_string(),
                })?;
                debug!("converting {} to {} via {}", source, target, mid);
                second.apply(first.apply(amount)?)
            }
            ConversionMode::InverseViaIntermediate => {
                let source = amount.code().to_string();
                let legs = market.assets().into_iter().find_map(|mid| {
                    let first = market.rate(target, &mid)?;
                    let second = market.rate(&mid, &source)?;
                    Some((mid, first, second))
                });
                let (mid, first, second) = legs.ok_or_else(|| FxError::MissingIntermediateAsset {
                    origin: source.clone(),
                    target: target.to_string(),
                })?;
                debug!("converting {} to {} inversely via {}", source, target, mid);
                first.apply_inverse(second.apply_inverse(amount)?)
            }
        }
    }
}

/// Convert against the process-default registry.
pub fn convert<N: MonetaryNumber>(
    target: &str,
    amount: Quantity<N>,
    market: &ExchangeMarket<N>,
    mode: ConversionMode,
) -> Result<Quantity<N>, FxError> {
    Converter::new(default_registry()).convert(target, amount, market, mode)
}

fn missing_pair(base: &str, quote: &str) -> FxError {
    FxError::MissingRatePair {
        base: base.to_string(),
        quote: quote.to_string(),
    }
}
