use std::collections::{BTreeSet, HashMap};

use cambio_assets::{default_registry, AssetCode, AssetRegistry, MonetaryNumber};

use super::{AssetsPair, Rate};
use crate::errors::FxError;
use crate::provider::AnchoredRates;

/// Immutable collection of pair-to-rate facts.
///
/// Built fully at one point from one of several source shapes, then
/// shared read-only; concurrent conversions need no locking. Entries are
/// directional: `rate(A, B)` and `rate(B, A)` may both be present and
/// need not be reciprocals (bid/ask spreads are preserved, never
/// "fixed").
#[derive(Debug, Clone)]
pub struct ExchangeMarket<N> {
    rates: HashMap<AssetsPair, Rate<N>>,
}

impl<N: MonetaryNumber> ExchangeMarket<N> {
    /// Market holding a single fact.
    pub fn from_entry(pair: AssetsPair, rate: Rate<N>) -> Self {
        let mut rates = HashMap::with_capacity(1);
        rates.insert(pair, rate);
        Self { rates }
    }

    /// Market from an ordered sequence of facts.
    ///
    /// A key occurring twice in one batch fails with
    /// [`FxError::DuplicateRatePair`]; last-write-wins would silently
    /// mask bad input.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (AssetsPair, Rate<N>)>,
    ) -> Result<Self, FxError> {
        let mut rates = HashMap::new();
        for (pair, rate) in entries {
            if rates.contains_key(&pair) {
                return Err(FxError::DuplicateRatePair {
                    base: pair.base().to_string(),
                    quote: pair.quote().to_string(),
                });
            }
            rates.insert(pair, rate);
        }
        Ok(Self { rates })
    }

    /// Market from a pre-existing keyed collection; keys are already
    /// unique by construction.
    pub fn from_map(rates: HashMap<AssetsPair, Rate<N>>) -> Self {
        Self { rates }
    }

    /// Market from an anchored provider payload, one entry per listed
    /// asset with the anchor as base. Resolves handles in the
    /// process-default registry.
    pub fn from_anchored(payload: AnchoredRates<N>) -> Result<Self, FxError> {
        Self::from_anchored_with_registry(payload, default_registry())
    }

    /// Market from an anchored provider payload against an explicit
    /// registry.
    pub fn from_anchored_with_registry(
        payload: AnchoredRates<N>,
        registry: &AssetRegistry,
    ) -> Result<Self, FxError> {
        Self::from_entries(payload.into_entries(registry)?)
    }

    /// The rate quoted for `base/quote`, if any.
    pub fn rate(&self, base: &str, quote: &str) -> Option<&Rate<N>> {
        self.rates.get(&AssetsPair::key(base, quote))
    }

    /// Whether a rate is quoted for `base/quote`.
    pub fn contains(&self, base: &str, quote: &str) -> bool {
        self.rates.contains_key(&AssetsPair::key(base, quote))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// All quoted pairs, in no particular order.
    pub fn pairs(&self) -> impl Iterator<Item = &AssetsPair> {
        self.rates.keys()
    }

    /// Every asset code appearing on either side of any quoted pair, in
    /// lexicographic order. This is the enumeration order for
    /// intermediate-asset search, so bridge selection is deterministic.
    pub fn assets(&self) -> BTreeSet<AssetCode> {
        let mut codes = BTreeSet::new();
        for pair in self.rates.keys() {
            codes.insert(pair.base_code().clone());
            codes.insert(pair.quote_code().clone());
        }
        codes
    }
}

impl<N: MonetaryNumber> Default for ExchangeMarket<N> {
    fn default() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }
}
