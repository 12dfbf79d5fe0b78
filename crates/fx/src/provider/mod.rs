//! Provider-shape adapters.
//!
//! External rate feeds are consumed through one narrow contract: a
//! payload exposes a single anchor asset and quote-per-one-anchor values
//! for every other listed asset. Adapters only translate a concrete JSON
//! shape into [`AnchoredRates`]; all conversion logic stays in the
//! engine.
//!
//! One module per concrete provider shape:
//! - [`open_exchange`] - openexchangerates.org `latest.json`
//! - [`frankfurter`] - frankfurter.app / ECB reference rates

pub mod frankfurter;
pub mod open_exchange;

use std::collections::BTreeMap;

use cambio_assets::{AssetRegistry, MonetaryNumber};
use log::debug;
use serde::Deserialize;

use crate::errors::FxError;
use crate::models::{AssetsPair, Rate};

/// Logical shape shared by anchored rate feeds: every entry
/// `(code, v)` means "1 anchor == v code".
///
/// Rates are kept in a `BTreeMap` so expansion into market entries is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnchoredRates<N> {
    /// Asset all rates are quoted against.
    pub anchor: String,
    /// Quote-per-one-anchor values, keyed by asset code.
    pub rates: BTreeMap<String, N>,
}

impl<N: MonetaryNumber> AnchoredRates<N> {
    pub fn new(anchor: impl Into<String>, rates: BTreeMap<String, N>) -> Self {
        Self {
            anchor: anchor.into(),
            rates,
        }
    }

    /// Expand into one `(anchor, code)` entry per listed asset, anchor
    /// as base. Feeds often list the anchor itself at 1; that entry is
    /// skipped rather than treated as a degenerate pair.
    pub(crate) fn into_entries(
        self,
        registry: &AssetRegistry,
    ) -> Result<Vec<(AssetsPair, Rate<N>)>, FxError> {
        let mut entries = Vec::with_capacity(self.rates.len());
        for (code, value) in self.rates {
            if code == self.anchor {
                debug!("skipping self-referential rate {}/{}", self.anchor, code);
                continue;
            }
            let pair = AssetsPair::new(&self.anchor, &code)?;
            let rate = Rate::with_registry(&pair, value, registry)?;
            entries.push((pair, rate));
        }
        Ok(entries)
    }
}
