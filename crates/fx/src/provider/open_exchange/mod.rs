//! Adapter for the openexchangerates.org `latest.json` shape.
//!
//! Only the anchor and the rate table are consumed; license and
//! timestamp metadata are ignored (the core does no staleness
//! tracking).

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::AnchoredRates;
use crate::errors::FxError;

#[derive(Debug, Deserialize)]
struct LatestPayload {
    #[allow(dead_code)]
    #[serde(default)]
    disclaimer: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    timestamp: Option<i64>,
    base: String,
    rates: BTreeMap<String, Decimal>,
}

/// Parse a `latest.json` document into the anchored-rates shape.
pub fn parse_latest(json: &str) -> Result<AnchoredRates<Decimal>, FxError> {
    let payload: LatestPayload = serde_json::from_str(json)?;
    Ok(AnchoredRates::new(payload.base, payload.rates))
}
