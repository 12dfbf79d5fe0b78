//! Adapter for the frankfurter.app / ECB reference-rate shape.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::AnchoredRates;
use crate::errors::FxError;

#[derive(Debug, Deserialize)]
struct LatestPayload {
    #[allow(dead_code)]
    #[serde(default)]
    amount: Option<Decimal>,
    #[allow(dead_code)]
    #[serde(default)]
    date: Option<String>,
    base: String,
    rates: BTreeMap<String, Decimal>,
}

/// Parse a `latest` document into the anchored-rates shape.
pub fn parse_latest(json: &str) -> Result<AnchoredRates<Decimal>, FxError> {
    let payload: LatestPayload = serde_json::from_str(json)?;
    Ok(AnchoredRates::new(payload.base, payload.rates))
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_parse_latest() {
        let json = r#"{
            "amount": 1.0,
            "base": "EUR",
            "date": "2021-01-04",
            "rates": {
                "CAD": 1.5621,
                "USD": 1.2296
            }
        }"#;

        let payload = parse_latest(json).unwrap();
        assert_eq!(payload.anchor, "EUR");
        assert_eq!(payload.rates["CAD"], dec!(1.5621));
        assert_eq!(payload.rates["USD"], dec!(1.2296));
    }

    #[test]
    fn test_rates_field_is_required() {
        let result = parse_latest(r#"{"base": "EUR", "date": "2021-01-04"}"#);
        assert!(matches!(result, Err(FxError::MalformedPayload(_))));
    }
}
