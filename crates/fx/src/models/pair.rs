use std::fmt;
use std::sync::Arc;

use cambio_assets::AssetCode;

use crate::errors::FxError;

/// Ordered `(base, quote)` pair of asset codes.
///
/// Denotes the price of one base unit expressed in quote units. The two
/// directions of a relationship are distinct keys; a market may quote
/// both with rates that are not reciprocals of each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetsPair {
    base: AssetCode,
    quote: AssetCode,
}

impl AssetsPair {
    /// Build a pair; identical base and quote is rejected.
    pub fn new(base: &str, quote: &str) -> Result<Self, FxError> {
        if base == quote {
            return Err(FxError::DegenerateAssetsPair(base.to_string()));
        }
        Ok(Self {
            base: Arc::from(base),
            quote: Arc::from(quote),
        })
    }

    /// Lookup-key construction; callers guarantee `base != quote`.
    pub(crate) fn key(base: &str, quote: &str) -> Self {
        Self {
            base: Arc::from(base),
            quote: Arc::from(quote),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn quote(&self) -> &str {
        &self.quote
    }

    pub(crate) fn base_code(&self) -> &AssetCode {
        &self.base
    }

    pub(crate) fn quote_code(&self) -> &AssetCode {
        &self.quote
    }

    /// The same relationship keyed the other way round.
    pub fn inverse(&self) -> Self {
        Self {
            base: Arc::clone(&self.quote),
            quote: Arc::clone(&self.base),
        }
    }
}

impl fmt::Display for AssetsPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}
