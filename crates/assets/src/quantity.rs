//! Dimensionally-typed amounts.

use std::fmt;

use crate::errors::AssetError;
use crate::numeric::MonetaryNumber;
use crate::registry::{default_registry, AssetHandle, AssetRegistry};

/// An amount inseparable from the asset it is denominated in.
///
/// Quantities are plain value types; the conversion core never retains
/// them beyond a single call. The numeric representation `N` is chosen
/// by the caller ([`MonetaryNumber`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity<N> {
    value: N,
    asset: AssetHandle,
}

impl<N: MonetaryNumber> Quantity<N> {
    /// Create a quantity, resolving the code in the process-default
    /// registry.
    pub fn new(value: N, code: &str) -> Result<Self, AssetError> {
        Self::with_registry(value, code, default_registry())
    }

    /// Create a quantity, resolving the code in an explicit registry.
    pub fn with_registry(
        value: N,
        code: &str,
        registry: &AssetRegistry,
    ) -> Result<Self, AssetError> {
        let asset = registry.resolve(code)?;
        Ok(Self { value, asset })
    }

    /// Assemble a quantity from an already-resolved handle.
    pub fn from_parts(value: N, asset: AssetHandle) -> Self {
        Self { value, asset }
    }

    pub fn value(&self) -> &N {
        &self.value
    }

    pub fn into_value(self) -> N {
        self.value
    }

    pub fn asset(&self) -> &AssetHandle {
        &self.asset
    }

    pub fn code(&self) -> &str {
        self.asset.code()
    }

    pub fn into_parts(self) -> (N, AssetHandle) {
        (self.value, self.asset)
    }
}

impl<N: fmt::Display> fmt::Display for Quantity<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.asset.code())
    }
}
