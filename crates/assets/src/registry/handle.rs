use std::fmt;
use std::sync::Arc;

/// Asset code string, e.g. "USD" or "XAU". Codes are case-sensitive and
/// shared cheaply once interned by the registry.
pub type AssetCode = Arc<str>;

/// Index into the registry's append-only dimension table.
///
/// Two quantities are commensurable exactly when their handles carry the
/// same `DimensionId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DimensionId(pub(crate) u32);

impl DimensionId {
    /// Position of the dimension in the registry table.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Resolved identity of an asset: its dimension plus the reference unit
/// (one unit of the asset itself, scaled 1:1 to the dimension).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetHandle {
    dimension: DimensionId,
    code: AssetCode,
}

impl AssetHandle {
    pub(crate) fn new(dimension: DimensionId, code: AssetCode) -> Self {
        Self { dimension, code }
    }

    pub fn dimension(&self) -> DimensionId {
        self.dimension
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl fmt::Display for AssetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}
