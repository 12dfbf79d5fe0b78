use std::collections::HashMap;
use std::sync::RwLock;

use lazy_static::lazy_static;
use log::debug;

use super::{AssetCode, AssetHandle, DimensionId};
use crate::errors::AssetError;

lazy_static! {
    static ref DEFAULT_REGISTRY: AssetRegistry = AssetRegistry::new();
}

/// Process-wide default registry.
///
/// Mirrors the ergonomics of an implicit global unit table while keeping
/// the registry an explicit object: every consumer also accepts a
/// caller-supplied instance.
pub fn default_registry() -> &'static AssetRegistry {
    &DEFAULT_REGISTRY
}

/// Append-only mapping from asset codes to dimension handles.
///
/// The first resolution of a code appends a dimension to the table and
/// records the handle; every later resolution returns an identical
/// handle. Entries are never removed for the life of the registry.
pub struct AssetRegistry {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    by_code: HashMap<AssetCode, AssetHandle>,
    /// Dimension table; `DimensionId` is an index into this vec.
    dimensions: Vec<AssetCode>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Resolve a code to its handle, creating the dimension on first use.
    ///
    /// Concurrent resolutions of the same unseen code agree on one
    /// handle: the insert path re-checks under the write lock. Known
    /// codes only take the shared read lock.
    pub fn resolve(&self, code: &str) -> Result<AssetHandle, AssetError> {
        validate_code(code)?;

        {
            let inner = self
                .inner
                .read()
                .map_err(|e| AssetError::RegistryPoisoned(e.to_string()))?;
            if let Some(handle) = inner.by_code.get(code) {
                return Ok(handle.clone());
            }
        }

        let mut inner = self
            .inner
            .write()
            .map_err(|e| AssetError::RegistryPoisoned(e.to_string()))?;

        // Another writer may have won the race between the two locks.
        if let Some(handle) = inner.by_code.get(code) {
            return Ok(handle.clone());
        }

        let interned: AssetCode = code.into();
        let dimension = DimensionId(inner.dimensions.len() as u32);
        inner.dimensions.push(interned.clone());

        let handle = AssetHandle::new(dimension, interned.clone());
        inner.by_code.insert(interned, handle.clone());
        debug!("registered asset '{}' as dimension {}", code, dimension.index());

        Ok(handle)
    }

    /// Whether the code has been resolved before.
    pub fn contains(&self, code: &str) -> bool {
        self.inner
            .read()
            .map(|inner| inner.by_code.contains_key(code))
            .unwrap_or(false)
    }

    /// Number of registered dimensions.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.dimensions.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AssetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_code(code: &str) -> Result<(), AssetError> {
    if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AssetError::InvalidAssetCode(code.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn test_resolve_is_idempotent() {
        let registry = AssetRegistry::new();
        let first = registry.resolve("USD").unwrap();
        let second = registry.resolve("USD").unwrap();
        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("USD"));
        assert!(!registry.contains("EUR"));
    }

    #[test]
    fn test_distinct_codes_get_distinct_dimensions() {
        let registry = AssetRegistry::new();
        let usd = registry.resolve("USD").unwrap();
        let eur = registry.resolve("EUR").unwrap();
        assert_ne!(usd.dimension(), eur.dimension());
        assert_ne!(usd, eur);
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        let registry = AssetRegistry::new();
        let upper = registry.resolve("Usd").unwrap();
        let lower = registry.resolve("usd").unwrap();
        assert_ne!(upper.dimension(), lower.dimension());
    }

    #[test]
    fn test_empty_code_is_rejected() {
        let registry = AssetRegistry::new();
        assert_eq!(
            registry.resolve(""),
            Err(AssetError::InvalidAssetCode(String::new()))
        );
    }

    #[test]
    fn test_malformed_code_is_rejected() {
        let registry = AssetRegistry::new();
        assert!(matches!(
            registry.resolve("US D"),
            Err(AssetError::InvalidAssetCode(_))
        ));
        assert!(matches!(
            registry.resolve("US/D"),
            Err(AssetError::InvalidAssetCode(_))
        ));
    }

    #[test]
    fn test_concurrent_first_resolution_yields_one_handle() {
        let registry = Arc::new(AssetRegistry::new());

        let threads: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.resolve("BRL").unwrap())
            })
            .collect();
        let handles: Vec<_> = threads.into_iter().map(|t| t.join().unwrap()).collect();

        assert!(handles.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_default_registry_is_shared() {
        let a = default_registry().resolve("CHF").unwrap();
        let b = default_registry().resolve("CHF").unwrap();
        assert_eq!(a, b);
    }
}
