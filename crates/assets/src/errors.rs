//! Error types for asset code resolution.

use thiserror::Error;

/// Errors that can occur while resolving asset codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// The code is empty or contains characters outside ASCII
    /// letters and digits.
    #[error("invalid asset code: '{0}'")]
    InvalidAssetCode(String),

    /// A registry writer panicked and poisoned the lock.
    #[error("asset registry lock poisoned: {0}")]
    RegistryPoisoned(String),
}
