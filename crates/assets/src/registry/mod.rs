//! Runtime asset registry.
//!
//! Replaces a compile-time unit generator with an explicit, append-only
//! table: the first resolution of a code creates a fresh dimension and a
//! reference unit scaled 1:1 to it, every later resolution returns the
//! identical handle.

mod handle;
mod registry;

pub use handle::{AssetCode, AssetHandle, DimensionId};
pub use registry::{default_registry, AssetRegistry};
