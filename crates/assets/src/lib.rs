//! Cambio Assets Crate
//!
//! Asset identity for the conversion core: every asset code ("USD",
//! "EUR", "XAU", ...) resolves to its own dimension, so amounts in
//! different assets are never commensurable by accident.
//!
//! # Overview
//!
//! - [`AssetRegistry`] - append-only, insert-or-get mapping from asset
//!   codes to dimension handles. A process-default instance is available
//!   via [`default_registry`]; callers that want isolation construct
//!   their own.
//! - [`AssetHandle`] - the resolved identity of an asset: a
//!   [`DimensionId`] plus the code acting as the reference unit.
//! - [`Quantity`] - an amount inseparable from its asset, generic over
//!   the numeric representation.
//! - [`MonetaryNumber`] - the numeric contract (field arithmetic,
//!   ordering, positivity test) satisfied by `f64`,
//!   `rust_decimal::Decimal`, rationals, and similar types.

pub mod errors;
pub mod numeric;
pub mod quantity;
pub mod registry;

pub use errors::AssetError;
pub use numeric::MonetaryNumber;
pub use quantity::Quantity;
pub use registry::{default_registry, AssetCode, AssetHandle, AssetRegistry, DimensionId};
