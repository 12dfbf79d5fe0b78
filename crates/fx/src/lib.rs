//! Cambio FX Crate
//!
//! Exchange-market model and multi-mode conversion engine for
//! dimensionally-typed asset amounts.
//!
//! # Overview
//!
//! The crate supports:
//! - Markets built from a single fact, a sequence, a keyed collection,
//!   or an anchored provider payload
//! - Four conversion modes: direct, inverse, and both composed through
//!   one intermediate asset
//! - Any numeric representation satisfying
//!   [`MonetaryNumber`] (floats, decimals, rationals)
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  raw rate data   | --> | market builders  |  (tuples, maps, payloads)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  ExchangeMarket  |  (immutable pair -> rate facts)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    Converter     |  (mode-specific lookups)
//!                          +------------------+     consults AssetRegistry
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |     Quantity     |  (amount in the target asset)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`AssetsPair`] - ordered (base, quote) exchange relationship
//! - [`Rate`] - positive quote-per-base factor with resolved handles
//! - [`ExchangeMarket`] - immutable collection of pair -> rate facts
//! - [`ConversionMode`] - closed enumeration of lookup strategies
//! - [`Converter`] / [`convert`] - the engine itself
//! - [`AnchoredRates`] - logical payload contract for rate providers

pub mod engine;
pub mod errors;
pub mod models;
pub mod provider;

pub use engine::{convert, ConversionMode, Converter};
pub use errors::FxError;
pub use models::{AssetsPair, ExchangeMarket, Rate};
pub use provider::AnchoredRates;

// Re-export the asset identity types so most callers only need one crate.
pub use cambio_assets::{
    default_registry, AssetCode, AssetError, AssetHandle, AssetRegistry, DimensionId,
    MonetaryNumber, Quantity,
};
