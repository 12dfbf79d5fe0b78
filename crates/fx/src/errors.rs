//! Error types for market construction and conversion.

use cambio_assets::AssetError;
use thiserror::Error;

/// Errors that can occur while building markets or converting amounts.
///
/// Every variant is a local, recoverable condition returned to the
/// immediate caller; the engine never retries and never substitutes a
/// fallback rate.
#[derive(Error, Debug)]
pub enum FxError {
    /// An asset code failed registry resolution.
    #[error(transparent)]
    Asset(#[from] AssetError),

    /// A pair was requested with identical base and quote.
    #[error("degenerate assets pair: '{0}/{0}'")]
    DegenerateAssetsPair(String),

    /// A rate was constructed with a zero or negative value.
    #[error("non-positive rate for {base}/{quote}")]
    NonPositiveRate {
        /// Base asset of the offending pair
        base: String,
        /// Quote asset of the offending pair
        quote: String,
    },

    /// Two entries for the same pair arrived in one construction batch.
    #[error("duplicate rate for pair {base}/{quote}")]
    DuplicateRatePair {
        /// Base asset of the repeated key
        base: String,
        /// Quote asset of the repeated key
        quote: String,
    },

    /// The market holds no rate for the pair the mode requires.
    #[error("no rate quoted for {base}/{quote}")]
    MissingRatePair {
        /// Base asset of the missing pair
        base: String,
        /// Quote asset of the missing pair
        quote: String,
    },

    /// No asset bridges the source and target via two quoted legs.
    #[error("no intermediate asset links {origin} to {target}")]
    MissingIntermediateAsset {
        /// Asset the amount is denominated in
        origin: String,
        /// Asset the conversion targets
        target: String,
    },

    /// The amount's asset disagrees with the side of the rate it is
    /// applied to.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Asset the rate expects on this side
        expected: String,
        /// Asset the amount actually carries
        found: String,
    },

    /// A provider payload could not be deserialized.
    #[error("malformed provider payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}
