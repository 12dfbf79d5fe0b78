/// Strategy for locating the rate information that links the source
/// asset to the target.
///
/// The enumeration is closed and matched exhaustively, so an invalid
/// mode is unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ConversionMode {
    /// Multiply by the rate quoted for `source/target`.
    #[default]
    Direct,

    /// Divide by the rate quoted the other way round, `target/source`.
    ///
    /// Distinct from [`Direct`](Self::Direct): markets may quote the two
    /// directions of a pair asymmetrically, and this mode must use the
    /// entry keyed the other way rather than assume reciprocity.
    Inverse,

    /// Multiply through a bridging asset `m` with `source/m` and
    /// `m/target` both quoted.
    DirectViaIntermediate,

    /// Divide through a bridging asset `m` with `target/m` and
    /// `m/source` both quoted.
    InverseViaIntermediate,
}
