//! Numeric contract for amounts and rates.

use num_traits::Num;

/// Operations the conversion core needs from a numeric representation:
/// add, multiply, divide, compare, and a strict positivity test.
///
/// Blanket-implemented for every type satisfying
/// `num_traits::Num + PartialOrd + Clone`, which covers `f64`,
/// `rust_decimal::Decimal`, `num_rational::BigRational`, and other
/// ordered-field-like types without any glue code.
pub trait MonetaryNumber: Num + PartialOrd + Clone {
    /// Whether the value is strictly greater than zero.
    fn is_positive_value(&self) -> bool {
        self > &Self::zero()
    }
}

impl<T> MonetaryNumber for T where T: Num + PartialOrd + Clone {}
