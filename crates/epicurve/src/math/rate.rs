//! Rate scales for per-capita and proportional figures.
//!
//! ## Purpose
//!
//! Raw counts are not comparable across countries of different sizes. This
//! module defines the scale a count is expressed in once divided by its
//! reference figure (population or another count).
//!
//! ## Invariants
//!
//! * Every scale factor is a positive power of ten.
//! * A missing or non-positive reference yields a rate of zero, never NaN or infinity.

// External dependencies
use num_traits::Float;

/// Inhabitants per million, the default incidence unit.
pub const PER_MILLION: f64 = 1_000_000.0;

/// Scale a ratio is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RateScale {
    /// Per million inhabitants (default).
    #[default]
    PerMillion,

    /// Per hundred thousand inhabitants.
    PerHundredThousand,

    /// Percentage of the reference figure.
    Percent,
}

impl RateScale {
    /// Multiplier applied to `count / reference`.
    #[inline]
    pub fn factor<T: Float>(self) -> T {
        let factor = match self {
            Self::PerMillion => PER_MILLION,
            Self::PerHundredThousand => 100_000.0,
            Self::Percent => 100.0,
        };
        T::from(factor).unwrap_or_else(T::one)
    }

    /// Express `count` relative to `reference` in this scale.
    ///
    /// Returns zero when the reference is not strictly positive.
    #[inline]
    pub fn apply<T: Float>(self, count: T, reference: T) -> T {
        if reference > T::zero() {
            (count / reference) * self.factor()
        } else {
            T::zero()
        }
    }
}
