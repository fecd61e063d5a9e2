//! Normalization of raw counts by population.
//!
//! ## Purpose
//!
//! This module turns a raw count into a per-capita rate so that countries of
//! very different sizes can be compared on one chart.
//!
//! ## Design notes
//!
//! * **Unknown population**: Yields a rate of zero, never an error or NaN.
//! * **Typed absence**: Population arrives as `Option<Population>`; the
//!   "zero or negative" cases were already folded into `None` upstream.
//! * **Linearity**: `normalize(k * c, p) == k * normalize(c, p)` for any `p`.
//!
//! ## Non-goals
//!
//! * This module does not validate that counts are finite.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::rate::RateScale;
use crate::primitives::records::Population;

/// Express `count` per `scale` inhabitants of `population`.
#[inline]
pub fn normalize<T: Float>(count: T, population: Option<Population>, scale: RateScale) -> T {
    match population {
        Some(p) => scale.apply(count, p.to_float()),
        None => T::zero(),
    }
}

/// Normalize every value of a series against one population.
pub fn normalize_all<T: Float>(
    counts: &[T],
    population: Option<Population>,
    scale: RateScale,
) -> Vec<T> {
    counts
        .iter()
        .map(|&c| normalize(c, population, scale))
        .collect()
}
