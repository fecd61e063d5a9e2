//! Arithmetic means over observation slices.
//!
//! Sums are accumulated left to right over the exact window, so every
//! smoothed value equals the textbook mean of its window rather than the
//! result of a running sum that drifts over long series.

// External dependencies
use num_traits::Float;

// Convert an observation count into the float type.
#[inline]
pub fn count_as<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::max_value)
}

// Arithmetic mean of `values`; zero for an empty slice.
#[inline]
pub fn mean<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    sum / count_as(values.len())
}

// Sum of all values.
#[inline]
pub fn total<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &v| acc + v)
}
