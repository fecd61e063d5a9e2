//! Residual diagnostics for a smoothed series.
//!
//! ## Purpose
//!
//! This module measures how far the smoothed curve departs from the raw
//! observations, which helps choose a window: a larger window lowers noise
//! but raises the residual error around sharp turns.
//!
//! ## Key concepts
//!
//! * **Residual**: `raw - smoothed` at each point.
//! * **RMSE / MAE**: Root mean squared and mean absolute residual.
//! * **Max deviation**: Largest absolute residual and where it occurs.
//!
//! ## Invariants
//!
//! * All metrics are non-negative.
//! * A pass-through series has every metric equal to zero.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::mean::count_as;

/// Residual metrics comparing raw and smoothed values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics<T> {
    /// Root Mean Squared Error (RMSE).
    pub rmse: T,

    /// Mean Absolute Error (MAE).
    pub mae: T,

    /// Largest absolute residual.
    pub max_deviation: T,

    /// Index of the largest absolute residual (first on ties).
    pub max_deviation_index: usize,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics from aligned raw and smoothed series.
    pub fn compute(raw: &[T], smoothed: &[T]) -> Self {
        debug_assert_eq!(raw.len(), smoothed.len());

        let mut sum_sq = T::zero();
        let mut sum_abs = T::zero();
        let mut max_deviation = T::zero();
        let mut max_deviation_index = 0;

        for (i, (&r, &s)) in raw.iter().zip(smoothed).enumerate() {
            let abs = (r - s).abs();
            sum_sq = sum_sq + abs * abs;
            sum_abs = sum_abs + abs;
            if abs > max_deviation {
                max_deviation = abs;
                max_deviation_index = i;
            }
        }

        let n = raw.len().min(smoothed.len());
        if n == 0 {
            return Self {
                rmse: T::zero(),
                mae: T::zero(),
                max_deviation: T::zero(),
                max_deviation_index: 0,
            };
        }

        let n_t: T = count_as(n);
        Self {
            rmse: (sum_sq / n_t).sqrt(),
            mae: sum_abs / n_t,
            max_deviation,
            max_deviation_index,
        }
    }
}

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Smoothing Diagnostics:")?;
        writeln!(f, "  RMSE:          {:.6}", self.rmse)?;
        writeln!(f, "  MAE:           {:.6}", self.mae)?;
        writeln!(
            f,
            "  Max deviation: {:.6} (at {})",
            self.max_deviation, self.max_deviation_index
        )?;
        Ok(())
    }
}
