//! Output types and result structures for smoothing operations.
//!
//! ## Purpose
//!
//! This module defines the `SmoothingResult` struct which encapsulates all
//! outputs of a batch smoothing pass: the observations that were smoothed,
//! the smoothed values, and the optional residuals and diagnostics.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: Optional outputs use `Option`.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * All populated vectors have the same length as the input data.
//! * A pass-through result has `smoothed == observations`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::diagnostics::Diagnostics;

// ============================================================================
// Result Structure
// ============================================================================

/// Smoothed series together with the data it was computed from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothingResult<T> {
    /// Observations after missing-value substitution.
    pub observations: Vec<T>,

    /// Smoothed values, aligned with `observations`.
    pub smoothed: Vec<T>,

    /// Residuals (observation - smoothed), when requested.
    pub residuals: Option<Vec<T>>,

    /// Residual diagnostics, when requested.
    pub diagnostics: Option<Diagnostics<T>>,

    /// Window used for the pass.
    pub window: usize,

    /// Whether the series was shorter than the window and left unchanged.
    pub passed_through: bool,

    /// Number of leading points averaged over an expanding window.
    pub expanding_points: usize,
}

impl<T: Float> SmoothingResult<T> {
    /// Number of points in the series.
    pub fn len(&self) -> usize {
        self.smoothed.len()
    }

    /// Whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.smoothed.is_empty()
    }

    /// Consume the result and keep only the smoothed values.
    pub fn into_smoothed(self) -> Vec<T> {
        self.smoothed
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for SmoothingResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.len())?;
        writeln!(f, "  Window:      {}", self.window)?;
        if self.passed_through {
            writeln!(f, "  Smoothing:   Skipped (fewer points than window)")?;
        } else {
            writeln!(f, "  Expanding:   {} points", self.expanding_points)?;
        }
        writeln!(f)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f, "{}", diag)?;
        }

        writeln!(f, "Smoothed Data:")?;

        let has_resid = self.residuals.is_some();

        write!(f, "{:>8} {:>14} {:>14}", "Index", "Observed", "Smoothed")?;
        if has_resid {
            write!(f, " {:>14}", "Residual")?;
        }
        writeln!(f)?;

        let line_width = 38 + if has_resid { 15 } else { 0 };
        writeln!(f, "{:-<width$}", "", width = line_width)?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            write!(
                f,
                "{:>8} {:>14.4} {:>14.4}",
                idx, self.observations[idx], self.smoothed[idx]
            )?;
            if let Some(resid) = &self.residuals {
                write!(f, " {:>14.4}", resid[idx])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
