//! Execution engine for moving-average smoothing.
//!
//! ## Purpose
//!
//! This module runs a complete smoothing pass over one series: it resolves
//! missing observations according to the configured policy, applies the
//! trailing moving average and reports how the series was treated.
//!
//! ## Design notes
//!
//! * **Shared**: Batch and Streaming both finish through this executor, so
//!   they agree on every value they emit.
//!
//! ## Invariants
//!
//! * `smoothed.len() == observations.len() == input.len()`.
//! * When `passed_through` is set, `smoothed == observations`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::{debug, trace};

// Internal dependencies
use crate::algorithms::moving_average::{expanding_prefix_len, moving_average};
use crate::primitives::errors::EpicurveError;
use crate::primitives::missing::MissingValuePolicy;

// ============================================================================
// Configuration
// ============================================================================

/// Parameters of one smoothing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothingConfig {
    /// Number of trailing observations averaged.
    pub window: usize,

    /// Treatment of `NaN` observations.
    pub missing_values: MissingValuePolicy,
}

// ============================================================================
// Output
// ============================================================================

/// Raw output of a smoothing pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorOutput<T> {
    /// Observations after missing-value substitution.
    pub observations: Vec<T>,

    /// Smoothed values, aligned with `observations`.
    pub smoothed: Vec<T>,

    /// Whether the series was shorter than the window and left unchanged.
    pub passed_through: bool,

    /// Number of leading points averaged over an expanding window.
    pub expanding_points: usize,
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for moving-average smoothing.
pub struct SmoothingExecutor;

impl SmoothingExecutor {
    /// Smooth `data` with the given configuration.
    pub fn run<T: Float>(
        data: &[T],
        config: &SmoothingConfig,
    ) -> Result<ExecutorOutput<T>, EpicurveError> {
        let observations = config.missing_values.resolve_series(data)?;
        let n = observations.len();
        let passed_through = n < config.window;

        if passed_through {
            trace!(
                len = n,
                window = config.window,
                "series shorter than window, passing through"
            );
        } else {
            debug!(len = n, window = config.window, "smoothing series");
        }

        let smoothed = moving_average(&observations, config.window);

        Ok(ExecutorOutput {
            observations: observations.into_owned(),
            smoothed,
            passed_through,
            expanding_points: expanding_prefix_len(n, config.window),
        })
    }
}
