//! Batch adapter for moving-average smoothing.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter. It smooths a complete
//! series held in memory in a single pass, which is what a chart needs when
//! it renders the full history of one country.
//!
//! ## Design notes
//!
//! * **Processing**: Processes the entire series in a single pass.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Reusable**: A built smoother can be applied to any number of series.
//! * **Generics**: `fit` is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Batch Processing**: Validates, resolves missing values, smooths, evaluates.
//! * **Builder Pattern**: Fluent API for configuration with sensible defaults.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * Series shorter than the window are returned unchanged.
//! * Output order matches input order.
//!
//! ## Non-goals
//!
//! * This adapter does not handle chunked input (use streaming adapter).
//! * This adapter does not handle incremental updates (use online adapter).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::moving_average::DEFAULT_WINDOW;
use crate::engine::executor::{SmoothingConfig, SmoothingExecutor};
use crate::engine::output::SmoothingResult;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::primitives::errors::EpicurveError;
use crate::primitives::missing::MissingValuePolicy;

// ============================================================================
// Batch Smoother Builder
// ============================================================================

/// Builder for batch smoother.
#[derive(Debug, Clone)]
pub struct BatchSmootherBuilder {
    /// Number of trailing observations averaged
    pub window: usize,

    /// Treatment of missing observations
    pub missing_values: MissingValuePolicy,

    /// Whether to return residuals
    pub compute_residuals: bool,

    /// Whether to compute diagnostic statistics
    pub return_diagnostics: bool,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<EpicurveError>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl Default for BatchSmootherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchSmootherBuilder {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            missing_values: MissingValuePolicy::default(),
            compute_residuals: false,
            return_diagnostics: false,
            deferred_error: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the number of trailing observations averaged.
    pub fn window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Set the missing-value policy.
    pub fn missing_values(mut self, policy: MissingValuePolicy) -> Self {
        self.missing_values = policy;
        self
    }

    /// Enable returning residuals in the output.
    pub fn compute_residuals(mut self, enabled: bool) -> Self {
        self.compute_residuals = enabled;
        self
    }

    // ========================================================================
    // Batch-Specific Setters
    // ========================================================================

    /// Enable returning diagnostics in the result.
    pub fn return_diagnostics(mut self, enabled: bool) -> Self {
        self.return_diagnostics = enabled;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch smoother.
    pub fn build(self) -> Result<BatchSmoother, EpicurveError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_window(self.window)?;

        debug!(
            window = self.window,
            missing_values = ?self.missing_values,
            "built batch smoother"
        );

        Ok(BatchSmoother { config: self })
    }
}

// ============================================================================
// Batch Smoother
// ============================================================================

/// Batch moving-average smoother.
#[derive(Debug, Clone)]
pub struct BatchSmoother {
    config: BatchSmootherBuilder,
}

impl BatchSmoother {
    /// Window this smoother averages over.
    pub fn window(&self) -> usize {
        self.config.window
    }

    /// Smooth the provided series.
    pub fn fit<T: Float>(&self, data: &[T]) -> Result<SmoothingResult<T>, EpicurveError> {
        let config = SmoothingConfig {
            window: self.config.window,
            missing_values: self.config.missing_values,
        };

        let output = SmoothingExecutor::run(data, &config)?;

        let residuals = if self.config.compute_residuals {
            Some(
                output
                    .observations
                    .iter()
                    .zip(output.smoothed.iter())
                    .map(|(&obs, &smoothed)| obs - smoothed)
                    .collect::<Vec<T>>(),
            )
        } else {
            None
        };

        let diagnostics = if self.config.return_diagnostics {
            Some(Diagnostics::compute(&output.observations, &output.smoothed))
        } else {
            None
        };

        Ok(SmoothingResult {
            observations: output.observations,
            smoothed: output.smoothed,
            residuals,
            diagnostics,
            window: self.config.window,
            passed_through: output.passed_through,
            expanding_points: output.expanding_points,
        })
    }
}
