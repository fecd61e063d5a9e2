//! Online adapter for incremental moving-average smoothing.
//!
//! ## Purpose
//!
//! This module provides the online (incremental) execution adapter. It keeps
//! the most recent observations and produces the smoothed value of each new
//! observation as it arrives, e.g. when a daily report lands.
//!
//! ## Design notes
//!
//! * **Storage**: Uses a fixed-size circular buffer (VecDeque) for the window.
//! * **Eviction**: Automatically evicts the oldest observation when full.
//! * **No look-ahead**: The pass-through rule for short series needs the final
//!   length, which an online smoother never knows. Before the window fills it
//!   emits expanding means, which is what the batch adapter produces for any
//!   series that eventually reaches the window.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Sliding Window**: Maintains recent history up to `window`.
//! * **Incremental Processing**: Resolves, adds, evicts, and averages.
//! * **Initialization Phase**: Returns `None` until `min_points` are accumulated.
//!
//! ## Invariants
//!
//! * Window size never exceeds the configured window.
//! * All values in the window are finite.
//! * Window maintains insertion order (oldest to newest).
//!
//! ## Non-goals
//!
//! * This adapter does not compute diagnostic statistics.
//! * This adapter does not handle out-of-order observations.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;
#[cfg(feature = "std")]
use std::collections::VecDeque;

// External dependencies
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::moving_average::DEFAULT_WINDOW;
use crate::engine::validator::Validator;
use crate::math::mean::count_as;
use crate::primitives::errors::EpicurveError;
use crate::primitives::missing::MissingValuePolicy;

// ============================================================================
// Online Smoother Builder
// ============================================================================

/// Builder for online smoother.
#[derive(Debug, Clone)]
pub struct OnlineSmootherBuilder {
    /// Number of trailing observations averaged
    pub window: usize,

    /// Minimum observations before smoothed values are emitted
    pub min_points: usize,

    /// Treatment of missing observations
    pub missing_values: MissingValuePolicy,

    /// Whether to return residuals
    pub compute_residuals: bool,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<EpicurveError>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl Default for OnlineSmootherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OnlineSmootherBuilder {
    /// Create a new online builder with default parameters.
    fn new() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            min_points: 1,
            missing_values: MissingValuePolicy::default(),
            compute_residuals: false,
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
    // Online-Specific Setters
    // ========================================================================

    /// Set minimum observations before smoothing starts.
    pub fn min_points(mut self, min: usize) -> Self {
        self.min_points = min;
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the online smoother.
    pub fn build<T: Float>(self) -> Result<OnlineSmoother<T>, EpicurveError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_window(self.window)?;
        Validator::validate_min_points(self.min_points, self.window)?;

        debug!(
            window = self.window,
            min_points = self.min_points,
            "built online smoother"
        );

        let capacity = self.window;
        Ok(OnlineSmoother {
            config: self,
            window: VecDeque::with_capacity(capacity),
            seen: 0,
        })
    }
}

// ============================================================================
// Online Output
// ============================================================================

/// Result of a single online update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnlineOutput<T> {
    /// Smoothed value for the latest observation
    pub smoothed: T,

    /// The observation after missing-value substitution
    pub observed: T,

    /// Residual (observed - smoothed), when requested
    pub residual: Option<T>,

    /// Number of observations the mean was taken over
    pub window_len: usize,
}

impl<T> OnlineOutput<T> {
    /// Whether the mean was taken over fewer observations than the window.
    pub fn is_expanding(&self, window: usize) -> bool {
        self.window_len < window
    }
}

// ============================================================================
// Online Smoother
// ============================================================================

/// Online moving-average smoother for observations arriving one at a time.
#[derive(Debug, Clone)]
pub struct OnlineSmoother<T> {
    config: OnlineSmootherBuilder,
    window: VecDeque<T>,
    seen: usize,
}

impl<T: Float> OnlineSmoother<T> {
    /// Add a new observation and get its smoothed value.
    pub fn add_observation(&mut self, value: T) -> Result<Option<OnlineOutput<T>>, EpicurveError> {
        let last = self.window.back().copied();
        let observed = self.config.missing_values.resolve(value, last, self.seen)?;

        self.window.push_back(observed);
        if self.window.len() > self.config.window {
            self.window.pop_front();
        }
        self.seen += 1;

        if self.seen < self.config.min_points {
            return Ok(None);
        }

        let window_len = self.window.len();
        let sum = self.window.iter().fold(T::zero(), |acc, &v| acc + v);
        let smoothed = sum / count_as(window_len);

        Ok(Some(OnlineOutput {
            smoothed,
            observed,
            residual: self.config.compute_residuals.then(|| observed - smoothed),
            window_len,
        }))
    }

    /// Configured window.
    pub fn window(&self) -> usize {
        self.config.window
    }

    /// Number of observations currently held.
    pub fn window_size(&self) -> usize {
        self.window.len()
    }

    /// Number of observations consumed since the last reset.
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Clear the window.
    pub fn reset(&mut self) {
        self.window.clear();
        self.seen = 0;
    }
}
