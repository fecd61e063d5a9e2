//! High-level API for epidemic curve smoothing and normalization.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: the two
//! one-call helpers used by dashboard views ([`calculate_moving_average`]
//! and [`normalize_by_population`]) and a fluent builder for configuring a
//! smoother and choosing an execution adapter (Batch, Streaming, or Online).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Series are generic over `Float` types; populations are typed.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SmootherBuilder`] via `Smoother::new()`.
//! 2. Chain configuration methods (`.window()`, `.missing_values()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};

// External dependencies
use num_traits::Float;
use tracing::trace;

// Internal dependencies
use crate::adapters::batch::BatchSmootherBuilder;
use crate::adapters::online::OnlineSmootherBuilder;
use crate::adapters::streaming::StreamingSmootherBuilder;
use crate::algorithms::normalization::{normalize, normalize_all};
use crate::engine::executor::{SmoothingConfig, SmoothingExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::adapters::batch::BatchSmoother;
pub use crate::adapters::online::{OnlineOutput, OnlineSmoother};
pub use crate::adapters::streaming::{ChunkOutput, StreamingSmoother};
pub use crate::algorithms::aggregation::{MonthlyBucket, daily_increments, group_by_month};
pub use crate::algorithms::moving_average::DEFAULT_WINDOW;
pub use crate::engine::output::SmoothingResult;
pub use crate::evaluation::curve::{CurveAnalysis, case_fatality_rate};
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::evaluation::global::{CountryTotals, GlobalStats};
pub use crate::math::rate::RateScale;
pub use crate::primitives::errors::EpicurveError;
pub use crate::primitives::missing::MissingValuePolicy;
pub use crate::primitives::records::{
    Country, CovidData, Population, VaccineApproval, sort_newest_first,
};

// ============================================================================
// One-Call Helpers
// ============================================================================

/// Smooth `data` with a trailing moving average over `window` observations.
///
/// The output always has the length of `data`. Series shorter than the
/// window are returned unchanged; otherwise the first `window` points are
/// averaged over everything seen so far and later points over the trailing
/// `window` observations.
///
/// # Errors
///
/// * [`EpicurveError::InvalidWindow`] when `window == 0`.
/// * [`EpicurveError::InvalidNumericValue`] when `data` contains NaN or infinity.
pub fn calculate_moving_average<T: Float>(data: &[T], window: usize) -> Result<Vec<T>, EpicurveError> {
    Validator::validate_window(window)?;
    let config = SmoothingConfig {
        window,
        missing_values: MissingValuePolicy::Reject,
    };
    Ok(SmoothingExecutor::run(data, &config)?.smoothed)
}

/// [`calculate_moving_average`] with the default one-week window.
pub fn calculate_moving_average_default<T: Float>(data: &[T]) -> Result<Vec<T>, EpicurveError> {
    calculate_moving_average(data, DEFAULT_WINDOW)
}

/// Express `count` per million inhabitants of `population`.
///
/// An unknown population yields `0` instead of an error.
///
/// # Errors
///
/// * [`EpicurveError::InvalidNumericValue`] when `count` is NaN or infinite.
pub fn normalize_by_population<T: Float>(
    count: T,
    population: Option<Population>,
) -> Result<T, EpicurveError> {
    normalize_with_scale(count, population, RateScale::PerMillion)
}

/// Express `count` relative to `population` in the given scale.
pub fn normalize_with_scale<T: Float>(
    count: T,
    population: Option<Population>,
    scale: RateScale,
) -> Result<T, EpicurveError> {
    Validator::validate_scalar(count, "count")?;
    if population.is_none() {
        trace!("no population available, rate defaults to zero");
    }
    Ok(normalize(count, population, scale))
}

/// Normalize a whole series against one population, keeping its length.
pub fn normalize_series<T: Float>(
    counts: &[T],
    population: Option<Population>,
    scale: RateScale,
) -> Result<Vec<T>, EpicurveError> {
    if let Some((i, &c)) = counts.iter().enumerate().find(|(_, c)| !c.is_finite()) {
        return Err(EpicurveError::InvalidNumericValue(format!(
            "counts[{}]={}",
            i,
            c.to_f64().unwrap_or(f64::NAN)
        )));
    }
    Ok(normalize_all(counts, population, scale))
}

// ============================================================================
// Builder
// ============================================================================

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Online, Streaming};
}

/// Fluent builder for configuring a smoother and its execution mode.
#[derive(Debug, Clone, Default)]
pub struct SmootherBuilder {
    /// Number of trailing observations averaged (default 7).
    pub window: Option<usize>,

    /// Treatment of missing observations (default: reject).
    pub missing_values: Option<MissingValuePolicy>,

    /// Minimum observations before values are emitted (Online only).
    pub min_points: Option<usize>,

    /// Return residuals (Batch and Online).
    pub compute_residuals: Option<bool>,

    /// Return residual diagnostics (Batch only).
    pub return_diagnostics: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl SmootherBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: SmootherAdapter,
    {
        A::convert(self)
    }

    /// Set the number of trailing observations averaged.
    pub fn window(mut self, window: usize) -> Self {
        if self.window.is_some() {
            self.duplicate_param = Some("window");
        }
        self.window = Some(window);
        self
    }

    /// Set the missing-value policy.
    pub fn missing_values(mut self, policy: MissingValuePolicy) -> Self {
        if self.missing_values.is_some() {
            self.duplicate_param = Some("missing_values");
        }
        self.missing_values = Some(policy);
        self
    }

    /// Set the minimum observations before smoothing starts (Online only).
    pub fn min_points(mut self, points: usize) -> Self {
        if self.min_points.is_some() {
            self.duplicate_param = Some("min_points");
        }
        self.min_points = Some(points);
        self
    }

    /// Include residuals in output.
    pub fn return_residuals(mut self) -> Self {
        self.compute_residuals = Some(true);
        self
    }

    /// Include residual diagnostics in output.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait SmootherAdapter {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`SmootherBuilder`] into a specialized execution builder.
    fn convert(builder: SmootherBuilder) -> Self::Output;
}

/// Marker for in-memory batch processing.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl SmootherAdapter for Batch {
    type Output = BatchSmootherBuilder;

    fn convert(builder: SmootherBuilder) -> Self::Output {
        let mut result = BatchSmootherBuilder::default();

        if let Some(window) = builder.window {
            result.window = window;
        }
        if let Some(mv) = builder.missing_values {
            result.missing_values = mv;
        }
        if let Some(cr) = builder.compute_residuals {
            result.compute_residuals = cr;
        }
        if let Some(rd) = builder.return_diagnostics {
            result.return_diagnostics = rd;
        }
        if builder.min_points.is_some() {
            result.deferred_error = Some(unsupported("min_points", "Online"));
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for chunked streaming processing.
#[derive(Debug, Clone, Copy)]
pub struct Streaming;

impl SmootherAdapter for Streaming {
    type Output = StreamingSmootherBuilder;

    fn convert(builder: SmootherBuilder) -> Self::Output {
        let mut result = StreamingSmootherBuilder::default();

        if let Some(window) = builder.window {
            result.window = window;
        }
        if let Some(mv) = builder.missing_values {
            result.missing_values = mv;
        }
        if builder.min_points.is_some() {
            result.deferred_error = Some(unsupported("min_points", "Online"));
        } else if builder.compute_residuals.is_some() {
            result.deferred_error = Some(unsupported("return_residuals", "Batch and Online"));
        } else if builder.return_diagnostics.is_some() {
            result.deferred_error = Some(unsupported("return_diagnostics", "Batch"));
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for incremental online processing.
#[derive(Debug, Clone, Copy)]
pub struct Online;

impl SmootherAdapter for Online {
    type Output = OnlineSmootherBuilder;

    fn convert(builder: SmootherBuilder) -> Self::Output {
        let mut result = OnlineSmootherBuilder::default();

        if let Some(window) = builder.window {
            result.window = window;
        }
        if let Some(min_points) = builder.min_points {
            result.min_points = min_points;
        }
        if let Some(mv) = builder.missing_values {
            result.missing_values = mv;
        }
        if let Some(cr) = builder.compute_residuals {
            result.compute_residuals = cr;
        }
        if builder.return_diagnostics.is_some() {
            result.deferred_error = Some(unsupported("return_diagnostics", "Batch"));
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

// Error for an option the selected adapter cannot honour.
fn unsupported(option: &str, supported_by: &str) -> EpicurveError {
    EpicurveError::InvalidArgument(format!("{option} is only supported by {supported_by}"))
}
