//! Error types for epicurve operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while smoothing,
//! normalizing or aggregating epidemic time series: bad parameters, bad
//! numeric values and inconsistent inputs.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (window size, lengths, dates).
//! * **Deferred**: Builder mistakes are recorded and surfaced at `build()` time.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Single kind**: Every variant is an invalid-argument failure; there is
//!   no transient failure mode, so nothing here is retryable.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use chrono::NaiveDate;
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for epicurve operations.
#[derive(Debug, Clone, PartialEq)]
pub enum EpicurveError {
    /// Input series is empty where at least one observation is required.
    EmptyInput,

    /// Generic invalid argument with a descriptive message.
    InvalidArgument(String),

    /// Two series that must be aligned have different lengths.
    MismatchedInputs {
        /// Length of the first series.
        left: usize,
        /// Length of the second series.
        right: usize,
    },

    /// Input contains NaN or infinite values that the active policy rejects.
    InvalidNumericValue(String),

    /// Moving-average window must be a positive number of observations.
    InvalidWindow(usize),

    /// Online warm-up threshold must be between 1 and the window size.
    InvalidMinPoints {
        /// The min_points provided.
        got: usize,
        /// The window size.
        window: usize,
    },

    /// Aggregation range starts after it ends.
    InvalidDateRange {
        /// First day of the range.
        start: NaiveDate,
        /// Last day of the range.
        end: NaiveDate,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl EpicurveError {
    /// Whether the failure was caused by an invalid argument.
    ///
    /// Always `true` today; callers that only care about the error kind can
    /// match on this instead of on individual variants.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::EmptyInput
            | Self::InvalidArgument(_)
            | Self::MismatchedInputs { .. }
            | Self::InvalidNumericValue(_)
            | Self::InvalidWindow(_)
            | Self::InvalidMinPoints { .. }
            | Self::InvalidDateRange { .. }
            | Self::DuplicateParameter { .. } => true,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for EpicurveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input series is empty"),
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
            Self::MismatchedInputs { left, right } => {
                write!(f, "Length mismatch: {left} values vs {right} values")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidWindow(window) => {
                write!(f, "Invalid window: {window} (must be at least 1)")
            }
            Self::InvalidMinPoints { got, window } => {
                write!(
                    f,
                    "Invalid min_points: {got} (must be between 1 and window {window})"
                )
            }
            Self::InvalidDateRange { start, end } => {
                write!(f, "Invalid date range: {start} is after {end}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for EpicurveError {}
