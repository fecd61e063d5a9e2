//! Input validation for smoothing configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for smoother configuration
//! parameters and for individual observations. It checks requirements such
//! as window bounds, finite values and aligned lengths.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not substitute missing values (see the missing-value policy).
//! * This module does not perform the smoothing itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::EpicurveError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for smoothing configuration and input data.
///
/// All methods return `Result<(), EpicurveError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Data Validation
    // ========================================================================

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), EpicurveError> {
        if !val.is_finite() {
            return Err(EpicurveError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the moving-average window.
    pub fn validate_window(window: usize) -> Result<(), EpicurveError> {
        if window == 0 {
            return Err(EpicurveError::InvalidWindow(window));
        }
        Ok(())
    }

    /// Validate the warm-up threshold for online smoothing.
    pub fn validate_min_points(min_points: usize, window: usize) -> Result<(), EpicurveError> {
        if min_points == 0 || min_points > window {
            return Err(EpicurveError::InvalidMinPoints {
                got: min_points,
                window,
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), EpicurveError> {
        if let Some(param) = duplicate_param {
            return Err(EpicurveError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
