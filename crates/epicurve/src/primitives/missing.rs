//! Missing-value handling for observation sequences.
//!
//! ## Purpose
//!
//! Reported epidemic series regularly contain gaps (days without a report).
//! A gap arrives as `NaN`; this module decides what the smoother sees in its
//! place.
//!
//! ## Invariants
//!
//! * Infinite values are never substituted; they are always rejected.
//! * The resolved series has exactly the length of the input.
//! * When nothing needs substituting, the input is borrowed, not copied.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{borrow::Cow, format, vec::Vec};
#[cfg(feature = "std")]
use std::borrow::Cow;

// External dependencies
use num_traits::Float;
use tracing::warn;

// Internal dependencies
use crate::primitives::errors::EpicurveError;

// ============================================================================
// Missing Value Policy
// ============================================================================

/// Policy applied to missing (`NaN`) observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MissingValuePolicy {
    /// Fail with [`EpicurveError::InvalidNumericValue`] (default).
    #[default]
    Reject,

    /// Replace the gap with zero (no cases reported that day).
    TreatAsZero,

    /// Repeat the last observed value; zero before the first observation.
    CarryForward,
}

impl MissingValuePolicy {
    /// Resolve a single observation given the last accepted value.
    #[inline]
    pub fn resolve<T: Float>(self, value: T, last: Option<T>, idx: usize) -> Result<T, EpicurveError> {
        if value.is_finite() {
            return Ok(value);
        }
        if value.is_infinite() {
            return Err(non_finite(value, idx));
        }

        match self {
            Self::Reject => Err(non_finite(value, idx)),
            Self::TreatAsZero => Ok(T::zero()),
            Self::CarryForward => Ok(last.unwrap_or_else(T::zero)),
        }
    }

    /// Resolve a whole series, borrowing it when no gap is present.
    pub fn resolve_series<T: Float>(self, data: &[T]) -> Result<Cow<'_, [T]>, EpicurveError> {
        let Some(first_bad) = data.iter().position(|v| !v.is_finite()) else {
            return Ok(Cow::Borrowed(data));
        };

        let mut resolved: Vec<T> = Vec::with_capacity(data.len());
        resolved.extend_from_slice(&data[..first_bad]);

        let mut substituted = 0usize;
        for (idx, &value) in data.iter().enumerate().skip(first_bad) {
            let last = resolved.last().copied();
            let accepted = self.resolve(value, last, idx)?;
            if !value.is_finite() {
                substituted += 1;
            }
            resolved.push(accepted);
        }

        warn!(
            substituted,
            len = data.len(),
            policy = ?self,
            "substituted missing observations"
        );

        Ok(Cow::Owned(resolved))
    }
}

fn non_finite<T: Float>(value: T, idx: usize) -> EpicurveError {
    EpicurveError::InvalidNumericValue(format!(
        "data[{}]={}",
        idx,
        value.to_f64().unwrap_or(f64::NAN)
    ))
}
