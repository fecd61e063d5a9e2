#![cfg(feature = "dev")]
//! Tests for internal building blocks.
//!
//! These tests reach into the `internals` module and cover the pieces the
//! public API composes:
//! - Trailing windows
//! - Missing-value resolution
//! - Parameter validation
//! - Rate scales and the smoothing executor
//!
//! ## Test Organization
//!
//! 1. **Trailing Window** - Bounds, slicing, expanding prefix
//! 2. **Missing Values** - Scalar and series resolution
//! 3. **Validator** - Window, min_points, finiteness, duplicates
//! 4. **Math** - Means and rate scales
//! 5. **Executor** - Flags reported by a smoothing pass

use std::borrow::Cow;

use approx::assert_relative_eq;

use epicurve::internals::algorithms::moving_average::{expanding_prefix_len, smooth_point};
use epicurve::internals::engine::executor::{SmoothingConfig, SmoothingExecutor};
use epicurve::internals::engine::validator::Validator;
use epicurve::internals::math::mean::{mean, total};
use epicurve::internals::math::rate::{PER_MILLION, RateScale};
use epicurve::internals::primitives::errors::EpicurveError;
use epicurve::internals::primitives::missing::MissingValuePolicy;
use epicurve::internals::primitives::window::TrailingWindow;

// ============================================================================
// Trailing Window Tests
// ============================================================================

/// Test windows during warm-up and after.
#[test]
fn test_trailing_window_bounds() {
    let early = TrailingWindow::ending_at(2, 7);
    assert_eq!(early, TrailingWindow { start: 0, end: 2 });
    assert_eq!(early.len(), 3);

    let full = TrailingWindow::ending_at(10, 7);
    assert_eq!(full, TrailingWindow { start: 4, end: 10 });
    assert_eq!(full.len(), 7);
}

/// Test slicing observations.
#[test]
fn test_trailing_window_slice() {
    let data = [1.0, 2.0, 3.0, 4.0, 5.0];

    assert_eq!(TrailingWindow::ending_at(4, 2).slice(&data), &[4.0, 5.0]);
    assert_relative_eq!(smooth_point(&data, 4, 2), 4.5);
}

/// Test the length of the expanding prefix.
#[test]
fn test_expanding_prefix_len() {
    assert_eq!(expanding_prefix_len(3, 7), 0);
    assert_eq!(expanding_prefix_len(7, 7), 7);
    assert_eq!(expanding_prefix_len(100, 7), 7);
}

// ============================================================================
// Missing Value Tests
// ============================================================================

/// Test scalar resolution under each policy.
#[test]
fn test_missing_resolve_scalar() {
    assert_eq!(MissingValuePolicy::Reject.resolve(2.0, None, 0), Ok(2.0));
    assert!(MissingValuePolicy::Reject.resolve(f64::NAN, None, 0).is_err());
    assert_eq!(MissingValuePolicy::TreatAsZero.resolve(f64::NAN, Some(5.0), 3), Ok(0.0));
    assert_eq!(MissingValuePolicy::CarryForward.resolve(f64::NAN, Some(5.0), 3), Ok(5.0));
    assert_eq!(MissingValuePolicy::CarryForward.resolve(f64::NAN, None, 0), Ok(0.0));
    assert!(
        MissingValuePolicy::CarryForward
            .resolve(f64::NEG_INFINITY, Some(5.0), 1)
            .is_err()
    );
}

/// Test that clean series are borrowed.
#[test]
fn test_missing_resolve_series_borrows_clean_input() {
    let data = [1.0, 2.0, 3.0];

    let resolved = MissingValuePolicy::default().resolve_series(&data).unwrap();

    assert!(matches!(resolved, Cow::Borrowed(_)));
}

/// Test that gaps produce an owned, substituted series.
#[test]
fn test_missing_resolve_series_substitutes() {
    let data = [1.0, f64::NAN, f64::NAN, 4.0];

    let resolved = MissingValuePolicy::CarryForward.resolve_series(&data).unwrap();

    assert!(matches!(resolved, Cow::Owned(_)));
    assert_eq!(&*resolved, &[1.0, 1.0, 1.0, 4.0]);
}

// ============================================================================
// Validator Tests
// ============================================================================

/// Test parameter validation.
#[test]
fn test_validator() {
    assert!(Validator::validate_window(1).is_ok());
    assert_eq!(
        Validator::validate_window(0),
        Err(EpicurveError::InvalidWindow(0))
    );

    assert!(Validator::validate_min_points(7, 7).is_ok());
    assert!(Validator::validate_min_points(0, 7).is_err());

    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert!(Validator::validate_scalar(f64::INFINITY, "count").is_err());
}

// ============================================================================
// Math Tests
// ============================================================================

/// Test means and totals.
#[test]
fn test_mean_and_total() {
    assert_eq!(mean::<f64>(&[]), 0.0);
    assert_relative_eq!(mean(&[1.0, 2.0, 6.0]), 3.0);
    assert_relative_eq!(total(&[1.0, 2.0, 6.0]), 9.0);
}

/// Test rate scales.
///
/// Verifies the factors and the non-positive reference rule.
#[test]
fn test_rate_scale() {
    assert_eq!(RateScale::default(), RateScale::PerMillion);
    assert_eq!(RateScale::PerMillion.factor::<f64>(), PER_MILLION);
    assert_eq!(RateScale::PerHundredThousand.factor::<f64>(), 100_000.0);
    assert_eq!(RateScale::Percent.factor::<f64>(), 100.0);

    assert_eq!(RateScale::Percent.apply(5.0, 0.0), 0.0);
    assert_eq!(RateScale::Percent.apply(5.0, -10.0), 0.0);
    assert_relative_eq!(RateScale::Percent.apply(1.0, 4.0), 25.0);
}

// ============================================================================
// Executor Tests
// ============================================================================

/// Test the flags of a smoothing pass.
#[test]
fn test_executor_flags() {
    let config = SmoothingConfig {
        window: 3,
        missing_values: MissingValuePolicy::TreatAsZero,
    };

    let short = SmoothingExecutor::run(&[1.0, 2.0], &config).unwrap();
    assert!(short.passed_through);
    assert_eq!(short.expanding_points, 0);

    let full = SmoothingExecutor::run(&[3.0, f64::NAN, 3.0, 6.0], &config).unwrap();
    assert!(!full.passed_through);
    assert_eq!(full.expanding_points, 3);
    assert_eq!(full.observations, vec![3.0, 0.0, 3.0, 6.0]);
    assert_eq!(full.smoothed, vec![3.0, 1.5, 2.0, 3.0]);
}
