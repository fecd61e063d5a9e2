//! Tests for the Online adapter.
//!
//! The Online adapter smooths one observation at a time, e.g. as daily
//! reports land.
//!
//! ## Test Organization
//!
//! 1. **Builder Validation** - min_points bounds
//! 2. **Incremental Updates** - Values, warm-up and eviction
//! 3. **Outputs** - Residuals and expanding flag
//! 4. **Lifecycle Management** - Reset and errors

use approx::assert_relative_eq;
use epicurve::prelude::*;

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test min_points validation.
///
/// Verifies that zero and values above the window are rejected.
#[test]
fn test_online_invalid_min_points() {
    for min_points in [0, 8] {
        let result = Smoother::new()
            .window(7)
            .min_points(min_points)
            .adapter(Online)
            .build::<f64>();

        assert!(
            matches!(
                result,
                Err(EpicurveError::InvalidMinPoints { got, window: 7 }) if got == min_points
            ),
            "min_points = {min_points} should be rejected"
        );
    }
}

// ============================================================================
// Incremental Update Tests
// ============================================================================

/// Test that online values equal batch values once the window is reached.
#[test]
fn test_online_matches_batch() {
    let data = vec![
        12.0, 30.0, 18.0, 44.0, 61.0, 15.0, 9.0, 80.0, 95.0, 72.0, 140.0, 133.0,
    ];
    let expected = calculate_moving_average(&data, 7).unwrap();

    let mut smoother = Smoother::new().window(7).adapter(Online).build().unwrap();
    let online: Vec<f64> = data
        .iter()
        .map(|&v| smoother.add_observation(v).unwrap().unwrap().smoothed)
        .collect();

    for (o, e) in online.iter().zip(&expected) {
        assert_relative_eq!(*o, *e, epsilon = 1e-12);
    }
}

/// Test the warm-up phase.
#[test]
fn test_online_min_points() {
    let mut smoother = Smoother::new()
        .window(5)
        .min_points(3)
        .adapter(Online)
        .build()
        .unwrap();

    assert!(smoother.add_observation(1.0).unwrap().is_none());
    assert!(smoother.add_observation(2.0).unwrap().is_none());

    let third = smoother.add_observation(3.0).unwrap().expect("warm-up complete");
    assert_relative_eq!(third.smoothed, 2.0);
    assert_eq!(third.window_len, 3);
}

/// Test that the window never exceeds its capacity.
#[test]
fn test_online_eviction() {
    let mut smoother = Smoother::new().window(3).adapter(Online).build().unwrap();

    for v in 1..=10 {
        smoother.add_observation(v as f64).unwrap();
        assert!(smoother.window_size() <= 3);
    }

    assert_eq!(smoother.window(), 3);
    assert_eq!(smoother.window_size(), 3);
    assert_eq!(smoother.seen(), 10);

    let out = smoother.add_observation(11.0).unwrap().unwrap();
    assert_relative_eq!(out.smoothed, 10.0);
}

// ============================================================================
// Output Tests
// ============================================================================

/// Test residuals and the expanding flag.
#[test]
fn test_online_output_fields() {
    let mut smoother = Smoother::new()
        .window(2)
        .return_residuals()
        .adapter(Online)
        .build()
        .unwrap();

    let first = smoother.add_observation(4.0).unwrap().unwrap();
    assert!(first.is_expanding(2));
    assert_eq!(first.residual, Some(0.0));

    let second = smoother.add_observation(8.0).unwrap().unwrap();
    assert!(!second.is_expanding(2));
    assert_relative_eq!(second.smoothed, 6.0);
    assert_eq!(second.observed, 8.0);
    assert_eq!(second.residual, Some(2.0));
}

/// Test that residuals are absent unless requested.
#[test]
fn test_online_no_residuals_by_default() {
    let mut smoother = Smoother::new().adapter(Online).build().unwrap();
    let out = smoother.add_observation(1.0).unwrap().unwrap();

    assert!(out.residual.is_none());
}

/// Test carry-forward substitution.
#[test]
fn test_online_carry_forward() {
    let mut smoother = Smoother::new()
        .window(2)
        .missing_values(CarryForward)
        .adapter(Online)
        .build()
        .unwrap();

    smoother.add_observation(6.0).unwrap();
    let out = smoother.add_observation(f64::NAN).unwrap().unwrap();

    assert_eq!(out.observed, 6.0);
    assert_relative_eq!(out.smoothed, 6.0);
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

/// Test that rejected observations are not consumed.
#[test]
fn test_online_rejects_missing() {
    let mut smoother = Smoother::new().adapter(Online).build().unwrap();

    smoother.add_observation(1.0).unwrap();
    let result = smoother.add_observation(f64::NAN);

    assert!(matches!(result, Err(EpicurveError::InvalidNumericValue(_))));
    assert_eq!(smoother.seen(), 1);
    assert_eq!(smoother.window_size(), 1);
}

/// Test reset.
#[test]
fn test_online_reset() {
    let mut smoother = Smoother::new()
        .window(3)
        .min_points(2)
        .adapter(Online)
        .build()
        .unwrap();

    smoother.add_observation(5.0).unwrap();
    smoother.add_observation(5.0).unwrap();
    smoother.reset();

    assert_eq!(smoother.seen(), 0);
    assert_eq!(smoother.window_size(), 0);
    assert!(smoother.add_observation(1.0).unwrap().is_none());
}
