//! Tests for the Batch adapter.
//!
//! The Batch adapter smooths a complete series held in memory, which is how
//! a chart renders the full history of one country.
//!
//! ## Test Organization
//!
//! 1. **Result Structure** - Observations, flags, residuals, diagnostics
//! 2. **Missing Values** - Reject, TreatAsZero, CarryForward
//! 3. **Reuse** - One smoother, many series
//! 4. **Display** - Tabular output

use approx::assert_relative_eq;
use epicurve::prelude::*;

// ============================================================================
// Result Structure Tests
// ============================================================================

/// Test the fields of a full-length result.
///
/// Verifies:
/// - Smoothed values match the helper
/// - Expanding points equal the window
/// - Optional outputs are absent by default
#[test]
fn test_batch_result_fields() {
    let data: Vec<f64> = (1..=10).map(|v| v as f64 * 10.0).collect();
    let smoother = Smoother::new().window(7).adapter(Batch).build().unwrap();

    let result = smoother.fit(&data).unwrap();

    assert_eq!(result.len(), 10);
    assert!(!result.is_empty());
    assert_eq!(result.window, 7);
    assert!(!result.passed_through);
    assert_eq!(result.expanding_points, 7);
    assert_eq!(result.observations, data);
    assert_eq!(result.smoothed, calculate_moving_average(&data, 7).unwrap());
    assert!(result.residuals.is_none());
    assert!(result.diagnostics.is_none());
}

/// Test the pass-through flags for a short series.
#[test]
fn test_batch_short_series_flags() {
    let data = vec![4.0, 8.0];
    let smoother = Smoother::new().adapter(Batch).build().unwrap();

    let result = smoother.fit(&data).unwrap();

    assert!(result.passed_through);
    assert_eq!(result.expanding_points, 0);
    assert_eq!(result.smoothed, data);
}

/// Test residuals.
#[test]
fn test_batch_residuals() {
    let data = vec![2.0, 4.0, 6.0, 8.0];
    let smoother = Smoother::new()
        .window(2)
        .return_residuals()
        .adapter(Batch)
        .build()
        .unwrap();

    let result = smoother.fit(&data).unwrap();
    let residuals = result.residuals.expect("residuals requested");

    // Smoothed: [2, 3, 5, 7]
    for (r, e) in residuals.iter().zip([0.0, 1.0, 1.0, 1.0]) {
        assert_relative_eq!(*r, e);
    }
}

/// Test diagnostics.
///
/// Verifies RMSE, MAE and the largest deviation on a hand-checked series.
#[test]
fn test_batch_diagnostics() {
    let data = vec![0.0, 4.0, 0.0, 4.0];
    let smoother = Smoother::new()
        .window(2)
        .return_diagnostics()
        .adapter(Batch)
        .build()
        .unwrap();

    let result = smoother.fit(&data).unwrap();
    let diag = result.diagnostics.expect("diagnostics requested");

    // Smoothed: [0, 2, 2, 2]; absolute residuals [0, 2, 2, 2]
    assert_relative_eq!(diag.mae, 1.5);
    assert_relative_eq!(diag.rmse, 3.0f64.sqrt());
    assert_relative_eq!(diag.max_deviation, 2.0);
    assert_eq!(diag.max_deviation_index, 1);
    assert!(result.residuals.is_none());
}

/// Test that a constant series is left unchanged.
#[test]
fn test_batch_constant_series() {
    let data = vec![42.0; 15];
    let smoother = Smoother::new().return_diagnostics().adapter(Batch).build().unwrap();

    let result = smoother.fit(&data).unwrap();

    for v in &result.smoothed {
        assert_relative_eq!(*v, 42.0);
    }
    let diag = result.diagnostics.unwrap();
    assert_relative_eq!(diag.rmse, 0.0);
}

// ============================================================================
// Missing Value Tests
// ============================================================================

/// Test that missing observations are rejected by default.
#[test]
fn test_batch_rejects_missing_by_default() {
    let smoother = Smoother::new().window(2).adapter(Batch).build().unwrap();
    let result = smoother.fit(&[1.0, f64::NAN, 3.0]);

    match result {
        Err(EpicurveError::InvalidNumericValue(msg)) => assert!(msg.starts_with("data[1]")),
        other => panic!("expected InvalidNumericValue, got {other:?}"),
    }
}

/// Test zero substitution.
#[test]
fn test_batch_treat_as_zero() {
    let smoother = Smoother::new()
        .window(2)
        .missing_values(TreatAsZero)
        .adapter(Batch)
        .build()
        .unwrap();

    let result = smoother.fit(&[10.0, f64::NAN, 30.0]).unwrap();

    assert_eq!(result.observations, vec![10.0, 0.0, 30.0]);
    assert_eq!(result.smoothed, vec![10.0, 5.0, 15.0]);
}

/// Test carrying the last observation forward.
///
/// Verifies:
/// - Gaps repeat the previous value
/// - A leading gap becomes zero
#[test]
fn test_batch_carry_forward() {
    let smoother = Smoother::new()
        .window(2)
        .missing_values(CarryForward)
        .adapter(Batch)
        .build()
        .unwrap();

    let result = smoother.fit(&[10.0, f64::NAN, f64::NAN, 30.0]).unwrap();
    assert_eq!(result.observations, vec![10.0, 10.0, 10.0, 30.0]);
    assert_eq!(result.smoothed, vec![10.0, 10.0, 10.0, 20.0]);

    let result = smoother.fit(&[f64::NAN, 4.0]).unwrap();
    assert_eq!(result.observations, vec![0.0, 4.0]);
}

/// Test that infinities are rejected regardless of the policy.
#[test]
fn test_batch_rejects_infinity() {
    for policy in [Reject, TreatAsZero, CarryForward] {
        let smoother = Smoother::new()
            .missing_values(policy)
            .adapter(Batch)
            .build()
            .unwrap();

        let result = smoother.fit(&[1.0, f64::INFINITY]);
        assert!(
            matches!(result, Err(EpicurveError::InvalidNumericValue(_))),
            "{policy:?} should reject infinity"
        );
    }
}

// ============================================================================
// Reuse Tests
// ============================================================================

/// Test that one smoother can be applied to several series and types.
#[test]
fn test_batch_reuse() {
    let smoother = Smoother::new().window(3).adapter(Batch).build().unwrap();

    let cases = smoother.fit(&[3.0f64, 6.0, 9.0, 12.0]).unwrap();
    let deaths = smoother.fit(&[1.0f32, 1.0, 4.0, 1.0]).unwrap();

    assert_eq!(cases.into_smoothed(), vec![3.0, 4.5, 6.0, 9.0]);
    assert_eq!(deaths.into_smoothed(), vec![1.0f32, 1.0, 2.0, 2.0]);
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the tabular display.
#[test]
fn test_batch_display() {
    let smoother = Smoother::new()
        .window(3)
        .return_residuals()
        .return_diagnostics()
        .adapter(Batch)
        .build()
        .unwrap();

    let result = smoother.fit(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    let text = result.to_string();

    assert!(text.contains("Summary:"));
    assert!(text.contains("Window:      3"));
    assert!(text.contains("Smoothing Diagnostics:"));
    assert!(text.contains("Residual"));
}

/// Test that long results are abbreviated.
#[test]
fn test_batch_display_truncates_long_series() {
    let data: Vec<f64> = (0..50).map(|v| v as f64).collect();
    let smoother = Smoother::new().adapter(Batch).build().unwrap();

    let text = smoother.fit(&data).unwrap().to_string();

    assert!(text.contains("..."));
    assert!(text.contains("Data points: 50"));
}
