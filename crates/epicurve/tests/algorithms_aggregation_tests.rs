//! Tests for cumulative-series aggregation.
//!
//! ## Test Organization
//!
//! 1. **Daily Increments** - Differences and correction clamping
//! 2. **Monthly Buckets** - Coverage, year rollover, unsorted input
//! 3. **Validation** - Length mismatch, reversed range, invalid values

use approx::assert_relative_eq;
use chrono::NaiveDate;
use epicurve::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// Daily Increment Tests
// ============================================================================

/// Test increments from a cumulative series.
///
/// Verifies:
/// - The first value is kept as reported
/// - Downward corrections are clamped at zero
#[test]
fn test_daily_increments() {
    let cumulative = vec![100.0, 150.0, 140.0, 200.0];

    assert_eq!(daily_increments(&cumulative), vec![100.0, 50.0, 0.0, 60.0]);
}

/// Test trivial inputs.
#[test]
fn test_daily_increments_trivial() {
    assert!(daily_increments::<f64>(&[]).is_empty());
    assert_eq!(daily_increments(&[7.0]), vec![7.0]);
}

// ============================================================================
// Monthly Bucket Tests
// ============================================================================

/// Test monthly grouping over a range with an empty month.
#[test]
fn test_group_by_month() {
    let dates = vec![
        day(2021, 1, 15),
        day(2021, 1, 31),
        day(2021, 2, 1),
        day(2021, 2, 28),
        day(2021, 3, 10),
    ];
    let cumulative = vec![100.0, 250.0, 260.0, 400.0, 450.0];

    let buckets = group_by_month(&dates, &cumulative, day(2021, 1, 1), day(2021, 4, 30)).unwrap();

    assert_eq!(buckets.len(), 4);
    let values: Vec<f64> = buckets.iter().map(|b| b.value).collect();
    assert_eq!(values, vec![150.0, 140.0, 0.0, 0.0]);

    let labels: Vec<String> = buckets.iter().map(|b| b.label()).collect();
    assert_eq!(labels, vec!["01/2021", "02/2021", "03/2021", "04/2021"]);
}

/// Test that the range rolls over year boundaries.
#[test]
fn test_group_by_month_year_rollover() {
    let buckets =
        group_by_month::<f64>(&[], &[], day(2020, 11, 5), day(2021, 2, 1)).unwrap();

    let months: Vec<(i32, u32)> = buckets.iter().map(|b| (b.year, b.month)).collect();
    assert_eq!(months, vec![(2020, 11), (2020, 12), (2021, 1), (2021, 2)]);
    assert!(buckets.iter().all(|b| b.value == 0.0));
}

/// Test that a mid-month start still covers its whole month.
#[test]
fn test_group_by_month_mid_month_start() {
    let dates = vec![day(2021, 5, 2), day(2021, 5, 30)];
    let cumulative = vec![10.0, 35.0];

    let buckets = group_by_month(&dates, &cumulative, day(2021, 5, 20), day(2021, 5, 21)).unwrap();

    assert_eq!(buckets.len(), 1);
    assert_relative_eq!(buckets[0].value, 25.0);
}

/// Test that input order does not matter.
#[test]
fn test_group_by_month_unsorted() {
    let dates = vec![day(2021, 1, 31), day(2021, 1, 1), day(2021, 1, 15)];
    let cumulative = vec![90.0, 10.0, 40.0];

    let buckets = group_by_month(&dates, &cumulative, day(2021, 1, 1), day(2021, 1, 31)).unwrap();

    assert_relative_eq!(buckets[0].value, 80.0);
}

/// Test that observations outside the range are ignored.
#[test]
fn test_group_by_month_ignores_outside_range() {
    let dates = vec![day(2020, 12, 31), day(2021, 1, 10), day(2021, 2, 1)];
    let cumulative = vec![0.0, 500.0, 9000.0];

    let buckets = group_by_month(&dates, &cumulative, day(2021, 1, 1), day(2021, 1, 31)).unwrap();

    assert_eq!(buckets.len(), 1);
    assert_relative_eq!(buckets[0].value, 0.0);
}

/// Test bucket display.
#[test]
fn test_monthly_bucket_display() {
    let bucket = MonthlyBucket {
        year: 2020,
        month: 3,
        value: 12.0,
    };

    assert_eq!(bucket.to_string(), "03/2020: 12");
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test that misaligned inputs are rejected.
#[test]
fn test_group_by_month_mismatched_inputs() {
    let result = group_by_month(&[day(2021, 1, 1)], &[1.0, 2.0], day(2021, 1, 1), day(2021, 1, 31));

    assert_eq!(
        result,
        Err(EpicurveError::MismatchedInputs { left: 1, right: 2 })
    );
}

/// Test that a reversed range is rejected.
#[test]
fn test_group_by_month_reversed_range() {
    let start = day(2021, 3, 1);
    let end = day(2021, 2, 1);

    let result = group_by_month::<f64>(&[], &[], start, end);

    assert_eq!(result, Err(EpicurveError::InvalidDateRange { start, end }));
}

/// Test that non-finite cumulative values are rejected.
#[test]
fn test_group_by_month_rejects_nan() {
    let result = group_by_month(
        &[day(2021, 1, 1)],
        &[f64::NAN],
        day(2021, 1, 1),
        day(2021, 1, 31),
    );

    assert!(matches!(result, Err(EpicurveError::InvalidNumericValue(_))));
}
