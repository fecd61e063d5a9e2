//! Aggregation of cumulative series into daily and monthly new counts.
//!
//! ## Purpose
//!
//! Upstream sources publish cumulative totals (cases to date, deaths to
//! date). Charts want new counts per period. This module derives daily
//! increments and calendar-month buckets from cumulative series.
//!
//! ## Design notes
//!
//! * **Corrections**: Cumulative totals are sometimes revised downwards.
//!   Increments are clamped at zero so a correction never shows up as
//!   negative new cases.
//! * **Unsorted input**: Monthly bucketing accepts dates in any order.
//! * **Dense output**: Every month in the requested range gets a bucket,
//!   empty months report zero.
//!
//! ## Invariants
//!
//! * `daily_increments` preserves the input length.
//! * Bucket values are never negative.
//! * Buckets are returned in chronological order without gaps.
//!
//! ## Non-goals
//!
//! * This module does not interpolate missing days.
//! * This module does not aggregate by week or by ISO calendar.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};

// External dependencies
use chrono::{Datelike, NaiveDate};
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::EpicurveError;

// ============================================================================
// Daily Increments
// ============================================================================

/// New counts per observation from a cumulative series.
///
/// The first value is kept as reported; every later value is the increase
/// over the previous total, clamped at zero.
pub fn daily_increments<T: Float>(cumulative: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(cumulative.len());
    let mut previous: Option<T> = None;

    for &total in cumulative {
        let increment = match previous {
            None => total,
            Some(prev) => (total - prev).max(T::zero()),
        };
        out.push(increment);
        previous = Some(total);
    }

    out
}

// ============================================================================
// Monthly Buckets
// ============================================================================

/// New counts reported within one calendar month.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthlyBucket<T> {
    /// Calendar year.
    pub year: i32,

    /// Calendar month, 1 through 12.
    pub month: u32,

    /// Increase of the cumulative total within the month.
    pub value: T,
}

impl<T> MonthlyBucket<T> {
    /// Chart label in `MM/YYYY` form.
    pub fn label(&self) -> String {
        format!("{:02}/{}", self.month, self.year)
    }
}

impl<T: Display> Display for MonthlyBucket<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:02}/{}: {}", self.month, self.year, self.value)
    }
}

// First and last dated observation seen inside one month.
#[derive(Clone, Copy)]
struct MonthSpan<T> {
    first: (NaiveDate, T),
    last: (NaiveDate, T),
}

// Months elapsed since year 0, used to index buckets.
#[inline]
fn month_ordinal(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

/// Group a dated cumulative series into calendar-month new counts.
///
/// Each month from `start`'s month through `end`'s month (inclusive) gets
/// the difference between the last and first cumulative value dated inside
/// it, clamped at zero. Months without observations report zero.
pub fn group_by_month<T: Float>(
    dates: &[NaiveDate],
    cumulative: &[T],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<MonthlyBucket<T>>, EpicurveError> {
    if dates.len() != cumulative.len() {
        return Err(EpicurveError::MismatchedInputs {
            left: dates.len(),
            right: cumulative.len(),
        });
    }
    if start > end {
        return Err(EpicurveError::InvalidDateRange { start, end });
    }

    let first_month = month_ordinal(start);
    let n_months = (month_ordinal(end) - first_month + 1) as usize;
    let mut spans: Vec<Option<MonthSpan<T>>> = Vec::with_capacity(n_months);
    spans.resize(n_months, None);

    for (idx, (&date, &value)) in dates.iter().zip(cumulative).enumerate() {
        if !value.is_finite() {
            return Err(EpicurveError::InvalidNumericValue(format!(
                "cumulative[{}]={}",
                idx,
                value.to_f64().unwrap_or(f64::NAN)
            )));
        }

        let offset = month_ordinal(date) - first_month;
        if offset < 0 || offset as usize >= n_months {
            continue;
        }

        let slot = &mut spans[offset as usize];
        match slot {
            None => {
                *slot = Some(MonthSpan {
                    first: (date, value),
                    last: (date, value),
                });
            }
            Some(span) => {
                if date < span.first.0 {
                    span.first = (date, value);
                }
                if date >= span.last.0 {
                    span.last = (date, value);
                }
            }
        }
    }

    let mut year = start.year();
    let mut month = start.month();
    let mut buckets = Vec::with_capacity(n_months);

    for span in spans {
        let value = span
            .map(|s| (s.last.1 - s.first.1).max(T::zero()))
            .unwrap_or_else(T::zero);
        buckets.push(MonthlyBucket { year, month, value });

        if month == 12 {
            month = 1;
            year += 1;
        } else {
            month += 1;
        }
    }

    Ok(buckets)
}
