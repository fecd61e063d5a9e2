//! Epidemic curve analysis.
//!
//! ## Purpose
//!
//! This module summarizes the shape of an epidemic curve: where it peaked,
//! how long the rise and the decline lasted, the average level in each
//! phase, and the overall case fatality rate.
//!
//! ## Design notes
//!
//! * **First peak**: Ties for the maximum resolve to the earliest period.
//! * **Phases**: The growth phase is every period strictly before the peak;
//!   the decline phase starts at the peak and runs to the end.
//! * **Finite input**: NaN or infinite counts are rejected, since they would
//!   corrupt the peak search and every total.
//! * **Zero defaults**: Empty phases average to zero and a curve without
//!   cases has a fatality rate of zero.
//!
//! ## Invariants
//!
//! * `growth_periods + decline_periods == n`.
//! * `decline_periods >= 1` for any non-empty curve.
//!
//! ## Non-goals
//!
//! * This module does not detect multiple waves.
//! * This module does not smooth the curve before analysing it.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::mean::{mean, total};
use crate::math::rate::RateScale;
use crate::primitives::errors::EpicurveError;

// ============================================================================
// Case Fatality Rate
// ============================================================================

/// Deaths as a percentage of cases; zero when there are no cases.
#[inline]
pub fn case_fatality_rate<T: Float>(cases: T, deaths: T) -> T {
    RateScale::Percent.apply(deaths, cases)
}

// ============================================================================
// Curve Analysis
// ============================================================================

/// Shape summary of an epidemic curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveAnalysis<T> {
    /// Index of the first period with the maximum case count.
    pub peak_index: usize,

    /// Case count at the peak.
    pub peak_value: T,

    /// Number of periods before the peak.
    pub growth_periods: usize,

    /// Number of periods from the peak to the end.
    pub decline_periods: usize,

    /// Mean cases per period during the growth phase.
    pub mean_growth: T,

    /// Mean cases per period during the decline phase.
    pub mean_decline: T,

    /// Sum of cases over all periods.
    pub total_cases: T,

    /// Sum of deaths over all periods.
    pub total_deaths: T,

    /// Deaths per hundred cases.
    pub case_fatality_rate: T,
}

impl<T: Float> CurveAnalysis<T> {
    /// Analyse aligned per-period case and death counts.
    pub fn compute(cases: &[T], deaths: &[T]) -> core::result::Result<Self, EpicurveError> {
        if cases.is_empty() {
            return Err(EpicurveError::EmptyInput);
        }
        if cases.len() != deaths.len() {
            return Err(EpicurveError::MismatchedInputs {
                left: cases.len(),
                right: deaths.len(),
            });
        }
        check_finite(cases, "cases")?;
        check_finite(deaths, "deaths")?;

        let (peak_index, peak_value) = cases.iter().copied().enumerate().fold(
            (0, cases[0]),
            |(best_i, best_v), (i, v)| if v > best_v { (i, v) } else { (best_i, best_v) },
        );

        let (growth, decline) = cases.split_at(peak_index);
        let total_cases = total(cases);
        let total_deaths = total(deaths);

        Ok(Self {
            peak_index,
            peak_value,
            growth_periods: growth.len(),
            decline_periods: decline.len(),
            mean_growth: mean(growth),
            mean_decline: mean(decline),
            total_cases,
            total_deaths,
            case_fatality_rate: case_fatality_rate(total_cases, total_deaths),
        })
    }
}

fn check_finite<T: Float>(values: &[T], name: &str) -> core::result::Result<(), EpicurveError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(EpicurveError::InvalidNumericValue(format!(
            "{}[{}]={}",
            name,
            i,
            values[i].to_f64().unwrap_or(f64::NAN)
        ))),
        None => Ok(()),
    }
}

impl<T: Float + Display> Display for CurveAnalysis<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Curve Analysis:")?;
        writeln!(f, "  Growth phase:   {} periods", self.growth_periods)?;
        writeln!(
            f,
            "  Peak:           period {} ({:.0} cases)",
            self.peak_index, self.peak_value
        )?;
        writeln!(f, "  Decline phase:  {} periods", self.decline_periods)?;
        writeln!(f, "  Total cases:    {:.0}", self.total_cases)?;
        writeln!(f, "  Total deaths:   {:.0}", self.total_deaths)?;
        writeln!(f, "  Fatality rate:  {:.2}%", self.case_fatality_rate)?;
        Ok(())
    }
}
