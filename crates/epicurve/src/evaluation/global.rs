//! Aggregate statistics across countries.
//!
//! Sums the latest cumulative totals of every country into the headline
//! figures shown above the dashboard charts.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::curve::case_fatality_rate;

/// Cumulative totals of one country.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountryTotals<T> {
    /// Confirmed cases to date.
    pub cases: T,

    /// Deaths to date.
    pub deaths: T,
}

/// Headline statistics over all countries.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalStats<T> {
    /// Sum of confirmed cases.
    pub total_cases: T,

    /// Sum of deaths.
    pub total_deaths: T,

    /// Countries with at least one confirmed case.
    pub affected_countries: usize,

    /// Deaths per hundred cases over all countries.
    pub case_fatality_rate: T,
}

impl<T: Float> GlobalStats<T> {
    /// Fold per-country totals into global figures.
    ///
    /// Non-finite totals are skipped.
    pub fn from_totals<I>(totals: I) -> Self
    where
        I: IntoIterator<Item = CountryTotals<T>>,
    {
        let mut total_cases = T::zero();
        let mut total_deaths = T::zero();
        let mut affected_countries = 0;

        for t in totals {
            if !t.cases.is_finite() || !t.deaths.is_finite() {
                continue;
            }
            total_cases = total_cases + t.cases;
            total_deaths = total_deaths + t.deaths;
            if t.cases > T::zero() {
                affected_countries += 1;
            }
        }

        Self {
            total_cases,
            total_deaths,
            affected_countries,
            case_fatality_rate: case_fatality_rate(total_cases, total_deaths),
        }
    }
}

impl<T: Float + Display> Display for GlobalStats<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Global Statistics:")?;
        writeln!(f, "  Cases:              {:.0}", self.total_cases)?;
        writeln!(f, "  Deaths:             {:.0}", self.total_deaths)?;
        writeln!(f, "  Affected countries: {}", self.affected_countries)?;
        writeln!(f, "  Fatality rate:      {:.2}%", self.case_fatality_rate)?;
        Ok(())
    }
}
