//! Per-country timelines and headline statistics for the dashboard.
//!
//! ## Purpose
//!
//! This module turns stored records into the series a dashboard chart
//! plots for one country: the raw daily counts, their one-week moving
//! averages and the smoothed cases per million, all on one date axis. It
//! also folds the latest totals of every country into global figures.
//!
//! ## Design notes
//!
//! * **Ordering**: Records are listed newest first; timelines are built
//!   oldest first so the moving average trails in time.
//! * **Alignment**: Every series of a timeline has the length of `dates`.
//! * **Parallelism**: With the `parallel` feature, [`build_timelines`]
//!   computes countries concurrently on the rayon pool.
//!
//! ## Non-goals
//!
//! * This module does not load records from storage.
//! * This module does not render charts.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

// External dependencies
use chrono::NaiveDate;
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::moving_average::DEFAULT_WINDOW;
use crate::algorithms::normalization::normalize_all;
use crate::api::{Batch, SmootherBuilder};
use crate::engine::validator::Validator;
use crate::evaluation::curve::CurveAnalysis;
use crate::evaluation::global::{CountryTotals, GlobalStats};
use crate::math::rate::RateScale;
use crate::primitives::errors::EpicurveError;
use crate::primitives::records::{Country, CovidData, VaccineApproval};

// ============================================================================
// Configuration
// ============================================================================

/// Settings shared by all timelines of a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimelineConfig {
    /// Moving-average window in days.
    pub window: usize,

    /// Scale of the per-capita series.
    pub scale: RateScale,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            scale: RateScale::PerMillion,
        }
    }
}

#[inline]
fn as_float<T: Float>(value: i32) -> T {
    T::from(value).unwrap_or_else(T::zero)
}

// Rows of one country, oldest first.
fn rows_for<'a>(country: &Country, records: &'a [CovidData]) -> Vec<&'a CovidData> {
    let mut rows: Vec<&CovidData> = records.iter().filter(|r| r.is_for(country)).collect();
    rows.sort_by_key(|r| r.date);
    rows
}

// ============================================================================
// Country Timeline
// ============================================================================

/// Date-aligned series for one country.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountryTimeline<T> {
    /// Country code.
    pub country_code: String,

    /// Country display name.
    pub country_name: String,

    /// Reporting days, oldest first.
    pub dates: Vec<NaiveDate>,

    /// Cases reported each day.
    pub new_cases: Vec<T>,

    /// Deaths reported each day.
    pub new_deaths: Vec<T>,

    /// Moving average of `new_cases`.
    pub smoothed_cases: Vec<T>,

    /// Moving average of `new_deaths`.
    pub smoothed_deaths: Vec<T>,

    /// `smoothed_cases` relative to the population, in the configured scale.
    pub cases_per_capita: Vec<T>,

    /// Cumulative totals of the most recent day (zero without records).
    pub latest_totals: CountryTotals<T>,

    /// Percentage of the population fully vaccinated, latest report.
    pub vaccination_coverage: Option<T>,

    /// Earliest vaccine approval granted by the country.
    pub first_vaccine_approval: Option<NaiveDate>,
}

impl<T: Float> CountryTimeline<T> {
    /// Build the timeline of `country` from its records and approvals.
    ///
    /// Records and approvals of other countries are ignored.
    pub fn build(
        country: &Country,
        records: &[CovidData],
        approvals: &[VaccineApproval],
        config: &TimelineConfig,
    ) -> Result<Self, EpicurveError> {
        Validator::validate_window(config.window)?;

        let rows = rows_for(country, records);
        let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
        let new_cases: Vec<T> = rows.iter().map(|r| as_float(r.new_cases)).collect();
        let new_deaths: Vec<T> = rows.iter().map(|r| as_float(r.new_deaths)).collect();

        let smoother = SmootherBuilder::new()
            .window(config.window)
            .adapter(Batch)
            .build()?;
        let smoothed_cases = smoother.fit(&new_cases)?.into_smoothed();
        let smoothed_deaths = smoother.fit(&new_deaths)?.into_smoothed();

        let population = country.population();
        if population.is_none() {
            debug!(
                country = %country.code,
                raw = country.population,
                "population unknown, per-capita series is zero"
            );
        }
        let cases_per_capita = normalize_all(&smoothed_cases, population, config.scale);

        let latest_totals = rows
            .last()
            .map(|r| CountryTotals {
                cases: as_float(r.total_cases),
                deaths: as_float(r.total_deaths),
            })
            .unwrap_or(CountryTotals {
                cases: T::zero(),
                deaths: T::zero(),
            });

        let vaccination_coverage = rows
            .iter()
            .rev()
            .find_map(|r| r.people_fully_vaccinated)
            .and_then(|v| population.map(|p| RateScale::Percent.apply(as_float(v), p.to_float())));

        let first_vaccine_approval = approvals
            .iter()
            .filter(|a| a.country_code == country.code)
            .map(|a| a.approval_date)
            .min();

        debug!(
            country = %country.code,
            days = dates.len(),
            window = config.window,
            "built country timeline"
        );

        Ok(Self {
            country_code: country.code.clone(),
            country_name: country.name.clone(),
            dates,
            new_cases,
            new_deaths,
            smoothed_cases,
            smoothed_deaths,
            cases_per_capita,
            latest_totals,
            vaccination_coverage,
            first_vaccine_approval,
        })
    }

    /// Number of days covered.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the country has no records.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Shape of the raw daily case curve.
    pub fn curve(&self) -> Result<CurveAnalysis<T>, EpicurveError> {
        CurveAnalysis::compute(&self.new_cases, &self.new_deaths)
    }
}

// ============================================================================
// Many Countries
// ============================================================================

/// Build one timeline per country, in the order of `countries`.
#[cfg(not(feature = "parallel"))]
pub fn build_timelines<T: Float>(
    countries: &[Country],
    records: &[CovidData],
    approvals: &[VaccineApproval],
    config: &TimelineConfig,
) -> Result<Vec<CountryTimeline<T>>, EpicurveError> {
    countries
        .iter()
        .map(|c| CountryTimeline::build(c, records, approvals, config))
        .collect()
}

/// Build one timeline per country, in the order of `countries`.
#[cfg(feature = "parallel")]
pub fn build_timelines<T: Float + Send + Sync>(
    countries: &[Country],
    records: &[CovidData],
    approvals: &[VaccineApproval],
    config: &TimelineConfig,
) -> Result<Vec<CountryTimeline<T>>, EpicurveError> {
    use rayon::prelude::*;

    countries
        .par_iter()
        .map(|c| CountryTimeline::build(c, records, approvals, config))
        .collect()
}

/// Headline statistics from the latest totals of every country.
pub fn global_stats<T: Float>(countries: &[Country], records: &[CovidData]) -> GlobalStats<T> {
    GlobalStats::from_totals(countries.iter().filter_map(|c| {
        rows_for(c, records).last().map(|r| CountryTotals {
            cases: as_float(r.total_cases),
            deaths: as_float(r.total_deaths),
        })
    }))
}
