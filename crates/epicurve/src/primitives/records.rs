//! Country-level records consumed by the dashboard computations.
//!
//! ## Purpose
//!
//! These types mirror the stored schema the dashboard reads from: a country
//! with its population, one row of COVID-19 counts per country and day, and
//! the vaccine approvals granted by each country. Persistence is not handled
//! here; callers load the rows and hand them over.
//!
//! ## Design notes
//!
//! * **Stored widths**: Counts keep the integer widths of the stored columns.
//! * **Explicit absence**: A population that is zero or negative is exposed
//!   as `None` through [`Country::population`], never as a zero divisor.
//! * **Serde**: All records derive `Serialize`/`Deserialize` behind the `serde` feature.
//!
//! ## Invariants
//!
//! * Country names and vaccine names are at most 100 characters.
//! * Country codes are at most 10 characters.
//! * [`Population`] is always strictly positive.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

// External dependencies
use chrono::NaiveDate;
use core::cmp::Reverse;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::num::NonZeroU64;
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::EpicurveError;

/// Maximum length of a country or vaccine name.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of a country code.
pub const MAX_CODE_LEN: usize = 10;

// ============================================================================
// Population
// ============================================================================

/// A strictly positive number of inhabitants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Population(NonZeroU64);

impl Population {
    /// Wrap a positive population; zero yields `None`.
    pub fn new(inhabitants: u64) -> Option<Self> {
        NonZeroU64::new(inhabitants).map(Self)
    }

    /// Interpret a stored population figure.
    ///
    /// Zero and negative figures both mean "no population data" and map to
    /// `None`.
    pub fn from_raw(raw: i64) -> Option<Self> {
        u64::try_from(raw).ok().and_then(Self::new)
    }

    /// Number of inhabitants.
    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// Population as a float for rate arithmetic.
    pub fn to_float<T: Float>(self) -> T {
        T::from(self.get()).unwrap_or_else(T::max_value)
    }
}

impl From<NonZeroU64> for Population {
    fn from(value: NonZeroU64) -> Self {
        Self(value)
    }
}

impl Display for Population {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Country
// ============================================================================

/// A country tracked by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Country {
    /// Display name, e.g. "Brazil".
    pub name: String,

    /// Short code used to join records, e.g. "BR".
    pub code: String,

    /// Population as stored (may be zero or negative when unknown).
    pub population: i64,
}

impl Country {
    /// Create a country, checking the stored column widths.
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        population: i64,
    ) -> Result<Self, EpicurveError> {
        let name = name.into();
        let code = code.into();
        check_len("name", &name, MAX_NAME_LEN)?;
        check_len("code", &code, MAX_CODE_LEN)?;
        Ok(Self {
            name,
            code,
            population,
        })
    }

    /// Population usable for normalization, if known.
    pub fn population(&self) -> Option<Population> {
        Population::from_raw(self.population)
    }
}

impl Display for Country {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name)
    }
}

// ============================================================================
// Daily Counts
// ============================================================================

/// One day of COVID-19 counts for one country.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CovidData {
    /// Code of the country the row belongs to.
    pub country_code: String,

    /// Reporting day.
    pub date: NaiveDate,

    /// Cumulative confirmed cases.
    pub total_cases: i32,

    /// Cases reported on this day.
    pub new_cases: i32,

    /// Cumulative deaths.
    pub total_deaths: i32,

    /// Deaths reported on this day.
    pub new_deaths: i32,

    /// People with at least one dose, when reported.
    pub people_vaccinated: Option<i32>,

    /// People fully vaccinated, when reported.
    pub people_fully_vaccinated: Option<i32>,
}

impl CovidData {
    /// Whether this row belongs to the given country.
    #[inline]
    pub fn is_for(&self, country: &Country) -> bool {
        self.country_code == country.code
    }
}

impl Display for CovidData {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} - {}", self.country_code, self.date)
    }
}

/// Sort rows in the default listing order: newest day first.
pub fn sort_newest_first(records: &mut [CovidData]) {
    records.sort_by_key(|r| Reverse(r.date));
}

// ============================================================================
// Vaccine Approvals
// ============================================================================

/// A vaccine approved for use in a country.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VaccineApproval {
    /// Code of the approving country.
    pub country_code: String,

    /// Commercial or technical name of the vaccine.
    pub vaccine_name: String,

    /// Day the approval was granted.
    pub approval_date: NaiveDate,
}

impl VaccineApproval {
    /// Create an approval, checking the stored column widths.
    pub fn new(
        country_code: impl Into<String>,
        vaccine_name: impl Into<String>,
        approval_date: NaiveDate,
    ) -> Result<Self, EpicurveError> {
        let country_code = country_code.into();
        let vaccine_name = vaccine_name.into();
        check_len("country_code", &country_code, MAX_CODE_LEN)?;
        check_len("vaccine_name", &vaccine_name, MAX_NAME_LEN)?;
        Ok(Self {
            country_code,
            vaccine_name,
            approval_date,
        })
    }
}

impl Display for VaccineApproval {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} - {}", self.country_code, self.vaccine_name)
    }
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), EpicurveError> {
    let len = value.chars().count();
    if len > max {
        return Err(EpicurveError::InvalidArgument(format!(
            "{field} has {len} characters (max {max})"
        )));
    }
    Ok(())
}
