//! # epicurve: epidemic curve smoothing and normalization for Rust
//!
//! Building blocks for a COVID-19 style dashboard: trailing moving averages
//! of daily counts, per-capita normalization, monthly aggregation of
//! cumulative series and a few headline statistics about the shape of an
//! outbreak.
//!
//! ## What is a trailing moving average?
//!
//! Daily case reports are noisy: weekends and backlogs make counts jump
//! around from one day to the next. The value plotted for day `i` is the
//! mean of the last `window` reports (seven by default), so the curve shows
//! the weekly trend instead of the reporting rhythm. The first days of a
//! series average over everything seen so far, and a series shorter than
//! the window is plotted unchanged.
//!
//! ## Quick Start
//!
//! ### One-call helpers
//!
//! ```rust
//! use epicurve::prelude::*;
//!
//! let new_cases = vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0];
//! let smoothed = calculate_moving_average(&new_cases, 7)?;
//! assert_eq!(smoothed, vec![10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 50.0]);
//!
//! let population = Population::new(1_000_000);
//! let rate = normalize_by_population(100.0, population)?;
//! assert_eq!(rate, 100.0);
//! # Result::<(), EpicurveError>::Ok(())
//! ```
//!
//! ### Configured smoother
//!
//! ```rust
//! use epicurve::prelude::*;
//!
//! let new_cases = vec![120.0, 95.0, f64::NAN, 140.0, 160.0, 80.0, 75.0, 190.0];
//!
//! let smoother = Smoother::new()
//!     .window(7)                       // One week
//!     .missing_values(CarryForward)    // Repeat the last report for gaps
//!     .return_residuals()              // Include residuals
//!     .return_diagnostics()            // RMSE, MAE, largest deviation
//!     .adapter(Batch)
//!     .build()?;
//!
//! let result = smoother.fit(&new_cases)?;
//! println!("{}", result);
//! # Result::<(), EpicurveError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fallible operation returns `Result<_, EpicurveError>`. Invalid
//! windows, non-finite observations under the default policy and misaligned
//! inputs are reported as errors instead of producing NaN.
//!
//! ```rust
//! use epicurve::prelude::*;
//!
//! match calculate_moving_average(&[1.0, 2.0, 3.0], 0) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => eprintln!("smoothing failed: {}", e),
//! }
//! ```
//!
//! ## Execution modes
//!
//! * **Batch**: the whole series in memory.
//! * **Streaming**: a series arriving in chunks, with output identical to batch.
//! * **Online**: one observation at a time, e.g. as daily reports land.
//!
//! ## Minimal Usage (no_std)
//!
//! The smoothing and normalization core builds without the standard
//! library. Disable default features:
//!
//! ```toml
//! [dependencies]
//! epicurve = { version = "0.3", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - records, errors and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - smoothing, normalization and aggregation.
mod algorithms;

// Layer 4: Evaluation - curve statistics and diagnostics.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// Layer 6: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for smoothing and normalization.
mod api;

// Per-country timelines for dashboard views.
mod dashboard;

// Standard epicurve prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Online, Streaming},
        BatchSmoother, ChunkOutput, Country, CountryTotals, CovidData, CurveAnalysis,
        DEFAULT_WINDOW, Diagnostics,
        EpicurveError,
        MissingValuePolicy::CarryForward,
        MissingValuePolicy::Reject,
        MissingValuePolicy::TreatAsZero,
        GlobalStats, MissingValuePolicy, MonthlyBucket, OnlineOutput, OnlineSmoother, Population,
        RateScale::Percent,
        RateScale::PerHundredThousand,
        RateScale::PerMillion,
        RateScale, SmootherBuilder as Smoother, SmoothingResult, StreamingSmoother,
        VaccineApproval,
        calculate_moving_average, calculate_moving_average_default, case_fatality_rate,
        daily_increments, group_by_month, normalize_by_population, normalize_series,
        normalize_with_scale, sort_newest_first,
    };
    pub use crate::dashboard::{
        CountryTimeline, TimelineConfig, build_timelines, global_stats,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod dashboard {
        pub use crate::dashboard::*;
    }
}
