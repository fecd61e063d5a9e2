//! Trailing moving average with an expanding warm-up prefix.
//!
//! ## Purpose
//!
//! This module smooths an ordered sequence of daily observations by
//! averaging each point with its recent history. Day-to-day reporting noise
//! (weekend dips, batch uploads) is flattened while the output stays
//! aligned with the original date axis.
//!
//! ## Design notes
//!
//! * **Same length**: The output always has the length of the input.
//! * **Expanding prefix**: The first `window` points average everything seen
//!   so far instead of being dropped or left undefined.
//! * **Pass-through**: Series shorter than the window are returned unchanged.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! ```text
//! i <  w : result[i] = mean(data[0..=i])
//! i >= w : result[i] = mean(data[i-w+1..=i])
//! ```
//!
//! ## Invariants
//!
//! * Inputs are finite (checked by the engine before reaching this module).
//! * `window >= 1`.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs or resolve missing values.
//! * This module does not center the window around the point (no look-ahead).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::mean::{count_as, total};
use crate::primitives::window::TrailingWindow;

/// Default number of trailing observations (one week of daily reports).
pub const DEFAULT_WINDOW: usize = 7;

/// Smooth the observation at `idx` using the trailing window.
#[inline]
pub fn smooth_point<T: Float>(data: &[T], idx: usize, window: usize) -> T {
    let span = TrailingWindow::ending_at(idx, window);
    total(span.slice(data)) / count_as(span.len())
}

/// Smooth a whole series.
///
/// Returns the input unchanged when it holds fewer than `window` points.
pub fn moving_average<T: Float>(data: &[T], window: usize) -> Vec<T> {
    debug_assert!(window >= 1, "moving_average: window must be at least 1");

    if data.len() < window {
        return data.to_vec();
    }

    (0..data.len())
        .map(|idx| smooth_point(data, idx, window))
        .collect()
}

/// Number of leading points smoothed with an expanding window.
#[inline]
pub fn expanding_prefix_len(n: usize, window: usize) -> usize {
    if n < window { 0 } else { window }
}
