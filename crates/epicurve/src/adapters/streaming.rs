//! Streaming adapter for chunked moving-average smoothing.
//!
//! ## Purpose
//!
//! This module provides the streaming execution adapter. It consumes a
//! series in arbitrary chunks (pages of an API response, rows read from a
//! cursor) and emits exactly the values the batch adapter would produce for
//! the whole series, without ever holding more than one window of history.
//!
//! ## Design notes
//!
//! * **History**: Keeps the last `window` observations in a `VecDeque`.
//! * **Withholding**: Nothing is emitted until `window` observations have
//!   been seen, because a series shorter than the window is passed through
//!   unchanged and that cannot be known earlier.
//! * **Finalization**: `finalize` flushes withheld observations unchanged
//!   and ends the series; the next chunk starts a new one at offset zero.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Chunked Processing**: Chunk boundaries never affect the output.
//! * **Offsets**: Every emitted block carries the index of its first value
//!   in the full series.
//! * **Carry-over**: The missing-value policy sees across chunk boundaries.
//!
//! ## Invariants
//!
//! * Concatenating all emitted blocks and the finalized block gives the
//!   batch result for the concatenated input.
//! * History never exceeds `window` observations.
//!
//! ## Non-goals
//!
//! * This adapter does not compute residual diagnostics.
//! * This adapter requires chunks to be provided in chronological order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{collections::VecDeque, vec::Vec};
#[cfg(feature = "std")]
use std::collections::VecDeque;

// External dependencies
use core::mem::take;
use num_traits::Float;
use tracing::{debug, trace};

// Internal dependencies
use crate::algorithms::moving_average::{DEFAULT_WINDOW, moving_average};
use crate::engine::validator::Validator;
use crate::math::mean::count_as;
use crate::primitives::errors::EpicurveError;
use crate::primitives::missing::MissingValuePolicy;

// ============================================================================
// Streaming Smoother Builder
// ============================================================================

/// Builder for streaming smoother.
#[derive(Debug, Clone)]
pub struct StreamingSmootherBuilder {
    /// Number of trailing observations averaged
    pub window: usize,

    /// Treatment of missing observations
    pub missing_values: MissingValuePolicy,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<EpicurveError>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl Default for StreamingSmootherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamingSmootherBuilder {
    /// Create a new streaming builder with default parameters.
    fn new() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            missing_values: MissingValuePolicy::default(),
            deferred_error: None,
            duplicate_param: None,
        }
    }

    /// Set the number of trailing observations averaged.
    pub fn window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Set the missing-value policy.
    pub fn missing_values(mut self, policy: MissingValuePolicy) -> Self {
        self.missing_values = policy;
        self
    }

    /// Build the streaming smoother.
    pub fn build<T: Float>(self) -> Result<StreamingSmoother<T>, EpicurveError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_window(self.window)?;

        debug!(window = self.window, "built streaming smoother");

        let window = self.window;
        Ok(StreamingSmoother {
            config: self,
            history: VecDeque::with_capacity(window),
            withheld: Vec::with_capacity(window),
            seen: 0,
            emitted: 0,
        })
    }
}

// ============================================================================
// Streaming Output
// ============================================================================

/// A block of smoothed values emitted by the streaming smoother.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChunkOutput<T> {
    /// Index of the first value of `smoothed` in the full series.
    pub offset: usize,

    /// Smoothed values, possibly empty while the warm-up is withheld.
    pub smoothed: Vec<T>,
}

impl<T> ChunkOutput<T> {
    /// Whether nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.smoothed.is_empty()
    }
}

// ============================================================================
// Streaming Smoother
// ============================================================================

/// Streaming moving-average smoother.
#[derive(Debug, Clone)]
pub struct StreamingSmoother<T> {
    config: StreamingSmootherBuilder,
    history: VecDeque<T>,
    withheld: Vec<T>,
    seen: usize,
    emitted: usize,
}

impl<T: Float> StreamingSmoother<T> {
    /// Feed the next chunk of observations.
    ///
    /// A chunk is consumed atomically: on error none of its observations
    /// are kept.
    pub fn process_chunk(&mut self, chunk: &[T]) -> Result<ChunkOutput<T>, EpicurveError> {
        let window = self.config.window;
        let offset = self.emitted;

        let mut resolved = Vec::with_capacity(chunk.len());
        let mut last = self.history.back().copied();
        for (i, &value) in chunk.iter().enumerate() {
            let value = self
                .config
                .missing_values
                .resolve(value, last, self.seen + i)?;
            resolved.push(value);
            last = Some(value);
        }

        let mut out = Vec::with_capacity(chunk.len());
        for value in resolved {
            self.history.push_back(value);
            if self.history.len() > window {
                self.history.pop_front();
            }
            self.seen += 1;

            if self.seen < window {
                self.withheld.push(value);
            } else if self.seen == window {
                // Warm-up complete: the history is the whole series so far.
                self.withheld.clear();
                let (front, back) = self.history.as_slices();
                let mut warm_up = Vec::with_capacity(window);
                warm_up.extend_from_slice(front);
                warm_up.extend_from_slice(back);
                out.extend(moving_average(&warm_up, window));
            } else {
                let sum = self.history.iter().fold(T::zero(), |acc, &v| acc + v);
                out.push(sum / count_as(window));
            }
        }

        self.emitted += out.len();
        trace!(
            chunk_len = chunk.len(),
            emitted = out.len(),
            seen = self.seen,
            "processed chunk"
        );

        Ok(ChunkOutput {
            offset,
            smoothed: out,
        })
    }

    /// Flush observations still withheld at the end of the series.
    ///
    /// A series shorter than the window is returned unchanged here. The
    /// smoother is left empty, ready for the next series.
    pub fn finalize(&mut self) -> ChunkOutput<T> {
        let offset = self.emitted;
        let smoothed = take(&mut self.withheld);

        if !smoothed.is_empty() {
            debug!(
                len = smoothed.len(),
                window = self.config.window,
                "series ended before window filled, passing through"
            );
        }

        self.reset();
        ChunkOutput { offset, smoothed }
    }

    /// Number of observations consumed so far.
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Number of smoothed values emitted so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Clear all state so a new series can be processed.
    pub fn reset(&mut self) {
        self.history.clear();
        self.withheld.clear();
        self.seen = 0;
        self.emitted = 0;
    }
}
