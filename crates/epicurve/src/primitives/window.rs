//! Windowing primitives for trailing moving averages.
//!
//! A trailing window ending at index `i` covers the `window` most recent
//! observations, or every observation seen so far while fewer than `window`
//! exist. That single rule gives both the expanding prefix and the fixed
//! trailing body of the smoothed series.

// Inclusive window bounds `[start, end]` over an observation sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TrailingWindow {
    // First index covered (inclusive).
    pub start: usize,

    // Last index covered (inclusive); always the point being smoothed.
    pub end: usize,
}

impl TrailingWindow {
    // Window ending at `idx` for a trailing width of `window`.
    #[inline]
    pub fn ending_at(idx: usize, window: usize) -> Self {
        debug_assert!(window >= 1, "ending_at: window must be at least 1");

        Self {
            start: (idx + 1).saturating_sub(window),
            end: idx,
        }
    }

    // Number of observations covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    // Borrow the covered observations.
    #[inline]
    pub fn slice<'a, T>(&self, data: &'a [T]) -> &'a [T] {
        &data[self.start..=self.end]
    }
}
