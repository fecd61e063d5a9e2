//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the smoothing
//! and normalization algorithms: window means and rate scaling.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Means and sums over slices.
pub mod mean;

/// Per-capita and percentage scales.
pub mod rate;
