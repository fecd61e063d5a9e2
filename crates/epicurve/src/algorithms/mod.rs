//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the core epidemic-curve algorithms: trailing
//! moving averages, per-capita normalization, and aggregation of cumulative
//! totals into daily and monthly new counts.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Trailing moving average.
pub mod moving_average;

/// Population normalization.
pub mod normalization;

/// Daily and monthly aggregation of cumulative series.
pub mod aggregation;
