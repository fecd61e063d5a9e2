//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-processing on top of the algorithms: residual
//! diagnostics for a smoothed series, epidemic curve analysis, and global
//! statistics across countries.
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
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Residual diagnostics.
pub mod diagnostics;

/// Peak, phases and fatality rate of a curve.
pub mod curve;

/// Cross-country aggregates.
pub mod global;
