//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a smoothing pass by coordinating between
//! primitives (missing-value policy, errors) and algorithms (moving
//! average). It also owns validation and the result types.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Smoothing execution engine.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for smoothing operations.
pub mod output;
