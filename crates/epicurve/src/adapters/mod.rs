//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing APIs that adapt the engine layer for
//! different execution modes:
//!
//! - **Batch**: Whole series in memory, single pass
//! - **Streaming**: Chunked input, output identical to batch
//! - **Online**: One observation at a time
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Batch adapter.
pub mod batch;

/// Streaming adapter for chunked input.
pub mod streaming;

/// Online adapter for observations arriving one at a time.
pub mod online;
