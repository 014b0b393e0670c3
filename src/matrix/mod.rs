//! Layer 4: Matrix
//!
//! # Purpose
//!
//! This layer provides the square-grid katas: generating the clockwise
//! spiral fill and rotating a grid 90 degrees in place.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Matrix ← You are here
//!   ↓
//! Layer 3: Sequence
//!   ↓
//! Layer 2: Digits
//!   ↓
//! Layer 1: Primitives
//! ```

/// Clockwise spiral fill.
pub mod spiral;

/// In-place 90-degree rotation.
pub mod rotate;

pub use rotate::rotate_clockwise;
pub use spiral::spiral_matrix;
