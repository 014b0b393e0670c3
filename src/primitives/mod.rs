//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the scalar predicates and the chessboard position
//! type. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Matrix
//!   ↓
//! Layer 3: Sequence
//!   ↓
//! Layer 2: Digits
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Scalar predicates over numbers.
pub mod predicates;

/// Chessboard geometry.
pub mod board;

pub use board::{can_queen_capture_king, Position};
pub use predicates::{is_isosceles_triangle, is_positive, max_of_three};
