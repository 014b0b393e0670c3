//! Chessboard geometry for the queen-capture kata.
//!
//! ## Purpose
//!
//! This module provides a minimal board [`Position`] type and the test for
//! whether a queen attacks a king on an otherwise empty 8x8 board.
//!
//! ## Design notes
//!
//! * **Signed coordinates**: Coordinates are `i32` so that deltas can be
//!   taken without underflow; callers are expected to pass 1-based board
//!   coordinates but nothing here depends on the 1..=8 range.
//! * **Geometry only**: No move generation, no occupancy, no board state.

// ============================================================================
// Data Structures
// ============================================================================

/// A square on the board, addressed by file (`x`) and rank (`y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// File coordinate.
    pub x: i32,

    /// Rank coordinate.
    pub y: i32,
}

impl Position {
    /// Create a position from file and rank coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Queen Capture Test
// ============================================================================

/// Whether a queen on `queen` can capture a king on `king` in one move.
///
/// A queen attacks along its rank, its file, and both diagonals. Occupying
/// the same square counts as attacking (the deltas are all zero).
///
/// # Examples
///
/// ```rust
/// use katas::prelude::*;
///
/// assert!(can_queen_capture_king(Position::new(1, 1), Position::new(5, 5)));
/// assert!(can_queen_capture_king(Position::new(2, 1), Position::new(2, 8)));
/// assert!(!can_queen_capture_king(Position::new(1, 1), Position::new(2, 8)));
/// ```
#[inline]
pub fn can_queen_capture_king(queen: Position, king: Position) -> bool {
    let dx = (queen.x - king.x).abs();
    let dy = (queen.y - king.y).abs();

    dx == 0 || dy == 0 || dx == dy
}
