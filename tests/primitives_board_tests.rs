//! Tests for the queen-capture kata.
//!
//! ## Test Organization
//!
//! 1. **Attacking Lines** - Rank, file, and both diagonals
//! 2. **Non-Attacking Squares** - Knight-ish offsets and far squares
//! 3. **Edge Cases** - Same square, board corners

use katas::prelude::*;

// ============================================================================
// Attacking Lines Tests
// ============================================================================

/// Test capture along the main diagonal.
#[test]
fn test_queen_captures_on_diagonal() {
    assert!(can_queen_capture_king(
        Position::new(1, 1),
        Position::new(5, 5)
    ));
}

/// Test capture along the anti-diagonal.
#[test]
fn test_queen_captures_on_anti_diagonal() {
    assert!(can_queen_capture_king(
        Position::new(1, 8),
        Position::new(8, 1)
    ));
}

/// Test capture along a file.
#[test]
fn test_queen_captures_on_file() {
    assert!(can_queen_capture_king(
        Position::new(2, 1),
        Position::new(2, 8)
    ));
}

/// Test capture along a rank.
#[test]
fn test_queen_captures_on_rank() {
    assert!(can_queen_capture_king(
        Position::new(3, 4),
        Position::new(7, 4)
    ));
}

// ============================================================================
// Non-Attacking Squares Tests
// ============================================================================

/// Test squares off every line from the queen.
#[test]
fn test_queen_misses_off_line() {
    assert!(!can_queen_capture_king(
        Position::new(1, 1),
        Position::new(2, 8)
    ));
    assert!(!can_queen_capture_king(
        Position::new(1, 1),
        Position::new(3, 2)
    ));
}

// ============================================================================
// Edge Cases Tests
// ============================================================================

/// Test that the same square counts as attacking.
///
/// All deltas are zero, which lies on every line through the queen.
#[test]
fn test_queen_same_square() {
    assert!(can_queen_capture_king(
        Position::new(4, 4),
        Position::new(4, 4)
    ));
}

/// Test corner-to-corner capture.
#[test]
fn test_queen_corner_to_corner() {
    assert!(can_queen_capture_king(
        Position::new(1, 1),
        Position::new(8, 8)
    ));
}
