//! In-place 90-degree clockwise rotation of a square grid.
//!
//! ## Purpose
//!
//! This module rotates an N x N grid a quarter turn clockwise without
//! allocating a second grid: each step moves a 4-cycle of
//! rotationally-symmetric cells using a single temporary.
//!
//! ## Key concepts
//!
//! * **Ring walk**: Concentric rings are processed outside-in. For ring
//!   `s`, the top edge positions `s..n-1-s` (excluding the final corner,
//!   which the previous position's cycle already covers) each anchor one
//!   4-cycle.
//! * **4-cycle**: Under a clockwise quarter turn, `(s, j)` receives the
//!   value of `(n-1-j, s)`, which receives `(n-1-s, n-1-j)`, which
//!   receives `(j, n-1-s)`, which receives the original `(s, j)`.
//!
//! ## Invariants
//!
//! * Only O(1) extra storage is used.
//! * Odd and even sizes both rotate fully; the center cell of an odd-sized
//!   grid is untouched.
//! * Four applications restore the original grid.
//!
//! ## Non-goals
//!
//! * Squareness is an unchecked precondition; ragged or non-square input
//!   produces unspecified results (and may panic on indexing).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// ============================================================================
// Rotation
// ============================================================================

/// Rotate a square grid 90 degrees clockwise, in place.
///
/// Mutates the caller's grid through the `&mut` borrow; nothing is
/// returned and no second grid is allocated.
///
/// # Examples
///
/// ```rust
/// use katas::prelude::*;
///
/// let mut grid = vec![
///     vec![1, 2, 3],
///     vec![4, 5, 6],
///     vec![7, 8, 9],
/// ];
/// rotate_clockwise(&mut grid);
/// assert_eq!(grid, vec![
///     vec![7, 4, 1],
///     vec![8, 5, 2],
///     vec![9, 6, 3],
/// ]);
/// ```
pub fn rotate_clockwise<T: Copy>(grid: &mut [Vec<T>]) {
    let n = grid.len();

    let mut ring = 0;
    while 2 * ring < n {
        let last = n - 1 - ring;

        for j in ring..last {
            let top = grid[ring][j];
            grid[ring][j] = grid[n - 1 - j][ring];
            grid[n - 1 - j][ring] = grid[last][n - 1 - j];
            grid[last][n - 1 - j] = grid[j][last];
            grid[j][last] = top;
        }

        ring += 1;
    }
}
