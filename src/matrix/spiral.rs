//! Clockwise spiral fill of a square grid.
//!
//! ## Purpose
//!
//! This module generates the `size x size` grid whose cells hold
//! `1..=size*size` laid out in a clockwise inward spiral starting at the
//! top-left corner.
//!
//! ## Key concepts
//!
//! * **Ring**: The cells at distance `s` from the grid's border. Rings are
//!   walked outside-in; within a ring the four edges are walked top
//!   (left to right), right (top to bottom), bottom (right to left), and
//!   left (bottom to top).
//! * **Write-once cells**: Corner cells sit on two edges; a cell takes the
//!   running count only if it is still unwritten, so each value is placed
//!   exactly once.
//!
//! ## Invariants
//!
//! * The flattened result is exactly the set `{1, .., size*size}`.
//! * `size == 0` yields an empty grid.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// ============================================================================
// Spiral Generation
// ============================================================================

/// Generate the clockwise spiral grid of `1..=size*size`.
///
/// Returns a new owned grid; the caller's data is never aliased.
///
/// # Examples
///
/// ```rust
/// use katas::prelude::*;
///
/// assert_eq!(spiral_matrix(3), vec![
///     vec![1, 2, 3],
///     vec![8, 9, 4],
///     vec![7, 6, 5],
/// ]);
/// assert!(spiral_matrix(0).is_empty());
/// ```
pub fn spiral_matrix(size: usize) -> Vec<Vec<u64>> {
    let mut grid = vec![vec![0u64; size]; size];
    let mut count = 1u64;

    let mut ring = 0;
    while 2 * ring < size {
        let last = size - 1 - ring;

        // Top edge, left to right.
        for j in ring..=last {
            fill_cell(&mut grid[ring][j], &mut count);
        }
        // Right edge, top to bottom.
        for i in ring..=last {
            fill_cell(&mut grid[i][last], &mut count);
        }
        // Bottom edge, right to left.
        for j in (ring..=last).rev() {
            fill_cell(&mut grid[last][j], &mut count);
        }
        // Left edge, bottom to top.
        for i in (ring..=last).rev() {
            fill_cell(&mut grid[i][ring], &mut count);
        }

        ring += 1;
    }

    grid
}

/// Write the running count into a still-unwritten cell and advance it.
#[inline]
fn fill_cell(cell: &mut u64, count: &mut u64) {
    if *cell == 0 {
        *cell = *count;
        *count += 1;
    }
}
