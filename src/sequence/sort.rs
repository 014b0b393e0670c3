//! In-place three-way quicksort.
//!
//! ## Purpose
//!
//! This module sorts a numeric slice ascending without reaching for the
//! standard library's sort routines; the algorithm is the kata. It is a
//! quicksort whose partition step is the Dutch national flag: one pass
//! splits the subrange into less-than, equal-to, and greater-than bands
//! around the pivot.
//!
//! ## Design notes
//!
//! * **Middle pivot**: The pivot is the middle element of each subrange,
//!   so already-sorted input does not degenerate.
//! * **Equal band excluded**: Recursion covers only the outer bands. The
//!   equal band is final, which keeps inputs with many duplicate values
//!   away from the quadratic worst case.
//! * **Subslice recursion**: Each level recurses on two disjoint
//!   subslices; the equal band is non-empty, so both strictly shrink.
//!
//! ## Invariants
//!
//! * The output is a permutation of the input.
//! * The output is non-decreasing under `PartialOrd`.
//! * Stability is not provided; equal elements may be reordered.
//!
//! ## Non-goals
//!
//! * NaN handling: float slices containing NaN have an unspecified order.

// ============================================================================
// Sorting
// ============================================================================

/// Sort a slice ascending, in place.
///
/// Mutates the caller's slice; nothing is returned. Correct on duplicates
/// and negative values.
///
/// # Examples
///
/// ```rust
/// use katas::prelude::*;
///
/// let mut values = vec![-2, 9, 5, -3];
/// sort_ascending(&mut values);
/// assert_eq!(values, vec![-3, -2, 5, 9]);
/// ```
pub fn sort_ascending<T: PartialOrd + Copy>(values: &mut [T]) {
    if values.len() < 2 {
        return;
    }

    let pivot = values[values.len() / 2];
    let (less_end, greater_start) = partition_three_way(values, pivot);

    sort_ascending(&mut values[..less_end]);
    sort_ascending(&mut values[greater_start..]);
}

// ============================================================================
// Partitioning
// ============================================================================

/// Partition a slice into `< pivot`, `== pivot`, and `> pivot` bands in a
/// single pass of swaps.
///
/// Returns `(less_end, greater_start)`: the equal band occupies
/// `less_end..greater_start` and is non-empty whenever the pivot value
/// occurs in the slice.
fn partition_three_way<T: PartialOrd + Copy>(values: &mut [T], pivot: T) -> (usize, usize) {
    let mut less_end = 0;
    let mut cursor = 0;
    let mut greater_start = values.len();

    while cursor < greater_start {
        if values[cursor] < pivot {
            values.swap(less_end, cursor);
            less_end += 1;
            cursor += 1;
        } else if values[cursor] > pivot {
            greater_start -= 1;
            values.swap(cursor, greater_start);
        } else {
            cursor += 1;
        }
    }

    (less_end, greater_start)
}
