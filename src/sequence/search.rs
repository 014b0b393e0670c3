//! Linear searches and the palindrome check.
//!
//! ## Purpose
//!
//! This module provides the scan katas: first occurrence of a character,
//! the two-ended palindrome check, and the balance index of a numeric
//! slice.
//!
//! ## Design notes
//!
//! * **Option over sentinels**: "Not found" is `None`, not `-1`.
//! * **Char positions**: [`index_of`] reports the character position, not
//!   the byte offset, so multi-byte characters count as one.
//! * **Balance index in O(n)**: A total-sum plus running-left-sum pass
//!   replaces the quadratic rescan; outputs are identical. The comparison
//!   is written as `2*left + pivot == total` so unsigned element types
//!   never subtract.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::ops::Add;
use num_traits::Zero;

// ============================================================================
// First Occurrence
// ============================================================================

/// Character position of the first occurrence of `letter`, or `None`.
///
/// # Examples
///
/// ```rust
/// use katas::prelude::*;
///
/// assert_eq!(index_of("qwerty", 'q'), Some(0));
/// assert_eq!(index_of("qwerty", 'e'), Some(2));
/// assert_eq!(index_of("qwerty", 'Q'), None);
/// ```
#[inline]
pub fn index_of(text: &str, letter: char) -> Option<usize> {
    text.chars().position(|c| c == letter)
}

// ============================================================================
// Palindrome Check
// ============================================================================

/// Whether a string reads the same forwards and backwards.
///
/// Compares characters from both ends inward and stops at the first
/// mismatch.
///
/// # Examples
///
/// ```rust
/// use katas::prelude::*;
///
/// assert!(is_palindrome("abcba"));
/// assert!(is_palindrome("0123210"));
/// assert!(!is_palindrome("qweqwe"));
/// ```
pub fn is_palindrome(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();

    for i in 0..n / 2 {
        if chars[i] != chars[n - 1 - i] {
            return false;
        }
    }

    true
}

// ============================================================================
// Balance Index
// ============================================================================

/// Index whose left-side sum equals its right-side sum, or `None`.
///
/// The element at the returned index belongs to neither side. The leftmost
/// qualifying index is returned.
///
/// # Examples
///
/// ```rust
/// use katas::prelude::*;
///
/// assert_eq!(balance_index(&[1, 2, 5, 3, 0]), Some(2));
/// assert_eq!(balance_index(&[2, 3, 9, 5]), Some(2));
/// assert_eq!(balance_index(&[1, 2, 3, 4, 5]), None);
/// ```
pub fn balance_index<T>(values: &[T]) -> Option<usize>
where
    T: Zero + Add<Output = T> + PartialEq + Copy,
{
    let mut total = T::zero();
    for &v in values {
        total = total + v;
    }

    let mut left = T::zero();
    for (i, &v) in values.iter().enumerate() {
        // right = total - left - v, so left == right iff 2*left + v == total
        if left + left + v == total {
            return Some(i);
        }
        left = left + v;
    }

    None
}
