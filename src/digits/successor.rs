//! Next-bigger-number: the permutation successor of a digit sequence.
//!
//! ## Purpose
//!
//! This module finds the smallest integer strictly greater than the input
//! that is a permutation of the same decimal digits. It is the classical
//! next-lexicographic-permutation algorithm applied to the digit sequence.
//!
//! ## Key concepts
//!
//! 1. **Pivot**: The rightmost position whose digit is smaller than some
//!    digit to its right. Left of the pivot nothing changes.
//! 2. **Successor swap**: The smallest digit right of the pivot that is
//!    still greater than the pivot digit is swapped into the pivot.
//! 3. **Tail sort**: Everything right of the pivot is sorted ascending,
//!    making the tail the minimal arrangement of the remaining digits.
//!
//! ## Invariants
//!
//! * The output is a permutation of the input's digit multiset.
//! * The output is strictly greater than the input, and minimal among all
//!   greater permutations.
//! * If no greater permutation exists (digits non-increasing, including
//!   single-digit inputs), the input is returned unchanged.
//!
//! ## Non-goals
//!
//! * This module does not iterate permutations; it computes only the
//!   immediate successor.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// ============================================================================
// Permutation Successor
// ============================================================================

/// The smallest number strictly greater than `number` with the same digits.
///
/// Returns `number` unchanged when its digits are non-increasing (no
/// greater permutation exists). A trailing `0` participates in the tail
/// sort like any other digit, so it moves forward correctly:
/// `123450 -> 123504`.
///
/// # Examples
///
/// ```rust
/// use katas::prelude::*;
///
/// assert_eq!(next_bigger_number(12345), 12354);
/// assert_eq!(next_bigger_number(321321), 322113);
/// assert_eq!(next_bigger_number(90822), 92028);
/// assert_eq!(next_bigger_number(4321), 4321);
/// assert_eq!(next_bigger_number(7), 7);
/// ```
pub fn next_bigger_number(number: u64) -> u64 {
    let mut digits = split_digits(number);

    match pivot_position(&digits) {
        Some(pivot) => {
            let successor = smallest_greater_in_tail(&digits, pivot);
            digits.swap(pivot, successor);
            sort_tail_ascending(&mut digits[pivot + 1..]);
            join_digits(&digits)
        }
        None => number,
    }
}

// ============================================================================
// Internal Steps
// ============================================================================

/// Split a number into digits, most significant first.
fn split_digits(number: u64) -> Vec<u8> {
    let mut digits = Vec::new();
    let mut n = number;

    loop {
        digits.push((n % 10) as u8);
        n /= 10;
        if n == 0 {
            break;
        }
    }

    digits.reverse();
    digits
}

/// Reassemble digits (most significant first) into a number.
fn join_digits(digits: &[u8]) -> u64 {
    digits.iter().fold(0, |acc, &d| acc * 10 + u64::from(d))
}

/// The rightmost position with a strictly greater digit somewhere to its
/// right, or `None` if the digits are non-increasing end to end.
///
/// Because everything right of the pivot is non-increasing, it is enough
/// to compare each position with its immediate right neighbor.
fn pivot_position(digits: &[u8]) -> Option<usize> {
    (0..digits.len().saturating_sub(1))
        .rev()
        .find(|&i| digits[i] < digits[i + 1])
}

/// Position of the smallest digit right of `pivot` that is strictly
/// greater than the pivot digit.
///
/// The tail is non-increasing, so the first qualifying digit found when
/// scanning from the right end is the smallest one.
fn smallest_greater_in_tail(digits: &[u8], pivot: usize) -> usize {
    let mut i = digits.len() - 1;
    while digits[i] <= digits[pivot] {
        i -= 1;
    }
    i
}

/// Sort a digit slice ascending by counting occurrences per digit value.
fn sort_tail_ascending(tail: &mut [u8]) {
    let mut counts = [0usize; 10];
    for &d in tail.iter() {
        counts[d as usize] += 1;
    }

    let mut write = 0;
    for (digit, &count) in counts.iter().enumerate() {
        for _ in 0..count {
            tail[write] = digit as u8;
            write += 1;
        }
    }
}
