//! Arithmetic digit scanning.
//!
//! ## Purpose
//!
//! This module checks whether a number contains a given decimal digit,
//! using division and remainder only; the number is never formatted as a
//! string.

// ============================================================================
// Digit Containment
// ============================================================================

/// Whether `number` contains the decimal digit `digit`.
///
/// Scans digits from least to most significant. `digit` is expected to be
/// in `0..=9`; other values simply never match.
///
/// # Examples
///
/// ```rust
/// use katas::prelude::*;
///
/// assert!(contains_digit(123450, 5));
/// assert!(contains_digit(123450, 0));
/// assert!(!contains_digit(12345, 0));
/// assert!(!contains_digit(12345, 6));
/// ```
pub fn contains_digit(number: u64, digit: u8) -> bool {
    let mut n = number;

    loop {
        if (n % 10) as u8 == digit {
            return true;
        }
        n /= 10;
        if n == 0 {
            return false;
        }
    }
}
