//! Roman numeral conversion for small numbers.
//!
//! ## Purpose
//!
//! This module converts an integer in `1..=39` to its roman numeral
//! representation: additive `X`s for the tens, plus a lookup table for the
//! ones digit carrying the subtractive `IV`/`IX` forms.
//!
//! ## Invariants
//!
//! * The documented domain is `1..=39`; larger inputs still produce a
//!   string of `X`s plus the ones table, which is not a valid numeral
//!   beyond 39 (`L` is never emitted).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// ============================================================================
// Lookup Table
// ============================================================================

/// Numeral for each ones digit, including the subtractive forms.
const ONES: [&str; 10] = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];

// ============================================================================
// Conversion
// ============================================================================

/// Convert a number in `1..=39` to roman numerals.
///
/// # Examples
///
/// ```rust
/// use katas::prelude::*;
///
/// assert_eq!(to_roman_numerals(1), "I");
/// assert_eq!(to_roman_numerals(10), "X");
/// assert_eq!(to_roman_numerals(26), "XXVI");
/// ```
pub fn to_roman_numerals(number: u32) -> String {
    let mut numeral = String::new();

    for _ in 0..number / 10 {
        numeral.push('X');
    }
    numeral.push_str(ONES[(number % 10) as usize]);

    numeral
}
