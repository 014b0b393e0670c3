//! Tests for roman numeral conversion.
//!
//! ## Test Organization
//!
//! 1. **Ones Table** - 1..=9 including the subtractive forms
//! 2. **Tens** - Additive X prefixes
//! 3. **Combined** - Tens plus ones across the 1..=39 domain

use katas::prelude::*;

// ============================================================================
// Ones Table Tests
// ============================================================================

/// Test every ones digit, including the subtractive IV and IX.
#[test]
fn test_roman_ones() {
    assert_eq!(to_roman_numerals(1), "I");
    assert_eq!(to_roman_numerals(2), "II");
    assert_eq!(to_roman_numerals(3), "III");
    assert_eq!(to_roman_numerals(4), "IV");
    assert_eq!(to_roman_numerals(5), "V");
    assert_eq!(to_roman_numerals(6), "VI");
    assert_eq!(to_roman_numerals(7), "VII");
    assert_eq!(to_roman_numerals(8), "VIII");
    assert_eq!(to_roman_numerals(9), "IX");
}

// ============================================================================
// Tens Tests
// ============================================================================

/// Test exact multiples of ten.
#[test]
fn test_roman_tens() {
    assert_eq!(to_roman_numerals(10), "X");
    assert_eq!(to_roman_numerals(20), "XX");
    assert_eq!(to_roman_numerals(30), "XXX");
}

// ============================================================================
// Combined Tests
// ============================================================================

/// Test combined tens-and-ones numerals.
#[test]
fn test_roman_combined() {
    assert_eq!(to_roman_numerals(14), "XIV");
    assert_eq!(to_roman_numerals(19), "XIX");
    assert_eq!(to_roman_numerals(26), "XXVI");
    assert_eq!(to_roman_numerals(33), "XXXIII");
    assert_eq!(to_roman_numerals(39), "XXXIX");
}
