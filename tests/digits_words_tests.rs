//! Tests for digit-to-word spelling.
//!
//! ## Test Organization
//!
//! 1. **Basic Spelling** - Plain digit strings
//! 2. **Signs and Separators** - Minus, point, and comma handling
//! 3. **Edge Cases** - Empty and single-character inputs

use katas::prelude::*;

// ============================================================================
// Basic Spelling Tests
// ============================================================================

/// Test single digits and short digit strings.
#[test]
fn test_spell_plain_digits() {
    assert_eq!(spell_out_number("1"), "one");
    assert_eq!(spell_out_number("10"), "one zero");
    assert_eq!(spell_out_number("907"), "nine zero seven");
}

/// Test a string covering every digit word.
#[test]
fn test_spell_all_digits() {
    assert_eq!(
        spell_out_number("0123456789"),
        "zero one two three four five six seven eight nine"
    );
}

// ============================================================================
// Signs and Separators Tests
// ============================================================================

/// Test the minus sign.
#[test]
fn test_spell_minus() {
    assert_eq!(spell_out_number("-10"), "minus one zero");
}

/// Test that both decimal separators spell as "point".
#[test]
fn test_spell_decimal_separators() {
    assert_eq!(spell_out_number("10.5"), "one zero point five");
    assert_eq!(spell_out_number("10,5"), "one zero point five");
}

/// Test a longer mixed string from the kata.
#[test]
fn test_spell_mixed() {
    assert_eq!(spell_out_number("1950.2"), "one nine five zero point two");
}

// ============================================================================
// Edge Cases Tests
// ============================================================================

/// Test the empty string.
#[test]
fn test_spell_empty() {
    assert_eq!(spell_out_number(""), "");
}

/// Test a lone separator.
#[test]
fn test_spell_lone_separator() {
    assert_eq!(spell_out_number("-"), "minus");
    assert_eq!(spell_out_number("."), "point");
}
