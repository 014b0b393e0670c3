//! Tests for arithmetic digit containment.
//!
//! ## Test Organization
//!
//! 1. **Containment** - Digits present at various positions
//! 2. **Absence** - Digits not present
//! 3. **Edge Cases** - Zero handling and single digits

use katas::prelude::*;

// ============================================================================
// Containment Tests
// ============================================================================

/// Test digits present in the middle, front, and back of the number.
#[test]
fn test_contains_digit_present() {
    assert!(contains_digit(123450, 5));
    assert!(contains_digit(123450, 1));
    assert!(contains_digit(123450, 0));
}

// ============================================================================
// Absence Tests
// ============================================================================

/// Test digits absent from the number.
#[test]
fn test_contains_digit_absent() {
    assert!(!contains_digit(12345, 0));
    assert!(!contains_digit(12345, 6));
    assert!(!contains_digit(999, 8));
}

// ============================================================================
// Edge Cases Tests
// ============================================================================

/// Test single-digit numbers.
#[test]
fn test_contains_digit_single() {
    assert!(contains_digit(7, 7));
    assert!(!contains_digit(7, 1));
}

/// Test the number zero.
///
/// Zero has exactly one digit, 0.
#[test]
fn test_contains_digit_zero() {
    assert!(contains_digit(0, 0));
    assert!(!contains_digit(0, 5));
}

/// Test an out-of-range digit argument.
///
/// Values above 9 can never match a decimal digit.
#[test]
fn test_contains_digit_out_of_range() {
    assert!(!contains_digit(123450, 10));
}
