//! Scalar predicates over numbers.
//!
//! ## Purpose
//!
//! This module provides the simplest katas in the crate: sign checks,
//! three-way maximum, and the isosceles-triangle test. Each is a pure
//! function over scalar inputs with no allocation.
//!
//! ## Design notes
//!
//! * **Generics**: Generic over `num_traits` bounds rather than concrete
//!   integer or float types, so the same predicate serves `i32`, `u64`,
//!   `f64`, and friends.
//! * **Comparisons only**: Built from pairwise comparisons and addition;
//!   no `min`/`max` helpers, no branching tables.
//!
//! ## Invariants
//!
//! * Inputs are assumed well-formed per each function's contract; NaN
//!   inputs to the float instantiations produce unspecified results.

// External dependencies
use core::ops::Add;
use num_traits::Zero;

// ============================================================================
// Sign Check
// ============================================================================

/// Whether a number is positive. Zero counts as positive.
///
/// # Examples
///
/// ```rust
/// use katas::prelude::*;
///
/// assert!(is_positive(10));
/// assert!(is_positive(0));
/// assert!(!is_positive(-5));
/// ```
#[inline]
pub fn is_positive<T: Zero + PartialOrd>(number: T) -> bool {
    number >= T::zero()
}

// ============================================================================
// Three-Way Maximum
// ============================================================================

/// The maximum of three numbers, by pairwise comparison.
///
/// When two arguments compare equal, the earlier one is returned; for
/// totally ordered types the distinction is unobservable.
///
/// # Examples
///
/// ```rust
/// use katas::prelude::*;
///
/// assert_eq!(max_of_three(1, 2, 3), 3);
/// assert_eq!(max_of_three(-5, 0, 5), 5);
/// ```
#[inline]
pub fn max_of_three<T: PartialOrd>(a: T, b: T, c: T) -> T {
    let ab = if a >= b { a } else { b };
    if ab >= c {
        ab
    } else {
        c
    }
}

// ============================================================================
// Isosceles Triangle Test
// ============================================================================

/// Whether side lengths `a`, `b`, `c` form an isosceles triangle.
///
/// A valid triangle requires all sides positive and every pair of sides to
/// sum to strictly more than the third; isosceles additionally requires at
/// least two equal sides. Degenerate inputs such as `(3, 0, 3)` or
/// `(2, 2, 5)` fail the validity check and return `false`.
///
/// # Examples
///
/// ```rust
/// use katas::prelude::*;
///
/// assert!(is_isosceles_triangle(2, 3, 2));
/// assert!(!is_isosceles_triangle(1, 2, 3));
/// assert!(!is_isosceles_triangle(2, 2, 5));
/// ```
pub fn is_isosceles_triangle<T>(a: T, b: T, c: T) -> bool
where
    T: Zero + PartialOrd + Add<Output = T> + Copy,
{
    let positive = a > T::zero() && b > T::zero() && c > T::zero();
    let triangle = a + b > c && a + c > b && b + c > a;
    let two_equal = a == b || b == c || a == c;

    positive && triangle && two_equal
}
