//! # Katas — classic loop-and-condition algorithm exercises for Rust
//!
//! A collection of small, independent, stateless algorithm katas: numeric
//! predicates, digit and string manipulation, matrix transformations, and
//! sorting. Every function is a self-contained leaf with a single entry point
//! and a single return value; nothing here shares state, performs I/O, or
//! spawns work.
//!
//! ## Quick Start
//!
//! ```rust
//! use katas::prelude::*;
//!
//! // The clockwise inward spiral of 1..=n*n.
//! assert_eq!(spiral_matrix(3), vec![
//!     vec![1, 2, 3],
//!     vec![8, 9, 4],
//!     vec![7, 6, 5],
//! ]);
//!
//! // The smallest number strictly greater than the input that uses the
//! // same multiset of digits.
//! assert_eq!(next_bigger_number(12345), 12354);
//!
//! // In-place three-way quicksort.
//! let mut values = vec![-2, 9, 5, -3];
//! sort_ascending(&mut values);
//! assert_eq!(values, vec![-3, -2, 5, 9]);
//! ```
//!
//! ## Mutation discipline
//!
//! Most functions return a new owned value. The two exceptions mutate their
//! argument in place and say so in their documentation:
//! [`matrix::rotate_clockwise`] and [`sequence::sort_ascending`].
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support.
//! - Disable default features for `no_std` environments (requires `alloc`).
//!
//! ## `no_std` usage
//!
//! ```toml
//! [dependencies]
//! katas = { version = "0.1", default-features = false }
//! ```
//!
//! Everything in the crate works identically without `std`; the only
//! requirement is an allocator for `Vec` and `String` results.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - scalar predicates and the chessboard position type.
pub mod primitives;

// Layer 2: Digits - numbers viewed as ordered digit sequences.
pub mod digits;

// Layer 3: Sequence - searches, sorting, and shuffling over linear sequences.
pub mod sequence;

// Layer 4: Matrix - square-grid generation and transformation.
pub mod matrix;

// Standard katas prelude.
pub mod prelude {
    pub use crate::digits::{
        contains_digit, next_bigger_number, spell_out_number, to_roman_numerals,
    };
    pub use crate::matrix::{rotate_clockwise, spiral_matrix};
    pub use crate::primitives::{
        can_queen_capture_king, is_isosceles_triangle, is_positive, max_of_three, Position,
    };
    pub use crate::sequence::{
        balance_index, index_of, is_palindrome, shuffle_chars, sort_ascending,
    };
}
