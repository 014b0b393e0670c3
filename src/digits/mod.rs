//! Layer 2: Digits
//!
//! # Purpose
//!
//! This layer provides katas that treat a number as an ordered sequence of
//! decimal digits: roman-numeral conversion, digit spelling, digit
//! containment, and the next-bigger-number permutation successor.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Matrix
//!   ↓
//! Layer 3: Sequence
//!   ↓
//! Layer 2: Digits ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Roman numeral conversion.
pub mod roman;

/// Digit-to-word spelling.
pub mod words;

/// Arithmetic digit scanning.
pub mod scan;

/// Next-bigger-number permutation successor.
pub mod successor;

pub use roman::to_roman_numerals;
pub use scan::contains_digit;
pub use successor::next_bigger_number;
pub use words::spell_out_number;
