//! Layer 3: Sequence
//!
//! # Purpose
//!
//! This layer provides katas over linear sequences: searches and the
//! palindrome check, the balance-index scan, the in-place three-way
//! quicksort, and the cyclic character shuffle.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Matrix
//!   ↓
//! Layer 3: Sequence ← You are here
//!   ↓
//! Layer 2: Digits
//!   ↓
//! Layer 1: Primitives
//! ```

/// Linear searches and the palindrome check.
pub mod search;

/// In-place three-way quicksort.
pub mod sort;

/// Cyclic even/odd character shuffle.
pub mod shuffle;

pub use search::{balance_index, index_of, is_palindrome};
pub use shuffle::shuffle_chars;
pub use sort::sort_ascending;
