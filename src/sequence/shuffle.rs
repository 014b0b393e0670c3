//! Cyclic even/odd character shuffle.
//!
//! ## Purpose
//!
//! This module applies the even/odd interleave shuffle to a string: each
//! round keeps the characters at even indices in order, followed by the
//! characters at odd indices, and that concatenation becomes the next
//! round's string.
//!
//! ## Key concepts
//!
//! * **Round**: `"012345" -> "024135"` (evens `024`, then odds `135`).
//! * **Period**: The shuffle permutes a fixed set of positions, so some
//!   number of rounds P returns the original string.
//! * **Cycle reduction**: Once the string first returns to its original
//!   value after P rounds, the remaining work collapses to
//!   `iterations mod P` further rounds. Total work is O(length x P)
//!   regardless of how large `iterations` is.
//!
//! ## Invariants
//!
//! * Every round's output is a permutation of the input characters.
//! * `iterations == 0` returns the input unchanged.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

// ============================================================================
// Shuffle
// ============================================================================

/// Apply `iterations` rounds of the even/odd shuffle to `text`.
///
/// Large iteration counts are cheap: as soon as the string cycles back to
/// its original value the remaining count is reduced modulo the cycle
/// length.
///
/// # Examples
///
/// ```rust
/// use katas::prelude::*;
///
/// assert_eq!(shuffle_chars("012345", 1), "024135");
/// assert_eq!(shuffle_chars("012345", 3), "031425");
/// assert_eq!(shuffle_chars("qwerty", 2), "qtrewy");
/// ```
pub fn shuffle_chars(text: &str, iterations: u64) -> String {
    let original: Vec<char> = text.chars().collect();
    let mut current = original.clone();

    let mut remaining = iterations;
    let mut rounds = 0u64;

    while remaining > 0 {
        current = shuffle_round(&current);
        remaining -= 1;
        rounds += 1;

        // First return to the original closes the cycle; `rounds` is the
        // period, and only `iterations mod rounds` of the remaining
        // applications can change the outcome.
        if remaining > 0 && current == original {
            remaining = iterations % rounds;
        }
    }

    current.into_iter().collect()
}

// ============================================================================
// Single Round
// ============================================================================

/// One round: characters at even indices, then characters at odd indices.
fn shuffle_round(chars: &[char]) -> Vec<char> {
    let mut next = Vec::with_capacity(chars.len());

    next.extend(chars.iter().copied().step_by(2));
    if chars.len() > 1 {
        next.extend(chars[1..].iter().copied().step_by(2));
    }

    next
}
