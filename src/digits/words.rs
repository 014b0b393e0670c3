//! Digit-to-word spelling of a number string.
//!
//! ## Purpose
//!
//! This module spells out the characters of a numeric string as
//! space-separated English words: digits become their names, `-` becomes
//! "minus", and both `.` and `,` become "point".
//!
//! ## Design notes
//!
//! * **Character-driven**: The input is walked as characters, not parsed as
//!   a number, so arbitrarily long digit strings work unchanged.
//! * **Unrecognized characters**: Contribute an empty word, but the
//!   separating space between positions is still emitted.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// ============================================================================
// Word Lookup
// ============================================================================

/// Word for a single character of a numeric string.
fn word_for(c: char) -> &'static str {
    match c {
        '0' => "zero",
        '1' => "one",
        '2' => "two",
        '3' => "three",
        '4' => "four",
        '5' => "five",
        '6' => "six",
        '7' => "seven",
        '8' => "eight",
        '9' => "nine",
        '-' => "minus",
        '.' | ',' => "point",
        _ => "",
    }
}

// ============================================================================
// Spelling
// ============================================================================

/// Spell out a numeric string, one word per character.
///
/// # Examples
///
/// ```rust
/// use katas::prelude::*;
///
/// assert_eq!(spell_out_number("1"), "one");
/// assert_eq!(spell_out_number("-10"), "minus one zero");
/// assert_eq!(spell_out_number("10,5"), "one zero point five");
/// assert_eq!(spell_out_number("1950.2"), "one nine five zero point two");
/// ```
pub fn spell_out_number(number: &str) -> String {
    let mut spelled = String::new();
    let mut chars = number.chars().peekable();

    while let Some(c) = chars.next() {
        spelled.push_str(word_for(c));
        if chars.peek().is_some() {
            spelled.push(' ');
        }
    }

    spelled
}
