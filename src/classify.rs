//! Character class checks for command arguments.
//!
//! ASCII only. Empty input is rejected: a missing word is never a valid number.

/// True if `s` is non-empty and every byte is an ASCII letter.
pub fn is_alphabetic(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic())
}

/// True if `s` is non-empty and every byte is an ASCII digit.
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
