//! Character class alphabets used for password generation.
//!
//! The four classes are pairwise disjoint; their union is the full
//! generation pool.

use std::sync::LazyLock;

/// Latin lowercase letters.
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Latin uppercase letters.
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Decimal digits.
pub const DIGITS: &[u8] = b"0123456789";

/// ASCII punctuation.
pub const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Union of the four classes, built from the class constants so they stay
/// the single source of truth.
pub(crate) static FULL_ALPHABET: LazyLock<Vec<u8>> =
    LazyLock::new(|| [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS].concat());
