//! Cryptographically secure password generation.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use secrecy::SecretString;

use crate::alphabet::{DIGITS, FULL_ALPHABET, LOWERCASE, SYMBOLS, UPPERCASE};
use crate::sections::MIN_LENGTH;

/// Default length for generated passwords, aligned with the evaluator's
/// minimum.
pub const DEFAULT_LENGTH: usize = MIN_LENGTH;

/// Shortest password that can hold one character from every class.
const STRUCTURAL_MIN: usize = 4;

/// Generates a random password using the operating system's secure
/// random source.
///
/// The result always contains at least one lowercase letter, one
/// uppercase letter, one digit and one symbol. Lengths below 4 are
/// clamped to 4, since shorter passwords cannot hold all four classes;
/// no upper bound is enforced, callers own sane upper limits. If the OS
/// random source is unavailable the process aborts rather than degrading
/// to a weaker generator.
///
/// # Arguments
/// * `length` - Requested password length (see [`DEFAULT_LENGTH`])
///
/// # Returns
/// A freshly generated password of `max(4, length)` characters.
pub fn generate_password(length: usize) -> SecretString {
    generate_password_with(&mut OsRng, length)
}

/// Generates a password from a caller-supplied random source.
///
/// The `CryptoRng` bound keeps statistical generators out; tests inject a
/// seeded `ChaCha20Rng` for deterministic runs.
pub fn generate_password_with<R>(rng: &mut R, length: usize) -> SecretString
where
    R: Rng + CryptoRng,
{
    let length = if length < STRUCTURAL_MIN {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            "requested length {} raised to structural minimum {}",
            length,
            STRUCTURAL_MIN
        );
        STRUCTURAL_MIN
    } else {
        length
    };

    // One guaranteed character per class, then uniform draws from the
    // whole pool.
    let mut chars: Vec<u8> = Vec::with_capacity(length);
    for class in [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS] {
        chars.push(class[rng.gen_range(0..class.len())]);
    }
    while chars.len() < length {
        chars.push(FULL_ALPHABET[rng.gen_range(0..FULL_ALPHABET.len())]);
    }

    // Uniform shuffle so the guaranteed characters do not sit at the
    // front in class order.
    chars.shuffle(rng);

    SecretString::new(chars.into_iter().map(char::from).collect::<String>().into())
}
