//! Length check - passwords below the minimum length lose a point.

use secrecy::{ExposeSecret, SecretString};

use super::CheckOutcome;

/// Minimum number of characters a password needs to earn the length point.
pub const MIN_LENGTH: usize = 12;

/// Checks if the password meets the minimum length requirement.
///
/// Length is counted in characters, not bytes. This is the only check
/// that reports a confirmation line on success.
pub fn length_check(password: &SecretString) -> CheckOutcome {
    if password.expose_secret().chars().count() >= MIN_LENGTH {
        CheckOutcome::pass_with("Length requirement met.")
    } else {
        CheckOutcome::fail(format!(
            "Password should be at least {} characters long.",
            MIN_LENGTH
        ))
    }
}
