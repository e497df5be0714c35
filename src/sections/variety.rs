//! Character variety checks - lowercase, uppercase, digits, symbols.
//!
//! One point each. Failures report what is missing; passes stay silent.

use secrecy::{ExposeSecret, SecretString};

use super::CheckOutcome;

/// Checks for at least one Latin lowercase letter.
pub fn lowercase_check(password: &SecretString) -> CheckOutcome {
    if password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_lowercase())
    {
        CheckOutcome::pass()
    } else {
        CheckOutcome::fail("Missing lowercase letter.")
    }
}

/// Checks for at least one Latin uppercase letter.
pub fn uppercase_check(password: &SecretString) -> CheckOutcome {
    if password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_uppercase())
    {
        CheckOutcome::pass()
    } else {
        CheckOutcome::fail("Missing uppercase letter.")
    }
}

/// Checks for at least one decimal digit.
pub fn digit_check(password: &SecretString) -> CheckOutcome {
    if password.expose_secret().chars().any(|c| c.is_ascii_digit()) {
        CheckOutcome::pass()
    } else {
        CheckOutcome::fail("Missing digit.")
    }
}

/// Checks for at least one symbol.
///
/// A symbol is anything that is neither ASCII alphanumeric nor whitespace.
/// Wider than the generation alphabet: punctuation the generator never
/// emits still counts.
pub fn symbol_check(password: &SecretString) -> CheckOutcome {
    if password
        .expose_secret()
        .chars()
        .any(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace())
    {
        CheckOutcome::pass()
    } else {
        CheckOutcome::fail("Missing symbol.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_lowercase_check_missing() {
        let outcome = lowercase_check(&secret("UPPERCASE123!"));
        assert!(!outcome.passed);
        assert_eq!(outcome.feedback, Some("Missing lowercase letter.".to_string()));
    }

    #[test]
    fn test_lowercase_check_present() {
        let outcome = lowercase_check(&secret("lowercase"));
        assert!(outcome.passed);
        assert_eq!(outcome.feedback, None);
    }

    #[test]
    fn test_uppercase_check_missing() {
        let outcome = uppercase_check(&secret("lowercase123!"));
        assert!(!outcome.passed);
        assert_eq!(outcome.feedback, Some("Missing uppercase letter.".to_string()));
    }

    #[test]
    fn test_uppercase_check_present() {
        let outcome = uppercase_check(&secret("Uppercase"));
        assert!(outcome.passed);
    }

    #[test]
    fn test_digit_check_missing() {
        let outcome = digit_check(&secret("NoDigits!"));
        assert!(!outcome.passed);
        assert_eq!(outcome.feedback, Some("Missing digit.".to_string()));
    }

    #[test]
    fn test_digit_check_present() {
        let outcome = digit_check(&secret("C0ntains"));
        assert!(outcome.passed);
    }

    #[test]
    fn test_symbol_check_missing() {
        let outcome = symbol_check(&secret("NoSymbols123"));
        assert!(!outcome.passed);
        assert_eq!(outcome.feedback, Some("Missing symbol.".to_string()));
    }

    #[test]
    fn test_symbol_check_present() {
        let outcome = symbol_check(&secret("With!Symbol"));
        assert!(outcome.passed);
    }

    #[test]
    fn test_symbol_check_accepts_punctuation_outside_generation_alphabet() {
        // Not in SYMBOLS, still neither alphanumeric nor whitespace.
        assert!(symbol_check(&secret("abc€def")).passed);
        assert!(symbol_check(&secret("abc§def")).passed);
    }

    #[test]
    fn test_symbol_check_ignores_whitespace() {
        assert!(!symbol_check(&secret("abc DEF\t123")).passed);
    }

    #[test]
    fn test_latin_checks_ignore_accented_letters() {
        // Outside [a-z]/[A-Z]; they count as symbols instead.
        assert!(!lowercase_check(&secret("ÄÖÜ123")).passed);
        assert!(!uppercase_check(&secret("äöü123")).passed);
    }
}
