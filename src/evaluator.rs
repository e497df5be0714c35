//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::report::StrengthReport;
use crate::sections::{
    CheckOutcome, digit_check, length_check, lowercase_check, symbol_check, uppercase_check,
};

/// Evaluates password strength and returns a detailed report.
///
/// Runs the five checks in fixed order (length, lowercase, uppercase,
/// digit, symbol), awarding one point each; feedback lines are collected
/// in the same order. Never fails: a missing property becomes feedback,
/// not an error.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `StrengthReport` containing score and feedback.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthReport {
    let checks: [fn(&SecretString) -> CheckOutcome; 5] = [
        length_check,
        lowercase_check,
        uppercase_check,
        digit_check,
        symbol_check,
    ];

    let mut score: u8 = 0;
    let mut feedback = Vec::new();

    for check in checks {
        let outcome = check(password);
        if outcome.passed {
            score += 1;
        }
        if let Some(line) = outcome.feedback {
            feedback.push(line);
        }
    }

    let report = StrengthReport { score, feedback };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "password evaluated: {}/5 ({})",
        report.score,
        report.rating()
    );

    report
}
