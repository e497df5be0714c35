//! Password strength checks
//!
//! Each check examines a specific aspect of the password and is worth
//! one point.

mod length;
mod variety;

pub use length::{MIN_LENGTH, length_check};
pub use variety::{digit_check, lowercase_check, symbol_check, uppercase_check};

/// Outcome of a single strength check.
///
/// `passed` decides whether the check's point is awarded; `feedback` is
/// appended to the report when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub passed: bool,
    pub feedback: Option<String>,
}

impl CheckOutcome {
    pub(crate) fn pass() -> Self {
        CheckOutcome {
            passed: true,
            feedback: None,
        }
    }

    pub(crate) fn pass_with(line: impl Into<String>) -> Self {
        CheckOutcome {
            passed: true,
            feedback: Some(line.into()),
        }
    }

    pub(crate) fn fail(line: impl Into<String>) -> Self {
        CheckOutcome {
            passed: false,
            feedback: Some(line.into()),
        }
    }
}
