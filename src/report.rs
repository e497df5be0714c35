//! Strength report types returned by the evaluator.

use std::fmt;

/// Four-tier strength rating derived from the check score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rating {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Rating {
    /// Maps a score to its tier.
    ///
    /// Ranges are checked top-down; the first match wins.
    pub fn from_score(score: u8) -> Self {
        match score {
            5.. => Rating::VeryStrong,
            4 => Rating::Strong,
            2..=3 => Rating::Medium,
            0..=1 => Rating::Weak,
        }
    }

    /// Fixed rating label, e.g. `VERY STRONG`.
    pub fn label(self) -> &'static str {
        match self {
            Rating::VeryStrong => "VERY STRONG",
            Rating::Strong => "STRONG",
            Rating::Medium => "MEDIUM",
            Rating::Weak => "WEAK",
        }
    }

    /// Short description of what the tier means for the user.
    pub fn description(self) -> &'static str {
        match self {
            Rating::VeryStrong => "Excellent Complexity",
            Rating::Strong => "Good Complexity",
            Rating::Medium => "Needs Improvement",
            Rating::Weak => "High Risk",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a full strength evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    /// Points awarded, one per passed check.
    pub score: u8,
    /// Feedback lines in check order: length, lowercase, uppercase,
    /// digit, symbol.
    pub feedback: Vec<String>,
}

impl StrengthReport {
    /// Rating tier for this report's score.
    pub fn rating(&self) -> Rating {
        Rating::from_score(self.score)
    }
}
