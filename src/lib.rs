//! Password strength evaluation and secure password generation library
//!
//! This library scores candidate passwords against a fixed five-check
//! rubric and generates random passwords that are guaranteed to satisfy
//! the same complexity requirements.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_toolkit::{evaluate_password_strength, generate_password, Rating};
//! use secrecy::SecretString;
//!
//! // Evaluate a candidate password
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = evaluate_password_strength(&password);
//! println!("Score: {}/5", report.score);
//! println!("Rating: {}", report.rating());
//!
//! // Generate a password and confirm it rates at the top tier
//! let generated = generate_password(16);
//! let report = evaluate_password_strength(&generated);
//! assert_eq!(report.rating(), Rating::VeryStrong);
//! ```

// Internal modules
mod alphabet;
mod evaluator;
mod generator;
mod report;
mod sections;

// Public API
pub use alphabet::{DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
pub use evaluator::evaluate_password_strength;
pub use generator::{DEFAULT_LENGTH, generate_password, generate_password_with};
pub use report::{Rating, StrengthReport};
pub use sections::MIN_LENGTH;
