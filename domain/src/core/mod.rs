//! Core domain concepts.
//!
//! - [`question::Question`] — a multiple-choice question and its grading rules
//! - [`choice::Choice`] — an answer option owned by a question
//! - [`id`] — question and choice identifiers
//! - [`error::ValidationError`] — domain-level validation errors

pub mod choice;
pub mod error;
pub mod id;
pub mod question;
