//! Domain error types

use super::id::ChoiceId;
use thiserror::Error;

/// Validation errors raised by the question model.
///
/// Every fallible operation on [`Question`](super::question::Question)
/// returns one of these and leaves the question unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid title: length {length} is outside {min}..={max}")]
    InvalidTitle {
        length: usize,
        min: usize,
        max: usize,
    },

    #[error("Invalid points: {points} is outside {min}..={max}")]
    InvalidPoints { points: i32, min: i32, max: i32 },

    #[error("Invalid choice text: length {length} is outside {min}..={max}")]
    InvalidChoiceText {
        length: usize,
        min: usize,
        max: usize,
    },

    #[error("Choice not found: {0}")]
    ChoiceNotFound(ChoiceId),

    #[error("Too many selections: {selected} selected, at most {max} allowed")]
    TooManySelections { selected: usize, max: usize },
}

impl ValidationError {
    /// Check if this error reports an unknown choice id
    pub fn is_not_found(&self) -> bool {
        matches!(self, ValidationError::ChoiceNotFound(_))
    }
}
