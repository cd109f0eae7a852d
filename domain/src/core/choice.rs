//! Choice entity

use super::id::ChoiceId;

/// A single answer option belonging to a [`Question`](super::question::Question).
///
/// Choices are only created through `Question::add_choice`, so the id is
/// always unique within the owning question and the text has already been
/// validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    id: ChoiceId,
    text: String,
    is_correct: bool,
}

impl Choice {
    pub(crate) fn new(id: ChoiceId, text: String, is_correct: bool) -> Self {
        Self {
            id,
            text,
            is_correct,
        }
    }

    pub fn id(&self) -> ChoiceId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this choice is flagged as a correct answer
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub(crate) fn set_correct(&mut self, is_correct: bool) {
        self.is_correct = is_correct;
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.id, self.text)
    }
}
