//! Identifiers for questions and choices.

use uuid::Uuid;

/// Unique identifier for a question.
///
/// Generated as a random v4 UUID, so ids are unique across questions
/// without any process-wide counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(Uuid);

impl QuestionId {
    /// Generates a new unique QuestionId.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a choice within its owning question.
///
/// Choices are numbered sequentially from 1 in order of addition.
/// Numbers are never handed out twice by the same question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChoiceId(u32);

impl ChoiceId {
    /// Creates a ChoiceId from a raw number.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw number.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ChoiceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
