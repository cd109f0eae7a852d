//! Question aggregate
//!
//! A [`Question`] owns its [`Choice`]s. Choices can only be created, flagged
//! and removed through the question, which keeps the id bookkeeping and the
//! correct-answer flags consistent.

use super::choice::Choice;
use super::error::ValidationError;
use super::id::{ChoiceId, QuestionId};
use crate::config::{LengthRange, QuestionLimits};
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// A multiple-choice question (Aggregate Root)
///
/// Title and points are validated once at construction and cannot be
/// changed afterwards. A question is not `Clone`; its id names exactly one
/// value:
///
/// ```compile_fail
/// let question = quiz_domain::Question::new("q1").unwrap();
/// let copy = question.clone();
/// ```
#[derive(Debug)]
pub struct Question {
    id: QuestionId,
    title: String,
    points: u32,
    max_selections: usize,
    choices: Vec<Choice>,
    /// Number of choices ever added; the next choice gets this plus one
    added_choices: u32,
    limits: QuestionLimits,
}

impl Question {
    pub const DEFAULT_POINTS: i32 = 1;
    pub const DEFAULT_MAX_SELECTIONS: usize = 1;

    /// Create a question worth one point that accepts a single selection
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        Self::builder(title).build()
    }

    /// Start building a question with non-default settings
    pub fn builder(title: impl Into<String>) -> QuestionBuilder {
        QuestionBuilder::new(title)
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn max_selections(&self) -> usize {
        self.max_selections
    }

    /// Choices in insertion order
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn limits(&self) -> &QuestionLimits {
        &self.limits
    }

    /// Look up a choice by id
    pub fn choice(&self, choice_id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id() == choice_id)
    }

    /// Append a new choice and return it
    pub fn add_choice(
        &mut self,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Result<&Choice, ValidationError> {
        let text = text.into();
        check_length(&text, &self.limits.choice_text).map_err(|(length, range)| {
            ValidationError::InvalidChoiceText {
                length,
                min: range.min,
                max: range.max,
            }
        })?;

        self.added_choices += 1;
        let id = ChoiceId::new(self.added_choices);
        debug!(
            "Adding choice {} to question {} (correct: {})",
            id, self.id, is_correct
        );

        self.choices.push(Choice::new(id, text, is_correct));
        Ok(&self.choices[self.choices.len() - 1])
    }

    /// Remove a choice, keeping the order of the remaining ones
    pub fn remove_choice_by_id(&mut self, choice_id: ChoiceId) -> Result<(), ValidationError> {
        let index = self
            .choices
            .iter()
            .position(|c| c.id() == choice_id)
            .ok_or(ValidationError::ChoiceNotFound(choice_id))?;

        self.choices.remove(index);
        debug!("Removed choice {} from question {}", choice_id, self.id);
        Ok(())
    }

    /// Remove every choice. Choice ids are not reset.
    pub fn remove_all_choices(&mut self) {
        debug!(
            "Removing all {} choices from question {}",
            self.choices.len(),
            self.id
        );
        self.choices.clear();
    }

    /// Replace the set of correct choices
    ///
    /// Listed choices become correct, every other choice becomes incorrect.
    /// All ids are checked before anything is changed.
    pub fn set_correct_choices(
        &mut self,
        choice_ids: impl IntoIterator<Item = ChoiceId>,
    ) -> Result<(), ValidationError> {
        let mut correct = BTreeSet::new();
        for id in choice_ids {
            if self.choice(id).is_none() {
                return Err(ValidationError::ChoiceNotFound(id));
            }
            correct.insert(id);
        }

        for choice in &mut self.choices {
            choice.set_correct(correct.contains(&choice.id()));
        }

        debug!(
            "Question {} now has {} correct choice(s)",
            self.id,
            correct.len()
        );
        Ok(())
    }

    /// Ids of all choices currently flagged correct
    pub fn correct_choice_ids(&self) -> BTreeSet<ChoiceId> {
        self.choices
            .iter()
            .filter(|c| c.is_correct())
            .map(Choice::id)
            .collect()
    }

    /// Grade a submission: the selected ids that point at correct choices
    ///
    /// Unknown ids are ignored. Fails only when more ids are submitted than
    /// `max_selections` allows.
    pub fn correct_selected_choices(
        &self,
        selected_ids: &[ChoiceId],
    ) -> Result<BTreeSet<ChoiceId>, ValidationError> {
        self.check_selection_count(selected_ids)?;

        let hits: BTreeSet<ChoiceId> = selected_ids
            .iter()
            .copied()
            .filter(|id| self.choice(*id).is_some_and(Choice::is_correct))
            .collect();

        trace!(
            "Question {}: {} of {} selection(s) correct",
            self.id,
            hits.len(),
            selected_ids.len()
        );
        Ok(hits)
    }

    /// Points earned by a submission
    ///
    /// The full point value when the submission names every correct choice
    /// and nothing else, otherwise 0. A question with no correct choices
    /// awards nothing.
    pub fn score(&self, selected_ids: &[ChoiceId]) -> Result<u32, ValidationError> {
        let hits = self.correct_selected_choices(selected_ids)?;
        let correct = self.correct_choice_ids();

        let exact = !correct.is_empty()
            && hits == correct
            && selected_ids.iter().all(|id| correct.contains(id));

        Ok(if exact { self.points } else { 0 })
    }

    fn check_selection_count(&self, selected_ids: &[ChoiceId]) -> Result<(), ValidationError> {
        if selected_ids.len() > self.max_selections {
            return Err(ValidationError::TooManySelections {
                selected: selected_ids.len(),
                max: self.max_selections,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Builder for [`Question`]
#[derive(Debug, Clone)]
pub struct QuestionBuilder {
    title: String,
    points: i32,
    max_selections: usize,
    limits: QuestionLimits,
}

impl QuestionBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            points: Question::DEFAULT_POINTS,
            max_selections: Question::DEFAULT_MAX_SELECTIONS,
            limits: QuestionLimits::default(),
        }
    }

    pub fn with_points(mut self, points: i32) -> Self {
        self.points = points;
        self
    }

    pub fn with_max_selections(mut self, max_selections: usize) -> Self {
        self.max_selections = max_selections;
        self
    }

    /// Use custom validation limits for this question and its choices
    pub fn with_limits(mut self, limits: QuestionLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Validate and create the question
    pub fn build(self) -> Result<Question, ValidationError> {
        check_length(&self.title, &self.limits.title).map_err(|(length, range)| {
            ValidationError::InvalidTitle {
                length,
                min: range.min,
                max: range.max,
            }
        })?;

        // Points below 1 are rejected even when custom limits would allow them
        let points_range = self.limits.points;
        let points = u32::try_from(self.points)
            .ok()
            .filter(|&p| p >= 1 && points_range.contains(self.points))
            .ok_or(ValidationError::InvalidPoints {
                points: self.points,
                min: points_range.min,
                max: points_range.max,
            })?;

        let question = Question {
            id: QuestionId::generate(),
            title: self.title,
            points,
            max_selections: self.max_selections,
            choices: Vec::new(),
            added_choices: 0,
            limits: self.limits,
        };
        debug!(
            "Created question {} ({} point(s), max {} selection(s))",
            question.id, question.points, question.max_selections
        );
        Ok(question)
    }
}

/// Character count of `text` if it lies within `range`
fn check_length(text: &str, range: &LengthRange) -> Result<usize, (usize, LengthRange)> {
    let length = text.chars().count();
    if range.contains(length) {
        Ok(length)
    } else {
        Err((length, *range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PointsRange;

    // ==================== Helper ====================

    fn question_with_three_choices() -> (Question, ChoiceId, ChoiceId, ChoiceId) {
        let mut q = Question::builder("q1").with_max_selections(3).build().unwrap();
        let a = q.add_choice("Option A", false).unwrap().id();
        let b = q.add_choice("Option B", false).unwrap().id();
        let c = q.add_choice("Option C", false).unwrap().id();
        (q, a, b, c)
    }

    // ==================== Construction ====================

    #[test]
    fn test_question_defaults() {
        let q = Question::new("q1").unwrap();
        assert_eq!(q.title(), "q1");
        assert_eq!(q.points(), 1);
        assert_eq!(q.max_selections(), 1);
        assert!(q.choices().is_empty());
    }

    #[test]
    fn test_questions_get_distinct_ids() {
        let q1 = Question::new("q1").unwrap();
        let q2 = Question::new("q2").unwrap();
        assert_ne!(q1.id(), q2.id());
    }

    #[test]
    fn test_title_length_bounds() {
        assert!(Question::new("a").is_ok());
        assert!(Question::new("a".repeat(200)).is_ok());

        assert_eq!(
            Question::new("").unwrap_err(),
            ValidationError::InvalidTitle {
                length: 0,
                min: 1,
                max: 200
            }
        );
        assert!(Question::new("a".repeat(201)).is_err());
        assert!(Question::new("a".repeat(500)).is_err());
    }

    #[test]
    fn test_title_length_counts_characters() {
        // 200 multibyte characters is still a valid title
        assert!(Question::new("é".repeat(200)).is_ok());
        assert!(Question::new("é".repeat(201)).is_err());
    }

    #[test]
    fn test_points_bounds() {
        for points in [1, 50, 100] {
            let q = Question::builder("q1").with_points(points).build().unwrap();
            assert_eq!(q.points(), points as u32);
        }

        for points in [0, 101, -5] {
            let err = Question::builder("q1").with_points(points).build().unwrap_err();
            assert!(matches!(err, ValidationError::InvalidPoints { .. }));
        }
    }

    #[test]
    fn test_custom_limits() {
        let limits = QuestionLimits {
            title: LengthRange::new(3, 10),
            choice_text: LengthRange::new(1, 5),
            points: PointsRange::new(5, 10),
        };

        assert!(Question::builder("ab").with_limits(limits).build().is_err());
        assert!(
            Question::builder("abc")
                .with_limits(limits)
                .with_points(4)
                .build()
                .is_err()
        );

        let mut q = Question::builder("abc")
            .with_limits(limits)
            .with_points(5)
            .build()
            .unwrap();
        assert_eq!(q.limits(), &limits);
        assert!(q.add_choice("12345", false).is_ok());
        assert!(q.add_choice("123456", false).is_err());
    }

    #[test]
    fn test_points_below_one_rejected_under_custom_limits() {
        let limits = QuestionLimits {
            points: PointsRange::new(-10, 10),
            ..Default::default()
        };

        for points in [0, -5] {
            let err = Question::builder("q1")
                .with_limits(limits)
                .with_points(points)
                .build()
                .unwrap_err();
            assert!(matches!(err, ValidationError::InvalidPoints { .. }));
        }
        assert!(
            Question::builder("q1")
                .with_limits(limits)
                .with_points(1)
                .build()
                .is_ok()
        );
    }

    // ==================== Choices ====================

    #[test]
    fn test_add_choice() {
        let mut q = Question::new("q1").unwrap();
        q.add_choice("a", false).unwrap();

        assert_eq!(q.choices().len(), 1);
        let choice = &q.choices()[0];
        assert_eq!(choice.text(), "a");
        assert!(!choice.is_correct());
    }

    #[test]
    fn test_choice_ids_are_sequential() {
        let mut q = Question::new("q1").unwrap();
        let c1 = q.add_choice("Option A", false).unwrap().clone();
        let c2 = q.add_choice("Option B", true).unwrap().clone();

        assert_eq!(c1.id(), ChoiceId::new(1));
        assert_eq!(c2.id(), ChoiceId::new(2));
        assert!(!c1.is_correct());
        assert!(c2.is_correct());
    }

    #[test]
    fn test_add_choice_invalid_text() {
        let mut q = Question::new("q1").unwrap();

        assert!(matches!(
            q.add_choice("", false),
            Err(ValidationError::InvalidChoiceText { length: 0, .. })
        ));
        assert!(q.add_choice("a".repeat(101), false).is_err());
        assert!(q.add_choice("a".repeat(100), false).is_ok());
        assert_eq!(q.choices().len(), 1);
    }

    #[test]
    fn test_failed_add_does_not_consume_id() {
        let mut q = Question::new("q1").unwrap();
        assert!(q.add_choice("", false).is_err());
        let id = q.add_choice("Option A", false).unwrap().id();
        assert_eq!(id, ChoiceId::new(1));
    }

    #[test]
    fn test_remove_choice_by_id() {
        let (mut q, a, _, _) = question_with_three_choices();
        q.remove_choice_by_id(a).unwrap();

        let texts: Vec<&str> = q.choices().iter().map(Choice::text).collect();
        assert_eq!(texts, vec!["Option B", "Option C"]);
    }

    #[test]
    fn test_remove_choice_unknown_id() {
        let (mut q, _, _, _) = question_with_three_choices();
        let err = q.remove_choice_by_id(ChoiceId::new(999)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(q.choices().len(), 3);
    }

    #[test]
    fn test_choice_ids_not_reused_after_removal() {
        let (mut q, _, _, c) = question_with_three_choices();
        q.remove_choice_by_id(c).unwrap();
        let next = q.add_choice("Option D", false).unwrap().id();
        assert_eq!(next, ChoiceId::new(4));

        q.remove_all_choices();
        let next = q.add_choice("Option E", false).unwrap().id();
        assert_eq!(next, ChoiceId::new(5));
    }

    #[test]
    fn test_remove_all_choices_is_idempotent() {
        let (mut q, _, _, _) = question_with_three_choices();
        q.remove_all_choices();
        assert!(q.choices().is_empty());
        q.remove_all_choices();
        assert!(q.choices().is_empty());
    }

    #[test]
    fn test_choice_lookup() {
        let (q, _, b, _) = question_with_three_choices();
        assert_eq!(q.choice(b).map(Choice::text), Some("Option B"));
        assert!(q.choice(ChoiceId::new(42)).is_none());
    }

    // ==================== Correct answers ====================

    #[test]
    fn test_set_correct_choices() {
        let (mut q, a, b, c) = question_with_three_choices();
        q.set_correct_choices([a, c]).unwrap();

        assert!(q.choice(a).unwrap().is_correct());
        assert!(!q.choice(b).unwrap().is_correct());
        assert!(q.choice(c).unwrap().is_correct());
    }

    #[test]
    fn test_set_correct_choices_replaces_previous_set() {
        let (mut q, a, b, c) = question_with_three_choices();
        q.set_correct_choices([a, c]).unwrap();
        q.set_correct_choices([b]).unwrap();

        assert_eq!(q.correct_choice_ids(), BTreeSet::from([b]));
    }

    #[test]
    fn test_set_correct_choices_unknown_id_changes_nothing() {
        let (mut q, a, b, _) = question_with_three_choices();
        q.set_correct_choices([a]).unwrap();

        let err = q.set_correct_choices([b, ChoiceId::new(999)]).unwrap_err();
        assert_eq!(err, ValidationError::ChoiceNotFound(ChoiceId::new(999)));
        assert_eq!(q.correct_choice_ids(), BTreeSet::from([a]));
    }

    #[test]
    fn test_set_correct_choices_empty_clears_flags() {
        let (mut q, a, _, c) = question_with_three_choices();
        q.set_correct_choices([a, c]).unwrap();
        q.set_correct_choices(Vec::<ChoiceId>::new()).unwrap();
        assert!(q.correct_choice_ids().is_empty());
    }

    // ==================== Grading ====================

    #[test]
    fn test_correct_selected_choices() {
        let (mut q, a, b, c) = question_with_three_choices();
        q.set_correct_choices([a, c]).unwrap();

        let hits = q.correct_selected_choices(&[a, b, c]).unwrap();
        assert_eq!(hits, BTreeSet::from([a, c]));
    }

    #[test]
    fn test_correct_selected_choices_ignores_unknown_ids() {
        let (mut q, a, _, _) = question_with_three_choices();
        q.set_correct_choices([a]).unwrap();

        let hits = q
            .correct_selected_choices(&[a, ChoiceId::new(999)])
            .unwrap();
        assert_eq!(hits, BTreeSet::from([a]));
    }

    #[test]
    fn test_correct_selected_choices_too_many() {
        let mut q = Question::new("q1").unwrap();
        let a = q.add_choice("Option A", false).unwrap().id();
        let b = q.add_choice("Option B", false).unwrap().id();

        assert_eq!(
            q.correct_selected_choices(&[a, b]).unwrap_err(),
            ValidationError::TooManySelections {
                selected: 2,
                max: 1
            }
        );
    }

    #[test]
    fn test_correct_selected_choices_empty_selection() {
        let (q, _, _, _) = question_with_three_choices();
        assert!(q.correct_selected_choices(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_score_exact_match() {
        let mut q = Question::builder("q1")
            .with_points(10)
            .with_max_selections(3)
            .build()
            .unwrap();
        let a = q.add_choice("Option A", true).unwrap().id();
        let b = q.add_choice("Option B", false).unwrap().id();
        let c = q.add_choice("Option C", true).unwrap().id();

        assert_eq!(q.score(&[a, c]).unwrap(), 10);
        assert_eq!(q.score(&[c, a]).unwrap(), 10);
        assert_eq!(q.score(&[a]).unwrap(), 0);
        assert_eq!(q.score(&[a, b, c]).unwrap(), 0);
        assert_eq!(q.score(&[a, c, ChoiceId::new(999)]).unwrap(), 0);
    }

    #[test]
    fn test_score_without_correct_choices() {
        let (q, _, _, _) = question_with_three_choices();
        assert_eq!(q.score(&[]).unwrap(), 0);
    }

    #[test]
    fn test_score_too_many_selections() {
        let (q, a, b, c) = question_with_three_choices();
        assert!(q.score(&[a, b, c, a]).is_err());
    }
}
