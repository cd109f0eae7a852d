//! Domain layer for quiz-model
//!
//! This crate contains the multiple-choice question model: entities, value
//! objects, validation limits and grading. It has no dependencies on
//! infrastructure concerns.
//!
//! # Core Concepts
//!
//! - **Question**: the aggregate root. Holds a title, a point value, a
//!   selection limit and an ordered list of choices.
//! - **Choice**: one answer option, owned by exactly one question, flagged
//!   correct or not.
//! - **Grading**: intersecting a submitted selection with the choices
//!   flagged correct.
//!
//! # Example
//!
//! ```
//! use quiz_domain::Question;
//!
//! let mut question = Question::builder("Which of these are Rust keywords?")
//!     .with_max_selections(2)
//!     .build()?;
//! let fn_kw = question.add_choice("fn", true)?.id();
//! let def_kw = question.add_choice("def", false)?.id();
//!
//! let hits = question.correct_selected_choices(&[fn_kw, def_kw])?;
//! assert_eq!(hits.len(), 1);
//! assert!(hits.contains(&fn_kw));
//! # Ok::<(), quiz_domain::ValidationError>(())
//! ```

pub mod config;
pub mod core;

// Re-export commonly used types
pub use config::{LengthRange, LimitsError, PointsRange, QuestionLimits};
pub use crate::core::{
    choice::Choice,
    error::ValidationError,
    id::{ChoiceId, QuestionId},
    question::{Question, QuestionBuilder},
};
