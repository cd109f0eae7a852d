//! Validation limits for questions and choices

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for limits that cannot describe any valid question
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LimitsError {
    #[error("{field}: minimum length cannot be 0")]
    ZeroMinimum { field: &'static str },

    #[error("{field}: minimum {min} is greater than maximum {max}")]
    InvertedLength {
        field: &'static str,
        min: usize,
        max: usize,
    },

    #[error("points: minimum {min} must be at least 1 and not greater than maximum {max}")]
    InvalidPoints { min: i32, max: i32 },
}

/// Inclusive text length bounds, counted in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRange {
    pub min: usize,
    pub max: usize,
}

impl LengthRange {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, length: usize) -> bool {
        (self.min..=self.max).contains(&length)
    }

    fn validate(&self, field: &'static str) -> Result<(), LimitsError> {
        if self.min == 0 {
            return Err(LimitsError::ZeroMinimum { field });
        }
        if self.min > self.max {
            return Err(LimitsError::InvertedLength {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Inclusive bounds for a question's point value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsRange {
    pub min: i32,
    pub max: i32,
}

impl PointsRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, points: i32) -> bool {
        (self.min..=self.max).contains(&points)
    }
}

/// Bounds enforced when building questions and adding choices
///
/// Defaults: title 1..=200 characters, choice text 1..=100 characters,
/// points 1..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionLimits {
    /// Allowed title length
    pub title: LengthRange,
    /// Allowed choice text length
    pub choice_text: LengthRange,
    /// Allowed point values
    pub points: PointsRange,
}

impl QuestionLimits {
    pub const DEFAULT_TITLE: LengthRange = LengthRange::new(1, 200);
    pub const DEFAULT_CHOICE_TEXT: LengthRange = LengthRange::new(1, 100);
    pub const DEFAULT_POINTS: PointsRange = PointsRange::new(1, 100);

    /// Validate the limits
    pub fn validate(&self) -> Result<(), LimitsError> {
        self.title.validate("title")?;
        self.choice_text.validate("choice_text")?;

        if self.points.min < 1 || self.points.min > self.points.max {
            return Err(LimitsError::InvalidPoints {
                min: self.points.min,
                max: self.points.max,
            });
        }

        Ok(())
    }
}

impl Default for QuestionLimits {
    fn default() -> Self {
        Self {
            title: Self::DEFAULT_TITLE,
            choice_text: Self::DEFAULT_CHOICE_TEXT,
            points: Self::DEFAULT_POINTS,
        }
    }
}
