//! Configuration value objects for the domain layer
//!
//! Validation bounds applied by [`Question`](crate::Question). The defaults
//! are the bounds every question uses unless built with custom limits.

mod limits;

pub use limits::{LengthRange, LimitsError, PointsRange, QuestionLimits};
