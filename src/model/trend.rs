//! Progress direction between two sessions of the same exercise.

use std::cmp::Ordering;
use std::fmt;

use super::document::{SetResult, Session};

/// Direction of the first working set compared with the previous session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Equal,
}

impl Trend {
    /// Compare weight first, then reps. Absent values count as zero.
    pub fn between(previous: &SetResult, current: &SetResult) -> Self {
        let weight = current
            .weight
            .unwrap_or(0.0)
            .partial_cmp(&previous.weight.unwrap_or(0.0))
            .unwrap_or(Ordering::Equal);
        let ordering = weight.then_with(|| current.reps.unwrap_or(0).cmp(&previous.reps.unwrap_or(0)));
        match ordering {
            Ordering::Greater => Self::Up,
            Ordering::Less => Self::Down,
            Ordering::Equal => Self::Equal,
        }
    }

    /// Trend of an exercise's first set, if both sessions logged it.
    pub fn for_exercise(previous: &Session, current: &Session, exercise_id: &str) -> Option<Self> {
        let prev = previous.slot(exercise_id, 0)?;
        let curr = current.slot(exercise_id, 0)?;
        Some(Self::between(prev, curr))
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Equal => write!(f, "equal"),
        }
    }
}
