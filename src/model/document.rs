//! The persisted document and its entities.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{ExerciseId, ProgramId, SessionId, WorkoutId};

/// Lowest and highest set count an exercise may carry.
pub const MIN_SETS: u32 = 1;
pub const MAX_SETS: u32 = 20;

/// One position of a per-exercise results sequence.
///
/// `None` is a slot that was never logged or was cleared; it serializes as
/// `null`. A `Some` slot may still hold absent weight/reps (a skipped set).
pub type SetSlot = Option<SetResult>;

/// The whole store: programs plus a normalized workout map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub programs: Vec<Program>,
    pub workouts: BTreeMap<WorkoutId, Workout>,
}

/// A named, ordered collection of workout references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: ProgramId,
    pub name: String,
    #[serde(default)]
    pub workouts: Vec<WorkoutId>,
}

/// A repeatable training template and its logged history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: WorkoutId,
    pub name: String,
    /// Free text, shown as the workout's notes.
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    /// Append-only, oldest first.
    #[serde(default)]
    pub sessions: Vec<Session>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: ExerciseId,
    pub name: String,
    pub sets: u32,
    pub target_reps: TargetReps,
    #[serde(default)]
    pub notes: String,
}

/// Inclusive rep range; `1 <= min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetReps {
    pub min: u32,
    pub max: u32,
}

impl TargetReps {
    /// Build a range, flooring `min` at 1 and raising `max` to at least `min`.
    pub fn new(min: u32, max: u32) -> Self {
        let min = min.max(1);
        Self {
            min,
            max: max.max(min),
        }
    }
}

/// One calendar-day performance of a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: SessionId,
    #[serde(rename = "dateISO")]
    pub date_iso: DateTime<Utc>,
    #[serde(default)]
    pub results: BTreeMap<ExerciseId, Vec<SetSlot>>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub complete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// One logged set. Absent fields mean the value was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SetResult {
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub reps: Option<i64>,
}

impl SetResult {
    pub fn new(weight: Option<f64>, reps: Option<i64>) -> Self {
        Self { weight, reps }
    }

    /// A skipped set: both fields absent.
    pub fn skipped() -> Self {
        Self::default()
    }

    pub fn is_skipped(&self) -> bool {
        self.weight.is_none() && self.reps.is_none()
    }
}

/// Clamp a set count into `[MIN_SETS, MAX_SETS]`.
pub fn clamp_sets(sets: i64) -> u32 {
    sets.clamp(MIN_SETS as i64, MAX_SETS as i64) as u32
}

/// Drop empty slots from the end of a results sequence.
pub(crate) fn trim_trailing(slots: &mut Vec<SetSlot>) {
    while matches!(slots.last(), Some(None)) {
        slots.pop();
    }
}

impl Document {
    pub fn program(&self, id: &str) -> Option<&Program> {
        self.programs.iter().find(|p| p.id.as_str() == id)
    }

    pub fn program_mut(&mut self, id: &str) -> Option<&mut Program> {
        self.programs.iter_mut().find(|p| p.id.as_str() == id)
    }

    pub fn workout(&self, id: &str) -> Option<&Workout> {
        self.workouts.get(id)
    }

    pub fn workout_mut(&mut self, id: &str) -> Option<&mut Workout> {
        self.workouts.get_mut(id)
    }

    /// The program whose workout list references `workout_id`.
    pub fn program_of(&self, workout_id: &str) -> Option<&Program> {
        self.programs
            .iter()
            .find(|p| p.workouts.iter().any(|w| w.as_str() == workout_id))
    }

    /// A program's workouts in list order, skipping dangling references.
    pub fn program_workouts<'a>(&'a self, program: &'a Program) -> impl Iterator<Item = &'a Workout> {
        program.workouts.iter().filter_map(|id| self.workouts.get(id))
    }

    pub(crate) fn fresh_program_id(&self) -> ProgramId {
        ProgramId::generate_unique(|id| self.programs.iter().any(|p| p.id == *id))
    }

    pub(crate) fn fresh_workout_id(&self) -> WorkoutId {
        WorkoutId::generate_unique(|id| self.workouts.contains_key(id))
    }

    /// Bring every exercise's set count and rep range back into bounds.
    pub(crate) fn normalize(&mut self) {
        for workout in self.workouts.values_mut() {
            workout.normalize();
        }
    }
}

impl Program {
    pub fn new(id: ProgramId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            workouts: Vec::new(),
        }
    }
}

impl Workout {
    pub fn new(id: WorkoutId, name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            label: label.into(),
            exercises: Vec::new(),
            sessions: Vec::new(),
        }
    }

    pub fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id.as_str() == id)
    }

    pub fn exercise_mut(&mut self, id: &str) -> Option<&mut Exercise> {
        self.exercises.iter_mut().find(|e| e.id.as_str() == id)
    }

    /// The most recent session, if it was started on `today`.
    ///
    /// Only the last session can be today's; earlier ones are history.
    pub fn today_session(&self, today: NaiveDate) -> Option<&Session> {
        self.sessions.last().filter(|s| s.is_on(today))
    }

    pub fn today_session_mut(&mut self, today: NaiveDate) -> Option<&mut Session> {
        self.sessions.last_mut().filter(|s| s.is_on(today))
    }

    /// Return today's session, appending a fresh one stamped `now` if absent.
    pub(crate) fn today_session_or_insert(&mut self, now: DateTime<Utc>) -> &mut Session {
        let today = now.date_naive();
        if self.today_session(today).is_none() {
            let id = self.fresh_session_id();
            self.sessions.push(Session::new(id, now));
        }
        let last = self.sessions.len() - 1;
        &mut self.sessions[last]
    }

    /// The most recent session dated strictly before `today`.
    pub fn previous_session(&self, today: NaiveDate) -> Option<&Session> {
        self.sessions.iter().rev().find(|s| s.date() < today)
    }

    pub fn sessions_newest_first(&self) -> impl Iterator<Item = &Session> {
        self.sessions.iter().rev()
    }

    pub(crate) fn normalize(&mut self) {
        for exercise in &mut self.exercises {
            exercise.normalize();
        }
    }

    pub(crate) fn fresh_exercise_id(&self) -> ExerciseId {
        ExerciseId::generate_unique(|id| self.exercises.iter().any(|e| e.id == *id))
    }

    pub(crate) fn fresh_session_id(&self) -> SessionId {
        SessionId::generate_unique(|id| self.sessions.iter().any(|s| s.id == *id))
    }
}

impl Exercise {
    /// Clamp `sets` into `[MIN_SETS, MAX_SETS]` and repair the rep range.
    pub(crate) fn normalize(&mut self) {
        self.sets = clamp_sets(self.sets as i64);
        self.target_reps = TargetReps::new(self.target_reps.min, self.target_reps.max);
    }
}

impl Session {
    pub fn new(id: SessionId, date_iso: DateTime<Utc>) -> Self {
        Self {
            id,
            date_iso,
            results: BTreeMap::new(),
            complete: false,
            completed_at: None,
        }
    }

    /// Calendar date (UTC) the session was started.
    pub fn date(&self) -> NaiveDate {
        self.date_iso.date_naive()
    }

    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.date() == day
    }

    /// Logged slots for an exercise; empty if none.
    pub fn results_for(&self, exercise_id: &str) -> &[SetSlot] {
        self.results
            .get(exercise_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The result at `index`, if that slot is filled.
    pub fn slot(&self, exercise_id: &str, index: usize) -> Option<&SetResult> {
        self.results_for(exercise_id).get(index).and_then(Option::as_ref)
    }

    /// Whether every set of every exercise in `workout` has a filled slot.
    pub fn all_sets_logged(&self, workout: &Workout) -> bool {
        !workout.exercises.is_empty()
            && workout.exercises.iter().all(|ex| {
                (0..ex.sets as usize).all(|i| self.slot(ex.id.as_str(), i).is_some())
            })
    }
}
