//! Exercise template mutations.

use super::{find_exercise, find_workout, Miss, WorkoutStore};
use crate::error::Result;
use crate::model::document::trim_trailing;
use crate::model::{clamp_sets, ExerciseId, ExerciseSpec};
use crate::storage::Storage;

impl<S: Storage> WorkoutStore<S> {
    /// Append an exercise built from `spec`. `None` if the workout does not exist.
    pub fn add_exercise(&mut self, workout_id: &str, spec: &ExerciseSpec) -> Result<Option<ExerciseId>> {
        self.update("add_exercise", |doc, _| {
            let workout = find_workout(doc, workout_id)?;
            let exercise = spec.build(workout.fresh_exercise_id());
            let id = exercise.id.clone();
            workout.exercises.push(exercise);
            Ok(id)
        })
    }

    /// Overwrite an exercise's fields from `spec`, keeping its id and history.
    pub fn edit_exercise(&mut self, workout_id: &str, exercise_id: &str, spec: &ExerciseSpec) -> Result<()> {
        self.update("edit_exercise", |doc, _| {
            let workout = find_workout(doc, workout_id)?;
            spec.apply(find_exercise(workout, exercise_id)?);
            Ok(())
        })?;
        Ok(())
    }

    /// Remove an exercise and its results from every session.
    pub fn delete_exercise(&mut self, workout_id: &str, exercise_id: &str) -> Result<()> {
        self.update("delete_exercise", |doc, _| {
            let workout = find_workout(doc, workout_id)?;
            let index = workout
                .exercises
                .iter()
                .position(|e| e.id.as_str() == exercise_id)
                .ok_or_else(|| Miss::not_found("Exercise", exercise_id))?;
            workout.exercises.remove(index);
            for session in &mut workout.sessions {
                session.results.remove(exercise_id);
            }
            Ok(())
        })?;
        Ok(())
    }

    /// Shift the set count by `delta`, clamped to the allowed range.
    pub fn increment_exercise_sets(&mut self, workout_id: &str, exercise_id: &str, delta: i64) -> Result<()> {
        self.update("increment_exercise_sets", |doc, _| {
            let workout = find_workout(doc, workout_id)?;
            let exercise = find_exercise(workout, exercise_id)?;
            exercise.sets = clamp_sets(i64::from(exercise.sets).saturating_add(delta));
            Ok(())
        })?;
        Ok(())
    }

    /// Drop one set from an exercise and remove slot `index` from today's
    /// results, shifting later slots down.
    ///
    /// Does nothing when the exercise is already at one set. With
    /// `lock_completed_sessions`, a completed session keeps its results and
    /// only the set count changes.
    pub fn remove_exercise_set(&mut self, workout_id: &str, exercise_id: &str, index: usize) -> Result<()> {
        let lock = self.options().lock_completed_sessions;
        let today = self.clock().today();
        self.update("remove_exercise_set", |doc, _| {
            let workout = find_workout(doc, workout_id)?;
            let exercise = find_exercise(workout, exercise_id)?;
            if exercise.sets <= 1 {
                return Ok(());
            }
            exercise.sets -= 1;

            if let Some(session) = workout.today_session_mut(today) {
                if lock && session.complete {
                    tracing::debug!(workout = workout_id, "session complete, keeping results");
                    return Ok(());
                }
                if let Some(slots) = session.results.get_mut(exercise_id) {
                    if index < slots.len() {
                        slots.remove(index);
                    }
                    trim_trailing(slots);
                }
            }
            Ok(())
        })?;
        Ok(())
    }
}
