//! Session logging: per-set results for today's session, completion, and
//! whole-session entry.

use std::collections::BTreeMap;

use super::{find_workout, Applied, Miss, WorkoutStore};
use crate::error::Result;
use crate::model::document::trim_trailing;
use crate::model::{ExerciseId, RawSet, Session, SessionId, SetResult, SetSlot, Workout};
use crate::storage::Storage;

/// Refuse writes to a completed session when the lock is on.
fn ensure_writable(session: &Session, lock: bool, workout_id: &str) -> Applied<()> {
    if lock && session.complete {
        return Err(Miss::Locked {
            workout: workout_id.to_string(),
        });
    }
    Ok(())
}

fn require_exercise(workout: &Workout, exercise_id: &str) -> Applied<u32> {
    workout
        .exercise(exercise_id)
        .map(|e| e.sets)
        .ok_or_else(|| Miss::not_found("Exercise", exercise_id))
}

/// Fill every empty slot in `0..sets` with a skipped result.
fn fill_skipped(slots: &mut Vec<SetSlot>, sets: u32) {
    let sets = sets as usize;
    if slots.len() < sets {
        slots.resize(sets, None);
    }
    for slot in slots.iter_mut().take(sets) {
        if slot.is_none() {
            *slot = Some(SetResult::skipped());
        }
    }
}

impl<S: Storage> WorkoutStore<S> {
    /// Record set `index` of an exercise in today's session, starting the
    /// session if needed.
    ///
    /// Earlier unlogged slots are padded with skipped results. Values parse
    /// leniently; see [`RawSet::parse`]. An `index` at or past the
    /// exercise's set count is treated like an unknown id.
    pub fn save_set_result(
        &mut self,
        workout_id: &str,
        exercise_id: &str,
        index: usize,
        raw: &RawSet,
    ) -> Result<()> {
        let lock = self.options().lock_completed_sessions;
        let value = raw.parse();
        self.update("save_set_result", |doc, now| {
            let workout = find_workout(doc, workout_id)?;
            let sets = require_exercise(workout, exercise_id)?;
            if index >= sets as usize {
                let set = format!("index {} of {}", index, exercise_id);
                return Err(Miss::not_found("Set", &set));
            }
            let session = workout.today_session_or_insert(now);
            ensure_writable(session, lock, workout_id)?;

            let slots = session.results.entry(ExerciseId::from(exercise_id)).or_default();
            while slots.len() < index {
                slots.push(Some(SetResult::skipped()));
            }
            if slots.len() == index {
                slots.push(Some(value));
            } else {
                slots[index] = Some(value);
            }
            trim_trailing(slots);
            Ok(())
        })?;
        Ok(())
    }

    /// Empty slot `index` in today's session. Does nothing if no session was
    /// started today.
    pub fn clear_set_result(&mut self, workout_id: &str, exercise_id: &str, index: usize) -> Result<()> {
        let lock = self.options().lock_completed_sessions;
        let today = self.clock().today();
        self.update("clear_set_result", |doc, _| {
            let workout = find_workout(doc, workout_id)?;
            require_exercise(workout, exercise_id)?;
            let Some(session) = workout.today_session_mut(today) else {
                return Ok(());
            };
            ensure_writable(session, lock, workout_id)?;

            if let Some(slots) = session.results.get_mut(exercise_id) {
                if let Some(slot) = slots.get_mut(index) {
                    *slot = None;
                }
                trim_trailing(slots);
                if slots.is_empty() {
                    session.results.remove(exercise_id);
                }
            }
            Ok(())
        })?;
        Ok(())
    }

    /// Drop an exercise's results from today's session only.
    pub fn clear_exercise_results_today(&mut self, workout_id: &str, exercise_id: &str) -> Result<()> {
        let lock = self.options().lock_completed_sessions;
        let today = self.clock().today();
        self.update("clear_exercise_results_today", |doc, _| {
            let workout = find_workout(doc, workout_id)?;
            require_exercise(workout, exercise_id)?;
            if let Some(session) = workout.today_session_mut(today) {
                ensure_writable(session, lock, workout_id)?;
                session.results.remove(exercise_id);
            }
            Ok(())
        })?;
        Ok(())
    }

    /// Drop an exercise's results from every session, past ones included.
    pub fn clear_exercise_results(&mut self, workout_id: &str, exercise_id: &str) -> Result<()> {
        self.update("clear_exercise_results", |doc, _| {
            let workout = find_workout(doc, workout_id)?;
            require_exercise(workout, exercise_id)?;
            for session in &mut workout.sessions {
                session.results.remove(exercise_id);
            }
            Ok(())
        })?;
        Ok(())
    }

    /// Mark today's session complete, starting it if needed. Every unlogged
    /// set up to each exercise's set count is recorded as skipped.
    pub fn complete_session(&mut self, workout_id: &str) -> Result<Option<SessionId>> {
        self.update("complete_session", |doc, now| {
            let workout = find_workout(doc, workout_id)?;
            let targets: Vec<(ExerciseId, u32)> = workout
                .exercises
                .iter()
                .map(|e| (e.id.clone(), e.sets))
                .collect();

            let session = workout.today_session_or_insert(now);
            for (id, sets) in targets {
                fill_skipped(session.results.entry(id).or_default(), sets);
            }
            session.complete = true;
            session.completed_at = Some(now);
            Ok(session.id.clone())
        })
    }

    /// Mark every unlogged set of an exercise in today's session as skipped.
    pub fn skip_remaining_sets(&mut self, workout_id: &str, exercise_id: &str) -> Result<()> {
        let lock = self.options().lock_completed_sessions;
        self.update("skip_remaining_sets", |doc, now| {
            let workout = find_workout(doc, workout_id)?;
            let sets = require_exercise(workout, exercise_id)?;
            let session = workout.today_session_or_insert(now);
            ensure_writable(session, lock, workout_id)?;
            fill_skipped(
                session.results.entry(ExerciseId::from(exercise_id)).or_default(),
                sets,
            );
            Ok(())
        })?;
        Ok(())
    }

    /// Append a new session stamped now holding `results`.
    ///
    /// Entries for exercises the workout does not have are dropped, and each
    /// sequence is cut to its exercise's set count.
    pub fn add_session(
        &mut self,
        workout_id: &str,
        results: BTreeMap<ExerciseId, Vec<SetSlot>>,
    ) -> Result<Option<SessionId>> {
        self.update("add_session", |doc, now| {
            let workout = find_workout(doc, workout_id)?;
            let mut session = Session::new(workout.fresh_session_id(), now);
            for (id, mut slots) in results {
                let Some(sets) = workout.exercise(id.as_str()).map(|e| e.sets) else {
                    tracing::debug!(
                        workout = workout_id,
                        exercise = %id,
                        "dropping results for unknown exercise"
                    );
                    continue;
                };
                slots.truncate(sets as usize);
                trim_trailing(&mut slots);
                if !slots.is_empty() {
                    session.results.insert(id, slots);
                }
            }
            let id = session.id.clone();
            workout.sessions.push(session);
            Ok(id)
        })
    }
}
