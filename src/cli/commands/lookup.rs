//! Resolve command-line references to programs, workouts and exercises.
//!
//! A reference matches an exact id first, then a name (case-insensitive,
//! first match wins).

use crate::error::{LiftlogError, Result};
use crate::model::{Document, Exercise, Program, Workout};

fn name_matches(name: &str, reference: &str) -> bool {
    name.trim().eq_ignore_ascii_case(reference.trim())
}

pub fn program<'a>(doc: &'a Document, reference: &str) -> Result<&'a Program> {
    doc.program(reference)
        .or_else(|| doc.programs.iter().find(|p| name_matches(&p.name, reference)))
        .ok_or_else(|| LiftlogError::not_found("Program", reference))
}

pub fn workout<'a>(doc: &'a Document, reference: &str) -> Result<&'a Workout> {
    if let Some(workout) = doc.workout(reference) {
        return Ok(workout);
    }
    // Program order first, then orphans.
    doc.programs
        .iter()
        .flat_map(|p| doc.program_workouts(p))
        .chain(doc.workouts.values())
        .find(|w| name_matches(&w.name, reference))
        .ok_or_else(|| LiftlogError::not_found("Workout", reference))
}

pub fn exercise<'a>(workout: &'a Workout, reference: &str) -> Result<&'a Exercise> {
    workout
        .exercise(reference)
        .or_else(|| workout.exercises.iter().find(|e| name_matches(&e.name, reference)))
        .ok_or_else(|| LiftlogError::not_found("Exercise", reference))
}

/// Convert a 1-based set number to an index, checking it against the
/// exercise's set count.
pub fn set_index(exercise: &Exercise, set: u32) -> Result<usize> {
    if set == 0 || set > exercise.sets {
        return Err(LiftlogError::Other(anyhow::anyhow!(
            "{} has {} sets, there is no set {}",
            exercise.name,
            exercise.sets,
            set
        )));
    }
    Ok(set as usize - 1)
}
