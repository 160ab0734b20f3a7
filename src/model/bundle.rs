//! Portable single-program export format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::document::{Document, Program, Workout};
use super::{ExerciseId, WorkoutId};
use crate::error::{LiftlogError, Result};

/// Tag identifying a program bundle.
pub const BUNDLE_KIND: &str = "swt:program";

/// Bundle format version written by [`ProgramBundle::from_document`].
pub const BUNDLE_VERSION: u32 = 1;

/// Name given to an imported program that has none.
pub const IMPORTED_PROGRAM_NAME: &str = "Imported Program";

/// One program plus the workouts it references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramBundle {
    pub kind: String,
    pub version: u32,
    pub program: Program,
    #[serde(default)]
    pub workouts: BTreeMap<WorkoutId, Workout>,
}

fn invalid(message: impl Into<String>) -> LiftlogError {
    LiftlogError::InvalidBundle {
        message: message.into(),
    }
}

impl ProgramBundle {
    /// Bundle a program and only its own workouts. `None` if the program
    /// does not exist.
    pub fn from_document(doc: &Document, program_id: &str) -> Option<Self> {
        let program = doc.program(program_id)?;
        let workouts = program
            .workouts
            .iter()
            .filter_map(|wid| doc.workouts.get(wid).map(|w| (wid.clone(), w.clone())))
            .collect();
        Some(Self {
            kind: BUNDLE_KIND.to_string(),
            version: BUNDLE_VERSION,
            program: program.clone(),
            workouts,
        })
    }

    /// Parse and validate a bundle file.
    ///
    /// The `kind` tag must match and `program` must be an object. A program
    /// without an id or name is accepted; ids are regenerated on import.
    pub fn parse(json: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| invalid(format!("not valid JSON: {}", e)))?;
        Self::from_value(value)
    }

    pub fn from_value(mut value: Value) -> Result<Self> {
        let root = value
            .as_object_mut()
            .ok_or_else(|| invalid("expected a JSON object"))?;

        match root.get("kind").and_then(Value::as_str) {
            Some(BUNDLE_KIND) => {}
            Some(other) => return Err(invalid(format!("unexpected kind '{}'", other))),
            None => return Err(invalid("missing kind tag")),
        }
        if !root.contains_key("version") {
            root.insert("version".into(), Value::from(BUNDLE_VERSION));
        }

        let program = root
            .get_mut("program")
            .and_then(Value::as_object_mut)
            .ok_or_else(|| invalid("missing program"))?;
        program.entry("id").or_insert_with(|| Value::from(""));
        let name = match program.get("name") {
            Some(Value::String(s)) => s.clone(),
            None | Some(Value::Null) => String::new(),
            Some(other) => other.to_string(),
        };
        program.insert("name".into(), Value::from(name));

        serde_json::from_value(value).map_err(|e| invalid(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Suggested file name: `swt-<slug>.json`.
    pub fn file_name(&self) -> String {
        format!("swt-{}.json", slug(&self.program.name))
    }
}

/// Lowercase `name`, collapsing runs of characters outside `[a-z0-9-_]`
/// into a single `-`.
pub fn slug(name: &str) -> String {
    let lowered = if name.is_empty() {
        "program".to_string()
    } else {
        name.to_lowercase()
    };
    let mut out = String::with_capacity(lowered.len());
    let mut in_run = false;
    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_' {
            out.push(c);
            in_run = false;
        } else if !in_run {
            out.push('-');
            in_run = true;
        }
    }
    out
}

/// Copy a workout under a new id, regenerating exercise and session ids and
/// re-keying logged results to the new exercise ids.
pub(crate) fn rekey_workout(source: &Workout, id: WorkoutId) -> Workout {
    let mut workout = Workout::new(id, source.name.clone(), source.label.clone());

    let mut exercise_ids: BTreeMap<ExerciseId, ExerciseId> = BTreeMap::new();
    for exercise in &source.exercises {
        let new_id = workout.fresh_exercise_id();
        exercise_ids.insert(exercise.id.clone(), new_id.clone());
        let mut copy = exercise.clone();
        copy.id = new_id;
        copy.normalize();
        workout.exercises.push(copy);
    }

    for session in &source.sessions {
        let mut copy = session.clone();
        copy.id = workout.fresh_session_id();
        copy.results = session
            .results
            .iter()
            .map(|(eid, slots)| {
                let key = exercise_ids
                    .get(eid)
                    .cloned()
                    .unwrap_or_else(|| eid.clone());
                (key, slots.clone())
            })
            .collect();
        workout.sessions.push(copy);
    }

    workout
}

/// Build a fresh program from a bundle, with new ids throughout. Workout ids
/// in the program list without a body in the bundle are skipped.
pub(crate) fn instantiate(bundle: &ProgramBundle, doc: &Document) -> (Program, Vec<Workout>) {
    let name = match bundle.program.name.trim() {
        "" => IMPORTED_PROGRAM_NAME.to_string(),
        _ => bundle.program.name.clone(),
    };
    let mut program = Program::new(doc.fresh_program_id(), name);
    let mut workouts: Vec<Workout> = Vec::new();

    for old_id in &bundle.program.workouts {
        let Some(source) = bundle.workouts.get(old_id) else {
            continue;
        };
        let new_id = WorkoutId::generate_unique(|id| {
            doc.workouts.contains_key(id) || workouts.iter().any(|w| w.id == *id)
        });
        program.workouts.push(new_id.clone());
        workouts.push(rekey_workout(source, new_id));
    }

    (program, workouts)
}
