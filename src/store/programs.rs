//! Program and workout mutations.

use super::{find_program, find_workout, Miss, WorkoutStore};
use crate::error::Result;
use crate::model::{Program, ProgramId, Workout, WorkoutId};
use crate::storage::Storage;

impl<S: Storage> WorkoutStore<S> {
    /// Append a program with no workouts.
    pub fn add_program(&mut self, name: &str) -> Result<ProgramId> {
        let name = name.trim().to_string();
        self.apply("add_program", move |doc, _| {
            let program = Program::new(doc.fresh_program_id(), name);
            let id = program.id.clone();
            doc.programs.push(program);
            id
        })
    }

    pub fn rename_program(&mut self, program_id: &str, name: &str) -> Result<()> {
        self.update("rename_program", |doc, _| {
            find_program(doc, program_id)?.name = name.trim().to_string();
            Ok(())
        })?;
        Ok(())
    }

    /// Remove a program together with every workout it references.
    pub fn delete_program(&mut self, program_id: &str) -> Result<()> {
        self.update("delete_program", |doc, _| {
            let index = doc
                .programs
                .iter()
                .position(|p| p.id.as_str() == program_id)
                .ok_or_else(|| Miss::not_found("Program", program_id))?;
            let program = doc.programs.remove(index);
            for wid in &program.workouts {
                doc.workouts.remove(wid);
            }
            Ok(())
        })?;
        Ok(())
    }

    /// Create a workout and append it to the program. `None` if the program
    /// does not exist.
    pub fn add_workout(&mut self, program_id: &str, name: &str, label: &str) -> Result<Option<WorkoutId>> {
        self.update("add_workout", |doc, _| {
            let id = doc.fresh_workout_id();
            find_program(doc, program_id)?.workouts.push(id.clone());
            let workout = Workout::new(id.clone(), name.trim(), label.trim());
            doc.workouts.insert(id.clone(), workout);
            Ok(id)
        })
    }

    /// Replace a workout's name and label.
    pub fn edit_workout_meta(&mut self, workout_id: &str, name: &str, label: &str) -> Result<()> {
        self.update("edit_workout_meta", |doc, _| {
            let workout = find_workout(doc, workout_id)?;
            workout.name = name.trim().to_string();
            workout.label = label.trim().to_string();
            Ok(())
        })?;
        Ok(())
    }

    /// Detach a workout from its program and drop it from the workout map.
    /// A workout the program does not list is treated as unknown.
    pub fn delete_workout(&mut self, program_id: &str, workout_id: &str) -> Result<()> {
        self.update("delete_workout", |doc, _| {
            let program = find_program(doc, program_id)?;
            let listed = program.workouts.len();
            program.workouts.retain(|w| w.as_str() != workout_id);
            if program.workouts.len() == listed {
                return Err(Miss::not_found("Workout", workout_id));
            }
            doc.workouts.remove(workout_id);
            Ok(())
        })?;
        Ok(())
    }
}
