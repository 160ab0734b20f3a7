//! Log command implementation.
//!
//! Provides `liftlog log set`, `clear`, `skip-rest` and `complete`, which
//! all work on today's session of a workout.

use crate::cli::args::{LogArgs, LogSubcommand};
use crate::error::Result;
use crate::model::{RawSet, Workout};
use crate::storage::Storage;
use crate::store::WorkoutStore;
use crate::ui::{format_set, UserInterface};

use super::dispatcher::{Command, CommandResult, DataContext};
use super::lookup;

/// The log command implementation.
pub struct LogCommand {
    context: DataContext,
    args: LogArgs,
}

impl LogCommand {
    pub fn new(context: &DataContext, args: LogArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

/// Whether set writes to today's session would be refused.
fn is_locked<S: Storage>(store: &WorkoutStore<S>, workout: &Workout) -> bool {
    store.options().lock_completed_sessions
        && workout
            .today_session(store.clock().today())
            .is_some_and(|s| s.complete)
}

impl Command for LogCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = self.context.open_store()?;
        let doc = store.snapshot();

        let workout_ref = match &self.args.command {
            LogSubcommand::Set { workout, .. }
            | LogSubcommand::Clear { workout, .. }
            | LogSubcommand::SkipRest { workout, .. }
            | LogSubcommand::Complete { workout } => workout,
        };
        let workout = lookup::workout(&doc, workout_ref)?;
        let wid = workout.id.as_str();

        // Strict mode lets the store report the lock as an error.
        let set_level = !matches!(self.args.command, LogSubcommand::Complete { .. });
        if set_level && is_locked(&store, workout) && !store.options().strict {
            ui.warning(&format!(
                "Today's session of '{}' is complete; nothing changed",
                workout.name
            ));
            return Ok(CommandResult::success());
        }

        match &self.args.command {
            LogSubcommand::Set {
                exercise,
                set,
                weight,
                reps,
                ..
            } => {
                let exercise = lookup::exercise(workout, exercise)?;
                let index = lookup::set_index(exercise, *set)?;
                let raw = RawSet::new(weight.as_str(), reps.as_str());
                store.save_set_result(wid, exercise.id.as_str(), index, &raw)?;
                ui.success(&format!(
                    "{} set {}: {}",
                    exercise.name,
                    set,
                    format_set(Some(&raw.parse()))
                ));
            }
            LogSubcommand::Clear { exercise, set, .. } => {
                let exercise = lookup::exercise(workout, exercise)?;
                let index = lookup::set_index(exercise, *set)?;
                store.clear_set_result(wid, exercise.id.as_str(), index)?;
                ui.success(&format!("Cleared {} set {}", exercise.name, set));
            }
            LogSubcommand::SkipRest { exercise, .. } => {
                let exercise = lookup::exercise(workout, exercise)?;
                store.skip_remaining_sets(wid, exercise.id.as_str())?;
                ui.success(&format!("Skipped remaining sets of {}", exercise.name));
            }
            LogSubcommand::Complete { .. } => {
                if store.complete_session(wid)?.is_some() {
                    ui.success(&format!("Completed today's session of '{}'", workout.name));
                }
            }
        }

        Ok(CommandResult::success())
    }
}
