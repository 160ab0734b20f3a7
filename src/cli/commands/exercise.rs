//! Exercise command implementation.
//!
//! Provides `liftlog exercise add`, `edit`, `delete`, `sets`, `remove-set`
//! and `clear`.

use crate::cli::args::{ExerciseArgs, ExerciseFields, ExerciseSubcommand};
use crate::error::Result;
use crate::model::{Exercise, ExerciseSpec};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, DataContext};
use super::lookup;

/// The exercise command implementation.
pub struct ExerciseCommand {
    context: DataContext,
    args: ExerciseArgs,
}

impl ExerciseCommand {
    pub fn new(context: &DataContext, args: ExerciseArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

fn spec_for_add(name: &str, fields: &ExerciseFields) -> ExerciseSpec {
    ExerciseSpec {
        name: name.to_string(),
        sets: fields.sets,
        min: fields.min,
        max: fields.max,
        notes: fields.notes.clone(),
    }
}

/// Current values overlaid with whatever the user passed.
fn spec_for_edit(current: &Exercise, name: Option<&str>, fields: &ExerciseFields) -> ExerciseSpec {
    ExerciseSpec {
        name: name.unwrap_or(&current.name).to_string(),
        sets: Some(fields.sets.unwrap_or(current.sets)),
        min: Some(fields.min.unwrap_or(current.target_reps.min)),
        max: Some(fields.max.unwrap_or(current.target_reps.max)),
        notes: Some(fields.notes.clone().unwrap_or_else(|| current.notes.clone())),
    }
}

impl Command for ExerciseCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = self.context.open_store()?;
        let doc = store.snapshot();

        match &self.args.command {
            ExerciseSubcommand::Add {
                workout,
                name,
                fields,
            } => {
                let wid = lookup::workout(&doc, workout)?.id.clone();
                let spec = spec_for_add(name, fields);
                if let Some(id) = store.add_exercise(wid.as_str(), &spec)? {
                    ui.success(&format!("Added exercise '{}' [{}]", name.trim(), id));
                }
            }
            ExerciseSubcommand::Edit {
                workout,
                exercise,
                name,
                fields,
            } => {
                let found = lookup::workout(&doc, workout)?;
                let current = lookup::exercise(found, exercise)?;
                let spec = spec_for_edit(current, name.as_deref(), fields);
                store.edit_exercise(found.id.as_str(), current.id.as_str(), &spec)?;
                ui.success(&format!("Updated exercise '{}'", spec.name.trim()));
            }
            ExerciseSubcommand::Delete { workout, exercise } => {
                let found = lookup::workout(&doc, workout)?;
                let current = lookup::exercise(found, exercise)?;
                store.delete_exercise(found.id.as_str(), current.id.as_str())?;
                ui.success(&format!("Deleted exercise '{}'", current.name));
            }
            ExerciseSubcommand::Sets {
                workout,
                exercise,
                delta,
            } => {
                let found = lookup::workout(&doc, workout)?;
                let current = lookup::exercise(found, exercise)?;
                store.increment_exercise_sets(found.id.as_str(), current.id.as_str(), *delta)?;
                let sets = store
                    .document()
                    .workout(found.id.as_str())
                    .and_then(|w| w.exercise(current.id.as_str()))
                    .map(|e| e.sets)
                    .unwrap_or(current.sets);
                ui.success(&format!("{} now has {} sets", current.name, sets));
            }
            ExerciseSubcommand::RemoveSet {
                workout,
                exercise,
                set,
            } => {
                let found = lookup::workout(&doc, workout)?;
                let current = lookup::exercise(found, exercise)?;
                if current.sets <= 1 {
                    ui.warning(&format!("{} has only one set", current.name));
                    return Ok(CommandResult::success());
                }
                let index = lookup::set_index(current, *set)?;
                store.remove_exercise_set(found.id.as_str(), current.id.as_str(), index)?;
                ui.success(&format!(
                    "Removed set {} from {}, {} sets left",
                    set,
                    current.name,
                    current.sets - 1
                ));
            }
            ExerciseSubcommand::Clear {
                workout,
                exercise,
                all,
            } => {
                let found = lookup::workout(&doc, workout)?;
                let current = lookup::exercise(found, exercise)?;
                if *all {
                    store.clear_exercise_results(found.id.as_str(), current.id.as_str())?;
                    ui.success(&format!("Cleared every logged set of {}", current.name));
                } else {
                    store.clear_exercise_results_today(found.id.as_str(), current.id.as_str())?;
                    ui.success(&format!("Cleared today's sets of {}", current.name));
                }
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawSet;
    use crate::store::StoreOptions;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn context(temp: &TempDir) -> DataContext {
        DataContext::new(temp.path(), StoreOptions::default())
    }

    fn run(ctx: &DataContext, command: ExerciseSubcommand) -> MockUI {
        let mut ui = MockUI::new();
        ExerciseCommand::new(ctx, ExerciseArgs { command })
            .execute(&mut ui)
            .unwrap();
        ui
    }

    fn bench(ctx: &DataContext) -> Exercise {
        let store = ctx.open_store().unwrap();
        let day1 = lookup::workout(store.document(), "Day 1").unwrap();
        lookup::exercise(day1, "Bench Press").unwrap().clone()
    }

    #[test]
    fn add_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp);
        let ui = run(
            &ctx,
            ExerciseSubcommand::Add {
                workout: "Day 1".into(),
                name: "Dips".into(),
                fields: ExerciseFields::default(),
            },
        );
        assert!(ui.has_success("Added exercise 'Dips'"));

        let store = ctx.open_store().unwrap();
        let day1 = lookup::workout(store.document(), "Day 1").unwrap();
        let dips = lookup::exercise(day1, "dips").unwrap();
        assert_eq!(dips.sets, 3);
        assert_eq!(dips.target_reps.min, 1);
    }

    #[test]
    fn edit_keeps_unset_fields() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp);
        run(
            &ctx,
            ExerciseSubcommand::Edit {
                workout: "Day 1".into(),
                exercise: "Bench Press".into(),
                name: None,
                fields: ExerciseFields {
                    notes: Some("Pause reps".into()),
                    ..Default::default()
                },
            },
        );

        let bench = bench(&ctx);
        assert_eq!(bench.name, "Bench Press");
        assert_eq!(bench.sets, 3);
        assert_eq!((bench.target_reps.min, bench.target_reps.max), (5, 8));
        assert_eq!(bench.notes, "Pause reps");
    }

    #[test]
    fn sets_delta_is_clamped() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp);
        let ui = run(
            &ctx,
            ExerciseSubcommand::Sets {
                workout: "Day 1".into(),
                exercise: "Bench Press".into(),
                delta: -10,
            },
        );
        assert!(ui.has_success("Bench Press now has 1 sets"));
        assert_eq!(bench(&ctx).sets, 1);
    }

    #[test]
    fn remove_set_shifts_today_results() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp);
        {
            let mut store = ctx.open_store().unwrap();
            let day1 = lookup::workout(store.document(), "Day 1").unwrap();
            let (wid, eid) = (day1.id.clone(), day1.exercises[0].id.clone());
            store
                .save_set_result(wid.as_str(), eid.as_str(), 0, &RawSet::new("100", "5"))
                .unwrap();
            store
                .save_set_result(wid.as_str(), eid.as_str(), 1, &RawSet::new("105", "5"))
                .unwrap();
        }

        run(
            &ctx,
            ExerciseSubcommand::RemoveSet {
                workout: "Day 1".into(),
                exercise: "Bench Press".into(),
                set: 1,
            },
        );

        let store = ctx.open_store().unwrap();
        let day1 = lookup::workout(store.document(), "Day 1").unwrap();
        let session = &day1.sessions[0];
        let slots = session.results_for(day1.exercises[0].id.as_str());
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].and_then(|s| s.weight), Some(105.0));
        assert_eq!(day1.exercises[0].sets, 2);
    }

    #[test]
    fn remove_set_at_one_set_warns() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp);
        run(
            &ctx,
            ExerciseSubcommand::Sets {
                workout: "Day 1".into(),
                exercise: "Bench Press".into(),
                delta: -2,
            },
        );
        let ui = run(
            &ctx,
            ExerciseSubcommand::RemoveSet {
                workout: "Day 1".into(),
                exercise: "Bench Press".into(),
                set: 1,
            },
        );
        assert!(ui.has_warning("only one set"));
        assert_eq!(bench(&ctx).sets, 1);
    }

    #[test]
    fn delete_unknown_exercise_errors() {
        let temp = TempDir::new().unwrap();
        let ctx = context(&temp);
        let mut ui = MockUI::new();
        let err = ExerciseCommand::new(
            &ctx,
            ExerciseArgs {
                command: ExerciseSubcommand::Delete {
                    workout: "Day 1".into(),
                    exercise: "Curl".into(),
                },
            },
        )
        .execute(&mut ui)
        .unwrap_err();
        assert_eq!(err.to_string(), "Exercise not found: Curl");
    }
}
