//! Workout command implementation.
//!
//! Provides `liftlog workout add`, `edit`, `delete` and `show`.

use chrono::{DateTime, Utc};

use crate::cli::args::{WorkoutArgs, WorkoutSubcommand};
use crate::error::{LiftlogError, Result};
use crate::model::{Exercise, Session, Trend, Workout};
use crate::ui::{format_days_ago, format_set, format_trend, LiftlogTheme, UserInterface};

use super::dispatcher::{Command, CommandResult, DataContext};
use super::lookup;

/// The workout command implementation.
pub struct WorkoutCommand {
    context: DataContext,
    args: WorkoutArgs,
}

impl WorkoutCommand {
    pub fn new(context: &DataContext, args: WorkoutArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

impl Command for WorkoutCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = self.context.open_store()?;

        match &self.args.command {
            WorkoutSubcommand::Add {
                program,
                name,
                label,
            } => {
                let pid = lookup::program(store.document(), program)?.id.clone();
                if let Some(id) = store.add_workout(pid.as_str(), name, label)? {
                    ui.success(&format!("Added workout '{}' [{}]", name.trim(), id));
                }
            }
            WorkoutSubcommand::Edit {
                workout,
                name,
                label,
            } => {
                let found = lookup::workout(store.document(), workout)?;
                let id = found.id.clone();
                let name = name.clone().unwrap_or_else(|| found.name.clone());
                let label = label.clone().unwrap_or_else(|| found.label.clone());
                store.edit_workout_meta(id.as_str(), &name, &label)?;
                ui.success(&format!("Updated workout '{}'", name.trim()));
            }
            WorkoutSubcommand::Delete { workout } => {
                let doc = store.snapshot();
                let found = lookup::workout(&doc, workout)?;
                let program = doc.program_of(found.id.as_str()).ok_or_else(|| {
                    LiftlogError::Other(anyhow::anyhow!(
                        "Workout '{}' does not belong to any program",
                        found.name
                    ))
                })?;
                store.delete_workout(program.id.as_str(), found.id.as_str())?;
                ui.success(&format!("Deleted workout '{}'", found.name));
            }
            WorkoutSubcommand::Show { workout } => {
                let doc = store.snapshot();
                let found = lookup::workout(&doc, workout)?;
                show_workout(ui, found, store.clock().now());
            }
        }

        Ok(CommandResult::success())
    }
}

/// Count of filled slots and total sets in a session.
fn progress(workout: &Workout, session: &Session) -> (usize, usize) {
    workout.exercises.iter().fold((0, 0), |(done, total), ex| {
        let logged = (0..ex.sets as usize)
            .filter(|&i| session.slot(ex.id.as_str(), i).is_some())
            .count();
        (done + logged, total + ex.sets as usize)
    })
}

fn status_line(workout: &Workout, today: Option<&Session>) -> String {
    match today {
        None => "Today: not started".to_string(),
        Some(s) if s.complete => "Today: complete".to_string(),
        Some(s) if s.all_sets_logged(workout) => "Today: all sets logged".to_string(),
        Some(s) => {
            let (done, total) = progress(workout, s);
            format!("Today: in progress ({}/{} sets)", done, total)
        }
    }
}

fn show_exercise(
    ui: &mut dyn UserInterface,
    theme: &LiftlogTheme,
    index: usize,
    exercise: &Exercise,
    previous: Option<&Session>,
    today: Option<&Session>,
) {
    let trend = match (previous, today) {
        (Some(p), Some(t)) => Trend::for_exercise(p, t, exercise.id.as_str()),
        _ => None,
    };
    let trend = match trend {
        Some(Trend::Up) => format!(" {}", theme.trend_up.apply_to(format_trend(Trend::Up))),
        Some(Trend::Down) => format!(" {}", theme.trend_down.apply_to(format_trend(Trend::Down))),
        Some(Trend::Equal) => format!(" {}", theme.dim.apply_to(format_trend(Trend::Equal))),
        None => String::new(),
    };

    ui.message(&format!(
        "{}. {} {}{}",
        index + 1,
        theme.format_named(&exercise.name, exercise.id.as_str()),
        theme.dim.apply_to(format!(
            "{} x {}-{}",
            exercise.sets, exercise.target_reps.min, exercise.target_reps.max
        )),
        trend
    ));
    if ui.output_mode().shows_details() && !exercise.notes.is_empty() {
        ui.message(&format!("   {}", theme.dim.apply_to(&exercise.notes)));
    }

    let has_previous = previous.is_some_and(|p| !p.results_for(exercise.id.as_str()).is_empty());
    ui.message(&format!(
        "   {:<4} {:<12} {}",
        "Set",
        if has_previous { "Last" } else { "" },
        "Today"
    ));
    for i in 0..exercise.sets as usize {
        let last = if has_previous {
            previous.map(|p| format_set(p.slot(exercise.id.as_str(), i)))
        } else {
            None
        };
        let now = today
            .map(|t| format_set(t.slot(exercise.id.as_str(), i)))
            .unwrap_or_else(|| "-".to_string());
        ui.message(&format!(
            "   {:<4} {:<12} {}",
            i + 1,
            last.unwrap_or_default(),
            now
        ));
    }
}

fn show_workout(ui: &mut dyn UserInterface, workout: &Workout, now: DateTime<Utc>) {
    let theme = LiftlogTheme::detect();
    let today_date = now.date_naive();
    let today = workout.today_session(today_date);
    let previous = workout.previous_session(today_date);

    let title = if workout.label.is_empty() {
        workout.name.clone()
    } else {
        format!("{} · {}", workout.name, workout.label)
    };
    ui.show_header(&title);
    ui.message(&status_line(workout, today));
    if let Some(prev) = previous {
        ui.message(&format!(
            "Last session: {}",
            theme.date.apply_to(format_days_ago(prev.date_iso, now))
        ));
    }
    if ui.output_mode().shows_details() {
        if let Some(at) = today.and_then(|s| s.completed_at) {
            ui.message(&format!("Completed at {}", at.format("%Y-%m-%d %H:%M UTC")));
        }
    }

    if workout.exercises.is_empty() {
        ui.message("No exercises yet.");
        return;
    }
    for (i, exercise) in workout.exercises.iter().enumerate() {
        ui.message("");
        show_exercise(ui, &theme, i, exercise, previous, today);
    }
}
