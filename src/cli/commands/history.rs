//! History command implementation.
//!
//! The `liftlog history` command shows a workout's sessions, newest first.

use chrono::{DateTime, Utc};

use crate::cli::args::HistoryArgs;
use crate::error::Result;
use crate::model::{Session, Workout};
use crate::ui::{format_days_ago, format_set, LiftlogTheme, UserInterface};

use super::dispatcher::{Command, CommandResult, DataContext};
use super::lookup;

/// The history command implementation.
pub struct HistoryCommand {
    context: DataContext,
    args: HistoryArgs,
}

impl HistoryCommand {
    pub fn new(context: &DataContext, args: HistoryArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &HistoryArgs {
        &self.args
    }
}

fn session_line(theme: &LiftlogTheme, session: &Session, now: DateTime<Utc>) -> String {
    let status = if session.complete {
        theme.success.apply_to("[done]").to_string()
    } else {
        theme.dim.apply_to("[open]").to_string()
    };
    format!(
        "{} {} ({})",
        status,
        session.date(),
        theme.date.apply_to(format_days_ago(session.date_iso, now))
    )
}

/// One line per exercise with logged results.
fn result_lines(workout: &Workout, session: &Session) -> Vec<String> {
    let mut lines = Vec::new();
    for exercise in &workout.exercises {
        let slots = session.results_for(exercise.id.as_str());
        if slots.iter().all(Option::is_none) {
            continue;
        }
        let sets: Vec<String> = slots.iter().map(|s| format_set(s.as_ref())).collect();
        lines.push(format!("  {}: {}", exercise.name, sets.join(", ")));
    }
    lines
}

impl Command for HistoryCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = self.context.open_store()?;
        let doc = store.snapshot();
        let workout = lookup::workout(&doc, &self.args.workout)?;
        let now = store.clock().now();
        let theme = LiftlogTheme::detect();

        ui.show_header(&format!("History: {}", workout.name));

        if workout.sessions.is_empty() {
            ui.message("No sessions logged yet.");
            return Ok(CommandResult::success());
        }

        let limit = self.args.limit.unwrap_or(usize::MAX);
        for session in workout.sessions_newest_first().take(limit) {
            ui.message(&session_line(&theme, session, now));
            for line in result_lines(workout, session) {
                ui.message(&line);
            }
            if ui.output_mode().shows_details() {
                if let Some(at) = session.completed_at {
                    ui.message(&format!("  completed {}", at.format("%Y-%m-%d %H:%M UTC")));
                }
            }
        }

        let shown = limit.min(workout.sessions.len());
        if shown < workout.sessions.len() {
            let note = format!("{} of {} sessions shown", shown, workout.sessions.len());
            ui.message(&theme.dim.apply_to(note).to_string());
        }

        Ok(CommandResult::success())
    }
}
