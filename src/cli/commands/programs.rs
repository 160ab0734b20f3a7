//! Program listing and program commands.
//!
//! `liftlog programs` lists everything; `liftlog program ...` adds,
//! renames, deletes, exports and imports single programs.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::{ProgramArgs, ProgramSubcommand};
use crate::error::Result;
use crate::model::Workout;
use crate::ui::{format_days_ago, LiftlogTheme, UserInterface};

use super::dispatcher::{Command, CommandResult, DataContext};
use super::lookup;

/// The `programs` listing command.
pub struct ProgramsCommand {
    context: DataContext,
}

impl ProgramsCommand {
    pub fn new(context: &DataContext) -> Self {
        Self {
            context: context.clone(),
        }
    }
}

fn workout_line(theme: &LiftlogTheme, workout: &Workout, now: chrono::DateTime<chrono::Utc>) -> String {
    let mut line = format!("  {}", theme.format_named(&workout.name, workout.id.as_str()));
    if !workout.label.is_empty() {
        line.push_str(&format!(" {}", theme.dim.apply_to(&workout.label)));
    }
    let count = workout.exercises.len();
    line.push_str(&format!(
        " · {} {}",
        count,
        if count == 1 { "exercise" } else { "exercises" }
    ));
    if let Some(last) = workout.sessions.last() {
        line.push_str(&format!(
            " · {}",
            theme.date.apply_to(format!("last {}", format_days_ago(last.date_iso, now)))
        ));
    }
    line
}

impl Command for ProgramsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = self.context.open_store()?;
        let doc = store.snapshot();
        let now = store.clock().now();
        let theme = LiftlogTheme::detect();

        if doc.programs.is_empty() {
            ui.message("No programs yet. Add one with 'liftlog program add <NAME>'.");
            return Ok(CommandResult::success());
        }

        for program in &doc.programs {
            ui.message(&theme.format_named(&program.name, program.id.as_str()));
            let mut any = false;
            for workout in doc.program_workouts(program) {
                ui.message(&workout_line(&theme, workout, now));
                any = true;
            }
            if !any {
                ui.message(&format!("  {}", theme.dim.apply_to("(no workouts)")));
            }
        }

        Ok(CommandResult::success())
    }
}

/// The `program` command implementation.
pub struct ProgramCommand {
    context: DataContext,
    args: ProgramArgs,
}

impl ProgramCommand {
    pub fn new(context: &DataContext, args: ProgramArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ProgramArgs {
        &self.args
    }
}

/// Write `contents` to `out`, or print it when `out` is `-`.
pub(super) fn write_output(ui: &mut dyn UserInterface, out: &Path, contents: &str) -> Result<bool> {
    if out == Path::new("-") {
        ui.data(contents);
        return Ok(false);
    }
    fs::write(out, contents)?;
    Ok(true)
}

impl Command for ProgramCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = self.context.open_store()?;

        match &self.args.command {
            ProgramSubcommand::Add { name } => {
                let id = store.add_program(name)?;
                ui.success(&format!("Added program '{}' [{}]", name.trim(), id));
            }
            ProgramSubcommand::Rename { program, name } => {
                let id = lookup::program(store.document(), program)?.id.clone();
                store.rename_program(id.as_str(), name)?;
                ui.success(&format!("Renamed program to '{}'", name.trim()));
            }
            ProgramSubcommand::Delete { program } => {
                let found = lookup::program(store.document(), program)?;
                let (id, name, workouts) = (found.id.clone(), found.name.clone(), found.workouts.len());
                store.delete_program(id.as_str())?;
                ui.success(&format!("Deleted program '{}' and {} workouts", name, workouts));
            }
            ProgramSubcommand::Export { program, out } => {
                let id = lookup::program(store.document(), program)?.id.clone();
                let Some(bundle) = store.export_program(id.as_str()) else {
                    return Ok(CommandResult::failure(1));
                };
                let out = out.clone().unwrap_or_else(|| PathBuf::from(bundle.file_name()));
                if write_output(ui, &out, &bundle.to_json_pretty()?)? {
                    ui.success(&format!(
                        "Exported '{}' to {}",
                        bundle.program.name,
                        out.display()
                    ));
                }
            }
            ProgramSubcommand::Import { file } => {
                let json = fs::read_to_string(file)?;
                let id = store.import_program(&json)?;
                let name = store
                    .document()
                    .program(id.as_str())
                    .map(|p| p.name.clone())
                    .unwrap_or_default();
                ui.success(&format!("Imported program '{}' [{}]", name, id));
            }
        }

        Ok(CommandResult::success())
    }
}
