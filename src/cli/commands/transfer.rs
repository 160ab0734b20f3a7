//! Whole-data backup commands.
//!
//! `liftlog export` writes every program, workout and session to one JSON
//! file; `liftlog import` replaces the current data with such a file.

use std::fs;
use std::path::PathBuf;

use crate::cli::args::{ExportArgs, ImportArgs};
use crate::error::Result;
use crate::store::BACKUP_FILE_NAME;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, DataContext};
use super::programs::write_output;

/// The export command implementation.
pub struct ExportCommand {
    context: DataContext,
    args: ExportArgs,
}

impl ExportCommand {
    pub fn new(context: &DataContext, args: ExportArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

impl Command for ExportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = self.context.open_store()?;
        let json = store.export_data()?;
        let out = self
            .args
            .out
            .clone()
            .unwrap_or_else(|| PathBuf::from(BACKUP_FILE_NAME));

        if write_output(ui, &out, &json)? {
            ui.success(&format!("Backup written to {}", out.display()));
        }
        Ok(CommandResult::success())
    }
}

/// The import command implementation.
pub struct ImportCommand {
    context: DataContext,
    args: ImportArgs,
}

impl ImportCommand {
    pub fn new(context: &DataContext, args: ImportArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

impl Command for ImportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let json = fs::read_to_string(&self.args.file)?;
        let mut store = self.context.open_store()?;
        store.import_data(&json)?;

        let doc = store.document();
        ui.success(&format!(
            "Restored {} programs and {} workouts from {}",
            doc.programs.len(),
            doc.workouts.len(),
            self.args.file.display()
        ));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LiftlogError;
    use crate::store::StoreOptions;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn export_then_import_restores_data() {
        let temp = TempDir::new().unwrap();
        let ctx = DataContext::new(temp.path().join("data"), StoreOptions::default());
        let backup = temp.path().join("backup.json");

        let mut ui = MockUI::new();
        ExportCommand::new(&ctx, ExportArgs { out: Some(backup.clone()) })
            .execute(&mut ui)
            .unwrap();
        assert!(ui.has_success("Backup written to"));

        {
            let mut store = ctx.open_store().unwrap();
            let pid = store.document().programs[0].id.clone();
            store.delete_program(pid.as_str()).unwrap();
            assert!(store.document().programs.is_empty());
        }

        let mut ui = MockUI::new();
        ImportCommand::new(&ctx, ImportArgs { file: backup })
            .execute(&mut ui)
            .unwrap();
        assert!(ui.has_success("Restored 1 programs and 2 workouts"));
        assert_eq!(ctx.open_store().unwrap().document().programs.len(), 1);
    }

    #[test]
    fn export_to_stdout() {
        let temp = TempDir::new().unwrap();
        let ctx = DataContext::new(temp.path(), StoreOptions::default());
        let mut ui = MockUI::new();
        ExportCommand::new(&ctx, ExportArgs { out: Some(PathBuf::from("-")) })
            .execute(&mut ui)
            .unwrap();
        assert!(ui.data_lines()[0].contains("\"programs\""));
    }

    #[test]
    fn invalid_backup_is_rejected() {
        let temp = TempDir::new().unwrap();
        let ctx = DataContext::new(temp.path().join("data"), StoreOptions::default());
        let bad = temp.path().join("bad.json");
        fs::write(&bad, r#"{"programs": []}"#).unwrap();

        let mut ui = MockUI::new();
        let err = ImportCommand::new(&ctx, ImportArgs { file: bad })
            .execute(&mut ui)
            .unwrap_err();
        assert!(matches!(err, LiftlogError::InvalidDocument { .. }));
        assert_eq!(ctx.open_store().unwrap().document().programs.len(), 1);
    }
}
