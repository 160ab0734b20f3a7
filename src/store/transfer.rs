//! Program bundles and whole-document backup.

use serde_json::Value;

use super::WorkoutStore;
use crate::error::{LiftlogError, Result};
use crate::model::bundle::instantiate;
use crate::model::{Document, ProgramBundle, ProgramId};
use crate::storage::Storage;

/// Suggested file name for a whole-document backup.
pub const BACKUP_FILE_NAME: &str = "simple-workout-tracker-backup.json";

fn invalid_document(message: impl Into<String>) -> LiftlogError {
    LiftlogError::InvalidDocument {
        message: message.into(),
    }
}

/// Check the top-level shape of a backup, then decode and normalize it.
fn parse_document(json: &str) -> Result<Document> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| invalid_document(format!("not valid JSON: {}", e)))?;
    let root = value
        .as_object()
        .ok_or_else(|| invalid_document("expected a JSON object"))?;
    if !root.get("programs").is_some_and(Value::is_array) {
        return Err(invalid_document("'programs' must be an array"));
    }
    if !root.get("workouts").is_some_and(Value::is_object) {
        return Err(invalid_document("'workouts' must be an object"));
    }
    let mut doc: Document =
        serde_json::from_value(value).map_err(|e| invalid_document(e.to_string()))?;
    doc.normalize();
    Ok(doc)
}

impl<S: Storage> WorkoutStore<S> {
    /// Bundle one program with its workouts. `None` if it does not exist.
    pub fn export_program(&self, program_id: &str) -> Option<ProgramBundle> {
        ProgramBundle::from_document(self.document(), program_id)
    }

    /// Parse a bundle file and add its program under fresh ids.
    pub fn import_program(&mut self, json: &str) -> Result<ProgramId> {
        let bundle = ProgramBundle::parse(json)?;
        self.import_bundle(&bundle)
    }

    /// Add a bundled program under fresh program, workout, exercise and
    /// session ids.
    pub fn import_bundle(&mut self, bundle: &ProgramBundle) -> Result<ProgramId> {
        let id = self.apply("import_program", |doc, _| {
            let (program, workouts) = instantiate(bundle, doc);
            let id = program.id.clone();
            for workout in workouts {
                doc.workouts.insert(workout.id.clone(), workout);
            }
            doc.programs.push(program);
            id
        })?;
        tracing::info!(program = %id, name = %bundle.program.name, "imported program");
        Ok(id)
    }

    /// The whole document as pretty-printed JSON.
    pub fn export_data(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.document())?)
    }

    /// Replace the whole document with a backup. An invalid backup leaves
    /// the current document in place.
    pub fn import_data(&mut self, json: &str) -> Result<()> {
        let doc = parse_document(json)?;
        let programs = doc.programs.len();
        self.apply("import_data", move |current, _| *current = doc)?;
        tracing::info!(programs, "replaced document from backup");
        Ok(())
    }
}
