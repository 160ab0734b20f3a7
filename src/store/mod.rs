//! The workout store: owns the document and applies mutations to it.
//!
//! Every mutation follows the same cycle: clone the current document, apply
//! the change to the clone, persist the clone, then publish it as the new
//! snapshot. A failed write leaves the published snapshot untouched, and
//! snapshots handed out earlier stay valid because they are never mutated.
//!
//! # Unresolved references
//!
//! By default a mutation whose program, workout or exercise id does not
//! resolve is a silent no-op: nothing is written and `Ok` is returned.
//! Callers must not rely on observing such misses. A store opened with
//! [`StoreOptions::strict`] reports them as [`LiftlogError::NotFound`]
//! instead.
//!
//! # Example
//!
//! ```
//! use liftlog::model::{ExerciseSpec, RawSet};
//! use liftlog::storage::MemoryStorage;
//! use liftlog::store::WorkoutStore;
//!
//! let mut store = WorkoutStore::open(MemoryStorage::new()).unwrap();
//! let program = store.add_program("Upper/Lower").unwrap();
//! let workout = store.add_workout(program.as_str(), "Upper", "").unwrap().unwrap();
//! let bench = store
//!     .add_exercise(workout.as_str(), &ExerciseSpec::new("Bench").sets(3).reps(5, 8))
//!     .unwrap()
//!     .unwrap();
//! store
//!     .save_set_result(workout.as_str(), bench.as_str(), 0, &RawSet::new("100", "5"))
//!     .unwrap();
//!
//! let doc = store.snapshot();
//! assert_eq!(doc.workouts[workout.as_str()].sessions.len(), 1);
//! ```

mod exercises;
mod programs;
mod sessions;
mod transfer;

pub use transfer::BACKUP_FILE_NAME;

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::clock::{Clock, SystemClock};
use crate::error::{LiftlogError, Result};
use crate::model::{seed_document, Document, Exercise, Program, Workout};
use crate::storage::{Storage, STORAGE_KEY};

/// Behavior switches for a [`WorkoutStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Report unresolved ids and locked sessions as errors instead of
    /// ignoring them.
    pub strict: bool,
    /// Refuse set-level writes to today's session once it is complete.
    pub lock_completed_sessions: bool,
    /// Storage key holding the document.
    pub storage_key: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            strict: false,
            lock_completed_sessions: false,
            storage_key: STORAGE_KEY.to_string(),
        }
    }
}

/// Why a mutation could not apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Miss {
    NotFound { kind: &'static str, id: String },
    Locked { workout: String },
}

impl Miss {
    pub(crate) fn not_found(kind: &'static str, id: &str) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

impl fmt::Display for Miss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{} {} not found", kind, id),
            Self::Locked { workout } => write!(f, "today's session of {} is complete", workout),
        }
    }
}

impl From<Miss> for LiftlogError {
    fn from(miss: Miss) -> Self {
        match miss {
            Miss::NotFound { kind, id } => LiftlogError::NotFound { kind, id },
            Miss::Locked { workout } => LiftlogError::SessionLocked { workout },
        }
    }
}

/// Outcome of a mutator closure.
pub(crate) type Applied<T> = std::result::Result<T, Miss>;

pub(crate) fn find_program<'a>(doc: &'a mut Document, id: &str) -> Applied<&'a mut Program> {
    doc.program_mut(id).ok_or_else(|| Miss::not_found("Program", id))
}

pub(crate) fn find_workout<'a>(doc: &'a mut Document, id: &str) -> Applied<&'a mut Workout> {
    doc.workout_mut(id).ok_or_else(|| Miss::not_found("Workout", id))
}

pub(crate) fn find_exercise<'a>(workout: &'a mut Workout, id: &str) -> Applied<&'a mut Exercise> {
    workout
        .exercise_mut(id)
        .ok_or_else(|| Miss::not_found("Exercise", id))
}

/// Owns the current document and persists every change to it.
pub struct WorkoutStore<S: Storage> {
    storage: S,
    clock: Box<dyn Clock>,
    options: StoreOptions,
    doc: Arc<Document>,
}

impl<S: Storage> WorkoutStore<S> {
    /// Open with the system clock and default options.
    pub fn open(storage: S) -> Result<Self> {
        Self::open_with(storage, SystemClock, StoreOptions::default())
    }

    /// Load the document from `storage`, seeding a default one when the key
    /// is empty or holds something that does not parse.
    pub fn open_with(storage: S, clock: impl Clock + 'static, options: StoreOptions) -> Result<Self> {
        let raw = storage.get(&options.storage_key)?;
        let mut store = Self {
            storage,
            clock: Box::new(clock),
            options,
            doc: Arc::new(Document::default()),
        };

        let loaded = match raw {
            None => {
                tracing::info!(key = %store.options.storage_key, "no stored data, seeding defaults");
                None
            }
            Some(raw) => match serde_json::from_str::<Document>(&raw) {
                Ok(doc) => Some(doc),
                Err(e) => {
                    tracing::warn!(
                        key = %store.options.storage_key,
                        error = %e,
                        "stored data is unreadable, replacing with defaults"
                    );
                    None
                }
            },
        };

        match loaded {
            Some(doc) => store.doc = Arc::new(doc),
            None => {
                let seeded = seed_document();
                store.persist(&seeded)?;
                store.doc = Arc::new(seeded);
            }
        }
        Ok(store)
    }

    /// The current document. Cheap to clone and unaffected by later mutations.
    pub fn snapshot(&self) -> Arc<Document> {
        Arc::clone(&self.doc)
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    fn persist(&mut self, doc: &Document) -> Result<()> {
        let json = serde_json::to_string(doc)?;
        self.storage.set(&self.options.storage_key, &json)
    }

    /// Replace the document wholesale.
    fn publish(&mut self, doc: Document) -> Result<()> {
        self.persist(&doc)?;
        self.doc = Arc::new(doc);
        Ok(())
    }

    /// Run a mutation that cannot miss and publish the result.
    pub(crate) fn apply<T>(
        &mut self,
        op: &'static str,
        mutator: impl FnOnce(&mut Document, DateTime<Utc>) -> T,
    ) -> Result<T> {
        let now = self.clock.now();
        let mut draft = Document::clone(&self.doc);
        let value = mutator(&mut draft, now);
        self.publish(draft)?;
        tracing::debug!(op, "mutation applied");
        Ok(value)
    }

    /// Run `mutator` against a copy of the document and publish the result.
    ///
    /// Returns `Ok(None)` when the mutator reports a miss in permissive mode;
    /// the document and storage are then untouched.
    pub(crate) fn update<T>(
        &mut self,
        op: &'static str,
        mutator: impl FnOnce(&mut Document, DateTime<Utc>) -> Applied<T>,
    ) -> Result<Option<T>> {
        let now = self.clock.now();
        let mut draft = Document::clone(&self.doc);

        match mutator(&mut draft, now) {
            Ok(value) => {
                self.publish(draft)?;
                tracing::debug!(op, "mutation applied");
                Ok(Some(value))
            }
            Err(miss) if self.options.strict => {
                tracing::debug!(op, %miss, "mutation rejected");
                Err(miss.into())
            }
            Err(miss) => {
                tracing::debug!(op, %miss, "mutation ignored");
                Ok(None)
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::clock::FixedClock;
    use crate::storage::MemoryStorage;

    #[test]
    fn open_empty_storage_seeds_and_persists() {
        let (store, _) = store();
        assert_eq!(store.document().programs.len(), 1);
        assert_eq!(persisted(&store), *store.document());
    }

    #[test]
    fn open_corrupt_storage_reseeds() {
        let storage = MemoryStorage::with_value(STORAGE_KEY, "{not json");
        let store = WorkoutStore::open(storage).unwrap();
        assert_eq!(store.document().programs[0].name, "Base Strength");
        assert_eq!(persisted(&store), *store.document());
    }

    #[test]
    fn open_wrong_shape_reseeds() {
        let storage = MemoryStorage::with_value(STORAGE_KEY, r#"{"programs": 3}"#);
        let store = WorkoutStore::open(storage).unwrap();
        assert_eq!(store.document().workouts.len(), 2);
    }

    #[test]
    fn open_existing_document_keeps_it() {
        let raw = r#"{"programs":[{"id":"p1","name":"Mine","workouts":[]}],"workouts":{}}"#;
        let storage = MemoryStorage::with_value(STORAGE_KEY, raw);
        let store = WorkoutStore::open(storage).unwrap();
        assert_eq!(store.document().programs[0].name, "Mine");
        assert!(store.document().workouts.is_empty());
    }

    #[test]
    fn custom_storage_key() {
        let options = StoreOptions {
            storage_key: "other".into(),
            ..Default::default()
        };
        let store =
            WorkoutStore::open_with(MemoryStorage::new(), FixedClock::new(morning(1)), options).unwrap();
        assert!(store.storage().raw("other").is_some());
        assert!(store.storage().raw(STORAGE_KEY).is_none());
    }

    #[test]
    fn old_snapshot_survives_mutation() {
        let (mut store, _) = store();
        let before = store.snapshot();
        store.add_program("Second").unwrap();
        assert_eq!(before.programs.len(), 1);
        assert_eq!(store.snapshot().programs.len(), 2);
    }

    #[test]
    fn failed_write_keeps_snapshot() {
        let (mut store, _) = store();
        store.storage.set_read_only(true);
        let err = store.add_program("Doomed").unwrap_err();
        assert!(matches!(err, LiftlogError::Storage { .. }));
        assert_eq!(store.document().programs.len(), 1);
    }

    #[test]
    fn permissive_miss_writes_nothing() {
        let (mut store, _) = store();
        store.storage.set_read_only(true);
        store.rename_program("missing", "x").unwrap();
    }

    #[test]
    fn strict_miss_is_an_error() {
        let (mut store, _) = store_with(StoreOptions {
            strict: true,
            ..Default::default()
        });
        let err = store.rename_program("missing", "x").unwrap_err();
        assert_eq!(err.to_string(), "Program not found: missing");
    }
}
