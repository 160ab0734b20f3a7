//! Domain model: programs, workouts, exercises, sessions and set results.
//!
//! The persisted form is a single [`Document`]: an ordered program list
//! plus a map of workouts keyed by id. Programs reference workouts by id;
//! workouts own their exercises and their session history.

pub mod bundle;
pub mod document;
pub mod ids;
pub mod input;
pub mod seed;
pub mod trend;

pub use bundle::{ProgramBundle, BUNDLE_KIND, BUNDLE_VERSION};
pub use document::{
    clamp_sets, Document, Exercise, Program, Session, SetResult, SetSlot, TargetReps, Workout,
    MAX_SETS, MIN_SETS,
};
pub use ids::{ExerciseId, ProgramId, SessionId, WorkoutId};
pub use input::{parse_reps, parse_weight, ExerciseSpec, RawSet, DEFAULT_SETS};
pub use seed::seed_document;
pub use trend::Trend;
