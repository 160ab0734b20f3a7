//! Liftlog - Strength program tracking with per-set session logging.
//!
//! Liftlog keeps training programs, their workouts and exercises, and one
//! logged session per workout per calendar day. Everything lives in a
//! single JSON document that is rewritten after every change.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`clock`] - Injectable time source
//! - [`config`] - Data directory and `config.yml` loading
//! - [`error`] - Error types and result aliases
//! - [`model`] - The document, its entities and input parsing
//! - [`storage`] - Key-value persistence backends
//! - [`store`] - The workout store and all mutations
//! - [`ui`] - Terminal output and formatting
//!
//! # Example
//!
//! ```
//! use liftlog::model::RawSet;
//! use liftlog::storage::MemoryStorage;
//! use liftlog::store::WorkoutStore;
//!
//! // A fresh store starts with the seeded "Base Strength" program.
//! let mut store = WorkoutStore::open(MemoryStorage::new()).unwrap();
//! let doc = store.snapshot();
//! let day1 = doc.program_workouts(&doc.programs[0]).next().unwrap();
//!
//! store
//!     .save_set_result(day1.id.as_str(), day1.exercises[0].id.as_str(), 0, &RawSet::new("60", "8"))
//!     .unwrap();
//! assert_eq!(store.document().workouts[day1.id.as_str()].sessions.len(), 1);
//! ```
//!
//! For the file-backed CLI flow, see the integration tests.

pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod model;
pub mod storage;
pub mod store;
pub mod ui;

pub use error::{LiftlogError, Result};
