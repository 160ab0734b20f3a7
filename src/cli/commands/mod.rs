//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command opens the store
//! through a shared [`DataContext`], so the data directory and store
//! options are decided once in `main`.
//!
//! References to programs, workouts and exercises are resolved in
//! [`lookup`] before any mutation runs.

pub mod completions;
pub mod dispatcher;
pub mod exercise;
pub mod history;
pub mod log;
pub mod lookup;
pub mod programs;
pub mod transfer;
pub mod workout;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, DataContext};
