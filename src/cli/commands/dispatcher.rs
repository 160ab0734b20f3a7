//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`DataContext`] for opening the store a command works on
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::clock::SystemClock;
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::storage::FileStorage;
use crate::store::{StoreOptions, WorkoutStore};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Where a command finds its data.
#[derive(Debug, Clone)]
pub struct DataContext {
    data_dir: PathBuf,
    options: StoreOptions,
}

impl DataContext {
    pub fn new(data_dir: impl Into<PathBuf>, options: StoreOptions) -> Self {
        Self {
            data_dir: data_dir.into(),
            options,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Open the file-backed store on the system clock.
    pub fn open_store(&self) -> Result<WorkoutStore<FileStorage>> {
        WorkoutStore::open_with(
            FileStorage::new(&self.data_dir),
            SystemClock,
            self.options.clone(),
        )
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: DataContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher over the given data.
    pub fn new(context: DataContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &DataContext {
        &self.context
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = &self.context;
        match &cli.command {
            Commands::Programs => super::programs::ProgramsCommand::new(ctx).execute(ui),
            Commands::Program(args) => {
                super::programs::ProgramCommand::new(ctx, args.clone()).execute(ui)
            }
            Commands::Workout(args) => {
                super::workout::WorkoutCommand::new(ctx, args.clone()).execute(ui)
            }
            Commands::Exercise(args) => {
                super::exercise::ExerciseCommand::new(ctx, args.clone()).execute(ui)
            }
            Commands::Log(args) => super::log::LogCommand::new(ctx, args.clone()).execute(ui),
            Commands::History(args) => {
                super::history::HistoryCommand::new(ctx, args.clone()).execute(ui)
            }
            Commands::Export(args) => {
                super::transfer::ExportCommand::new(ctx, args.clone()).execute(ui)
            }
            Commands::Import(args) => {
                super::transfer::ImportCommand::new(ctx, args.clone()).execute(ui)
            }
            Commands::Completions(args) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
        }
    }
}
