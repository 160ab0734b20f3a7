//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.
//!
//! Programs, workouts and exercises are referenced by id or by name.
//! Set numbers start at 1.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Liftlog - Track strength programs, workouts and logged sets.
#[derive(Debug, Parser)]
#[command(name = "liftlog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the data file and config.yml
    #[arg(long, global = true, env = "LIFTLOG_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Path to config file (overrides <DATA_DIR>/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Fail on unknown ids and locked sessions instead of ignoring them
    #[arg(long, global = true)]
    pub strict: bool,

    /// Show notes and completion times
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List programs and their workouts
    Programs,

    /// Add, rename, delete, export or import a program
    Program(ProgramArgs),

    /// Add, edit, delete or show a workout
    Workout(WorkoutArgs),

    /// Manage the exercises of a workout
    Exercise(ExerciseArgs),

    /// Log sets in today's session
    Log(LogArgs),

    /// Show past sessions of a workout
    History(HistoryArgs),

    /// Write a backup of all data
    Export(ExportArgs),

    /// Replace all data with a backup
    Import(ImportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `program` command.
#[derive(Debug, Clone, Args)]
pub struct ProgramArgs {
    #[command(subcommand)]
    pub command: ProgramSubcommand,
}

/// Program subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ProgramSubcommand {
    /// Create an empty program.
    Add {
        /// Program name.
        name: String,
    },
    /// Rename a program.
    Rename {
        /// Program id or name.
        program: String,
        /// New name.
        name: String,
    },
    /// Delete a program and all of its workouts.
    Delete {
        /// Program id or name.
        program: String,
    },
    /// Export a program and its workouts to a bundle file.
    Export {
        /// Program id or name.
        program: String,
        /// Output file, `-` for stdout (default: swt-<name>.json).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Import a program bundle as a new program.
    Import {
        /// Bundle file.
        file: PathBuf,
    },
}

/// Arguments for the `workout` command.
#[derive(Debug, Clone, Args)]
pub struct WorkoutArgs {
    #[command(subcommand)]
    pub command: WorkoutSubcommand,
}

/// Workout subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum WorkoutSubcommand {
    /// Add a workout to a program.
    Add {
        /// Program id or name.
        program: String,
        /// Workout name.
        name: String,
        /// Free-text label.
        #[arg(short, long, default_value = "")]
        label: String,
    },
    /// Change a workout's name or label.
    Edit {
        /// Workout id or name.
        workout: String,
        /// New name.
        #[arg(short, long)]
        name: Option<String>,
        /// New label.
        #[arg(short, long)]
        label: Option<String>,
    },
    /// Delete a workout and its history.
    Delete {
        /// Workout id or name.
        workout: String,
    },
    /// Show exercises with today's and the previous session's sets.
    Show {
        /// Workout id or name.
        workout: String,
    },
}

/// Arguments for the `exercise` command.
#[derive(Debug, Clone, Args)]
pub struct ExerciseArgs {
    #[command(subcommand)]
    pub command: ExerciseSubcommand,
}

/// Exercise fields shared by `add` and `edit`.
#[derive(Debug, Clone, Default, Args)]
pub struct ExerciseFields {
    /// Number of sets (1-20).
    #[arg(short, long)]
    pub sets: Option<u32>,
    /// Minimum target reps.
    #[arg(long)]
    pub min: Option<u32>,
    /// Maximum target reps.
    #[arg(long)]
    pub max: Option<u32>,
    /// Notes.
    #[arg(short, long)]
    pub notes: Option<String>,
}

/// Exercise subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ExerciseSubcommand {
    /// Add an exercise to a workout.
    Add {
        /// Workout id or name.
        workout: String,
        /// Exercise name.
        name: String,
        #[command(flatten)]
        fields: ExerciseFields,
    },
    /// Change an exercise. Omitted fields keep their current values.
    Edit {
        /// Workout id or name.
        workout: String,
        /// Exercise id or name.
        exercise: String,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        fields: ExerciseFields,
    },
    /// Delete an exercise and its logged results.
    Delete {
        /// Workout id or name.
        workout: String,
        /// Exercise id or name.
        exercise: String,
    },
    /// Add or remove sets.
    Sets {
        /// Workout id or name.
        workout: String,
        /// Exercise id or name.
        exercise: String,
        /// Change in set count.
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        delta: i64,
    },
    /// Remove one set, dropping its result from today's session.
    RemoveSet {
        /// Workout id or name.
        workout: String,
        /// Exercise id or name.
        exercise: String,
        /// Set number.
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        set: u32,
    },
    /// Clear logged results for today, or for every session with --all.
    Clear {
        /// Workout id or name.
        workout: String,
        /// Exercise id or name.
        exercise: String,
        /// Clear past sessions too.
        #[arg(long)]
        all: bool,
    },
}

/// Arguments for the `log` command.
#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    #[command(subcommand)]
    pub command: LogSubcommand,
}

/// Log subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum LogSubcommand {
    /// Record a set. Use `-` for a skipped weight or rep count.
    Set {
        /// Workout id or name.
        workout: String,
        /// Exercise id or name.
        exercise: String,
        /// Set number.
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        set: u32,
        /// Weight.
        #[arg(allow_hyphen_values = true)]
        weight: String,
        /// Reps.
        #[arg(allow_hyphen_values = true)]
        reps: String,
    },
    /// Clear a logged set.
    Clear {
        /// Workout id or name.
        workout: String,
        /// Exercise id or name.
        exercise: String,
        /// Set number.
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        set: u32,
    },
    /// Mark the exercise's unlogged sets as skipped.
    SkipRest {
        /// Workout id or name.
        workout: String,
        /// Exercise id or name.
        exercise: String,
    },
    /// Complete today's session.
    Complete {
        /// Workout id or name.
        workout: String,
    },
}

/// Arguments for the `history` command.
#[derive(Debug, Clone, Default, Args)]
pub struct HistoryArgs {
    /// Workout id or name.
    pub workout: String,

    /// Number of sessions to show
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for the `export` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ExportArgs {
    /// Output file, `-` for stdout (default: simple-workout-tracker-backup.json)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the `import` command.
#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    /// Backup file to restore
    pub file: PathBuf,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_log_set_with_skip_markers() {
        let cli = Cli::try_parse_from(["liftlog", "log", "set", "Day 1", "Bench Press", "2", "-", "-"])
            .unwrap();
        match cli.command {
            Commands::Log(LogArgs {
                command: LogSubcommand::Set { set, weight, reps, .. },
            }) => {
                assert_eq!(set, 2);
                assert_eq!(weight, "-");
                assert_eq!(reps, "-");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn set_numbers_start_at_one() {
        assert!(Cli::try_parse_from(["liftlog", "log", "clear", "w", "e", "0"]).is_err());
    }

    #[test]
    fn sets_delta_accepts_negative() {
        let cli =
            Cli::try_parse_from(["liftlog", "exercise", "sets", "w", "e", "--delta", "-2"]).unwrap();
        match cli.command {
            Commands::Exercise(ExerciseArgs {
                command: ExerciseSubcommand::Sets { delta, .. },
            }) => assert_eq!(delta, -2),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["liftlog", "programs", "--strict", "--data-dir", "/tmp/x"])
            .unwrap();
        assert!(cli.strict);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
    }
}
