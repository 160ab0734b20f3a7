//! Configuration loading.
//!
//! Liftlog keeps its data and an optional `config.yml` in one data
//! directory:
//! - Schema definitions in [`schema`]
//! - Directory resolution and file loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use liftlog::config::{config_path, load_config};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(config_path(temp.path()), "lock_completed_sessions: true").unwrap();
//!
//! let config = load_config(&config_path(temp.path())).unwrap();
//! assert!(config.lock_completed_sessions);
//! assert!(!config.store_options().strict);
//! ```
//!
//! # Data Directory
//!
//! Resolved in this order:
//! 1. `--data-dir` flag
//! 2. `LIFTLOG_DATA_DIR` environment variable
//! 3. The platform's local data directory, plus `liftlog`

pub mod loader;
pub mod schema;

pub use loader::{
    config_path, default_data_dir, load_config, parse_config, resolve_data_dir, CONFIG_FILE_NAME,
    DATA_DIR_ENV,
};
pub use schema::LiftlogConfig;
